//! Command handlers for the userdesk CLI.
//!
//! Each submodule owns one verb group. Handlers print results to stdout,
//! log to the configured logger, and flatten failures into
//! [`UserdeskError`](crate::error::UserdeskError) for `main` to display.

pub mod auth;
pub mod config;
pub mod users;

use crate::error::UserdeskError;

use client_core::config::AppConfig;
use client_core::error::ApiError;
use client_core::session::UserdeskPaths;
use client_core::UserdeskClient;

use common::ErrorLocation;

use std::io::{self, Write};

use log::{error, warn};
use serde::Serialize;

/// Everything a command handler needs to do its work.
///
/// Built once in `main` after the CLI arguments, config file, and session
/// paths have been resolved, then lent to each handler.
pub struct CommandContext {
    pub client: UserdeskClient,
    pub config: AppConfig,
    pub paths: UserdeskPaths,
}

/// Map an API failure into the CLI error, ending the local session when the
/// server rejected the stored credential.
///
/// A 401/403 on a resource operation means the token is stale; keeping it
/// would make every following command fail the same way. Login and register
/// failures do not route through here - a wrong password must not destroy an
/// existing session.
#[track_caller]
pub fn api_failure(ctx: &CommandContext, action: &str, e: ApiError) -> UserdeskError {
    error!("Failed to {action}: {e}");

    if e.is_auth_failure() {
        match ctx.client.logout() {
            Ok(()) => {
                eprintln!("Session rejected by the server; signed out. Run `userdesk login` to sign in again.");
            }
            Err(clear_error) => {
                warn!("Could not clear rejected session: {clear_error}");
            }
        }
    }

    UserdeskError::Core {
        message: e.message(),
        location: ErrorLocation::caller(),
    }
}

/// Ask the user a yes/no question on the terminal. Defaults to no.
pub fn confirm(prompt: &str) -> Result<bool, UserdeskError> {
    print!("{prompt} [y/N] ");
    io::stdout()
        .flush()
        .map_err(|e| UserdeskError::userdesk(format!("Failed to write prompt: {e}")))?;

    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .map_err(|e| UserdeskError::userdesk(format!("Failed to read confirmation: {e}")))?;

    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Render a value as pretty JSON on stdout.
///
/// Stdout carries only data so command output can be piped into `jq` and
/// friends; everything else goes to stderr or the log file.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), UserdeskError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| UserdeskError::userdesk(format!("Failed to render output: {e}")))?;
    println!("{rendered}");
    Ok(())
}
