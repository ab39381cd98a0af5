use crate::cli::{ConfigCommand, ConfigSubcommand};
use crate::commands::{print_json, CommandContext};
use crate::error::UserdeskError;

use common::ErrorLocation;

use log::{error, info};

/// Dispatch a `config` subcommand.
pub fn run(ctx: &CommandContext, command: ConfigCommand) -> Result<(), UserdeskError> {
    match command.command {
        ConfigSubcommand::Show => print_json(&ctx.config),
        ConfigSubcommand::SetUrl { url } => set_url(ctx, url),
        ConfigSubcommand::SetTimeout { seconds } => set_timeout(ctx, seconds),
    }
}

/// Point the CLI at a different server and persist the choice.
///
/// `save` validates before writing, so a URL the client could never use is
/// rejected here instead of breaking every later command.
fn set_url(ctx: &CommandContext, url: String) -> Result<(), UserdeskError> {
    let mut config = ctx.config.clone();
    config.api.base_url = url;

    config.save(&ctx.paths.config_dir).map_err(|e| {
        error!("Failed to save config: {e}");
        UserdeskError::Core {
            message: e.to_string(),
            location: ErrorLocation::caller(),
        }
    })?;

    info!("API base URL changed to {}", config.api.base_url);
    println!("API base URL set to {}", config.api.base_url);

    Ok(())
}

fn set_timeout(ctx: &CommandContext, seconds: u64) -> Result<(), UserdeskError> {
    let mut config = ctx.config.clone();
    config.api.timeout_secs = seconds;

    config.save(&ctx.paths.config_dir).map_err(|e| {
        error!("Failed to save config: {e}");
        UserdeskError::Core {
            message: e.to_string(),
            location: ErrorLocation::caller(),
        }
    })?;

    info!("Request timeout changed to {seconds}s");
    println!("Request timeout set to {seconds}s");

    Ok(())
}
