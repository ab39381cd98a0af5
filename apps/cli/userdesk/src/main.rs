use userdesk::cli::{Cli, Command, ConfigCommand, ConfigSubcommand};
use userdesk::commands::{self, CommandContext};
use userdesk::error::UserdeskError;
use userdesk::logger::initialize as LoggerInitialize;

use client_core::config::AppConfig;
use client_core::session::{detect_userdesk_paths, UserdeskPaths};
use client_core::{SessionStore, UserdeskClient};

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::process::exit;
use std::time::Duration;

use clap::Parser;
use log::{info, warn};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e.message());
        exit(1);
    }
}

async fn run() -> Result<(), UserdeskError> {
    // A .env file is a development convenience; absence is not an error.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let paths = detect_userdesk_paths().map_err(|e| UserdeskError::Core {
        message: e.to_string(),
        location: ErrorLocation::caller(),
    })?;

    // Ensure the data directory exists before the logger opens its file there
    create_dir_all(&paths.data_dir)
        .map_err(|e| UserdeskError::userdesk(format!("Failed to create data directory: {e}")))?;

    // Initialize logger FIRST
    LoggerInitialize(&paths.data_dir, cli.verbose)?;

    info!("userdesk starting");
    info!(
        "Data directory: {} ({})",
        paths.data_dir.display(),
        paths.source
    );

    let config = load_config(&cli, &paths)?;
    let client = build_client(&cli, &config, &paths)?;

    let ctx = CommandContext {
        client,
        config,
        paths,
    };

    match cli.command {
        Command::Register {
            username,
            email,
            password,
        } => commands::auth::register(&ctx, username, email, password).await,
        Command::Login { email, password } => commands::auth::login(&ctx, email, password).await,
        Command::Logout => commands::auth::logout(&ctx),
        Command::Status => commands::auth::status(&ctx),
        Command::Users(command) => commands::users::run(&ctx, command).await,
        Command::Config(command) => commands::config::run(&ctx, command),
    }
}

/// Load the config file, resolving against the command being run.
///
/// A config-writing command falls back to defaults when the file is
/// unusable - otherwise a corrupt file could never be repaired with
/// `userdesk config set-url`. Every other command refuses to run on a
/// config it cannot trust.
fn load_config(cli: &Cli, paths: &UserdeskPaths) -> Result<AppConfig, UserdeskError> {
    let writing_config = matches!(
        cli.command,
        Command::Config(ConfigCommand {
            command: ConfigSubcommand::SetUrl { .. } | ConfigSubcommand::SetTimeout { .. },
        })
    );

    match AppConfig::load(&paths.config_dir) {
        Ok(config) => Ok(config),
        Err(e) if writing_config => {
            warn!("Ignoring unusable config for a config-writing command: {e}");
            Ok(AppConfig::default())
        }
        Err(e) => Err(UserdeskError::Core {
            message: e.to_string(),
            location: ErrorLocation::caller(),
        }),
    }
}

/// Build the API client from config, then apply command-line overrides.
fn build_client(
    cli: &Cli,
    config: &AppConfig,
    paths: &UserdeskPaths,
) -> Result<UserdeskClient, UserdeskError> {
    let session = SessionStore::file_at(&paths.session_file);

    let mut builder = UserdeskClient::builder().from_config(config).session(session);

    if let Some(base_url) = &cli.base_url {
        builder = builder.base_url(base_url);
    }
    if let Some(timeout) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(timeout));
    }

    builder.build().map_err(|e| {
        warn!("Failed to build API client: {e}");
        UserdeskError::Core {
            message: e.message(),
            location: ErrorLocation::caller(),
        }
    })
}
