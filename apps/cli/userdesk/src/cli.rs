//! Command-line surface, parsed with clap.

use clap::{Args, Parser, Subcommand};

/// Userdesk CLI - terminal client for the userdesk user-management API
#[derive(Parser, Debug)]
#[command(name = "userdesk")]
#[command(version)]
#[command(about = "Manage userdesk accounts and users from the terminal", long_about = None)]
pub struct Cli {
    /// API base URL including the API prefix (e.g., http://127.0.0.1:3000/api/users)
    #[arg(long, env = "USERDESK_BASE_URL")]
    pub base_url: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "USERDESK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Log in and store the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "USERDESK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Discard the stored session
    Logout,
    /// Show session and configuration state
    Status,
    /// Manage users
    Users(UsersCommand),
    /// Inspect or change configuration
    Config(ConfigCommand),
}

#[derive(Args, Debug)]
pub struct UsersCommand {
    #[command(subcommand)]
    pub command: UsersSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UsersSubcommand {
    /// List all users
    List,
    /// Show one user
    Get { id: u64 },
    /// Create a user
    Create {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Update a user's username and email
    Update {
        id: u64,
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
    },
    /// Delete a user
    Delete {
        id: u64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print the active configuration
    Show,
    /// Set the API base URL
    SetUrl { url: String },
    /// Set the request timeout in seconds
    SetTimeout { seconds: u64 },
}
