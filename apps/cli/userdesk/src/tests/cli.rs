// Unit tests for the clap command surface
// Tests parse real argv vectors; no network or filesystem involved

use crate::cli::{Cli, Command, ConfigCommand, ConfigSubcommand, UsersCommand, UsersSubcommand};

use clap::{CommandFactory, Parser};

/// **VALUE**: Runs clap's own consistency check over the whole command tree.
///
/// **WHY THIS MATTERS**: clap validates argument definitions lazily, at parse
/// time. A conflicting flag or broken subcommand would otherwise only show up
/// when a user happens to hit that path.
///
/// **BUG THIS CATCHES**: Would catch duplicated short flags, required args
/// with defaults, or a subcommand that can never be reached.
#[test]
fn given_cli_definition_when_debug_asserted_then_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn given_users_list_args_when_parsed_then_yields_list_subcommand() {
    let cli = Cli::try_parse_from(["userdesk", "users", "list"]).unwrap();

    assert!(matches!(
        cli.command,
        Command::Users(UsersCommand {
            command: UsersSubcommand::List
        })
    ));
}

#[test]
fn given_delete_with_yes_flag_when_parsed_then_skip_confirmation_is_set() {
    let cli = Cli::try_parse_from(["userdesk", "users", "delete", "7", "--yes"]).unwrap();

    match cli.command {
        Command::Users(UsersCommand {
            command: UsersSubcommand::Delete { id, yes },
        }) => {
            assert_eq!(id, 7);
            assert!(yes, "--yes should skip the confirmation prompt");
        }
        other => panic!("Expected users delete, got {other:?}"),
    }
}

#[test]
fn given_register_flags_when_parsed_then_all_fields_are_captured() {
    let cli = Cli::try_parse_from([
        "userdesk",
        "register",
        "--username",
        "amy",
        "--email",
        "amy@example.com",
        "--password",
        "hunter2",
    ])
    .unwrap();

    match cli.command {
        Command::Register {
            username,
            email,
            password,
        } => {
            assert_eq!(username, "amy");
            assert_eq!(email, "amy@example.com");
            assert_eq!(password, "hunter2");
        }
        other => panic!("Expected register, got {other:?}"),
    }
}

#[test]
fn given_global_flags_before_subcommand_when_parsed_then_overrides_are_captured() {
    let cli = Cli::try_parse_from([
        "userdesk",
        "--verbose",
        "--base-url",
        "http://localhost:9999/api/users",
        "--timeout",
        "5",
        "status",
    ])
    .unwrap();

    assert!(cli.verbose);
    assert_eq!(
        cli.base_url.as_deref(),
        Some("http://localhost:9999/api/users")
    );
    assert_eq!(cli.timeout, Some(5));
    assert!(matches!(cli.command, Command::Status));
}

#[test]
fn given_update_without_email_flag_when_parsed_then_errors() {
    let result = Cli::try_parse_from(["userdesk", "users", "update", "5", "--username", "amy"]);

    assert!(result.is_err(), "--email is required for update");
}

#[test]
fn given_non_numeric_user_id_when_parsed_then_errors() {
    let result = Cli::try_parse_from(["userdesk", "users", "get", "abc"]);

    assert!(result.is_err(), "User ids are numeric");
}

#[test]
fn given_config_set_timeout_when_parsed_then_seconds_are_captured() {
    let cli = Cli::try_parse_from(["userdesk", "config", "set-timeout", "45"]).unwrap();

    assert!(matches!(
        cli.command,
        Command::Config(ConfigCommand {
            command: ConfigSubcommand::SetTimeout { seconds: 45 }
        })
    ));
}
