use crate::cli::{UsersCommand, UsersSubcommand};
use crate::commands::{api_failure, confirm, print_json, CommandContext};
use crate::error::UserdeskError;

use common::{NewUser, UserUpdate};

use log::{debug, info};

/// Dispatch a `users` subcommand.
pub async fn run(ctx: &CommandContext, command: UsersCommand) -> Result<(), UserdeskError> {
    match command.command {
        UsersSubcommand::List => list(ctx).await,
        UsersSubcommand::Get { id } => get(ctx, id).await,
        UsersSubcommand::Create {
            username,
            email,
            password,
        } => create(ctx, username, email, password).await,
        UsersSubcommand::Update {
            id,
            username,
            email,
        } => update(ctx, id, username, email).await,
        UsersSubcommand::Delete { id, yes } => delete(ctx, id, yes).await,
    }
}

async fn list(ctx: &CommandContext) -> Result<(), UserdeskError> {
    debug!("Listing users");

    let users = ctx
        .client
        .list_users()
        .await
        .map_err(|e| api_failure(ctx, "list users", e))?;

    info!("Listed {} users", users.len());
    print_json(&users)
}

async fn get(ctx: &CommandContext, id: u64) -> Result<(), UserdeskError> {
    debug!("Fetching user {id}");

    let user = ctx
        .client
        .get_user(id)
        .await
        .map_err(|e| api_failure(ctx, "fetch user", e))?;

    print_json(&user)
}

async fn create(
    ctx: &CommandContext,
    username: String,
    email: String,
    password: String,
) -> Result<(), UserdeskError> {
    info!("Creating user '{username}'");

    let new_user = NewUser {
        username,
        email,
        password,
    };

    let user = ctx
        .client
        .create_user(&new_user)
        .await
        .map_err(|e| api_failure(ctx, "create user", e))?;

    print_json(&user)
}

async fn update(
    ctx: &CommandContext,
    id: u64,
    username: String,
    email: String,
) -> Result<(), UserdeskError> {
    info!("Updating user {id}");

    let update = UserUpdate { username, email };

    let user = ctx
        .client
        .update_user(id, &update)
        .await
        .map_err(|e| api_failure(ctx, "update user", e))?;

    print_json(&user)
}

async fn delete(ctx: &CommandContext, id: u64, yes: bool) -> Result<(), UserdeskError> {
    if !yes && !confirm(&format!("Delete user {id}?"))? {
        println!("Aborted.");
        return Ok(());
    }

    info!("Deleting user {id}");

    ctx.client
        .delete_user(id)
        .await
        .map_err(|e| api_failure(ctx, "delete user", e))?;

    println!("Deleted user {id}.");

    Ok(())
}
