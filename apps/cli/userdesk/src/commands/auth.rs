use crate::commands::CommandContext;
use crate::error::UserdeskError;

use common::{ErrorLocation, LoginCredentials, NewUser};

use log::{error, info};

/// Create an account on the server.
///
/// Registration does not sign in: the server's register response carries no
/// token, so the stored session (if any) is left alone.
pub async fn register(
    ctx: &CommandContext,
    username: String,
    email: String,
    password: String,
) -> Result<(), UserdeskError> {
    info!("Registering account '{username}'");

    let new_user = NewUser {
        username,
        email,
        password,
    };

    let user = ctx.client.register(&new_user).await.map_err(|e| {
        error!("Registration failed: {e}");
        UserdeskError::Core {
            message: e.message(),
            location: ErrorLocation::caller(),
        }
    })?;

    println!("Registered {} (id {})", user.username, user.id);
    println!("Run `userdesk login` to sign in.");

    Ok(())
}

/// Sign in and persist the session token.
///
/// The client stores the token on success; a rejected password surfaces as
/// an error and leaves any existing session untouched.
pub async fn login(
    ctx: &CommandContext,
    email: String,
    password: String,
) -> Result<(), UserdeskError> {
    info!("Logging in as '{email}'");

    let credentials = LoginCredentials { email, password };

    let login = ctx.client.login(&credentials).await.map_err(|e| {
        error!("Login failed: {e}");
        UserdeskError::Core {
            message: e.message(),
            location: ErrorLocation::caller(),
        }
    })?;

    if login.token.is_empty() {
        println!(
            "Signed in as {}, but the server issued no session token.",
            login.data.username
        );
    } else {
        println!("Signed in as {} (id {})", login.data.username, login.data.id);
    }

    Ok(())
}

/// End the local session.
pub fn logout(ctx: &CommandContext) -> Result<(), UserdeskError> {
    let was_authenticated = ctx.client.is_authenticated();

    ctx.client.logout().map_err(|e| {
        error!("Logout failed: {e}");
        UserdeskError::Core {
            message: e.to_string(),
            location: ErrorLocation::caller(),
        }
    })?;

    if was_authenticated {
        info!("Session cleared");
        println!("Signed out.");
    } else {
        println!("No active session.");
    }

    Ok(())
}

/// Show the session and connection state.
pub fn status(ctx: &CommandContext) -> Result<(), UserdeskError> {
    let authenticated = ctx.client.is_authenticated();

    println!(
        "Signed in:    {}",
        if authenticated { "yes" } else { "no" }
    );
    if let Some(token) = ctx.client.session().token() {
        println!("Token:        {token} ({} bytes)", token.len());
    }
    println!("Session file: {}", ctx.paths.session_file.display());
    println!("Paths from:   {}", ctx.paths.source);
    println!("API base URL: {}", ctx.client.base_url());
    println!("Timeout:      {}s", ctx.config.api.timeout_secs);

    Ok(())
}
