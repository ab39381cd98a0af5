mod helpers;

mod auth;
mod errors;
mod users;
