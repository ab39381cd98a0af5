mod client;
mod error;
mod session;
