// Exposed as a library so the integration tests can drive the command
// handlers directly; main.rs pulls from the same modules.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;
