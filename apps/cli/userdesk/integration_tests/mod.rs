// Integration tests for the userdesk CLI command handlers
// Exercises real command flows against a mock HTTP server

mod commands;
