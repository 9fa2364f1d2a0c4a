//! Command-line parsing and per-command handlers.

pub mod commands;
pub mod parser;
