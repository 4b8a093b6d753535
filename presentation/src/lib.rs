//! Presentation layer for copilot-orchestra-mcp
//!
//! This crate contains the CLI definition and the console formatter used
//! by `--list-tools`.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
