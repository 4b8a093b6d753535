//! Infrastructure layer for copilot-orchestra-mcp
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, the MCP stdio server, and configuration
//! file loading.

pub mod config;
pub mod logging;
pub mod mcp;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigSource, ConfigValidationError, FileConfig};
pub use logging::JsonlDecisionLogger;
pub use mcp::{Implementation, McpError, McpServer, StdioTransport};
