//! Error types for the MCP server

use thiserror::Error;

/// Result type alias for MCP server operations
pub type Result<T> = std::result::Result<T, McpError>;

/// Errors that end the serve loop.
///
/// Per-request failures (bad params, validation errors, unknown tools) are
/// answered with JSON-RPC error responses and never surface here.
#[derive(Error, Debug)]
pub enum McpError {
    #[error("Transport I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Message exceeds maximum size of {limit} bytes")]
    MessageTooLarge { limit: usize },
}
