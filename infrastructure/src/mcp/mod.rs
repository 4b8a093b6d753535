//! MCP stdio server
//!
//! Speaks the JSON-RPC 2.0 subset of the Model Context Protocol a tool
//! server needs (`initialize`, `ping`, `tools/list`, `tools/call`) over
//! newline-delimited stdin/stdout.

pub mod error;
pub mod protocol;
pub mod server;
pub mod transport;

pub use error::{McpError, Result};
pub use protocol::Implementation;
pub use server::McpServer;
pub use transport::{DEFAULT_MAX_MESSAGE_BYTES, StdioTransport};
