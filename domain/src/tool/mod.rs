//! Tool domain module
//!
//! Transport-neutral shapes of the tool surface:
//!
//! - [`ToolDescriptor`]: `{ name, description, inputSchema }` listing entry
//! - [`ToolCall`]: an inbound invocation (tool name + raw arguments)

pub mod entities;

pub use entities::{ToolCall, ToolDescriptor};
