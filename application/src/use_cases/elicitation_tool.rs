//! The seam a tool plugs into the dispatcher through.
//!
//! A tool is exactly two functions: a listing descriptor and a handler.
//! Handlers are synchronous and stateless; every call stands alone.

use orchestra_domain::{ElicitationError, ToolDescriptor, ToolResponse};
use serde_json::Value;

/// An elicitation tool that can be listed and invoked.
pub trait ElicitationTool: Send + Sync {
    /// Listing entry (`name`, `description`, `inputSchema`).
    fn descriptor(&self) -> ToolDescriptor;

    /// Validate `arguments`, map the decision and build the response.
    fn handle(&self, arguments: &Value) -> Result<ToolResponse, ElicitationError>;

    /// Wire name; defaults to the descriptor's name.
    fn name(&self) -> String {
        self.descriptor().name
    }
}
