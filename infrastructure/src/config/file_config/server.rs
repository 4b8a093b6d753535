//! Server identity configuration from TOML (`[server]` section)

use crate::mcp::DEFAULT_MAX_MESSAGE_BYTES;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVER_NAME: &str = "copilot-orchestra-elicitation";
pub const DEFAULT_SERVER_VERSION: &str = "1.0.0";

/// Raw server configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Name reported in `serverInfo`
    pub name: String,
    /// Version reported in `serverInfo`
    pub version: String,
    /// Largest accepted incoming message, in bytes
    pub max_message_bytes: usize,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVER_NAME.to_string(),
            version: DEFAULT_SERVER_VERSION.to_string(),
            max_message_bytes: DEFAULT_MAX_MESSAGE_BYTES,
        }
    }
}
