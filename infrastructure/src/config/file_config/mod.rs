//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types where
//! the server is assembled.

mod logging;
mod server;
mod validation;

pub use logging::FileLoggingConfig;
pub use server::{DEFAULT_SERVER_NAME, DEFAULT_SERVER_VERSION, FileServerConfig};
pub use validation::FileValidationConfig;

use orchestra_application::ElicitationParams;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A rejected configuration value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("{field} must not be empty")]
    EmptyValue { field: &'static str },

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Server identity and transport limits
    pub server: FileServerConfig,
    /// Argument validation settings
    pub validation: FileValidationConfig,
    /// Log destinations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning every detected issue.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.server.name.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyValue {
                field: "server.name",
            });
        }
        if self.server.version.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyValue {
                field: "server.version",
            });
        }
        if self.server.max_message_bytes == 0 {
            issues.push(ConfigValidationError::NotPositive {
                field: "server.max_message_bytes",
            });
        }

        issues
    }

    /// Handler parameters derived from the `[validation]` section.
    pub fn elicitation_params(&self) -> ElicitationParams {
        ElicitationParams::default().with_strict_fields(self.validation.strict_fields)
    }
}
