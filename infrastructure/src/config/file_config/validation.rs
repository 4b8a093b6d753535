//! Argument validation configuration from TOML (`[validation]` section)

use serde::{Deserialize, Serialize};

/// Raw validation configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileValidationConfig {
    /// Reject argument keys the tool schema does not declare
    pub strict_fields: bool,
}
