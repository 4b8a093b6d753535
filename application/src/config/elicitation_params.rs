//! Elicitation parameters: handler behaviour control.
//!
//! [`ElicitationParams`] groups the static parameters the tool handlers
//! consult on every call. They are application-layer concerns loaded from
//! the config file, not domain policy.

use orchestra_domain::ValidationMode;
use serde::{Deserialize, Serialize};

/// Handler behaviour parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElicitationParams {
    /// Whether keys not declared in a tool's schema are rejected.
    pub validation_mode: ValidationMode,
}

impl ElicitationParams {
    pub fn with_validation_mode(mut self, mode: ValidationMode) -> Self {
        self.validation_mode = mode;
        self
    }

    /// Shorthand for the `strict_fields` config flag.
    pub fn with_strict_fields(self, strict: bool) -> Self {
        self.with_validation_mode(if strict {
            ValidationMode::Strict
        } else {
            ValidationMode::Lenient
        })
    }
}
