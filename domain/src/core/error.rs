//! Domain error types

use thiserror::Error;

/// Errors produced while validating or dispatching an elicitation call.
///
/// The first violation wins: validators stop at the first failed rule and
/// never return a partial payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElicitationError {
    #[error("Invalid input: must be object")]
    InvalidInput,

    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Invalid {field}: {value}")]
    InvalidEnumValue { field: &'static str, value: String },

    #[error("{field} required when decision is {decision}")]
    MissingConditionalField {
        field: &'static str,
        decision: &'static str,
    },

    #[error("Field {field} must be a {expected}")]
    InvalidFieldType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Unexpected field: {field}")]
    UnexpectedField { field: String },

    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Failed to serialize payload: {message}")]
    Serialization { message: String },
}

impl ElicitationError {
    /// Stable machine-readable code for logs and protocol error data.
    pub fn code(&self) -> &'static str {
        match self {
            ElicitationError::InvalidInput => "INVALID_INPUT",
            ElicitationError::MissingField { .. } => "MISSING_FIELD",
            ElicitationError::InvalidEnumValue { .. } => "INVALID_ENUM_VALUE",
            ElicitationError::MissingConditionalField { .. } => "MISSING_CONDITIONAL_FIELD",
            ElicitationError::InvalidFieldType { .. } => "INVALID_FIELD_TYPE",
            ElicitationError::UnexpectedField { .. } => "UNEXPECTED_FIELD",
            ElicitationError::UnknownTool { .. } => "UNKNOWN_TOOL",
            ElicitationError::Serialization { .. } => "SERIALIZATION_ERROR",
        }
    }

    /// Whether this error came from argument validation (as opposed to routing).
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            ElicitationError::UnknownTool { .. } | ElicitationError::Serialization { .. }
        )
    }
}
