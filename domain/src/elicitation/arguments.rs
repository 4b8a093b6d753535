//! Raw argument access shared by both validators.
//!
//! [`ArgumentReader`] wraps the untyped `arguments` object of a tool call and
//! exposes the few typed reads the validators need. Reads keep the
//! difference between an absent field and a present-but-empty one; the
//! validators decide what an empty string means for each field.

use super::schema::{DECISION_FIELD, SchemaDescriptor};
use crate::core::error::ElicitationError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

/// How strictly undeclared argument keys are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Undeclared keys are ignored, even though schemas advertise
    /// `additionalProperties: false`.
    #[default]
    Lenient,
    /// Undeclared keys fail with [`ElicitationError::UnexpectedField`].
    Strict,
}

impl std::fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationMode::Lenient => write!(f, "lenient"),
            ValidationMode::Strict => write!(f, "strict"),
        }
    }
}

/// Borrowed view over a tool call's `arguments` object.
#[derive(Debug, Clone, Copy)]
pub struct ArgumentReader<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> ArgumentReader<'a> {
    /// Fails with [`ElicitationError::InvalidInput`] unless `input` is an object.
    pub fn new(input: &'a Value) -> Result<Self, ElicitationError> {
        input
            .as_object()
            .map(|fields| Self { fields })
            .ok_or(ElicitationError::InvalidInput)
    }

    /// Read and parse the `decision` discriminant.
    ///
    /// A present value that is not one of the enumerated strings (including
    /// `null` and non-string values) is an enum violation, not a missing field.
    pub fn decision<D: FromStr>(&self) -> Result<D, ElicitationError> {
        let raw = self
            .fields
            .get(DECISION_FIELD)
            .ok_or(ElicitationError::MissingField {
                field: DECISION_FIELD,
            })?;

        raw.as_str()
            .and_then(|s| s.parse::<D>().ok())
            .ok_or_else(|| ElicitationError::InvalidEnumValue {
                field: DECISION_FIELD,
                value: render(raw),
            })
    }

    /// Read an optional string field.
    ///
    /// `null` reads as absent. An empty string is returned as `Some("")`.
    pub fn optional_text(&self, field: &'static str) -> Result<Option<&'a str>, ElicitationError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(ElicitationError::InvalidFieldType {
                field,
                expected: "string",
            }),
        }
    }

    /// Reject keys the schema does not declare. No-op in lenient mode.
    pub fn check_declared(
        &self,
        schema: &SchemaDescriptor,
        mode: ValidationMode,
    ) -> Result<(), ElicitationError> {
        if mode == ValidationMode::Lenient || schema.additional_properties {
            return Ok(());
        }

        // Map iteration order is stable, so the reported key is deterministic.
        match self.fields.keys().find(|key| !schema.declares(key)) {
            Some(key) => Err(ElicitationError::UnexpectedField { field: key.clone() }),
            None => Ok(()),
        }
    }
}

/// Drop empty strings: only non-empty text counts as "supplied".
pub fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_string)
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
