//! Tool response envelope.
//!
//! Every elicitation result is wrapped as
//! `{ "content": [ { "type": "json", "json": <payload> } ] }`, the shape
//! elicitation-aware clients render.

use crate::core::error::ElicitationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single content block of a tool response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Json { json: Value },
}

/// Result of a successful tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResponse {
    pub content: Vec<ContentBlock>,
}

impl ToolResponse {
    /// Wrap a payload in a single JSON content block.
    pub fn json(payload: Value) -> Self {
        Self {
            content: vec![ContentBlock::Json { json: payload }],
        }
    }

    /// Serialize a typed payload into a single JSON content block.
    pub fn from_payload<T: Serialize>(payload: &T) -> Result<Self, ElicitationError> {
        let json = serde_json::to_value(payload).map_err(|e| ElicitationError::Serialization {
            message: e.to_string(),
        })?;
        Ok(Self::json(json))
    }

    /// The payload of the first JSON block, if any.
    pub fn payload(&self) -> Option<&Value> {
        self.content.iter().find_map(|block| match block {
            ContentBlock::Json { json } => Some(json),
        })
    }
}
