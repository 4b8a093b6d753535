//! Tool domain entities

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Listing entry advertised to clients for a single tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    /// Unique name of the tool (e.g., "request_plan_approval")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// JSON Schema of the accepted arguments
    pub input_schema: Value,
}

impl ToolDescriptor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

/// A call to a tool with arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to call
    pub tool_name: String,
    /// Arguments passed to the tool, not yet validated
    pub arguments: Value,
}

impl ToolCall {
    /// Create a call with no arguments (an empty object).
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: Value::Object(Default::default()),
        }
    }

    pub fn with_arguments(mut self, arguments: Value) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        if let Value::Object(map) = &mut self.arguments {
            map.insert(key.into(), value.into());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptor_serializes_camel_case() {
        let descriptor = ToolDescriptor::new("t", "A tool", json!({"type": "object"}));
        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(value["name"], "t");
        assert_eq!(value["description"], "A tool");
        assert_eq!(value["inputSchema"]["type"], "object");
        assert!(value.get("input_schema").is_none());
    }

    #[test]
    fn test_tool_call_builder() {
        let call = ToolCall::new("request_plan_approval")
            .with_arg("decision", "approve")
            .with_arg("comments", "ok");
        assert_eq!(call.arguments, json!({"decision": "approve", "comments": "ok"}));
    }

    #[test]
    fn test_tool_call_defaults_to_empty_object() {
        assert_eq!(ToolCall::new("x").arguments, json!({}));
    }
}
