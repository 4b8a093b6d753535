//! Static schema descriptors for the elicitation tools.
//!
//! Each descriptor is a `const`: there is nothing to build per call and
//! nothing to invalidate. [`SchemaDescriptor::to_json`] renders the JSON
//! Schema advertised as `inputSchema` in `tools/list`.

use serde_json::{Map, Value, json};

/// Name of the discriminant field shared by both tools.
pub const DECISION_FIELD: &str = "decision";

/// A single string property of an input schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    /// Allowed values when the property is an enum.
    pub allowed: Option<&'static [&'static str]>,
}

impl FieldSpec {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            allowed: None,
        }
    }

    pub const fn one_of(name: &'static str, allowed: &'static [&'static str]) -> Self {
        Self {
            name,
            allowed: Some(allowed),
        }
    }
}

/// Structural description of a tool's accepted input.
///
/// All properties are strings; `required` lists the mandatory ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaDescriptor {
    pub fields: &'static [FieldSpec],
    pub required: &'static [&'static str],
    pub additional_properties: bool,
}

/// Decision values accepted by `request_plan_approval`.
pub const PLAN_DECISIONS: &[&str] = &["approve", "request_changes", "cancel"];

/// Decision values accepted by `request_phase_commit_approval`.
pub const PHASE_DECISIONS: &[&str] = &["commit_and_continue", "commit_and_pause", "revise", "abort"];

/// Input schema of the plan approval tool.
///
/// `approval_summary` is declared for clients that echo a previous payload,
/// but its value is always assigned by the server.
pub const PLAN_APPROVAL_SCHEMA: SchemaDescriptor = SchemaDescriptor {
    fields: &[
        FieldSpec::one_of(DECISION_FIELD, PLAN_DECISIONS),
        FieldSpec::text("comments"),
        FieldSpec::text("approval_summary"),
    ],
    required: &[DECISION_FIELD],
    additional_properties: false,
};

/// Input schema of the phase commit tool.
pub const PHASE_COMMIT_SCHEMA: SchemaDescriptor = SchemaDescriptor {
    fields: &[
        FieldSpec::one_of(DECISION_FIELD, PHASE_DECISIONS),
        FieldSpec::text("commit_message"),
        FieldSpec::text("notes"),
    ],
    required: &[DECISION_FIELD],
    additional_properties: false,
};

impl SchemaDescriptor {
    /// Whether `name` is a declared property.
    pub fn declares(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Allowed values of an enum property, if `name` is one.
    pub fn allowed_values(&self, name: &str) -> Option<&'static [&'static str]> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .and_then(|f| f.allowed)
    }

    /// Render as a JSON Schema object.
    pub fn to_json(&self) -> Value {
        let mut properties = Map::new();
        for field in self.fields {
            let mut prop = Map::new();
            prop.insert("type".to_string(), json!("string"));
            if let Some(allowed) = field.allowed {
                prop.insert("enum".to_string(), json!(allowed));
            }
            properties.insert(field.name.to_string(), Value::Object(prop));
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": self.required,
            "additionalProperties": self.additional_properties,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_approval_schema_root() {
        let schema = PLAN_APPROVAL_SCHEMA.to_json();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["decision"]));
        assert_eq!(schema["additionalProperties"], json!(false));
    }

    #[test]
    fn test_plan_approval_schema_properties() {
        let schema = PLAN_APPROVAL_SCHEMA.to_json();
        let properties = schema["properties"].as_object().unwrap();
        assert_eq!(properties.len(), 3);
        assert_eq!(properties["decision"]["type"], "string");
        assert_eq!(
            properties["decision"]["enum"],
            json!(["approve", "request_changes", "cancel"])
        );
        assert_eq!(properties["comments"]["type"], "string");
        assert!(properties["comments"].get("enum").is_none());
        assert_eq!(properties["approval_summary"]["type"], "string");
    }

    #[test]
    fn test_phase_commit_schema_properties() {
        let schema = PHASE_COMMIT_SCHEMA.to_json();
        let properties = schema["properties"].as_object().unwrap();
        assert_eq!(properties.len(), 3);
        assert_eq!(
            properties["decision"]["enum"],
            json!(["commit_and_continue", "commit_and_pause", "revise", "abort"])
        );
        assert_eq!(properties["commit_message"]["type"], "string");
        assert_eq!(properties["notes"]["type"], "string");
        assert_eq!(schema["required"], json!(["decision"]));
        assert_eq!(schema["additionalProperties"], json!(false));
    }

    #[test]
    fn test_declares_and_allowed_values() {
        assert!(PLAN_APPROVAL_SCHEMA.declares("approval_summary"));
        assert!(!PLAN_APPROVAL_SCHEMA.declares("notes"));
        assert!(PHASE_COMMIT_SCHEMA.declares("notes"));
        assert_eq!(
            PHASE_COMMIT_SCHEMA.allowed_values(DECISION_FIELD),
            Some(PHASE_DECISIONS)
        );
        assert_eq!(PHASE_COMMIT_SCHEMA.allowed_values("notes"), None);
    }
}
