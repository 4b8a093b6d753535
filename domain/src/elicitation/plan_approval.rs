//! Plan approval elicitation.
//!
//! ```text
//! approve         ──▶ approved       "Plan approved"
//! request_changes ──▶ needs_changes  "Plan requires changes"   (comments required)
//! cancel          ──▶ cancelled      "Plan approval cancelled"
//! ```

use super::arguments::{ArgumentReader, ValidationMode, non_empty};
use super::schema::{PLAN_APPROVAL_SCHEMA, PLAN_DECISIONS};
use crate::core::error::ElicitationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Decision a user makes about a proposed plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanDecision {
    Approve,
    RequestChanges,
    Cancel,
}

impl PlanDecision {
    pub const ALL: [PlanDecision; 3] = [
        PlanDecision::Approve,
        PlanDecision::RequestChanges,
        PlanDecision::Cancel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanDecision::Approve => "approve",
            PlanDecision::RequestChanges => "request_changes",
            PlanDecision::Cancel => "cancel",
        }
    }

    /// Status this decision resolves to.
    pub fn status(&self) -> PlanApprovalStatus {
        match self {
            PlanDecision::Approve => PlanApprovalStatus::Approved,
            PlanDecision::RequestChanges => PlanApprovalStatus::NeedsChanges,
            PlanDecision::Cancel => PlanApprovalStatus::Cancelled,
        }
    }
}

impl fmt::Display for PlanDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PlanDecision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlanDecision::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid plan decision: {} (expected one of {})",
                    s,
                    PLAN_DECISIONS.join(", ")
                )
            })
    }
}

/// Terminal status of a plan approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanApprovalStatus {
    Approved,
    NeedsChanges,
    Cancelled,
}

impl PlanApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanApprovalStatus::Approved => "approved",
            PlanApprovalStatus::NeedsChanges => "needs_changes",
            PlanApprovalStatus::Cancelled => "cancelled",
        }
    }

    /// Server-assigned summary text.
    pub fn summary(&self) -> &'static str {
        match self {
            PlanApprovalStatus::Approved => "Plan approved",
            PlanApprovalStatus::NeedsChanges => "Plan requires changes",
            PlanApprovalStatus::Cancelled => "Plan approval cancelled",
        }
    }
}

impl fmt::Display for PlanApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated plan approval request.
///
/// The conditional requirement lives in the type: a `RequestChanges`
/// request cannot exist without non-empty comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanApprovalRequest {
    Approve { comments: Option<String> },
    RequestChanges { comments: String },
    Cancel { comments: Option<String> },
}

impl PlanApprovalRequest {
    /// Validate raw tool arguments.
    ///
    /// Rules run in order and the first failure is returned:
    /// object → `decision` present → `decision` in enum → field types →
    /// `comments` for `request_changes` → undeclared keys (strict only).
    /// A client-supplied `approval_summary` is accepted but never read.
    pub fn validate(input: &Value, mode: ValidationMode) -> Result<Self, ElicitationError> {
        let reader = ArgumentReader::new(input)?;
        let decision: PlanDecision = reader.decision()?;
        let comments = reader.optional_text("comments")?;
        reader.optional_text("approval_summary")?;

        let request = match decision {
            PlanDecision::Approve => PlanApprovalRequest::Approve {
                comments: non_empty(comments),
            },
            PlanDecision::RequestChanges => PlanApprovalRequest::RequestChanges {
                comments: non_empty(comments).ok_or(ElicitationError::MissingConditionalField {
                    field: "comments",
                    decision: PlanDecision::RequestChanges.as_str(),
                })?,
            },
            PlanDecision::Cancel => PlanApprovalRequest::Cancel {
                comments: non_empty(comments),
            },
        };

        reader.check_declared(&PLAN_APPROVAL_SCHEMA, mode)?;
        Ok(request)
    }

    pub fn decision(&self) -> PlanDecision {
        match self {
            PlanApprovalRequest::Approve { .. } => PlanDecision::Approve,
            PlanApprovalRequest::RequestChanges { .. } => PlanDecision::RequestChanges,
            PlanApprovalRequest::Cancel { .. } => PlanDecision::Cancel,
        }
    }

    pub fn comments(&self) -> Option<&str> {
        match self {
            PlanApprovalRequest::Approve { comments } | PlanApprovalRequest::Cancel { comments } => {
                comments.as_deref()
            }
            PlanApprovalRequest::RequestChanges { comments } => Some(comments),
        }
    }

    /// Resolve the request into its response payload.
    pub fn resolve(self) -> PlanApprovalPayload {
        let decision = self.decision();
        let status = decision.status();
        let comments = match self {
            PlanApprovalRequest::Approve { comments } | PlanApprovalRequest::Cancel { comments } => {
                comments
            }
            PlanApprovalRequest::RequestChanges { comments } => Some(comments),
        };

        PlanApprovalPayload {
            status,
            decision,
            comments,
            approval_summary: status.summary().to_string(),
        }
    }
}

/// Response payload of the plan approval tool.
///
/// Serializes as `{status, decision, comments?, approvalSummary}`;
/// `comments` is omitted when absent, never `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanApprovalPayload {
    pub status: PlanApprovalStatus,
    pub decision: PlanDecision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    pub approval_summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validate(input: Value) -> Result<PlanApprovalRequest, ElicitationError> {
        PlanApprovalRequest::validate(&input, ValidationMode::Lenient)
    }

    fn wire(input: Value) -> Value {
        serde_json::to_value(validate(input).unwrap().resolve()).unwrap()
    }

    #[test]
    fn test_decision_strings_match_schema() {
        let names: Vec<&str> = PlanDecision::ALL.iter().map(|d| d.as_str()).collect();
        assert_eq!(names, PLAN_DECISIONS);
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (PlanDecision::Approve, "approved", "Plan approved"),
            (PlanDecision::RequestChanges, "needs_changes", "Plan requires changes"),
            (PlanDecision::Cancel, "cancelled", "Plan approval cancelled"),
        ];
        for (decision, status, summary) in cases {
            assert_eq!(decision.status().as_str(), status);
            assert_eq!(decision.status().summary(), summary);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "request_changes".parse::<PlanDecision>().ok(),
            Some(PlanDecision::RequestChanges)
        );
        assert!("Approve".parse::<PlanDecision>().is_err());
        assert!("invalid".parse::<PlanDecision>().is_err());
    }

    #[test]
    fn test_approve_with_comments() {
        assert_eq!(
            wire(json!({"decision": "approve", "comments": "Looks great"})),
            json!({
                "status": "approved",
                "decision": "approve",
                "comments": "Looks great",
                "approvalSummary": "Plan approved"
            })
        );
    }

    #[test]
    fn test_approve_without_comments_omits_key() {
        let json = wire(json!({"decision": "approve"}));
        assert!(json.get("comments").is_none());
        assert_eq!(json["approvalSummary"], "Plan approved");
    }

    #[test]
    fn test_empty_comments_treated_as_absent() {
        let json = wire(json!({"decision": "cancel", "comments": ""}));
        assert_eq!(json["status"], "cancelled");
        assert!(json.get("comments").is_none());
    }

    #[test]
    fn test_request_changes_requires_comments() {
        for input in [
            json!({"decision": "request_changes"}),
            json!({"decision": "request_changes", "comments": ""}),
            json!({"decision": "request_changes", "comments": null}),
        ] {
            assert_eq!(
                validate(input).unwrap_err(),
                ElicitationError::MissingConditionalField {
                    field: "comments",
                    decision: "request_changes"
                }
            );
        }
    }

    #[test]
    fn test_request_changes_with_comments() {
        let request =
            validate(json!({"decision": "request_changes", "comments": "Please adjust timelines"}))
                .unwrap();
        assert_eq!(request.comments(), Some("Please adjust timelines"));

        let payload = request.resolve();
        assert_eq!(payload.status, PlanApprovalStatus::NeedsChanges);
        assert_eq!(payload.comments.as_deref(), Some("Please adjust timelines"));
    }

    #[test]
    fn test_invalid_decision_regardless_of_other_fields() {
        let err = validate(json!({"decision": "invalid", "comments": 12, "extra": 1})).unwrap_err();
        assert_eq!(
            err,
            ElicitationError::InvalidEnumValue {
                field: "decision",
                value: "invalid".to_string()
            }
        );
    }

    #[test]
    fn test_empty_object_missing_field() {
        assert_eq!(
            validate(json!({})).unwrap_err(),
            ElicitationError::MissingField { field: "decision" }
        );
    }

    #[test]
    fn test_non_string_comments_rejected() {
        assert_eq!(
            validate(json!({"decision": "approve", "comments": ["a"]})).unwrap_err(),
            ElicitationError::InvalidFieldType {
                field: "comments",
                expected: "string"
            }
        );
    }

    #[test]
    fn test_client_summary_ignored() {
        let payload = validate(json!({"decision": "cancel", "approval_summary": "custom"}))
            .unwrap()
            .resolve();
        assert_eq!(payload.approval_summary, "Plan approval cancelled");
    }

    #[test]
    fn test_strict_mode_rejects_undeclared_keys() {
        let input = json!({"decision": "approve", "priority": "high"});
        assert!(PlanApprovalRequest::validate(&input, ValidationMode::Lenient).is_ok());
        assert_eq!(
            PlanApprovalRequest::validate(&input, ValidationMode::Strict).unwrap_err(),
            ElicitationError::UnexpectedField {
                field: "priority".to_string()
            }
        );

        let declared = json!({"decision": "approve", "approval_summary": "x"});
        assert!(PlanApprovalRequest::validate(&declared, ValidationMode::Strict).is_ok());
    }
}
