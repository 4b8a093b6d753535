//! Plan approval use case.
//!
//! Handler for `request_plan_approval`: validate → map decision to status
//! and summary → wrap the payload in a [`ToolResponse`].

use crate::config::ElicitationParams;
use crate::use_cases::elicitation_tool::ElicitationTool;
use orchestra_domain::util::preview;
use orchestra_domain::{
    ElicitationError, ElicitationKind, PlanApprovalRequest, ToolDescriptor, ToolResponse,
};
use serde_json::Value;
use tracing::debug;

/// Use case handling plan approval elicitations.
#[derive(Debug, Clone, Default)]
pub struct PlanApprovalUseCase {
    params: ElicitationParams,
}

impl PlanApprovalUseCase {
    pub fn new(params: ElicitationParams) -> Self {
        Self { params }
    }

    pub fn execute(&self, arguments: &Value) -> Result<ToolResponse, ElicitationError> {
        let request = PlanApprovalRequest::validate(arguments, self.params.validation_mode)?;

        debug!(
            decision = %request.decision(),
            comments = %request.comments().map(|c| preview(c, 80)).unwrap_or_default(),
            "Plan approval validated"
        );

        ToolResponse::from_payload(&request.resolve())
    }
}

impl ElicitationTool for PlanApprovalUseCase {
    fn descriptor(&self) -> ToolDescriptor {
        ElicitationKind::PlanApproval.descriptor()
    }

    fn handle(&self, arguments: &Value) -> Result<ToolResponse, ElicitationError> {
        self.execute(arguments)
    }

    fn name(&self) -> String {
        ElicitationKind::PlanApproval.tool_name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orchestra_domain::ValidationMode;
    use serde_json::json;

    fn payload(arguments: Value) -> Value {
        PlanApprovalUseCase::default()
            .execute(&arguments)
            .unwrap()
            .payload()
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_descriptor() {
        let descriptor = PlanApprovalUseCase::default().descriptor();
        assert_eq!(descriptor.name, "request_plan_approval");
        assert_eq!(descriptor.description, "Request user approval for the plan");
        assert_eq!(
            descriptor.input_schema["properties"]["decision"]["enum"],
            json!(["approve", "request_changes", "cancel"])
        );
    }

    #[test]
    fn test_approve_scenario() {
        assert_eq!(
            payload(json!({"decision": "approve", "comments": "Looks great"})),
            json!({
                "status": "approved",
                "decision": "approve",
                "comments": "Looks great",
                "approvalSummary": "Plan approved"
            })
        );
    }

    #[test]
    fn test_every_decision_maps_and_echoes() {
        let cases = [
            ("approve", "approved", "Plan approved"),
            ("request_changes", "needs_changes", "Plan requires changes"),
            ("cancel", "cancelled", "Plan approval cancelled"),
        ];
        for (decision, status, summary) in cases {
            let json = payload(json!({"decision": decision, "comments": "c"}));
            assert_eq!(json["status"], status);
            assert_eq!(json["decision"], decision);
            assert_eq!(json["approvalSummary"], summary);
            assert_eq!(json["comments"], "c");
        }
    }

    #[test]
    fn test_response_envelope() {
        let response = PlanApprovalUseCase::default()
            .execute(&json!({"decision": "cancel"}))
            .unwrap();
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["content"][0]["type"], "json");
        assert_eq!(value["content"][0]["json"]["status"], "cancelled");
        assert!(value["content"][0]["json"].get("comments").is_none());
    }

    #[test]
    fn test_request_changes_without_comments_fails() {
        let err = PlanApprovalUseCase::default()
            .execute(&json!({"decision": "request_changes"}))
            .unwrap_err();
        assert!(matches!(
            err,
            ElicitationError::MissingConditionalField { field: "comments", .. }
        ));
    }

    #[test]
    fn test_strict_params_are_honoured() {
        let use_case = PlanApprovalUseCase::new(
            ElicitationParams::default().with_validation_mode(ValidationMode::Strict),
        );
        assert!(matches!(
            use_case.execute(&json!({"decision": "approve", "extra": 1})),
            Err(ElicitationError::UnexpectedField { .. })
        ));
    }
}
