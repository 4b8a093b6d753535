//! Phase commit use case.
//!
//! Handler for `request_phase_commit_approval`. Unlike plan approval there is
//! no derived summary text; the payload only echoes what the caller sent.

use crate::config::ElicitationParams;
use crate::use_cases::elicitation_tool::ElicitationTool;
use orchestra_domain::util::preview;
use orchestra_domain::{
    ElicitationError, ElicitationKind, PhaseCommitRequest, ToolDescriptor, ToolResponse,
};
use serde_json::Value;
use tracing::debug;

/// Use case handling phase commit elicitations.
#[derive(Debug, Clone, Default)]
pub struct PhaseCommitUseCase {
    params: ElicitationParams,
}

impl PhaseCommitUseCase {
    pub fn new(params: ElicitationParams) -> Self {
        Self { params }
    }

    pub fn execute(&self, arguments: &Value) -> Result<ToolResponse, ElicitationError> {
        let request = PhaseCommitRequest::validate(arguments, self.params.validation_mode)?;

        debug!(
            decision = %request.decision(),
            commit_message = %request.commit_message().map(|m| preview(m, 80)).unwrap_or_default(),
            "Phase commit validated"
        );

        ToolResponse::from_payload(&request.resolve())
    }
}

impl ElicitationTool for PhaseCommitUseCase {
    fn descriptor(&self) -> ToolDescriptor {
        ElicitationKind::PhaseCommit.descriptor()
    }

    fn handle(&self, arguments: &Value) -> Result<ToolResponse, ElicitationError> {
        self.execute(arguments)
    }

    fn name(&self) -> String {
        ElicitationKind::PhaseCommit.tool_name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(arguments: Value) -> Value {
        PhaseCommitUseCase::default()
            .execute(&arguments)
            .unwrap()
            .payload()
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_descriptor() {
        let descriptor = PhaseCommitUseCase::default().descriptor();
        assert_eq!(descriptor.name, "request_phase_commit_approval");
        assert_eq!(
            descriptor.description,
            "Request approval to commit the current phase and decide next action"
        );
        assert_eq!(descriptor.input_schema["additionalProperties"], json!(false));
    }

    #[test]
    fn test_commit_and_continue_scenario() {
        assert_eq!(
            payload(json!({
                "decision": "commit_and_continue",
                "commit_message": "Phase 3 complete: implemented tool"
            })),
            json!({
                "status": "committed_and_continue",
                "decision": "commit_and_continue",
                "commitMessage": "Phase 3 complete: implemented tool"
            })
        );
    }

    #[test]
    fn test_abort_scenario() {
        assert_eq!(
            payload(json!({"decision": "abort"})),
            json!({"status": "aborted", "decision": "abort"})
        );
    }

    #[test]
    fn test_revise_with_notes() {
        let json = payload(json!({"decision": "revise", "notes": "Tweak schema naming"}));
        assert_eq!(json["status"], "needs_revision");
        assert_eq!(json["decision"], "revise");
        assert_eq!(json["notes"], "Tweak schema naming");
    }

    #[test]
    fn test_missing_commit_message_fails() {
        for decision in ["commit_and_continue", "commit_and_pause"] {
            let err = PhaseCommitUseCase::default()
                .execute(&json!({"decision": decision}))
                .unwrap_err();
            assert_eq!(err.code(), "MISSING_CONDITIONAL_FIELD");
        }
    }

    #[test]
    fn test_invalid_decision_fails() {
        let err = PhaseCommitUseCase::default()
            .execute(&json!({"decision": "invalid"}))
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_ENUM_VALUE");
    }
}
