//! Dispatch tool use case.
//!
//! Routes an inbound [`ToolCall`] to the registered [`ElicitationTool`]
//! whose name matches **exactly** (no prefix, case-folding or alias
//! matching) and records the outcome through the [`DecisionLogger`] port.
//!
//! ```text
//! ToolCall { tool_name, arguments }
//!        │
//!        ├─ name matches ──▶ tool.handle(arguments) ──▶ ToolResponse
//!        └─ no match ──────▶ ElicitationError::UnknownTool
//! ```

use crate::config::ElicitationParams;
use crate::ports::decision_logger::{DecisionEvent, DecisionLogger, NoDecisionLogger};
use crate::use_cases::elicitation_tool::ElicitationTool;
use crate::use_cases::phase_commit::PhaseCommitUseCase;
use crate::use_cases::plan_approval::PlanApprovalUseCase;
use orchestra_domain::{ElicitationError, ToolCall, ToolDescriptor, ToolResponse};
use std::sync::Arc;
use tracing::{info, warn};

/// Use case routing tool calls to their handlers.
#[derive(Clone)]
pub struct DispatchToolUseCase {
    tools: Vec<Arc<dyn ElicitationTool>>,
    decision_logger: Arc<dyn DecisionLogger>,
}

impl DispatchToolUseCase {
    /// Create a dispatcher with no tools registered.
    pub fn empty() -> Self {
        Self {
            tools: Vec::new(),
            decision_logger: Arc::new(NoDecisionLogger),
        }
    }

    /// Create a dispatcher with both elicitation tools registered.
    pub fn new(params: ElicitationParams) -> Self {
        Self::empty()
            .register(Arc::new(PlanApprovalUseCase::new(params)))
            .register(Arc::new(PhaseCommitUseCase::new(params)))
    }

    /// Register a tool (builder pattern). A later registration with the same
    /// name replaces the earlier one.
    pub fn register(mut self, tool: Arc<dyn ElicitationTool>) -> Self {
        let name = tool.name();
        self.tools.retain(|existing| existing.name() != name);
        self.tools.push(tool);
        self
    }

    /// Create with a decision logger.
    pub fn with_decision_logger(mut self, logger: Arc<dyn DecisionLogger>) -> Self {
        self.decision_logger = logger;
        self
    }

    /// Listing entries, sorted by name.
    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        let mut descriptors: Vec<ToolDescriptor> =
            self.tools.iter().map(|tool| tool.descriptor()).collect();
        descriptors.sort_by(|a, b| a.name.cmp(&b.name));
        descriptors
    }

    /// Route a call to its handler.
    pub fn dispatch(&self, call: &ToolCall) -> Result<ToolResponse, ElicitationError> {
        let Some(tool) = self.tools.iter().find(|tool| tool.name() == call.tool_name) else {
            warn!("Rejected call to unknown tool: {}", call.tool_name);
            let err = ElicitationError::UnknownTool {
                name: call.tool_name.clone(),
            };
            self.log_rejected(call, &err);
            return Err(err);
        };

        match tool.handle(&call.arguments) {
            Ok(response) => {
                let payload = response.payload();
                let decision = payload.and_then(|p| p.get("decision")).cloned();
                let status = payload.and_then(|p| p.get("status")).cloned();
                info!(
                    tool = %call.tool_name,
                    decision = ?decision,
                    status = ?status,
                    "Elicitation completed"
                );
                self.decision_logger.log(DecisionEvent::new(
                    "elicitation_completed",
                    serde_json::json!({
                        "tool": call.tool_name,
                        "decision": decision,
                        "status": status,
                    }),
                ));
                Ok(response)
            }
            Err(err) => {
                warn!(
                    tool = %call.tool_name,
                    code = err.code(),
                    "Elicitation rejected: {}",
                    err
                );
                self.log_rejected(call, &err);
                Err(err)
            }
        }
    }

    fn log_rejected(&self, call: &ToolCall, err: &ElicitationError) {
        self.decision_logger.log(DecisionEvent::new(
            "elicitation_rejected",
            serde_json::json!({
                "tool": call.tool_name,
                "code": err.code(),
                "message": err.to_string(),
            }),
        ));
    }
}

impl Default for DispatchToolUseCase {
    fn default() -> Self {
        Self::new(ElicitationParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use std::sync::Mutex;

    /// Captures events for assertions.
    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<(&'static str, Value)>>,
    }

    impl DecisionLogger for RecordingLogger {
        fn log(&self, event: DecisionEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type, event.payload));
        }
    }

    struct EchoTool;

    impl ElicitationTool for EchoTool {
        fn descriptor(&self) -> ToolDescriptor {
            ToolDescriptor::new("request_plan_approval", "Echo", json!({"type": "object"}))
        }

        fn handle(&self, arguments: &Value) -> Result<ToolResponse, ElicitationError> {
            Ok(ToolResponse::json(arguments.clone()))
        }
    }

    #[test]
    fn test_list_tools_sorted() {
        let names: Vec<String> = DispatchToolUseCase::default()
            .list_tools()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(
            names,
            vec!["request_phase_commit_approval", "request_plan_approval"]
        );
    }

    #[test]
    fn test_dispatch_plan_approval() {
        let call = ToolCall::new("request_plan_approval")
            .with_arg("decision", "approve")
            .with_arg("comments", "Looks great");
        let response = DispatchToolUseCase::default().dispatch(&call).unwrap();
        assert_eq!(response.payload().unwrap()["status"], "approved");
    }

    #[test]
    fn test_dispatch_phase_commit() {
        let call = ToolCall::new("request_phase_commit_approval").with_arg("decision", "abort");
        let response = DispatchToolUseCase::default().dispatch(&call).unwrap();
        assert_eq!(
            response.payload().unwrap(),
            &json!({"status": "aborted", "decision": "abort"})
        );
    }

    #[test]
    fn test_unknown_tool() {
        let dispatcher = DispatchToolUseCase::default();
        for name in ["request_plan", "request_plan_approval_v2", "Request_Plan_Approval", ""] {
            let err = dispatcher.dispatch(&ToolCall::new(name)).unwrap_err();
            assert_eq!(
                err,
                ElicitationError::UnknownTool {
                    name: name.to_string()
                }
            );
        }
    }

    #[test]
    fn test_empty_arguments_missing_field_for_both_tools() {
        let dispatcher = DispatchToolUseCase::default();
        for name in ["request_plan_approval", "request_phase_commit_approval"] {
            assert_eq!(
                dispatcher.dispatch(&ToolCall::new(name)).unwrap_err(),
                ElicitationError::MissingField { field: "decision" }
            );
        }
    }

    #[test]
    fn test_empty_dispatcher_knows_no_tools() {
        let dispatcher = DispatchToolUseCase::empty();
        assert!(dispatcher.list_tools().is_empty());
        assert!(matches!(
            dispatcher.dispatch(&ToolCall::new("request_plan_approval")),
            Err(ElicitationError::UnknownTool { .. })
        ));
    }

    #[test]
    fn test_register_replaces_same_name() {
        let dispatcher = DispatchToolUseCase::default().register(Arc::new(EchoTool));
        assert_eq!(dispatcher.list_tools().len(), 2);

        let call = ToolCall::new("request_plan_approval").with_arg("anything", 1);
        let response = dispatcher.dispatch(&call).unwrap();
        assert_eq!(response.payload().unwrap(), &json!({"anything": 1}));
    }

    #[test]
    fn test_clone_shares_tools_and_logger() {
        let logger = Arc::new(RecordingLogger::default());
        let dispatcher = DispatchToolUseCase::default().with_decision_logger(logger.clone());
        let cloned = dispatcher.clone();
        drop(dispatcher);

        assert_eq!(cloned.list_tools().len(), 2);
        cloned
            .dispatch(&ToolCall::new("request_plan_approval").with_arg("decision", "cancel"))
            .unwrap();
        assert_eq!(logger.events.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_decision_events_logged() {
        let logger = Arc::new(RecordingLogger::default());
        let dispatcher = DispatchToolUseCase::default().with_decision_logger(logger.clone());

        dispatcher
            .dispatch(
                &ToolCall::new("request_phase_commit_approval")
                    .with_arg("decision", "commit_and_pause")
                    .with_arg("commit_message", "done"),
            )
            .unwrap();
        let _ = dispatcher.dispatch(
            &ToolCall::new("request_plan_approval").with_arg("decision", "request_changes"),
        );
        let _ = dispatcher.dispatch(&ToolCall::new("nope"));

        let events = logger.events.lock().unwrap();
        assert_eq!(events.len(), 3);

        assert_eq!(events[0].0, "elicitation_completed");
        assert_eq!(events[0].1["status"], "committed_and_pause");
        assert_eq!(events[0].1["decision"], "commit_and_pause");

        assert_eq!(events[1].0, "elicitation_rejected");
        assert_eq!(events[1].1["code"], "MISSING_CONDITIONAL_FIELD");

        assert_eq!(events[2].0, "elicitation_rejected");
        assert_eq!(events[2].1["code"], "UNKNOWN_TOOL");
        assert_eq!(events[2].1["tool"], "nope");
    }
}
