//! Application layer for copilot-orchestra-mcp
//!
//! This crate contains the tool handlers, the dispatcher, port definitions
//! and application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ElicitationParams;
pub use ports::decision_logger::{DecisionEvent, DecisionLogger, NoDecisionLogger};
pub use use_cases::dispatch_tool::DispatchToolUseCase;
pub use use_cases::elicitation_tool::ElicitationTool;
pub use use_cases::phase_commit::PhaseCommitUseCase;
pub use use_cases::plan_approval::PlanApprovalUseCase;
