//! Domain layer for copilot-orchestra-mcp
//!
//! This crate contains the elicitation schemas, decision types, validators
//! and payload mappings. It performs no I/O and has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Elicitation tools
//!
//! - **Plan approval**: `approve | request_changes | cancel` → status + summary
//! - **Phase commit**: `commit_and_continue | commit_and_pause | revise | abort` → status
//!
//! Both validate raw JSON arguments into a typed request whose variant is
//! the decision, then resolve it into a payload.

pub mod core;
pub mod elicitation;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use core::error::ElicitationError;
pub use elicitation::{
    ContentBlock, ElicitationKind, PHASE_COMMIT_SCHEMA, PHASE_COMMIT_TOOL, PLAN_APPROVAL_SCHEMA,
    PLAN_APPROVAL_TOOL, PhaseCommitPayload, PhaseCommitRequest, PhaseCommitStatus, PhaseDecision,
    PlanApprovalPayload, PlanApprovalRequest, PlanApprovalStatus, PlanDecision, SchemaDescriptor,
    ToolResponse, ValidationMode,
};
pub use tool::{ToolCall, ToolDescriptor};
