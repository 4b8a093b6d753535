//! Elicitation domain module
//!
//! An **elicitation tool** gathers one structured decision from a caller and
//! returns a normalized outcome. Two tools exist and both follow the same
//! single-step pipeline:
//!
//! ```text
//! ┌──────────────┐    ┌───────────────┐    ┌────────────────┐
//! │ raw arguments│───▶│ *Request      │───▶│ *Payload       │
//! │ (JSON value) │    │ (validated)   │    │ (status + echo)│
//! └──────────────┘    └───────────────┘    └────────────────┘
//!        validate()          resolve()          Serialize
//! ```
//!
//! Nothing is retained between calls: `Pending → terminal status` happens
//! once per invocation and terminal statuses never transition further.
//!
//! # Key Types
//!
//! - [`ElicitationKind`]: the two tools, with name, description and schema
//! - [`SchemaDescriptor`]: constant input schemas
//! - [`PlanApprovalRequest`] / [`PhaseCommitRequest`]: validated inputs,
//!   one variant per decision
//! - [`ToolResponse`]: the `content` envelope returned to the client

pub mod arguments;
pub mod phase_commit;
pub mod plan_approval;
pub mod response;
pub mod schema;

pub use arguments::{ArgumentReader, ValidationMode};
pub use phase_commit::{PhaseCommitPayload, PhaseCommitRequest, PhaseCommitStatus, PhaseDecision};
pub use plan_approval::{PlanApprovalPayload, PlanApprovalRequest, PlanApprovalStatus, PlanDecision};
pub use response::{ContentBlock, ToolResponse};
pub use schema::{PHASE_COMMIT_SCHEMA, PLAN_APPROVAL_SCHEMA, SchemaDescriptor};

use crate::tool::ToolDescriptor;
use std::fmt;

/// Wire name of the plan approval tool.
pub const PLAN_APPROVAL_TOOL: &str = "request_plan_approval";

/// Wire name of the phase commit tool.
pub const PHASE_COMMIT_TOOL: &str = "request_phase_commit_approval";

/// The elicitation tools this server knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElicitationKind {
    PlanApproval,
    PhaseCommit,
}

impl ElicitationKind {
    pub const ALL: [ElicitationKind; 2] = [ElicitationKind::PlanApproval, ElicitationKind::PhaseCommit];

    pub fn tool_name(&self) -> &'static str {
        match self {
            ElicitationKind::PlanApproval => PLAN_APPROVAL_TOOL,
            ElicitationKind::PhaseCommit => PHASE_COMMIT_TOOL,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ElicitationKind::PlanApproval => "Request user approval for the plan",
            ElicitationKind::PhaseCommit => {
                "Request approval to commit the current phase and decide next action"
            }
        }
    }

    pub fn schema(&self) -> &'static SchemaDescriptor {
        match self {
            ElicitationKind::PlanApproval => &PLAN_APPROVAL_SCHEMA,
            ElicitationKind::PhaseCommit => &PHASE_COMMIT_SCHEMA,
        }
    }

    /// Exact-match lookup by wire name.
    pub fn from_tool_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tool_name() == name)
    }

    /// Listing entry for `tools/list`.
    pub fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(self.tool_name(), self.description(), self.schema().to_json())
    }
}

impl fmt::Display for ElicitationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tool_name())
    }
}
