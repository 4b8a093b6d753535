//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod dispatch_tool;
pub mod elicitation_tool;
pub mod phase_commit;
pub mod plan_approval;
