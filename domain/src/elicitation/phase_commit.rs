//! Phase commit elicitation.
//!
//! ```text
//! commit_and_continue ──▶ committed_and_continue   (commit_message required)
//! commit_and_pause    ──▶ committed_and_pause      (commit_message required)
//! revise              ──▶ needs_revision
//! abort               ──▶ aborted
//! ```

use super::arguments::{ArgumentReader, ValidationMode, non_empty};
use super::schema::{PHASE_COMMIT_SCHEMA, PHASE_DECISIONS};
use crate::core::error::ElicitationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Decision taken at the end of an implementation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseDecision {
    CommitAndContinue,
    CommitAndPause,
    Revise,
    Abort,
}

impl PhaseDecision {
    pub const ALL: [PhaseDecision; 4] = [
        PhaseDecision::CommitAndContinue,
        PhaseDecision::CommitAndPause,
        PhaseDecision::Revise,
        PhaseDecision::Abort,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseDecision::CommitAndContinue => "commit_and_continue",
            PhaseDecision::CommitAndPause => "commit_and_pause",
            PhaseDecision::Revise => "revise",
            PhaseDecision::Abort => "abort",
        }
    }

    pub fn status(&self) -> PhaseCommitStatus {
        match self {
            PhaseDecision::CommitAndContinue => PhaseCommitStatus::CommittedAndContinue,
            PhaseDecision::CommitAndPause => PhaseCommitStatus::CommittedAndPause,
            PhaseDecision::Revise => PhaseCommitStatus::NeedsRevision,
            PhaseDecision::Abort => PhaseCommitStatus::Aborted,
        }
    }

    /// Whether this decision commits work and therefore needs a message.
    pub fn commits(&self) -> bool {
        matches!(
            self,
            PhaseDecision::CommitAndContinue | PhaseDecision::CommitAndPause
        )
    }
}

impl fmt::Display for PhaseDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PhaseDecision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PhaseDecision::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid phase decision: {} (expected one of {})",
                    s,
                    PHASE_DECISIONS.join(", ")
                )
            })
    }
}

/// Terminal status of a phase commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseCommitStatus {
    CommittedAndContinue,
    CommittedAndPause,
    NeedsRevision,
    Aborted,
}

impl PhaseCommitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseCommitStatus::CommittedAndContinue => "committed_and_continue",
            PhaseCommitStatus::CommittedAndPause => "committed_and_pause",
            PhaseCommitStatus::NeedsRevision => "needs_revision",
            PhaseCommitStatus::Aborted => "aborted",
        }
    }
}

impl fmt::Display for PhaseCommitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated phase commit request.
///
/// Committing variants always carry a non-empty message; `revise` and
/// `abort` echo one only if the caller sent it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhaseCommitRequest {
    CommitAndContinue {
        commit_message: String,
        notes: Option<String>,
    },
    CommitAndPause {
        commit_message: String,
        notes: Option<String>,
    },
    Revise {
        commit_message: Option<String>,
        notes: Option<String>,
    },
    Abort {
        commit_message: Option<String>,
        notes: Option<String>,
    },
}

impl PhaseCommitRequest {
    /// Validate raw tool arguments.
    ///
    /// Same rule order as the plan approval validator; the conditional rule
    /// requires `commit_message` for both committing decisions.
    pub fn validate(input: &Value, mode: ValidationMode) -> Result<Self, ElicitationError> {
        let reader = ArgumentReader::new(input)?;
        let decision: PhaseDecision = reader.decision()?;
        let commit_message = non_empty(reader.optional_text("commit_message")?);
        let notes = non_empty(reader.optional_text("notes")?);

        let required_message = || {
            commit_message
                .clone()
                .ok_or(ElicitationError::MissingConditionalField {
                    field: "commit_message",
                    decision: decision.as_str(),
                })
        };

        let request = match decision {
            PhaseDecision::CommitAndContinue => PhaseCommitRequest::CommitAndContinue {
                commit_message: required_message()?,
                notes,
            },
            PhaseDecision::CommitAndPause => PhaseCommitRequest::CommitAndPause {
                commit_message: required_message()?,
                notes,
            },
            PhaseDecision::Revise => PhaseCommitRequest::Revise {
                commit_message,
                notes,
            },
            PhaseDecision::Abort => PhaseCommitRequest::Abort {
                commit_message,
                notes,
            },
        };

        reader.check_declared(&PHASE_COMMIT_SCHEMA, mode)?;
        Ok(request)
    }

    pub fn decision(&self) -> PhaseDecision {
        match self {
            PhaseCommitRequest::CommitAndContinue { .. } => PhaseDecision::CommitAndContinue,
            PhaseCommitRequest::CommitAndPause { .. } => PhaseDecision::CommitAndPause,
            PhaseCommitRequest::Revise { .. } => PhaseDecision::Revise,
            PhaseCommitRequest::Abort { .. } => PhaseDecision::Abort,
        }
    }

    pub fn commit_message(&self) -> Option<&str> {
        match self {
            PhaseCommitRequest::CommitAndContinue { commit_message, .. }
            | PhaseCommitRequest::CommitAndPause { commit_message, .. } => Some(commit_message),
            PhaseCommitRequest::Revise { commit_message, .. }
            | PhaseCommitRequest::Abort { commit_message, .. } => commit_message.as_deref(),
        }
    }

    pub fn resolve(self) -> PhaseCommitPayload {
        let decision = self.decision();
        let (commit_message, notes) = match self {
            PhaseCommitRequest::CommitAndContinue {
                commit_message,
                notes,
            }
            | PhaseCommitRequest::CommitAndPause {
                commit_message,
                notes,
            } => (Some(commit_message), notes),
            PhaseCommitRequest::Revise {
                commit_message,
                notes,
            }
            | PhaseCommitRequest::Abort {
                commit_message,
                notes,
            } => (commit_message, notes),
        };

        PhaseCommitPayload {
            status: decision.status(),
            decision,
            commit_message,
            notes,
        }
    }
}

/// Response payload of the phase commit tool. Carries no summary text.
///
/// The commit message is echoed as `commitMessage`; absent optional
/// fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseCommitPayload {
    pub status: PhaseCommitStatus,
    pub decision: PhaseDecision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
