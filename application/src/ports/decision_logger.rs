//! Port for structured decision logging.
//!
//! Defines the [`DecisionLogger`] trait for recording the outcome of every
//! elicitation call (accepted decisions and rejected inputs) to a durable,
//! machine-readable log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures the decision record
//! (e.g. JSONL) that an orchestrator can audit later.

use serde_json::Value;

/// A structured decision event for logging.
pub struct DecisionEvent {
    /// Event type identifier (e.g., "elicitation_completed", "elicitation_rejected").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl DecisionEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging decision events.
///
/// `log` is synchronous and infallible: a failing log sink must never turn
/// a valid decision into a failed tool call.
pub trait DecisionLogger: Send + Sync {
    /// Record a decision event.
    fn log(&self, event: DecisionEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoDecisionLogger;

impl DecisionLogger for NoDecisionLogger {
    fn log(&self, _event: DecisionEvent) {}
}
