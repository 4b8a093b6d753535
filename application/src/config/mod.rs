//! Application-level configuration.
//!
//! - [`ElicitationParams`]: validation strictness for the tool handlers

pub mod elicitation_params;

pub use elicitation_params::ElicitationParams;
