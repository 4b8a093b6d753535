//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ElicitationError`]: validation and routing failures

pub mod error;
