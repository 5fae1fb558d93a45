//! Environment snapshot and filtering.
//!
//! The process environment is read exactly once at startup, filtered through
//! the configured pattern rules, and frozen into a [`Snapshot`] that every
//! request handler reads for the lifetime of the server.

pub mod rules;
pub mod snapshot;

pub use rules::{RuleSet, RuleSetError};
pub use snapshot::Snapshot;
