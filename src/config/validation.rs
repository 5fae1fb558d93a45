//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check glob patterns compile
//! - Validate value ranges (port, cap, rule count)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: `ServerConfig` → `Result<(), Vec<ValidationError>>`
//! - Runs before the config is accepted into the system

use thiserror::Error;
use wax::Glob;

use crate::config::schema::{ServerConfig, MAX_RULES};

/// A single validation failure.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("port must be non-zero")]
    ZeroPort,

    #[error("hostname must not be empty")]
    EmptyHostname,

    #[error("hostname contains control characters")]
    HostnameControlChars,

    #[error("max_vars must be at least 1")]
    ZeroMaxVars,

    #[error("too many rules: {count} (maximum {MAX_RULES})")]
    TooManyRules { count: usize },

    #[error("rule {index}: invalid glob '{glob}': {reason}")]
    InvalidGlob {
        index: usize,
        glob: String,
        reason: String,
    },

    #[error("rule {index}: empty glob pattern")]
    EmptyGlob { index: usize },
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }
    if config.hostname.is_empty() {
        errors.push(ValidationError::EmptyHostname);
    } else if config.hostname.chars().any(|c| c.is_control()) {
        // The hostname is echoed verbatim in a response header; a CR/LF
        // here would split the header.
        errors.push(ValidationError::HostnameControlChars);
    }
    if config.max_vars == 0 {
        errors.push(ValidationError::ZeroMaxVars);
    }
    if config.rules.len() > MAX_RULES {
        errors.push(ValidationError::TooManyRules {
            count: config.rules.len(),
        });
    }

    for (index, rule) in config.rules.iter().enumerate() {
        if rule.glob.is_empty() {
            errors.push(ValidationError::EmptyGlob { index });
        } else if let Err(e) = Glob::new(&rule.glob) {
            errors.push(ValidationError::InvalidGlob {
                index,
                glob: rule.glob.clone(),
                reason: e.to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
