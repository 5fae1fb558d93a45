//! Configuration schema definitions.
//!
//! All types derive Serde traits so a config file can supply any subset of
//! fields; the CLI layer overrides individual fields afterwards.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 8111;
pub const DEFAULT_HOSTNAME: &str = "localhost";
pub const DEFAULT_MAX_VARS: usize = 1000;
pub const MAX_RULES: usize = 100;

/// Whether a matching rule includes or excludes a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Include,
    Exclude,
}

/// One glob rule. Declaration order is significant: among all rules
/// matching a key, the last one declared decides visibility.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PatternRule {
    pub kind: RuleKind,
    pub glob: String,
}

impl PatternRule {
    pub fn include(glob: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::Include,
            glob: glob.into(),
        }
    }

    pub fn exclude(glob: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::Exclude,
            glob: glob.into(),
        }
    }
}

/// Root configuration for the server.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// TCP port to listen on.
    pub port: u16,

    /// Value of the `Hostname` response header.
    pub hostname: String,

    /// Debug mode: verbose logging, `text/plain` content types for
    /// JSON and YAML responses.
    pub debug: bool,

    /// Maximum number of variables retained in the snapshot.
    pub max_vars: usize,

    /// Ordered include/exclude rules.
    pub rules: Vec<PatternRule>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            hostname: DEFAULT_HOSTNAME.to_string(),
            debug: false,
            max_vars: DEFAULT_MAX_VARS,
            rules: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Address string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
