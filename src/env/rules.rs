//! Include/exclude rule evaluation.
//!
//! # Responsibilities
//! - Compile configured glob patterns once at startup
//! - Decide visibility for a variable name (last-match-wins)
//! - Apply the built-in `PATH`/`HOME` default exclusions
//!
//! # Design Decisions
//! - Rules are evaluated in declaration order; the last rule matching a key
//!   determines its visibility, overriding the default exclusions
//! - Matching is case-sensitive shell-glob (`*`, `?`, `[...]`); variable
//!   names contain no path separators, so no separator special-casing
//! - Immutable after construction (thread-safe without locks)

use thiserror::Error;
use wax::{Glob, Program};

use crate::config::{PatternRule, RuleKind};

/// Variable names hidden unless a rule explicitly re-includes them.
const DEFAULT_EXCLUSIONS: [&str; 2] = ["PATH", "HOME"];

/// A pattern failed to compile into a glob.
#[derive(Debug, Error)]
#[error("invalid glob pattern '{pattern}': {reason}")]
pub struct RuleSetError {
    pub pattern: String,
    pub reason: String,
}

/// One compiled rule.
struct CompiledRule {
    kind: RuleKind,
    glob: Glob<'static>,
}

/// Ordered set of compiled include/exclude rules.
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    /// Compile an ordered rule list. Fails on the first invalid pattern.
    pub fn compile(rules: &[PatternRule]) -> Result<Self, RuleSetError> {
        let compiled = rules
            .iter()
            .map(|rule| {
                Glob::new(&rule.glob)
                    .map(|glob| CompiledRule {
                        kind: rule.kind,
                        glob: glob.into_owned(),
                    })
                    .map_err(|e| RuleSetError {
                        pattern: rule.glob.clone(),
                        reason: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules: compiled })
    }

    /// Whether a variable named `key` is visible.
    ///
    /// Starts from the default (hidden for `PATH`/`HOME`, visible otherwise),
    /// then lets every matching rule overwrite the decision in order.
    pub fn is_visible(&self, key: &str) -> bool {
        let mut included = !DEFAULT_EXCLUSIONS.contains(&key);
        for rule in &self.rules {
            if rule.glob.is_match(key) {
                included = rule.kind == RuleKind::Include;
            }
        }
        included
    }

    /// Number of compiled rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no rules are configured.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
