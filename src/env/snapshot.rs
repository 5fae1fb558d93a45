//! Immutable environment snapshot.
//!
//! # Responsibilities
//! - Split raw `KEY=VALUE` entries, dropping malformed ones
//! - Apply the rule set to each key
//! - Enforce the configured variable cap
//!
//! # Design Decisions
//! - Built once before the accept loop starts; never mutated afterwards,
//!   so request handlers share it without locks
//! - Insertion order preserves the original environment enumeration order
//! - Construction never fails: malformed entries and over-cap entries are
//!   silently dropped

use crate::env::rules::RuleSet;

/// The filtered, ordered set of environment variables visible to handlers.
pub struct Snapshot {
    vars: Vec<(String, String)>,
}

impl Snapshot {
    /// Build a snapshot from raw `KEY=VALUE` entries.
    ///
    /// Entries without `=` or with an empty key are skipped. Once `cap`
    /// variables have been accepted, remaining entries are ignored.
    pub fn build<I, S>(raw_env: I, rules: &RuleSet, cap: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vars = Vec::new();
        for entry in raw_env {
            if vars.len() >= cap {
                tracing::debug!(cap, "variable cap reached, ignoring remaining entries");
                break;
            }
            let entry = entry.as_ref();
            let Some((key, value)) = entry.split_once('=') else {
                tracing::debug!(entry, "skipping malformed environment entry");
                continue;
            };
            if key.is_empty() {
                continue;
            }
            if rules.is_visible(key) {
                vars.push((key.to_string(), value.to_string()));
            }
        }
        Self { vars }
    }

    /// Build from the live process environment.
    ///
    /// Entries whose key or value is not valid UTF-8 are dropped like any
    /// other malformed entry; construction never fails.
    pub fn from_process_env(rules: &RuleSet, cap: usize) -> Self {
        let raw: Vec<String> = std::env::vars_os()
            .filter_map(|(k, v)| match (k.into_string(), v.into_string()) {
                (Ok(k), Ok(v)) => Some(format!("{}={}", k, v)),
                _ => {
                    tracing::debug!("skipping non-UTF-8 environment entry");
                    None
                }
            })
            .collect();
        Self::build(raw, rules, cap)
    }

    /// Iterate `(key, value)` pairs in snapshot order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Look up a single variable by exact name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of visible variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// True when no variables are visible.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PatternRule, RuleKind};

    fn no_rules() -> RuleSet {
        RuleSet::compile(&[]).unwrap()
    }

    #[test]
    fn test_build_preserves_order() {
        let snap = Snapshot::build(["B=2", "A=1", "C=3"], &no_rules(), 100);
        let keys: Vec<&str> = snap.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["B", "A", "C"]);
    }

    #[test]
    fn test_malformed_entries_dropped() {
        let snap = Snapshot::build(["FOO=bar", "NOEQUALS", "=novalue"], &no_rules(), 100);
        assert_eq!(snap.len(), 1);
        assert_eq!(snap.get("FOO"), Some("bar"));
    }

    #[test]
    fn test_value_keeps_later_equals() {
        let snap = Snapshot::build(["KEY=a=b=c"], &no_rules(), 100);
        assert_eq!(snap.get("KEY"), Some("a=b=c"));
    }

    #[test]
    fn test_default_exclusions_applied() {
        let snap = Snapshot::build(["PATH=/bin", "HOME=/root", "FOO=bar"], &no_rules(), 100);
        assert_eq!(snap.len(), 1);
        assert_eq!(snap.get("PATH"), None);
        assert_eq!(snap.get("HOME"), None);
    }

    #[test]
    fn test_exclude_rule() {
        let rules = RuleSet::compile(&[PatternRule {
            kind: RuleKind::Exclude,
            glob: "SECRET".to_string(),
        }])
        .unwrap();
        let snap = Snapshot::build(["FOO=bar", "PATH=/bin", "SECRET=x"], &rules, 100);
        let pairs: Vec<(&str, &str)> = snap.iter().collect();
        assert_eq!(pairs, [("FOO", "bar")]);
    }

    #[test]
    fn test_cap_enforced() {
        let entries: Vec<String> = (0..10).map(|i| format!("VAR{}=v{}", i, i)).collect();
        let snap = Snapshot::build(&entries, &no_rules(), 4);
        assert_eq!(snap.len(), 4);
        let keys: Vec<&str> = snap.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["VAR0", "VAR1", "VAR2", "VAR3"]);
    }

    #[test]
    #[cfg(unix)]
    fn test_non_utf8_process_entry_dropped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        std::env::set_var("SNAP_TEST_GOOD", "ok");
        std::env::set_var("SNAP_TEST_BAD", OsStr::from_bytes(b"\xff\xfe"));

        let snap = Snapshot::from_process_env(&no_rules(), 10_000);
        assert_eq!(snap.get("SNAP_TEST_GOOD"), Some("ok"));
        assert_eq!(snap.get("SNAP_TEST_BAD"), None);
    }

    #[test]
    fn test_empty_value_kept() {
        let snap = Snapshot::build(["EMPTY="], &no_rules(), 100);
        assert_eq!(snap.get("EMPTY"), Some(""));
    }
}
