//! YAML renderer.
//!
//! Document marker followed by one `key: value` line per variable. Keys and
//! values are independently quoted only when [`needs_yaml_quoting`] says a
//! plain scalar would be misread.

use crate::env::Snapshot;
use crate::escape::{escape_yaml, needs_yaml_quoting};
use crate::render::RenderedResponse;

fn scalar(value: &str) -> String {
    if needs_yaml_quoting(value) {
        escape_yaml(value)
    } else {
        value.to_string()
    }
}

pub fn render_yaml(snapshot: &Snapshot, debug: bool) -> RenderedResponse {
    let content_type = if debug { "text/plain" } else { "application/yaml" };

    let mut body = String::from("---\n");
    for (key, value) in snapshot.iter() {
        body.push_str(&scalar(key));
        body.push_str(": ");
        body.push_str(&scalar(value));
        body.push('\n');
    }

    RenderedResponse::ok(content_type, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::RuleSet;

    fn snap(entries: &[&str]) -> Snapshot {
        Snapshot::build(entries, &RuleSet::compile(&[]).unwrap(), 100)
    }

    #[test]
    fn test_plain_scalars_unquoted() {
        let response = render_yaml(&snap(&["FOO=bar"]), false);
        assert_eq!(
            String::from_utf8(response.body).unwrap(),
            "---\nFOO: bar\n"
        );
        assert_eq!(response.content_type, "application/yaml");
    }

    #[test]
    fn test_reserved_and_special_values_quoted() {
        let response = render_yaml(&snap(&["FLAG=true", "LIST=a,b", "EMPTY="]), false);
        let body = String::from_utf8(response.body).unwrap();
        assert!(body.contains("FLAG: \"true\"\n"));
        assert!(body.contains("LIST: \"a,b\"\n"));
        assert!(body.contains("EMPTY: \"\"\n"));
    }

    #[test]
    fn test_newline_value_escaped() {
        let response = render_yaml(&snap(&["MULTI=a\nb"]), false);
        let body = String::from_utf8(response.body).unwrap();
        assert!(body.contains("MULTI: \"a\\nb\"\n"));
    }

    #[test]
    fn test_key_quoting_same_rule() {
        // "NO" is a YAML boolean; as a key it must be quoted too.
        let response = render_yaml(&snap(&["NO=x"]), false);
        let body = String::from_utf8(response.body).unwrap();
        assert!(body.contains("\"NO\": x\n"));
    }

    #[test]
    fn test_empty_snapshot_is_bare_document() {
        let response = render_yaml(&snap(&[]), false);
        assert_eq!(response.body, b"---\n");
    }

    #[test]
    fn test_debug_content_type() {
        assert_eq!(render_yaml(&snap(&[]), true).content_type, "text/plain");
    }
}
