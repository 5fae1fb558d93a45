//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Map method + path to a renderer
//! - Enforce GET-only access
//!
//! # Design Decisions
//! - `/json?pretty` and `/sh?export` are literal whole-path matches, not
//!   parsed query strings; `/json?pretty=1` is a plain `/json`. Kept for
//!   compatibility with existing clients
//! - `/var/<name>` strips a trailing `?...` marker and percent-decodes the
//!   name before lookup, matching the links the homepage emits
//! - Explicit NotFound rather than silent default

use crate::config::ServerConfig;
use crate::env::Snapshot;
use crate::render::{
    render_homepage, render_icon, render_json, render_shell, render_sysinfo, render_var,
    render_yaml, RenderedResponse,
};

/// Resolve a parsed request line against the routing table.
pub fn dispatch(
    method: &str,
    path: &str,
    snapshot: &Snapshot,
    config: &ServerConfig,
) -> RenderedResponse {
    if method != "GET" {
        return RenderedResponse::method_not_allowed();
    }

    match path {
        "/" => render_homepage(snapshot),
        "/icon.png" => render_icon(),
        "/json" => render_json(snapshot, false, config.debug),
        "/json?pretty" => render_json(snapshot, true, config.debug),
        "/yaml" => render_yaml(snapshot, config.debug),
        "/sh" => render_shell(snapshot, false),
        "/sh?export" => render_shell(snapshot, true),
        "/sys" => render_sysinfo(),
        _ => match path.strip_prefix("/var/") {
            Some(rest) => {
                let name = rest.split('?').next().unwrap_or(rest);
                render_var(snapshot, &decode_percent(name))
            }
            None => RenderedResponse::not_found(),
        },
    }
}

/// Decode `%XX` sequences so homepage links to percent-encoded names resolve.
///
/// Invalid or truncated sequences are passed through literally.
fn decode_percent(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if let (Some(hi), Some(lo)) = (
                bytes.get(i + 1).and_then(|b| (*b as char).to_digit(16)),
                bytes.get(i + 2).and_then(|b| (*b as char).to_digit(16)),
            ) {
                out.push((hi * 16 + lo) as u8);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::RuleSet;

    fn snap(entries: &[&str]) -> Snapshot {
        Snapshot::build(entries, &RuleSet::compile(&[]).unwrap(), 100)
    }

    fn config() -> ServerConfig {
        ServerConfig::default()
    }

    #[test]
    fn test_known_routes() {
        let snapshot = snap(&["FOO=bar"]);
        let config = config();
        for (path, content_type) in [
            ("/", "text/html"),
            ("/icon.png", "image/png"),
            ("/json", "application/json"),
            ("/yaml", "application/yaml"),
            ("/sh", "text/plain"),
            ("/sys", "text/plain"),
        ] {
            let response = dispatch("GET", path, &snapshot, &config);
            assert_eq!(response.status, 200, "path {path}");
            assert_eq!(response.content_type, content_type, "path {path}");
        }
    }

    #[test]
    fn test_literal_query_suffixes() {
        let snapshot = snap(&["A=1", "B=2"]);
        let config = config();

        let pretty = dispatch("GET", "/json?pretty", &snapshot, &config);
        assert!(pretty.body.contains(&b'\n'));

        // Anything but the exact literal falls through to 404.
        assert_eq!(dispatch("GET", "/json?pretty=1", &snapshot, &config).status, 404);
        assert_eq!(dispatch("GET", "/sh?export=1", &snapshot, &config).status, 404);

        let export = dispatch("GET", "/sh?export", &snapshot, &config);
        assert!(export.body.starts_with(b"export "));
    }

    #[test]
    fn test_var_lookup() {
        let snapshot = snap(&["FOO=bar"]);
        let config = config();
        assert_eq!(dispatch("GET", "/var/FOO", &snapshot, &config).body, b"bar");
        assert_eq!(dispatch("GET", "/var/MISSING", &snapshot, &config).status, 404);
        // Trailing query marker is stripped before lookup.
        assert_eq!(dispatch("GET", "/var/FOO?x=1", &snapshot, &config).body, b"bar");
    }

    #[test]
    fn test_var_percent_decoded() {
        let snapshot = snap(&["ODD KEY=v"]);
        let response = dispatch("GET", "/var/ODD%20KEY", &snapshot, &config());
        assert_eq!(response.body, b"v");
    }

    #[test]
    fn test_unknown_path_404() {
        let snapshot = snap(&[]);
        assert_eq!(dispatch("GET", "/nope", &snapshot, &config()).status, 404);
        assert_eq!(dispatch("GET", "/var", &snapshot, &config()).status, 404);
    }

    #[test]
    fn test_non_get_405() {
        let snapshot = snap(&["FOO=bar"]);
        let config = config();
        for method in ["POST", "PUT", "DELETE", "HEAD", "get"] {
            let response = dispatch(method, "/", &snapshot, &config);
            assert_eq!(response.status, 405, "method {method}");
        }
    }

    #[test]
    fn test_decode_percent_edge_cases() {
        assert_eq!(decode_percent("plain"), "plain");
        assert_eq!(decode_percent("a%20b"), "a b");
        assert_eq!(decode_percent("%2F"), "/");
        assert_eq!(decode_percent("bad%2"), "bad%2");
        assert_eq!(decode_percent("bad%zz"), "bad%zz");
        assert_eq!(decode_percent("%"), "%");
    }
}
