//! JSON renderer, compact and pretty.
//!
//! The object is assembled by hand so that the byte layout matches the
//! documented format exactly: keys raw, values JSON-escaped, no trailing
//! comma, empty snapshot rendered as `{}`.

use crate::env::Snapshot;
use crate::escape::escape_json;
use crate::render::RenderedResponse;

pub fn render_json(snapshot: &Snapshot, pretty: bool, debug: bool) -> RenderedResponse {
    let content_type = if debug { "text/plain" } else { "application/json" };

    if snapshot.is_empty() {
        return RenderedResponse::ok(content_type, "{}");
    }

    let mut body = String::from(if pretty { "{\n" } else { "{" });
    let mut first = true;
    for (key, value) in snapshot.iter() {
        if !first {
            body.push_str(if pretty { ",\n" } else { "," });
        }
        first = false;
        if pretty {
            body.push_str("  ");
        }
        body.push('"');
        body.push_str(key);
        body.push_str(if pretty { "\": \"" } else { "\":\"" });
        body.push_str(&escape_json(value));
        body.push('"');
    }
    body.push_str(if pretty { "\n}" } else { "}" });

    RenderedResponse::ok(content_type, body)
}
