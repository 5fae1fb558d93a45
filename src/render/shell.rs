//! Shell-evaluable renderer.
//!
//! One `KEY="value"` assignment per line, values escaped for a POSIX
//! double-quoted string; export mode prefixes each line with `export `.

use crate::env::Snapshot;
use crate::escape::escape_shell_double;
use crate::render::RenderedResponse;

pub fn render_shell(snapshot: &Snapshot, export: bool) -> RenderedResponse {
    let mut body = String::new();
    for (key, value) in snapshot.iter() {
        if export {
            body.push_str("export ");
        }
        body.push_str(key);
        body.push_str("=\"");
        body.push_str(&escape_shell_double(value));
        body.push_str("\"\n");
    }
    RenderedResponse::ok("text/plain", body)
}
