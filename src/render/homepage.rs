//! HTML homepage renderer.
//!
//! Two-column table: variable name linking to its `/var/` endpoint, value in
//! a preformatted block. Names and values are HTML-escaped; link targets are
//! percent-encoded.

use crate::env::Snapshot;
use crate::escape::{escape_html, escape_url_component};
use crate::render::RenderedResponse;

pub fn render_homepage(snapshot: &Snapshot) -> RenderedResponse {
    let mut html =
        String::from("<html><head><title>envhttpd</title></head><body><table>");

    for (key, value) in snapshot.iter() {
        let href = escape_url_component(key);
        let name = escape_html(key);
        let val = escape_html(value);
        html.push_str(&format!(
            "<tr><td><strong><a href=\"/var/{href}\" title=\"{name}\">{name}</a></strong></td><td><pre>{val}</pre></td></tr>\n",
        ));
    }

    html.push_str("</table></body></html>");
    RenderedResponse::ok("text/html", html)
}
