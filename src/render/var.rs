//! Single-variable renderer.
//!
//! Emits the raw, unescaped value of one variable, or a 404 when the name
//! is not in the snapshot.

use crate::env::Snapshot;
use crate::render::RenderedResponse;

pub fn render_var(snapshot: &Snapshot, name: &str) -> RenderedResponse {
    match snapshot.get(name) {
        Some(value) => RenderedResponse::ok("text/plain", value.as_bytes().to_vec()),
        None => RenderedResponse::error(404, "Variable Not Found"),
    }
}
