//! Format renderers.
//!
//! # Responsibilities
//! - Turn the immutable [`Snapshot`](crate::env::Snapshot) into a content-typed
//!   byte payload, one renderer per output format
//! - Keep snapshot iteration order identical across all formats
//!
//! # Design Decisions
//! - Renderers are pure functions; they allocate one output buffer and push
//!   pre-escaped fragments into it, never touching shared state
//! - Escaping is delegated entirely to [`crate::escape`]
//! - The debug flag only swaps content-type strings, never body bytes

pub mod homepage;
pub mod icon;
pub mod json;
pub mod shell;
pub mod sysinfo;
pub mod var;
pub mod yaml;

pub use homepage::render_homepage;
pub use icon::render_icon;
pub use json::render_json;
pub use shell::render_shell;
pub use sysinfo::render_sysinfo;
pub use var::render_var;
pub use yaml::render_yaml;

/// A response produced by a renderer, not yet framed as HTTP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl RenderedResponse {
    pub fn ok(content_type: &'static str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            content_type,
            body: body.into(),
        }
    }

    /// Plain-text error response.
    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: message.as_bytes().to_vec(),
        }
    }

    pub fn not_found() -> Self {
        Self::error(404, "404 Not Found")
    }

    pub fn method_not_allowed() -> Self {
        Self::error(405, "405 Method Not Allowed")
    }

    pub fn bad_request() -> Self {
        Self::error(400, "400 Bad Request")
    }

    /// Error responses omit the `Hostname` header when framed.
    pub fn is_error(&self) -> bool {
        self.status >= 400
    }
}
