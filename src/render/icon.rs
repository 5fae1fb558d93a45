//! Embedded favicon.

use crate::render::RenderedResponse;

/// PNG asset compiled into the binary; no filesystem dependency at runtime.
static ICON_PNG: &[u8] = include_bytes!("../../assets/icon.png");

pub fn render_icon() -> RenderedResponse {
    RenderedResponse::ok("image/png", ICON_PNG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_is_png() {
        let response = render_icon();
        assert_eq!(response.status, 200);
        assert_eq!(response.content_type, "image/png");
        assert!(response.body.starts_with(b"\x89PNG\r\n\x1a\n"));
    }
}
