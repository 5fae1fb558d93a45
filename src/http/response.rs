//! HTTP/1.1 response framing.
//!
//! # Responsibilities
//! - Serialize a [`RenderedResponse`] into status line, headers, and body
//! - Attach the configured `Hostname` header to successful responses
//!
//! # Design Decisions
//! - Error responses carry `Content-Type` and `Content-Length` only
//! - `Connection: close` semantics are implicit; the handler closes the
//!   socket after every response, so no keep-alive headers are emitted

use crate::render::RenderedResponse;

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

/// Frame a rendered response as HTTP/1.1 bytes ready for the socket.
pub fn frame_response(response: &RenderedResponse, hostname: &str) -> Vec<u8> {
    let mut head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n",
        response.status,
        reason_phrase(response.status),
        response.content_type,
        response.body.len(),
    );
    if !response.is_error() {
        head.push_str("Hostname: ");
        head.push_str(hostname);
        head.push_str("\r\n");
    }
    head.push_str("\r\n");

    let mut framed = head.into_bytes();
    framed.extend_from_slice(&response.body);
    framed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_framing() {
        let framed = frame_response(
            &RenderedResponse::ok("application/json", "{}"),
            "sidecar",
        );
        let text = String::from_utf8(framed).unwrap();
        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("Content-Type: application/json\r\n"));
        assert!(text.contains("Content-Length: 2\r\n"));
        assert!(text.contains("Hostname: sidecar\r\n"));
        assert!(text.ends_with("\r\n\r\n{}"));
    }

    #[test]
    fn test_error_framing_omits_hostname() {
        let framed = frame_response(&RenderedResponse::not_found(), "sidecar");
        let text = String::from_utf8(framed).unwrap();
        assert!(text.starts_with("HTTP/1.1 404 Not Found\r\n"));
        assert!(!text.contains("Hostname:"));
        assert!(text.ends_with("\r\n\r\n404 Not Found"));
    }

    #[test]
    fn test_content_length_matches_binary_body() {
        let body = vec![0u8, 159, 146, 150];
        let framed = frame_response(&RenderedResponse::ok("image/png", body.clone()), "h");
        let text = String::from_utf8_lossy(&framed);
        assert!(text.contains("Content-Length: 4\r\n"));
        assert!(framed.ends_with(&body));
    }
}
