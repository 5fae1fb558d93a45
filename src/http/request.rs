//! Request-line parsing.
//!
//! # Responsibilities
//! - Extract the method and path tokens from the first line of a request
//! - Treat malformed input as a defined, testable branch
//!
//! # Design Decisions
//! - Deliberately not a full HTTP parser: only GET without a body is
//!   served, so headers and bodies are never inspected
//! - Explicit token state machine; everything after the second token
//!   (usually the HTTP version) is ignored
//! - Fewer than two tokens is a parse failure, reported as `None` and
//!   turned into a 400 by the caller

/// Method and path extracted from a request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: String,
    pub path: String,
}

/// Tokenizer state while scanning the request line.
enum State {
    Method,
    Gap,
    Path,
}

/// Parse the first line of a raw request buffer.
///
/// Scans up to the first CR or LF. Returns `None` when the line does not
/// contain two whitespace-separated tokens.
pub fn parse_request_line(buf: &[u8]) -> Option<RequestLine> {
    let line_end = buf
        .iter()
        .position(|&b| b == b'\r' || b == b'\n')
        .unwrap_or(buf.len());
    let line = &buf[..line_end];

    let mut method = Vec::new();
    let mut path = Vec::new();
    let mut state = State::Method;

    for &b in line {
        let is_space = b == b' ' || b == b'\t';
        match state {
            State::Method => {
                if is_space {
                    if method.is_empty() {
                        continue; // leading whitespace
                    }
                    state = State::Gap;
                } else {
                    method.push(b);
                }
            }
            State::Gap => {
                if !is_space {
                    path.push(b);
                    state = State::Path;
                }
            }
            State::Path => {
                if is_space {
                    break; // remainder (HTTP version) ignored
                }
                path.push(b);
            }
        }
    }

    if method.is_empty() || path.is_empty() {
        return None;
    }

    Some(RequestLine {
        method: String::from_utf8_lossy(&method).into_owned(),
        path: String::from_utf8_lossy(&path).into_owned(),
    })
}
