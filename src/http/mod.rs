//! Minimal HTTP layer: request-line parsing, response framing, accept loop.

pub mod request;
pub mod response;
pub mod server;

pub use request::{parse_request_line, RequestLine};
pub use response::frame_response;
pub use server::HttpServer;
