//! envhttpd — expose a process's environment variables over HTTP.
//!
//! # Architecture Overview
//!
//! ```text
//!   CLI / config file ──▶ ServerConfig ──▶ RuleSet ──▶ Snapshot (built once,
//!                                                       immutable)
//!                                                          │
//!   TCP connection ──▶ http::server ──▶ http::request ──▶ routing ──▶ render
//!                       (sequential)     (first line)                 (+ escape)
//!                                                          │
//!                                        http::response ◀──┘
//!                                        (framed bytes, close socket)
//! ```
//!
//! The snapshot is read exactly once at startup, filtered through ordered
//! include/exclude glob rules (last match wins, `PATH`/`HOME` hidden by
//! default), and never refreshed. Every endpoint renders that one snapshot:
//! HTML table at `/`, JSON at `/json` (`/json?pretty`), YAML at `/yaml`,
//! shell assignments at `/sh` (`/sh?export`), single values at `/var/<name>`,
//! host info at `/sys`.
//!
//! Connections are handled strictly sequentially: one bounded read, one
//! framed response, close. No keep-alive, no TLS, no request bodies.

pub mod config;
pub mod env;
pub mod escape;
pub mod http;
pub mod lifecycle;
pub mod render;
pub mod routing;

pub use config::ServerConfig;
pub use env::{RuleSet, Snapshot};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
