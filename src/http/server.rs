//! Accept loop and connection handling.
//!
//! # Responsibilities
//! - Accept connections from a bound listener
//! - Read one request, dispatch it, write one framed response, close
//! - Contain per-connection failures so the loop never dies
//!
//! # Design Decisions
//! - Strictly sequential: each connection is handled to completion before
//!   the next accept. The snapshot is immutable, so there is no shared
//!   state to protect and nothing to gain from overlap at sidecar scale
//! - One bounded read per request; a request longer than the buffer is
//!   truncated, which is harmless because only the first line matters
//! - No read or write timeouts; a stalled client stalls the loop. Known
//!   limitation of the sequential model
//! - Shutdown is checked between connections, never mid-request

use std::sync::Arc;

use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};

use crate::config::ServerConfig;
use crate::env::Snapshot;
use crate::http::request::parse_request_line;
use crate::http::response::frame_response;
use crate::render::RenderedResponse;
use crate::routing::dispatch;

/// Upper bound on a single request read. Only the request line is parsed.
const READ_BUFFER_SIZE: usize = 4096;

/// Responses are flushed to the socket in chunks of this size.
const WRITE_CHUNK_SIZE: usize = 8192;

/// One-request-per-connection HTTP server over an immutable snapshot.
pub struct HttpServer {
    config: ServerConfig,
    snapshot: Arc<Snapshot>,
}

impl HttpServer {
    pub fn new(config: ServerConfig, snapshot: Arc<Snapshot>) -> Self {
        Self { config, snapshot }
    }

    /// Serve connections until the shutdown signal fires.
    ///
    /// Accept errors are logged and the loop continues; only shutdown ends
    /// it. In-flight requests finish before the signal is observed.
    pub async fn run(
        &self,
        listener: TcpListener,
        mut shutdown: tokio::sync::broadcast::Receiver<()>,
    ) -> std::io::Result<()> {
        loop {
            tokio::select! {
                accepted = listener.accept() => {
                    match accepted {
                        Ok((stream, peer)) => {
                            tracing::debug!(peer = %peer, "connection accepted");
                            if let Err(e) = self.handle_connection(stream).await {
                                tracing::warn!(peer = %peer, error = %e, "connection failed");
                            }
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "accept failed");
                        }
                    }
                }
                _ = shutdown.recv() => {
                    tracing::info!("shutdown signal received, leaving accept loop");
                    return Ok(());
                }
            }
        }
    }

    /// Read one request, write one response, close.
    async fn handle_connection(&self, mut stream: TcpStream) -> std::io::Result<()> {
        use tokio::io::AsyncReadExt;

        // Single bounded read; anything past the buffer is never needed
        // because only the request line is parsed.
        let mut buf = [0u8; READ_BUFFER_SIZE];
        let n = stream.read(&mut buf).await?;

        let response = self.respond(&buf[..n]);
        tracing::info!(
            status = response.status,
            bytes = response.body.len(),
            "request handled"
        );

        let framed = frame_response(&response, &self.config.hostname);
        for chunk in framed.chunks(WRITE_CHUNK_SIZE) {
            // A send error abandons the rest of the body; the socket is
            // closed either way when the stream drops.
            stream.write_all(chunk).await?;
        }
        stream.shutdown().await?;
        Ok(())
    }

    /// Parse and route a raw request buffer.
    fn respond(&self, buf: &[u8]) -> RenderedResponse {
        match parse_request_line(buf) {
            Some(line) => dispatch(&line.method, &line.path, &self.snapshot, &self.config),
            None => {
                tracing::debug!("malformed request line");
                RenderedResponse::bad_request()
            }
        }
    }
}
