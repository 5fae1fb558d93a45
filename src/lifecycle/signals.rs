//! OS signal handling.
//!
//! # Responsibilities
//! - Register SIGINT/SIGTERM handlers
//! - Translate the first signal into a shutdown trigger
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - The accept loop observes the trigger between connections; an in-flight
//!   request is allowed to finish

use crate::lifecycle::Shutdown;

/// Spawn a task that triggers shutdown on SIGINT or SIGTERM.
pub fn install_handlers(shutdown: &Shutdown) {
    let shutdown = shutdown.clone();

    tokio::spawn(async move {
        let ctrl_c = tokio::signal::ctrl_c();

        #[cfg(unix)]
        {
            let mut sigterm = match tokio::signal::unix::signal(
                tokio::signal::unix::SignalKind::terminate(),
            ) {
                Ok(s) => s,
                Err(e) => {
                    tracing::error!(error = %e, "failed to register SIGTERM handler");
                    return;
                }
            };
            tokio::select! {
                _ = ctrl_c => tracing::info!("SIGINT received"),
                _ = sigterm.recv() => tracing::info!("SIGTERM received"),
            }
        }

        #[cfg(not(unix))]
        {
            let _ = ctrl_c.await;
            tracing::info!("ctrl-c received");
        }

        shutdown.trigger();
    });
}
