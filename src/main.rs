use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use envhttpd::config::parse_config;
use envhttpd::env::{RuleSet, Snapshot};
use envhttpd::http::HttpServer;
use envhttpd::lifecycle::{install_handlers, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_config()?;

    let default_filter = if config.debug {
        "envhttpd=debug"
    } else {
        "envhttpd=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("envhttpd v0.1.0 starting");

    let rules = RuleSet::compile(&config.rules)?;
    let snapshot = Arc::new(Snapshot::from_process_env(&rules, config.max_vars));

    tracing::info!(
        visible_vars = snapshot.len(),
        rules = rules.len(),
        cap = config.max_vars,
        "environment snapshot built"
    );

    let listener = TcpListener::bind(config.bind_address()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        hostname = %config.hostname,
        "listening for connections"
    );

    let shutdown = Shutdown::new();
    install_handlers(&shutdown);

    let server = HttpServer::new(config, snapshot);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
