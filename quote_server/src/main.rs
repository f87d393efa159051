//! USD-BRL quote HTTP server.
//!
//! This binary serves a single endpoint, `GET /cotacao`. Each request wires
//! together three building blocks, each failing closed:
//!
//! - `PriceStore` — opens (or creates) the SQLite file and the `prices` table.
//! - `QuoteFetcher` — fetches the current quote from the upstream provider within
//!   the fetch deadline (200ms by default).
//! - `PriceStore::insert` — stores the whole quote as a new row within the persist
//!   deadline (10ms by default).
//!
//! On success the caller receives `{"bid": "<bid>"}`; on any failure a bare 500.
//!
//! Concurrency and shutdown:
//! - axum/hyper run one task per connection; no mutable state is shared between
//!   requests, and every request owns its own database connection.
//! - Ctrl+C stops accepting new connections and lets in-flight requests finish.
//!
//! Usage example (CLI):
//! ```bash
//! RUST_LOG=debug quote_server --bind 0.0.0.0:8080 --database ./sqlite.db
//! ```
#![warn(missing_docs)]
mod args;
mod error;
mod handler;
mod storage;
mod upstream;

use crate::args::{Args, ServerConfig};
use crate::handler::{AppState, router};
use clap::Parser;
use log::{error, info};
use quote_common::QuoteError;
use reqwest::Client;

#[tokio::main]
async fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();
    let config = ServerConfig::from(&args);
    info!(
        "Upstream {} (deadline {:?}), database {} (insert deadline {:?})",
        config.upstream_url,
        config.fetch_timeout,
        config.database.display(),
        config.persist_timeout
    );

    let client = Client::builder().build()?;
    let app = router(AppState::new(config, client));

    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    info!("Quote server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Quote server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl+C received. Shutting down server..."),
        Err(e) => {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
