//! The `/cotacao` endpoint.
//!
//! Each request runs three steps in order and stops at the first failure:
//! open the price store, fetch the upstream quote, insert it. Only when all three
//! succeed does the caller get `200 {"bid": "..."}`; otherwise it gets a bare 500.
//!
//! The steps run on a detached task: a caller that hangs up does not cancel the
//! fetch or the insert. The store is closed on its own task after the outcome is
//! known, so a slow close never delays the response.
use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use log::warn;
use quote_common::Bid;
use quote_common::net::QUOTE_PATH;
use reqwest::Client;

use crate::args::ServerConfig;
use crate::error::ServerError;
use crate::storage::PriceStore;
use crate::upstream::QuoteFetcher;

/// State shared by all requests. Read-only; nothing in here is mutated per request.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
    fetcher: QuoteFetcher,
}

impl AppState {
    pub fn new(config: ServerConfig, client: Client) -> Self {
        let fetcher = QuoteFetcher::new(client, config.upstream_url.clone(), config.fetch_timeout);
        Self {
            config: Arc::new(config),
            fetcher,
        }
    }
}

/// Build the application router. The only route is `GET /cotacao`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(QUOTE_PATH, get(get_cotacao))
        .with_state(state)
}

async fn get_cotacao(State(state): State<AppState>) -> Result<Json<Bid>, ServerError> {
    let bid = tokio::spawn(process(state)).await??;
    Ok(Json(bid))
}

async fn process(state: AppState) -> Result<Bid, ServerError> {
    let mut store = PriceStore::open(&state.config.database).await?;
    let outcome = fetch_and_store(&state, &mut store).await;
    tokio::spawn(async move {
        if let Err(e) = store.close().await {
            warn!("Failed to close price store: {}", e);
        }
    });
    outcome
}

async fn fetch_and_store(state: &AppState, store: &mut PriceStore) -> Result<Bid, ServerError> {
    let quote = state.fetcher.fetch().await?;
    store.insert(&quote, state.config.persist_timeout).await?;
    Ok(Bid::from(&quote))
}
