//! Error type of the Quote Server request path.
//!
//! Every variant maps to a bare `500 Internal Server Error`; the cause is only
//! written to the log, never to the response body.
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use quote_common::QuoteError;
use thiserror::Error;

/// Failure of one `/cotacao` request.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Upstream fetch failed: transport, status, deadline or decoding.
    #[error("Upstream fetch failed: {0}")]
    Upstream(#[from] QuoteError),

    /// Opening, creating or writing the SQLite database failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The insert did not complete before its deadline.
    #[error("Insert timed out after {0:?}")]
    PersistTimeout(Duration),

    /// The detached request task panicked or was aborted.
    #[error("Request task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self);
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
