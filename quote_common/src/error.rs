//! Error types shared between client and server.
//!
//! The `QuoteError` enum unifies the failure cases of a single HTTP round trip
//! (transport, status, deadline, body decoding) plus local I/O, allowing both
//! binaries to propagate a single error type.
use std::io;
use std::time::Duration;

use thiserror::Error;

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the standard library or sockets/files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Transport failure reported by reqwest (connection refused, reset, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The peer answered, but not with `200 OK`.
    #[error("Unexpected HTTP status: {0}")]
    UnexpectedStatus(u16),

    /// The operation did not finish before its deadline and was cancelled.
    #[error("{operation} timed out after {after:?}")]
    Timeout {
        /// Short name of the cancelled operation.
        operation: &'static str,
        /// The deadline that was exceeded.
        after: Duration,
    },
}
