//! Shared networking constants and helpers used by client and server.
use std::time::Duration;

use log::debug;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::QuoteError;
use crate::result::Result;

/// HTTP port the quote server listens on.
pub const SERVER_PORT: u16 = 8080;
/// The single endpoint exposed by the quote server.
pub const QUOTE_PATH: &str = "/cotacao";
/// Upstream provider for the current USD-BRL quote.
pub const UPSTREAM_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";

/// Deadline for the upstream fetch, in milliseconds.
pub const UPSTREAM_DEADLINE_MS: u64 = 200;
/// Deadline for inserting one price row, in milliseconds.
/// Kept at the historical value; slow disks will routinely exceed it.
pub const PERSIST_DEADLINE_MS: u64 = 10;
/// Deadline for the client's request to the quote server, in milliseconds.
pub const CLIENT_DEADLINE_MS: u64 = 300;

/// SQLite file used by the server, relative to its working directory.
pub const DATABASE_FILE: &str = "sqlite.db";
/// Text file written by the client.
pub const OUTPUT_FILE: &str = "cotacao.txt";
/// Prefix of the line written to `OUTPUT_FILE`.
pub const OUTPUT_PREFIX: &str = "Dólar: ";

/// Helper to format an address with a port like "ip:port".
pub fn addr(ip: &str, port: u16) -> String {
    format!("{}:{}", ip, port)
}

/// Default URL the client calls.
pub fn default_server_url() -> String {
    format!("http://{}{}", addr("localhost", SERVER_PORT), QUOTE_PATH)
}

/// Issue one GET to `url` and decode the JSON body as `T`.
///
/// The whole exchange (connect, response headers, body, decoding) must finish
/// within `deadline`, otherwise the request is dropped and
/// `QuoteError::Timeout` is returned. Anything other than `200 OK` is an error.
/// There are no retries.
pub async fn get_json<T: DeserializeOwned>(client: &Client, url: &str, deadline: Duration) -> Result<T> {
    let exchange = async {
        let res = client.get(url).send().await?;
        let status = res.status();
        if status != StatusCode::OK {
            return Err(QuoteError::UnexpectedStatus(status.as_u16()));
        }
        let body = res.bytes().await?;
        debug!("GET {} -> {} bytes", url, body.len());
        Ok::<T, QuoteError>(serde_json::from_slice(&body)?)
    };

    tokio::time::timeout(deadline, exchange)
        .await
        .map_err(|_| QuoteError::Timeout {
            operation: "GET request",
            after: deadline,
        })?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::Bid;
    use axum::Router;
    use axum::http::StatusCode as AxumStatus;
    use axum::routing::get;
    use std::net::SocketAddr;

    async fn spawn(router: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let local = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        local
    }

    fn url(local: SocketAddr) -> String {
        format!("http://{}/", local)
    }

    #[test]
    fn default_url_targets_localhost() {
        assert_eq!(default_server_url(), "http://localhost:8080/cotacao");
    }

    #[tokio::test]
    async fn decodes_json_within_deadline() {
        let local = spawn(Router::new().route("/", get(|| async { r#"{"bid":"5.00"}"# }))).await;
        let bid: Bid = get_json(&Client::new(), &url(local), Duration::from_millis(500))
            .await
            .unwrap();
        assert_eq!(bid.bid, "5.00");
    }

    #[tokio::test]
    async fn slow_peer_hits_deadline() {
        let local = spawn(Router::new().route(
            "/",
            get(|| async {
                tokio::time::sleep(Duration::from_millis(400)).await;
                r#"{"bid":"5.00"}"#
            }),
        ))
        .await;
        let err = get_json::<Bid>(&Client::new(), &url(local), Duration::from_millis(100))
            .await
            .unwrap_err();
        assert!(matches!(err, QuoteError::Timeout { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn non_ok_status_is_an_error() {
        let local = spawn(Router::new().route(
            "/",
            get(|| async { (AxumStatus::INTERNAL_SERVER_ERROR, "") }),
        ))
        .await;
        let err = get_json::<Bid>(&Client::new(), &url(local), Duration::from_millis(500))
            .await
            .unwrap_err();
        assert!(matches!(err, QuoteError::UnexpectedStatus(500)), "got {err:?}");
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let local = spawn(Router::new().route("/", get(|| async { "{not json" }))).await;
        let err = get_json::<Bid>(&Client::new(), &url(local), Duration::from_millis(500))
            .await
            .unwrap_err();
        assert!(matches!(err, QuoteError::SerdeJson(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        // Bind then drop to get a port nobody listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let local = listener.local_addr().unwrap();
        drop(listener);
        let err = get_json::<Bid>(&Client::new(), &url(local), Duration::from_millis(500))
            .await
            .unwrap_err();
        assert!(matches!(err, QuoteError::Http(_)), "got {err:?}");
    }
}
