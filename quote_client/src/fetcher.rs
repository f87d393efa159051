//! Retrieving the bid from the quote server.
use std::time::Duration;

use log::info;
use quote_common::net::get_json;
use quote_common::{Bid, Result};
use reqwest::Client;

/// Issue one GET to `url` and decode the `{"bid": ...}` body.
///
/// Fails on connection errors, non-200 answers, malformed JSON, or when the
/// server does not answer within `deadline`.
pub async fn fetch_bid(client: &Client, url: &str, deadline: Duration) -> Result<Bid> {
    let bid: Bid = get_json(client, url, deadline).await?;
    info!("Received bid {} from {}", bid.bid, url);
    Ok(bid)
}
