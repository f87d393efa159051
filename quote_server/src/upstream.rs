//! Client for the upstream quote provider.
use std::time::Duration;

use log::debug;
use quote_common::net::get_json;
use quote_common::{Quote, Result, UsdBrlResponse};
use reqwest::Client;

/// Fetches the current USD-BRL quote under a fixed deadline.
#[derive(Debug, Clone)]
pub struct QuoteFetcher {
    client: Client,
    url: String,
    deadline: Duration,
}

impl QuoteFetcher {
    /// Build a fetcher for `url`; every call to [`Self::fetch`] is bounded by `deadline`.
    pub fn new(client: Client, url: impl Into<String>, deadline: Duration) -> Self {
        Self {
            client,
            url: url.into(),
            deadline,
        }
    }

    /// One GET to the provider, no retries.
    pub async fn fetch(&self) -> Result<Quote> {
        let response: UsdBrlResponse = get_json(&self.client, &self.url, self.deadline).await?;
        debug!("Upstream quote: {:?}", response.usdbrl);
        Ok(response.usdbrl)
    }
}
