//! Quote data model shared by the server and the client.
//!
//! The upstream provider emits every numeric value as a JSON string. All fields
//! are kept as `String` so values are stored and forwarded exactly as received.
use serde::{Deserialize, Serialize};

/// Full USD-BRL record as returned by the upstream quote provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Base currency code (`USD`).
    pub code: String,
    /// Counter currency code (`BRL`).
    pub codein: String,
    /// Display name, e.g. `Dólar Americano/Real Brasileiro`.
    pub name: String,
    /// Session high.
    pub high: String,
    /// Session low.
    pub low: String,
    /// Absolute variation of the bid.
    #[serde(rename = "varBid")]
    pub var_bid: String,
    /// Percent change.
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    /// Price a buyer is willing to pay.
    pub bid: String,
    /// Price a seller is asking.
    pub ask: String,
    /// Unix timestamp in seconds, as text.
    pub timestamp: String,
    /// Provider-side creation date, as text.
    pub create_date: String,
}

/// Upstream response envelope, keyed by currency pair.
#[derive(Debug, Clone, Deserialize)]
pub struct UsdBrlResponse {
    /// The only pair this system requests.
    #[serde(rename = "USDBRL")]
    pub usdbrl: Quote,
}

/// Client-facing price: the bid and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bid {
    /// Bid copied verbatim from the fetched `Quote`.
    pub bid: String,
}

impl From<&Quote> for Bid {
    fn from(quote: &Quote) -> Self {
        Bid {
            bid: quote.bid.clone(),
        }
    }
}
