//! Quote Client — a single-shot program that asks the quote server for the current
//! USD-BRL bid and writes it to a text file as `Dólar: <bid>`.
//!
//! The request is bounded by a 300ms deadline by default. Any failure (connection
//! refused, deadline, non-200, malformed JSON) ends the run with a non-zero exit
//! status, and the output file is only touched after the bid has been received.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client --server-url http://localhost:8080/cotacao --output ./cotacao.txt
//! ```
#![warn(missing_docs)]
mod args;
mod fetcher;
mod output;

use crate::args::Args;
use crate::fetcher::fetch_bid;
use crate::output::write_bid;
use clap::Parser;
use log::info;
use quote_common::QuoteError;
use quote_common::Result;
use reqwest::Client;
use std::time::Duration;

/// Fetch the bid, then write it. Nothing is written if the fetch fails.
async fn run(args: &Args) -> Result<(), QuoteError> {
    let client = Client::builder().build()?;
    let deadline = Duration::from_millis(args.timeout_ms);
    info!("Requesting {} (deadline {:?})", args.server_url, deadline);

    let bid = fetch_bid(&client, &args.server_url, deadline).await?;
    write_bid(&args.output, &bid)
}

#[tokio::main]
async fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();
    run(&args).await
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
