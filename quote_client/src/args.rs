//! Command-line arguments for the Quote Client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::path::PathBuf;

use clap::Parser;
use quote_common::net::{default_server_url, CLIENT_DEADLINE_MS, OUTPUT_FILE};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Full URL of the quote server endpoint.
    #[clap(long, env = "QUOTE_SERVER_URL", default_value_t = default_server_url())]
    pub server_url: String,

    /// File receiving the `Dólar: <bid>` line; overwritten on every run.
    #[clap(long, env = "QUOTE_OUTPUT", default_value = OUTPUT_FILE)]
    pub output: PathBuf,

    /// Deadline for the whole request to the server, in milliseconds.
    #[clap(long, env = "QUOTE_CLIENT_TIMEOUT_MS", default_value_t = CLIENT_DEADLINE_MS)]
    pub timeout_ms: u64,
}
