//! Command-line arguments for the Quote Server.
//!
//! Every flag has a default matching the constants in `quote_common::net` and can
//! also be supplied through the listed environment variable.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use quote_common::net::{
    addr, DATABASE_FILE, PERSIST_DEADLINE_MS, SERVER_PORT, UPSTREAM_DEADLINE_MS, UPSTREAM_URL,
};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address to listen on (all interfaces by default).
    #[clap(long, env = "QUOTE_BIND", default_value_t = addr("0.0.0.0", SERVER_PORT))]
    pub bind: String,

    /// Upstream endpoint returning the USD-BRL quote.
    #[clap(long, env = "QUOTE_UPSTREAM_URL", default_value = UPSTREAM_URL)]
    pub upstream_url: String,

    /// SQLite file holding the `prices` table; created when missing.
    #[clap(long, env = "QUOTE_DATABASE", default_value = DATABASE_FILE)]
    pub database: PathBuf,

    /// Deadline for the upstream fetch, in milliseconds.
    #[clap(long, env = "QUOTE_FETCH_TIMEOUT_MS", default_value_t = UPSTREAM_DEADLINE_MS)]
    pub fetch_timeout_ms: u64,

    /// Deadline for inserting the fetched quote, in milliseconds.
    #[clap(long, env = "QUOTE_PERSIST_TIMEOUT_MS", default_value_t = PERSIST_DEADLINE_MS)]
    pub persist_timeout_ms: u64,
}

/// Runtime settings of the request handler.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub upstream_url: String,
    pub database: PathBuf,
    pub fetch_timeout: Duration,
    pub persist_timeout: Duration,
}

impl From<&Args> for ServerConfig {
    fn from(args: &Args) -> Self {
        ServerConfig {
            upstream_url: args.upstream_url.clone(),
            database: args.database.clone(),
            fetch_timeout: Duration::from_millis(args.fetch_timeout_ms),
            persist_timeout: Duration::from_millis(args.persist_timeout_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_shared_constants() {
        let args = Args::parse_from(["quote_server"]);
        assert_eq!(args.bind, "0.0.0.0:8080");
        let config = ServerConfig::from(&args);
        assert_eq!(config.upstream_url, UPSTREAM_URL);
        assert_eq!(config.database, PathBuf::from("sqlite.db"));
        assert_eq!(config.fetch_timeout, Duration::from_millis(200));
        assert_eq!(config.persist_timeout, Duration::from_millis(10));
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "quote_server",
            "--bind",
            "127.0.0.1:9090",
            "--persist-timeout-ms",
            "50",
        ]);
        assert_eq!(args.bind, "127.0.0.1:9090");
        assert_eq!(ServerConfig::from(&args).persist_timeout, Duration::from_millis(50));
    }
}
