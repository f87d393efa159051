//! Writing the fetched bid to the output file.
use std::fs;
use std::path::Path;

use log::info;
use quote_common::net::OUTPUT_PREFIX;
use quote_common::{Bid, Result};

/// Text written to the output file for `bid`.
pub fn format_line(bid: &Bid) -> String {
    format!("{}{}", OUTPUT_PREFIX, bid.bid)
}

/// Replace the contents of `path` with the line for `bid` in a single write.
pub fn write_bid(path: &Path, bid: &Bid) -> Result<()> {
    fs::write(path, format_line(bid))?;
    info!("Wrote bid {} to {}", bid.bid, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bid(value: &str) -> Bid {
        Bid { bid: value.to_string() }
    }

    #[test]
    fn line_has_fixed_prefix_and_raw_bid() {
        assert_eq!(format_line(&bid("5.00")), "Dólar: 5.00");
    }

    #[test]
    fn write_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cotacao.txt");
        fs::write(&path, "Dólar: 1234.56789 and some stale trailing text").unwrap();

        write_bid(&path, &bid("5.00")).unwrap();
        write_bid(&path, &bid("5.01")).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Dólar: 5.01");
    }

    #[test]
    fn write_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("cotacao.txt");
        assert!(write_bid(&path, &bid("5.00")).is_err());
    }
}
