//! SQLite persistence of fetched quotes.
//!
//! A `PriceStore` wraps a single connection opened for one request. The handler
//! opens it, inserts at most one row, and closes it again; there is no pool and
//! no state shared between requests. Concurrent writers are serialized by SQLite
//! itself.
use std::path::Path;
use std::time::Duration;

use log::{debug, info, warn};
use quote_common::Quote;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Connection, SqliteConnection};

use crate::error::ServerError;

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS prices (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        code TEXT,
        codein TEXT,
        name TEXT,
        high TEXT,
        low TEXT,
        varBid TEXT,
        pctChange TEXT,
        bid TEXT,
        ask TEXT,
        timestamp TEXT,
        create_date TEXT
    )"#;

const INSERT_PRICE: &str = r#"
    INSERT INTO prices (
        code, codein, name, high, low, varBid,
        pctChange, bid, ask, timestamp, create_date
    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#;

/// Per-request handle on the `prices` table.
pub struct PriceStore {
    conn: SqliteConnection,
}

impl PriceStore {
    /// Open (creating if missing) the database at `path` and make sure the
    /// `prices` table exists.
    pub async fn open(path: &Path) -> Result<Self, ServerError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let mut conn = SqliteConnection::connect_with(&options).await?;
        if let Err(e) = sqlx::query(CREATE_TABLE).execute(&mut conn).await {
            if let Err(close_err) = conn.close().await {
                warn!("Failed to close price store after schema error: {}", close_err);
            }
            return Err(e.into());
        }
        debug!("Opened price store at {}", path.display());
        Ok(Self { conn })
    }

    /// Append `quote` as a new row. Fails with `ServerError::PersistTimeout`
    /// when the write does not commit within `deadline`.
    ///
    /// The insert runs in its own transaction. When the deadline passes, the
    /// dropped transaction queues a ROLLBACK behind the pending statement, so a
    /// timed-out insert leaves no row behind.
    ///
    /// Returns the id of the new row.
    pub async fn insert(&mut self, quote: &Quote, deadline: Duration) -> Result<i64, ServerError> {
        let conn = &mut self.conn;
        let insert = async move {
            let mut tx = conn.begin().await?;
            let done = sqlx::query(INSERT_PRICE)
                .bind(&quote.code)
                .bind(&quote.codein)
                .bind(&quote.name)
                .bind(&quote.high)
                .bind(&quote.low)
                .bind(&quote.var_bid)
                .bind(&quote.pct_change)
                .bind(&quote.bid)
                .bind(&quote.ask)
                .bind(&quote.timestamp)
                .bind(&quote.create_date)
                .execute(&mut *tx)
                .await?;
            tx.commit().await?;
            Ok::<_, sqlx::Error>(done.last_insert_rowid())
        };

        let id = tokio::time::timeout(deadline, insert)
            .await
            .map_err(|_| ServerError::PersistTimeout(deadline))??;
        info!("Stored quote bid={} as row {}", quote.bid, id);
        Ok(id)
    }

    /// Release the underlying connection.
    pub async fn close(self) -> Result<(), ServerError> {
        self.conn.close().await?;
        Ok(())
    }
}
