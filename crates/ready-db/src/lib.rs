//! # ready-db
//!
//! libSQL storage backend for ReadyStock.
//!
//! Holds the `items`, `transactions`, and `profiles` tables locally and
//! emulates the hosted backend's `receive_item` / `withdraw_item`
//! procedures, each executed inside a single SQL transaction. Procedures can
//! be switched off to reproduce a backend where they are not deployed, which
//! drives the stock service onto its fallback path.

pub mod error;
pub mod helpers;
mod migrations;
mod procedures;
pub mod repos;
mod stock_backend;

use std::sync::atomic::{AtomicBool, Ordering};

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all local ReadyStock state.
pub struct StockDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    procedures_enabled: AtomicBool,
}

impl StockDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Must be set per connection in SQLite.
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let stock_db = Self {
            db,
            conn,
            procedures_enabled: AtomicBool::new(true),
        };
        stock_db.run_migrations().await?;
        tracing::debug!(path, "opened local stock database");
        Ok(stock_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Whether `receive_item` / `withdraw_item` are callable.
    #[must_use]
    pub fn procedures_enabled(&self) -> bool {
        self.procedures_enabled.load(Ordering::Relaxed)
    }

    /// Enable or disable the stock procedures.
    pub fn set_procedures_enabled(&self, enabled: bool) {
        self.procedures_enabled.store(enabled, Ordering::Relaxed);
    }
}
