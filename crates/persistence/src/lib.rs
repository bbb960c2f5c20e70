// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the DH payroll ledger.
//!
//! The ledger is persisted as a single JSON blob per ledger key in `SQLite`,
//! accessed through Diesel with embedded migrations. Every persisted
//! mutation is also appended to an audit journal table.
//!
//! ## Testing Philosophy
//!
//! - Tests run against unique shared-cache in-memory databases
//! - Failure paths are exercised through scripted [`BlobStore`] doubles

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use dh_payroll_audit::AuditEvent;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod retry;
mod snapshot;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use retry::{RetryPolicy, save_with_retry};
pub use snapshot::{DecodedLedger, decode_ledger, encode_ledger};
pub use store::{AuditJournal, AuditRecord, BlobStore};

/// Sequence number of the next in-memory database.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Ledger blobs and the audit journal in one `SQLite` database.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Opens a fresh in-memory database.
    ///
    /// Every call gets its own shared-cache database, so stores opened in
    /// the same process never see each other's ledgers.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let url: String = format!("file:memdb_ledger_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::open_database(&url, false)?;
        Ok(Self { conn })
    }

    /// Opens, or creates, the database file at `path` in WAL mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not valid UTF-8 or the database
    /// cannot be opened or migrated.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path: &Path = path.as_ref();
        let url: &str = path.to_str().ok_or_else(|| {
            PersistenceError::InitializationError(format!(
                "database path {} is not valid UTF-8",
                path.display()
            ))
        })?;

        let conn: SqliteConnection = backend::sqlite::open_database(url, true)?;
        Ok(Self { conn })
    }
}

impl BlobStore for Persistence {
    fn load(&mut self, key: &str) -> Result<Option<String>, PersistenceError> {
        queries::get_ledger_blob(&mut self.conn, key)
    }

    fn save(&mut self, key: &str, blob: &str) -> Result<(), PersistenceError> {
        mutations::upsert_ledger_blob(&mut self.conn, key, blob)
    }
}

impl AuditJournal for Persistence {
    fn append(&mut self, ledger_key: &str, event: &AuditEvent) -> Result<i64, PersistenceError> {
        mutations::append_audit_event(&mut self.conn, ledger_key, event)
    }

    fn history(
        &mut self,
        ledger_key: &str,
        limit: usize,
    ) -> Result<Vec<AuditRecord>, PersistenceError> {
        queries::get_audit_history(&mut self.conn, ledger_key, limit)
    }
}
