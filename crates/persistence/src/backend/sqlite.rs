// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Opening and configuring the ledger's `SQLite` database.

use diesel::dsl::sql;
use diesel::sql_types::BigInt;
use diesel::{Connection, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use crate::error::PersistenceError;

/// Schema of the blob table and the audit journal.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Milliseconds a writer waits for a competing lock before failing.
///
/// A failure past this point surfaces as a save error and is retried by
/// [`crate::save_with_retry`].
const BUSY_TIMEOUT_MS: u32 = 5000;

/// Returns the row id of the last journal insert on this connection.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn last_journal_rowid(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(conn)?)
}

/// Applies a connection-level PRAGMA.
fn pragma(conn: &mut SqliteConnection, statement: &str) -> Result<(), PersistenceError> {
    debug!(statement, "Applying PRAGMA");
    diesel::sql_query(statement)
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("{statement}: {e}")))?;
    Ok(())
}

/// Opens the database at `database_url` and migrates it to the current schema.
///
/// `write_ahead_log` switches file databases to WAL journaling; it has no
/// meaning for in-memory URLs.
///
/// # Errors
///
/// Returns an error if the connection, a PRAGMA, or a migration fails.
pub fn open_database(
    database_url: &str,
    write_ahead_log: bool,
) -> Result<SqliteConnection, PersistenceError> {
    info!(database_url, write_ahead_log, "Opening ledger database");

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)?;
    pragma(&mut conn, &format!("PRAGMA busy_timeout = {BUSY_TIMEOUT_MS}"))?;
    if write_ahead_log {
        pragma(&mut conn, "PRAGMA journal_mode = WAL")?;
    }

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;
    if !applied.is_empty() {
        info!(migrations = applied.len(), "Applied ledger schema migrations");
    }

    Ok(conn)
}
