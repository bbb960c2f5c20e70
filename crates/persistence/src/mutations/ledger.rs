// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::diesel_schema::ledger_blobs;
use crate::error::PersistenceError;

/// Stores a ledger blob, replacing any blob previously stored under `key`.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `key` - The ledger key
/// * `payload` - The serialized ledger
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn upsert_ledger_blob(
    conn: &mut SqliteConnection,
    key: &str,
    payload: &str,
) -> Result<(), PersistenceError> {
    diesel::replace_into(ledger_blobs::table)
        .values((
            ledger_blobs::blob_key.eq(key),
            ledger_blobs::payload.eq(payload),
        ))
        .execute(conn)?;

    debug!(key, bytes = payload.len(), "Stored ledger blob");

    Ok(())
}
