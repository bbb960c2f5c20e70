// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::diesel_schema::ledger_blobs;
use crate::error::PersistenceError;

/// Retrieves the blob stored under `key`.
///
/// # Returns
///
/// `None` if no blob has been stored under this key.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_ledger_blob(
    conn: &mut SqliteConnection,
    key: &str,
) -> Result<Option<String>, PersistenceError> {
    let payload: Option<String> = ledger_blobs::table
        .filter(ledger_blobs::blob_key.eq(key))
        .select(ledger_blobs::payload)
        .first::<String>(conn)
        .optional()?;

    Ok(payload)
}
