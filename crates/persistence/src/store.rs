// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage seams used by the ledger store.

use dh_payroll_audit::AuditEvent;

use crate::error::PersistenceError;

/// A keyed store of opaque ledger snapshots.
///
/// `save` replaces the whole blob stored under `key`; there are no partial
/// writes.
pub trait BlobStore {
    /// Loads the blob stored under `key`, or `None` if nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn load(&mut self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Stores `blob` under `key`, replacing any previous blob.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn save(&mut self, key: &str, blob: &str) -> Result<(), PersistenceError>;
}

/// An audit event as read back from the journal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    /// The journal-assigned identifier, increasing with time.
    pub event_id: i64,
    /// When the event was recorded (UTC, `YYYY-MM-DD HH:MM:SS`).
    pub recorded_at: String,
    /// The event itself.
    pub event: AuditEvent,
}

/// An append-only journal of persisted mutations.
pub trait AuditJournal {
    /// Appends an event for `ledger_key` and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the event cannot be serialized or written.
    fn append(&mut self, ledger_key: &str, event: &AuditEvent) -> Result<i64, PersistenceError>;

    /// Returns up to `limit` events for `ledger_key`, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the journal cannot be read.
    fn history(
        &mut self,
        ledger_key: &str,
        limit: usize,
    ) -> Result<Vec<AuditRecord>, PersistenceError>;
}
