// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Failures of the ledger blob store and audit journal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// `SQLite` rejected a read or write.
    DatabaseError(String),
    /// The database file or URL could not be opened.
    DatabaseConnectionFailed(String),
    /// The schema could not be brought up to date.
    MigrationFailed(String),
    /// A connection setting could not be applied.
    QueryFailed(String),
    /// A blob or journal column is not valid JSON for its model.
    SerializationError(String),
    /// A blob parses as JSON but breaks a ledger rule.
    InvalidSnapshot(String),
    /// The store could not be set up from its arguments.
    InitializationError(String),
    /// No save attempt succeeded.
    RetriesExhausted {
        /// How many saves were tried.
        attempts: u32,
        /// What the last attempt failed with.
        last_error: String,
    },
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => write!(f, "Cannot open ledger database: {msg}"),
            Self::MigrationFailed(msg) => write!(f, "Ledger schema migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Database setting rejected: {msg}"),
            Self::SerializationError(msg) => write!(f, "Malformed stored JSON: {msg}"),
            Self::InvalidSnapshot(msg) => write!(f, "Invalid ledger snapshot: {msg}"),
            Self::InitializationError(msg) => write!(f, "Cannot set up ledger store: {msg}"),
            Self::RetriesExhausted {
                attempts,
                last_error,
            } => write!(
                f,
                "Save failed after {attempts} attempts, last error: {last_error}"
            ),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        Self::DatabaseError(err.to_string())
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
