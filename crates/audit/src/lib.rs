// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit trail records for ledger mutations.
//!
//! Each successful mutation yields one [`AuditEvent`] naming who changed the
//! ledger, from which front-end command, what was done, and what the ledger
//! looked like before and after.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::fmt;

/// Actor type recorded for people operating the ledger by hand.
pub const OPERATOR: &str = "operator";

/// Who performed a ledger mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// Login or display name of the operator.
    pub id: String,
    /// Kind of actor, normally [`OPERATOR`].
    pub actor_type: String,
}

impl Actor {
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }

    /// An operator acting through a front end.
    #[must_use]
    pub fn operator(id: &str) -> Self {
        Self::new(id.to_string(), String::from(OPERATOR))
    }
}

/// The front-end request that triggered a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cause {
    /// Short request identifier, e.g. the CLI subcommand.
    pub id: String,
    pub description: String,
}

impl Cause {
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// The ledger operation performed, with a human-readable description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Command name such as `RegisterCoach` or `SetMonthlyAmount`.
    pub name: String,
    pub details: Option<String>,
}

impl Action {
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// Ledger state as recorded in the audit trail.
///
/// `summary` is for people reading the history and only carries counts.
/// `fingerprint` is a digest of the full ledger contents, so two snapshots
/// are equal exactly when the ledgers they were taken from are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    /// Counts of coaches, years and roster entries.
    pub summary: String,
    /// Lowercase hex digest of the ledger contents.
    pub fingerprint: String,
}

impl StateSnapshot {
    /// Length of the fingerprint prefix shown by [`fmt::Display`].
    pub const SHORT_FINGERPRINT_LEN: usize = 12;

    #[must_use]
    pub const fn new(summary: String, fingerprint: String) -> Self {
        Self {
            summary,
            fingerprint,
        }
    }

    /// Returns the leading characters of the fingerprint.
    #[must_use]
    pub fn short_fingerprint(&self) -> &str {
        self.fingerprint
            .get(..Self::SHORT_FINGERPRINT_LEN)
            .unwrap_or(&self.fingerprint)
    }
}

impl fmt::Display for StateSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @{}", self.summary, self.short_fingerprint())
    }
}

/// One recorded ledger mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    pub actor: Actor,
    pub cause: Cause,
    pub action: Action,
    /// Ledger state the command was applied to.
    pub before: StateSnapshot,
    /// Ledger state the command produced.
    pub after: StateSnapshot,
}

impl AuditEvent {
    #[must_use]
    pub const fn new(
        actor: Actor,
        cause: Cause,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
    ) -> Self {
        Self {
            actor,
            cause,
            action,
            before,
            after,
        }
    }

    /// Returns whether the mutation left the ledger contents unchanged.
    ///
    /// Only fingerprints are compared; the summary is derived from the same
    /// contents.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.before.fingerprint == self.after.fingerprint
    }
}
