// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::identity::IdentityFailure;
use crate::types::CoachId;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Coach name is blank.
    InvalidName(String),
    /// National identity number failed format or checksum validation.
    InvalidNationalId {
        /// The cleaned identity number.
        national_id: String,
        /// Why validation failed.
        reason: IdentityFailure,
    },
    /// Another coach already holds this identity number.
    DuplicateNationalId {
        /// The duplicate identity number.
        national_id: String,
    },
    /// The ledger already holds the maximum number of coaches.
    RosterFull {
        /// The configured limit.
        limit: usize,
    },
    /// The referenced coach does not exist.
    CoachNotFound {
        /// The missing coach identifier.
        coach_id: CoachId,
    },
    /// Invalid year value.
    InvalidYear(String),
    /// Month index outside 0..=11.
    InvalidMonthIndex(u8),
    /// Roster key not of the form `"{year}-{monthIndex}"`.
    InvalidRosterKey(String),
    /// Monthly gross amount above [`crate::MAX_MONTHLY_AMOUNT`].
    AmountTooLarge {
        /// The rejected amount.
        amount: u64,
        /// The largest accepted amount.
        limit: u64,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidNationalId {
                national_id,
                reason,
            } => {
                write!(f, "Invalid national identity number '{national_id}': {reason}")
            }
            Self::DuplicateNationalId { national_id } => {
                write!(
                    f,
                    "A coach with national identity number '{national_id}' is already registered"
                )
            }
            Self::RosterFull { limit } => {
                write!(f, "Cannot register more than {limit} coaches")
            }
            Self::CoachNotFound { coach_id } => write!(f, "Coach '{coach_id}' not found"),
            Self::InvalidYear(msg) => write!(f, "Invalid year: {msg}"),
            Self::InvalidMonthIndex(index) => {
                write!(f, "Invalid month index: {index}. Must be between 0 and 11")
            }
            Self::InvalidRosterKey(key) => write!(f, "Invalid roster key: '{key}'"),
            Self::AmountTooLarge { amount, limit } => {
                write!(f, "Amount {amount} exceeds the monthly limit of {limit}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
