// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dh_payroll_domain::{CoachId, LedgerYear, NationalId, RosterKey};

/// A command represents operator intent as data only.
///
/// Commands are the only way to request ledger changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a new coach and enroll it in every month of `year`.
    RegisterCoach {
        /// Freshly generated identifier for the coach.
        coach_id: CoachId,
        /// The display name (trimmed during validation).
        name: String,
        /// The identity number, possibly empty.
        national_id: NationalId,
        /// The year whose rosters the coach joins.
        year: LedgerYear,
    },
    /// Delete a coach together with all payments and roster entries.
    DeleteCoach {
        /// The coach to delete.
        coach_id: CoachId,
    },
    /// Replace a coach's identity number.
    UpdateIdentity {
        /// The coach to update.
        coach_id: CoachId,
        /// The new identity number.
        national_id: NationalId,
    },
    /// Add a coach to one month's roster.
    AddToRoster {
        /// The roster month.
        key: RosterKey,
        /// The coach to add.
        coach_id: CoachId,
    },
    /// Remove a coach from one month's roster, keeping the stored amount.
    RemoveFromRoster {
        /// The roster month.
        key: RosterKey,
        /// The coach to remove.
        coach_id: CoachId,
    },
    /// Overwrite one monthly gross amount.
    SetMonthlyAmount {
        /// The month whose amount is set.
        key: RosterKey,
        /// The coach being paid.
        coach_id: CoachId,
        /// The normalized gross amount.
        amount: u64,
    },
    /// Make sure a payment table exists for a year.
    SelectYear {
        /// The year being selected.
        year: LedgerYear,
    },
}

impl Command {
    /// Returns the action name recorded in audit events.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RegisterCoach { .. } => "RegisterCoach",
            Self::DeleteCoach { .. } => "DeleteCoach",
            Self::UpdateIdentity { .. } => "UpdateIdentity",
            Self::AddToRoster { .. } => "AddToRoster",
            Self::RemoveFromRoster { .. } => "RemoveFromRoster",
            Self::SetMonthlyAmount { .. } => "SetMonthlyAmount",
            Self::SelectYear { .. } => "SelectYear",
        }
    }
}
