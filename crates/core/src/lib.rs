// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod aggregate;
mod apply;
mod command;
mod error;
mod export;
mod state;

#[cfg(test)]
mod tests;

use dh_payroll_domain::{CoachId, DomainError};

// Re-export public types and functions
pub use aggregate::{CoachLine, Totals, coach_lines, month_totals, year_totals};
pub use apply::apply;
pub use command::Command;
pub use error::CoreError;
pub use export::{EXPORT_HEADERS, ExportRow, export_rows};
pub use state::{Ledger, TransitionResult};

/// Validates that a coach exists in the ledger.
///
/// This is a read-only validation that does not create audit events.
///
/// # Errors
///
/// Returns `DomainError::CoachNotFound` if no coach has this identifier.
pub fn validate_coach_exists(ledger: &Ledger, coach_id: &CoachId) -> Result<(), DomainError> {
    if ledger.coach(coach_id).is_none() {
        return Err(DomainError::CoachNotFound {
            coach_id: coach_id.clone(),
        });
    }
    Ok(())
}
