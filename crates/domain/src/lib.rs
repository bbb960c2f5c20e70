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

mod error;
mod identity;
mod tax;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use identity::{CHECKSUM_WEIGHTS, IdentityFailure, NATIONAL_ID_LENGTH, validate_national_id};
pub use tax::{
    CLASSIFICATION_LABEL, NATIONALITY_LABEL, WITHHOLDING_RATE_LABEL, Withholding,
    WithholdingBreakdown, compute_withholding, decompose_withholding,
};
pub use types::{
    Coach, CoachId, LedgerYear, MAX_COACHES, MAX_MONTHLY_AMOUNT, MONTHS_PER_YEAR, MonthIndex,
    MonthlyAmounts, NationalId, RosterKey,
};
pub use validation::{
    parse_amount, validate_amount, validate_coach_name, validate_national_id_unique, validate_roster_capacity,
    validate_year,
};
