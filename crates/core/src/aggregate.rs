// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Monthly and annual totals.
//!
//! Only roster members count toward a month: a coach removed from a month's
//! roster keeps its stored amount but is excluded here. Totals are
//! recomputed from the ledger on every call.

use crate::state::Ledger;
use dh_payroll_domain::{CoachId, LedgerYear, MonthIndex, RosterKey, Withholding, compute_withholding};

/// Gross, withheld tax, and net for a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    /// Sum of gross amounts.
    pub gross: u64,
    /// Sum of per-coach withholding.
    pub tax: u64,
    /// `gross - tax`.
    pub net: u64,
}

impl Totals {
    // Amounts are capped at MAX_MONTHLY_AMOUNT, so a year of a full roster
    // cannot overflow.
    const fn combine(self, other: Self) -> Self {
        Self {
            gross: self.gross + other.gross,
            tax: self.tax + other.tax,
            net: self.net + other.net,
        }
    }
}

impl From<Withholding> for Totals {
    fn from(w: Withholding) -> Self {
        Self {
            gross: w.gross,
            tax: w.tax,
            net: w.net,
        }
    }
}

impl std::iter::Sum for Totals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Self::combine)
    }
}

/// One roster member's figures for a month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoachLine {
    /// The coach identifier.
    pub coach_id: CoachId,
    /// The coach's display name.
    pub name: String,
    /// Gross, tax and net for the month.
    pub withholding: Withholding,
}

/// Returns one line per roster member of a month, in roster order.
///
/// Roster ids that do not resolve to a coach are skipped.
#[must_use]
pub fn coach_lines(ledger: &Ledger, key: &RosterKey) -> Vec<CoachLine> {
    ledger
        .roster(key)
        .iter()
        .filter_map(|coach_id| ledger.coach(coach_id))
        .map(|coach| CoachLine {
            coach_id: coach.id.clone(),
            name: coach.name.clone(),
            withholding: compute_withholding(ledger.amount(key, &coach.id)),
        })
        .collect()
}

/// Computes totals for one month.
///
/// Tax is summed per coach, so the month's tax is not the withholding of
/// the month's gross.
#[must_use]
pub fn month_totals(ledger: &Ledger, key: &RosterKey) -> Totals {
    coach_lines(ledger, key)
        .into_iter()
        .map(|line| Totals::from(line.withholding))
        .sum()
}

/// Computes totals for a year as the sum of its twelve months.
#[must_use]
pub fn year_totals(ledger: &Ledger, year: LedgerYear) -> Totals {
    MonthIndex::all()
        .map(|month| month_totals(ledger, &RosterKey::new(year, month)))
        .sum()
}
