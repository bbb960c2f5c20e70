// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of monthly amounts tracked per coach per year.
pub const MONTHS_PER_YEAR: usize = 12;

/// Maximum number of live coaches a ledger may hold.
pub const MAX_COACHES: usize = 20;

/// Largest gross amount a single month may hold, one trillion won.
///
/// Keeps a full year of a full roster far inside `u64`.
pub const MAX_MONTHLY_AMOUNT: u64 = 1_000_000_000_000;

/// Gross amounts for one coach in one year, indexed by month (0 = January).
pub type MonthlyAmounts = [u64; MONTHS_PER_YEAR];

/// Opaque identifier of a coach.
///
/// Identifiers are generated once at registration and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CoachId {
    value: String,
}

impl CoachId {
    /// Creates a `CoachId` from an existing token.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier token.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for CoachId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A national identity number as stored on a coach.
///
/// Hyphens are stripped on construction. The checksum is advisory, so a
/// stored value is not guaranteed to pass [`crate::validate_national_id`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct NationalId {
    digits: String,
}

impl NationalId {
    /// Creates a `NationalId`, removing hyphens and surrounding whitespace.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            digits: raw.trim().chars().filter(|c| *c != '-').collect(),
        }
    }

    /// Returns the cleaned value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.digits
    }

    /// Returns whether no identity number was given.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

/// A payee in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coach {
    /// The coach's unique identifier.
    pub id: CoachId,
    /// Display name, never blank.
    pub name: String,
    /// National identity number, possibly empty.
    pub national_id: NationalId,
}

impl Coach {
    /// Creates a new `Coach`.
    ///
    /// # Arguments
    ///
    /// * `id` - The coach identifier
    /// * `name` - The display name
    /// * `national_id` - The identity number (may be empty)
    #[must_use]
    pub const fn new(id: CoachId, name: String, national_id: NationalId) -> Self {
        Self {
            id,
            name,
            national_id,
        }
    }
}

/// A calendar year that keys payment tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LedgerYear {
    year: u16,
}

impl LedgerYear {
    /// Creates a validated `LedgerYear`.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is outside 1900..=2200.
    pub fn new(year: u16) -> Result<Self, DomainError> {
        crate::validation::validate_year(year)?;
        Ok(Self { year })
    }

    /// Returns the year value.
    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }
}

impl FromStr for LedgerYear {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let year: u16 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidYear(format!("'{s}' is not a year")))?;
        Self::new(year)
    }
}

impl std::fmt::Display for LedgerYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.year)
    }
}

/// Zero-based calendar month index (0 = January, 11 = December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthIndex {
    index: u8,
}

impl MonthIndex {
    /// January.
    pub const FIRST: Self = Self { index: 0 };

    /// Creates a validated `MonthIndex`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is greater than 11.
    pub fn new(index: u8) -> Result<Self, DomainError> {
        if usize::from(index) >= MONTHS_PER_YEAR {
            return Err(DomainError::InvalidMonthIndex(index));
        }
        Ok(Self { index })
    }

    /// Returns all twelve months in calendar order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..12u8).map(|index| Self { index })
    }

    /// Returns the zero-based index.
    #[must_use]
    pub const fn index(&self) -> u8 {
        self.index
    }

    /// Returns the index usable for [`MonthlyAmounts`].
    #[must_use]
    pub fn slot(&self) -> usize {
        usize::from(self.index)
    }

    /// Returns the one-based calendar month number.
    #[must_use]
    pub const fn number(&self) -> u8 {
        self.index + 1
    }

    /// Returns the month the monthly view opens on for a given day.
    ///
    /// This is the previous calendar month, except in January where it
    /// stays on January.
    #[must_use]
    pub fn default_focus(today: time::Date) -> Self {
        let current: u8 = u8::from(today.month());
        Self {
            index: current.saturating_sub(2),
        }
    }
}

impl std::fmt::Display for MonthIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index)
    }
}

/// Key of one month's active roster.
///
/// The textual form is `"{year}-{monthIndex}"` with a zero-based month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RosterKey {
    /// The year.
    pub year: LedgerYear,
    /// The month within the year.
    pub month: MonthIndex,
}

impl RosterKey {
    /// Creates a new `RosterKey`.
    #[must_use]
    pub const fn new(year: LedgerYear, month: MonthIndex) -> Self {
        Self { year, month }
    }

    /// Returns the `"YYYY-MM"` period label with a one-based, zero-padded month.
    #[must_use]
    pub fn period_label(&self) -> String {
        format!("{}-{:02}", self.year, self.month.number())
    }
}

impl std::fmt::Display for RosterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.year, self.month)
    }
}

impl FromStr for RosterKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| DomainError::InvalidRosterKey(s.to_string()))?;
        let year: LedgerYear = year
            .parse()
            .map_err(|_| DomainError::InvalidRosterKey(s.to_string()))?;
        let month: u8 = month
            .parse()
            .map_err(|_| DomainError::InvalidRosterKey(s.to_string()))?;
        let month: MonthIndex =
            MonthIndex::new(month).map_err(|_| DomainError::InvalidRosterKey(s.to_string()))?;
        Ok(Self { year, month })
    }
}
