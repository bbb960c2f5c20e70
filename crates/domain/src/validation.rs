// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Coach, MAX_COACHES, MAX_MONTHLY_AMOUNT, NationalId};

/// Validates a coach name and returns it trimmed.
///
/// # Arguments
///
/// * `name` - The raw name as entered
///
/// # Returns
///
/// * `Ok(String)` containing the trimmed name
/// * `Err(DomainError::InvalidName)` if the name is blank
///
/// # Errors
///
/// Returns an error if the name is empty after trimming.
pub fn validate_coach_name(name: &str) -> Result<String, DomainError> {
    let trimmed: &str = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }
    Ok(trimmed.to_string())
}

/// Validates that another coach may be registered.
///
/// # Errors
///
/// Returns `DomainError::RosterFull` if `MAX_COACHES` coaches already exist.
pub fn validate_roster_capacity(coaches: &[Coach]) -> Result<(), DomainError> {
    if coaches.len() >= MAX_COACHES {
        return Err(DomainError::RosterFull { limit: MAX_COACHES });
    }
    Ok(())
}

/// Validates that a national identity number is not already registered.
///
/// Empty identity numbers are never considered duplicates.
///
/// # Arguments
///
/// * `national_id` - The identity number of the coach being registered
/// * `coaches` - The coaches already in the ledger
///
/// # Errors
///
/// Returns `DomainError::DuplicateNationalId` if a coach already holds it.
pub fn validate_national_id_unique(
    national_id: &NationalId,
    coaches: &[Coach],
) -> Result<(), DomainError> {
    if national_id.is_empty() {
        return Ok(());
    }
    if coaches.iter().any(|coach| &coach.national_id == national_id) {
        return Err(DomainError::DuplicateNationalId {
            national_id: national_id.value().to_string(),
        });
    }
    Ok(())
}

/// Validates that a year is a reasonable calendar year.
///
/// # Errors
///
/// Returns an error if the year is not between 1900 and 2200.
pub fn validate_year(year: u16) -> Result<(), DomainError> {
    if !(1900..=2200).contains(&year) {
        return Err(DomainError::InvalidYear(format!(
            "Year must be between 1900 and 2200, got {year}"
        )));
    }
    Ok(())
}

/// Validates that a monthly gross amount is within [`MAX_MONTHLY_AMOUNT`].
///
/// # Errors
///
/// Returns `DomainError::AmountTooLarge` for anything above the limit.
pub const fn validate_amount(amount: u64) -> Result<u64, DomainError> {
    if amount > MAX_MONTHLY_AMOUNT {
        return Err(DomainError::AmountTooLarge {
            amount,
            limit: MAX_MONTHLY_AMOUNT,
        });
    }
    Ok(amount)
}

/// Normalizes a free-form amount into a non-negative integer.
///
/// Grouping separators and currency symbols are dropped by keeping only
/// ASCII digits. Negative input, input without digits, and values that do
/// not fit in a `u64` all normalize to 0.
#[must_use]
pub fn parse_amount(raw: &str) -> u64 {
    if raw.trim_start().starts_with('-') {
        return 0;
    }
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}
