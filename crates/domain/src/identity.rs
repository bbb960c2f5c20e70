// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resident registration number checksum.
//!
//! The result is advisory. A failing number may still be stored once the
//! operator explicitly confirms it.

/// Number of digits in a national identity number.
pub const NATIONAL_ID_LENGTH: usize = 13;

/// Weights applied to the first twelve digits.
pub const CHECKSUM_WEIGHTS: [u32; 12] = [2, 3, 4, 5, 6, 7, 8, 9, 2, 3, 4, 5];

/// Why a national identity number failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityFailure {
    /// A character other than a decimal digit remained after removing hyphens.
    NonDigit,
    /// The cleaned number is not exactly 13 digits long.
    WrongLength,
    /// The final digit does not match the weighted checksum.
    ChecksumMismatch,
}

impl std::fmt::Display for IdentityFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonDigit => write!(f, "only digits are allowed"),
            Self::WrongLength => write!(f, "must be exactly {NATIONAL_ID_LENGTH} digits"),
            Self::ChecksumMismatch => write!(f, "check digit does not match"),
        }
    }
}

/// Validates a national identity number.
///
/// Hyphens are removed first. An empty input fails with `NonDigit`.
///
/// # Errors
///
/// Returns the first failing rule: `NonDigit`, then `WrongLength`, then
/// `ChecksumMismatch`.
pub fn validate_national_id(raw: &str) -> Result<(), IdentityFailure> {
    let digits: Vec<u32> = raw
        .chars()
        .filter(|c| *c != '-')
        .map(|c| c.to_digit(10).ok_or(IdentityFailure::NonDigit))
        .collect::<Result<_, _>>()?;

    if digits.is_empty() {
        return Err(IdentityFailure::NonDigit);
    }
    if digits.len() != NATIONAL_ID_LENGTH {
        return Err(IdentityFailure::WrongLength);
    }

    let sum: u32 = digits
        .iter()
        .zip(CHECKSUM_WEIGHTS.iter())
        .map(|(digit, weight)| digit * weight)
        .sum();
    let expected: u32 = (11 - (sum % 11)) % 10;

    if expected != digits[NATIONAL_ID_LENGTH - 1] {
        return Err(IdentityFailure::ChecksumMismatch);
    }
    Ok(())
}
