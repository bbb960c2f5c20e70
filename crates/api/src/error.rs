// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::export::ExportError;
use dh_payroll::CoreError;
use dh_payroll_domain::DomainError;
use dh_payroll_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A validation rule rejected the request.
    ValidationFailed {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The identity number failed the checksum and no override was given.
    ///
    /// Repeating the request with the override set proceeds anyway.
    IdentityWarning {
        /// The cleaned identity number.
        national_id: String,
        /// Why the check failed.
        reason: String,
    },
    /// The ledger could not be loaded or saved.
    PersistenceFailed {
        /// A description of the failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ValidationFailed { rule, message } => {
                write!(f, "Validation failed ({rule}): {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::IdentityWarning {
                national_id,
                reason,
            } => {
                write!(
                    f,
                    "Identity number '{national_id}' looks wrong: {reason}. Use the override to register anyway"
                )
            }
            Self::PersistenceFailed { message } => {
                write!(f, "Persistence failed: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidName(msg) => ApiError::ValidationFailed {
            rule: String::from("name_required"),
            message: msg,
        },
        DomainError::InvalidNationalId {
            national_id,
            reason,
        } => ApiError::IdentityWarning {
            national_id,
            reason: reason.to_string(),
        },
        DomainError::DuplicateNationalId { national_id } => ApiError::ValidationFailed {
            rule: String::from("unique_national_id"),
            message: format!("Identity number '{national_id}' is already registered"),
        },
        DomainError::RosterFull { limit } => ApiError::ValidationFailed {
            rule: String::from("coach_limit"),
            message: format!("At most {limit} coaches can be registered"),
        },
        DomainError::CoachNotFound { coach_id } => ApiError::ResourceNotFound {
            resource_type: String::from("Coach"),
            message: format!("Coach '{coach_id}' does not exist"),
        },
        DomainError::InvalidYear(msg) => ApiError::ValidationFailed {
            rule: String::from("year_range"),
            message: msg,
        },
        DomainError::InvalidMonthIndex(index) => ApiError::ValidationFailed {
            rule: String::from("month_range"),
            message: format!("Invalid month index: {index}. Must be between 0 and 11"),
        },
        DomainError::InvalidRosterKey(key) => ApiError::ValidationFailed {
            rule: String::from("roster_key"),
            message: format!("'{key}' is not a roster key"),
        },
        DomainError::AmountTooLarge { amount, limit } => ApiError::ValidationFailed {
            rule: String::from("amount_range"),
            message: format!("Amount {amount} is above the monthly limit of {limit}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Translates a persistence error into an API error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    ApiError::PersistenceFailed {
        message: err.to_string(),
    }
}
