// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use dh_payroll::{CoachLine, Totals};
use dh_payroll_audit::AuditEvent;
use dh_payroll_domain::{Coach, validate_national_id};
use dh_payroll_persistence::AuditRecord;
use serde::Serialize;

/// The result of a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The audit event generated by this operation.
    pub audit_event: AuditEvent,
}

/// API request to register a new coach in the selected year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterCoachRequest {
    /// The coach's display name.
    pub name: String,
    /// The identity number as entered; may contain hyphens or be empty.
    pub national_id: String,
    /// Register even if the identity number fails the checksum.
    pub allow_invalid_identity: bool,
}

/// API response for a successful coach registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterCoachResponse {
    /// The generated coach identifier.
    pub coach_id: String,
    /// The stored (trimmed) name.
    pub name: String,
    /// The stored identity number, hyphens removed.
    pub national_id: String,
    /// The year the coach was enrolled in.
    pub year: u16,
    /// The identity check failure that was overridden, if any.
    pub overridden_identity_warning: Option<String>,
    /// A success message.
    pub message: String,
}

/// API response for mutations that have nothing to report but a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MutationResponse {
    /// A success message.
    pub message: String,
}

/// API response for a stored monthly amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetAmountResponse {
    /// The coach identifier.
    pub coach_id: String,
    /// The `"YYYY-MM"` period.
    pub period: String,
    /// The normalized gross amount that was stored.
    pub amount: u64,
    /// Withholding on the amount.
    pub tax: u64,
    /// Amount after withholding.
    pub net: u64,
    /// A success message.
    pub message: String,
}

/// A coach as listed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoachView {
    /// The coach identifier.
    pub coach_id: String,
    /// The display name.
    pub name: String,
    /// The stored identity number, possibly empty.
    pub national_id: String,
    /// Why the stored identity number fails the checksum, if it does.
    pub identity_problem: Option<String>,
}

impl From<&Coach> for CoachView {
    fn from(coach: &Coach) -> Self {
        let identity_problem: Option<String> = if coach.national_id.is_empty() {
            None
        } else {
            validate_national_id(coach.national_id.value())
                .err()
                .map(|reason| reason.to_string())
        };
        Self {
            coach_id: coach.id.value().to_string(),
            name: coach.name.clone(),
            national_id: coach.national_id.value().to_string(),
            identity_problem,
        }
    }
}

/// Gross, tax and net figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TotalsView {
    /// Gross amount.
    pub gross: u64,
    /// Withheld tax.
    pub tax: u64,
    /// Net amount.
    pub net: u64,
}

impl From<Totals> for TotalsView {
    fn from(totals: Totals) -> Self {
        Self {
            gross: totals.gross,
            tax: totals.tax,
            net: totals.net,
        }
    }
}

/// One roster member's line in a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoachLineView {
    /// The coach identifier.
    pub coach_id: String,
    /// The display name.
    pub name: String,
    /// Gross, tax and net.
    pub figures: TotalsView,
}

impl From<CoachLine> for CoachLineView {
    fn from(line: CoachLine) -> Self {
        Self {
            coach_id: line.coach_id.value().to_string(),
            name: line.name,
            figures: TotalsView {
                gross: line.withholding.gross,
                tax: line.withholding.tax,
                net: line.withholding.net,
            },
        }
    }
}

/// The monthly view: roster lines and their totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthSummary {
    /// The year.
    pub year: u16,
    /// The zero-based month index.
    pub month_index: u8,
    /// The `"YYYY-MM"` period.
    pub period: String,
    /// One line per roster member, roster order.
    pub lines: Vec<CoachLineView>,
    /// Totals over the lines.
    pub totals: TotalsView,
}

/// Totals of one month within a year summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthTotalsView {
    /// The `"YYYY-MM"` period.
    pub period: String,
    /// Totals of the month.
    pub totals: TotalsView,
}

/// The annual view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearSummary {
    /// The year.
    pub year: u16,
    /// Totals per month, January first.
    pub months: Vec<MonthTotalsView>,
    /// Totals of the year.
    pub totals: TotalsView,
}

/// A journal entry as listed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// The journal identifier.
    pub event_id: i64,
    /// When the mutation was recorded.
    pub recorded_at: String,
    /// The actor identifier.
    pub actor: String,
    /// The action name.
    pub action: String,
    /// Action details, if any.
    pub details: Option<String>,
    /// Ledger summary and short fingerprint before the mutation.
    pub before: String,
    /// Ledger summary and short fingerprint after the mutation.
    pub after: String,
    /// Whether the ledger contents changed.
    pub changed: bool,
}

impl From<AuditRecord> for HistoryEntry {
    fn from(record: AuditRecord) -> Self {
        let changed: bool = !record.event.is_noop();
        Self {
            event_id: record.event_id,
            recorded_at: record.recorded_at,
            actor: record.event.actor.id,
            action: record.event.action.name,
            details: record.event.action.details,
            before: record.event.before.to_string(),
            after: record.event.after.to_string(),
            changed,
        }
    }
}
