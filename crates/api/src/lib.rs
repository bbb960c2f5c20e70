// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Boundary layer of the DH payroll ledger.
//!
//! [`LedgerStore`] owns one ledger for the length of a session and is the
//! only way to change it. Domain and core errors are translated into
//! [`ApiError`] explicitly.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod config;
mod error;
mod export;
mod live;
mod request_response;
mod store;

#[cfg(test)]
mod tests;

pub use config::{DEFAULT_EVENT_BUFFER, DEFAULT_LEDGER_KEY, StoreConfig};
pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use export::{
    ExportBatch, ExportError, ExportOutcome, build_export, export_file_name, mail_body,
    mail_subject, render_csv,
};
pub use live::{LedgerEvent, LedgerEventBroadcaster};
pub use request_response::{
    ApiResult, CoachLineView, CoachView, HistoryEntry, MonthSummary, MonthTotalsView,
    MutationResponse, RegisterCoachRequest, RegisterCoachResponse, SetAmountResponse,
    TotalsView, YearSummary,
};
pub use store::LedgerStore;

pub use dh_payroll_persistence::RetryPolicy;
