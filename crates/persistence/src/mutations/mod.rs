// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations for the persistence layer.
//!
//! ## Module Organization
//!
//! - `ledger`: Ledger snapshot writes
//! - `audit`: Audit journal appends

pub mod audit;
pub mod ledger;

pub use audit::append_audit_event;
pub use ledger::upsert_ledger_blob;
