// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `ledger`: Ledger snapshot reads
//! - `audit`: Audit journal reads

pub mod audit;
pub mod ledger;

pub use audit::get_audit_history;
pub use ledger::get_ledger_blob;
