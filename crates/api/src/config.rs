// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dh_payroll_persistence::RetryPolicy;

/// Blob key the ledger is stored under unless configured otherwise.
pub const DEFAULT_LEDGER_KEY: &str = "boxing_payroll_v6_final";

/// Default capacity of the saved-event channel.
pub const DEFAULT_EVENT_BUFFER: usize = 16;

/// Configuration of a [`crate::LedgerStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// The key the ledger blob is stored under.
    pub ledger_key: String,
    /// Retry behavior for saves.
    pub retry: RetryPolicy,
    /// Capacity of the saved-event broadcast channel.
    pub event_buffer: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            ledger_key: String::from(DEFAULT_LEDGER_KEY),
            retry: RetryPolicy::default(),
            event_buffer: DEFAULT_EVENT_BUFFER,
        }
    }
}
