// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bounded retry with exponential backoff for blob saves.

use std::time::Duration;
use tracing::{debug, error, warn};

use crate::error::PersistenceError;
use crate::store::BlobStore;

/// How many times a save is attempted and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Values below 1 are treated as 1.
    pub max_attempts: u32,
    /// Wait before the second attempt. Doubles after every failure.
    pub initial_backoff: Duration,
}

impl RetryPolicy {
    /// Creates a new `RetryPolicy`.
    #[must_use]
    pub const fn new(max_attempts: u32, initial_backoff: Duration) -> Self {
        Self {
            max_attempts,
            initial_backoff,
        }
    }

    /// A policy that tries exactly once.
    #[must_use]
    pub const fn no_retry() -> Self {
        Self::new(1, Duration::ZERO)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_millis(50))
    }
}

/// Saves a blob, retrying failed attempts according to `policy`.
///
/// Blocks the calling thread while backing off.
///
/// # Returns
///
/// The number of attempts it took to succeed.
///
/// # Errors
///
/// Returns `PersistenceError::RetriesExhausted` carrying the last error if
/// every attempt fails.
pub fn save_with_retry<S: BlobStore + ?Sized>(
    store: &mut S,
    key: &str,
    blob: &str,
    policy: &RetryPolicy,
) -> Result<u32, PersistenceError> {
    let max_attempts: u32 = policy.max_attempts.max(1);
    let mut backoff: Duration = policy.initial_backoff;
    let mut attempt: u32 = 1;

    loop {
        match store.save(key, blob) {
            Ok(()) => {
                debug!(key, attempt, bytes = blob.len(), "Saved ledger snapshot");
                return Ok(attempt);
            }
            Err(err) if attempt < max_attempts => {
                warn!(
                    key,
                    attempt,
                    backoff = ?backoff,
                    error = %err,
                    "Ledger save failed, retrying"
                );
                std::thread::sleep(backoff);
                backoff = backoff.saturating_mul(2);
                attempt += 1;
            }
            Err(err) => {
                error!(key, attempts = attempt, error = %err, "Ledger save failed, giving up");
                return Err(PersistenceError::RetriesExhausted {
                    attempts: attempt,
                    last_error: err.to_string(),
                });
            }
        }
    }
}
