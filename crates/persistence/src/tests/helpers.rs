// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BlobStore, PersistenceError};
use dh_payroll::{Command, Ledger, TransitionResult, apply};
use dh_payroll_audit::{Actor, Cause};
use dh_payroll_domain::{CoachId, LedgerYear, MonthIndex, NationalId, RosterKey};
use std::collections::HashMap;

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("test-actor"), String::from("operator"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("test-cause"), String::from("Test operation"))
}

pub fn apply_ok(ledger: &Ledger, command: Command) -> TransitionResult {
    apply(ledger, command, create_test_actor(), create_test_cause()).unwrap()
}

/// A ledger with two coaches in 2025 and a March payment for the first.
pub fn create_test_ledger() -> Ledger {
    let year: LedgerYear = LedgerYear::new(2025).unwrap();
    let mut ledger: Ledger = Ledger::new();
    for (id, name, national_id) in [("c_1", "김철수", "900101-1234568"), ("c_2", "Lee", "")] {
        ledger = apply_ok(
            &ledger,
            Command::RegisterCoach {
                coach_id: CoachId::new(id),
                name: name.to_string(),
                national_id: NationalId::new(national_id),
                year,
            },
        )
        .new_ledger;
    }
    apply_ok(
        &ledger,
        Command::SetMonthlyAmount {
            key: RosterKey::new(year, MonthIndex::new(2).unwrap()),
            coach_id: CoachId::new("c_1"),
            amount: 1_000_000,
        },
    )
    .new_ledger
}

/// An in-memory store whose first `failures` saves fail.
pub struct FlakyStore {
    pub failures: u32,
    pub save_calls: u32,
    pub blobs: HashMap<String, String>,
}

impl FlakyStore {
    pub fn new(failures: u32) -> Self {
        Self {
            failures,
            save_calls: 0,
            blobs: HashMap::new(),
        }
    }
}

impl BlobStore for FlakyStore {
    fn load(&mut self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.blobs.get(key).cloned())
    }

    fn save(&mut self, key: &str, blob: &str) -> Result<(), PersistenceError> {
        self.save_calls += 1;
        if self.failures > 0 {
            self.failures -= 1;
            return Err(PersistenceError::DatabaseError(String::from("disk I/O error")));
        }
        self.blobs.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}
