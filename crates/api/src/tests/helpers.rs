// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use dh_payroll_audit::{Actor, AuditEvent, Cause};
use dh_payroll_domain::{CoachId, LedgerYear, MonthIndex, RosterKey};
use dh_payroll_persistence::{
    AuditJournal, AuditRecord, BlobStore, Persistence, PersistenceError, RetryPolicy,
};
use std::time::Duration;

use crate::{LedgerStore, RegisterCoachRequest, StoreConfig};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("operator-1"), String::from("operator"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("api-req-456"), String::from("API request"))
}

pub fn year_2025() -> LedgerYear {
    LedgerYear::new(2025).unwrap()
}

pub fn key(month: u8) -> RosterKey {
    RosterKey::new(year_2025(), MonthIndex::new(month).unwrap())
}

pub fn create_test_config() -> StoreConfig {
    StoreConfig {
        retry: RetryPolicy::new(3, Duration::ZERO),
        ..StoreConfig::default()
    }
}

pub fn register_request(name: &str, national_id: &str) -> RegisterCoachRequest {
    RegisterCoachRequest {
        name: name.to_string(),
        national_id: national_id.to_string(),
        allow_invalid_identity: false,
    }
}

/// A `SQLite` backend whose first `failing_saves` saves fail.
pub struct ScriptedBackend {
    pub inner: Persistence,
    pub failing_saves: u32,
    pub save_attempts: u32,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self {
            inner: Persistence::new_in_memory().unwrap(),
            failing_saves: 0,
            save_attempts: 0,
        }
    }

    pub fn failing(failing_saves: u32) -> Self {
        Self {
            failing_saves,
            ..Self::new()
        }
    }
}

impl BlobStore for ScriptedBackend {
    fn load(&mut self, key: &str) -> Result<Option<String>, PersistenceError> {
        self.inner.load(key)
    }

    fn save(&mut self, key: &str, blob: &str) -> Result<(), PersistenceError> {
        self.save_attempts += 1;
        if self.failing_saves > 0 {
            self.failing_saves -= 1;
            return Err(PersistenceError::DatabaseError(String::from(
                "database is locked",
            )));
        }
        self.inner.save(key, blob)
    }
}

impl AuditJournal for ScriptedBackend {
    fn append(&mut self, ledger_key: &str, event: &AuditEvent) -> Result<i64, PersistenceError> {
        self.inner.append(ledger_key, event)
    }

    fn history(
        &mut self,
        ledger_key: &str,
        limit: usize,
    ) -> Result<Vec<AuditRecord>, PersistenceError> {
        self.inner.history(ledger_key, limit)
    }
}

pub fn open_store(backend: ScriptedBackend) -> LedgerStore<ScriptedBackend> {
    LedgerStore::open(backend, create_test_config(), year_2025()).unwrap()
}

/// Registers a coach without identity number and returns its id.
pub fn register(store: &mut LedgerStore<ScriptedBackend>, name: &str) -> CoachId {
    let result = store
        .register_coach(
            &register_request(name, ""),
            create_test_actor(),
            create_test_cause(),
        )
        .unwrap();
    CoachId::new(&result.response.coach_id)
}
