// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dh_payroll_api::{LedgerStore, RetryPolicy, StoreConfig};
use dh_payroll_audit::Actor;
use dh_payroll_domain::LedgerYear;
use dh_payroll_persistence::Persistence;
use time::OffsetDateTime;
use time::macros::datetime;

use crate::args::LedgerCommand;
use crate::commands::{Invocation, execute};

pub const NOW: OffsetDateTime = datetime!(2025-03-05 14:07 +9);

pub fn create_test_store() -> LedgerStore<Persistence> {
    let config: StoreConfig = StoreConfig {
        retry: RetryPolicy::no_retry(),
        ..StoreConfig::default()
    };
    LedgerStore::open(
        Persistence::new_in_memory().unwrap(),
        config,
        LedgerYear::new(2025).unwrap(),
    )
    .unwrap()
}

pub fn invocation(json: bool) -> Invocation {
    Invocation {
        year: LedgerYear::new(2025).unwrap(),
        now: NOW,
        actor: Actor::new(String::from("tester"), String::from("operator")),
        json,
    }
}

pub fn run_text(store: &mut LedgerStore<Persistence>, command: LedgerCommand) -> String {
    execute(store, &command, &invocation(false)).unwrap()
}

/// Registers a coach and returns its generated id.
pub fn register(store: &mut LedgerStore<Persistence>, name: &str) -> String {
    execute(
        store,
        &LedgerCommand::Register {
            name: name.to_string(),
            national_id: String::new(),
            force: false,
        },
        &invocation(false),
    )
    .unwrap();
    store
        .coaches()
        .into_iter()
        .find(|coach| coach.name == name)
        .map(|coach| coach.coach_id)
        .unwrap()
}
