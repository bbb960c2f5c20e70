// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, Ledger, TransitionResult, apply};
use dh_payroll_audit::{Actor, Cause};
use dh_payroll_domain::{CoachId, LedgerYear, MonthIndex, NationalId, RosterKey};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("operator-1"), String::from("operator"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("cli"), String::from("Command line request"))
}

pub fn year_2024() -> LedgerYear {
    LedgerYear::new(2024).unwrap()
}

pub fn key(year: u16, month: u8) -> RosterKey {
    RosterKey::new(LedgerYear::new(year).unwrap(), MonthIndex::new(month).unwrap())
}

pub fn register_command(id: &str, name: &str, national_id: &str) -> Command {
    Command::RegisterCoach {
        coach_id: CoachId::new(id),
        name: name.to_string(),
        national_id: NationalId::new(national_id),
        year: year_2024(),
    }
}

/// Applies a command that is expected to succeed and returns the new ledger.
pub fn apply_ok(ledger: &Ledger, command: Command) -> Ledger {
    let result: TransitionResult =
        apply(ledger, command, create_test_actor(), create_test_cause()).unwrap();
    result.new_ledger
}

/// A ledger with coaches `c_1` (Kim) and `c_2` (Lee) registered in 2024.
pub fn create_two_coach_ledger() -> Ledger {
    let ledger: Ledger = apply_ok(
        &Ledger::new(),
        register_command("c_1", "Kim", "900101-1234568"),
    );
    apply_ok(&ledger, register_command("c_2", "Lee", ""))
}

pub fn set_amount(ledger: &Ledger, key: RosterKey, id: &str, amount: u64) -> Ledger {
    apply_ok(
        ledger,
        Command::SetMonthlyAmount {
            key,
            coach_id: CoachId::new(id),
            amount,
        },
    )
}
