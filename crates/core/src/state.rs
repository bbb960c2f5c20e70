// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dh_payroll_audit::{AuditEvent, StateSnapshot};
use dh_payroll_domain::{
    Coach, CoachId, LedgerYear, MONTHS_PER_YEAR, MonthlyAmounts, RosterKey,
};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// The payroll ledger aggregate for one business.
///
/// Invariants maintained by [`crate::apply`]:
/// - every coach id in a roster for year Y has a payment row in `payments[Y]`
/// - a coach id appears at most once per roster
/// - no payment row or roster entry references a deleted coach
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ledger {
    /// Coaches in registration order.
    pub coaches: Vec<Coach>,
    /// Gross amounts per year, per coach, per month.
    pub payments: BTreeMap<LedgerYear, BTreeMap<CoachId, MonthlyAmounts>>,
    /// Active coaches per month, in insertion order.
    pub rosters: BTreeMap<RosterKey, Vec<CoachId>>,
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            coaches: Vec::new(),
            payments: BTreeMap::new(),
            rosters: BTreeMap::new(),
        }
    }

    /// Looks up a coach by identifier.
    #[must_use]
    pub fn coach(&self, coach_id: &CoachId) -> Option<&Coach> {
        self.coaches.iter().find(|coach| &coach.id == coach_id)
    }

    /// Returns the roster for a month, empty if none was ever created.
    #[must_use]
    pub fn roster(&self, key: &RosterKey) -> &[CoachId] {
        self.rosters.get(key).map_or(&[], Vec::as_slice)
    }

    /// Returns the stored gross amount, 0 if none is stored.
    #[must_use]
    pub fn amount(&self, key: &RosterKey, coach_id: &CoachId) -> u64 {
        self.payments
            .get(&key.year)
            .and_then(|table| table.get(coach_id))
            .map_or(0, |amounts| amounts[key.month.slot()])
    }

    /// Returns the sorted years that have a payment table, plus `selected`.
    #[must_use]
    pub fn available_years(&self, selected: LedgerYear) -> Vec<LedgerYear> {
        let mut years: Vec<LedgerYear> = self.payments.keys().copied().collect();
        if !years.contains(&selected) {
            years.push(selected);
            years.sort_unstable();
        }
        years
    }

    /// Returns the coaches, in registration order, not yet on a month's roster.
    #[must_use]
    pub fn roster_candidates(&self, key: &RosterKey) -> Vec<&Coach> {
        let roster: &[CoachId] = self.roster(key);
        self.coaches
            .iter()
            .filter(|coach| !roster.contains(&coach.id))
            .collect()
    }

    /// Converts the ledger to an audit snapshot: a count summary plus a
    /// fingerprint of every coach, amount and roster entry.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        let roster_entries: usize = self.rosters.values().map(Vec::len).sum();
        StateSnapshot::new(
            format!(
                "coaches={},years={},roster_entries={}",
                self.coaches.len(),
                self.payments.len(),
                roster_entries
            ),
            self.fingerprint(),
        )
    }

    /// Returns the SHA-256 digest of the ledger contents as lowercase hex.
    ///
    /// Fields are NUL-terminated so adjacent strings cannot run together.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        fn field(hasher: &mut Sha256, value: &str) {
            hasher.update(value.as_bytes());
            hasher.update([0u8]);
        }

        let mut hasher: Sha256 = Sha256::new();
        for coach in &self.coaches {
            field(&mut hasher, "coach");
            field(&mut hasher, coach.id.value());
            field(&mut hasher, &coach.name);
            field(&mut hasher, coach.national_id.value());
        }
        for (year, table) in &self.payments {
            field(&mut hasher, "year");
            field(&mut hasher, &year.to_string());
            for (coach_id, amounts) in table {
                field(&mut hasher, coach_id.value());
                for amount in amounts {
                    hasher.update(amount.to_le_bytes());
                }
            }
        }
        for (key, roster) in &self.rosters {
            field(&mut hasher, "roster");
            field(&mut hasher, &key.to_string());
            for coach_id in roster {
                field(&mut hasher, coach_id.value());
            }
        }
        format!("{:x}", hasher.finalize())
    }

    /// Restores the cross-reference invariants on a rehydrated ledger.
    ///
    /// Roster ids without a matching coach are dropped, duplicate roster
    /// entries are collapsed, and roster members without a payment row get a
    /// zeroed one. Returns a description of every repair made.
    pub fn repair(&mut self) -> Vec<String> {
        let mut repairs: Vec<String> = Vec::new();
        let known: Vec<CoachId> = self.coaches.iter().map(|coach| coach.id.clone()).collect();

        for (key, roster) in &mut self.rosters {
            let before: usize = roster.len();
            let mut seen: Vec<CoachId> = Vec::with_capacity(before);
            roster.retain(|id| {
                if !known.contains(id) || seen.contains(id) {
                    return false;
                }
                seen.push(id.clone());
                true
            });
            if roster.len() != before {
                repairs.push(format!(
                    "roster {key}: dropped {} unknown or duplicate entries",
                    before - roster.len()
                ));
            }
        }

        for table in self.payments.values_mut() {
            let before: usize = table.len();
            table.retain(|id, _| known.contains(id));
            if table.len() != before {
                repairs.push(format!(
                    "dropped {} payment rows of unknown coaches",
                    before - table.len()
                ));
            }
        }

        let memberships: Vec<(RosterKey, CoachId)> = self
            .rosters
            .iter()
            .flat_map(|(key, roster)| roster.iter().map(|id| (*key, id.clone())))
            .collect();
        for (key, coach_id) in memberships {
            if self.ensure_payment_row(key.year, &coach_id) {
                repairs.push(format!("initialized payment row {} for {coach_id}", key.year));
            }
        }

        repairs
    }

    /// Creates a zeroed payment row if absent. Returns whether one was created.
    pub(crate) fn ensure_payment_row(&mut self, year: LedgerYear, coach_id: &CoachId) -> bool {
        let table = self.payments.entry(year).or_default();
        if table.contains_key(coach_id) {
            return false;
        }
        table.insert(coach_id.clone(), [0; MONTHS_PER_YEAR]);
        true
    }

    /// Adds a coach to a roster if not already present. Returns whether it was added.
    pub(crate) fn enroll(&mut self, key: RosterKey, coach_id: &CoachId) -> bool {
        let roster = self.rosters.entry(key).or_default();
        if roster.contains(coach_id) {
            return false;
        }
        roster.push(coach_id.clone());
        true
    }
}

/// The result of a successful ledger transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new ledger after the transition.
    pub new_ledger: Ledger,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}
