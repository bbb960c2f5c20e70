// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversion between the [`Ledger`] aggregate and its persisted blob.
//!
//! The whole ledger is the unit of persistence. Encoding is deterministic:
//! encoding a decoded blob that needed no repair reproduces it byte for byte.

use dh_payroll::Ledger;
use dh_payroll_domain::{
    Coach, CoachId, LedgerYear, MonthlyAmounts, NationalId, RosterKey, validate_amount,
};
use std::collections::BTreeMap;
use tracing::warn;

use crate::data_models::{CoachData, LedgerData};
use crate::error::PersistenceError;

/// A ledger rebuilt from a blob, together with the repairs applied to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLedger {
    /// The rehydrated ledger.
    pub ledger: Ledger,
    /// Descriptions of repairs made to restore cross-reference invariants.
    pub repairs: Vec<String>,
}

/// Serializes a ledger to its blob form.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn encode_ledger(ledger: &Ledger) -> Result<String, PersistenceError> {
    let data: LedgerData = LedgerData {
        coaches: ledger
            .coaches
            .iter()
            .map(|coach| CoachData {
                id: coach.id.value().to_string(),
                name: coach.name.clone(),
                jumin: coach.national_id.value().to_string(),
            })
            .collect(),
        years: ledger
            .payments
            .iter()
            .map(|(year, table)| {
                let rows: BTreeMap<String, MonthlyAmounts> = table
                    .iter()
                    .map(|(coach_id, amounts)| (coach_id.value().to_string(), *amounts))
                    .collect();
                (year.to_string(), rows)
            })
            .collect(),
        rosters: ledger
            .rosters
            .iter()
            .map(|(key, roster)| {
                let ids: Vec<String> = roster.iter().map(|id| id.value().to_string()).collect();
                (key.to_string(), ids)
            })
            .collect(),
    };

    Ok(serde_json::to_string(&data)?)
}

/// Rebuilds a ledger from its blob form.
///
/// Year and roster keys are validated. After decoding, the ledger is
/// repaired: unknown or duplicate roster entries are dropped and roster
/// members without a payment row get a zeroed one.
///
/// # Errors
///
/// Returns an error if the blob is not valid JSON, an amount array does not
/// have twelve entries, an amount is above the monthly limit, a key cannot
/// be parsed, or a coach has a blank name or duplicate id.
pub fn decode_ledger(blob: &str) -> Result<DecodedLedger, PersistenceError> {
    let data: LedgerData = serde_json::from_str(blob)?;
    let mut ledger: Ledger = Ledger::new();

    for coach in data.coaches {
        if coach.name.trim().is_empty() {
            return Err(PersistenceError::InvalidSnapshot(format!(
                "coach '{}' has a blank name",
                coach.id
            )));
        }
        let id: CoachId = CoachId::new(&coach.id);
        if ledger.coach(&id).is_some() {
            return Err(PersistenceError::InvalidSnapshot(format!(
                "coach id '{id}' appears more than once"
            )));
        }
        ledger
            .coaches
            .push(Coach::new(id, coach.name, NationalId::new(&coach.jumin)));
    }

    for (year, rows) in data.years {
        let year: LedgerYear = year
            .parse::<LedgerYear>()
            .map_err(|e| PersistenceError::InvalidSnapshot(e.to_string()))?;
        let table = ledger.payments.entry(year).or_default();
        for (coach_id, amounts) in rows {
            for amount in amounts {
                validate_amount(amount).map_err(|e| {
                    PersistenceError::InvalidSnapshot(format!("coach '{coach_id}' in {year}: {e}"))
                })?;
            }
            table.insert(CoachId::new(&coach_id), amounts);
        }
    }

    for (key, ids) in data.rosters {
        let key: RosterKey = key
            .parse::<RosterKey>()
            .map_err(|e| PersistenceError::InvalidSnapshot(e.to_string()))?;
        ledger
            .rosters
            .entry(key)
            .or_default()
            .extend(ids.iter().map(|id| CoachId::new(id)));
    }

    let repairs: Vec<String> = ledger.repair();
    for repair in &repairs {
        warn!(repair = %repair, "Repaired rehydrated ledger");
    }

    Ok(DecodedLedger { ledger, repairs })
}
