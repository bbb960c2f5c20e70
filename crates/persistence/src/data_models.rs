// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dh_payroll_audit::{Action, Actor, Cause, StateSnapshot};
use dh_payroll_domain::MonthlyAmounts;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Serializable representation of an Actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorData {
    pub id: String,
    pub actor_type: String,
}

/// Serializable representation of a Cause.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CauseData {
    pub id: String,
    pub description: String,
}

/// Serializable representation of an Action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionData {
    pub name: String,
    pub details: Option<String>,
}

/// Serializable representation of a `StateSnapshot`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshotData {
    pub summary: String,
    #[serde(default)]
    pub fingerprint: String,
}

impl From<&Actor> for ActorData {
    fn from(actor: &Actor) -> Self {
        Self {
            id: actor.id.clone(),
            actor_type: actor.actor_type.clone(),
        }
    }
}

impl From<ActorData> for Actor {
    fn from(data: ActorData) -> Self {
        Self::new(data.id, data.actor_type)
    }
}

impl From<&Cause> for CauseData {
    fn from(cause: &Cause) -> Self {
        Self {
            id: cause.id.clone(),
            description: cause.description.clone(),
        }
    }
}

impl From<CauseData> for Cause {
    fn from(data: CauseData) -> Self {
        Self::new(data.id, data.description)
    }
}

impl From<&Action> for ActionData {
    fn from(action: &Action) -> Self {
        Self {
            name: action.name.clone(),
            details: action.details.clone(),
        }
    }
}

impl From<ActionData> for Action {
    fn from(data: ActionData) -> Self {
        Self::new(data.name, data.details)
    }
}

impl From<&StateSnapshot> for StateSnapshotData {
    fn from(snapshot: &StateSnapshot) -> Self {
        Self {
            summary: snapshot.summary.clone(),
            fingerprint: snapshot.fingerprint.clone(),
        }
    }
}

impl From<StateSnapshotData> for StateSnapshot {
    fn from(data: StateSnapshotData) -> Self {
        Self::new(data.summary, data.fingerprint)
    }
}

/// Serializable representation of a coach inside a ledger blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachData {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub jumin: String,
}

/// The persisted ledger blob.
///
/// Payment tables are keyed by year, then coach id. Rosters are keyed by
/// `"{year}-{monthIndex}"`. Ordered maps keep the encoding deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerData {
    #[serde(default)]
    pub coaches: Vec<CoachData>,
    #[serde(default)]
    pub years: BTreeMap<String, BTreeMap<String, MonthlyAmounts>>,
    #[serde(default)]
    pub rosters: BTreeMap<String, Vec<String>>,
}
