// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit journal appends.

use diesel::SqliteConnection;
use diesel::prelude::*;
use dh_payroll_audit::AuditEvent;
use tracing::debug;

use crate::backend::sqlite::last_journal_rowid;
use crate::data_models::{ActionData, ActorData, CauseData, StateSnapshotData};
use crate::diesel_schema::audit_events;
use crate::error::PersistenceError;

/// Appends one persisted mutation to the journal of `ledger_key`.
///
/// Returns the journal id of the new row.
///
/// # Errors
///
/// Returns an error if the event cannot be serialized or inserted.
pub fn append_audit_event(
    conn: &mut SqliteConnection,
    ledger_key: &str,
    event: &AuditEvent,
) -> Result<i64, PersistenceError> {
    let actor_json: String = serde_json::to_string(&ActorData::from(&event.actor))?;
    let cause_json: String = serde_json::to_string(&CauseData::from(&event.cause))?;
    let action_json: String = serde_json::to_string(&ActionData::from(&event.action))?;
    let before_json: String = serde_json::to_string(&StateSnapshotData::from(&event.before))?;
    let after_json: String = serde_json::to_string(&StateSnapshotData::from(&event.after))?;

    conn.transaction::<_, PersistenceError, _>(|conn| {
        diesel::insert_into(audit_events::table)
            .values((
                audit_events::ledger_key.eq(ledger_key),
                audit_events::action_name.eq(&event.action.name),
                audit_events::actor_json.eq(&actor_json),
                audit_events::cause_json.eq(&cause_json),
                audit_events::action_json.eq(&action_json),
                audit_events::before_snapshot_json.eq(&before_json),
                audit_events::after_snapshot_json.eq(&after_json),
            ))
            .execute(conn)?;

        let event_id: i64 = last_journal_rowid(conn)?;
        debug!(event_id, ledger_key, action = %event.action.name, "Journaled ledger mutation");
        Ok(event_id)
    })
}
