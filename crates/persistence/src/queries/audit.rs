// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit journal queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use dh_payroll_audit::AuditEvent;

use crate::data_models::{ActionData, ActorData, CauseData, StateSnapshotData};
use crate::diesel_schema::audit_events;
use crate::error::PersistenceError;
use crate::store::AuditRecord;

/// One journal row; the ledger key and action name columns exist for filtering only.
#[derive(Queryable, Selectable)]
#[diesel(table_name = audit_events)]
struct AuditEventRow {
    event_id: i64,
    actor_json: String,
    cause_json: String,
    action_json: String,
    before_snapshot_json: String,
    after_snapshot_json: String,
    created_at: String,
}

impl AuditEventRow {
    fn into_record(self) -> Result<AuditRecord, PersistenceError> {
        let actor: ActorData = serde_json::from_str(&self.actor_json)?;
        let cause: CauseData = serde_json::from_str(&self.cause_json)?;
        let action: ActionData = serde_json::from_str(&self.action_json)?;
        let before: StateSnapshotData = serde_json::from_str(&self.before_snapshot_json)?;
        let after: StateSnapshotData = serde_json::from_str(&self.after_snapshot_json)?;

        Ok(AuditRecord {
            event_id: self.event_id,
            recorded_at: self.created_at,
            event: AuditEvent::new(
                actor.into(),
                cause.into(),
                action.into(),
                before.into(),
                after.into(),
            ),
        })
    }
}

/// Retrieves the most recent audit events of a ledger, newest first.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `ledger_key` - The ledger whose journal to read
/// * `limit` - Maximum number of events to return
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be deserialized.
pub fn get_audit_history(
    conn: &mut SqliteConnection,
    ledger_key: &str,
    limit: usize,
) -> Result<Vec<AuditRecord>, PersistenceError> {
    let limit: i64 = i64::try_from(limit).unwrap_or(i64::MAX);

    let rows: Vec<AuditEventRow> = audit_events::table
        .filter(audit_events::ledger_key.eq(ledger_key))
        .order(audit_events::event_id.desc())
        .limit(limit)
        .select(AuditEventRow::as_select())
        .load::<AuditEventRow>(conn)?;

    rows.into_iter().map(AuditEventRow::into_record).collect()
}
