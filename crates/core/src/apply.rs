// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Ledger, TransitionResult};
use crate::validate_coach_exists;
use dh_payroll_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use dh_payroll_domain::{
    Coach, MonthIndex, RosterKey, validate_amount, validate_coach_name,
    validate_national_id_unique, validate_roster_capacity,
};

/// Applies a command to the current ledger, producing a new ledger and audit event.
///
/// The input ledger is never modified. On error no new ledger is produced.
///
/// # Arguments
///
/// * `ledger` - The current ledger (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new ledger and audit event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - A registration has a blank name, would exceed the coach limit, or
///   reuses a registered identity number
/// - The command references a coach that does not exist
/// - A monthly amount is above `MAX_MONTHLY_AMOUNT`
pub fn apply(
    ledger: &Ledger,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    let before: StateSnapshot = ledger.to_snapshot();
    let action_name: &'static str = command.name();
    let mut new_ledger: Ledger = ledger.clone();

    let details: String = match command {
        Command::RegisterCoach {
            coach_id,
            name,
            national_id,
            year,
        } => {
            let name: String = validate_coach_name(&name)?;
            validate_roster_capacity(&ledger.coaches)?;
            validate_national_id_unique(&national_id, &ledger.coaches)?;

            new_ledger
                .coaches
                .push(Coach::new(coach_id.clone(), name.clone(), national_id));
            new_ledger.ensure_payment_row(year, &coach_id);
            for month in MonthIndex::all() {
                new_ledger.enroll(RosterKey::new(year, month), &coach_id);
            }

            format!("Registered coach '{name}' ({coach_id}) for all months of {year}")
        }
        Command::DeleteCoach { coach_id } => {
            validate_coach_exists(ledger, &coach_id)?;

            new_ledger.coaches.retain(|coach| coach.id != coach_id);
            for table in new_ledger.payments.values_mut() {
                table.remove(&coach_id);
            }
            for roster in new_ledger.rosters.values_mut() {
                roster.retain(|id| id != &coach_id);
            }

            format!("Deleted coach {coach_id} with all payments and roster entries")
        }
        Command::UpdateIdentity {
            coach_id,
            national_id,
        } => {
            validate_coach_exists(ledger, &coach_id)?;

            // Uniqueness is only enforced at registration.
            if let Some(coach) = new_ledger
                .coaches
                .iter_mut()
                .find(|coach| coach.id == coach_id)
            {
                coach.national_id = national_id;
            }

            format!("Updated identity number of coach {coach_id}")
        }
        Command::AddToRoster { key, coach_id } => {
            validate_coach_exists(ledger, &coach_id)?;

            new_ledger.enroll(key, &coach_id);
            new_ledger.ensure_payment_row(key.year, &coach_id);

            format!("Added coach {coach_id} to roster {key}")
        }
        Command::RemoveFromRoster { key, coach_id } => {
            validate_coach_exists(ledger, &coach_id)?;

            if let Some(roster) = new_ledger.rosters.get_mut(&key) {
                roster.retain(|id| id != &coach_id);
            }

            format!("Removed coach {coach_id} from roster {key}")
        }
        Command::SetMonthlyAmount {
            key,
            coach_id,
            amount,
        } => {
            validate_coach_exists(ledger, &coach_id)?;
            let amount: u64 = validate_amount(amount)?;

            new_ledger.ensure_payment_row(key.year, &coach_id);
            if let Some(amounts) = new_ledger
                .payments
                .get_mut(&key.year)
                .and_then(|table| table.get_mut(&coach_id))
            {
                amounts[key.month.slot()] = amount;
            }

            format!("Set amount of coach {coach_id} for {} to {amount}", key.period_label())
        }
        Command::SelectYear { year } => {
            new_ledger.payments.entry(year).or_default();

            format!("Selected year {year}")
        }
    };

    let after: StateSnapshot = new_ledger.to_snapshot();
    let action: Action = Action::new(String::from(action_name), Some(details));
    let audit_event: AuditEvent = AuditEvent::new(actor, cause, action, before, after);

    Ok(TransitionResult {
        new_ledger,
        audit_event,
    })
}
