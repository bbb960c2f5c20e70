// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dispatch of parsed subcommands onto a [`LedgerStore`].

use dh_payroll_api::{ExportOutcome, LedgerStore, RegisterCoachRequest};
use dh_payroll_audit::{Actor, Cause};
use dh_payroll_domain::{
    CoachId, LedgerYear, MonthIndex, NationalId, RosterKey, validate_national_id,
};
use dh_payroll_persistence::{AuditJournal, BlobStore};
use std::error::Error;
use std::path::{Path, PathBuf};
use time::{Date, OffsetDateTime};
use tracing::info;

use crate::args::LedgerCommand;
use crate::output::{
    ExportReport, IdentityReport, MonthReport, Output, render_coaches, render_export,
    render_history, render_identity, render_month_report, render_year,
};

/// Everything a command needs besides the store.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// The working year.
    pub year: LedgerYear,
    /// When the command runs.
    pub now: OffsetDateTime,
    /// Who runs the command.
    pub actor: Actor,
    /// Print JSON instead of text.
    pub json: bool,
}

impl Invocation {
    const fn today(&self) -> Date {
        self.now.date()
    }

    fn cause(command: &LedgerCommand) -> Cause {
        Cause::new(
            format!("cli-{}", command.name()),
            String::from("Command line"),
        )
    }
}

/// Converts a one-based calendar month into a roster key of the working year.
fn roster_key(year: LedgerYear, month: u8) -> Result<RosterKey, Box<dyn Error>> {
    let index: MonthIndex = MonthIndex::new(month.saturating_sub(1))?;
    Ok(RosterKey::new(year, index))
}

/// Runs one command and returns the text to print.
///
/// # Errors
///
/// Returns an error if the store rejects the command, the output cannot be
/// rendered, or the export file cannot be written.
pub fn execute<S: BlobStore + AuditJournal>(
    store: &mut LedgerStore<S>,
    command: &LedgerCommand,
    invocation: &Invocation,
) -> Result<String, Box<dyn Error>> {
    let out: Output = Output::new(invocation.json);
    let actor: Actor = invocation.actor.clone();
    let cause: Cause = Invocation::cause(command);

    let text: String = match command {
        LedgerCommand::Register {
            name,
            national_id,
            force,
        } => {
            let request: RegisterCoachRequest = RegisterCoachRequest {
                name: name.clone(),
                national_id: national_id.clone(),
                allow_invalid_identity: *force,
            };
            let result = store.register_coach(&request, actor, cause)?;
            out.render(&result.response, |response| {
                let mut text: String =
                    format!("{} (id {})", response.message, response.coach_id);
                if let Some(warning) = &response.overridden_identity_warning {
                    text.push_str(&format!("\nIdentity number kept despite: {warning}"));
                }
                text
            })?
        }
        LedgerCommand::Delete { coach_id } => {
            let result = store.delete_coach(&CoachId::new(coach_id), actor, cause)?;
            out.render(&result.response, |response| response.message.clone())?
        }
        LedgerCommand::SetIdentity {
            coach_id,
            national_id,
        } => {
            let result =
                store.update_identity(&CoachId::new(coach_id), national_id, actor, cause)?;
            let mut text: String = out.render(&result.response, |response| response.message.clone())?;
            // An empty identity number clears it.
            if !invocation.json
                && !NationalId::new(national_id).is_empty()
                && let Err(reason) = validate_national_id(national_id)
            {
                text.push_str(&format!("\nWarning: identity number {reason}"));
            }
            text
        }
        LedgerCommand::RosterAdd { month, coach_id } => {
            let key: RosterKey = roster_key(invocation.year, *month)?;
            let result = store.add_to_roster(key, &CoachId::new(coach_id), actor, cause)?;
            out.render(&result.response, |response| response.message.clone())?
        }
        LedgerCommand::RosterRemove { month, coach_id } => {
            let key: RosterKey = roster_key(invocation.year, *month)?;
            let result = store.remove_from_roster(key, &CoachId::new(coach_id), actor, cause)?;
            out.render(&result.response, |response| response.message.clone())?
        }
        LedgerCommand::SetAmount {
            month,
            coach_id,
            amount,
        } => {
            let key: RosterKey = roster_key(invocation.year, *month)?;
            let result =
                store.set_monthly_amount(key, &CoachId::new(coach_id), amount, actor, cause)?;
            out.render(&result.response, |response| {
                format!(
                    "{} (tax {}, net {})",
                    response.message, response.tax, response.net
                )
            })?
        }
        LedgerCommand::SelectYear => {
            let result = store.select_year(invocation.year, actor, cause)?;
            out.render(&result.response, |response| response.message.clone())?
        }
        LedgerCommand::ValidateId { national_id } => {
            let report: IdentityReport = IdentityReport::new(national_id);
            out.render(&report, render_identity)?
        }
        LedgerCommand::Month { month, candidates } => {
            let key: RosterKey = match month {
                Some(month) => roster_key(invocation.year, *month)?,
                None => RosterKey::new(
                    invocation.year,
                    MonthIndex::default_focus(invocation.today()),
                ),
            };
            let report: MonthReport = MonthReport {
                summary: store.month_summary(&key),
                candidates: candidates.then(|| store.roster_candidates(&key)),
            };
            out.render(&report, render_month_report)?
        }
        LedgerCommand::Year => {
            let summary = store.year_summary(invocation.year);
            out.render(&summary, render_year)?
        }
        LedgerCommand::Coaches => {
            let coaches = store.coaches();
            let years: Vec<u16> = store
                .available_years()
                .iter()
                .map(LedgerYear::year)
                .collect();
            let mut text: String = out.render(&coaches, |views| render_coaches(views))?;
            if !invocation.json {
                text.push_str(&format!("\nYears: {years:?}"));
            }
            text
        }
        LedgerCommand::Export { output_dir } => {
            match store.export_year(invocation.year, invocation.now)? {
                ExportOutcome::Ready(batch) => {
                    let path: PathBuf = Path::new(output_dir).join(&batch.file_name);
                    std::fs::write(&path, batch.csv.as_bytes())?;
                    info!(path = %path.display(), rows = batch.rows.len(), "Wrote export file");
                    let report: ExportReport = ExportReport {
                        year: batch.year.year(),
                        file: path.display().to_string(),
                        rows: batch.rows.len(),
                        mail_subject: batch.mail_subject,
                        mail_body: batch.mail_body,
                    };
                    out.render(&report, render_export)?
                }
                ExportOutcome::NothingToExport { year } => {
                    format!("No payments recorded in {year}, nothing to export")
                }
            }
        }
        LedgerCommand::History { limit } => {
            let entries = store.history(*limit)?;
            out.render(&entries, |entries| render_history(entries))?
        }
    };

    Ok(text)
}
