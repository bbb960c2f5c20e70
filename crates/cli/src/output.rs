// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Text and JSON rendering of command results.

use dh_payroll_api::{CoachView, HistoryEntry, MonthSummary, YearSummary};
use dh_payroll_domain::validate_national_id;
use serde::Serialize;
use std::fmt::Write;

/// Chooses between JSON and text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Output {
    json: bool,
}

impl Output {
    pub const fn new(json: bool) -> Self {
        Self { json }
    }

    /// Renders `value` as pretty JSON or through `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render<T: Serialize + ?Sized>(
        self,
        value: &T,
        text: impl FnOnce(&T) -> String,
    ) -> Result<String, serde_json::Error> {
        if self.json {
            serde_json::to_string_pretty(value)
        } else {
            Ok(text(value))
        }
    }
}

/// A month summary, optionally with the coaches not on its roster.
///
/// Serializes as a single JSON object: the summary fields plus a
/// `candidates` array when requested.
#[derive(Debug, Clone, Serialize)]
pub struct MonthReport {
    #[serde(flatten)]
    pub summary: MonthSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<CoachView>>,
}

/// Outcome of a stand-alone identity number check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityReport {
    pub national_id: String,
    pub valid: bool,
    pub problem: Option<String>,
}

impl IdentityReport {
    pub fn new(raw: &str) -> Self {
        let problem: Option<String> = validate_national_id(raw)
            .err()
            .map(|reason| reason.to_string());
        Self {
            national_id: raw.to_string(),
            valid: problem.is_none(),
            problem,
        }
    }
}

/// What an export wrote and what to send along with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    pub year: u16,
    pub file: String,
    pub rows: usize,
    pub mail_subject: String,
    pub mail_body: String,
}

pub fn render_identity(report: &IdentityReport) -> String {
    report.problem.as_ref().map_or_else(
        || format!("{}: valid", report.national_id),
        |problem| format!("{}: invalid, {problem}", report.national_id),
    )
}

pub fn render_coaches(coaches: &[CoachView]) -> String {
    if coaches.is_empty() {
        return String::from("(none)");
    }
    let mut text: String = String::new();
    for coach in coaches {
        let _ = write!(text, "{:<28} {}", coach.coach_id, coach.name);
        if !coach.national_id.is_empty() {
            let _ = write!(text, "  {}", coach.national_id);
        }
        if let Some(problem) = &coach.identity_problem {
            let _ = write!(text, "  [check: {problem}]");
        }
        text.push('\n');
    }
    text.trim_end().to_string()
}

pub fn render_month(summary: &MonthSummary) -> String {
    let mut text: String = format!("{}\n", summary.period);
    for line in &summary.lines {
        let _ = writeln!(
            text,
            "  {:<20} {:>12} {:>10} {:>12}",
            line.name, line.figures.gross, line.figures.tax, line.figures.net
        );
    }
    let _ = write!(
        text,
        "  {:<20} {:>12} {:>10} {:>12}",
        "Total", summary.totals.gross, summary.totals.tax, summary.totals.net
    );
    text
}

pub fn render_month_report(report: &MonthReport) -> String {
    let mut text: String = render_month(&report.summary);
    if let Some(candidates) = &report.candidates {
        let _ = write!(text, "\nNot on the roster:\n{}", render_coaches(candidates));
    }
    text
}

pub fn render_year(summary: &YearSummary) -> String {
    let mut text: String = format!("{}\n", summary.year);
    for month in &summary.months {
        let _ = writeln!(
            text,
            "  {:<8} {:>12} {:>10} {:>12}",
            month.period, month.totals.gross, month.totals.tax, month.totals.net
        );
    }
    let _ = write!(
        text,
        "  {:<8} {:>12} {:>10} {:>12}",
        "Total", summary.totals.gross, summary.totals.tax, summary.totals.net
    );
    text
}

pub fn render_history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return String::from("(no entries)");
    }
    entries
        .iter()
        .map(|entry| {
            format!(
                "#{} {} {} by {}: {}{}",
                entry.event_id,
                entry.recorded_at,
                entry.action,
                entry.actor,
                entry.details.as_deref().unwrap_or("-"),
                if entry.changed { "" } else { " (no change)" }
            )
        })
        .collect::<Vec<String>>()
        .join("\n")
}

pub fn render_export(report: &ExportReport) -> String {
    format!(
        "Wrote {} rows to {}\n\nSubject: {}\n\n{}",
        report.rows, report.file, report.mail_subject, report.mail_body
    )
}
