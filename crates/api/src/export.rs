// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Annual export batch for the tax preparer.
//!
//! The batch carries the rendered CSV document together with the suggested
//! file name and the text of the hand-off mail.

use dh_payroll::{EXPORT_HEADERS, ExportRow};
use dh_payroll_domain::LedgerYear;
use thiserror::Error;
use time::OffsetDateTime;

/// Export rendering errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The CSV writer failed.
    #[error("Failed to write export CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The CSV writer could not hand back its buffer.
    #[error("Failed to finish export CSV: {0}")]
    Flush(String),

    /// The rendered document is not valid UTF-8.
    #[error("Export CSV is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Everything needed to hand a year's payroll to the tax preparer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBatch {
    /// The exported year.
    pub year: LedgerYear,
    /// The exported rows, month then roster order.
    pub rows: Vec<ExportRow>,
    /// The CSV document, header row first.
    pub csv: String,
    /// Suggested file name for the document.
    pub file_name: String,
    /// Subject line of the hand-off mail.
    pub mail_subject: String,
    /// Body of the hand-off mail.
    pub mail_body: String,
}

/// Result of an export request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// There were paid roster members; the batch is ready.
    Ready(ExportBatch),
    /// No roster member was paid in the year.
    NothingToExport {
        /// The requested year.
        year: LedgerYear,
    },
}

/// Renders rows as a CSV document with the fixed header row.
///
/// # Errors
///
/// Returns an error if the CSV writer fails.
pub fn render_csv(rows: &[ExportRow]) -> Result<String, ExportError> {
    let mut writer: csv::Writer<Vec<u8>> = csv::Writer::from_writer(Vec::new());
    writer.write_record(EXPORT_HEADERS)?;
    for row in rows {
        writer.write_record(row.to_record())?;
    }
    let bytes: Vec<u8> = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.error().to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Returns the suggested file name, stamped with the export time at the
/// offset `now` carries. A UTC stamp is marked `_UTC`.
#[must_use]
pub fn export_file_name(year: LedgerYear, now: OffsetDateTime) -> String {
    let zone: &str = if now.offset().is_utc() { "_UTC" } else { "" };
    format!(
        "{year}년_급여자료_{:02}월{:02}일_{:02}시{:02}분{zone}.csv",
        u8::from(now.month()),
        now.day(),
        now.hour(),
        now.minute()
    )
}

/// Returns the subject of the hand-off mail.
#[must_use]
pub fn mail_subject(year: LedgerYear) -> String {
    format!("{year}년 급여신고 자료 제출")
}

/// Returns the body of the hand-off mail, naming the file to attach.
#[must_use]
pub fn mail_body(year: LedgerYear, file_name: &str) -> String {
    format!(
        "세무사님 안녕하세요,\n\n{year}년도 체육관 급여신고 자료를 파일로 송부드립니다.\n\n(저장된 '{file_name}' 파일을 첨부해주세요.)\n\n감사합니다."
    )
}

/// Assembles an export batch, or reports that there is nothing to export.
///
/// # Errors
///
/// Returns an error if the CSV document cannot be rendered.
pub fn build_export(
    year: LedgerYear,
    rows: Vec<ExportRow>,
    now: OffsetDateTime,
) -> Result<ExportOutcome, ExportError> {
    if rows.is_empty() {
        return Ok(ExportOutcome::NothingToExport { year });
    }
    let csv: String = render_csv(&rows)?;
    let file_name: String = export_file_name(year, now);
    let mail_body: String = mail_body(year, &file_name);
    Ok(ExportOutcome::Ready(ExportBatch {
        year,
        rows,
        csv,
        file_name,
        mail_subject: mail_subject(year),
        mail_body,
    }))
}
