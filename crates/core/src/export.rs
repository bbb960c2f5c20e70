// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rows handed to the tax preparer.
//!
//! Column order is fixed by the preparer's import routine and must not change.

use crate::state::Ledger;
use dh_payroll_domain::{
    CLASSIFICATION_LABEL, LedgerYear, MonthIndex, NATIONALITY_LABEL, RosterKey,
    WITHHOLDING_RATE_LABEL, WithholdingBreakdown, decompose_withholding,
};

/// Column titles, in export order.
pub const EXPORT_HEADERS: [&str; 14] = [
    "귀속년월",
    "지급년월일",
    "소득자명",
    "주민등록번호",
    "기본주소",
    "상세주소",
    "소득구분",
    "영수일자",
    "지급총액",
    "세율(%)",
    "소득세",
    "지방소득세",
    "내.외국인구분",
    "연말정산",
];

/// One paid coach-month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    /// `"YYYY-MM"` period label.
    pub period: String,
    /// The coach's display name.
    pub coach_name: String,
    /// Identity number with hyphens removed.
    pub national_id: String,
    /// Gross amount paid.
    pub gross: u64,
    /// Income tax and local tax.
    pub breakdown: WithholdingBreakdown,
}

impl ExportRow {
    /// Expands the row into the fourteen export columns.
    #[must_use]
    pub fn to_record(&self) -> [String; 14] {
        [
            self.period.clone(),
            String::new(),
            self.coach_name.clone(),
            self.national_id.clone(),
            String::new(),
            String::new(),
            String::from(CLASSIFICATION_LABEL),
            String::new(),
            self.gross.to_string(),
            String::from(WITHHOLDING_RATE_LABEL),
            self.breakdown.income_tax.to_string(),
            self.breakdown.local_tax.to_string(),
            String::from(NATIONALITY_LABEL),
            String::new(),
        ]
    }
}

/// Builds the export rows for a year.
///
/// A row is produced for each roster member with a strictly positive amount,
/// ordered by month and then by roster insertion order. An empty result
/// means there is nothing to export.
#[must_use]
pub fn export_rows(ledger: &Ledger, year: LedgerYear) -> Vec<ExportRow> {
    let mut rows: Vec<ExportRow> = Vec::new();
    for month in MonthIndex::all() {
        let key: RosterKey = RosterKey::new(year, month);
        for coach_id in ledger.roster(&key) {
            let gross: u64 = ledger.amount(&key, coach_id);
            if gross == 0 {
                continue;
            }
            let Some(coach) = ledger.coach(coach_id) else {
                continue;
            };
            rows.push(ExportRow {
                period: key.period_label(),
                coach_name: coach.name.clone(),
                national_id: coach.national_id.value().to_string(),
                gross,
                breakdown: decompose_withholding(gross),
            });
        }
    }
    rows
}
