// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Withholding tax on business income.
//!
//! Two formulas are in use and they are not interchangeable:
//!
//! - [`compute_withholding`] applies a flat 3.3% and drives every total and
//!   on-screen figure.
//! - [`decompose_withholding`] applies 3% income tax plus 10% of that income
//!   tax as local tax, and is only used for export rows handed to the tax
//!   preparer.
//!
//! Because each stage floors independently the two can disagree: 1,099
//! withholds 36 flat but 32 + 3 = 35 when decomposed. All arithmetic is
//! exact integer math.

/// Flat withholding rate in parts per thousand (3.3%).
const FLAT_RATE_PER_MILLE: u64 = 33;

/// Income tax rate in percent.
const INCOME_TAX_PERCENT: u64 = 3;

/// Local tax as a share of income tax, in percent.
const LOCAL_TAX_SHARE_PERCENT: u64 = 10;

/// Rate label written on export rows.
pub const WITHHOLDING_RATE_LABEL: &str = "3.3";

/// Income classification written on export rows.
pub const CLASSIFICATION_LABEL: &str = "사업소득";

/// Nationality label written on export rows.
pub const NATIONALITY_LABEL: &str = "내국인";

/// Result of the flat withholding computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Withholding {
    /// The gross amount.
    pub gross: u64,
    /// Withheld tax.
    pub tax: u64,
    /// Gross minus tax.
    pub net: u64,
}

/// Income tax and local tax as reported to the tax preparer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WithholdingBreakdown {
    /// National income tax (3% of gross, floored).
    pub income_tax: u64,
    /// Local income tax (10% of income tax, floored).
    pub local_tax: u64,
}

/// Computes `floor(amount * numerator / denominator)` without overflow.
const fn floor_ratio(amount: u64, numerator: u64, denominator: u64) -> u64 {
    (amount / denominator) * numerator + (amount % denominator) * numerator / denominator
}

/// Applies the flat 3.3% withholding rate.
#[must_use]
pub const fn compute_withholding(gross: u64) -> Withholding {
    let tax: u64 = floor_ratio(gross, FLAT_RATE_PER_MILLE, 1000);
    Withholding {
        gross,
        tax,
        net: gross - tax,
    }
}

/// Splits withholding into income tax and local tax for export.
#[must_use]
pub const fn decompose_withholding(gross: u64) -> WithholdingBreakdown {
    let income_tax: u64 = floor_ratio(gross, INCOME_TAX_PERCENT, 100);
    WithholdingBreakdown {
        income_tax,
        local_tax: floor_ratio(income_tax, LOCAL_TAX_SHARE_PERCENT, 100),
    }
}
