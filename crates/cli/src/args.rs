// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::{Parser, Subcommand};
use dh_payroll_api::DEFAULT_LEDGER_KEY;
use std::path::PathBuf;

/// Database file used when `--database` is not given.
pub const DEFAULT_DATABASE_PATH: &str = "dh-payroll.db";

/// DH Payroll - monthly payroll ledger for gym coaches
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the `SQLite` database file, created on first use
    #[arg(short, long, default_value = DEFAULT_DATABASE_PATH)]
    pub database: PathBuf,

    /// Key the ledger is stored under
    #[arg(long, default_value = DEFAULT_LEDGER_KEY)]
    pub ledger_key: String,

    /// Working year. Defaults to the current year.
    #[arg(short, long)]
    pub year: Option<u16>,

    /// How many times a save is attempted before giving up
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=10))]
    pub max_attempts: u32,

    /// Operator recorded in the audit journal
    #[arg(long, default_value = "operator")]
    pub operator: String,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: LedgerCommand,
}

/// Ledger operations.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum LedgerCommand {
    /// Register a coach and put it on every roster of the working year
    Register {
        /// Display name
        name: String,
        /// Resident registration number, hyphens allowed
        #[arg(long, default_value = "")]
        national_id: String,
        /// Register even if the identity number fails the check
        #[arg(long)]
        force: bool,
    },
    /// Delete a coach with all payments and roster entries
    Delete {
        /// Coach identifier
        coach_id: String,
    },
    /// Replace a coach's identity number
    SetIdentity {
        /// Coach identifier
        coach_id: String,
        /// Resident registration number, hyphens allowed
        national_id: String,
    },
    /// Put a coach on a month's roster
    RosterAdd {
        /// Calendar month (1-12)
        #[arg(value_parser = clap::value_parser!(u8).range(1..=12))]
        month: u8,
        /// Coach identifier
        coach_id: String,
    },
    /// Take a coach off a month's roster, keeping the stored amount
    RosterRemove {
        /// Calendar month (1-12)
        #[arg(value_parser = clap::value_parser!(u8).range(1..=12))]
        month: u8,
        /// Coach identifier
        coach_id: String,
    },
    /// Store a coach's gross amount for a month
    SetAmount {
        /// Calendar month (1-12)
        #[arg(value_parser = clap::value_parser!(u8).range(1..=12))]
        month: u8,
        /// Coach identifier
        coach_id: String,
        /// Gross amount; separators and currency symbols are ignored
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Make the working year available, creating its payment table
    SelectYear,
    /// Check an identity number without storing it
    ValidateId {
        /// Resident registration number, hyphens allowed
        national_id: String,
    },
    /// Show a month's roster with withholding
    Month {
        /// Calendar month (1-12). Defaults to the previous month.
        #[arg(value_parser = clap::value_parser!(u8).range(1..=12))]
        month: Option<u8>,
        /// Also list coaches that could be added to the roster
        #[arg(long)]
        candidates: bool,
    },
    /// Show monthly and annual totals of the working year
    Year,
    /// List registered coaches and years with data
    Coaches,
    /// Write the working year's export file for the tax preparer
    Export {
        /// Directory the file is written to
        #[arg(short, long, default_value = ".")]
        output_dir: String,
    },
    /// Show the most recent journal entries
    History {
        /// Number of entries
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },
}

impl LedgerCommand {
    /// Name recorded as the audit cause.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Register { .. } => "register",
            Self::Delete { .. } => "delete",
            Self::SetIdentity { .. } => "set-identity",
            Self::RosterAdd { .. } => "roster-add",
            Self::RosterRemove { .. } => "roster-remove",
            Self::SetAmount { .. } => "set-amount",
            Self::SelectYear => "select-year",
            Self::ValidateId { .. } => "validate-id",
            Self::Month { .. } => "month",
            Self::Year => "year",
            Self::Coaches => "coaches",
            Self::Export { .. } => "export",
            Self::History { .. } => "history",
        }
    }
}
