// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod args;
mod commands;
mod output;

#[cfg(test)]
mod tests;

use clap::Parser;
use dh_payroll_api::{LedgerStore, RetryPolicy, StoreConfig};
use dh_payroll_audit::Actor;
use dh_payroll_domain::LedgerYear;
use dh_payroll_persistence::Persistence;
use std::error::Error;
use std::process::ExitCode;
use time::OffsetDateTime;
use tracing::{error, info, warn};

use crate::args::Args;
use crate::commands::{Invocation, execute};

/// Builds the store configuration from command-line arguments.
fn store_config(args: &Args) -> StoreConfig {
    StoreConfig {
        ledger_key: args.ledger_key.clone(),
        retry: RetryPolicy::new(args.max_attempts, RetryPolicy::default().initial_backoff),
        ..StoreConfig::default()
    }
}

/// Resolves the working year, defaulting to the current one.
fn working_year(args: &Args, now: OffsetDateTime) -> Result<LedgerYear, Box<dyn Error>> {
    let year: u16 = match args.year {
        Some(year) => year,
        None => u16::try_from(now.year())?,
    };
    Ok(LedgerYear::new(year)?)
}

/// Returns the current time at the local UTC offset, or in UTC when the
/// offset cannot be determined.
fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|err| {
        warn!(error = %err, "Local UTC offset unavailable, using UTC");
        OffsetDateTime::now_utc()
    })
}

fn run(args: &Args) -> Result<String, Box<dyn Error>> {
    let now: OffsetDateTime = local_now();
    let year: LedgerYear = working_year(args, now)?;

    info!(path = %args.database.display(), "Using ledger database file");
    let persistence: Persistence = Persistence::new_with_file(&args.database)?;

    let mut store: LedgerStore<Persistence> =
        LedgerStore::open(persistence, store_config(args), year)?;
    let invocation: Invocation = Invocation {
        year,
        now,
        actor: Actor::operator(&args.operator),
        json: args.json,
    };

    execute(&mut store, &args.command, &invocation)
}

fn main() -> ExitCode {
    let args: Args = Args::parse();

    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(command = args.command.name(), error = %err, "Command failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
