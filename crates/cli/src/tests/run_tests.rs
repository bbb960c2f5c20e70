// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::args::Args;
use crate::run;
use clap::Parser;
use std::path::{Path, PathBuf};

fn parse(database: &Path, command: &[&str]) -> Args {
    let mut argv: Vec<String> = vec![
        String::from("dh-payroll"),
        String::from("--database"),
        database.display().to_string(),
        String::from("--year"),
        String::from("2025"),
    ];
    argv.extend(command.iter().map(ToString::to_string));
    Args::try_parse_from(argv).unwrap()
}

fn remove_database(database: &Path) {
    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{suffix}", database.display()));
    }
}

#[test]
fn test_ledger_survives_between_invocations() {
    let database: PathBuf =
        std::env::temp_dir().join(format!("dh-payroll-run-{}.db", std::process::id()));
    remove_database(&database);

    let registered: String = run(&parse(&database, &["register", "Kim"])).unwrap();
    let listing: String = run(&parse(&database, &["--json", "coaches"])).unwrap();
    let coaches: serde_json::Value = serde_json::from_str(&listing).unwrap();
    let coach_id: &str = coaches[0]["coach_id"].as_str().unwrap();
    run(&parse(&database, &["set-amount", "3", coach_id, "1000000"])).unwrap();
    let year: String = run(&parse(&database, &["--json", "year"])).unwrap();
    let summary: serde_json::Value = serde_json::from_str(&year).unwrap();

    assert!(registered.contains("Kim"));
    assert_eq!(coaches.as_array().unwrap().len(), 1);
    assert_eq!(summary["totals"]["gross"], 1_000_000);
    remove_database(&database);
}
