// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::args::LedgerCommand;
use crate::commands::execute;
use crate::tests::helpers::{create_test_store, invocation, register, run_text};
use dh_payroll_api::{ApiError, LedgerStore};
use dh_payroll_persistence::Persistence;
use std::path::PathBuf;

#[test]
fn test_register_and_pay_prints_withholding() {
    let mut store: LedgerStore<Persistence> = create_test_store();
    let coach_id: String = register(&mut store, "Kim");

    let text: String = run_text(
        &mut store,
        LedgerCommand::SetAmount {
            month: 1,
            coach_id,
            amount: String::from("1,000,000"),
        },
    );

    assert!(text.contains("Stored 1000000"));
    assert!(text.contains("tax 33000, net 967000"));
}

#[test]
fn test_register_identity_warning_is_an_error() {
    let mut store: LedgerStore<Persistence> = create_test_store();

    let result = execute(
        &mut store,
        &LedgerCommand::Register {
            name: String::from("Kim"),
            national_id: String::from("900101-1234567"),
            force: false,
        },
        &invocation(false),
    );

    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ApiError>(),
        Some(ApiError::IdentityWarning { .. })
    ));
    assert!(store.coaches().is_empty());
}

#[test]
fn test_month_defaults_to_previous_month() {
    let mut store: LedgerStore<Persistence> = create_test_store();
    register(&mut store, "Kim");

    let text: String = run_text(
        &mut store,
        LedgerCommand::Month {
            month: None,
            candidates: false,
        },
    );

    assert!(text.starts_with("2025-02"));
    assert!(text.contains("Kim"));
}

#[test]
fn test_month_lists_candidates() {
    let mut store: LedgerStore<Persistence> = create_test_store();
    let kim: String = register(&mut store, "Kim");
    run_text(
        &mut store,
        LedgerCommand::RosterRemove {
            month: 6,
            coach_id: kim,
        },
    );

    let text: String = run_text(
        &mut store,
        LedgerCommand::Month {
            month: Some(6),
            candidates: true,
        },
    );

    assert!(text.contains("Not on the roster:"));
    assert!(text.contains("Kim"));
}

#[test]
fn test_month_json_with_candidates_is_one_document() {
    let mut store: LedgerStore<Persistence> = create_test_store();
    let kim: String = register(&mut store, "Kim");
    register(&mut store, "Lee");
    run_text(
        &mut store,
        LedgerCommand::RosterRemove {
            month: 6,
            coach_id: kim.clone(),
        },
    );

    let text: String = execute(
        &mut store,
        &LedgerCommand::Month {
            month: Some(6),
            candidates: true,
        },
        &invocation(true),
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["period"], "2025-06");
    assert_eq!(value["lines"].as_array().unwrap().len(), 1);
    assert_eq!(value["candidates"][0]["coach_id"], kim.as_str());
    assert_eq!(value["candidates"].as_array().unwrap().len(), 1);
}

#[test]
fn test_month_json_without_candidates_omits_them() {
    let mut store: LedgerStore<Persistence> = create_test_store();
    register(&mut store, "Kim");

    let text: String = execute(
        &mut store,
        &LedgerCommand::Month {
            month: Some(1),
            candidates: false,
        },
        &invocation(true),
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert!(value.get("candidates").is_none());
    assert_eq!(value["totals"]["gross"], 0);
}

#[test]
fn test_clearing_identity_number_prints_no_warning() {
    let mut store: LedgerStore<Persistence> = create_test_store();
    let kim: String = register(&mut store, "Kim");

    let cleared: String = run_text(
        &mut store,
        LedgerCommand::SetIdentity {
            coach_id: kim.clone(),
            national_id: String::new(),
        },
    );
    let bad: String = run_text(
        &mut store,
        LedgerCommand::SetIdentity {
            coach_id: kim,
            national_id: String::from("12a"),
        },
    );

    assert!(!cleared.contains("Warning"));
    assert!(bad.contains("Warning: identity number"));
}

#[test]
fn test_year_json_output() {
    let mut store: LedgerStore<Persistence> = create_test_store();
    let kim: String = register(&mut store, "Kim");
    run_text(
        &mut store,
        LedgerCommand::SetAmount {
            month: 12,
            coach_id: kim,
            amount: String::from("2000000"),
        },
    );

    let text: String = execute(&mut store, &LedgerCommand::Year, &invocation(true)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["year"], 2025);
    assert_eq!(value["totals"]["gross"], 2_000_000);
    assert_eq!(value["totals"]["tax"], 66_000);
    assert_eq!(value["months"][11]["period"], "2025-12");
}

#[test]
fn test_validate_id() {
    let mut store: LedgerStore<Persistence> = create_test_store();

    let valid: String = run_text(
        &mut store,
        LedgerCommand::ValidateId {
            national_id: String::from("900101-1234568"),
        },
    );
    let invalid: String = run_text(
        &mut store,
        LedgerCommand::ValidateId {
            national_id: String::from("12a"),
        },
    );

    assert_eq!(valid, "900101-1234568: valid");
    assert_eq!(invalid, "12a: invalid, only digits are allowed");
}

#[test]
fn test_export_without_payments_is_informational() {
    let mut store: LedgerStore<Persistence> = create_test_store();
    register(&mut store, "Kim");

    let text: String = run_text(
        &mut store,
        LedgerCommand::Export {
            output_dir: String::from("."),
        },
    );

    assert_eq!(text, "No payments recorded in 2025, nothing to export");
}

#[test]
fn test_export_writes_file() {
    let mut store: LedgerStore<Persistence> = create_test_store();
    let kim: String = register(&mut store, "Kim");
    run_text(
        &mut store,
        LedgerCommand::SetAmount {
            month: 3,
            coach_id: kim,
            amount: String::from("1000000"),
        },
    );
    let dir: PathBuf = std::env::temp_dir().join(format!("dh-payroll-export-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let text: String = run_text(
        &mut store,
        LedgerCommand::Export {
            output_dir: dir.display().to_string(),
        },
    );

    let file: PathBuf = dir.join("2025년_급여자료_03월05일_14시07분.csv");
    let contents: String = std::fs::read_to_string(&file).unwrap();
    assert!(text.contains("Wrote 1 rows"));
    assert!(text.contains("2025년 급여신고 자료 제출"));
    assert!(contents.contains("2025-03,,Kim,,,,사업소득,,1000000,3.3,30000,3000,내국인,"));
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_history_lists_mutations() {
    let mut store: LedgerStore<Persistence> = create_test_store();
    let kim: String = register(&mut store, "Kim");
    run_text(&mut store, LedgerCommand::Delete { coach_id: kim });

    let text: String = run_text(&mut store, LedgerCommand::History { limit: 5 });
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("DeleteCoach by tester"));
    assert!(lines[1].contains("RegisterCoach by tester"));
}
