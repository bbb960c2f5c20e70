// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    ScriptedBackend, create_test_actor, create_test_cause, key, open_store, register,
    register_request, year_2025,
};
use crate::{
    ApiError, ApiResult, CoachView, LedgerStore, MonthSummary, RegisterCoachRequest,
    RegisterCoachResponse, SetAmountResponse, YearSummary,
};
use dh_payroll_domain::{CoachId, LedgerYear, MAX_COACHES, MonthIndex, RosterKey};

#[test]
fn test_register_then_pay_scenario() {
    let mut store: LedgerStore<ScriptedBackend> = open_store(ScriptedBackend::new());

    let coach_id: CoachId = register(&mut store, "김철수");
    for month in MonthIndex::all() {
        let roster_key: RosterKey = RosterKey::new(year_2025(), month);
        assert_eq!(store.ledger().roster(&roster_key), &[coach_id.clone()]);
        assert_eq!(store.ledger().amount(&roster_key, &coach_id), 0);
    }

    let result: ApiResult<SetAmountResponse> = store
        .set_monthly_amount(
            key(0),
            &coach_id,
            "1,000,000",
            create_test_actor(),
            create_test_cause(),
        )
        .unwrap();
    assert_eq!(result.response.amount, 1_000_000);
    assert_eq!(result.response.period, "2025-01");

    let summary: MonthSummary = store.month_summary(&key(0));
    assert_eq!(summary.totals.gross, 1_000_000);
    assert_eq!(summary.totals.tax, 33_000);
    assert_eq!(summary.totals.net, 967_000);
    assert_eq!(summary.lines.len(), 1);
    assert_eq!(summary.lines[0].name, "김철수");
}

#[test]
fn test_register_generates_distinct_ids() {
    let mut store: LedgerStore<ScriptedBackend> = open_store(ScriptedBackend::new());

    let first: CoachId = register(&mut store, "Kim");
    let second: CoachId = register(&mut store, "Lee");

    assert_ne!(first, second);
    assert!(first.value().starts_with("c_"));
}

#[test]
fn test_register_rejects_blank_name() {
    let mut store: LedgerStore<ScriptedBackend> = open_store(ScriptedBackend::new());

    let result: Result<ApiResult<RegisterCoachResponse>, ApiError> = store.register_coach(
        &register_request("  ", "9001011234567"),
        create_test_actor(),
        create_test_cause(),
    );

    assert!(matches!(
        result,
        Err(ApiError::ValidationFailed { ref rule, .. }) if rule == "name_required"
    ));
}

#[test]
fn test_register_with_bad_checksum_needs_override() {
    let mut store: LedgerStore<ScriptedBackend> = open_store(ScriptedBackend::new());

    let result: Result<ApiResult<RegisterCoachResponse>, ApiError> = store.register_coach(
        &register_request("Kim", "900101-1234567"),
        create_test_actor(),
        create_test_cause(),
    );

    assert_eq!(
        result,
        Err(ApiError::IdentityWarning {
            national_id: String::from("9001011234567"),
            reason: String::from("check digit does not match"),
        })
    );
    assert!(store.ledger().coaches.is_empty());
}

#[test]
fn test_register_with_override_keeps_warning_in_response() {
    let mut store: LedgerStore<ScriptedBackend> = open_store(ScriptedBackend::new());
    let request: RegisterCoachRequest = RegisterCoachRequest {
        allow_invalid_identity: true,
        ..register_request("Kim", "123")
    };

    let result: ApiResult<RegisterCoachResponse> = store
        .register_coach(&request, create_test_actor(), create_test_cause())
        .unwrap();

    assert_eq!(
        result.response.overridden_identity_warning.as_deref(),
        Some("must be exactly 13 digits")
    );
    assert_eq!(result.response.national_id, "123");
    assert_eq!(store.coaches()[0].identity_problem.as_deref(), Some("must be exactly 13 digits"));
}

#[test]
fn test_register_rejects_duplicate_identity() {
    let mut store: LedgerStore<ScriptedBackend> = open_store(ScriptedBackend::new());
    store
        .register_coach(
            &register_request("Kim", "900101-1234568"),
            create_test_actor(),
            create_test_cause(),
        )
        .unwrap();

    let result: Result<ApiResult<RegisterCoachResponse>, ApiError> = store.register_coach(
        &register_request("Kim Again", "9001011234568"),
        create_test_actor(),
        create_test_cause(),
    );

    assert!(matches!(
        result,
        Err(ApiError::ValidationFailed { ref rule, .. }) if rule == "unique_national_id"
    ));
    assert_eq!(store.ledger().coaches.len(), 1);
}

#[test]
fn test_twenty_first_registration_fails() {
    let mut store: LedgerStore<ScriptedBackend> = open_store(ScriptedBackend::new());
    for i in 0..MAX_COACHES {
        register(&mut store, &format!("Coach {i}"));
    }

    let result: Result<ApiResult<RegisterCoachResponse>, ApiError> = store.register_coach(
        &register_request("Coach 21", ""),
        create_test_actor(),
        create_test_cause(),
    );

    assert!(matches!(
        result,
        Err(ApiError::ValidationFailed { ref rule, .. }) if rule == "coach_limit"
    ));
    assert_eq!(store.ledger().coaches.len(), MAX_COACHES);
}

#[test]
fn test_delete_unknown_coach_is_not_found() {
    let mut store: LedgerStore<ScriptedBackend> = open_store(ScriptedBackend::new());

    let result = store.delete_coach(
        &CoachId::new("c_missing"),
        create_test_actor(),
        create_test_cause(),
    );

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Coach"
    ));
}

#[test]
fn test_delete_coach_cascades() {
    let mut store: LedgerStore<ScriptedBackend> = open_store(ScriptedBackend::new());
    let coach_id: CoachId = register(&mut store, "Kim");
    store
        .set_monthly_amount(key(4), &coach_id, "500000", create_test_actor(), create_test_cause())
        .unwrap();

    store
        .delete_coach(&coach_id, create_test_actor(), create_test_cause())
        .unwrap();

    assert!(store.ledger().coaches.is_empty());
    assert!(store.ledger().rosters.values().all(Vec::is_empty));
    assert_eq!(store.year_summary(year_2025()).totals.gross, 0);
}

#[test]
fn test_negative_and_garbage_amounts_become_zero() {
    let mut store: LedgerStore<ScriptedBackend> = open_store(ScriptedBackend::new());
    let coach_id: CoachId = register(&mut store, "Kim");

    let negative: ApiResult<SetAmountResponse> = store
        .set_monthly_amount(key(1), &coach_id, "-5000", create_test_actor(), create_test_cause())
        .unwrap();
    let garbage: ApiResult<SetAmountResponse> = store
        .set_monthly_amount(key(2), &coach_id, "abc", create_test_actor(), create_test_cause())
        .unwrap();

    assert_eq!(negative.response.amount, 0);
    assert_eq!(garbage.response.amount, 0);
}

#[test]
fn test_amount_above_monthly_limit_is_rejected() {
    let mut store: LedgerStore<ScriptedBackend> = open_store(ScriptedBackend::new());
    let kim: CoachId = register(&mut store, "Kim");
    let lee: CoachId = register(&mut store, "Lee");
    store
        .set_monthly_amount(key(1), &kim, "1000000", create_test_actor(), create_test_cause())
        .unwrap();

    let result: Result<ApiResult<SetAmountResponse>, ApiError> = store.set_monthly_amount(
        key(1),
        &lee,
        "18446744073709551615",
        create_test_actor(),
        create_test_cause(),
    );

    assert!(matches!(
        result,
        Err(ApiError::ValidationFailed { ref rule, .. }) if rule == "amount_range"
    ));
    let summary: MonthSummary = store.month_summary(&key(1));
    assert_eq!(summary.totals.gross, 1_000_000);
    assert_eq!(summary.totals.net, summary.totals.gross - summary.totals.tax);
}

#[test]
fn test_set_amount_reports_withholding() {
    let mut store: LedgerStore<ScriptedBackend> = open_store(ScriptedBackend::new());
    let coach_id: CoachId = register(&mut store, "Kim");

    let result: ApiResult<SetAmountResponse> = store
        .set_monthly_amount(key(5), &coach_id, "₩2,500,000", create_test_actor(), create_test_cause())
        .unwrap();

    assert_eq!(result.response.amount, 2_500_000);
    assert_eq!(result.response.tax, 82_500);
    assert_eq!(result.response.net, 2_417_500);
}

#[test]
fn test_update_identity_skips_uniqueness_and_strips_hyphens() {
    let mut store: LedgerStore<ScriptedBackend> = open_store(ScriptedBackend::new());
    store
        .register_coach(
            &register_request("Kim", "9001011234568"),
            create_test_actor(),
            create_test_cause(),
        )
        .unwrap();
    let second: CoachId = register(&mut store, "Lee");

    store
        .update_identity(&second, "900101-1234568", create_test_actor(), create_test_cause())
        .unwrap();

    assert_eq!(store.ledger().coaches[1].national_id.value(), "9001011234568");
}

#[test]
fn test_roster_removal_excludes_amount_from_totals() {
    let mut store: LedgerStore<ScriptedBackend> = open_store(ScriptedBackend::new());
    let kim: CoachId = register(&mut store, "Kim");
    let lee: CoachId = register(&mut store, "Lee");
    store
        .set_monthly_amount(key(6), &kim, "1000000", create_test_actor(), create_test_cause())
        .unwrap();
    store
        .set_monthly_amount(key(6), &lee, "2000000", create_test_actor(), create_test_cause())
        .unwrap();

    store
        .remove_from_roster(key(6), &lee, create_test_actor(), create_test_cause())
        .unwrap();

    assert_eq!(store.month_summary(&key(6)).totals.gross, 1_000_000);
    let candidates: Vec<CoachView> = store.roster_candidates(&key(6));
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].name, "Lee");

    store
        .add_to_roster(key(6), &lee, create_test_actor(), create_test_cause())
        .unwrap();
    assert_eq!(store.month_summary(&key(6)).totals.gross, 3_000_000);
}

#[test]
fn test_year_summary_matches_month_sums() {
    let mut store: LedgerStore<ScriptedBackend> = open_store(ScriptedBackend::new());
    let kim: CoachId = register(&mut store, "Kim");
    for (month, amount) in [(0, "1000"), (3, "1099"), (11, "77777")] {
        store
            .set_monthly_amount(key(month), &kim, amount, create_test_actor(), create_test_cause())
            .unwrap();
    }

    let summary: YearSummary = store.year_summary(year_2025());

    let gross: u64 = summary.months.iter().map(|month| month.totals.gross).sum();
    let tax: u64 = summary.months.iter().map(|month| month.totals.tax).sum();
    assert_eq!(summary.months.len(), 12);
    assert_eq!(summary.totals.gross, gross);
    assert_eq!(summary.totals.tax, tax);
    assert_eq!(summary.totals.gross, 79_876);
}

#[test]
fn test_select_year_changes_enrollment_target() {
    let mut store: LedgerStore<ScriptedBackend> = open_store(ScriptedBackend::new());
    let next_year: LedgerYear = LedgerYear::new(2026).unwrap();

    store
        .select_year(next_year, create_test_actor(), create_test_cause())
        .unwrap();
    let coach_id: CoachId = register(&mut store, "Kim");

    assert_eq!(store.selected_year(), next_year);
    assert_eq!(store.available_years(), vec![year_2025(), next_year]);
    assert!(store.ledger().roster(&key(0)).is_empty());
    assert_eq!(
        store
            .ledger()
            .roster(&RosterKey::new(next_year, MonthIndex::FIRST)),
        &[coach_id]
    );
}
