//! Query dispatch and eligibility executor integration tests
//!
//! Runs the registered query lists against an in-memory member store.

mod common;

use std::sync::Arc;

use proptest::prelude::*;
use serde_json::{json, Value};

use common::{member, params, Canned, FakeDirectory, FakeMemberStore};
use e9y_server::config::EligibilityConfig;
use e9y_server::models::Version;
use e9y_server::query::{
    EligibilityMethod, EligibilityQueryExecutor, MemberQuery, MemberResult, QueryDefinition, QueryDispatcher,
    QueryError, QueryParams,
};

fn employer_params() -> QueryParams {
    params(&[("date_of_birth", json!("1990-01-01")), ("email", json!("a@b.c"))])
}

fn health_plan_params() -> QueryParams {
    params(&[
        ("first_name", json!("Ada")),
        ("last_name", json!("Lovelace")),
        ("unique_corp_id", json!("E-1")),
    ])
}

// ============================================================================
// Dispatcher
// ============================================================================

#[tokio::test]
async fn test_employer_dob_and_email_runs_single_query() {
    let store = Arc::new(FakeMemberStore::new().answer(
        Version::V1,
        "get_by_dob_and_email",
        Canned::Found(MemberResult::Many(vec![member(1, 10)])),
    ));
    let dispatcher = QueryDispatcher::new(store.clone());

    let result = dispatcher
        .dispatch(EligibilityMethod::Employer, Version::V1, &employer_params())
        .await
        .unwrap();

    assert!(result.is_success());
    assert_eq!(result.query_name, "get_by_dob_and_email");
    assert_eq!(result.query_type, "by_dob_and_email");
    assert_eq!(result.result, Some(MemberResult::Many(vec![member(1, 10)])));
    assert_eq!(store.called_methods(Version::V1), vec!["get_by_dob_and_email"]);

    let (_, query) = &store.calls()[0];
    match query {
        MemberQuery::ByDobAndEmail { date_of_birth, email } => {
            assert_eq!(date_of_birth.to_string(), "1990-01-01");
            assert_eq!(email, "a@b.c");
        },
        other => panic!("unexpected query {other:?}"),
    }
}

#[tokio::test]
async fn test_no_executable_query_is_validation_error() {
    let store = Arc::new(FakeMemberStore::new());
    let dispatcher = QueryDispatcher::new(store.clone());

    let err = dispatcher
        .dispatch(
            EligibilityMethod::Basic,
            Version::V1,
            &params(&[("email", json!("a@b.c")), ("first_name", json!("   "))]),
        )
        .await
        .unwrap_err();

    match err {
        QueryError::Validation { missing, message } => {
            let missing_basic = &missing["get_all_by_name_and_date_of_birth"];
            assert!(missing_basic.contains("date_of_birth"));
            assert!(missing_basic.contains("first_name"));
            assert!(missing_basic.contains("last_name"));
            assert!(message.contains("get_all_by_name_and_date_of_birth"));
        },
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn test_storage_error_moves_to_next_query() {
    let store = Arc::new(
        FakeMemberStore::new()
            .answer(
                Version::V1,
                "get_by_dob_and_email",
                Canned::Unavailable("connection reset".into()),
            )
            .answer(
                Version::V1,
                "get_by_email_and_name",
                Canned::Found(MemberResult::Many(vec![member(4, 10)])),
            ),
    );
    let dispatcher = QueryDispatcher::new(store.clone());
    let mut query_params = employer_params();
    query_params.insert("first_name".into(), json!("Ada"));
    query_params.insert("last_name".into(), json!("Lovelace"));

    let result = dispatcher
        .dispatch(EligibilityMethod::Employer, Version::V1, &query_params)
        .await
        .unwrap();

    assert_eq!(result.query_name, "get_by_email_and_name");
    assert_eq!(result.first_result().map(|m| m.id), Some(4));
    assert_eq!(
        store.called_methods(Version::V1),
        vec!["get_by_dob_and_email", "get_by_email_and_name"]
    );
}

#[tokio::test]
async fn test_all_failures_return_last_attempt() {
    let store = Arc::new(FakeMemberStore::new().answer(
        Version::V1,
        "get_by_dob_and_email",
        Canned::Unavailable("timeout".into()),
    ));
    let dispatcher = QueryDispatcher::new(store.clone());

    let result = dispatcher
        .dispatch(EligibilityMethod::Employer, Version::V1, &employer_params())
        .await
        .unwrap();

    assert!(!result.is_success());
    assert_eq!(result.query_name, "get_by_dob_and_email");
    assert!(result.error.as_deref().unwrap().contains("timeout"));
    assert!(result.failure_reason().starts_with("Error: "));
}

#[tokio::test]
async fn test_v2_dispatch_uses_v2_store() {
    let store = Arc::new(FakeMemberStore::new().answer(
        Version::V2,
        "get_by_name_and_unique_corp_id",
        Canned::Found(MemberResult::One(member(2, 10))),
    ));
    let dispatcher = QueryDispatcher::new(store.clone());

    let result = dispatcher
        .dispatch(EligibilityMethod::HealthPlan, Version::V2, &health_plan_params())
        .await
        .unwrap();

    assert_eq!(result.query_name, "get_by_name_and_unique_corp_id_v2");
    assert_eq!(result.query_type, "by_name_and_unique_corp_id");
    assert!(store.called_methods(Version::V1).is_empty());
}

// ============================================================================
// Executor
// ============================================================================

fn executor(store: Arc<FakeMemberStore>, active: &[i64], v2_enabled: &[i64]) -> EligibilityQueryExecutor {
    let config = EligibilityConfig {
        v2_enabled_orgs: v2_enabled.iter().copied().collect(),
        ..EligibilityConfig::default()
    };
    EligibilityQueryExecutor::new(store, Arc::new(FakeDirectory::active(active)), config)
}

#[tokio::test]
async fn test_executor_v1_only_for_non_v2_org() {
    let store = Arc::new(
        FakeMemberStore::new()
            .answer(
                Version::V1,
                "get_by_name_and_unique_corp_id",
                Canned::Found(MemberResult::One(member(1, 10))),
            )
            .answer(
                Version::V2,
                "get_by_name_and_unique_corp_id",
                Canned::Found(MemberResult::One(member(2, 10))),
            ),
    );
    let executor = executor(store.clone(), &[10], &[]);

    let result = executor
        .perform_eligibility_check(EligibilityMethod::HealthPlan, &health_plan_params())
        .await
        .unwrap();

    assert_eq!(result.version, Version::V1);
    assert_eq!(result.v1_id, 1);
    assert_eq!(result.first_record().map(|m| m.id), Some(1));
    assert!(store.called_methods(Version::V2).is_empty());
}

#[tokio::test]
async fn test_executor_uses_v2_on_identity_match() {
    let store = Arc::new(
        FakeMemberStore::new()
            .answer(
                Version::V1,
                "get_by_name_and_unique_corp_id",
                Canned::Found(MemberResult::One(member(1, 10))),
            )
            .answer(
                Version::V2,
                "get_by_name_and_unique_corp_id",
                Canned::Found(MemberResult::One(member(2, 10))),
            ),
    );
    let executor = executor(store, &[10], &[10]);

    let result = executor
        .perform_eligibility_check(EligibilityMethod::HealthPlan, &health_plan_params())
        .await
        .unwrap();

    assert_eq!(result.version, Version::V2);
    assert_eq!(result.v1_id, 1);
    assert_eq!(result.first_record().map(|m| m.id), Some(2));
}

#[tokio::test]
async fn test_executor_falls_back_to_v1_on_identity_mismatch() {
    let mut other = member(2, 10);
    other.first_name = "Grace".into();
    let store = Arc::new(
        FakeMemberStore::new()
            .answer(
                Version::V1,
                "get_by_name_and_unique_corp_id",
                Canned::Found(MemberResult::One(member(1, 10))),
            )
            .answer(
                Version::V2,
                "get_by_name_and_unique_corp_id",
                Canned::Found(MemberResult::One(other)),
            ),
    );
    let executor = executor(store, &[10], &[10]);

    let result = executor
        .perform_eligibility_check(EligibilityMethod::HealthPlan, &health_plan_params())
        .await
        .unwrap();

    assert_eq!(result.version, Version::V1);
    assert_eq!(result.first_record().map(|m| m.id), Some(1));
}

#[tokio::test]
async fn test_executor_overeligibility_skips_v2() {
    let store = Arc::new(FakeMemberStore::new().answer(
        Version::V1,
        "get_by_dob_and_email",
        Canned::Found(MemberResult::Many(vec![member(1, 10), member(3, 11)])),
    ));
    let executor = executor(store.clone(), &[10, 11], &[10]);

    let result = executor
        .perform_eligibility_check(EligibilityMethod::Employer, &employer_params())
        .await
        .unwrap();

    assert_eq!(result.version, Version::V1);
    assert_eq!(result.records.len(), 2);
    assert!(store.called_methods(Version::V2).is_empty());
}

#[tokio::test]
async fn test_executor_drops_inactive_organizations() {
    let store = Arc::new(FakeMemberStore::new().answer(
        Version::V1,
        "get_by_dob_and_email",
        Canned::Found(MemberResult::Many(vec![member(1, 10), member(3, 11)])),
    ));

    let partial = executor(store.clone(), &[11], &[]);
    let result = partial
        .perform_eligibility_check(EligibilityMethod::Employer, &employer_params())
        .await
        .unwrap();
    assert_eq!(result.records.members().map(|m| m.id).collect::<Vec<_>>(), vec![3]);

    let none_active = executor(store, &[], &[]);
    let err = none_active
        .perform_eligibility_check(EligibilityMethod::Employer, &employer_params())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        QueryError::InactiveOrganization {
            method: EligibilityMethod::Employer
        }
    );
}

#[tokio::test]
async fn test_executor_no_results_is_member_search_error() {
    let executor = executor(Arc::new(FakeMemberStore::new()), &[10], &[]);

    let err = executor
        .perform_eligibility_check(EligibilityMethod::Employer, &employer_params())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        QueryError::MemberSearch {
            method: EligibilityMethod::Employer,
            ..
        }
    ));
}

// ============================================================================
// Properties
// ============================================================================

const KEY_POOL: &[&str] = &[
    "date_of_birth",
    "dependent_date_of_birth",
    "email",
    "first_name",
    "last_name",
    "unique_corp_id",
    "user_id",
    "work_state",
    "nickname",
];

proptest! {
    #[test]
    fn prop_filtered_params_stay_within_definition(
        keys in proptest::collection::btree_set(proptest::sample::select(KEY_POOL), 0..KEY_POOL.len()),
        value in "[a-z0-9@.]{1,12}",
    ) {
        let definition = QueryDefinition::new("get_by_dob_and_email").unwrap();
        let query_params: QueryParams = keys
            .iter()
            .map(|key| (key.to_string(), Value::String(value.clone())))
            .collect();

        let filtered = definition.filter_params(&query_params);
        for key in filtered.keys() {
            prop_assert!(
                definition.required_params().contains(key) || definition.optional_params().contains(key)
            );
        }
    }
}
