//! Client-specific verification integration tests
//!
//! The Microsoft caller runs against a wiremock server standing in for both
//! the token authority and the eligibility API. Credentials are the test
//! key pair under `tests/fixtures`.

mod common;

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::json;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{date, member, FakeMemberStore};
use e9y_server::client_specific::microsoft::{ClientCredential, MicrosoftProtocol, MicrosoftResponse, TokenProvider};
use e9y_server::client_specific::{
    CallError, ClientSpecificCaller, ClientSpecificMode, ClientSpecificRequest, ClientSpecificService,
    ClientSpecificServiceError, ClientVerifier, VerifyError,
};
use e9y_server::config::EligibilityConfig;
use e9y_server::models::{ClientSpecificImplementation, Version};

const KEY: &str = include_str!("fixtures/msft_private_key.pem");
const CERT: &str = include_str!("fixtures/msft_certificate.pem");

const TOKEN_PATH: &str = "/tenant/oauth2/v2.0/token";
const CHECK_PATH: &str = "/check";

fn request() -> ClientSpecificRequest {
    ClientSpecificRequest {
        is_employee: true,
        unique_corp_id: "E-1".into(),
        date_of_birth: date(1990, 1, 1),
        dependent_date_of_birth: None,
    }
}

fn caller(server: &MockServer, verify_timeout: Duration) -> ClientSpecificCaller<MicrosoftProtocol> {
    let credential = ClientCredential::from_pem(KEY.to_string(), CERT).unwrap();
    let tokens = TokenProvider::new(&format!("{}/tenant", server.uri()), "client", "scope", credential);
    ClientSpecificCaller::new(
        MicrosoftProtocol::new(tokens),
        &format!("{}{}", server.uri(), CHECK_PATH),
        Duration::from_secs(5),
        verify_timeout,
    )
    .unwrap()
}

async fn mount_token(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_assertion="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "test-token",
            "token_type": "Bearer",
            "expires_in": 3599
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

async fn mount_check(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(CHECK_PATH))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(response)
        .mount(server)
        .await;
}

// ============================================================================
// Caller
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_eligible_response_is_returned_unchanged() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    Mock::given(method("POST"))
        .and(path(CHECK_PATH))
        .and(body_partial_json(json!({
            "EmployeeId": "E-1",
            "IsEmployee": true,
            "DateOfBirth": "1990-01-01",
            "DependentDateOfBirth": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "insuranceType": "PPO",
            "state": "WA",
            "country": "US"
        })))
        .mount(&server)
        .await;

    let response = caller(&server, Duration::from_secs(5)).verify(&request()).await.unwrap();

    assert_eq!(
        response,
        Some(MicrosoftResponse {
            insurance_type: Some("PPO".into()),
            state: Some("WA".into()),
            country: Some("US".into()),
        })
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_waived_coverage_is_not_eligible() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    mount_check(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"insuranceType": "Waive Medical"})),
    )
    .await;

    let response = caller(&server, Duration::from_secs(5)).verify(&request()).await.unwrap();
    assert_eq!(response, None);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_null_insurance_type_is_not_eligible() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    mount_check(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"insuranceType": null})),
    )
    .await;

    let response = caller(&server, Duration::from_secs(5)).verify(&request()).await.unwrap();
    assert_eq!(response, None);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_error_statuses_are_no_match() {
    for status in [404, 500] {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;
        mount_check(&server, ResponseTemplate::new(status)).await;

        let response = caller(&server, Duration::from_secs(5)).verify(&request()).await.unwrap();
        assert_eq!(response, None, "status {status}");
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_malformed_responses_are_no_match() {
    let bodies = [
        ResponseTemplate::new(200).set_body_string("<html>down</html>"),
        ResponseTemplate::new(200).set_body_raw("not json", "application/json"),
        ResponseTemplate::new(200).set_body_json(json!({"insuranceType": "PPO", "plan": "gold"})),
        ResponseTemplate::new(200).set_body_json(json!({"state": "WA"})),
    ];

    for body in bodies {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;
        mount_check(&server, body).await;

        let response = caller(&server, Duration::from_secs(5)).verify(&request()).await.unwrap();
        assert_eq!(response, None);
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_json_body_with_text_content_type_is_accepted() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    mount_check(
        &server,
        ResponseTemplate::new(200).set_body_raw(r#"{"insuranceType": "HMO"}"#, "text/plain; charset=utf-8"),
    )
    .await;

    let response = caller(&server, Duration::from_secs(5)).verify(&request()).await.unwrap();
    assert_eq!(response.unwrap().insurance_type.as_deref(), Some("HMO"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_token_is_cached_across_verifications() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    mount_check(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"insuranceType": "PPO"})),
    )
    .await;

    let caller = caller(&server, Duration::from_secs(5));
    assert!(caller.verify(&request()).await.unwrap().is_some());
    assert!(caller.verify(&request()).await.unwrap().is_some());

    server.verify().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_access_token_is_no_match() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_client",
            "error_description": "bad assertion"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(CHECK_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"insuranceType": "PPO"})))
        .expect(0)
        .mount(&server)
        .await;

    let response = caller(&server, Duration::from_secs(5)).verify(&request()).await.unwrap();
    assert_eq!(response, None);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_slow_partner_times_out() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    mount_check(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({"insuranceType": "PPO"}))
            .set_delay(Duration::from_secs(2)),
    )
    .await;

    let err = caller(&server, Duration::from_millis(300))
        .verify(&request())
        .await
        .unwrap_err();
    assert!(matches!(err, VerifyError::Timeout(timeout) if timeout == Duration::from_millis(300)));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_slow_authority_is_bounded_by_exchange_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": "test-token", "expires_in": 3599}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    let credential = ClientCredential::from_pem(KEY.to_string(), CERT).unwrap();
    let tokens = TokenProvider::new(&format!("{}/tenant", server.uri()), "client", "scope", credential)
        .with_exchange_timeout(Duration::from_millis(300));

    let started = Instant::now();
    let err = tokens.get_token().await.unwrap_err();

    assert!(started.elapsed() < Duration::from_secs(2), "{:?}", started.elapsed());
    assert!(matches!(&err, CallError::Transport(source) if source.is_timeout()), "{err}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_verifier_returns_response_map() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    mount_check(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"insuranceType": "PPO", "country": "US"})),
    )
    .await;

    let verifier: Arc<dyn ClientVerifier> = Arc::new(caller(&server, Duration::from_secs(5)));
    let response = verifier.verify_member(&request()).await.unwrap().unwrap();

    assert_eq!(response.get("insuranceType"), Some(&json!("PPO")));
    assert_eq!(response.get("country"), Some(&json!("US")));
    assert!(!response.contains_key("state"));
}

// ============================================================================
// Service
// ============================================================================

fn service(store: FakeMemberStore, mode: ClientSpecificMode, server: &MockServer) -> ClientSpecificService {
    ClientSpecificService::new(Arc::new(store), EligibilityConfig::default()).with_implementation(
        ClientSpecificImplementation::Microsoft,
        mode,
        Arc::new(caller(server, Duration::from_secs(5))),
    )
}

#[tokio::test(flavor = "multi_thread")]
async fn test_service_client_check_synthesizes_member() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    mount_check(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"insuranceType": "PPO", "country": "US"})),
    )
    .await;
    let service = service(FakeMemberStore::new(), ClientSpecificMode::OnlyClientCheck, &server);

    let member = service
        .perform_client_specific_verification(
            true,
            date(1990, 1, 1),
            42,
            "E-1",
            ClientSpecificImplementation::Microsoft,
            None,
        )
        .await
        .unwrap();

    assert_eq!(member.organization_id, 42);
    assert_eq!(member.unique_corp_id, "E-1");
    assert_eq!(member.date_of_birth, date(1990, 1, 1));
    assert_eq!(member.record.get("insuranceType"), Some(&json!("PPO")));
    assert_eq!(member.record.get("is_employee"), Some(&json!(true)));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_service_client_check_no_match() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    mount_check(&server, ResponseTemplate::new(404)).await;
    let service = service(FakeMemberStore::new(), ClientSpecificMode::OnlyClientCheck, &server);

    let err = service
        .perform_client_specific_verification(
            true,
            date(1990, 1, 1),
            42,
            "E-1",
            ClientSpecificImplementation::Microsoft,
            None,
        )
        .await
        .unwrap_err();

    assert!(err.is_match_error());
    assert_eq!(err.to_string(), "Could not find a member with provided credentials.");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_service_timeout_is_upstream_error() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    mount_check(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({"insuranceType": "PPO"}))
            .set_delay(Duration::from_secs(2)),
    )
    .await;
    let service = ClientSpecificService::new(Arc::new(FakeMemberStore::new()), EligibilityConfig::default())
        .with_implementation(
            ClientSpecificImplementation::Microsoft,
            ClientSpecificMode::OnlyClientCheck,
            Arc::new(caller(&server, Duration::from_millis(300))),
        );

    let err = service
        .perform_client_specific_verification(
            true,
            date(1990, 1, 1),
            42,
            "E-1",
            ClientSpecificImplementation::Microsoft,
            None,
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClientSpecificServiceError::Upstream {
            source: VerifyError::Timeout(_),
            ..
        }
    ));
    assert!(err.to_string().contains("[MICROSOFT]"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_service_falls_back_to_census() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    mount_check(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"insuranceType": "Waive Medical"})),
    )
    .await;
    let store = FakeMemberStore::new().with_client_specific_member(Version::V1, member(9, 42));
    let service = service(store, ClientSpecificMode::FallbackToCensus, &server);

    let found = service
        .perform_client_specific_verification(
            true,
            date(1990, 1, 1),
            42,
            "E-1",
            ClientSpecificImplementation::Microsoft,
            None,
        )
        .await
        .unwrap();
    assert_eq!(found.id, 9);

    let missing = service
        .perform_client_specific_verification(
            true,
            date(1990, 1, 1),
            43,
            "E-1",
            ClientSpecificImplementation::Microsoft,
            None,
        )
        .await
        .unwrap_err();
    assert!(missing.is_match_error());
}
