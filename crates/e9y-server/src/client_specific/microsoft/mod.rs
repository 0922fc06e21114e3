//! Microsoft employee eligibility API.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use secrecy::ExposeSecret;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::info;

use crate::client_specific::caller::{ClientSpecificCaller, ClientSpecificProtocol};
use crate::client_specific::error::{CallError, ClientSpecificError};
use crate::client_specific::ClientSpecificRequest;
use crate::config::MicrosoftSettings;

pub mod auth;

pub use auth::{ClientCredential, CredentialError, TokenProvider};

/// Insurance types that do not confirm eligibility.
const INELIGIBLE_INSURANCE_TYPES: &[&str] = &["Waive Medical"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MicrosoftRequestPayload {
    pub employee_id: String,
    pub is_employee: bool,
    pub date_of_birth: NaiveDate,
    pub dependent_date_of_birth: Option<NaiveDate>,
}

/// `insuranceType` must be present but may be null; unknown fields are
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MicrosoftResponse {
    #[serde(rename = "insuranceType", deserialize_with = "required_nullable")]
    pub insurance_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

fn required_nullable<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}

impl MicrosoftResponse {
    pub fn is_eligible(&self) -> bool {
        self.insurance_type
            .as_deref()
            .is_some_and(|insurance| !INELIGIBLE_INSURANCE_TYPES.contains(&insurance))
    }
}

pub struct MicrosoftProtocol {
    tokens: TokenProvider,
}

impl MicrosoftProtocol {
    pub fn new(tokens: TokenProvider) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &TokenProvider {
        &self.tokens
    }
}

#[async_trait]
impl ClientSpecificProtocol for MicrosoftProtocol {
    type Payload = MicrosoftRequestPayload;
    type Response = MicrosoftResponse;

    fn payload(&self, request: &ClientSpecificRequest) -> MicrosoftRequestPayload {
        MicrosoftRequestPayload {
            employee_id: request.unique_corp_id.clone(),
            is_employee: request.is_employee,
            date_of_birth: request.date_of_birth,
            dependent_date_of_birth: request.dependent_date_of_birth,
        }
    }

    async fn headers(&self) -> Result<HeaderMap, CallError> {
        let token = self.tokens.get_token().await?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|_| ClientSpecificError::auth("Authority returned a token that is not a valid header value."))?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    fn is_eligible(&self, response: &MicrosoftResponse) -> bool {
        response.is_eligible()
    }
}

/// Build the Microsoft caller from settings, loading credentials from the
/// configured paths (or `MSFT_PRIVATE_KEY_PATH` / `MSFT_CERTIFICATE_PATH`).
pub fn caller(settings: &MicrosoftSettings) -> anyhow::Result<ClientSpecificCaller<MicrosoftProtocol>> {
    let private_key_path = auth::resolve_path(settings.private_key_path.as_deref(), auth::PRIVATE_KEY_PATH_ENV);
    let certificate_path = auth::resolve_path(settings.certificate_path.as_deref(), auth::CERTIFICATE_PATH_ENV);
    let credential = ClientCredential::load(&private_key_path, &certificate_path)?;
    info!(thumbprint = credential.thumbprint(), "Loaded Microsoft client credential");

    let verify_timeout = Duration::from_secs(settings.verify_timeout_secs);
    let tokens = TokenProvider::new(&settings.authority, &settings.client_id, &settings.scope, credential)
        .with_exchange_timeout(verify_timeout);
    ClientSpecificCaller::new(
        MicrosoftProtocol::new(tokens),
        &settings.url,
        Duration::from_secs(settings.call_timeout_secs),
        verify_timeout,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_wire_format() {
        let payload = MicrosoftRequestPayload {
            employee_id: "E-1".into(),
            is_employee: false,
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 2).unwrap(),
            dependent_date_of_birth: None,
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "EmployeeId": "E-1",
                "IsEmployee": false,
                "DateOfBirth": "1990-01-02",
                "DependentDateOfBirth": null,
            })
        );
    }

    #[test]
    fn test_response_schema() {
        let full: MicrosoftResponse =
            serde_json::from_value(json!({"insuranceType": "PPO", "state": "NY", "country": "USA"})).unwrap();
        assert_eq!(full.insurance_type.as_deref(), Some("PPO"));

        let null: MicrosoftResponse = serde_json::from_value(json!({"insuranceType": null})).unwrap();
        assert_eq!(null.insurance_type, None);

        assert!(serde_json::from_value::<MicrosoftResponse>(json!({"state": "NY"})).is_err());
        assert!(serde_json::from_value::<MicrosoftResponse>(json!({"insuranceType": "PPO", "plan": "gold"})).is_err());
        assert!(serde_json::from_value::<MicrosoftResponse>(json!(["PPO"])).is_err());
    }

    #[test]
    fn test_eligibility_predicate() {
        let response = |insurance: Option<&str>| MicrosoftResponse {
            insurance_type: insurance.map(str::to_string),
            state: None,
            country: None,
        };
        assert!(response(Some("PPO")).is_eligible());
        assert!(!response(Some("Waive Medical")).is_eligible());
        assert!(!response(None).is_eligible());
    }

    #[test]
    fn test_response_serializes_only_received_fields() {
        let response: MicrosoftResponse = serde_json::from_value(json!({"insuranceType": "PPO"})).unwrap();
        assert_eq!(serde_json::to_value(&response).unwrap(), json!({"insuranceType": "PPO"}));
    }

    #[test]
    fn test_caller_requires_credentials() {
        let settings = MicrosoftSettings {
            private_key_path: Some("/nonexistent/key.pem".into()),
            certificate_path: Some("/nonexistent/cert.pem".into()),
            ..MicrosoftSettings::default()
        };
        let err = caller(&settings).err().unwrap();
        assert!(err.to_string().contains("/nonexistent/key.pem"));
    }
}
