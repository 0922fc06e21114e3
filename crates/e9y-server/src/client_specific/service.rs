//! Entry point for client-specific verification.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::{Map, Value};
use tracing::{error, info, instrument};

use crate::client_specific::caller::ClientVerifier;
use crate::client_specific::error::ClientSpecificServiceError;
use crate::client_specific::{microsoft, ClientSpecificMode, ClientSpecificRequest};
use crate::config::{Config, EligibilityConfig};
use crate::models::{ClientSpecificImplementation, Member, Version};
use crate::query::MemberStore;

struct Registration {
    mode: ClientSpecificMode,
    verifier: Arc<dyn ClientVerifier>,
}

/// Verifies members of client-specific organizations by partner API,
/// census lookup, or both, depending on each implementation's mode.
pub struct ClientSpecificService {
    members: Arc<dyn MemberStore>,
    eligibility: EligibilityConfig,
    implementations: HashMap<ClientSpecificImplementation, Registration>,
}

impl ClientSpecificService {
    pub fn new(members: Arc<dyn MemberStore>, eligibility: EligibilityConfig) -> Self {
        Self {
            members,
            eligibility,
            implementations: HashMap::new(),
        }
    }

    /// Service with every implementation built from `config`.
    pub fn from_config(config: &Config, members: Arc<dyn MemberStore>) -> anyhow::Result<Self> {
        let microsoft = microsoft::caller(&config.microsoft)?;
        Ok(Self::new(members, config.eligibility.clone()).with_implementation(
            ClientSpecificImplementation::Microsoft,
            config.microsoft.mode,
            Arc::new(microsoft),
        ))
    }

    pub fn with_implementation(
        mut self,
        implementation: ClientSpecificImplementation,
        mode: ClientSpecificMode,
        verifier: Arc<dyn ClientVerifier>,
    ) -> Self {
        self.implementations
            .insert(implementation, Registration { mode, verifier });
        self
    }

    pub fn mode(&self, implementation: ClientSpecificImplementation) -> Option<ClientSpecificMode> {
        self.implementations
            .get(&implementation)
            .map(|registration| registration.mode)
    }

    #[instrument(
        skip(self, date_of_birth, unique_corp_id, implementation, dependent_date_of_birth),
        fields(implementation = implementation.as_str(), mode = tracing::field::Empty)
    )]
    pub async fn perform_client_specific_verification(
        &self,
        is_employee: bool,
        date_of_birth: NaiveDate,
        organization_id: i64,
        unique_corp_id: &str,
        implementation: ClientSpecificImplementation,
        dependent_date_of_birth: Option<NaiveDate>,
    ) -> Result<Member, ClientSpecificServiceError> {
        let registration = self
            .implementations
            .get(&implementation)
            .ok_or(ClientSpecificServiceError::NotConfigured(implementation))?;
        tracing::Span::current().record("mode", registration.mode.as_str());

        let request = ClientSpecificRequest {
            is_employee,
            unique_corp_id: unique_corp_id.to_string(),
            date_of_birth,
            dependent_date_of_birth,
        };

        match registration.mode {
            ClientSpecificMode::OnlyClientCheck => {
                self.client_check(registration, &request, organization_id, implementation)
                    .await
            },
            ClientSpecificMode::OnlyCensus => self.census_check(&request, organization_id, implementation).await,
            ClientSpecificMode::FallbackToCensus => {
                self.client_check_with_census_fallback(registration, &request, organization_id, implementation)
                    .await
            },
        }
    }

    async fn client_check(
        &self,
        registration: &Registration,
        request: &ClientSpecificRequest,
        organization_id: i64,
        implementation: ClientSpecificImplementation,
    ) -> Result<Member, ClientSpecificServiceError> {
        info!(unique_corp_id = %request.unique_corp_id, "Starting client specific check.");
        let response = match registration.verifier.verify_member(request).await {
            Ok(response) => response,
            Err(source) => {
                error!(
                    error = %source,
                    unique_corp_id = %request.unique_corp_id,
                    "Client check encountered an unhandled exception."
                );
                return Err(ClientSpecificServiceError::Upstream { implementation, source });
            },
        };

        let Some(response) = response else {
            info!(unique_corp_id = %request.unique_corp_id, "Client check found no match.");
            return Err(ClientSpecificServiceError::Match { implementation });
        };

        info!(
            check_result_keys = ?response.keys().collect::<Vec<_>>(),
            country_eligible = response.get("country").and_then(serde_json::Value::as_str).unwrap_or_default(),
            unique_corp_id = %request.unique_corp_id,
            "Client check indicated that member was eligible."
        );
        Ok(synthesize_member(request, organization_id, response))
    }

    async fn census_check(
        &self,
        request: &ClientSpecificRequest,
        organization_id: i64,
        implementation: ClientSpecificImplementation,
    ) -> Result<Member, ClientSpecificServiceError> {
        let version = if self.eligibility.is_v2_enabled(organization_id) {
            Version::V2
        } else {
            Version::V1
        };

        let member = self
            .members
            .get_by_client_specific_verification(
                version,
                organization_id,
                &request.unique_corp_id,
                request.date_of_birth,
            )
            .await?;

        member.ok_or_else(|| {
            info!(unique_corp_id = %request.unique_corp_id, version = %version, "Census check found no match.");
            ClientSpecificServiceError::Match { implementation }
        })
    }

    async fn client_check_with_census_fallback(
        &self,
        registration: &Registration,
        request: &ClientSpecificRequest,
        organization_id: i64,
        implementation: ClientSpecificImplementation,
    ) -> Result<Member, ClientSpecificServiceError> {
        let client_error = match self
            .client_check(registration, request, organization_id, implementation)
            .await
        {
            Ok(member) => return Ok(member),
            Err(err) => err,
        };

        info!(unique_corp_id = %request.unique_corp_id, "Falling back to census check.");
        match self.census_check(request, organization_id, implementation).await {
            Ok(member) => {
                info!(
                    unique_corp_id = %request.unique_corp_id,
                    "Recovered client specific check by falling back to census."
                );
                Ok(member)
            },
            Err(err) if err.is_match_error() => {
                info!(
                    unique_corp_id = %request.unique_corp_id,
                    "Both client check and census check found no match."
                );
                Err(client_error)
            },
            Err(err) => Err(err),
        }
    }
}

/// Member for a partner-confirmed identity. It has no census row, so no
/// database id and no names.
fn synthesize_member(request: &ClientSpecificRequest, organization_id: i64, response: Map<String, Value>) -> Member {
    let mut record = Map::new();
    record.insert("is_employee".to_string(), Value::Bool(request.is_employee));
    record.extend(response);

    Member {
        id: 0,
        organization_id,
        file_id: None,
        first_name: String::new(),
        last_name: String::new(),
        email: String::new(),
        unique_corp_id: request.unique_corp_id.clone(),
        dependent_id: String::new(),
        date_of_birth: request.date_of_birth,
        work_state: None,
        record,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::client_specific::VerifyError;
    use crate::query::{MemberQuery, MemberResult, StoreError};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use serde_json::json;

    enum Answer {
        Eligible(Value),
        NoMatch,
        Timeout,
    }

    struct FakeVerifier(Answer);

    #[async_trait]
    impl ClientVerifier for FakeVerifier {
        async fn verify_member(
            &self,
            _request: &ClientSpecificRequest,
        ) -> Result<Option<Map<String, Value>>, VerifyError> {
            match &self.0 {
                Answer::Eligible(Value::Object(map)) => Ok(Some(map.clone())),
                Answer::Eligible(_) => unreachable!(),
                Answer::NoMatch => Ok(None),
                Answer::Timeout => Err(VerifyError::Timeout(std::time::Duration::from_secs(6))),
            }
        }
    }

    #[derive(Default)]
    struct CensusStore {
        member: Option<Member>,
        calls: Mutex<Vec<Version>>,
    }

    #[async_trait]
    impl MemberStore for CensusStore {
        async fn run(&self, _version: Version, _query: &MemberQuery) -> Result<Option<MemberResult>, StoreError> {
            Ok(None)
        }

        async fn get_by_client_specific_verification(
            &self,
            version: Version,
            _organization_id: i64,
            _unique_corp_id: &str,
            _date_of_birth: NaiveDate,
        ) -> Result<Option<Member>, StoreError> {
            self.calls.lock().push(version);
            Ok(self.member.clone())
        }
    }

    fn dob() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
    }

    fn census_member() -> Member {
        Member {
            id: 55,
            organization_id: 9,
            file_id: Some(1),
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            email: String::new(),
            unique_corp_id: "E-1".into(),
            dependent_id: String::new(),
            date_of_birth: dob(),
            work_state: None,
            record: Map::new(),
        }
    }

    fn service(store: Arc<CensusStore>, mode: ClientSpecificMode, answer: Answer) -> ClientSpecificService {
        ClientSpecificService::new(store, EligibilityConfig::default()).with_implementation(
            ClientSpecificImplementation::Microsoft,
            mode,
            Arc::new(FakeVerifier(answer)),
        )
    }

    async fn verify(service: &ClientSpecificService) -> Result<Member, ClientSpecificServiceError> {
        service
            .perform_client_specific_verification(true, dob(), 9, "E-1", ClientSpecificImplementation::Microsoft, None)
            .await
    }

    #[tokio::test]
    async fn test_client_check_synthesizes_member() {
        let store = Arc::new(CensusStore::default());
        let answer = Answer::Eligible(json!({"insuranceType": "PPO", "country": "USA"}));
        let member = verify(&service(store.clone(), ClientSpecificMode::OnlyClientCheck, answer))
            .await
            .unwrap();

        assert_eq!(member.id, 0);
        assert_eq!(member.first_name, "");
        assert_eq!(member.organization_id, 9);
        assert_eq!(
            Value::Object(member.record),
            json!({"is_employee": true, "insuranceType": "PPO", "country": "USA"})
        );
        assert!(store.calls.lock().is_empty());
    }

    #[tokio::test]
    async fn test_client_check_miss_and_upstream() {
        let store = Arc::new(CensusStore::default());
        let miss = verify(&service(store.clone(), ClientSpecificMode::OnlyClientCheck, Answer::NoMatch))
            .await
            .unwrap_err();
        assert!(miss.is_match_error());

        let upstream = verify(&service(store, ClientSpecificMode::OnlyClientCheck, Answer::Timeout))
            .await
            .unwrap_err();
        assert!(matches!(upstream, ClientSpecificServiceError::Upstream { .. }));
    }

    #[tokio::test]
    async fn test_census_only_uses_v2_for_enabled_orgs() {
        let store = Arc::new(CensusStore {
            member: Some(census_member()),
            ..CensusStore::default()
        });
        let mut eligibility = EligibilityConfig::default();
        eligibility.v2_enabled_orgs.insert(9);
        let service = ClientSpecificService::new(store.clone(), eligibility).with_implementation(
            ClientSpecificImplementation::Microsoft,
            ClientSpecificMode::OnlyCensus,
            Arc::new(FakeVerifier(Answer::Timeout)),
        );

        assert_eq!(verify(&service).await.unwrap().id, 55);
        assert_eq!(*store.calls.lock(), vec![Version::V2]);
    }

    #[tokio::test]
    async fn test_fallback_recovers_from_census() {
        let store = Arc::new(CensusStore {
            member: Some(census_member()),
            ..CensusStore::default()
        });
        let member = verify(&service(store.clone(), ClientSpecificMode::FallbackToCensus, Answer::Timeout))
            .await
            .unwrap();
        assert_eq!(member.id, 55);
        assert_eq!(*store.calls.lock(), vec![Version::V1]);
    }

    #[tokio::test]
    async fn test_fallback_double_miss_returns_client_error() {
        let store = Arc::new(CensusStore::default());
        let err = verify(&service(store.clone(), ClientSpecificMode::FallbackToCensus, Answer::Timeout))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientSpecificServiceError::Upstream { .. }));
        assert_eq!(store.calls.lock().len(), 1);
    }

    #[tokio::test]
    async fn test_fallback_skips_census_on_client_success() {
        let store = Arc::new(CensusStore {
            member: Some(census_member()),
            ..CensusStore::default()
        });
        let answer = Answer::Eligible(json!({"insuranceType": "PPO"}));
        let member = verify(&service(store.clone(), ClientSpecificMode::FallbackToCensus, answer))
            .await
            .unwrap();
        assert_eq!(member.id, 0);
        assert!(store.calls.lock().is_empty());
    }

    #[tokio::test]
    async fn test_unregistered_implementation() {
        let service = ClientSpecificService::new(Arc::new(CensusStore::default()), EligibilityConfig::default());
        assert!(matches!(
            verify(&service).await,
            Err(ClientSpecificServiceError::NotConfigured(ClientSpecificImplementation::Microsoft))
        ));
    }
}
