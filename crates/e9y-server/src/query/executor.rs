//! Eligibility checks across the V1 and V2 member stores.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::config::EligibilityConfig;
use crate::models::Version;
use crate::query::definition::QueryParams;
use crate::query::dispatch::QueryDispatcher;
use crate::query::error::QueryError;
use crate::query::registry::EligibilityMethod;
use crate::query::result::{EligibilityResult, MemberResult, QueryResult};
use crate::query::store::{MemberStore, OrganizationDirectory};

pub struct EligibilityQueryExecutor {
    dispatcher: QueryDispatcher,
    organizations: Arc<dyn OrganizationDirectory>,
    config: EligibilityConfig,
}

impl EligibilityQueryExecutor {
    pub fn new(
        store: Arc<dyn MemberStore>,
        organizations: Arc<dyn OrganizationDirectory>,
        config: EligibilityConfig,
    ) -> Self {
        Self {
            dispatcher: QueryDispatcher::new(store),
            organizations,
            config,
        }
    }

    pub fn dispatcher(&self) -> &QueryDispatcher {
        &self.dispatcher
    }

    /// Resolve member records for `method`.
    ///
    /// V1 always runs first. V2 is consulted only for V2-enabled
    /// organizations when V1 found a single record, and is used only if its
    /// first record has the same identity as V1's. Records of inactive
    /// organizations are removed.
    #[instrument(skip(self, params), fields(method = %method))]
    pub async fn perform_eligibility_check(
        &self,
        method: EligibilityMethod,
        params: &QueryParams,
    ) -> Result<EligibilityResult, QueryError> {
        let v1 = self.dispatcher.dispatch(method, Version::V1, params).await?;
        if let Some(error) = &v1.error {
            return Err(QueryError::member_search(
                method,
                format!("No matching records found for {} (details: {})", method, error),
            ));
        }
        let Some(v1_first) = v1.first_result().filter(|_| v1.is_success()) else {
            return Err(QueryError::member_search(
                method,
                format!("No valid results found for {}", method),
            ));
        };
        let v1_id = v1_first.id;
        let organization_id = v1_first.organization_id;

        let (records, version) = if v1.is_multiple_results() {
            info!(organization_id, "Using V1 results: multiple V1 records (overeligibility)");
            (v1.result, Version::V1)
        } else if !self.config.is_v2_enabled(organization_id) {
            info!(organization_id, "Using V1 results: organization not V2 enabled");
            (v1.result, Version::V1)
        } else {
            info!(organization_id, "Running V2 queries for V2-enabled organization");
            let v2 = self.try_v2(method, params, &v1).await;
            match v2 {
                Some(v2) => {
                    info!(organization_id, "Using V2 results: V2 validation successful");
                    (Some(v2), Version::V2)
                },
                None => {
                    warn!(organization_id, v1_id, "V2 query failed, falling back to V1 results");
                    (v1.result, Version::V1)
                },
            }
        };

        let records = match records {
            Some(records) => self.filter_active(method, records).await?,
            None => {
                return Err(QueryError::member_search(
                    method,
                    format!("No valid results found for {}", method),
                ))
            },
        };

        Ok(EligibilityResult {
            records,
            version,
            v1_id,
        })
    }

    async fn try_v2(&self, method: EligibilityMethod, params: &QueryParams, v1: &QueryResult) -> Option<MemberResult> {
        let v2 = match self.dispatcher.dispatch(method, Version::V2, params).await {
            Ok(v2) => v2,
            Err(err) => {
                warn!(error = %err, "V2 queries could not run");
                return None;
            },
        };
        if !v2.is_success() {
            return None;
        }

        let (Some(v1_first), Some(v2_first)) = (v1.first_result(), v2.first_result()) else {
            return None;
        };
        if !v1_first.same_identity(v2_first) {
            warn!(v1_id = v1_first.id, v2_id = v2_first.id, "V1/V2 identity mismatch");
            return None;
        }

        info!(v1_id = v1_first.id, v2_id = v2_first.id, "Using V2 results");
        v2.result
    }

    async fn filter_active(&self, method: EligibilityMethod, records: MemberResult) -> Result<MemberResult, QueryError> {
        let organization_ids: BTreeSet<i64> = records.members().map(|member| member.organization_id).collect();
        let active = self
            .organizations
            .active_organization_ids(&organization_ids)
            .await
            .map_err(|err| QueryError::Storage(err.to_string()))?;

        records
            .retain(|member| active.contains(&member.organization_id))
            .filter(|records| !records.is_empty())
            .ok_or(QueryError::InactiveOrganization { method })
    }
}
