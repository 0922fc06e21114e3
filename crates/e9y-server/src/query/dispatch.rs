//! Ordered execution of registered queries.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use e9y_common::logging::REDACTED;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::models::Version;
use crate::query::definition::{QueryDefinition, QueryParams};
use crate::query::error::QueryError;
use crate::query::registry::{EligibilityMethod, QueryRegistry};
use crate::query::result::QueryResult;
use crate::query::store::{FilteredParams, MemberStore};

/// Parameters never written to logs in clear text.
const PII_PARAMS: &[&str] = &[
    "first_name",
    "last_name",
    "employee_first_name",
    "employee_last_name",
    "email",
    "date_of_birth",
    "dependent_date_of_birth",
    "unique_corp_id",
];

pub fn redact_params(params: &FilteredParams) -> String {
    let safe: BTreeMap<&str, String> = params
        .iter()
        .map(|(key, value)| {
            let shown = if PII_PARAMS.contains(&key.as_str()) {
                REDACTED.to_string()
            } else {
                value.to_string()
            };
            (key.as_str(), shown)
        })
        .collect();
    format!("{:?}", safe)
}

fn user_id(params: &QueryParams) -> Option<String> {
    match params.get("user_id")? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Runs a method's registered queries against a member store.
#[derive(Clone)]
pub struct QueryDispatcher {
    store: Arc<dyn MemberStore>,
    registry: &'static QueryRegistry,
}

impl QueryDispatcher {
    pub fn new(store: Arc<dyn MemberStore>) -> Self {
        Self {
            store,
            registry: QueryRegistry::global(),
        }
    }

    pub fn store(&self) -> &Arc<dyn MemberStore> {
        &self.store
    }

    /// Try each registered query in order and return the first success.
    ///
    /// Queries whose required parameters are missing are skipped; if none
    /// remain this is a [`QueryError::Validation`]. When every attempt fails
    /// the last attempt's result is returned.
    pub async fn dispatch(
        &self,
        method: EligibilityMethod,
        version: Version,
        params: &QueryParams,
    ) -> Result<QueryResult, QueryError> {
        let executable = Self::prepare(self.registry.queries(method, version), method, params)?;
        let user_id = user_id(params);

        let mut last = None;
        for (definition, filtered) in executable {
            let result = self.execute(method, definition, &filtered, user_id.as_deref()).await;
            if result.is_success() {
                return Ok(result);
            }
            last = Some(result);
        }

        last.ok_or_else(|| QueryError::validation(BTreeMap::new()))
    }

    fn prepare<'q>(
        queries: &'q [QueryDefinition],
        method: EligibilityMethod,
        params: &QueryParams,
    ) -> Result<Vec<(&'q QueryDefinition, FilteredParams)>, QueryError> {
        let mut executable = Vec::with_capacity(queries.len());
        let mut missing: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for definition in queries {
            let validation = definition.validate_params(params);
            if validation.is_valid {
                executable.push((definition, definition.filter_params(params)));
            } else {
                debug!(
                    method = %method,
                    query = definition.method_name(),
                    query_type = definition.query_type(),
                    missing_params = ?validation.missing_params,
                    "Query validation failed"
                );
                missing.insert(definition.method_name().to_string(), validation.missing_params);
            }
        }

        if executable.is_empty() {
            return Err(QueryError::validation(missing));
        }
        Ok(executable)
    }

    #[instrument(skip_all, fields(method = %method, query = definition.method_name()))]
    async fn execute(
        &self,
        method: EligibilityMethod,
        definition: &QueryDefinition,
        params: &FilteredParams,
        user_id: Option<&str>,
    ) -> QueryResult {
        let outcome = match definition.to_member_query(params) {
            Ok(query) => self.store.run(definition.version(), &query).await,
            Err(err) => Err(err),
        };

        let (result, error) = match outcome {
            Ok(result) => (result, None),
            Err(err) => (None, Some(err.to_string())),
        };

        let result = QueryResult {
            result,
            query_name: definition.method_name().to_string(),
            query_type: definition.query_type().to_string(),
            error,
        };
        result.log_execution(method, user_id, &redact_params(params));
        result
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::query::store::ParamValue;
    use chrono::NaiveDate;

    #[test]
    fn test_redact_params_hides_pii() {
        let params = FilteredParams::from([
            (
                "date_of_birth".to_string(),
                ParamValue::Date(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()),
            ),
            ("email".to_string(), ParamValue::Value(Value::from("a@b.c"))),
            ("user_id".to_string(), ParamValue::Value(Value::from(12))),
        ]);
        let redacted = redact_params(&params);
        assert!(!redacted.contains("a@b.c"));
        assert!(!redacted.contains("1990"));
        assert!(redacted.contains("\"user_id\": \"12\""));
    }

    #[test]
    fn test_user_id_extraction() {
        let params: QueryParams = serde_json::from_value(serde_json::json!({"user_id": 5})).unwrap();
        assert_eq!(user_id(&params).as_deref(), Some("5"));
        assert_eq!(user_id(&QueryParams::new()), None);
    }
}
