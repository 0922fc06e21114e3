//! Query definitions: one candidate lookup strategy each.

use std::collections::{BTreeMap, BTreeSet};

use e9y_common::convert::{to_date, DateCoercion};
use serde_json::Value;
use tracing::warn;

use crate::models::Version;
use crate::query::error::QueryError;
use crate::query::store::{operation, FilteredParams, MemberQuery, ParamValue, StoreError};

/// Caller-supplied lookup parameters.
pub type QueryParams = BTreeMap<String, Value>;

const QUERY_TYPE_PREFIXES: &[&str] = &["get_", "get_by_", "get_all_by_"];

/// Keys whose values are coerced to dates before reaching the store.
pub fn is_date_param(key: &str) -> bool {
    key.ends_with("_date") || key == "date_of_birth" || key.ends_with("_date_of_birth")
}

fn coerce_date(value: &Value) -> DateCoercion {
    match value {
        Value::String(text) => to_date(text.as_str()),
        _ => DateCoercion::Unknown,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub missing_params: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDefinition {
    method_name: String,
    version: Version,
    required_params: BTreeSet<String>,
    optional_params: BTreeSet<String>,
}

impl QueryDefinition {
    /// Definition whose parameters come from the store method's schema.
    pub fn new(method_name: &str) -> Result<Self, QueryError> {
        let operation = operation(method_name).ok_or_else(|| QueryError::UnknownMethod(method_name.to_string()))?;
        Self::with_params(
            method_name,
            operation.required.iter().map(|p| p.to_string()).collect(),
            operation.optional.iter().map(|p| p.to_string()).collect(),
        )
    }

    /// Definition with explicit parameter sets, which must not overlap.
    pub fn with_params(
        method_name: &str,
        required_params: BTreeSet<String>,
        optional_params: BTreeSet<String>,
    ) -> Result<Self, QueryError> {
        if operation(method_name).is_none() {
            return Err(QueryError::UnknownMethod(method_name.to_string()));
        }
        if let Some(param) = required_params.intersection(&optional_params).next() {
            return Err(QueryError::OverlappingParams {
                method_name: method_name.to_string(),
                param: param.clone(),
            });
        }
        let version = if method_name.ends_with("_v2") {
            Version::V2
        } else {
            Version::V1
        };
        Ok(Self {
            method_name: method_name.to_string(),
            version,
            required_params,
            optional_params,
        })
    }

    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn required_params(&self) -> &BTreeSet<String> {
        &self.required_params
    }

    pub fn optional_params(&self) -> &BTreeSet<String> {
        &self.optional_params
    }

    /// Method name with the first matching `get_` prefix and any `_v2`
    /// suffix removed. Equal across versions of the same lookup.
    pub fn query_type(&self) -> &str {
        let mut name = self.method_name.as_str();
        if let Some(stripped) = QUERY_TYPE_PREFIXES.iter().find_map(|prefix| name.strip_prefix(prefix)) {
            name = stripped;
        }
        name.strip_suffix("_v2").unwrap_or(name)
    }

    /// Every required parameter must be present, non-null, non-blank and,
    /// for date keys, parseable.
    pub fn validate_params(&self, params: &QueryParams) -> ValidationResult {
        let missing_params: BTreeSet<String> = self
            .required_params
            .iter()
            .filter(|param| match params.get(param.as_str()) {
                None | Some(Value::Null) => true,
                Some(Value::String(text)) if text.trim().is_empty() => true,
                Some(value) => is_date_param(param) && coerce_date(value).is_unknown(),
            })
            .cloned()
            .collect();

        ValidationResult {
            is_valid: missing_params.is_empty(),
            missing_params,
        }
    }

    /// Keep only this query's parameters, coercing dates.
    ///
    /// An optional date that does not coerce is dropped. A required one is
    /// forwarded as given: validation already accepted it.
    pub fn filter_params(&self, params: &QueryParams) -> FilteredParams {
        let mut filtered = FilteredParams::new();
        for param in self.required_params.iter().chain(&self.optional_params) {
            let value = match params.get(param) {
                None | Some(Value::Null) => continue,
                Some(value) => value,
            };

            if !is_date_param(param) {
                filtered.insert(param.clone(), ParamValue::Value(value.clone()));
                continue;
            }

            match coerce_date(value) {
                DateCoercion::Date(date) => {
                    filtered.insert(param.clone(), ParamValue::Date(date));
                },
                _ if !self.required_params.contains(param) => {},
                _ => {
                    warn!(param = %param, query = %self.method_name, "Required param validation inconsistency detected!");
                    filtered.insert(param.clone(), ParamValue::Value(value.clone()));
                },
            }
        }
        filtered
    }

    pub fn to_member_query(&self, params: &FilteredParams) -> Result<MemberQuery, StoreError> {
        MemberQuery::build(&self.method_name, params)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn params(value: Value) -> QueryParams {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_params_come_from_store_schema() {
        let query = QueryDefinition::new("get_by_dob_and_email").unwrap();
        assert_eq!(
            query.required_params().iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["date_of_birth", "email"]
        );
        assert!(query.optional_params().is_empty());
        assert_eq!(query.version(), Version::V1);
        assert_eq!(QueryDefinition::new("get_by_dob_and_email_v2").unwrap().version(), Version::V2);
    }

    #[test]
    fn test_unknown_method_fails() {
        assert_eq!(
            QueryDefinition::new("get_by_shoe_size").unwrap_err(),
            QueryError::UnknownMethod("get_by_shoe_size".into())
        );
    }

    #[test]
    fn test_overlapping_params_fail() {
        let both = BTreeSet::from(["email".to_string()]);
        let err = QueryDefinition::with_params("get_by_dob_and_email", both.clone(), both).unwrap_err();
        assert!(matches!(err, QueryError::OverlappingParams { .. }));
    }

    #[test]
    fn test_query_type() {
        let cases = [
            ("get_by_dob_and_email", "by_dob_and_email"),
            ("get_by_dob_and_email_v2", "by_dob_and_email"),
            ("get_all_by_name_and_date_of_birth", "all_by_name_and_date_of_birth"),
            ("get_all_by_name_and_date_of_birth_v2", "all_by_name_and_date_of_birth"),
        ];
        for (method_name, expected) in cases {
            assert_eq!(QueryDefinition::new(method_name).unwrap().query_type(), expected);
        }
    }

    #[test]
    fn test_date_param_keys() {
        assert!(is_date_param("date_of_birth"));
        assert!(is_date_param("dependent_date_of_birth"));
        assert!(is_date_param("employee_start_date"));
        assert!(!is_date_param("email"));
        assert!(!is_date_param("dated"));
    }

    #[test]
    fn test_validate_params() {
        let query = QueryDefinition::new("get_by_dob_and_email").unwrap();

        let ok = query.validate_params(&params(json!({"date_of_birth": "1990-01-01", "email": "a@b.c"})));
        assert!(ok.is_valid);

        let bad = query.validate_params(&params(json!({"date_of_birth": "garbage", "email": "  "})));
        assert!(!bad.is_valid);
        assert_eq!(bad.missing_params.len(), 2);

        let null = query.validate_params(&params(json!({"date_of_birth": null, "email": "a@b.c"})));
        assert_eq!(null.missing_params, BTreeSet::from(["date_of_birth".to_string()]));
    }

    #[test]
    fn test_filter_params_coerces_and_drops_unknown_keys() {
        let query = QueryDefinition::new("get_by_dob_and_email").unwrap();
        let filtered = query.filter_params(&params(json!({
            "date_of_birth": "01/02/1990",
            "email": "a@b.c",
            "first_name": "ignored",
        })));
        assert_eq!(filtered.len(), 2);
        assert_eq!(
            filtered["date_of_birth"],
            ParamValue::Date(NaiveDate::from_ymd_opt(1990, 1, 2).unwrap())
        );
        assert_eq!(filtered["email"], ParamValue::Value(json!("a@b.c")));
    }

    #[test]
    fn test_filter_params_tolerates_explicit_unknown_date() {
        let query = QueryDefinition::new("get_by_dob_and_email").unwrap();
        let input = params(json!({"date_of_birth": "0001-01-01", "email": "a@b.c"}));
        assert!(query.validate_params(&input).is_valid);

        let filtered = query.filter_params(&input);
        assert_eq!(filtered["date_of_birth"], ParamValue::Value(json!("0001-01-01")));
    }

    #[test]
    fn test_filter_params_drops_bad_optional_date() {
        let query = QueryDefinition::with_params(
            "get_by_dob_and_email",
            BTreeSet::from(["email".to_string()]),
            BTreeSet::from(["date_of_birth".to_string()]),
        )
        .unwrap();
        let filtered = query.filter_params(&params(json!({"date_of_birth": "garbage", "email": "a@b.c"})));
        assert!(!filtered.contains_key("date_of_birth"));
    }
}
