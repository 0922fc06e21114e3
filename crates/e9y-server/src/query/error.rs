//! Query framework errors

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::query::registry::EligibilityMethod;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// No registered query could run with the supplied parameters.
    #[error("{message}")]
    Validation {
        message: String,
        /// Method name to the parameters it was missing.
        missing: BTreeMap<String, BTreeSet<String>>,
    },

    #[error("{message}")]
    MemberSearch {
        method: EligibilityMethod,
        message: String,
    },

    #[error("Member record(s) found by {method} belong to inactive organization.")]
    InactiveOrganization { method: EligibilityMethod },

    #[error("Method '{0}' not found in repository")]
    UnknownMethod(String),

    #[error("Query '{method_name}' lists '{param}' as both required and optional")]
    OverlappingParams { method_name: String, param: String },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl QueryError {
    pub fn member_search(method: EligibilityMethod, message: impl Into<String>) -> Self {
        QueryError::MemberSearch {
            method,
            message: message.into(),
        }
    }

    /// Build a validation error listing each query's missing parameters.
    pub fn validation(missing: BTreeMap<String, BTreeSet<String>>) -> Self {
        let message = missing
            .iter()
            .map(|(query, params)| {
                let params: Vec<&str> = params.iter().map(String::as_str).collect();
                format!("Query '{}' missing parameters: {}", query, params.join(", "))
            })
            .collect::<Vec<_>>()
            .join(" ");
        QueryError::Validation { message, missing }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_each_query() {
        let missing = BTreeMap::from([
            (
                "get_by_dob_and_email".to_string(),
                BTreeSet::from(["email".to_string()]),
            ),
            (
                "get_by_email_and_name".to_string(),
                BTreeSet::from(["last_name".to_string(), "first_name".to_string()]),
            ),
        ]);
        let err = QueryError::validation(missing);
        assert_eq!(
            err.to_string(),
            "Query 'get_by_dob_and_email' missing parameters: email \
             Query 'get_by_email_and_name' missing parameters: first_name, last_name"
        );
    }

    #[test]
    fn test_inactive_organization_message() {
        let err = QueryError::InactiveOrganization {
            method: EligibilityMethod::Employer,
        };
        assert_eq!(
            err.to_string(),
            "Member record(s) found by employer belong to inactive organization."
        );
    }
}
