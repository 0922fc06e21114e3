//! Registered lookup strategies per eligibility method and store version.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::models::Version;
use crate::query::definition::QueryDefinition;
use crate::query::error::QueryError;

/// Which family of lookups a caller is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityMethod {
    Basic,
    Employer,
    HealthPlan,
}

impl EligibilityMethod {
    pub const ALL: [EligibilityMethod; 3] = [
        EligibilityMethod::Basic,
        EligibilityMethod::Employer,
        EligibilityMethod::HealthPlan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EligibilityMethod::Basic => "basic",
            EligibilityMethod::Employer => "employer",
            EligibilityMethod::HealthPlan => "health_plan",
        }
    }
}

impl fmt::Display for EligibilityMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const BASIC_V1: &[&str] = &["get_all_by_name_and_date_of_birth"];

const EMPLOYER_V1: &[&str] = &[
    "get_by_dob_and_email",
    "get_by_dependent_dob_and_email",
    "get_by_dob_name_and_work_state",
    "get_by_email_and_name",
    "get_by_email_and_employee_name",
    "get_all_by_name_and_date_of_birth",
];

const HEALTH_PLAN_V1: &[&str] = &[
    "get_by_name_and_unique_corp_id",
    "get_by_employee_name_and_unique_corp_id",
    "get_by_date_of_birth_and_unique_corp_id",
    "get_by_dependent_date_of_birth_and_unique_corp_id",
    "get_all_by_name_and_date_of_birth",
    "get_all_by_employee_name_and_date_of_birth",
];

/// Ordered query lists for every `(method, version)` pair.
#[derive(Debug, Clone)]
pub struct QueryRegistry {
    basic: [Vec<QueryDefinition>; 2],
    employer: [Vec<QueryDefinition>; 2],
    health_plan: [Vec<QueryDefinition>; 2],
}

#[allow(clippy::expect_used)]
static REGISTRY: LazyLock<QueryRegistry> =
    LazyLock::new(|| QueryRegistry::build().expect("registered queries name store operations"));

impl QueryRegistry {
    /// The process-wide registry.
    pub fn global() -> &'static QueryRegistry {
        &REGISTRY
    }

    /// Build the registry. V2 lists mirror V1 entry for entry with the
    /// `_v2` suffix.
    pub fn build() -> Result<Self, QueryError> {
        fn versions(v1: &[&str]) -> Result<[Vec<QueryDefinition>; 2], QueryError> {
            let v1_queries = v1
                .iter()
                .map(|name| QueryDefinition::new(name))
                .collect::<Result<Vec<_>, _>>()?;
            let v2_queries = v1
                .iter()
                .map(|name| QueryDefinition::new(&format!("{name}_v2")))
                .collect::<Result<Vec<_>, _>>()?;
            Ok([v1_queries, v2_queries])
        }

        Ok(Self {
            basic: versions(BASIC_V1)?,
            employer: versions(EMPLOYER_V1)?,
            health_plan: versions(HEALTH_PLAN_V1)?,
        })
    }

    pub fn queries(&self, method: EligibilityMethod, version: Version) -> &[QueryDefinition] {
        let lists = match method {
            EligibilityMethod::Basic => &self.basic,
            EligibilityMethod::Employer => &self.employer,
            EligibilityMethod::HealthPlan => &self.health_plan,
        };
        match version {
            Version::V1 => &lists[0],
            Version::V2 => &lists[1],
        }
    }

    pub fn query_types(&self, method: EligibilityMethod, version: Version) -> BTreeSet<&str> {
        self.queries(method, version)
            .iter()
            .map(QueryDefinition::query_type)
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_v1_v2_parity() {
        let registry = QueryRegistry::global();
        for method in EligibilityMethod::ALL {
            assert_eq!(
                registry.query_types(method, Version::V1),
                registry.query_types(method, Version::V2),
                "{method}"
            );
        }
    }

    #[test]
    fn test_order_is_preserved_across_versions() {
        let registry = QueryRegistry::global();
        for method in EligibilityMethod::ALL {
            let v1: Vec<_> = registry.queries(method, Version::V1).iter().map(|q| q.query_type()).collect();
            let v2: Vec<_> = registry.queries(method, Version::V2).iter().map(|q| q.query_type()).collect();
            assert_eq!(v1, v2);
        }
    }

    #[test]
    fn test_employer_v1_contents() {
        let names: Vec<_> = QueryRegistry::global()
            .queries(EligibilityMethod::Employer, Version::V1)
            .iter()
            .map(|q| q.method_name().to_string())
            .collect();
        assert_eq!(names, EMPLOYER_V1);
        assert_eq!(QueryRegistry::global().queries(EligibilityMethod::Basic, Version::V2).len(), 1);
    }

    #[test]
    fn test_v1_employee_name_lookup_requires_user_id() {
        let registry = QueryRegistry::global();
        let v1 = &registry.queries(EligibilityMethod::HealthPlan, Version::V1)[1];
        let v2 = &registry.queries(EligibilityMethod::HealthPlan, Version::V2)[1];
        assert!(v1.required_params().contains("user_id"));
        assert!(!v2.required_params().contains("user_id"));
    }
}
