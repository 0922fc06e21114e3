//! Member store contract.
//!
//! Every lookup the registry can dispatch is an [`Operation`] with a fixed
//! parameter schema and a matching [`MemberQuery`] variant. Stores receive
//! typed queries; they never see the loose parameter maps callers send.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::models::{Member, Version};
use crate::query::result::MemberResult;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Member store unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid parameter '{param}' for {method_name}")]
    InvalidParam { method_name: String, param: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Parameter schema of one store method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub required: &'static [&'static str],
    pub optional: &'static [&'static str],
}

const fn op(name: &'static str, required: &'static [&'static str]) -> Operation {
    Operation {
        name,
        required,
        optional: &[],
    }
}

/// Store methods that can back a query definition.
pub const OPERATIONS: &[Operation] = &[
    op("get_all_by_name_and_date_of_birth", &["date_of_birth", "first_name", "last_name"]),
    op(
        "get_all_by_employee_name_and_date_of_birth",
        &["date_of_birth", "employee_first_name", "employee_last_name"],
    ),
    op("get_by_name_and_unique_corp_id", &["first_name", "last_name", "unique_corp_id"]),
    op(
        "get_by_employee_name_and_unique_corp_id",
        &["employee_first_name", "employee_last_name", "unique_corp_id", "user_id"],
    ),
    op("get_by_date_of_birth_and_unique_corp_id", &["date_of_birth", "unique_corp_id"]),
    op(
        "get_by_dependent_date_of_birth_and_unique_corp_id",
        &["dependent_date_of_birth", "unique_corp_id"],
    ),
    op("get_by_dob_and_email", &["date_of_birth", "email"]),
    op("get_by_dependent_dob_and_email", &["dependent_date_of_birth", "email"]),
    op(
        "get_by_dob_name_and_work_state",
        &["date_of_birth", "first_name", "last_name", "work_state"],
    ),
    op("get_by_email_and_name", &["email", "first_name", "last_name"]),
    op(
        "get_by_email_and_employee_name",
        &["email", "employee_first_name", "employee_last_name"],
    ),
    op("get_all_by_name_and_date_of_birth_v2", &["date_of_birth", "first_name", "last_name"]),
    op(
        "get_all_by_employee_name_and_date_of_birth_v2",
        &["date_of_birth", "employee_first_name", "employee_last_name"],
    ),
    op("get_by_name_and_unique_corp_id_v2", &["first_name", "last_name", "unique_corp_id"]),
    op(
        "get_by_employee_name_and_unique_corp_id_v2",
        &["employee_first_name", "employee_last_name", "unique_corp_id"],
    ),
    op("get_by_date_of_birth_and_unique_corp_id_v2", &["date_of_birth", "unique_corp_id"]),
    op(
        "get_by_dependent_date_of_birth_and_unique_corp_id_v2",
        &["dependent_date_of_birth", "unique_corp_id"],
    ),
    op("get_by_dob_and_email_v2", &["date_of_birth", "email"]),
    op("get_by_dependent_dob_and_email_v2", &["dependent_date_of_birth", "email"]),
    op(
        "get_by_dob_name_and_work_state_v2",
        &["date_of_birth", "first_name", "last_name", "work_state"],
    ),
    op("get_by_email_and_name_v2", &["email", "first_name", "last_name"]),
    op(
        "get_by_email_and_employee_name_v2",
        &["email", "employee_first_name", "employee_last_name"],
    ),
];

pub fn operation(name: &str) -> Option<&'static Operation> {
    OPERATIONS.iter().find(|operation| operation.name == name)
}

/// A date parameter as it reaches the store.
///
/// `Raw` carries a value that passed validation but did not coerce; stores
/// decide how to treat it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateParam {
    Date(NaiveDate),
    Raw(String),
}

impl fmt::Display for DateParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateParam::Date(date) => write!(f, "{}", date),
            DateParam::Raw(raw) => f.write_str(raw),
        }
    }
}

/// A filtered query parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Date(NaiveDate),
    Value(Value),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Date(date) => write!(f, "{}", date),
            ParamValue::Value(Value::String(text)) => f.write_str(text),
            ParamValue::Value(value) => write!(f, "{}", value),
        }
    }
}

pub type FilteredParams = BTreeMap<String, ParamValue>;

/// One store lookup with typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberQuery {
    AllByNameAndDateOfBirth {
        date_of_birth: DateParam,
        first_name: String,
        last_name: String,
    },
    AllByEmployeeNameAndDateOfBirth {
        date_of_birth: DateParam,
        employee_first_name: String,
        employee_last_name: String,
    },
    ByNameAndUniqueCorpId {
        first_name: String,
        last_name: String,
        unique_corp_id: String,
    },
    ByEmployeeNameAndUniqueCorpId {
        employee_first_name: String,
        employee_last_name: String,
        unique_corp_id: String,
        user_id: Option<String>,
    },
    ByDateOfBirthAndUniqueCorpId {
        date_of_birth: DateParam,
        unique_corp_id: String,
    },
    ByDependentDateOfBirthAndUniqueCorpId {
        dependent_date_of_birth: DateParam,
        unique_corp_id: String,
    },
    ByDobAndEmail {
        date_of_birth: DateParam,
        email: String,
    },
    ByDependentDobAndEmail {
        dependent_date_of_birth: DateParam,
        email: String,
    },
    ByDobNameAndWorkState {
        date_of_birth: DateParam,
        first_name: String,
        last_name: String,
        work_state: String,
    },
    ByEmailAndName {
        email: String,
        first_name: String,
        last_name: String,
    },
    ByEmailAndEmployeeName {
        email: String,
        employee_first_name: String,
        employee_last_name: String,
    },
}

impl MemberQuery {
    /// Build the query for `method_name` (with or without the `_v2` suffix)
    /// from filtered parameters.
    pub fn build(method_name: &str, params: &FilteredParams) -> Result<Self, StoreError> {
        let base = method_name.strip_suffix("_v2").unwrap_or(method_name);
        let text = |key: &str| -> Result<String, StoreError> {
            params
                .get(key)
                .map(ParamValue::to_string)
                .ok_or_else(|| StoreError::InvalidParam {
                    method_name: method_name.to_string(),
                    param: key.to_string(),
                })
        };
        let date = |key: &str| -> Result<DateParam, StoreError> {
            match params.get(key) {
                Some(ParamValue::Date(date)) => Ok(DateParam::Date(*date)),
                Some(other) => Ok(DateParam::Raw(other.to_string())),
                None => Err(StoreError::InvalidParam {
                    method_name: method_name.to_string(),
                    param: key.to_string(),
                }),
            }
        };

        let query = match base {
            "get_all_by_name_and_date_of_birth" => MemberQuery::AllByNameAndDateOfBirth {
                date_of_birth: date("date_of_birth")?,
                first_name: text("first_name")?,
                last_name: text("last_name")?,
            },
            "get_all_by_employee_name_and_date_of_birth" => MemberQuery::AllByEmployeeNameAndDateOfBirth {
                date_of_birth: date("date_of_birth")?,
                employee_first_name: text("employee_first_name")?,
                employee_last_name: text("employee_last_name")?,
            },
            "get_by_name_and_unique_corp_id" => MemberQuery::ByNameAndUniqueCorpId {
                first_name: text("first_name")?,
                last_name: text("last_name")?,
                unique_corp_id: text("unique_corp_id")?,
            },
            "get_by_employee_name_and_unique_corp_id" => MemberQuery::ByEmployeeNameAndUniqueCorpId {
                employee_first_name: text("employee_first_name")?,
                employee_last_name: text("employee_last_name")?,
                unique_corp_id: text("unique_corp_id")?,
                user_id: text("user_id").ok(),
            },
            "get_by_date_of_birth_and_unique_corp_id" => MemberQuery::ByDateOfBirthAndUniqueCorpId {
                date_of_birth: date("date_of_birth")?,
                unique_corp_id: text("unique_corp_id")?,
            },
            "get_by_dependent_date_of_birth_and_unique_corp_id" => {
                MemberQuery::ByDependentDateOfBirthAndUniqueCorpId {
                    dependent_date_of_birth: date("dependent_date_of_birth")?,
                    unique_corp_id: text("unique_corp_id")?,
                }
            },
            "get_by_dob_and_email" => MemberQuery::ByDobAndEmail {
                date_of_birth: date("date_of_birth")?,
                email: text("email")?,
            },
            "get_by_dependent_dob_and_email" => MemberQuery::ByDependentDobAndEmail {
                dependent_date_of_birth: date("dependent_date_of_birth")?,
                email: text("email")?,
            },
            "get_by_dob_name_and_work_state" => MemberQuery::ByDobNameAndWorkState {
                date_of_birth: date("date_of_birth")?,
                first_name: text("first_name")?,
                last_name: text("last_name")?,
                work_state: text("work_state")?,
            },
            "get_by_email_and_name" => MemberQuery::ByEmailAndName {
                email: text("email")?,
                first_name: text("first_name")?,
                last_name: text("last_name")?,
            },
            "get_by_email_and_employee_name" => MemberQuery::ByEmailAndEmployeeName {
                email: text("email")?,
                employee_first_name: text("employee_first_name")?,
                employee_last_name: text("employee_last_name")?,
            },
            _ => {
                return Err(StoreError::InvalidParam {
                    method_name: method_name.to_string(),
                    param: "method_name".to_string(),
                })
            },
        };
        Ok(query)
    }

    /// Store method name without the version suffix.
    pub fn method_name(&self) -> &'static str {
        match self {
            MemberQuery::AllByNameAndDateOfBirth { .. } => "get_all_by_name_and_date_of_birth",
            MemberQuery::AllByEmployeeNameAndDateOfBirth { .. } => "get_all_by_employee_name_and_date_of_birth",
            MemberQuery::ByNameAndUniqueCorpId { .. } => "get_by_name_and_unique_corp_id",
            MemberQuery::ByEmployeeNameAndUniqueCorpId { .. } => "get_by_employee_name_and_unique_corp_id",
            MemberQuery::ByDateOfBirthAndUniqueCorpId { .. } => "get_by_date_of_birth_and_unique_corp_id",
            MemberQuery::ByDependentDateOfBirthAndUniqueCorpId { .. } => {
                "get_by_dependent_date_of_birth_and_unique_corp_id"
            },
            MemberQuery::ByDobAndEmail { .. } => "get_by_dob_and_email",
            MemberQuery::ByDependentDobAndEmail { .. } => "get_by_dependent_dob_and_email",
            MemberQuery::ByDobNameAndWorkState { .. } => "get_by_dob_name_and_work_state",
            MemberQuery::ByEmailAndName { .. } => "get_by_email_and_name",
            MemberQuery::ByEmailAndEmployeeName { .. } => "get_by_email_and_employee_name",
        }
    }

    /// Whether the store returns every match rather than a single record.
    pub fn returns_many(&self) -> bool {
        !matches!(
            self,
            MemberQuery::ByNameAndUniqueCorpId { .. }
                | MemberQuery::ByEmployeeNameAndUniqueCorpId { .. }
                | MemberQuery::ByDateOfBirthAndUniqueCorpId { .. }
                | MemberQuery::ByDependentDateOfBirthAndUniqueCorpId { .. }
        )
    }
}

/// Census member storage, in both the V1 and V2 layouts.
#[async_trait]
pub trait MemberStore: Send + Sync {
    /// Run a lookup. Single-record lookups that find nothing return
    /// `Ok(None)`; list lookups return an empty [`MemberResult::Many`].
    async fn run(&self, version: Version, query: &MemberQuery) -> Result<Option<MemberResult>, StoreError>;

    async fn get_by_client_specific_verification(
        &self,
        version: Version,
        organization_id: i64,
        unique_corp_id: &str,
        date_of_birth: NaiveDate,
    ) -> Result<Option<Member>, StoreError>;
}

/// Organization activation status.
#[async_trait]
pub trait OrganizationDirectory: Send + Sync {
    /// The subset of `organization_ids` that are currently active.
    async fn active_organization_ids(&self, organization_ids: &BTreeSet<i64>) -> Result<BTreeSet<i64>, StoreError>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_every_operation_builds_a_query() {
        for operation in OPERATIONS {
            let params: FilteredParams = operation
                .required
                .iter()
                .map(|key| {
                    let value = if key.contains("date_of_birth") {
                        ParamValue::Date(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap())
                    } else {
                        ParamValue::Value(Value::from("x"))
                    };
                    (key.to_string(), value)
                })
                .collect();
            let query = MemberQuery::build(operation.name, &params).unwrap();
            assert_eq!(
                query.method_name(),
                operation.name.strip_suffix("_v2").unwrap_or(operation.name)
            );
        }
    }

    #[test]
    fn test_missing_param_is_rejected() {
        let params = FilteredParams::from([("email".to_string(), ParamValue::Value(Value::from("a@b.c")))]);
        let err = MemberQuery::build("get_by_dob_and_email", &params).unwrap_err();
        assert!(matches!(err, StoreError::InvalidParam { ref param, .. } if param == "date_of_birth"));
    }

    #[test]
    fn test_raw_dates_and_numbers_are_stringified() {
        let params = FilteredParams::from([
            ("date_of_birth".to_string(), ParamValue::Value(Value::from("0001-01-01"))),
            ("unique_corp_id".to_string(), ParamValue::Value(Value::from(42))),
        ]);
        let query = MemberQuery::build("get_by_date_of_birth_and_unique_corp_id_v2", &params).unwrap();
        assert_eq!(
            query,
            MemberQuery::ByDateOfBirthAndUniqueCorpId {
                date_of_birth: DateParam::Raw("0001-01-01".into()),
                unique_corp_id: "42".into(),
            }
        );
        assert!(!query.returns_many());
    }
}
