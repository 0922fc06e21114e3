//! Query outcomes

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::models::{Member, Version};
use crate::query::registry::EligibilityMethod;

/// What a store lookup returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MemberResult {
    One(Member),
    Many(Vec<Member>),
}

impl MemberResult {
    pub fn first(&self) -> Option<&Member> {
        match self {
            MemberResult::One(member) => Some(member),
            MemberResult::Many(members) => members.first(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            MemberResult::One(_) => 1,
            MemberResult::Many(members) => members.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn members(&self) -> impl Iterator<Item = &Member> {
        let members: &[Member] = match self {
            MemberResult::One(member) => std::slice::from_ref(member),
            MemberResult::Many(members) => members,
        };
        members.iter()
    }

    /// Keep members matching `keep`. A single record that is dropped leaves
    /// `None`.
    pub fn retain(self, mut keep: impl FnMut(&Member) -> bool) -> Option<MemberResult> {
        match self {
            MemberResult::One(member) => keep(&member).then_some(MemberResult::One(member)),
            MemberResult::Many(mut members) => {
                members.retain(|member| keep(member));
                Some(MemberResult::Many(members))
            },
        }
    }
}

/// The outcome of one query attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub result: Option<MemberResult>,
    pub query_name: String,
    pub query_type: String,
    pub error: Option<String>,
}

impl QueryResult {
    pub fn is_success(&self) -> bool {
        self.error.is_none() && self.result.as_ref().is_some_and(|result| !result.is_empty())
    }

    /// More than one record came back (over-eligibility).
    pub fn is_multiple_results(&self) -> bool {
        matches!(&self.result, Some(MemberResult::Many(members)) if members.len() > 1)
    }

    pub fn first_result(&self) -> Option<&Member> {
        self.result.as_ref().and_then(MemberResult::first)
    }

    pub fn failure_reason(&self) -> String {
        match (&self.error, &self.result) {
            (Some(error), _) => format!("Error: {}", error),
            (None, None) => "Result is None".to_string(),
            (None, Some(result)) if result.is_empty() => "Empty result list".to_string(),
            (None, Some(_)) => "Unexpected state".to_string(),
        }
    }

    /// One log line per attempt: info on success, warning with the failure
    /// reason otherwise.
    pub fn log_execution(&self, method: EligibilityMethod, user_id: Option<&str>, parameters: &str) {
        if self.is_success() {
            info!(
                query = %self.query_name,
                query_type = %self.query_type,
                method = %method,
                user_id = ?user_id,
                organization_id = ?self.first_result().map(|member| member.organization_id),
                result_count = self.result.as_ref().map_or(0, MemberResult::len),
                parameters,
                "Query succeeded"
            );
        } else {
            warn!(
                query = %self.query_name,
                query_type = %self.query_type,
                method = %method,
                user_id = ?user_id,
                error = ?self.error,
                failure_reason = %self.failure_reason(),
                parameters,
                "Query failed"
            );
        }
    }
}

/// Records that passed an eligibility check.
#[derive(Debug, Clone, PartialEq)]
pub struct EligibilityResult {
    pub records: MemberResult,
    /// Store the records were taken from.
    pub version: Version,
    /// Id of the first V1 record, kept as a reference even when V2 records
    /// are returned.
    pub v1_id: i64,
}

impl EligibilityResult {
    pub fn first_record(&self) -> Option<&Member> {
        self.records.first()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn member(id: i64) -> Member {
        Member {
            id,
            organization_id: 1,
            file_id: None,
            first_name: "A".into(),
            last_name: "B".into(),
            email: String::new(),
            unique_corp_id: id.to_string(),
            dependent_id: String::new(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            work_state: None,
            record: Default::default(),
        }
    }

    fn result(result: Option<MemberResult>, error: Option<&str>) -> QueryResult {
        QueryResult {
            result,
            query_name: "get_by_dob_and_email".into(),
            query_type: "by_dob_and_email".into(),
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn test_success_requires_records_and_no_error() {
        assert!(result(Some(MemberResult::One(member(1))), None).is_success());
        assert!(result(Some(MemberResult::Many(vec![member(1)])), None).is_success());
        assert!(!result(Some(MemberResult::Many(vec![])), None).is_success());
        assert!(!result(None, None).is_success());
        assert!(!result(Some(MemberResult::One(member(1))), Some("boom")).is_success());
    }

    #[test]
    fn test_first_result_and_multiple() {
        let many = result(Some(MemberResult::Many(vec![member(1), member(2)])), None);
        assert_eq!(many.first_result().unwrap().id, 1);
        assert!(many.is_multiple_results());

        let one = result(Some(MemberResult::One(member(3))), None);
        assert_eq!(one.first_result().unwrap().id, 3);
        assert!(!one.is_multiple_results());
        assert!(result(None, None).first_result().is_none());
    }

    #[test]
    fn test_failure_reasons() {
        assert_eq!(result(None, Some("boom")).failure_reason(), "Error: boom");
        assert_eq!(result(None, None).failure_reason(), "Result is None");
        assert_eq!(
            result(Some(MemberResult::Many(vec![])), None).failure_reason(),
            "Empty result list"
        );
    }

    #[test]
    fn test_retain_drops_single_record() {
        assert!(MemberResult::One(member(1)).retain(|_| false).is_none());
        let kept = MemberResult::Many(vec![member(1), member(2)])
            .retain(|m| m.id == 2)
            .unwrap();
        assert_eq!(kept.len(), 1);
    }
}
