//! Member records returned by the census stores.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Which member store produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Version {
    /// Legacy `member_versioned` store
    V1,
    /// `member_2` store
    V2,
}

impl Version {
    pub fn as_str(&self) -> &'static str {
        match self {
            Version::V1 => "v1",
            Version::V2 => "v2",
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An authoritative eligibility record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub organization_id: i64,
    #[serde(default)]
    pub file_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    pub unique_corp_id: String,
    #[serde(default)]
    pub dependent_id: String,
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    pub work_state: Option<String>,
    #[serde(default)]
    pub record: Map<String, Value>,
}

impl Member {
    /// True when both records describe the same person in the same
    /// organization, judged on identity fields only.
    pub fn same_identity(&self, other: &Member) -> bool {
        self.unique_corp_id == other.unique_corp_id
            && self.organization_id == other.organization_id
            && self.first_name == other.first_name
            && self.last_name == other.last_name
            && self.date_of_birth == other.date_of_birth
            && self.dependent_id == other.dependent_id
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn member() -> Member {
        Member {
            id: 7,
            organization_id: 1,
            file_id: None,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            unique_corp_id: "E-1".into(),
            dependent_id: String::new(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            work_state: Some("NY".into()),
            record: Map::new(),
        }
    }

    #[test]
    fn test_same_identity_ignores_ids_and_contact_fields() {
        let v1 = member();
        let mut v2 = member();
        v2.id = 1001;
        v2.email = "other@example.com".into();
        assert!(v1.same_identity(&v2));

        v2.dependent_id = "D1".into();
        assert!(!v1.same_identity(&v2));
    }

    #[test]
    fn test_version_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Version::V2).unwrap(), "\"v2\"");
        assert_eq!(Version::V1.to_string(), "v1");
    }
}
