//! Shared fakes for e9y server integration tests
//!
//! - `FakeMemberStore`: canned results per store method and version, with a
//!   call log
//! - `FakeDirectory`: a fixed set of active organizations
//! - `member()`: member record builder

#![allow(dead_code)]

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::Mutex;
use serde_json::{Map, Value};

use e9y_server::models::{Member, Version};
use e9y_server::query::{MemberQuery, MemberResult, MemberStore, OrganizationDirectory, StoreError};

/// What a store method answers with.
#[derive(Clone)]
pub enum Canned {
    Found(MemberResult),
    Nothing,
    Unavailable(String),
}

#[derive(Default)]
pub struct FakeMemberStore {
    answers: Mutex<HashMap<(Version, &'static str), Canned>>,
    client_specific: Mutex<HashMap<(Version, String), Member>>,
    calls: Mutex<Vec<(Version, MemberQuery)>>,
}

impl FakeMemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method_name` (without version suffix) for `version`.
    pub fn answer(self, version: Version, method_name: &'static str, canned: Canned) -> Self {
        self.answers.lock().insert((version, method_name), canned);
        self
    }

    pub fn with_client_specific_member(self, version: Version, member: Member) -> Self {
        self.client_specific
            .lock()
            .insert((version, member.unique_corp_id.clone()), member);
        self
    }

    pub fn calls(&self) -> Vec<(Version, MemberQuery)> {
        self.calls.lock().clone()
    }

    pub fn called_methods(&self, version: Version) -> Vec<&'static str> {
        self.calls
            .lock()
            .iter()
            .filter(|(called, _)| *called == version)
            .map(|(_, query)| query.method_name())
            .collect()
    }
}

#[async_trait]
impl MemberStore for FakeMemberStore {
    async fn run(&self, version: Version, query: &MemberQuery) -> Result<Option<MemberResult>, StoreError> {
        self.calls.lock().push((version, query.clone()));
        let canned = self.answers.lock().get(&(version, query.method_name())).cloned();
        match canned {
            Some(Canned::Found(result)) => Ok(Some(result)),
            Some(Canned::Unavailable(message)) => Err(StoreError::Unavailable(message)),
            Some(Canned::Nothing) | None if query.returns_many() => Ok(Some(MemberResult::Many(Vec::new()))),
            Some(Canned::Nothing) | None => Ok(None),
        }
    }

    async fn get_by_client_specific_verification(
        &self,
        version: Version,
        organization_id: i64,
        unique_corp_id: &str,
        date_of_birth: NaiveDate,
    ) -> Result<Option<Member>, StoreError> {
        Ok(self
            .client_specific
            .lock()
            .get(&(version, unique_corp_id.to_string()))
            .filter(|member| member.organization_id == organization_id && member.date_of_birth == date_of_birth)
            .cloned())
    }
}

/// Directory in which exactly the listed organizations are active.
pub struct FakeDirectory {
    active: BTreeSet<i64>,
}

impl FakeDirectory {
    pub fn active(ids: &[i64]) -> Self {
        Self {
            active: ids.iter().copied().collect(),
        }
    }
}

#[async_trait]
impl OrganizationDirectory for FakeDirectory {
    async fn active_organization_ids(&self, organization_ids: &BTreeSet<i64>) -> Result<BTreeSet<i64>, StoreError> {
        Ok(organization_ids.intersection(&self.active).copied().collect())
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn member(id: i64, organization_id: i64) -> Member {
    Member {
        id,
        organization_id,
        file_id: None,
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "a@b.c".into(),
        unique_corp_id: "E-1".into(),
        dependent_id: String::new(),
        date_of_birth: date(1990, 1, 1),
        work_state: None,
        record: Map::new(),
    }
}

pub fn params(pairs: &[(&str, Value)]) -> e9y_server::query::QueryParams {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}
