//! Ingest configuration contract used by the split pipeline.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use e9y_common::{E9yError, Result};
use parking_lot::RwLock;

use crate::models::{Configuration, ExternalMavenOrgInfo, File, FileError, HeaderAlias};

#[async_trait]
pub trait IngestConfigRepository: Send + Sync {
    /// Configuration of the organization owning the directory `filename`
    /// lives in.
    async fn sync(&self, filename: &str) -> Result<Option<Configuration>>;

    async fn get_affiliations_header_for_org(&self, organization_id: i64) -> Result<Vec<HeaderAlias>>;

    async fn get_external_org_info(
        &self,
        source: &str,
        client_id: &str,
        customer_id: &str,
        organization_id: i64,
    ) -> Result<Option<ExternalMavenOrgInfo>>;

    async fn create_file(&self, organization_id: i64, filename: &str) -> Result<File>;

    async fn set_started_at(&self, file_id: i64) -> Result<()>;

    async fn set_encoding(&self, file_id: i64, encoding: &str) -> Result<()>;

    async fn set_error(&self, file_id: i64, error: FileError) -> Result<()>;

    async fn set_file_count(&self, file_id: i64, raw_count: usize, success_count: usize, failure_count: usize)
        -> Result<()>;
}

/// Directory part of an object name; empty for top-level names.
pub fn directory_of(filename: &str) -> &str {
    filename.rsplit_once('/').map(|(directory, _)| directory).unwrap_or_default()
}

#[derive(Default)]
struct State {
    configurations: BTreeMap<i64, Configuration>,
    aliases: HashMap<i64, Vec<HeaderAlias>>,
    /// `(data provider id, client_id, customer_id)` to child organization id.
    external_ids: HashMap<(i64, String, String), i64>,
    files: BTreeMap<i64, File>,
}

/// In-process ingest configuration for local runs and tests.
#[derive(Clone, Default)]
pub struct MemoryIngestConfig {
    state: Arc<RwLock<State>>,
}

impl MemoryIngestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_configuration(&self, configuration: Configuration) {
        self.state
            .write()
            .configurations
            .insert(configuration.organization_id, configuration);
    }

    pub fn add_header_alias(&self, organization_id: i64, header: &str, alias: &str) {
        self.state
            .write()
            .aliases
            .entry(organization_id)
            .or_default()
            .push(HeaderAlias {
                organization_id,
                header: header.to_string(),
                alias: alias.to_string(),
            });
    }

    /// Route `(client_id, customer_id)` rows of a data provider's files to
    /// `child_organization_id`. An empty `customer_id` matches any customer.
    pub fn add_external_id(&self, data_provider_id: i64, client_id: &str, customer_id: &str, child_organization_id: i64) {
        self.state.write().external_ids.insert(
            (data_provider_id, client_id.to_string(), customer_id.to_string()),
            child_organization_id,
        );
    }

    pub fn file(&self, file_id: i64) -> Option<File> {
        self.state.read().files.get(&file_id).cloned()
    }

    pub fn files(&self) -> Vec<File> {
        self.state.read().files.values().cloned().collect()
    }

    fn update_file(&self, file_id: i64, update: impl FnOnce(&mut File)) -> Result<()> {
        let mut state = self.state.write();
        let file = state.files.get_mut(&file_id).ok_or(E9yError::FileNotFound(file_id))?;
        update(file);
        Ok(())
    }
}

#[async_trait]
impl IngestConfigRepository for MemoryIngestConfig {
    async fn sync(&self, filename: &str) -> Result<Option<Configuration>> {
        let directory = directory_of(filename);
        Ok(self
            .state
            .read()
            .configurations
            .values()
            .find(|configuration| !directory.is_empty() && configuration.directory_name == directory)
            .cloned())
    }

    async fn get_affiliations_header_for_org(&self, organization_id: i64) -> Result<Vec<HeaderAlias>> {
        Ok(self
            .state
            .read()
            .aliases
            .get(&organization_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_external_org_info(
        &self,
        _source: &str,
        client_id: &str,
        customer_id: &str,
        organization_id: i64,
    ) -> Result<Option<ExternalMavenOrgInfo>> {
        let state = self.state.read();
        let key = |customer: &str| (organization_id, client_id.to_string(), customer.to_string());
        let child_id = state
            .external_ids
            .get(&key(customer_id))
            .or_else(|| state.external_ids.get(&key("")));

        Ok(child_id.map(|child_id| {
            let directory_name = state
                .configurations
                .get(child_id)
                .map(|configuration| configuration.directory_name.clone());
            ExternalMavenOrgInfo {
                organization_id: *child_id,
                directory_name,
                activated_at: state
                    .configurations
                    .get(child_id)
                    .and_then(|configuration| configuration.activated_at),
            }
        }))
    }

    async fn create_file(&self, organization_id: i64, filename: &str) -> Result<File> {
        let mut state = self.state.write();
        let id = state.files.keys().next_back().map_or(1, |last| last + 1);
        let file = File::new(id, organization_id, filename);
        state.files.insert(id, file.clone());
        Ok(file)
    }

    async fn set_started_at(&self, file_id: i64) -> Result<()> {
        self.update_file(file_id, |file| file.started_at = Some(Utc::now()))
    }

    async fn set_encoding(&self, file_id: i64, encoding: &str) -> Result<()> {
        self.update_file(file_id, |file| file.encoding = encoding.to_string())
    }

    async fn set_error(&self, file_id: i64, error: FileError) -> Result<()> {
        self.update_file(file_id, |file| file.error = Some(error))
    }

    async fn set_file_count(
        &self,
        file_id: i64,
        raw_count: usize,
        success_count: usize,
        failure_count: usize,
    ) -> Result<()> {
        self.update_file(file_id, |file| {
            file.raw_count = raw_count;
            file.success_count = success_count;
            file.failure_count = failure_count;
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_of() {
        assert_eq!(directory_of("acme/2024/census.csv"), "acme/2024");
        assert_eq!(directory_of("census.csv"), "");
    }

    #[tokio::test]
    async fn test_sync_matches_directory() {
        let repo = MemoryIngestConfig::new();
        repo.add_configuration(Configuration::new(1, "acme"));
        assert_eq!(repo.sync("acme/census.csv").await.unwrap().unwrap().organization_id, 1);
        assert!(repo.sync("other/census.csv").await.unwrap().is_none());
        assert!(repo.sync("census.csv").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_external_org_lookup_prefers_composite_key() {
        let repo = MemoryIngestConfig::new();
        repo.add_configuration(Configuration::new(20, "child-a"));
        repo.add_external_id(1, "a", "b", 20);
        repo.add_external_id(1, "a", "", 30);

        let exact = repo.get_external_org_info("file", "a", "b", 1).await.unwrap().unwrap();
        assert_eq!(exact.organization_id, 20);
        assert_eq!(exact.directory_name.as_deref(), Some("child-a"));

        let fallback = repo.get_external_org_info("file", "a", "zzz", 1).await.unwrap().unwrap();
        assert_eq!(fallback.organization_id, 30);
        assert_eq!(fallback.directory_name, None);

        assert!(repo.get_external_org_info("file", "a", "b", 2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_lifecycle() {
        let repo = MemoryIngestConfig::new();
        let file = repo.create_file(1, "acme/census.csv").await.unwrap();
        assert_eq!(file.id, 1);
        assert_eq!(repo.create_file(1, "acme/next.csv").await.unwrap().id, 2);

        repo.set_started_at(file.id).await.unwrap();
        repo.set_encoding(file.id, "windows-1252").await.unwrap();
        repo.set_file_count(file.id, 10, 8, 2).await.unwrap();

        let stored = repo.file(file.id).unwrap();
        assert!(stored.started_at.is_some());
        assert_eq!(stored.encoding, "windows-1252");
        assert_eq!((stored.raw_count, stored.success_count, stored.failure_count), (10, 8, 2));
        assert!(matches!(
            repo.set_error(99, FileError::Missing).await,
            Err(E9yError::FileNotFound(99))
        ));
    }
}
