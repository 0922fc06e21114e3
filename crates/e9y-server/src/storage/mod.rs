//! Object storage for census files.
//!
//! The split pipeline only needs `get`/`put` by bucket and name, expressed
//! as [`ObjectStore`]. [`S3Storage`] talks to any S3-compatible endpoint;
//! [`MemoryStore`] backs local runs and tests.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_s3::{
    config::{BehaviorVersion, Credentials, Region},
    error::SdkError,
    operation::get_object::GetObjectError,
    primitives::ByteStream,
    Client,
};
use parking_lot::RwLock;
use tracing::{debug, info, instrument};

pub mod config;

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch an object. A missing object is `Ok(None)`.
    async fn get(&self, name: &str, bucket: &str) -> Result<Option<Vec<u8>>>;

    async fn put(&self, name: &str, bucket: &str, data: Vec<u8>) -> Result<()>;
}

#[derive(Clone)]
pub struct S3Storage {
    client: Client,
}

impl S3Storage {
    pub async fn new(config: config::StorageConfig) -> Result<Self> {
        debug!(endpoint = ?config.endpoint, region = %config.region, "Initializing object storage");

        let mut builder = match config.static_credentials() {
            Some((access_key, secret_key)) => aws_sdk_s3::Config::builder()
                .behavior_version(BehaviorVersion::latest())
                .credentials_provider(Credentials::new(access_key, secret_key, None, None, "e9y-storage")),
            None => {
                let shared = aws_config::defaults(BehaviorVersion::latest()).load().await;
                aws_sdk_s3::config::Builder::from(&shared)
            },
        };

        builder = builder
            .region(Region::new(config.region.clone()))
            .force_path_style(config.path_style);

        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint);
        }

        let client = Client::from_conf(builder.build());
        info!(region = %config.region, "Object storage client initialized");

        Ok(Self { client })
    }
}

#[async_trait]
impl ObjectStore for S3Storage {
    #[instrument(skip(self))]
    async fn get(&self, name: &str, bucket: &str) -> Result<Option<Vec<u8>>> {
        debug!("Downloading s3://{}/{}", bucket, name);

        let response = match self.client.get_object().bucket(bucket).key(name).send().await {
            Ok(response) => response,
            Err(SdkError::ServiceError(err)) if matches!(err.err(), GetObjectError::NoSuchKey(_)) => {
                debug!("No object at s3://{}/{}", bucket, name);
                return Ok(None);
            },
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to download s3://{bucket}/{name}"));
            },
        };

        let data = response
            .body
            .collect()
            .await
            .context("Failed to read S3 response body")?
            .into_bytes()
            .to_vec();

        debug!("Downloaded {} bytes from s3://{}/{}", data.len(), bucket, name);
        Ok(Some(data))
    }

    #[instrument(skip(self, data), fields(size = data.len()))]
    async fn put(&self, name: &str, bucket: &str, data: Vec<u8>) -> Result<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(name)
            .content_type("text/csv")
            .body(ByteStream::from(data))
            .send()
            .await
            .with_context(|| format!("Failed to upload s3://{bucket}/{name}"))?;

        info!("Uploaded s3://{}/{}", bucket, name);
        Ok(())
    }
}

/// In-process object store keyed by `(bucket, name)`.
#[derive(Clone, Default)]
pub struct MemoryStore {
    objects: Arc<RwLock<HashMap<(String, String), Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, bucket: &str, name: &str, data: impl Into<Vec<u8>>) {
        self.objects
            .write()
            .insert((bucket.to_string(), name.to_string()), data.into());
    }

    /// Names stored in `bucket`, sorted.
    pub fn names(&self, bucket: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .objects
            .read()
            .keys()
            .filter(|(b, _)| b == bucket)
            .map(|(_, name)| name.clone())
            .collect();
        names.sort();
        names
    }

    pub fn read(&self, bucket: &str, name: &str) -> Option<Vec<u8>> {
        self.objects
            .read()
            .get(&(bucket.to_string(), name.to_string()))
            .cloned()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn get(&self, name: &str, bucket: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.read(bucket, name))
    }

    async fn put(&self, name: &str, bucket: &str, data: Vec<u8>) -> Result<()> {
        self.insert(bucket, name, data);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.get("a.csv", "census").await.unwrap().is_none());

        store.put("a.csv", "census", b"x,y\r\n".to_vec()).await.unwrap();
        store.put("b.csv", "other", b"z".to_vec()).await.unwrap();

        assert_eq!(store.get("a.csv", "census").await.unwrap().unwrap(), b"x,y\r\n");
        assert_eq!(store.names("census"), vec!["a.csv".to_string()]);
    }

    #[tokio::test]
    async fn test_s3_storage_builds_with_static_credentials() {
        let config = config::StorageConfig::for_endpoint("http://127.0.0.1:9", "key", "secret");
        assert!(S3Storage::new(config).await.is_ok());
    }
}
