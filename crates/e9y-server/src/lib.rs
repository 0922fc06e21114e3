//! E9Y Server Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Eligibility verification and census file processing.
//!
//! # Overview
//!
//! - **Row parsing**: census rows to validated member records in [`parse`]
//! - **Queries**: ordered member lookups per eligibility method in [`query`]
//! - **Client-specific checks**: partner API verification in [`client_specific`]
//! - **File splitting**: data provider files to per-organization files in [`split`]
//! - **Storage**: S3-compatible object storage in [`storage`]
//! - **Configuration**: environment-based settings in [`config`]
//!
//! The member database and the ingest configuration database sit behind the
//! [`query::MemberStore`], [`query::OrganizationDirectory`] and
//! [`split::IngestConfigRepository`] traits.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use e9y_server::config::Config;
//! use e9y_server::split::{FileSplitService, MemoryIngestConfig};
//! use e9y_server::storage::S3Storage;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let files = S3Storage::new(config.storage.clone()).await?;
//!     let service = FileSplitService::new(Arc::new(MemoryIngestConfig::new()), Arc::new(files), config.split);
//!     service.process_file("acme/census.csv").await?;
//!     Ok(())
//! }
//! ```

pub mod census;
pub mod client_specific;
pub mod config;
pub mod models;
pub mod parse;
pub mod query;
pub mod split;
pub mod storage;
