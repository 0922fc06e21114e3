//! Splits a data provider's census file into one file per child
//! organization.
//!
//! 1. Resolve the parent organization and its affiliation columns
//! 2. Read and decode the parent file
//! 3. Route every row to its child organization
//! 4. Reject the file when too many rows are unroutable
//! 5. Write one child file per organization

use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};

use crate::census::{decode, CensusReader, ChildFileWriter, ReaderError};
use crate::config::SplitConfig;
use crate::models::{FileError, HeaderMapping, EXTERNAL_SOURCE_FILE};
use crate::split::model::{
    AffiliationsHeader, ChildFileInfo, ParentFileInfo, SplitFileResult, SplitReport, WrittenChildFile,
};
use crate::split::repository::IngestConfigRepository;
use crate::storage::ObjectStore;

/// Collaborator failures. File-level problems are not errors: they are
/// recorded on the file and end processing with `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    #[error("Ingest configuration repository failed: {0}")]
    Repository(#[source] e9y_common::E9yError),

    #[error("Object storage failed: {0:#}")]
    Storage(#[source] anyhow::Error),

    #[error("Failed to write child file: {0}")]
    Write(#[from] csv::Error),

    #[error("Failed to flush child file: {0:#}")]
    Flush(#[source] anyhow::Error),
}

pub struct FileSplitService {
    repository: Arc<dyn IngestConfigRepository>,
    files: Arc<dyn ObjectStore>,
    config: SplitConfig,
}

impl FileSplitService {
    pub fn new(repository: Arc<dyn IngestConfigRepository>, files: Arc<dyn ObjectStore>, config: SplitConfig) -> Self {
        Self {
            repository,
            files,
            config,
        }
    }

    /// Split `filename` from the census bucket into child files.
    ///
    /// Returns `Ok(None)` when the file is not a parent file, is
    /// misconfigured or unreadable, or has too many unroutable rows.
    #[instrument(skip(self))]
    pub async fn process_file(&self, filename: &str) -> Result<Option<SplitReport>, SplitError> {
        let Some(parent) = self.initialize_parent_file(filename).await? else {
            return Ok(None);
        };

        let Some(reader) = self.initialize_reader(&parent).await? else {
            return Ok(None);
        };

        let Some(result) = self.split_file(&reader, &parent).await? else {
            return Ok(None);
        };

        self.write_split_files(&parent, result).await.map(Some)
    }

    async fn initialize_parent_file(&self, filename: &str) -> Result<Option<ParentFileInfo>, SplitError> {
        let Some(configuration) = self.repository.sync(filename).await.map_err(SplitError::Repository)? else {
            error!(filename, "Could not find organization associated with file");
            return Ok(None);
        };

        if !(self.config.parent_orgs_enabled && configuration.data_provider) {
            info!(organization_id = configuration.organization_id, "Got non parent file, ignore it");
            return Ok(None);
        }
        info!(organization_id = configuration.organization_id, "Got a parent file");

        let aliases = self
            .repository
            .get_affiliations_header_for_org(configuration.organization_id)
            .await
            .map_err(SplitError::Repository)?;
        let Some(affiliations_header) = AffiliationsHeader::from_aliases(&aliases) else {
            error!(
                organization_id = configuration.organization_id,
                "Parent organization with incorrect affiliations_header."
            );
            return Ok(None);
        };

        let file = self
            .repository
            .create_file(configuration.organization_id, filename)
            .await
            .map_err(SplitError::Repository)?;
        self.repository
            .set_started_at(file.id)
            .await
            .map_err(SplitError::Repository)?;

        Ok(Some(ParentFileInfo {
            file,
            affiliations_header,
        }))
    }

    async fn initialize_reader(&self, parent: &ParentFileInfo) -> Result<Option<CensusReader>, SplitError> {
        let file = &parent.file;
        let data = self
            .files
            .get(&file.name, &self.config.census_bucket)
            .await
            .map_err(SplitError::Storage)?;

        let Some(data) = data.filter(|data| !data.is_empty()) else {
            self.record_file_error(parent, FileError::Missing).await?;
            return Ok(None);
        };

        let decoded = decode(&data);
        let encoding = decoded.encoding_label();
        self.repository
            .set_encoding(file.id, &encoding)
            .await
            .map_err(SplitError::Repository)?;
        debug!(encoding = %encoding, size = data.len(), "Decoded parent file");

        match CensusReader::new(decoded.text, &HeaderMapping::new()) {
            Ok(reader) => Ok(Some(reader)),
            Err(ReaderError::Delimiter) => {
                self.record_file_error(parent, FileError::Delimiter).await?;
                Ok(None)
            },
            Err(ReaderError::Csv(err)) => {
                warn!(error = %err, "Failed to read parent file header");
                self.record_file_error(parent, FileError::Unknown).await?;
                Ok(None)
            },
        }
    }

    async fn split_file(
        &self,
        reader: &CensusReader,
        parent: &ParentFileInfo,
    ) -> Result<Option<SplitFileResult>, SplitError> {
        let file = &parent.file;
        let header = &parent.affiliations_header;
        let mut result = SplitFileResult::new(self.config.review_threshold);

        for batch in reader.batches(self.config.read_batch_size) {
            let batch = match batch {
                Ok(batch) => batch,
                Err(err) => {
                    warn!(error = %err, total_rows = result.total_rows, "Failed to read parent file row");
                    self.record_file_error(parent, FileError::Unknown).await?;
                    return Ok(None);
                },
            };

            for row in &batch {
                let Some(client_id) = row.get(&header.client_id_source) else {
                    result.invalid_rows += 1;
                    continue;
                };
                let customer_id = row.get(&header.customer_id_source).unwrap_or_default();

                let child = self
                    .repository
                    .get_external_org_info(EXTERNAL_SOURCE_FILE, client_id, customer_id, file.organization_id)
                    .await
                    .map_err(SplitError::Repository)?;
                let Some(child) = child else {
                    result.invalid_rows += 1;
                    continue;
                };

                let child_file = match result.child_files.entry(child.organization_id) {
                    std::collections::btree_map::Entry::Occupied(entry) => entry.into_mut(),
                    std::collections::btree_map::Entry::Vacant(entry) => entry.insert(ChildFileInfo {
                        writer: ChildFileWriter::for_row(row)?,
                        organization: child,
                    }),
                };
                child_file.writer.write_row(row)?;
            }

            result.total_rows += batch.len();
            tokio::task::yield_now().await;
        }

        self.repository
            .set_file_count(file.id, result.total_rows, result.valid_rows(), result.invalid_rows)
            .await
            .map_err(SplitError::Repository)?;

        if result.should_review() {
            error!(
                file_id = file.id,
                filename = %file.name,
                organization_id = file.organization_id,
                total_rows = result.total_rows,
                invalid_rows = result.invalid_rows,
                "Too many invalid rows."
            );
            return Ok(None);
        }

        Ok(Some(result))
    }

    async fn write_split_files(&self, parent: &ParentFileInfo, result: SplitFileResult) -> Result<SplitReport, SplitError> {
        let mut child_files = Vec::with_capacity(result.child_files.len());

        for (organization_id, child) in result.child_files {
            let name = child.file_name(&parent.file.name);
            let rows = child.writer.rows();
            let data = child.writer.into_bytes().map_err(SplitError::Flush)?;

            self.files
                .put(&name, &self.config.output_bucket, data)
                .await
                .map_err(SplitError::Storage)?;
            info!(organization_id, name = %name, rows, "Wrote child file");

            child_files.push(WrittenChildFile {
                organization_id,
                name,
                rows,
            });
        }

        info!(
            file_id = parent.file.id,
            total_rows = result.total_rows,
            invalid_rows = result.invalid_rows,
            child_files = child_files.len(),
            "Parent file split"
        );

        Ok(SplitReport {
            file: parent.file.clone(),
            total_rows: result.total_rows,
            invalid_rows: result.invalid_rows,
            child_files,
        })
    }

    async fn record_file_error(&self, parent: &ParentFileInfo, error: FileError) -> Result<(), SplitError> {
        let file = &parent.file;
        self.repository
            .set_error(file.id, error)
            .await
            .map_err(SplitError::Repository)?;
        error!(
            error = ?error,
            filename = %file.name,
            organization_id = file.organization_id,
            "File level error encountered"
        );
        Ok(())
    }
}
