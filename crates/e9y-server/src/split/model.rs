//! Split bookkeeping.

use std::collections::BTreeMap;

use crate::census::ChildFileWriter;
use crate::config::DEFAULT_SPLIT_REVIEW_THRESHOLD;
use crate::models::{ExternalMavenOrgInfo, File, HeaderAlias};

/// Canonical name of the column identifying the child organization.
pub const AFFILIATION_CLIENT_ID: &str = "client_id";

/// Canonical name of the column qualifying `client_id`.
pub const AFFILIATION_CUSTOMER_ID: &str = "customer_id";

/// Columns of a parent file that identify the child organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffiliationsHeader {
    pub client_id_source: String,
    pub customer_id_source: String,
}

impl AffiliationsHeader {
    /// Both affiliation columns must be configured. Column names are
    /// matched the way the census reader normalizes headers.
    pub fn from_aliases(aliases: &[HeaderAlias]) -> Option<Self> {
        let mut client_id_source = None;
        let mut customer_id_source = None;
        for alias in aliases {
            match alias.alias.as_str() {
                AFFILIATION_CLIENT_ID => client_id_source = Some(alias.header.trim().to_lowercase()),
                AFFILIATION_CUSTOMER_ID => customer_id_source = Some(alias.header.trim().to_lowercase()),
                _ => {},
            }
        }

        match (client_id_source, customer_id_source) {
            (Some(client_id_source), Some(customer_id_source))
                if !client_id_source.is_empty() && !customer_id_source.is_empty() =>
            {
                Some(Self {
                    client_id_source,
                    customer_id_source,
                })
            },
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParentFileInfo {
    pub file: File,
    pub affiliations_header: AffiliationsHeader,
}

/// Rows bound for one child organization.
#[derive(Debug)]
pub struct ChildFileInfo {
    pub organization: ExternalMavenOrgInfo,
    pub writer: ChildFileWriter,
}

impl ChildFileInfo {
    /// `{directory}/{parent file basename}`, where the directory is the
    /// child's configured directory name or, failing that, its id.
    pub fn file_name(&self, parent_name: &str) -> String {
        let basename = parent_name.rsplit('/').next().unwrap_or(parent_name);
        match self.organization.directory_name.as_deref() {
            Some(directory) if !directory.is_empty() => format!("{}/{}", directory.trim_end_matches('/'), basename),
            _ => format!("{}/{}", self.organization.organization_id, basename),
        }
    }
}

/// Result of routing every row of a parent file.
#[derive(Debug)]
pub struct SplitFileResult {
    pub total_rows: usize,
    /// Rows whose affiliation did not resolve to a child organization.
    pub invalid_rows: usize,
    pub child_files: BTreeMap<i64, ChildFileInfo>,
    pub review_threshold: f64,
}

impl Default for SplitFileResult {
    fn default() -> Self {
        Self::new(DEFAULT_SPLIT_REVIEW_THRESHOLD)
    }
}

impl SplitFileResult {
    pub fn new(review_threshold: f64) -> Self {
        Self {
            total_rows: 0,
            invalid_rows: 0,
            child_files: BTreeMap::new(),
            review_threshold,
        }
    }

    pub fn valid_rows(&self) -> usize {
        self.total_rows.saturating_sub(self.invalid_rows)
    }

    /// True when the valid-row ratio is at or below the threshold. A file
    /// without rows always needs review.
    pub fn should_review(&self) -> bool {
        if self.total_rows == 0 {
            return true;
        }
        let valid_rate = self.valid_rows() as f64 / self.total_rows as f64;
        valid_rate <= self.review_threshold
    }
}

/// A child file written to object storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenChildFile {
    pub organization_id: i64,
    pub name: String,
    pub rows: usize,
}

/// Outcome of a parent file that was split and written.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitReport {
    pub file: File,
    pub total_rows: usize,
    pub invalid_rows: usize,
    pub child_files: Vec<WrittenChildFile>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::census::CensusRow;

    fn alias(header: &str, alias: &str) -> HeaderAlias {
        HeaderAlias {
            organization_id: 1,
            header: header.into(),
            alias: alias.into(),
        }
    }

    #[test]
    fn test_affiliations_header_requires_both_columns() {
        let header = AffiliationsHeader::from_aliases(&[
            alias("Group_Number", "client_id"),
            alias(" division", "customer_id"),
            alias("dob", "date_of_birth"),
        ])
        .unwrap();
        assert_eq!(header.client_id_source, "group_number");
        assert_eq!(header.customer_id_source, "division");

        assert!(AffiliationsHeader::from_aliases(&[alias("group_number", "client_id")]).is_none());
        assert!(AffiliationsHeader::from_aliases(&[]).is_none());
    }

    #[test]
    fn test_should_review_threshold() {
        let mut result = SplitFileResult::default();
        assert!(result.should_review());

        result.total_rows = 100;
        result.invalid_rows = 5;
        assert!(result.should_review());

        result.invalid_rows = 4;
        assert!(!result.should_review());

        result.total_rows = 4;
        result.invalid_rows = 1;
        assert!(result.should_review());
    }

    #[test]
    fn test_child_file_name() {
        let row = CensusRow::new().with("a", "1");
        let mut child = ChildFileInfo {
            organization: ExternalMavenOrgInfo {
                organization_id: 7,
                directory_name: Some("acme".into()),
                activated_at: None,
            },
            writer: ChildFileWriter::for_row(&row).unwrap(),
        };
        assert_eq!(child.file_name("parent-dir/census_2024.csv"), "acme/census_2024.csv");

        child.organization.directory_name = None;
        assert_eq!(child.file_name("census_2024.csv"), "7/census_2024.csv");
    }
}
