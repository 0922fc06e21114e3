//! Ingest configuration records.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `source` value for organizations resolved from census file rows.
pub const EXTERNAL_SOURCE_FILE: &str = "file";

/// Partner integrations that verify members over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientSpecificImplementation {
    Microsoft,
}

impl ClientSpecificImplementation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientSpecificImplementation::Microsoft => "MICROSOFT",
        }
    }
}

/// Per-organization ingest configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub organization_id: i64,
    pub directory_name: String,
    #[serde(default)]
    pub data_provider: bool,
    #[serde(default)]
    pub activated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub terminated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub implementation: Option<ClientSpecificImplementation>,
}

impl Configuration {
    pub fn new(organization_id: i64, directory_name: impl Into<String>) -> Self {
        Self {
            organization_id,
            directory_name: directory_name.into(),
            data_provider: false,
            activated_at: None,
            terminated_at: None,
            implementation: None,
        }
    }

    /// Activated in the past and not yet terminated.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        let activated = self.activated_at.is_some_and(|at| at <= now);
        let terminated = self.terminated_at.is_some_and(|at| at <= now);
        activated && !terminated
    }
}

/// Why a census file could not be processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileError {
    Missing,
    Delimiter,
    Unknown,
}

/// A census file tracked through ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    pub id: i64,
    pub organization_id: i64,
    pub name: String,
    pub encoding: String,
    #[serde(default)]
    pub error: Option<FileError>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub raw_count: usize,
    #[serde(default)]
    pub success_count: usize,
    #[serde(default)]
    pub failure_count: usize,
}

impl File {
    pub fn new(id: i64, organization_id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            organization_id,
            name: name.into(),
            encoding: "utf-8".to_string(),
            error: None,
            started_at: None,
            completed_at: None,
            raw_count: 0,
            success_count: 0,
            failure_count: 0,
        }
    }
}

/// An organization's name for one of our canonical columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderAlias {
    pub organization_id: i64,
    pub header: String,
    pub alias: String,
}

/// Child organization resolved from a parent file's affiliation columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalMavenOrgInfo {
    pub organization_id: i64,
    #[serde(default)]
    pub directory_name: Option<String>,
    #[serde(default)]
    pub activated_at: Option<DateTime<Utc>>,
}

/// Canonical column name to client alias, as configured for one
/// organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderMapping(BTreeMap<String, String>);

impl HeaderMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alias(mut self, header: impl Into<String>, alias: impl Into<String>) -> Self {
        self.0.insert(header.into(), alias.into());
        self
    }

    pub fn from_aliases(aliases: &[HeaderAlias]) -> Self {
        Self(
            aliases
                .iter()
                .map(|alias| (alias.header.clone(), alias.alias.clone()))
                .collect(),
        )
    }

    pub fn alias_for(&self, header: &str) -> Option<&str> {
        self.0.get(header).map(String::as_str)
    }

    /// Lower-cased alias to lower-cased canonical header.
    pub fn alias_lookup(&self) -> HashMap<String, String> {
        self.0
            .iter()
            .map(|(header, alias)| (alias.to_lowercase(), header.to_lowercase()))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_configuration_activity_window() {
        let now = Utc::now();
        let mut config = Configuration::new(1, "acme");
        assert!(!config.is_active(now));

        config.activated_at = Some(now - Duration::days(1));
        assert!(config.is_active(now));

        config.terminated_at = Some(now - Duration::hours(1));
        assert!(!config.is_active(now));

        config.terminated_at = Some(now + Duration::days(30));
        assert!(config.is_active(now));
    }

    #[test]
    fn test_header_mapping_lookup_is_lowercase() {
        let mapping = HeaderMapping::new()
            .with_alias("unique_corp_id", "Employee ID")
            .with_alias("date_of_birth", "DOB");
        let lookup = mapping.alias_lookup();
        assert_eq!(lookup.get("employee id").map(String::as_str), Some("unique_corp_id"));
        assert_eq!(lookup.get("dob").map(String::as_str), Some("date_of_birth"));
        assert_eq!(mapping.alias_for("date_of_birth"), Some("DOB"));
    }

    #[test]
    fn test_file_error_wire_names() {
        assert_eq!(serde_json::to_string(&FileError::Delimiter).unwrap(), "\"delimiter\"");
        assert_eq!(
            serde_json::to_string(&ClientSpecificImplementation::Microsoft).unwrap(),
            "\"MICROSOFT\""
        );
    }
}
