//! Configuration management

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::client_specific::ClientSpecificMode;
use crate::storage::config::StorageConfig;

// ============================================================================
// Split Configuration Constants
// ============================================================================

/// Default bucket census files land in.
pub const DEFAULT_CENSUS_FILE_BUCKET: &str = "e9y-census";

/// Default bucket child files are written to.
pub const DEFAULT_SPLIT_OUTPUT_BUCKET: &str = "e9y-census-split";

/// Rows read per batch while splitting a parent file.
pub const DEFAULT_SPLIT_READ_BATCH_SIZE: usize = 1000;

/// Files whose valid-row ratio is at or below this are held for review.
pub const DEFAULT_SPLIT_REVIEW_THRESHOLD: f64 = 0.95;

// ============================================================================
// Eligibility Configuration Constants
// ============================================================================

/// Records per batch when parsing a census file.
pub const DEFAULT_PARSE_BATCH_SIZE: usize = 10_000;

/// Organizations whose census files never include a date of birth.
pub const DEFAULT_ORGANIZATIONS_NOT_SENDING_DOB: &[i64] = &[620, 685, 686, 696, 2031, 2049, 601, 2475, 484];

// ============================================================================
// Microsoft Configuration Constants
// ============================================================================

pub const DEFAULT_MSFT_URL: &str =
    "https://maveneligibilityservice-uat.azurefd.net/EligibilityApi/EmployeeEligibilityFunction?";

pub const DEFAULT_MSFT_AUTHORITY: &str = "https://login.windows.net/microsoft.onmicrosoft.com";

pub const DEFAULT_MSFT_SCOPE: &str = "api://4d53d7c1-9d3e-4839-b54f-80c6124b05d8/.default";

/// Total timeout for one partner HTTP call.
pub const DEFAULT_CLIENT_CALL_TIMEOUT_SECS: u64 = 5;

/// Outer timeout around a whole verification, including token acquisition.
pub const DEFAULT_CLIENT_VERIFY_TIMEOUT_SECS: u64 = 6;

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub storage: StorageConfig,
    pub split: SplitConfig,
    pub eligibility: EligibilityConfig,
    pub microsoft: MicrosoftSettings,
}

/// File split configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    pub census_bucket: String,
    pub output_bucket: String,
    pub read_batch_size: usize,
    pub review_threshold: f64,
    /// Gate for treating data-provider files as parents to split.
    pub parent_orgs_enabled: bool,
}

/// Row parsing and query configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityConfig {
    /// Organizations whose lookups may be served from the V2 store.
    pub v2_enabled_orgs: BTreeSet<i64>,
    pub organizations_not_sending_dob: BTreeSet<i64>,
    pub parse_batch_size: usize,
}

impl EligibilityConfig {
    pub fn is_v2_enabled(&self, organization_id: i64) -> bool {
        self.v2_enabled_orgs.contains(&organization_id)
    }
}

/// Microsoft client-specific verification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MicrosoftSettings {
    pub url: String,
    pub authority: String,
    pub client_id: String,
    pub scope: String,
    pub mode: ClientSpecificMode,
    pub private_key_path: Option<PathBuf>,
    pub certificate_path: Option<PathBuf>,
    pub call_timeout_secs: u64,
    pub verify_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment and defaults
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Config {
            storage: StorageConfig::from_env()?,
            split: SplitConfig {
                census_bucket: std::env::var("CENSUS_FILE_BUCKET")
                    .unwrap_or_else(|_| DEFAULT_CENSUS_FILE_BUCKET.to_string()),
                output_bucket: std::env::var("SPLIT_OUTPUT_BUCKET")
                    .unwrap_or_else(|_| DEFAULT_SPLIT_OUTPUT_BUCKET.to_string()),
                read_batch_size: std::env::var("SPLIT_READ_BATCH_SIZE")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_SPLIT_READ_BATCH_SIZE),
                review_threshold: std::env::var("SPLIT_REVIEW_THRESHOLD")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_SPLIT_REVIEW_THRESHOLD),
                parent_orgs_enabled: std::env::var("SPLIT_PARENT_ORGS_ENABLED")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(false),
            },
            eligibility: EligibilityConfig {
                v2_enabled_orgs: std::env::var("E9Y_V2_ENABLED_ORGS")
                    .map(|s| parse_id_list(&s))
                    .unwrap_or_default(),
                organizations_not_sending_dob: std::env::var("E9Y_ORGS_NOT_SENDING_DOB")
                    .map(|s| parse_id_list(&s))
                    .unwrap_or_else(|_| DEFAULT_ORGANIZATIONS_NOT_SENDING_DOB.iter().copied().collect()),
                parse_batch_size: std::env::var("E9Y_PARSE_BATCH_SIZE")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_PARSE_BATCH_SIZE),
            },
            microsoft: MicrosoftSettings {
                url: std::env::var("MSFT_URL").unwrap_or_else(|_| DEFAULT_MSFT_URL.to_string()),
                authority: std::env::var("MSFT_AUTHORITY")
                    .unwrap_or_else(|_| DEFAULT_MSFT_AUTHORITY.to_string()),
                client_id: std::env::var("MSFT_CLIENT_ID").unwrap_or_default(),
                scope: std::env::var("MSFT_SCOPE").unwrap_or_else(|_| DEFAULT_MSFT_SCOPE.to_string()),
                mode: std::env::var("MSFT_MODE")
                    .ok()
                    .map(|s| s.parse::<ClientSpecificMode>())
                    .transpose()?
                    .unwrap_or_default(),
                private_key_path: std::env::var("MSFT_PRIVATE_KEY_PATH").ok().map(PathBuf::from),
                certificate_path: std::env::var("MSFT_CERTIFICATE_PATH").ok().map(PathBuf::from),
                call_timeout_secs: std::env::var("MSFT_CALL_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_CLIENT_CALL_TIMEOUT_SECS),
                verify_timeout_secs: std::env::var("MSFT_VERIFY_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_CLIENT_VERIFY_TIMEOUT_SECS),
            },
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.split.census_bucket.is_empty() || self.split.output_bucket.is_empty() {
            anyhow::bail!("Census and split output bucket names cannot be empty");
        }

        if self.split.read_batch_size == 0 {
            anyhow::bail!("Split read batch size must be greater than 0");
        }

        if !(self.split.review_threshold > 0.0 && self.split.review_threshold <= 1.0) {
            anyhow::bail!(
                "Split review threshold must be within (0, 1], got {}",
                self.split.review_threshold
            );
        }

        if self.eligibility.parse_batch_size == 0 {
            anyhow::bail!("Parse batch size must be greater than 0");
        }

        if self.microsoft.verify_timeout_secs <= self.microsoft.call_timeout_secs {
            anyhow::bail!(
                "Verification timeout ({}s) must exceed the call timeout ({}s)",
                self.microsoft.verify_timeout_secs,
                self.microsoft.call_timeout_secs
            );
        }

        if self.microsoft.client_id.is_empty() {
            tracing::warn!("MSFT_CLIENT_ID is not set - Microsoft verification will fail to authenticate");
        }

        Ok(())
    }
}

fn parse_id_list(value: &str) -> BTreeSet<i64> {
    value
        .split(',')
        .filter_map(|id| id.trim().parse().ok())
        .collect()
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            census_bucket: DEFAULT_CENSUS_FILE_BUCKET.to_string(),
            output_bucket: DEFAULT_SPLIT_OUTPUT_BUCKET.to_string(),
            read_batch_size: DEFAULT_SPLIT_READ_BATCH_SIZE,
            review_threshold: DEFAULT_SPLIT_REVIEW_THRESHOLD,
            parent_orgs_enabled: false,
        }
    }
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            v2_enabled_orgs: BTreeSet::new(),
            organizations_not_sending_dob: DEFAULT_ORGANIZATIONS_NOT_SENDING_DOB.iter().copied().collect(),
            parse_batch_size: DEFAULT_PARSE_BATCH_SIZE,
        }
    }
}

impl Default for MicrosoftSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_MSFT_URL.to_string(),
            authority: DEFAULT_MSFT_AUTHORITY.to_string(),
            client_id: String::new(),
            scope: DEFAULT_MSFT_SCOPE.to_string(),
            mode: ClientSpecificMode::default(),
            private_key_path: None,
            certificate_path: None,
            call_timeout_secs: DEFAULT_CLIENT_CALL_TIMEOUT_SECS,
            verify_timeout_secs: DEFAULT_CLIENT_VERIFY_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            split: SplitConfig::default(),
            eligibility: EligibilityConfig::default(),
            microsoft: MicrosoftSettings::default(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.split.read_batch_size, 1000);
        assert!(!config.split.parent_orgs_enabled);
        assert!(config.eligibility.organizations_not_sending_dob.contains(&620));
        assert_eq!(config.microsoft.mode, ClientSpecificMode::OnlyClientCheck);
    }

    #[test]
    fn test_verify_timeout_must_exceed_call_timeout() {
        let mut config = Config::default();
        config.microsoft.verify_timeout_secs = config.microsoft.call_timeout_secs;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_review_threshold_bounds() {
        let mut config = Config::default();
        config.split.review_threshold = 0.0;
        assert!(config.validate().is_err());
        config.split.review_threshold = 1.0;
        assert!(config.validate().is_ok());
        config.split.review_threshold = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_id_list_skips_garbage() {
        let ids = parse_id_list(" 1, 2,abc,,3 ");
        assert_eq!(ids.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_v2_enabled_lookup() {
        let mut eligibility = EligibilityConfig::default();
        eligibility.v2_enabled_orgs.insert(42);
        assert!(eligibility.is_v2_enabled(42));
        assert!(!eligibility.is_v2_enabled(7));
    }
}
