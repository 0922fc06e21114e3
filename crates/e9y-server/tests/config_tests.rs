//! Configuration and credential loading tests
//!
//! Tests touching process environment variables run serially.

mod common;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serial_test::serial;
use tempfile::TempDir;

use common::FakeMemberStore;
use e9y_server::client_specific::microsoft::{self, ClientCredential, CredentialError};
use e9y_server::client_specific::{ClientSpecificMode, ClientSpecificService};
use e9y_server::config::{Config, MicrosoftSettings};
use e9y_server::models::ClientSpecificImplementation;

const KEY: &str = include_str!("fixtures/msft_private_key.pem");
const CERT: &str = include_str!("fixtures/msft_certificate.pem");

const ENV_KEYS: &[&str] = &[
    "SPLIT_PARENT_ORGS_ENABLED",
    "SPLIT_READ_BATCH_SIZE",
    "E9Y_V2_ENABLED_ORGS",
    "MSFT_MODE",
    "MSFT_CLIENT_ID",
];

fn clear_env() {
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
}

fn write_credentials(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let key_path = dir.join("private_key.pem");
    let cert_path = dir.join("certificate.pem");
    std::fs::write(&key_path, KEY).unwrap();
    std::fs::write(&cert_path, CERT).unwrap();
    (key_path, cert_path)
}

#[test]
#[serial]
fn test_load_reads_environment() {
    clear_env();
    std::env::set_var("SPLIT_PARENT_ORGS_ENABLED", "true");
    std::env::set_var("SPLIT_READ_BATCH_SIZE", "250");
    std::env::set_var("E9Y_V2_ENABLED_ORGS", "7, 9,junk");
    std::env::set_var("MSFT_MODE", "fallback_to_census");
    std::env::set_var("MSFT_CLIENT_ID", "client");

    let config = Config::load().unwrap();
    clear_env();

    assert!(config.split.parent_orgs_enabled);
    assert_eq!(config.split.read_batch_size, 250);
    assert!(config.eligibility.is_v2_enabled(7));
    assert!(config.eligibility.is_v2_enabled(9));
    assert!(!config.eligibility.is_v2_enabled(8));
    assert_eq!(config.microsoft.mode, ClientSpecificMode::FallbackToCensus);
    assert_eq!(config.microsoft.client_id, "client");
}

#[test]
#[serial]
fn test_load_rejects_unknown_mode() {
    clear_env();
    std::env::set_var("MSFT_MODE", "sometimes");

    let result = Config::load();
    clear_env();

    assert!(result.unwrap_err().to_string().contains("sometimes"));
}

#[test]
#[serial]
fn test_load_rejects_zero_batch_size() {
    clear_env();
    std::env::set_var("SPLIT_READ_BATCH_SIZE", "0");

    let result = Config::load();
    clear_env();

    assert!(result.is_err());
}

#[test]
fn test_credential_loads_from_files() {
    let dir = TempDir::new().unwrap();
    let (key_path, cert_path) = write_credentials(dir.path());

    let credential = ClientCredential::load(&key_path, &cert_path).unwrap();
    assert_eq!(credential.thumbprint(), "5f47d64f6bab7c05c151ed85945ce94aff84a425");
}

#[test]
fn test_missing_credential_file_names_the_path() {
    let dir = TempDir::new().unwrap();
    let (key_path, _) = write_credentials(dir.path());
    let missing = dir.path().join("absent.pem");

    let err = ClientCredential::load(&key_path, &missing).err().unwrap();
    assert!(matches!(&err, CredentialError::Read { path, .. } if path == &missing));
    assert!(err.to_string().contains("absent.pem"));
}

#[test]
fn test_caller_from_settings() {
    let dir = TempDir::new().unwrap();
    let (key_path, cert_path) = write_credentials(dir.path());
    let settings = MicrosoftSettings {
        url: "https://partner.example.com/EligibilityApi/Check".into(),
        authority: "https://login.example.com/tenant/".into(),
        client_id: "client".into(),
        private_key_path: Some(key_path),
        certificate_path: Some(cert_path),
        ..MicrosoftSettings::default()
    };

    let caller = microsoft::caller(&settings).unwrap();

    assert_eq!(caller.url().path(), "/EligibilityApi/Check");
    assert_eq!(
        caller.protocol().tokens().token_endpoint(),
        "https://login.example.com/tenant/oauth2/v2.0/token"
    );
    assert_eq!(
        caller.protocol().tokens().exchange_timeout(),
        Duration::from_secs(settings.verify_timeout_secs)
    );
}

#[test]
fn test_service_from_config_registers_microsoft() {
    let dir = TempDir::new().unwrap();
    let (key_path, cert_path) = write_credentials(dir.path());
    let mut config = Config::default();
    config.microsoft.mode = ClientSpecificMode::OnlyCensus;
    config.microsoft.private_key_path = Some(key_path);
    config.microsoft.certificate_path = Some(cert_path);

    let service = ClientSpecificService::from_config(&config, Arc::new(FakeMemberStore::new())).unwrap();

    assert_eq!(
        service.mode(ClientSpecificImplementation::Microsoft),
        Some(ClientSpecificMode::OnlyCensus)
    );
}
