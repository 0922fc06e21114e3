//! File split integration tests
//!
//! Drives `FileSplitService` end to end over the in-memory ingest
//! configuration and object store.

use std::sync::Arc;

use e9y_server::config::SplitConfig;
use e9y_server::models::{Configuration, FileError};
use e9y_server::split::{FileSplitService, MemoryIngestConfig};
use e9y_server::storage::MemoryStore;

const PARENT_ID: i64 = 1;
const PARENT_FILE: &str = "provider/census.csv";

struct Harness {
    repository: MemoryIngestConfig,
    files: MemoryStore,
    config: SplitConfig,
}

impl Harness {
    /// A data provider with two child organizations:
    /// `(A, X)` routes to 10 and `(B, Y)` to 20.
    fn new() -> Self {
        let repository = MemoryIngestConfig::new();
        let mut parent = Configuration::new(PARENT_ID, "provider");
        parent.data_provider = true;
        repository.add_configuration(parent);
        repository.add_configuration(Configuration::new(10, "child-a"));
        repository.add_configuration(Configuration::new(20, "child-b"));
        repository.add_header_alias(PARENT_ID, "Group_Number", "client_id");
        repository.add_header_alias(PARENT_ID, "Division", "customer_id");
        repository.add_external_id(PARENT_ID, "A", "X", 10);
        repository.add_external_id(PARENT_ID, "B", "Y", 20);

        Self {
            repository,
            files: MemoryStore::new(),
            config: SplitConfig {
                parent_orgs_enabled: true,
                ..SplitConfig::default()
            },
        }
    }

    fn upload(&self, contents: impl Into<Vec<u8>>) {
        self.files.insert(&self.config.census_bucket, PARENT_FILE, contents);
    }

    fn service(&self) -> FileSplitService {
        FileSplitService::new(
            Arc::new(self.repository.clone()),
            Arc::new(self.files.clone()),
            self.config.clone(),
        )
    }

    fn output(&self, name: &str) -> Option<String> {
        self.files
            .read(&self.config.output_bucket, name)
            .map(|bytes| String::from_utf8(bytes).unwrap())
    }

    fn outputs(&self) -> Vec<String> {
        self.files.names(&self.config.output_bucket)
    }
}

#[tokio::test]
async fn test_rows_are_routed_to_child_files() {
    let harness = Harness::new();
    harness.upload(
        "unique_corp_id,first_name,Group_Number,Division\r\n\
         001,Ann,A,X\r\n\
         002,Bob,B,Y\r\n\
         003,Cy,A,X\r\n",
    );

    let report = harness.service().process_file(PARENT_FILE).await.unwrap().unwrap();

    assert_eq!(report.total_rows, 3);
    assert_eq!(report.invalid_rows, 0);
    assert_eq!(
        report
            .child_files
            .iter()
            .map(|child| (child.organization_id, child.name.as_str(), child.rows))
            .collect::<Vec<_>>(),
        vec![(10, "child-a/census.csv", 2), (20, "child-b/census.csv", 1)]
    );

    assert_eq!(harness.outputs(), vec!["child-a/census.csv", "child-b/census.csv"]);
    assert_eq!(
        harness.output("child-a/census.csv").unwrap(),
        "unique_corp_id,first_name,group_number,division\r\n001,Ann,A,X\r\n003,Cy,A,X\r\n"
    );
    assert_eq!(
        harness.output("child-b/census.csv").unwrap(),
        "unique_corp_id,first_name,group_number,division\r\n002,Bob,B,Y\r\n"
    );

    let file = harness.repository.file(report.file.id).unwrap();
    assert_eq!(file.organization_id, PARENT_ID);
    assert_eq!(file.encoding, "utf-8");
    assert!(file.started_at.is_some());
    assert_eq!((file.raw_count, file.success_count, file.failure_count), (3, 3, 0));
    assert_eq!(file.error, None);
}

#[tokio::test]
async fn test_too_many_invalid_rows_writes_nothing() {
    let harness = Harness::new();
    harness.upload(
        "unique_corp_id,Group_Number,Division\n\
         001,A,X\n\
         002,B,Y\n\
         003,A,X\n\
         004,Q,Z\n",
    );

    let report = harness.service().process_file(PARENT_FILE).await.unwrap();

    assert!(report.is_none());
    assert!(harness.outputs().is_empty());
    let file = &harness.repository.files()[0];
    assert_eq!((file.raw_count, file.success_count, file.failure_count), (4, 3, 1));
}

#[tokio::test]
async fn test_missing_client_id_value_is_invalid() {
    let harness = Harness::new();
    let mut contents = String::from("unique_corp_id\tGroup_Number\tDivision\n");
    for index in 0..30 {
        contents.push_str(&format!("{index:03}\tA\tX\n"));
    }
    contents.push_str("999\n");
    harness.upload(contents);

    let report = harness.service().process_file(PARENT_FILE).await.unwrap().unwrap();

    assert_eq!(report.total_rows, 31);
    assert_eq!(report.invalid_rows, 1);
    assert_eq!(report.child_files.len(), 1);
    assert_eq!(report.child_files[0].rows, 30);
}

#[tokio::test]
async fn test_missing_file_records_error() {
    let harness = Harness::new();

    let report = harness.service().process_file(PARENT_FILE).await.unwrap();

    assert!(report.is_none());
    let files = harness.repository.files();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].error, Some(FileError::Missing));
}

#[tokio::test]
async fn test_empty_file_records_missing() {
    let harness = Harness::new();
    harness.upload(Vec::new());

    assert!(harness.service().process_file(PARENT_FILE).await.unwrap().is_none());
    assert_eq!(harness.repository.files()[0].error, Some(FileError::Missing));
}

#[tokio::test]
async fn test_unsupported_delimiter_records_error() {
    let harness = Harness::new();
    harness.upload("unique_corp_id;Group_Number;Division\n001;A;X\n");

    assert!(harness.service().process_file(PARENT_FILE).await.unwrap().is_none());
    assert_eq!(harness.repository.files()[0].error, Some(FileError::Delimiter));
    assert!(harness.outputs().is_empty());
}

#[tokio::test]
async fn test_non_parent_file_is_ignored() {
    let harness = Harness::new();
    harness.files.insert(
        &harness.config.census_bucket,
        "child-a/census.csv",
        "unique_corp_id,Group_Number,Division\n001,A,X\n",
    );

    assert!(harness
        .service()
        .process_file("child-a/census.csv")
        .await
        .unwrap()
        .is_none());
    assert!(harness.repository.files().is_empty());
}

#[tokio::test]
async fn test_parent_orgs_disabled_ignores_provider() {
    let mut harness = Harness::new();
    harness.config.parent_orgs_enabled = false;
    harness.upload("unique_corp_id,Group_Number,Division\n001,A,X\n");

    assert!(harness.service().process_file(PARENT_FILE).await.unwrap().is_none());
    assert!(harness.repository.files().is_empty());
}

#[tokio::test]
async fn test_unknown_directory_is_ignored() {
    let harness = Harness::new();

    assert!(harness
        .service()
        .process_file("nobody/census.csv")
        .await
        .unwrap()
        .is_none());
    assert!(harness.repository.files().is_empty());
}

#[tokio::test]
async fn test_incomplete_affiliations_header_is_ignored() {
    let harness = Harness::new();
    let mut parent = Configuration::new(2, "provider-two");
    parent.data_provider = true;
    harness.repository.add_configuration(parent);
    harness.repository.add_header_alias(2, "Group_Number", "client_id");
    harness.files.insert(
        &harness.config.census_bucket,
        "provider-two/census.csv",
        "unique_corp_id,Group_Number\n001,A\n",
    );

    assert!(harness
        .service()
        .process_file("provider-two/census.csv")
        .await
        .unwrap()
        .is_none());
    assert!(harness.repository.files().is_empty());
}

#[tokio::test]
async fn test_windows_1252_file_is_rewritten_as_utf8() {
    let harness = Harness::new();
    harness.upload(b"unique_corp_id,first_name,Group_Number,Division\r\n001,Zo\xeb,A,X\r\n".to_vec());

    let report = harness.service().process_file(PARENT_FILE).await.unwrap().unwrap();

    assert_eq!(harness.repository.file(report.file.id).unwrap().encoding, "windows-1252");
    assert_eq!(
        harness.output("child-a/census.csv").unwrap(),
        "unique_corp_id,first_name,group_number,division\r\n001,Zoë,A,X\r\n"
    );
}

#[tokio::test]
async fn test_customer_id_falls_back_to_client_only_mapping() {
    let harness = Harness::new();
    harness.repository.add_external_id(PARENT_ID, "C", "", 30);
    harness.upload("unique_corp_id,Group_Number,Division\n001,C,anything\n002,C,\n");

    let report = harness.service().process_file(PARENT_FILE).await.unwrap().unwrap();

    assert_eq!(report.child_files.len(), 1);
    assert_eq!(report.child_files[0].organization_id, 30);
    assert_eq!(report.child_files[0].name, "30/census.csv");
    assert_eq!(report.child_files[0].rows, 2);
}
