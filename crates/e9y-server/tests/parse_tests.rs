//! Census parsing integration tests
//!
//! Raw file bytes through decoding, header mapping and row parsing.

use chrono::NaiveDate;

use e9y_server::census::{decode, CensusReader};
use e9y_server::models::{Configuration, File, HeaderMapping};
use e9y_server::parse::{ExternalIdMappings, ParseErrorKind, ParsedRecord, RowParser};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn parse_all(parser: &mut RowParser, reader: &CensusReader, batch_size: usize) -> (Vec<ParsedRecord>, Vec<ParsedRecord>) {
    let mut valid = Vec::new();
    let mut errors = Vec::new();
    for batch in parser.parse_batches(reader, batch_size) {
        let batch = batch.unwrap();
        valid.extend(batch.valid);
        errors.extend(batch.errors);
    }
    (valid, errors)
}

#[test]
fn test_tab_delimited_file_with_aliases() {
    let bytes = b"Employee ID\tFirst_Name\tLast_Name\tEmail\tDOB\n\
        E1\tAda\tLovelace\tada@example.com\t12/10/1990\n\
        E2\tBob\tSmith\tnot-an-email\t1985-03-04\n\
        E3\tCy\tYoung\tcy@example.com\t2099-01-01\n\
        \tDee\tJones\tdee@example.com\t1970-07-08\n\
        E5\tEve\tStone\teve@example.com\t1991-01-01\tsurplus\n";

    let decoded = decode(bytes);
    assert_eq!(decoded.encoding_label(), "utf-8");

    let mapping = HeaderMapping::new()
        .with_alias("unique_corp_id", "Employee ID")
        .with_alias("date_of_birth", "DOB");
    let reader = CensusReader::new(decoded.text, &mapping).unwrap();
    assert_eq!(reader.delimiter(), b'\t');
    assert_eq!(
        reader.headers(),
        ["unique_corp_id", "first_name", "last_name", "email", "date_of_birth"]
    );

    let file = File::new(7, 1, "acme/census.tsv");
    let mut parser = RowParser::new(&file, &Configuration::new(1, "acme")).with_today(today());
    let (valid, errors) = parse_all(&mut parser, &reader, 2);

    assert_eq!(valid.len(), 1);
    let ada = &valid[0];
    assert_eq!(ada.file_id, 7);
    assert_eq!(ada.organization_id, 1);
    assert_eq!(ada.get_str("unique_corp_id"), Some("E1"));
    assert_eq!(ada.get_str("date_of_birth"), Some("1990-12-10"));
    assert_eq!(ada.record.get("parse_line_no"), Some(&serde_json::json!(1)));

    let error_kinds: Vec<(Option<&str>, &[ParseErrorKind])> = errors
        .iter()
        .map(|record| (record.get_str("first_name"), record.errors.as_slice()))
        .collect();
    assert_eq!(
        error_kinds,
        vec![
            (Some("Bob"), &[ParseErrorKind::EmailParsingError][..]),
            (Some("Cy"), &[ParseErrorKind::DobInFuture][..]),
            (Some("Dee"), &[ParseErrorKind::UniqueCorpIdMissing][..]),
            (Some("Eve"), &[ParseErrorKind::RowContainsExtraFields][..]),
        ]
    );
    assert_eq!(errors[3].record.get("parse_line_no"), Some(&serde_json::json!(5)));
}

#[test]
fn test_data_provider_rows_resolve_child_organization() {
    let bytes = "unique_corp_id,client_id,customer_id,date_of_birth,email\r\n\
        1,A,,1980-01-01,a@example.com\r\n\
        2,B,north,1981-01-01,b@example.com\r\n\
        3,Z,,1982-01-01,c@example.com\r\n";

    let reader = CensusReader::new(decode(bytes.as_bytes()).text, &HeaderMapping::new()).unwrap();
    let mut configuration = Configuration::new(1, "provider");
    configuration.data_provider = true;
    let file = File::new(3, 1, "provider/census.csv");
    let mappings = ExternalIdMappings::new()
        .with_client("A", 10)
        .with_composite("B", "north", 20);
    let mut parser = RowParser::new(&file, &configuration)
        .with_external_id_mappings(mappings)
        .with_today(today());

    let (valid, errors) = parse_all(&mut parser, &reader, 100);

    assert_eq!(
        valid
            .iter()
            .map(|record| (record.organization_id, record.data_provider_organization_id))
            .collect::<Vec<_>>(),
        vec![(10, Some(1)), (20, Some(1))]
    );
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].organization_id, 1);
    assert_eq!(errors[0].errors, vec![ParseErrorKind::ClientIdNotConfigured]);
}

#[test]
fn test_windows_1252_names_survive_parsing() {
    let bytes = b"unique_corp_id,first_name,last_name,date_of_birth,email\r\n9,Ren\xe9e,Mu\xf1oz,1975-05-05,renee@example.com\r\n";

    let decoded = decode(bytes);
    assert_eq!(decoded.encoding_label(), "windows-1252");
    let reader = CensusReader::new(decoded.text, &HeaderMapping::new()).unwrap();
    let file = File::new(1, 1, "acme/census.csv");
    let mut parser = RowParser::new(&file, &Configuration::new(1, "acme")).with_today(today());

    let (valid, errors) = parse_all(&mut parser, &reader, 10);

    assert!(errors.is_empty());
    assert_eq!(valid[0].get_str("first_name"), Some("Renée"));
    assert_eq!(valid[0].get_str("last_name"), Some("Muñoz"));
}
