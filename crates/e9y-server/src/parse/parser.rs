//! Normalization and validation of census rows.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::LazyLock;

use chrono::{NaiveDate, Utc};
use e9y_common::convert::{
    detect_possible_ssn, resolve_gender_code, to_beneficiaries_enabled, to_bool,
    to_can_get_pregnant, to_country_code, to_date, to_state_code, COUNTRY_DEFAULT,
    COUNTRY_UNKNOWN, DATE_UNKNOWN, DEFAULT_DATE_OF_BIRTH, STATE_UNKNOWN,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{error, info};

use crate::census::{CensusReader, CensusRow};
use crate::config::DEFAULT_ORGANIZATIONS_NOT_SENDING_DOB;
use crate::models::{Configuration, File};
use crate::parse::kinds::{ParseErrorKind, ParseWarningKind};

pub const PRIMARY_KEY: &str = "unique_corp_id";

/// Marker set on records whose primary key was a hashed hyphenated SSN.
pub const SSN_SANITIZED_MARKER: &str = "id-resembling-hyphenated-ssn";

const PRIMARY_PII_KEYS: &[&str] = &["date_of_birth", "email"];
const SECONDARY_PII_KEYS: &[&str] = &["date_of_birth", "work_state", "first_name", "last_name"];
const CLIENT_SPEC_PII_KEYS: &[&str] = &["date_of_birth", "unique_corp_id"];
const NO_DOB_PII_KEYS: &[&str] = &["email", "first_name", "last_name", "unique_corp_id"];

const HEALTH_PLAN_FIELDS: &[&str] = &[
    "maternity_indicator_date",
    "maternity_indicator",
    "delivery_indicator_date",
    "delivery_indicator",
    "fertility_indicator_date",
    "fertility_indicator",
    "p_and_p_indicator",
    "client_name",
];

/// Local part of at most 64 characters, dotted atoms, and a domain of
/// dotted labels ending in letters. Length limits are checked separately.
#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[\w!#$%&'*+/=?`{|}~^-]+(?:\.[\w!#$%&'*+/=?`{|}~^-]+)*@(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]+$",
    )
    .expect("email pattern is valid")
});

#[derive(Debug, Clone, Copy)]
enum Converter {
    Beneficiaries,
    CanGetPregnant,
    Flag,
    DateOfBirth,
    OptionalDate,
    Country,
}

/// Source column, converter, and target column.
const CONVERTERS: &[(&str, Converter, &str)] = &[
    ("beneficiaries_enabled", Converter::Beneficiaries, "beneficiaries_enabled"),
    ("gender", Converter::CanGetPregnant, "can_get_pregnant"),
    ("wallet_enabled", Converter::Flag, "wallet_enabled"),
    ("cobra_coverage", Converter::Flag, "cobra_coverage"),
    ("company_couple", Converter::Flag, "company_couple"),
    ("date_of_birth", Converter::DateOfBirth, "date_of_birth"),
    ("employee_start_date", Converter::OptionalDate, "employee_start_date"),
    ("employee_eligibility_date", Converter::OptionalDate, "employee_eligibility_date"),
    ("country", Converter::Country, "country"),
];

pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let local_len = local.chars().count();
    let domain_len = domain.chars().count();
    (1..=64).contains(&local_len) && (2..=255).contains(&domain_len) && EMAIL_PATTERN.is_match(email)
}

/// External client identifiers sent by data providers, mapped to our
/// organizations.
#[derive(Debug, Clone, Default)]
pub struct ExternalIdMappings {
    composite: HashMap<(String, String), i64>,
    by_client: HashMap<String, i64>,
}

impl ExternalIdMappings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(mut self, client_id: impl Into<String>, organization_id: i64) -> Self {
        self.by_client.insert(client_id.into(), organization_id);
        self
    }

    pub fn with_composite(
        mut self,
        client_id: impl Into<String>,
        customer_id: impl Into<String>,
        organization_id: i64,
    ) -> Self {
        self.composite
            .insert((client_id.into(), customer_id.into()), organization_id);
        self
    }

    /// Composite key first, then the client id alone.
    pub fn resolve(&self, client_id: Option<&str>, customer_id: Option<&str>) -> Option<i64> {
        let client_id = client_id.filter(|c| !c.is_empty())?;
        customer_id
            .filter(|c| !c.is_empty())
            .and_then(|customer| {
                self.composite
                    .get(&(client_id.to_string(), customer.to_string()))
                    .copied()
            })
            .or_else(|| self.by_client.get(client_id).copied())
    }
}

/// One parsed census row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedRecord {
    pub file_id: i64,
    pub organization_id: i64,
    #[serde(default)]
    pub data_provider_organization_id: Option<i64>,
    pub record: Map<String, Value>,
    pub errors: Vec<ParseErrorKind>,
    pub warnings: Vec<ParseWarningKind>,
    #[serde(default)]
    pub gender_code: String,
}

impl ParsedRecord {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.record.get(key).and_then(Value::as_str)
    }
}

/// A batch of parsed rows split by outcome.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedBatch {
    pub valid: Vec<ParsedRecord>,
    pub errors: Vec<ParsedRecord>,
}

/// Parses rows of one census file.
#[derive(Debug)]
pub struct RowParser {
    file_id: i64,
    organization_id: i64,
    data_provider: bool,
    external_id_mappings: ExternalIdMappings,
    custom_attributes: BTreeMap<String, String>,
    organizations_not_sending_dob: BTreeSet<i64>,
    today: NaiveDate,
    logged_without_dob: HashSet<i64>,
    parse_line_no: u64,
}

impl RowParser {
    pub fn new(file: &File, configuration: &Configuration) -> Self {
        Self {
            file_id: file.id,
            organization_id: file.organization_id,
            data_provider: configuration.data_provider,
            external_id_mappings: ExternalIdMappings::default(),
            custom_attributes: BTreeMap::new(),
            organizations_not_sending_dob: DEFAULT_ORGANIZATIONS_NOT_SENDING_DOB.iter().copied().collect(),
            today: Utc::now().date_naive(),
            logged_without_dob: HashSet::new(),
            parse_line_no: 0,
        }
    }

    pub fn with_external_id_mappings(mut self, mappings: ExternalIdMappings) -> Self {
        self.external_id_mappings = mappings;
        self
    }

    /// Source column to custom attribute name.
    pub fn with_custom_attributes(mut self, attributes: BTreeMap<String, String>) -> Self {
        self.custom_attributes = attributes;
        self
    }

    pub fn with_organizations_not_sending_dob(mut self, organizations: BTreeSet<i64>) -> Self {
        self.organizations_not_sending_dob = organizations;
        self
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Parse a whole file in batches, numbering rows as they go.
    pub fn parse_batches<'a>(
        &'a mut self,
        reader: &'a CensusReader,
        batch_size: usize,
    ) -> impl Iterator<Item = Result<ParsedBatch, csv::Error>> + 'a {
        reader.batches(batch_size).map(move |batch| match batch {
            Ok(rows) => Ok(self.parse_batch(&rows)),
            Err(err) => Err(err),
        })
    }

    pub fn parse_batch(&mut self, rows: &[CensusRow]) -> ParsedBatch {
        let mut batch = ParsedBatch::default();
        for row in rows {
            let mut parsed = self.parse_row(row);
            self.parse_line_no += 1;
            parsed
                .record
                .insert("parse_line_no".to_string(), Value::from(self.parse_line_no));
            if parsed.is_valid() {
                batch.valid.push(parsed);
            } else {
                batch.errors.push(parsed);
            }
        }
        batch
    }

    pub fn parse_row(&mut self, row: &CensusRow) -> ParsedRecord {
        let mut parsed = ParsedRecord {
            file_id: self.file_id,
            organization_id: self.organization_id,
            data_provider_organization_id: None,
            record: row
                .iter()
                .map(|(key, value)| (key.to_string(), value.map_or(Value::Null, Value::from)))
                .collect(),
            errors: Vec::new(),
            warnings: Vec::new(),
            gender_code: String::new(),
        };

        if row.has_extra_values() {
            parsed.errors.push(ParseErrorKind::RowContainsExtraFields);
            return parsed;
        }

        let client_id = row.get("client_id");
        let customer_id = row.get("customer_id");
        if self.data_provider {
            match self.external_id_mappings.resolve(client_id, customer_id) {
                Some(organization_id) => {
                    parsed.organization_id = organization_id;
                    parsed.data_provider_organization_id = Some(self.organization_id);
                },
                None => {
                    error!(
                        file_id = self.file_id,
                        organization_id = self.organization_id,
                        external_client_id = ?client_id,
                        external_customer_id = ?customer_id,
                        "Received a record from data provider that did not have a mapped external client_id"
                    );
                    parsed.errors.push(ParseErrorKind::ClientIdNotConfigured);
                    return parsed;
                },
            }
        }

        let record = &mut parsed.record;
        let mut dob = None;
        for &(source, converter, target) in CONVERTERS {
            if !row.contains(source) {
                continue;
            }
            let raw = row.get(source).unwrap_or_default();
            let value = match converter {
                Converter::Beneficiaries => Value::Bool(to_beneficiaries_enabled(raw)),
                Converter::CanGetPregnant => Value::Bool(to_can_get_pregnant(raw)),
                Converter::Flag => Value::Bool(to_bool(raw)),
                Converter::DateOfBirth => {
                    let coerced = to_date(raw).or_sentinel();
                    dob = Some(coerced);
                    coerced.map_or(Value::Null, |date| Value::from(date.to_string()))
                },
                Converter::OptionalDate => to_date(raw)
                    .or_null()
                    .map_or(Value::Null, |date| Value::from(date.to_string())),
                Converter::Country => Value::from(to_country_code(Some(raw))),
            };
            record.insert(target.to_string(), value);
        }

        self.extract_custom_attributes(record);

        if let Some(email) = record.get("email").map(|v| v.as_str().unwrap_or_default().trim().to_string()) {
            if email.is_empty() {
                parsed.warnings.push(ParseWarningKind::NullEmailProvided);
            } else if !is_valid_email(&email) {
                parsed.errors.push(ParseErrorKind::EmailParsingError);
            }
            record.insert("email".to_string(), Value::from(email));
        }

        let skips_dob = self.organizations_not_sending_dob.contains(&parsed.organization_id);
        if skips_dob {
            if self.logged_without_dob.insert(parsed.organization_id) {
                info!(
                    file_id = self.file_id,
                    organization_id = parsed.organization_id,
                    "Received a file from an organization that doesn't send date_of_birth"
                );
            }
            if !record.contains_key("date_of_birth") {
                record.insert(
                    "date_of_birth".to_string(),
                    Value::from(DEFAULT_DATE_OF_BIRTH.to_string()),
                );
            }
        } else {
            match dob {
                None => parsed.errors.push(ParseErrorKind::DobMissing),
                Some(Some(date)) if date == DATE_UNKNOWN => {
                    parsed.errors.push(ParseErrorKind::DobParsingError);
                    let raw = row.get("date_of_birth").map_or(Value::Null, Value::from);
                    record.insert("date_of_birth".to_string(), raw);
                },
                Some(None) => {
                    parsed.errors.push(ParseErrorKind::DobUnknown);
                    record.insert(
                        "date_of_birth".to_string(),
                        Value::from(DEFAULT_DATE_OF_BIRTH.to_string()),
                    );
                },
                Some(Some(date)) if date > self.today => {
                    parsed.errors.push(ParseErrorKind::DobInFuture);
                },
                Some(Some(_)) => {},
            }
        }

        let pk = record
            .get(PRIMARY_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .trim()
            .to_string();
        if pk.is_empty() {
            parsed.errors.push(ParseErrorKind::UniqueCorpIdMissing);
        }
        let ssn = detect_possible_ssn(&pk);
        if ssn.detected {
            parsed.warnings.push(ParseWarningKind::PkResemblesSsn);
        }
        let sanitized = ssn.sanitized.is_some();
        record.insert(PRIMARY_KEY.to_string(), Value::from(ssn.sanitized.unwrap_or(pk)));

        let has_all = |keys: &[&str]| keys.iter().all(|key| record.contains_key(*key));
        let has_pii = if skips_dob {
            has_all(NO_DOB_PII_KEYS)
        } else {
            has_all(SECONDARY_PII_KEYS) || has_all(PRIMARY_PII_KEYS) || has_all(CLIENT_SPEC_PII_KEYS)
        };
        if !has_pii {
            parsed.errors.push(ParseErrorKind::RequiredPiiMissing);
        }

        Self::normalize_address(row, record, &mut parsed.warnings);

        if let Some(dependent_id) = record.get("dependent_id").map(|v| v.as_str().unwrap_or_default().trim().to_string()) {
            record.insert("dependent_id".to_string(), Value::from(dependent_id));
        }

        if sanitized {
            record.insert(SSN_SANITIZED_MARKER.to_string(), Value::Bool(true));
        }

        parsed.gender_code = resolve_gender_code(row.get("gender").unwrap_or_default());

        if !parsed.errors.is_empty() {
            error!(
                file_id = self.file_id,
                organization_id = self.organization_id,
                external_client_id = ?client_id,
                external_customer_id = ?customer_id,
                errors = ?parsed.errors,
                "Errors encountered during parsing"
            );
        }

        parsed
    }

    /// Move configured columns into `custom_attributes`, and health plan
    /// indicators into `custom_attributes.health_plan_values`.
    fn extract_custom_attributes(&self, record: &mut Map<String, Value>) {
        let mut custom = Map::new();
        for (column, attribute) in &self.custom_attributes {
            custom.insert(attribute.clone(), record.remove(column).unwrap_or(Value::Null));
        }

        let mut health_plan = Map::new();
        for &field in HEALTH_PLAN_FIELDS {
            match record.remove(field) {
                Some(value) if !value.is_null() => {
                    health_plan.insert(field.to_string(), value);
                },
                _ => {},
            }
        }
        if !health_plan.is_empty() {
            custom.insert("health_plan_values".to_string(), Value::Object(health_plan));
        }

        record.insert("custom_attributes".to_string(), Value::Object(custom));
    }

    fn normalize_address(row: &CensusRow, record: &mut Map<String, Value>, warnings: &mut Vec<ParseWarningKind>) {
        let non_empty = |record: &Map<String, Value>, key: &str| {
            record
                .get(key)
                .and_then(Value::as_str)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        let mut country_code = COUNTRY_DEFAULT.to_string();
        if let Some(country) = non_empty(record, "country") {
            if country == COUNTRY_UNKNOWN {
                warnings.push(ParseWarningKind::UnknownCountry);
                let raw = row.get("country").map_or(Value::Null, Value::from);
                record.insert("country".to_string(), raw);
            } else {
                country_code = country;
            }
        }

        let state = non_empty(record, "state").map(|raw| {
            let code = to_state_code(Some(&raw), &country_code);
            if code == STATE_UNKNOWN {
                warnings.push(ParseWarningKind::UnknownState);
            } else {
                record.insert("state".to_string(), Value::from(code));
            }
            code
        });

        if let Some(raw) = non_empty(record, "work_state").filter(|raw| Some(raw.as_str()) != state) {
            let mut code = to_state_code(Some(&raw), &country_code);
            if code == STATE_UNKNOWN {
                if let Some(state) = state {
                    code = state;
                }
            }
            if code == STATE_UNKNOWN {
                warnings.push(ParseWarningKind::UnknownState);
            } else {
                record.insert("work_state".to_string(), Value::from(code));
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn parser() -> RowParser {
        let file = File::new(10, 1, "acme/census.csv");
        let configuration = Configuration::new(1, "acme");
        RowParser::new(&file, &configuration).with_today(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    fn base_row() -> CensusRow {
        CensusRow::new()
            .with("unique_corp_id", " 12345 ")
            .with("date_of_birth", "01/02/1980")
            .with("email", " jane@example.com ")
            .with("first_name", "Jane")
            .with("last_name", "Doe")
    }

    #[test]
    fn test_valid_row() {
        let parsed = parser().parse_row(&base_row());
        assert!(parsed.is_valid(), "{:?}", parsed.errors);
        assert_eq!(parsed.get_str("date_of_birth"), Some("1980-01-02"));
        assert_eq!(parsed.get_str("unique_corp_id"), Some("12345"));
        assert_eq!(parsed.get_str("email"), Some("jane@example.com"));
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn test_extra_fields_stop_parsing() {
        let parsed = parser().parse_row(&base_row().with_extra("surplus"));
        assert_eq!(parsed.errors, vec![ParseErrorKind::RowContainsExtraFields]);
        assert_eq!(parsed.get_str("date_of_birth"), Some("01/02/1980"));
    }

    #[test]
    fn test_dob_errors() {
        let mut parser = parser();

        let missing = CensusRow::new().with("unique_corp_id", "1").with("email", "a@b.co");
        assert!(parser.parse_row(&missing).errors.contains(&ParseErrorKind::DobMissing));

        let garbled = base_row().with("date_of_birth", "not a date");
        let parsed = parser.parse_row(&garbled);
        assert!(parsed.errors.contains(&ParseErrorKind::DobParsingError));
        assert_eq!(parsed.get_str("date_of_birth"), Some("not a date"));

        let unknown = base_row().with("date_of_birth", "0001-01-01");
        let parsed = parser.parse_row(&unknown);
        assert!(parsed.errors.contains(&ParseErrorKind::DobUnknown));
        assert_eq!(parsed.get_str("date_of_birth"), Some("1900-01-01"));

        let future = base_row().with("date_of_birth", "2030-01-01");
        assert!(parser.parse_row(&future).errors.contains(&ParseErrorKind::DobInFuture));
    }

    #[test]
    fn test_email_checks() {
        let mut parser = parser();
        let blank = parser.parse_row(&base_row().with("email", "   "));
        assert_eq!(blank.warnings, vec![ParseWarningKind::NullEmailProvided]);
        assert!(blank.is_valid());

        let bad = parser.parse_row(&base_row().with("email", "jane@@example"));
        assert!(bad.errors.contains(&ParseErrorKind::EmailParsingError));

        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("no-at-sign.example.com"));
        assert!(!is_valid_email(&format!("{}@example.com", "a".repeat(65))));
        assert!(!is_valid_email("a@b"));
    }

    #[test]
    fn test_missing_primary_key_and_pii() {
        let row = CensusRow::new().with("unique_corp_id", "  ").with("first_name", "Jane");
        let parsed = parser().parse_row(&row);
        assert!(parsed.errors.contains(&ParseErrorKind::UniqueCorpIdMissing));
        assert!(parsed.errors.contains(&ParseErrorKind::RequiredPiiMissing));
    }

    #[test]
    fn test_hyphenated_ssn_is_hashed() {
        let parsed = parser().parse_row(&base_row().with("unique_corp_id", "123-45-6789"));
        assert_eq!(parsed.warnings, vec![ParseWarningKind::PkResemblesSsn]);
        let pk = parsed.get_str("unique_corp_id").unwrap();
        assert_eq!(pk.len(), 64);
        assert_eq!(parsed.record.get(SSN_SANITIZED_MARKER), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_address_normalization() {
        let row = base_row()
            .with("country", "United States")
            .with("state", "Oklahoma")
            .with("work_state", "Atlantis");
        let parsed = parser().parse_row(&row);
        assert_eq!(parsed.get_str("country"), Some("USA"));
        assert_eq!(parsed.get_str("state"), Some("OK"));
        assert_eq!(parsed.get_str("work_state"), Some("OK"));
        assert!(parsed.warnings.is_empty());

        let row = base_row().with("country", "Narnia").with("state", "Nowhere");
        let parsed = parser().parse_row(&row);
        assert_eq!(parsed.get_str("country"), Some("Narnia"));
        assert_eq!(
            parsed.warnings,
            vec![ParseWarningKind::UnknownCountry, ParseWarningKind::UnknownState]
        );
    }

    #[test]
    fn test_converters_and_gender() {
        let row = base_row()
            .with("gender", "Female")
            .with("wallet_enabled", "Yes")
            .with("employee_start_date", "garbage");
        let parsed = parser().parse_row(&row);
        assert_eq!(parsed.record.get("can_get_pregnant"), Some(&Value::Bool(true)));
        assert_eq!(parsed.record.get("wallet_enabled"), Some(&Value::Bool(true)));
        assert_eq!(parsed.record.get("employee_start_date"), Some(&Value::Null));
        assert_eq!(parsed.gender_code, "F");
    }

    #[test]
    fn test_custom_attributes_and_health_plan_values() {
        let row = base_row()
            .with("employee_tier", "gold")
            .with("maternity_indicator", "Y")
            .with("client_name", "Acme");
        let attributes = BTreeMap::from([("employee_tier".to_string(), "tier".to_string())]);
        let parsed = parser().with_custom_attributes(attributes).parse_row(&row);

        assert!(!parsed.record.contains_key("employee_tier"));
        assert!(!parsed.record.contains_key("maternity_indicator"));
        let custom = parsed.record.get("custom_attributes").unwrap();
        assert_eq!(custom["tier"], "gold");
        assert_eq!(custom["health_plan_values"]["maternity_indicator"], "Y");
        assert_eq!(custom["health_plan_values"]["client_name"], "Acme");
    }

    #[test]
    fn test_organization_not_sending_dob() {
        let file = File::new(10, 620, "no-dob/census.csv");
        let configuration = Configuration::new(620, "no-dob");
        let mut parser = RowParser::new(&file, &configuration);

        let row = CensusRow::new()
            .with("unique_corp_id", "1")
            .with("email", "a@b.co")
            .with("first_name", "A")
            .with("last_name", "B");
        let parsed = parser.parse_row(&row);
        assert!(parsed.is_valid(), "{:?}", parsed.errors);
        assert_eq!(parsed.get_str("date_of_birth"), Some("1900-01-01"));

        let row = CensusRow::new().with("unique_corp_id", "1").with("email", "a@b.co");
        assert!(parser.parse_row(&row).errors.contains(&ParseErrorKind::RequiredPiiMissing));
    }

    #[test]
    fn test_data_provider_rows_are_retargeted() {
        let file = File::new(10, 1, "provider/census.csv");
        let mut configuration = Configuration::new(1, "provider");
        configuration.data_provider = true;
        let mappings = ExternalIdMappings::new()
            .with_client("c1", 7)
            .with_composite("c1", "cu1", 8);
        let mut parser = RowParser::new(&file, &configuration).with_external_id_mappings(mappings);

        let parsed = parser.parse_row(&base_row().with("client_id", "c1").with("customer_id", "cu1"));
        assert_eq!(parsed.organization_id, 8);
        assert_eq!(parsed.data_provider_organization_id, Some(1));

        let parsed = parser.parse_row(&base_row().with("client_id", "c1").with("customer_id", "zz"));
        assert_eq!(parsed.organization_id, 7);

        let parsed = parser.parse_row(&base_row().with("client_id", "unknown"));
        assert_eq!(parsed.errors, vec![ParseErrorKind::ClientIdNotConfigured]);
    }

    #[test]
    fn test_parse_batch_numbers_lines() {
        let rows = vec![base_row(), base_row().with("date_of_birth", ""), base_row()];
        let batch = parser().parse_batch(&rows);
        assert_eq!(batch.valid.len(), 2);
        assert_eq!(batch.errors.len(), 1);
        assert_eq!(batch.errors[0].record["parse_line_no"], 2);
        assert_eq!(batch.valid[1].record["parse_line_no"], 3);
    }
}
