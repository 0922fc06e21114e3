// Row-level parse outcomes

use serde::{Deserialize, Serialize};

/// Defects that keep a row out of the member store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    DobMissing,
    DobParsingError,
    DobUnknown,
    DobInFuture,
    UniqueCorpIdMissing,
    EmailParsingError,
    RequiredPiiMissing,
    RowContainsExtraFields,
    ClientIdNotConfigured,
}

impl ParseErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseErrorKind::DobMissing => "dob_missing",
            ParseErrorKind::DobParsingError => "dob_parsing_error",
            ParseErrorKind::DobUnknown => "dob_unknown",
            ParseErrorKind::DobInFuture => "dob_in_future",
            ParseErrorKind::UniqueCorpIdMissing => "unique_corp_id_missing",
            ParseErrorKind::EmailParsingError => "email_parsing_error",
            ParseErrorKind::RequiredPiiMissing => "required_pii_missing",
            ParseErrorKind::RowContainsExtraFields => "row_contains_extra_fields",
            ParseErrorKind::ClientIdNotConfigured => "client_id_not_configured",
        }
    }

    /// Operator-facing description stored with the rejected row.
    pub fn message(&self) -> &'static str {
        match self {
            ParseErrorKind::DobMissing => "Missing DOB.",
            ParseErrorKind::DobParsingError => "Couldn't parse DOB.",
            ParseErrorKind::DobUnknown => "Unknown date provided - 0001-01-01",
            ParseErrorKind::DobInFuture => "DOB in future.",
            ParseErrorKind::UniqueCorpIdMissing => "Row missing 'unique_corp_id'.",
            ParseErrorKind::EmailParsingError => "Bad email.",
            ParseErrorKind::RequiredPiiMissing => "Missing required PII.",
            ParseErrorKind::RowContainsExtraFields => "Row contains extra fields.",
            ParseErrorKind::ClientIdNotConfigured => {
                "Missing organization_external_id mapping for a client_id in row originating from a data provider"
            },
        }
    }
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Oddities worth surfacing that do not block ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseWarningKind {
    NullEmailProvided,
    UnknownState,
    UnknownCountry,
    PkResemblesSsn,
}

impl ParseWarningKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseWarningKind::NullEmailProvided => "null_email_provided",
            ParseWarningKind::UnknownState => "unknown_state",
            ParseWarningKind::UnknownCountry => "unknown_country",
            ParseWarningKind::PkResemblesSsn => "pk_resembles_ssn",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ParseWarningKind::NullEmailProvided => "Null email provided.",
            ParseWarningKind::UnknownState => "Unknown State.",
            ParseWarningKind::UnknownCountry => "Unknown Country.",
            ParseWarningKind::PkResemblesSsn => "PK resembles SSN",
        }
    }
}

impl std::fmt::Display for ParseWarningKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_as_str() {
        for kind in [
            ParseErrorKind::DobMissing,
            ParseErrorKind::DobUnknown,
            ParseErrorKind::RowContainsExtraFields,
            ParseErrorKind::ClientIdNotConfigured,
        ] {
            assert_eq!(serde_json::to_string(&kind).unwrap(), format!("\"{}\"", kind.as_str()));
        }
        assert_eq!(
            serde_json::to_string(&ParseWarningKind::PkResemblesSsn).unwrap(),
            "\"pk_resembles_ssn\""
        );
    }

    #[test]
    fn test_display_uses_message() {
        assert_eq!(ParseErrorKind::DobInFuture.to_string(), "DOB in future.");
        assert_eq!(ParseWarningKind::UnknownState.to_string(), "Unknown State.");
    }
}
