//! Gender code normalization.

use tracing::info;

const FEMALE: &[&str] = &["F", "FEMALE", "W", "WOMAN"];
const MALE: &[&str] = &["M", "MAN", "MALE"];
const OTHER: &[&str] = &["OTHER", "O", "NON-BINARY", "NONBINARY", "GENDERQUEER", "GENDERFLUID", "X"];
const UNKNOWN: &[&str] = &[
    "UNKNOWN",
    "U",
    "NOT SPECIFIED",
    "NOT DECLARED",
    "UNDECLARED",
    "UNSPECIFIED",
    "D",
    "DECLINE_TO_SELF_IDENTIFY",
    "DECLINE TO SAY",
];

const GENDER_CODES: &[(&str, &[&str])] = &[("F", FEMALE), ("M", MALE), ("O", OTHER), ("U", UNKNOWN)];

/// Map a raw gender column onto `F`, `M`, `O` or `U`.
///
/// Blank input yields an empty string. Values outside the catalogue are
/// logged and returned unchanged.
pub fn resolve_gender_code(raw: &str) -> String {
    let sanitized = raw.trim().to_uppercase();
    if sanitized.is_empty() {
        return String::new();
    }

    for (code, aliases) in GENDER_CODES {
        if aliases.contains(&sanitized.as_str()) {
            return (*code).to_string();
        }
    }

    info!(value = %raw, "Received non-standard gender code value");
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_gender_code() {
        assert_eq!(resolve_gender_code(" female "), "F");
        assert_eq!(resolve_gender_code("Man"), "M");
        assert_eq!(resolve_gender_code("non-binary"), "O");
        assert_eq!(resolve_gender_code("Decline to say"), "U");
        assert_eq!(resolve_gender_code(""), "");
        assert_eq!(resolve_gender_code("Z"), "Z");
    }
}
