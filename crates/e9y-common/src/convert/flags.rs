//! Boolean-like census columns.

/// A raw value for one of the flag converters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagInput<'a> {
    Text(&'a str),
    Bool(bool),
    Int(i64),
}

impl<'a> From<&'a str> for FlagInput<'a> {
    fn from(value: &'a str) -> Self {
        FlagInput::Text(value)
    }
}

impl From<bool> for FlagInput<'_> {
    fn from(value: bool) -> Self {
        FlagInput::Bool(value)
    }
}

impl From<i64> for FlagInput<'_> {
    fn from(value: i64) -> Self {
        FlagInput::Int(value)
    }
}

const TRUTHY: &[&str] = &["true", "1", "y", "yes"];

/// Family-structure phrases that imply dependents may enroll. Compared with
/// spaces removed and lower-cased.
pub const BENEFICIARY_PHRASES: &[&str] = &[
    "dependents",
    "ee+children",
    "employee+child",
    "employee+child(ren)",
    "employee+child(ren)+domesticpartner",
    "employee+child(ren)+domesticpartner+dpchild(ren)",
    "employee+children",
    "employee+children+dpchildren",
    "employee+dependent",
    "employee+dependent(s)",
    "employee+dependents",
    "employee+domesticpartner",
    "employee+domesticpartner+children",
    "employee+spouse",
    "family",
    "you+child",
    "you+child(ren)",
    "you+children",
    "you+family",
    "you+spouse/dp",
];

const PREGNANCY_SEXES: &[&str] = &["female", "f", "fe"];

fn normalized(input: FlagInput<'_>) -> String {
    match input {
        FlagInput::Text(text) => text.to_lowercase(),
        FlagInput::Bool(value) => value.to_string(),
        FlagInput::Int(value) => value.to_string(),
    }
}

pub fn to_bool<'a>(input: impl Into<FlagInput<'a>>) -> bool {
    TRUTHY.contains(&normalized(input.into()).as_str())
}

pub fn to_beneficiaries_enabled<'a>(input: impl Into<FlagInput<'a>>) -> bool {
    let value = normalized(input.into()).replace(' ', "");
    TRUTHY.contains(&value.as_str()) || BENEFICIARY_PHRASES.contains(&value.as_str())
}

pub fn to_can_get_pregnant<'a>(input: impl Into<FlagInput<'a>>) -> bool {
    PREGNANCY_SEXES.contains(&normalized(input.into()).as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_bool() {
        for value in ["true", "TRUE", "1", "y", "Y", "yes", "Yes"] {
            assert!(to_bool(value), "{value} should be truthy");
        }
        for value in ["false", "0", "n", "no", "", " yes"] {
            assert!(!to_bool(value), "{value} should be falsy");
        }
        assert!(to_bool(true));
        assert!(!to_bool(false));
        assert!(to_bool(1_i64));
        assert!(!to_bool(2_i64));
    }

    #[test]
    fn test_beneficiaries_phrases() {
        assert!(to_beneficiaries_enabled("Employee + Spouse"));
        assert!(to_beneficiaries_enabled("you + spouse/dp"));
        assert!(to_beneficiaries_enabled("FAMILY"));
        assert!(to_beneficiaries_enabled("yes"));
        assert!(to_beneficiaries_enabled(true));
        assert!(!to_beneficiaries_enabled("employee only"));
        assert!(!to_beneficiaries_enabled(""));
    }

    #[test]
    fn test_can_get_pregnant() {
        assert!(to_can_get_pregnant("F"));
        assert!(to_can_get_pregnant("Female"));
        assert!(to_can_get_pregnant("fe"));
        assert!(!to_can_get_pregnant("M"));
        assert!(!to_can_get_pregnant("woman"));
        assert!(!to_can_get_pregnant(1_i64));
    }
}
