//! Primary keys that look like social security numbers.

use sha2::{Digest, Sha256};

/// Outcome of [`detect_possible_ssn`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SsnCheck {
    /// SHA-256 hex digest to store instead of a hyphenated SSN.
    pub sanitized: Option<String>,
    pub detected: bool,
}

/// Flag primary keys shaped like an SSN and hash the hyphenated form.
///
/// Area must be `[0-8]\d\d` and neither `000` nor `666`, the group must not
/// be `00` and the serial must not be `0000`.
pub fn detect_possible_ssn(pk: &str) -> SsnCheck {
    match ssn_shape(pk) {
        Some(true) => SsnCheck {
            sanitized: Some(hex::encode(Sha256::digest(pk.as_bytes()))),
            detected: true,
        },
        Some(false) => SsnCheck {
            sanitized: None,
            detected: true,
        },
        None => SsnCheck::default(),
    }
}

/// `Some(true)` for `AAA-GG-SSSS`, `Some(false)` for other accepted
/// separator layouts, `None` when the value isn't SSN-shaped.
fn ssn_shape(pk: &str) -> Option<bool> {
    let bytes = pk.as_bytes();
    let area = bytes.get(0..3)?;
    let mut rest = &bytes[3..];

    let first_hyphen = rest.first() == Some(&b'-');
    if first_hyphen {
        rest = &rest[1..];
    }
    let group = rest.get(0..2)?;
    rest = &rest[2..];

    let second_hyphen = rest.first() == Some(&b'-');
    if second_hyphen {
        rest = &rest[1..];
    }
    let serial = rest;

    let digits = |part: &[u8]| part.iter().all(u8::is_ascii_digit);
    if serial.len() != 4 || !digits(area) || !digits(group) || !digits(serial) {
        return None;
    }
    if area[0] > b'8' || area == b"000" || area == b"666" || group == b"00" || serial == b"0000" {
        return None;
    }

    Some(first_hyphen && second_hyphen)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphenated_ssn_is_hashed() {
        let check = detect_possible_ssn("123-45-6789");
        assert!(check.detected);
        let digest = check.sanitized.unwrap_or_default();
        assert_eq!(digest.len(), 64);
        assert_ne!(digest, "123-45-6789");
    }

    #[test]
    fn test_unhyphenated_ssn_is_flagged_only() {
        assert_eq!(
            detect_possible_ssn("123456789"),
            SsnCheck {
                sanitized: None,
                detected: true
            }
        );
        assert!(detect_possible_ssn("123-456789").detected);
    }

    #[test]
    fn test_reserved_ranges_are_not_ssns() {
        for pk in ["000-12-3456", "666-12-3456", "912-34-5678", "123-00-4567", "123-45-0000"] {
            assert_eq!(detect_possible_ssn(pk), SsnCheck::default(), "{pk}");
        }
        for pk in ["abc", "12345678", "1234567890", "EMP-001", ""] {
            assert!(!detect_possible_ssn(pk).detected, "{pk}");
        }
    }
}
