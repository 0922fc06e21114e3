//! Date coercion for census values.
//!
//! Census files carry dates in whatever shape the client's export tool
//! produced. [`to_date`] tries a fast `M/D/YY(YY)` match first, then a relaxed
//! parser, and reports the outcome as a [`DateCoercion`] so callers decide how
//! an unparseable value and an explicit `0001-01-01` should be treated.

use std::num::NonZeroUsize;
use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use lru::LruCache;
use parking_lot::Mutex;
use regex::Regex;

/// Sentinel for "absent or unparseable".
pub const DATE_UNKNOWN: NaiveDate = match NaiveDate::from_ymd_opt(1, 1, 1) {
    Some(date) => date,
    None => NaiveDate::MIN,
};

/// Filler for organizations that never send a date of birth.
pub const DEFAULT_DATE_OF_BIRTH: NaiveDate = match NaiveDate::from_ymd_opt(1900, 1, 1) {
    Some(date) => date,
    None => NaiveDate::MIN,
};

const DATE_CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(500_000) {
    Some(size) => size,
    None => NonZeroUsize::MIN,
};

#[allow(clippy::expect_used)]
static COMMON_DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // (M)M[-/. ](D)D[-/. ](YY)YY, anything after the year is ignored
    Regex::new(
        r"^(?P<month>0?[1-9]|1[0-2])[\s/.-](?P<day>0?[1-9]|[12][0-9]|3[01])[\s/.-](?P<year>(?:\d{2}){1,2}).*$",
    )
    .expect("date pattern is valid")
});

static DATE_CACHE: LazyLock<Mutex<LruCache<String, DateCoercion>>> =
    LazyLock::new(|| Mutex::new(LruCache::new(DATE_CACHE_SIZE)));

/// Century boundaries used to expand two-digit years, fixed at first use.
struct Centuries {
    century: i32,
    last_century: i32,
    tens: i32,
}

static CENTURIES: LazyLock<Centuries> = LazyLock::new(|| {
    let year = Utc::now().year();
    let century = year - year.rem_euclid(100);
    Centuries {
        century,
        last_century: century - 100,
        tens: year - century,
    }
});

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%d-%b-%Y",
];

/// A value handed to [`to_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput<'a> {
    Text(&'a str),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(value: &'a str) -> Self {
        DateInput::Text(value)
    }
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(value: NaiveDate) -> Self {
        DateInput::Date(value)
    }
}

impl From<NaiveDateTime> for DateInput<'_> {
    fn from(value: NaiveDateTime) -> Self {
        DateInput::DateTime(value)
    }
}

/// Outcome of a date coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateCoercion {
    /// A real calendar date.
    Date(NaiveDate),
    /// The input could not be parsed.
    Unknown,
    /// The input explicitly said `0001-01-01`, i.e. "we don't know".
    Absent,
}

impl DateCoercion {
    pub fn date(self) -> Option<NaiveDate> {
        match self {
            DateCoercion::Date(date) => Some(date),
            DateCoercion::Unknown | DateCoercion::Absent => None,
        }
    }

    /// Row-parser semantics: unparseable values become [`DATE_UNKNOWN`],
    /// explicit unknowns become `None`.
    pub fn or_sentinel(self) -> Option<NaiveDate> {
        match self {
            DateCoercion::Date(date) => Some(date),
            DateCoercion::Unknown => Some(DATE_UNKNOWN),
            DateCoercion::Absent => None,
        }
    }

    /// Query semantics: anything that isn't a date is `None`.
    pub fn or_null(self) -> Option<NaiveDate> {
        self.date()
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, DateCoercion::Unknown)
    }
}

/// Coerce a census value into a date.
///
/// Dates pass through and datetimes are truncated. Strings go through the
/// fast path and then the relaxed parser; the result is memoized.
pub fn to_date<'a>(input: impl Into<DateInput<'a>>) -> DateCoercion {
    match input.into() {
        DateInput::Date(date) => DateCoercion::Date(date),
        DateInput::DateTime(datetime) => DateCoercion::Date(datetime.date()),
        DateInput::Text(text) => {
            if let Some(hit) = DATE_CACHE.lock().get(text) {
                return *hit;
            }
            let coerced = coerce_text(text);
            DATE_CACHE.lock().put(text.to_string(), coerced);
            coerced
        },
    }
}

fn coerce_text(text: &str) -> DateCoercion {
    if let Some(captures) = COMMON_DATE_PATTERN.captures(text) {
        let (Some(month), Some(day), Some(year)) =
            (captures.name("month"), captures.name("day"), captures.name("year"))
        else {
            return DateCoercion::Unknown;
        };
        let (Ok(month), Ok(day), Ok(mut numeric_year)) = (
            month.as_str().parse::<u32>(),
            day.as_str().parse::<u32>(),
            year.as_str().parse::<i32>(),
        ) else {
            return DateCoercion::Unknown;
        };

        if year.as_str() == "0001" && month == 1 && day == 1 {
            return DateCoercion::Absent;
        }

        if numeric_year < 100 {
            let centuries = &*CENTURIES;
            numeric_year += if numeric_year > centuries.tens {
                centuries.last_century
            } else {
                centuries.century
            };
        }

        return NaiveDate::from_ymd_opt(numeric_year, month, day)
            .map_or(DateCoercion::Unknown, DateCoercion::Date);
    }

    match parse_relaxed(text) {
        Some(date) if date == DATE_UNKNOWN => DateCoercion::Absent,
        Some(date) => DateCoercion::Date(date),
        None => DateCoercion::Unknown,
    }
}

fn parse_relaxed(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if text.len() == 8 && text.bytes().all(|b| b.is_ascii_digit()) {
        let year = text[0..4].parse().ok()?;
        let month = text[4..6].parse().ok()?;
        let day = text[6..8].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|datetime| datetime.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_two_digit_years_pick_a_century() {
        assert_eq!(to_date("01/01/01"), DateCoercion::Date(ymd(2001, 1, 1)));
        assert_eq!(to_date("01/01/50"), DateCoercion::Date(ymd(1950, 1, 1)));
        assert_eq!(to_date("1/01/50 00:00:00"), DateCoercion::Date(ymd(1950, 1, 1)));
    }

    #[test]
    fn test_iso_inputs_use_relaxed_parser() {
        assert_eq!(to_date("2000-01-01"), DateCoercion::Date(ymd(2000, 1, 1)));
        assert_eq!(to_date("2000-01-01 00:00:00"), DateCoercion::Date(ymd(2000, 1, 1)));
        assert_eq!(to_date("2000-01-01T10:30:00Z"), DateCoercion::Date(ymd(2000, 1, 1)));
        assert_eq!(to_date("19991231"), DateCoercion::Date(ymd(1999, 12, 31)));
        assert_eq!(to_date("March 4, 1988"), DateCoercion::Date(ymd(1988, 3, 4)));
    }

    #[test]
    fn test_explicit_unknown_dates_are_absent() {
        assert_eq!(to_date("01/01/0001"), DateCoercion::Absent);
        assert_eq!(to_date("01-01-0001"), DateCoercion::Absent);
        assert_eq!(to_date("0001/01/01"), DateCoercion::Absent);
        assert_eq!(to_date("0001-01-01"), DateCoercion::Absent);
    }

    #[test]
    fn test_four_digit_small_year_is_still_expanded() {
        // "0001" only means unknown on the first of January
        assert_eq!(to_date("02/03/0001"), DateCoercion::Date(ymd(2001, 2, 3)));
    }

    #[test]
    fn test_garbage_is_unknown() {
        assert_eq!(to_date(""), DateCoercion::Unknown);
        assert_eq!(to_date("not a date"), DateCoercion::Unknown);
        assert_eq!(to_date("02/30/1990"), DateCoercion::Unknown);
        assert_eq!(to_date("").or_sentinel(), Some(DATE_UNKNOWN));
        assert_eq!(to_date("").or_null(), None);
    }

    #[test]
    fn test_dates_and_datetimes_pass_through() {
        let date = ymd(1987, 6, 5);
        assert_eq!(to_date(date), DateCoercion::Date(date));
        let datetime = date.and_hms_opt(23, 59, 59).unwrap();
        assert_eq!(to_date(datetime), DateCoercion::Date(date));
    }

    #[test]
    fn test_call_site_semantics() {
        assert_eq!(DateCoercion::Absent.or_sentinel(), None);
        assert_eq!(DateCoercion::Unknown.or_sentinel(), Some(DATE_UNKNOWN));
        assert_eq!(DateCoercion::Absent.or_null(), None);
        assert!(DateCoercion::Unknown.is_unknown());
        assert!(!DateCoercion::Absent.is_unknown());
    }
}
