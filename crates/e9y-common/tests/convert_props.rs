//! Property tests for the census converters.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::{Datelike, NaiveDate};
use e9y_common::convert::{self, DateCoercion, COUNTRY_DEFAULT, COUNTRY_UNKNOWN, STATE_UNKNOWN};
use proptest::prelude::*;

fn recoerce(result: DateCoercion) -> DateCoercion {
    match result {
        DateCoercion::Date(date) => convert::to_date(date),
        other => other,
    }
}

proptest! {
    #[test]
    fn to_date_is_idempotent_for_arbitrary_text(input in "\\PC{0,24}") {
        let once = convert::to_date(input.as_str());
        prop_assert_eq!(recoerce(once), once);
    }

    #[test]
    fn to_date_is_idempotent_for_date_shaped_text(
        input in "[0-9]{1,2}[/.\\- ][0-9]{1,2}[/.\\- ]([0-9]{2}|[0-9]{4})( 00:00:00)?"
    ) {
        let once = convert::to_date(input.as_str());
        prop_assert_eq!(recoerce(once), once);

        // the ISO rendering of a parsed date parses back to the same date
        if let DateCoercion::Date(date) = once {
            let rendered = date.format("%Y-%m-%d").to_string();
            prop_assert_eq!(convert::to_date(rendered.as_str()), DateCoercion::Date(date));
        }
    }

    #[test]
    fn iso_dates_round_trip(year in 1000i32..=9999, ordinal in 1u32..=365) {
        let date = NaiveDate::from_yo_opt(year, ordinal).unwrap();
        let rendered = date.to_string();
        prop_assert_eq!(convert::to_date(rendered.as_str()), DateCoercion::Date(date));
    }

    #[test]
    fn two_digit_years_land_within_a_century_of_now(month in 1u32..=12, day in 1u32..=28, yy in 0u32..=99) {
        let input = format!("{month:02}/{day:02}/{yy:02}");
        let date = convert::to_date(input.as_str()).date().unwrap();
        let this_year = chrono::Utc::now().year();
        prop_assert!(date.year() <= this_year);
        prop_assert!(date.year() > this_year - 100);
        prop_assert_eq!(date.year().rem_euclid(100) as u32, yy);
    }

    #[test]
    fn converters_never_panic(input in "\\PC{0,16}") {
        let _ = convert::to_bool(input.as_str());
        let _ = convert::to_beneficiaries_enabled(input.as_str());
        let _ = convert::to_can_get_pregnant(input.as_str());
        let country = convert::to_country_code(Some(input.as_str()));
        prop_assert!(country == COUNTRY_UNKNOWN || country.len() == 3);
        let state = convert::to_state_code(Some(input.as_str()), COUNTRY_DEFAULT);
        prop_assert!(state == STATE_UNKNOWN || state.len() <= 3);
    }
}
