//! Census value converters.
//!
//! Every converter is a pure function of its input apart from a bounded LRU
//! cache; bad input yields a sentinel, never an error.

mod date;
mod flags;
mod gender;
mod geo;
pub mod iso3166;
mod ssn;

pub use date::{to_date, DateCoercion, DateInput, DATE_UNKNOWN, DEFAULT_DATE_OF_BIRTH};
pub use flags::{to_beneficiaries_enabled, to_bool, to_can_get_pregnant, FlagInput, BENEFICIARY_PHRASES};
pub use gender::resolve_gender_code;
pub use geo::{to_country_code, to_state_code, COUNTRY_DEFAULT, COUNTRY_UNKNOWN, STATE_UNKNOWN};
pub use ssn::{detect_possible_ssn, SsnCheck};

/// Populate converter caches with the values nearly every file contains.
pub fn warm_up() {
    geo::warm_up();
}
