//! Country and state normalization.

use std::num::NonZeroUsize;
use std::sync::LazyLock;

use lru::LruCache;
use parking_lot::Mutex;

use super::iso3166::{self, Country};

pub const STATE_UNKNOWN: &str = "<unknown state>";
pub const COUNTRY_UNKNOWN: &str = "<unknown country>";
pub const COUNTRY_DEFAULT: &str = "USA";

const GEO_CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(100_000) {
    Some(size) => size,
    None => NonZeroUsize::MIN,
};

static COUNTRY_CACHE: LazyLock<Mutex<LruCache<String, &'static str>>> =
    LazyLock::new(|| Mutex::new(LruCache::new(GEO_CACHE_SIZE)));

static STATE_CACHE: LazyLock<Mutex<LruCache<(String, String), &'static str>>> =
    LazyLock::new(|| Mutex::new(LruCache::new(GEO_CACHE_SIZE)));

/// Resolve a country name or code to its ISO alpha-3 code, or
/// [`COUNTRY_UNKNOWN`].
pub fn to_country_code(input: Option<&str>) -> &'static str {
    let Some(raw) = input else {
        return COUNTRY_UNKNOWN;
    };
    if let Some(hit) = COUNTRY_CACHE.lock().get(raw) {
        return *hit;
    }

    let value = raw.trim();
    let code = if value.chars().count() < 2 {
        COUNTRY_UNKNOWN
    } else {
        iso3166::lookup_country(value).map_or(COUNTRY_UNKNOWN, |country| country.alpha_3)
    };

    COUNTRY_CACHE.lock().put(raw.to_string(), code);
    code
}

/// Resolve a state name or code within `country_code` (alpha-3) to its bare
/// subdivision code, or [`STATE_UNKNOWN`]. Unknown countries fall back to
/// [`COUNTRY_DEFAULT`].
pub fn to_state_code(input: Option<&str>, country_code: &str) -> &'static str {
    let Some(raw) = input else {
        return STATE_UNKNOWN;
    };
    let key = (raw.to_string(), country_code.to_string());
    if let Some(hit) = STATE_CACHE.lock().get(&key) {
        return *hit;
    }

    let code = resolve_state(raw, country_code);
    STATE_CACHE.lock().put(key, code);
    code
}

fn resolve_state(raw: &str, country_code: &str) -> &'static str {
    let Some(country) = country_for_states(country_code) else {
        return STATE_UNKNOWN;
    };

    let value = raw.trim();
    let length = value.chars().count();
    if length < 2 {
        return STATE_UNKNOWN;
    }

    let prefixed = || iso3166::lookup_subdivision(&format!("{}-{}", country.alpha_2, value), country.alpha_2);
    let found = match length {
        2 => prefixed(),
        // three-letter suffixes such as GB-ENG or AU-NSW
        3 => iso3166::lookup_subdivision(value, country.alpha_2).or_else(prefixed),
        _ => iso3166::lookup_subdivision(value, country.alpha_2),
    };

    found.map_or(STATE_UNKNOWN, |subdivision| subdivision.short_code())
}

fn country_for_states(country_code: &str) -> Option<&'static Country> {
    iso3166::country_by_alpha_3(country_code).or_else(|| iso3166::country_by_alpha_3(COUNTRY_DEFAULT))
}

/// Pre-populate the caches with the USA aliases and every US subdivision.
pub fn warm_up() {
    for alias in ["US", "USA", "United States", "United States of America"] {
        to_country_code(Some(alias));
    }
    for subdivision in iso3166::subdivisions_of("US") {
        to_state_code(Some(subdivision.code), COUNTRY_DEFAULT);
        to_state_code(Some(subdivision.short_code()), COUNTRY_DEFAULT);
        to_state_code(Some(subdivision.name), COUNTRY_DEFAULT);
    }
}
