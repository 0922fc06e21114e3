//! ISO-3166 reference tables searched by the country and state converters.

mod subdivisions;

pub use subdivisions::SUBDIVISIONS;

/// One ISO-3166-1 entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub alpha_2: &'static str,
    pub alpha_3: &'static str,
    pub numeric: &'static str,
    pub name: &'static str,
}

/// One ISO-3166-2 entry; `code` is the full `{alpha-2}-{suffix}` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subdivision {
    pub code: &'static str,
    pub name: &'static str,
}

impl Subdivision {
    pub fn country_alpha_2(&self) -> &'static str {
        self.code.split_once('-').map_or(self.code, |(country, _)| country)
    }

    /// The code without its country prefix, e.g. `OK` for `US-OK`.
    pub fn short_code(&self) -> &'static str {
        self.code.rsplit_once('-').map_or(self.code, |(_, suffix)| suffix)
    }
}

const fn country(
    alpha_2: &'static str,
    alpha_3: &'static str,
    numeric: &'static str,
    name: &'static str,
) -> Country {
    Country {
        alpha_2,
        alpha_3,
        numeric,
        name,
    }
}

const fn sub(code: &'static str, name: &'static str) -> Subdivision {
    Subdivision { code, name }
}

/// Official and common names accepted in addition to [`Country::name`].
pub const COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("USA", "United States of America"),
    ("GBR", "United Kingdom of Great Britain and Northern Ireland"),
    ("GBR", "Great Britain"),
    ("BOL", "Bolivia"),
    ("BOL", "Plurinational State of Bolivia"),
    ("BRN", "Brunei"),
    ("COD", "Democratic Republic of the Congo"),
    ("CZE", "Czech Republic"),
    ("FSM", "Micronesia"),
    ("IRN", "Iran"),
    ("IRN", "Islamic Republic of Iran"),
    ("KOR", "South Korea"),
    ("KOR", "Republic of Korea"),
    ("PRK", "North Korea"),
    ("LAO", "Laos"),
    ("MDA", "Moldova"),
    ("PSE", "Palestine"),
    ("RUS", "Russia"),
    ("SYR", "Syria"),
    ("TWN", "Taiwan"),
    ("TZA", "Tanzania"),
    ("TUR", "Turkey"),
    ("VEN", "Venezuela"),
    ("VNM", "Vietnam"),
    ("MEX", "United Mexican States"),
    ("AUS", "Commonwealth of Australia"),
    ("DEU", "Federal Republic of Germany"),
    ("FRA", "French Republic"),
    ("IND", "Republic of India"),
    ("CHN", "People's Republic of China"),
    ("IRL", "Republic of Ireland"),
    ("NLD", "Netherlands"),
    ("NLD", "Kingdom of the Netherlands"),
    ("CIV", "Ivory Coast"),
    ("CPV", "Cape Verde"),
    ("SWZ", "Swaziland"),
    ("MKD", "Macedonia"),
];

pub const COUNTRIES: &[Country] = &[
    country("AF", "AFG", "004", "Afghanistan"),
    country("AX", "ALA", "248", "Åland Islands"),
    country("AL", "ALB", "008", "Albania"),
    country("DZ", "DZA", "012", "Algeria"),
    country("AS", "ASM", "016", "American Samoa"),
    country("AD", "AND", "020", "Andorra"),
    country("AO", "AGO", "024", "Angola"),
    country("AI", "AIA", "660", "Anguilla"),
    country("AQ", "ATA", "010", "Antarctica"),
    country("AG", "ATG", "028", "Antigua and Barbuda"),
    country("AR", "ARG", "032", "Argentina"),
    country("AM", "ARM", "051", "Armenia"),
    country("AW", "ABW", "533", "Aruba"),
    country("AU", "AUS", "036", "Australia"),
    country("AT", "AUT", "040", "Austria"),
    country("AZ", "AZE", "031", "Azerbaijan"),
    country("BS", "BHS", "044", "Bahamas"),
    country("BH", "BHR", "048", "Bahrain"),
    country("BD", "BGD", "050", "Bangladesh"),
    country("BB", "BRB", "052", "Barbados"),
    country("BY", "BLR", "112", "Belarus"),
    country("BE", "BEL", "056", "Belgium"),
    country("BZ", "BLZ", "084", "Belize"),
    country("BJ", "BEN", "204", "Benin"),
    country("BM", "BMU", "060", "Bermuda"),
    country("BT", "BTN", "064", "Bhutan"),
    country("BO", "BOL", "068", "Bolivia, Plurinational State of"),
    country("BQ", "BES", "535", "Bonaire, Sint Eustatius and Saba"),
    country("BA", "BIH", "070", "Bosnia and Herzegovina"),
    country("BW", "BWA", "072", "Botswana"),
    country("BV", "BVT", "074", "Bouvet Island"),
    country("BR", "BRA", "076", "Brazil"),
    country("IO", "IOT", "086", "British Indian Ocean Territory"),
    country("BN", "BRN", "096", "Brunei Darussalam"),
    country("BG", "BGR", "100", "Bulgaria"),
    country("BF", "BFA", "854", "Burkina Faso"),
    country("BI", "BDI", "108", "Burundi"),
    country("CV", "CPV", "132", "Cabo Verde"),
    country("KH", "KHM", "116", "Cambodia"),
    country("CM", "CMR", "120", "Cameroon"),
    country("CA", "CAN", "124", "Canada"),
    country("KY", "CYM", "136", "Cayman Islands"),
    country("CF", "CAF", "140", "Central African Republic"),
    country("TD", "TCD", "148", "Chad"),
    country("CL", "CHL", "152", "Chile"),
    country("CN", "CHN", "156", "China"),
    country("CX", "CXR", "162", "Christmas Island"),
    country("CC", "CCK", "166", "Cocos (Keeling) Islands"),
    country("CO", "COL", "170", "Colombia"),
    country("KM", "COM", "174", "Comoros"),
    country("CG", "COG", "178", "Congo"),
    country("CD", "COD", "180", "Congo, The Democratic Republic of the"),
    country("CK", "COK", "184", "Cook Islands"),
    country("CR", "CRI", "188", "Costa Rica"),
    country("CI", "CIV", "384", "Côte d'Ivoire"),
    country("HR", "HRV", "191", "Croatia"),
    country("CU", "CUB", "192", "Cuba"),
    country("CW", "CUW", "531", "Curaçao"),
    country("CY", "CYP", "196", "Cyprus"),
    country("CZ", "CZE", "203", "Czechia"),
    country("DK", "DNK", "208", "Denmark"),
    country("DJ", "DJI", "262", "Djibouti"),
    country("DM", "DMA", "212", "Dominica"),
    country("DO", "DOM", "214", "Dominican Republic"),
    country("EC", "ECU", "218", "Ecuador"),
    country("EG", "EGY", "818", "Egypt"),
    country("SV", "SLV", "222", "El Salvador"),
    country("GQ", "GNQ", "226", "Equatorial Guinea"),
    country("ER", "ERI", "232", "Eritrea"),
    country("EE", "EST", "233", "Estonia"),
    country("SZ", "SWZ", "748", "Eswatini"),
    country("ET", "ETH", "231", "Ethiopia"),
    country("FK", "FLK", "238", "Falkland Islands (Malvinas)"),
    country("FO", "FRO", "234", "Faroe Islands"),
    country("FJ", "FJI", "242", "Fiji"),
    country("FI", "FIN", "246", "Finland"),
    country("FR", "FRA", "250", "France"),
    country("GF", "GUF", "254", "French Guiana"),
    country("PF", "PYF", "258", "French Polynesia"),
    country("TF", "ATF", "260", "French Southern Territories"),
    country("GA", "GAB", "266", "Gabon"),
    country("GM", "GMB", "270", "Gambia"),
    country("GE", "GEO", "268", "Georgia"),
    country("DE", "DEU", "276", "Germany"),
    country("GH", "GHA", "288", "Ghana"),
    country("GI", "GIB", "292", "Gibraltar"),
    country("GR", "GRC", "300", "Greece"),
    country("GL", "GRL", "304", "Greenland"),
    country("GD", "GRD", "308", "Grenada"),
    country("GP", "GLP", "312", "Guadeloupe"),
    country("GU", "GUM", "316", "Guam"),
    country("GT", "GTM", "320", "Guatemala"),
    country("GG", "GGY", "831", "Guernsey"),
    country("GN", "GIN", "324", "Guinea"),
    country("GW", "GNB", "624", "Guinea-Bissau"),
    country("GY", "GUY", "328", "Guyana"),
    country("HT", "HTI", "332", "Haiti"),
    country("HM", "HMD", "334", "Heard Island and McDonald Islands"),
    country("VA", "VAT", "336", "Holy See (Vatican City State)"),
    country("HN", "HND", "340", "Honduras"),
    country("HK", "HKG", "344", "Hong Kong"),
    country("HU", "HUN", "348", "Hungary"),
    country("IS", "ISL", "352", "Iceland"),
    country("IN", "IND", "356", "India"),
    country("ID", "IDN", "360", "Indonesia"),
    country("IR", "IRN", "364", "Iran, Islamic Republic of"),
    country("IQ", "IRQ", "368", "Iraq"),
    country("IE", "IRL", "372", "Ireland"),
    country("IM", "IMN", "833", "Isle of Man"),
    country("IL", "ISR", "376", "Israel"),
    country("IT", "ITA", "380", "Italy"),
    country("JM", "JAM", "388", "Jamaica"),
    country("JP", "JPN", "392", "Japan"),
    country("JE", "JEY", "832", "Jersey"),
    country("JO", "JOR", "400", "Jordan"),
    country("KZ", "KAZ", "398", "Kazakhstan"),
    country("KE", "KEN", "404", "Kenya"),
    country("KI", "KIR", "296", "Kiribati"),
    country("KP", "PRK", "408", "Korea, Democratic People's Republic of"),
    country("KR", "KOR", "410", "Korea, Republic of"),
    country("KW", "KWT", "414", "Kuwait"),
    country("KG", "KGZ", "417", "Kyrgyzstan"),
    country("LA", "LAO", "418", "Lao People's Democratic Republic"),
    country("LV", "LVA", "428", "Latvia"),
    country("LB", "LBN", "422", "Lebanon"),
    country("LS", "LSO", "426", "Lesotho"),
    country("LR", "LBR", "430", "Liberia"),
    country("LY", "LBY", "434", "Libya"),
    country("LI", "LIE", "438", "Liechtenstein"),
    country("LT", "LTU", "440", "Lithuania"),
    country("LU", "LUX", "442", "Luxembourg"),
    country("MO", "MAC", "446", "Macao"),
    country("MG", "MDG", "450", "Madagascar"),
    country("MW", "MWI", "454", "Malawi"),
    country("MY", "MYS", "458", "Malaysia"),
    country("MV", "MDV", "462", "Maldives"),
    country("ML", "MLI", "466", "Mali"),
    country("MT", "MLT", "470", "Malta"),
    country("MH", "MHL", "584", "Marshall Islands"),
    country("MQ", "MTQ", "474", "Martinique"),
    country("MR", "MRT", "478", "Mauritania"),
    country("MU", "MUS", "480", "Mauritius"),
    country("YT", "MYT", "175", "Mayotte"),
    country("MX", "MEX", "484", "Mexico"),
    country("FM", "FSM", "583", "Micronesia, Federated States of"),
    country("MD", "MDA", "498", "Moldova, Republic of"),
    country("MC", "MCO", "492", "Monaco"),
    country("MN", "MNG", "496", "Mongolia"),
    country("ME", "MNE", "499", "Montenegro"),
    country("MS", "MSR", "500", "Montserrat"),
    country("MA", "MAR", "504", "Morocco"),
    country("MZ", "MOZ", "508", "Mozambique"),
    country("MM", "MMR", "104", "Myanmar"),
    country("NA", "NAM", "516", "Namibia"),
    country("NR", "NRU", "520", "Nauru"),
    country("NP", "NPL", "524", "Nepal"),
    country("NL", "NLD", "528", "Netherlands, Kingdom of the"),
    country("NC", "NCL", "540", "New Caledonia"),
    country("NZ", "NZL", "554", "New Zealand"),
    country("NI", "NIC", "558", "Nicaragua"),
    country("NE", "NER", "562", "Niger"),
    country("NG", "NGA", "566", "Nigeria"),
    country("NU", "NIU", "570", "Niue"),
    country("NF", "NFK", "574", "Norfolk Island"),
    country("MK", "MKD", "807", "North Macedonia"),
    country("MP", "MNP", "580", "Northern Mariana Islands"),
    country("NO", "NOR", "578", "Norway"),
    country("OM", "OMN", "512", "Oman"),
    country("PK", "PAK", "586", "Pakistan"),
    country("PW", "PLW", "585", "Palau"),
    country("PS", "PSE", "275", "Palestine, State of"),
    country("PA", "PAN", "591", "Panama"),
    country("PG", "PNG", "598", "Papua New Guinea"),
    country("PY", "PRY", "600", "Paraguay"),
    country("PE", "PER", "604", "Peru"),
    country("PH", "PHL", "608", "Philippines"),
    country("PN", "PCN", "612", "Pitcairn"),
    country("PL", "POL", "616", "Poland"),
    country("PT", "PRT", "620", "Portugal"),
    country("PR", "PRI", "630", "Puerto Rico"),
    country("QA", "QAT", "634", "Qatar"),
    country("RE", "REU", "638", "Réunion"),
    country("RO", "ROU", "642", "Romania"),
    country("RU", "RUS", "643", "Russian Federation"),
    country("RW", "RWA", "646", "Rwanda"),
    country("BL", "BLM", "652", "Saint Barthélemy"),
    country("SH", "SHN", "654", "Saint Helena, Ascension and Tristan da Cunha"),
    country("KN", "KNA", "659", "Saint Kitts and Nevis"),
    country("LC", "LCA", "662", "Saint Lucia"),
    country("MF", "MAF", "663", "Saint Martin (French part)"),
    country("PM", "SPM", "666", "Saint Pierre and Miquelon"),
    country("VC", "VCT", "670", "Saint Vincent and the Grenadines"),
    country("WS", "WSM", "882", "Samoa"),
    country("SM", "SMR", "674", "San Marino"),
    country("ST", "STP", "678", "Sao Tome and Principe"),
    country("SA", "SAU", "682", "Saudi Arabia"),
    country("SN", "SEN", "686", "Senegal"),
    country("RS", "SRB", "688", "Serbia"),
    country("SC", "SYC", "690", "Seychelles"),
    country("SL", "SLE", "694", "Sierra Leone"),
    country("SG", "SGP", "702", "Singapore"),
    country("SX", "SXM", "534", "Sint Maarten (Dutch part)"),
    country("SK", "SVK", "703", "Slovakia"),
    country("SI", "SVN", "705", "Slovenia"),
    country("SB", "SLB", "090", "Solomon Islands"),
    country("SO", "SOM", "706", "Somalia"),
    country("ZA", "ZAF", "710", "South Africa"),
    country("GS", "SGS", "239", "South Georgia and the South Sandwich Islands"),
    country("SS", "SSD", "728", "South Sudan"),
    country("ES", "ESP", "724", "Spain"),
    country("LK", "LKA", "144", "Sri Lanka"),
    country("SD", "SDN", "729", "Sudan"),
    country("SR", "SUR", "740", "Suriname"),
    country("SJ", "SJM", "744", "Svalbard and Jan Mayen"),
    country("SE", "SWE", "752", "Sweden"),
    country("CH", "CHE", "756", "Switzerland"),
    country("SY", "SYR", "760", "Syrian Arab Republic"),
    country("TW", "TWN", "158", "Taiwan, Province of China"),
    country("TJ", "TJK", "762", "Tajikistan"),
    country("TZ", "TZA", "834", "Tanzania, United Republic of"),
    country("TH", "THA", "764", "Thailand"),
    country("TL", "TLS", "626", "Timor-Leste"),
    country("TG", "TGO", "768", "Togo"),
    country("TK", "TKL", "772", "Tokelau"),
    country("TO", "TON", "776", "Tonga"),
    country("TT", "TTO", "780", "Trinidad and Tobago"),
    country("TN", "TUN", "788", "Tunisia"),
    country("TR", "TUR", "792", "Türkiye"),
    country("TM", "TKM", "795", "Turkmenistan"),
    country("TC", "TCA", "796", "Turks and Caicos Islands"),
    country("TV", "TUV", "798", "Tuvalu"),
    country("UG", "UGA", "800", "Uganda"),
    country("UA", "UKR", "804", "Ukraine"),
    country("AE", "ARE", "784", "United Arab Emirates"),
    country("GB", "GBR", "826", "United Kingdom"),
    country("US", "USA", "840", "United States"),
    country("UM", "UMI", "581", "United States Minor Outlying Islands"),
    country("UY", "URY", "858", "Uruguay"),
    country("UZ", "UZB", "860", "Uzbekistan"),
    country("VU", "VUT", "548", "Vanuatu"),
    country("VE", "VEN", "862", "Venezuela, Bolivarian Republic of"),
    country("VN", "VNM", "704", "Viet Nam"),
    country("VG", "VGB", "092", "Virgin Islands, British"),
    country("VI", "VIR", "850", "Virgin Islands, U.S."),
    country("WF", "WLF", "876", "Wallis and Futuna"),
    country("EH", "ESH", "732", "Western Sahara"),
    country("YE", "YEM", "887", "Yemen"),
    country("ZM", "ZMB", "894", "Zambia"),
    country("ZW", "ZWE", "716", "Zimbabwe"),
];

pub fn country_by_alpha_3(alpha_3: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|country| country.alpha_3 == alpha_3)
}

/// Case-insensitive exact lookup against codes, numeric code, name and
/// the accepted aliases.
pub fn lookup_country(value: &str) -> Option<&'static Country> {
    let lowered = value.to_lowercase();
    let eq = |candidate: &str| candidate.to_lowercase() == lowered;

    COUNTRIES
        .iter()
        .find(|country| {
            eq(country.alpha_2) || eq(country.alpha_3) || eq(country.numeric) || eq(country.name)
        })
        .or_else(|| {
            COUNTRY_ALIASES
                .iter()
                .find(|(_, alias)| eq(alias))
                .and_then(|(alpha_3, _)| country_by_alpha_3(alpha_3))
        })
}

/// Subdivision lookup. Full codes (`US-OK`) match any country; names only
/// match within `alpha_2`.
pub fn lookup_subdivision(value: &str, alpha_2: &str) -> Option<&'static Subdivision> {
    SUBDIVISIONS
        .iter()
        .find(|subdivision| subdivision.code.eq_ignore_ascii_case(value))
        .or_else(|| {
            let lowered = value.to_lowercase();
            subdivisions_of(alpha_2).find(|subdivision| subdivision.name.to_lowercase() == lowered)
        })
}

pub fn subdivisions_of(alpha_2: &str) -> impl Iterator<Item = &'static Subdivision> + '_ {
    SUBDIVISIONS
        .iter()
        .filter(move |subdivision| subdivision.country_alpha_2() == alpha_2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_country_codes_are_unique() {
        let alpha_3: HashSet<_> = COUNTRIES.iter().map(|c| c.alpha_3).collect();
        let alpha_2: HashSet<_> = COUNTRIES.iter().map(|c| c.alpha_2).collect();
        assert_eq!(alpha_3.len(), COUNTRIES.len());
        assert_eq!(alpha_2.len(), COUNTRIES.len());
    }

    #[test]
    fn test_aliases_point_at_known_countries() {
        for (alpha_3, alias) in COUNTRY_ALIASES {
            assert!(country_by_alpha_3(alpha_3).is_some(), "{alias} -> {alpha_3}");
        }
    }

    #[test]
    fn test_every_subdivision_belongs_to_a_country() {
        for subdivision in SUBDIVISIONS {
            let alpha_2 = subdivision.country_alpha_2();
            assert!(
                COUNTRIES.iter().any(|c| c.alpha_2 == alpha_2),
                "{}",
                subdivision.code
            );
        }
        assert_eq!(subdivisions_of("US").count(), 57);
    }

    #[test]
    fn test_lookup_subdivision_scopes_names() {
        assert_eq!(lookup_subdivision("georgia", "US").map(|s| s.code), Some("US-GA"));
        assert!(lookup_subdivision("Ontario", "US").is_none());
        assert_eq!(lookup_subdivision("ca-on", "US").map(|s| s.code), Some("CA-ON"));
    }

    #[test]
    fn test_subdivisions_cover_every_region() {
        assert_eq!(lookup_subdivision("bayern", "DE").map(|s| s.code), Some("DE-BY"));
        assert_eq!(lookup_subdivision("GB-ENG", "GB").map(|s| s.name), Some("England"));
        assert_eq!(lookup_subdivision("Mahārāshtra", "IN").map(|s| s.code), Some("IN-MH"));
        assert!(lookup_subdivision("Bayern", "AT").is_none());
        assert_eq!(subdivisions_of("DE").count(), 16);

        let covered: HashSet<_> = SUBDIVISIONS.iter().map(|s| s.country_alpha_2()).collect();
        assert!(covered.len() > 190, "{}", covered.len());
    }

    #[test]
    fn test_subdivision_codes_are_unique() {
        let codes: HashSet<_> = SUBDIVISIONS.iter().map(|s| s.code).collect();
        assert_eq!(codes.len(), SUBDIVISIONS.len());
    }
}
