//! Reading census CSV files.
//!
//! Files arrive in whatever encoding and dialect the client's export
//! produced. [`decode`] settles the encoding, [`sniff_delimiter`] picks
//! between comma and tab from the header line, and [`CensusReader`] yields
//! [`CensusRow`]s keyed by sanitized, alias-mapped column names.

use std::collections::HashMap;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use thiserror::Error;

use crate::models::HeaderMapping;

/// Column name the reader uses for values beyond the declared header.
pub const EXTRA_HEADER: &str = "extra";

const DELIMITER_CANDIDATES: &[u8] = &[b',', b'\t'];

#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("Non-standard delimiter used for csv")]
    Delimiter,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// File contents after encoding detection.
#[derive(Debug, Clone)]
pub struct DecodedFile {
    pub encoding: &'static Encoding,
    pub text: String,
}

impl DecodedFile {
    /// Lower-case encoding label, e.g. `utf-8` or `windows-1252`.
    pub fn encoding_label(&self) -> String {
        self.encoding.name().to_ascii_lowercase()
    }
}

/// Detect the encoding of raw file bytes and decode them.
///
/// A byte-order mark wins; otherwise valid UTF-8 is UTF-8 and anything else
/// is treated as windows-1252.
pub fn decode(bytes: &[u8]) -> DecodedFile {
    let encoding = match Encoding::for_bom(bytes) {
        Some((encoding, _)) => encoding,
        None if std::str::from_utf8(bytes).is_ok() => UTF_8,
        None => WINDOWS_1252,
    };
    let (text, _, _) = encoding.decode(bytes);
    DecodedFile {
        encoding,
        text: text.into_owned(),
    }
}

/// Pick the delimiter from the first lines of a file.
///
/// A candidate must split the header into more than one field. Among those,
/// the one whose field count is most consistent over the sample wins.
pub fn sniff_delimiter(content: &str) -> Option<u8> {
    let sample: Vec<&str> = content.lines().take(10).collect();
    let header = sample.first()?;

    let field_count = |line: &str, delimiter: u8| {
        csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(line.as_bytes())
            .records()
            .next()
            .and_then(|record| record.ok())
            .map_or(1, |record| record.len())
    };

    let mut best = None;
    let mut best_score = 0usize;
    for &delimiter in DELIMITER_CANDIDATES {
        let target = field_count(header, delimiter);
        if target <= 1 {
            continue;
        }
        let consistent = sample
            .iter()
            .filter(|line| field_count(line, delimiter) == target)
            .count();
        let score = consistent * target;
        if score > best_score {
            best_score = score;
            best = Some(delimiter);
        }
    }

    best
}

/// Lower-case, trim, strip quotes and embedded line breaks, then apply the
/// organization's aliases. Blank headers are dropped.
pub fn sanitize_headers<'a>(
    fields: impl IntoIterator<Item = &'a str>,
    mapping: &HeaderMapping,
) -> Vec<String> {
    let aliases: HashMap<String, String> = mapping.alias_lookup();
    fields
        .into_iter()
        .map(|field| {
            field
                .to_lowercase()
                .trim()
                .trim_matches(|c| c == '\'' || c == '"')
                .replace(['\r', '\n'], " ")
        })
        .filter(|header| !header.is_empty())
        .map(|header| aliases.get(&header).cloned().unwrap_or(header))
        .collect()
}

/// One data row: values in header order plus any surplus cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CensusRow {
    fields: Vec<(String, Option<String>)>,
    extra: Vec<String>,
}

impl CensusRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, Some(value.into()));
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: Option<String>) {
        self.fields.push((key.into(), value));
    }

    pub fn with_extra(mut self, value: impl Into<String>) -> Self {
        self.extra.push(value.into());
        self
    }

    /// Value for `key`; `None` when the column is absent or the row was
    /// short.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Cells beyond the declared header.
    pub fn extra(&self) -> &[String] {
        &self.extra
    }

    pub fn has_extra_values(&self) -> bool {
        self.extra.iter().any(|value| !value.is_empty())
    }
}

/// A decoded census file ready to iterate.
#[derive(Debug, Clone)]
pub struct CensusReader {
    text: String,
    delimiter: u8,
    headers: Vec<String>,
}

impl CensusReader {
    pub fn new(text: String, mapping: &HeaderMapping) -> Result<Self, ReaderError> {
        let delimiter = sniff_delimiter(&text).ok_or(ReaderError::Delimiter)?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(text.as_bytes());
        let headers = sanitize_headers(reader.headers()?.iter(), mapping);

        Ok(Self {
            text,
            delimiter,
            headers,
        })
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> impl Iterator<Item = Result<CensusRow, csv::Error>> + '_ {
        csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(self.text.as_bytes())
            .into_records()
            .map(move |record| record.map(|record| self.to_row(&record)))
    }

    /// Rows in chunks of `size`; the last chunk holds the remainder.
    pub fn batches(
        &self,
        size: usize,
    ) -> impl Iterator<Item = Result<Vec<CensusRow>, csv::Error>> + '_ {
        let size = size.max(1);
        let mut rows = self.rows();
        std::iter::from_fn(move || {
            let mut batch = Vec::with_capacity(size);
            for row in rows.by_ref().take(size) {
                match row {
                    Ok(row) => batch.push(row),
                    Err(err) => return Some(Err(err)),
                }
            }
            (!batch.is_empty()).then_some(Ok(batch))
        })
    }

    fn to_row(&self, record: &csv::StringRecord) -> CensusRow {
        let mut row = CensusRow::new();
        for (index, header) in self.headers.iter().enumerate() {
            row.push(header.clone(), record.get(index).map(str::to_string));
        }
        row.extra = record
            .iter()
            .skip(self.headers.len())
            .map(str::to_string)
            .collect();
        row
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_detects_encodings() {
        let utf8 = decode("name\nJosé".as_bytes());
        assert_eq!(utf8.encoding_label(), "utf-8");
        assert!(utf8.text.contains("José"));

        let latin = decode(&[b'J', b'o', b's', 0xE9]);
        assert_eq!(latin.encoding_label(), "windows-1252");
        assert_eq!(latin.text, "José");

        let bom = decode(b"\xEF\xBB\xBFa,b");
        assert_eq!(bom.encoding_label(), "utf-8");
        assert_eq!(bom.text, "a,b");
    }

    #[test]
    fn test_sniff_delimiter() {
        assert_eq!(sniff_delimiter("a,b,c\n1,2,3"), Some(b','));
        assert_eq!(sniff_delimiter("a\tb\tc\n1\t2\t3"), Some(b'\t'));
        assert_eq!(sniff_delimiter("a;b;c\n1;2;3"), None);
        assert_eq!(sniff_delimiter(""), None);
    }

    #[test]
    fn test_sanitize_headers_applies_aliases() {
        let mapping = HeaderMapping::new().with_alias("unique_corp_id", "Employee ID");
        let headers = sanitize_headers(
            [" \"Employee ID\" ", "First\nName", "", "DOB"],
            &mapping,
        );
        assert_eq!(headers, vec!["unique_corp_id", "first name", "dob"]);
    }

    #[test]
    fn test_rows_capture_short_and_long_records() {
        let reader = CensusReader::new(
            "a,b\n1,2\n3\n4,5,6\n".to_string(),
            &HeaderMapping::new(),
        )
        .unwrap();
        let rows: Vec<_> = reader.rows().map(Result::unwrap).collect();

        assert_eq!(rows[0].get("a"), Some("1"));
        assert_eq!(rows[0].get("b"), Some("2"));
        assert!(rows[1].contains("b"));
        assert_eq!(rows[1].get("b"), None);
        assert_eq!(rows[2].extra(), ["6".to_string()]);
        assert!(rows[2].has_extra_values());
    }

    #[test]
    fn test_trailing_blank_column_is_not_extra_data() {
        let reader = CensusReader::new("a,b,\n1,2,\n".to_string(), &HeaderMapping::new()).unwrap();
        let row = reader.rows().next().unwrap().unwrap();
        assert_eq!(reader.headers(), ["a".to_string(), "b".to_string()]);
        assert!(!row.has_extra_values());
    }

    #[test]
    fn test_batches_chunk_rows() {
        let mut text = String::from("id,name\n");
        for i in 0..5 {
            text.push_str(&format!("{i},n{i}\n"));
        }
        let reader = CensusReader::new(text, &HeaderMapping::new()).unwrap();
        let sizes: Vec<usize> = reader.batches(2).map(|b| b.unwrap().len()).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
    }

    #[test]
    fn test_unknown_delimiter_is_rejected() {
        let err = CensusReader::new("a|b\n1|2".to_string(), &HeaderMapping::new()).unwrap_err();
        assert!(matches!(err, ReaderError::Delimiter));
    }
}
