//! Census row parsing.
//!
//! [`RowParser`] turns a [`CensusRow`](crate::census::CensusRow) into a
//! [`ParsedRecord`]: converters are applied, identity fields validated and
//! addresses normalized. Data defects are accumulated on the record as
//! [`ParseErrorKind`]s and [`ParseWarningKind`]s; parsing itself never fails.

pub mod kinds;
pub mod parser;

pub use kinds::{ParseErrorKind, ParseWarningKind};
pub use parser::{
    is_valid_email, ExternalIdMappings, ParsedBatch, ParsedRecord, RowParser, PRIMARY_KEY,
    SSN_SANITIZED_MARKER,
};
