//! E9Y Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared error handling, logging and value coercion for the eligibility
//! workspace.
//!
//! # Overview
//!
//! - **Error Handling**: [`E9yError`] and the [`Result`] alias
//! - **Logging**: [`logging::LogConfig`] and [`logging::init_logging`]
//! - **Converters**: memoized census value coercion in [`convert`]
//!
//! # Example
//!
//! ```no_run
//! use e9y_common::convert;
//!
//! convert::warm_up();
//! let dob = convert::to_date("01/01/50").date();
//! assert_eq!(dob.map(|d| d.to_string()).as_deref(), Some("1950-01-01"));
//! assert_eq!(convert::to_state_code(Some("Oklahoma"), convert::COUNTRY_DEFAULT), "OK");
//! ```

pub mod convert;
pub mod error;
pub mod logging;

pub use error::{E9yError, Result};
