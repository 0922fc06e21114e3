//! Parent census file splitting.
//!
//! A data provider sends one file covering many client organizations. Each
//! row names its organization through two affiliation columns; the
//! [`FileSplitService`] routes rows to per-organization child files and
//! writes them where regular ingestion picks them up.

pub mod model;
pub mod repository;
pub mod service;

pub use model::{
    AffiliationsHeader, ChildFileInfo, ParentFileInfo, SplitFileResult, SplitReport, WrittenChildFile,
    AFFILIATION_CLIENT_ID, AFFILIATION_CUSTOMER_ID,
};
pub use repository::{directory_of, IngestConfigRepository, MemoryIngestConfig};
pub use service::{FileSplitService, SplitError};
