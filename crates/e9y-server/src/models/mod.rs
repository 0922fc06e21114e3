//! Domain records shared by the ingest and verification paths.

pub mod ingest;
pub mod member;

pub use ingest::{
    ClientSpecificImplementation, Configuration, ExternalMavenOrgInfo, File, FileError, HeaderAlias,
    HeaderMapping, EXTERNAL_SOURCE_FILE,
};
pub use member::{Member, Version};
