//! Census file reading and writing.

pub mod reader;
pub mod writer;

pub use reader::{decode, CensusReader, CensusRow, DecodedFile, ReaderError, EXTRA_HEADER};
pub use writer::ChildFileWriter;
