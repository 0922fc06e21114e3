//! Buffered CSV output for child census files.

use crate::census::reader::CensusRow;

/// An in-memory CSV file whose header is fixed by the first row written.
#[derive(Debug)]
pub struct ChildFileWriter {
    header: Vec<String>,
    writer: csv::Writer<Vec<u8>>,
    rows: usize,
}

impl ChildFileWriter {
    /// Start a file with the keys of `first` as its header.
    pub fn for_row(first: &CensusRow) -> csv::Result<Self> {
        let header: Vec<String> = first.keys().map(str::to_string).collect();
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(Vec::new());
        writer.write_record(&header)?;
        Ok(Self {
            header,
            writer,
            rows: 0,
        })
    }

    /// Append a row in header order. Cells missing from a short row, or
    /// columns the row lacks, are written as empty strings, so the child
    /// file does not distinguish them from cells that were present but
    /// empty.
    pub fn write_row(&mut self, row: &CensusRow) -> csv::Result<()> {
        let values = self.header.iter().map(|key| row.get(key).unwrap_or_default());
        self.writer.write_record(values)?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn into_bytes(self) -> anyhow::Result<Vec<u8>> {
        self.writer
            .into_inner()
            .map_err(|err| anyhow::anyhow!("Failed to flush child file: {}", err.error()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::census::reader::CensusReader;
    use crate::models::HeaderMapping;

    #[test]
    fn test_writes_crlf_rows_in_header_order() {
        let first = CensusRow::new().with("a", "1").with("b", "x,y");
        let mut writer = ChildFileWriter::for_row(&first).unwrap();
        writer.write_row(&first).unwrap();
        writer
            .write_row(&CensusRow::new().with("b", "2"))
            .unwrap();
        assert_eq!(writer.rows(), 2);

        let bytes = writer.into_bytes().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "a,b\r\n1,\"x,y\"\r\n,2\r\n");
    }

    #[test]
    fn test_short_row_cells_are_written_empty() {
        let reader = CensusReader::new("a,b,c\n1,,3\n1\n".to_string(), &HeaderMapping::new()).unwrap();
        let rows: Vec<_> = reader.rows().map(Result::unwrap).collect();
        assert_eq!(rows[0].get("b"), Some(""));
        assert_eq!(rows[1].get("b"), None);

        let mut writer = ChildFileWriter::for_row(&rows[0]).unwrap();
        for row in &rows {
            writer.write_row(row).unwrap();
        }

        let text = String::from_utf8(writer.into_bytes().unwrap()).unwrap();
        assert_eq!(text, "a,b,c\r\n1,,3\r\n1,,\r\n");
    }

    #[test]
    fn test_written_file_reads_back() {
        let row = CensusRow::new()
            .with("unique_corp_id", "1")
            .with("first_name", "Zoë")
            .with("last_name", "Ñúñez");
        let mut writer = ChildFileWriter::for_row(&row).unwrap();
        writer.write_row(&row).unwrap();

        let text = String::from_utf8(writer.into_bytes().unwrap()).unwrap();
        let reader = CensusReader::new(text, &HeaderMapping::new()).unwrap();
        let read: Vec<_> = reader.rows().map(Result::unwrap).collect();
        assert_eq!(read, vec![row]);
    }
}
