use crate::error::{ProcessingError, Result};
use crate::models::LocationTable;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Reads a delimited sensor-location file into a [`LocationTable`].
pub struct LocationReader {
    delimiter: u8,
}

impl LocationReader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Read the whole file; a missing or malformed file is a source-read error.
    pub fn read_table(&self, path: &Path) -> Result<LocationTable> {
        let file = File::open(path).map_err(|e| ProcessingError::source_read(path, e))?;
        let table = self.read_from(file).map_err(|e| match e {
            ProcessingError::SourceRead { reason, .. } => ProcessingError::source_read(path, reason),
            other => ProcessingError::source_read(path, other),
        })?;

        debug!(
            path = %path.display(),
            columns = table.headers().len(),
            rows = table.len(),
            "read location table"
        );
        Ok(table)
    }

    /// Read from any byte source, e.g. an in-memory buffer in tests.
    ///
    /// Header names are taken verbatim. Short rows are padded with empty
    /// cells; a row with more fields than the header is rejected.
    pub fn read_from<R: Read>(&self, source: R) -> Result<LocationTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(source);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if headers.iter().all(|h| h.is_empty()) {
            return Err(ProcessingError::source_read("<input>", "no header row found"));
        }

        let expected = headers.len();
        let mut table = LocationTable::new(headers);
        for record in reader.records() {
            let record = record?;
            if record.len() > expected {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                return Err(ProcessingError::source_read(
                    "<input>",
                    format!(
                        "line {} has {} fields, expected at most {}",
                        line,
                        record.len(),
                        expected
                    ),
                ));
            }
            table.push_row(record.iter().map(str::to_string).collect());
        }

        Ok(table)
    }
}

impl Default for LocationReader {
    fn default() -> Self {
        Self::new()
    }
}
