//! CSV file reading: acquire decoded text, then tokenize it

use crate::csv::CsvParser;
use crate::error::{CsvError, Result};
use crate::types::{Record, Table};
use std::fs;
use std::path::Path;
use tracing::debug;

/// CSV reader over a fully loaded source
///
/// Opening a reader loads the whole file, decodes it as UTF-8 and tokenizes
/// it. Rows are then handed out in input order.
///
/// # Examples
///
/// ```no_run
/// use csvtable::csv_reader::CsvReader;
///
/// let mut reader = CsvReader::open("data.csv").unwrap();
///
/// for row in reader.rows() {
///     println!("{:?}", row);
/// }
/// ```
///
/// # Missing files
///
/// ```
/// use csvtable::csv_reader::CsvReader;
///
/// let err = CsvReader::open("does-not-exist.csv").unwrap_err();
/// assert!(err.is_source_not_found());
/// ```
#[derive(Debug)]
pub struct CsvReader {
    records: std::vec::IntoIter<Record>,
    row_count: u64,
}

impl CsvReader {
    /// Open a CSV file and tokenize its contents
    ///
    /// # Errors
    /// - [`CsvError::MissingPath`] if `path` is empty
    /// - [`CsvError::SourceNotFound`] if the file does not exist
    /// - [`CsvError::InvalidEncoding`] if the file is not UTF-8
    /// - [`CsvError::Io`] for any other read failure
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = read_source(path.as_ref())?;
        Ok(Self::from_text(&text))
    }

    /// Create a reader over text that is already in memory
    pub fn from_text(text: &str) -> Self {
        let table = CsvParser::new().parse(text);
        CsvReader {
            records: table.into_records().into_iter(),
            row_count: 0,
        }
    }

    /// Read a single row
    ///
    /// Returns `None` once every record has been handed out.
    pub fn read_row(&mut self) -> Option<Record> {
        let row = self.records.next()?;
        self.row_count += 1;
        Some(row)
    }

    /// Get iterator over the remaining rows
    pub fn rows(&mut self) -> CsvRowIterator<'_> {
        CsvRowIterator { reader: self }
    }

    /// Get the number of rows read so far
    pub fn row_count(&self) -> u64 {
        self.row_count
    }

    /// Collect the rows not yet read into a table
    pub fn into_table(self) -> Table {
        Table::from(self.records.collect::<Vec<_>>())
    }
}

/// Iterator over CSV rows
pub struct CsvRowIterator<'a> {
    reader: &'a mut CsvReader,
}

impl<'a> Iterator for CsvRowIterator<'a> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.read_row()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.reader.records.size_hint()
    }
}

/// Load and decode the text behind `path`
///
/// No tokenizing happens unless this succeeds.
fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str().is_empty() {
        return Err(CsvError::MissingPath);
    }

    let bytes = fs::read(path).map_err(|e| CsvError::from_io(e, path))?;
    debug!(path = %path.display(), bytes = bytes.len(), "loaded csv source");

    String::from_utf8(bytes).map_err(|_| CsvError::InvalidEncoding {
        path: path.to_path_buf(),
    })
}

/// Parse the CSV file at `path` into a table
///
/// # Examples
///
/// ```no_run
/// let table = csvtable::parse_file("data.csv").unwrap();
/// println!("{} records", table.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Table> {
    Ok(CsvReader::open(path)?.into_table())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_read_plain_csv() -> Result<()> {
        let file = temp_csv(b"Name,Age,City\nAlice,30,NYC\nBob,25,SF\n");

        let mut reader = CsvReader::open(file.path())?;
        let rows: Vec<Record> = reader.rows().collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["Name", "Age", "City"]);
        assert_eq!(rows[1], vec!["Alice", "30", "NYC"]);
        assert_eq!(reader.row_count(), 3);
        Ok(())
    }

    #[test]
    fn test_read_row_until_exhausted() {
        let mut reader = CsvReader::from_text("1\n2");
        assert_eq!(reader.read_row(), Some(vec!["1".to_string()]));
        assert_eq!(reader.row_count(), 1);
        assert_eq!(reader.read_row(), Some(vec!["2".to_string()]));
        assert_eq!(reader.read_row(), None);
        assert_eq!(reader.row_count(), 2);
    }

    #[test]
    fn test_into_table_keeps_unread_rows() {
        let mut reader = CsvReader::from_text("a\nb\nc\n");
        reader.read_row();
        assert_eq!(reader.into_table().as_str_rows(), vec![vec!["b"], vec!["c"]]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("non-existent-file.csv");

        let err = CsvReader::open(&path).unwrap_err();
        assert!(err.is_source_not_found());
    }

    #[test]
    fn test_empty_path() {
        let err = CsvReader::open("").unwrap_err();
        assert!(matches!(err, CsvError::MissingPath));
    }

    #[test]
    fn test_invalid_utf8() {
        let file = temp_csv(&[b'a', b',', 0xff, 0xfe, b'\n']);
        let err = CsvReader::open(file.path()).unwrap_err();
        assert!(matches!(err, CsvError::InvalidEncoding { .. }));
    }

    #[test]
    fn test_parse_file_empty() -> Result<()> {
        let file = temp_csv(b"");
        assert!(parse_file(file.path())?.is_empty());
        Ok(())
    }
}
