//! CSV tokenizing with RFC 4180-like behavior

use crate::types::{Field, Record, Table};
use tracing::trace;

const QUOTE: char = '"';
const DELIMITER: char = ',';

/// Whether the scanner is inside a double-quoted field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Unquoted,
    Quoted,
}

/// CSV tokenizer for decoded text
///
/// Turns a whole document into a [`Table`] in one pass. Commas separate
/// fields, `\n` or `\r\n` separate records, and double quotes enclose fields
/// that may contain either. A doubled quote inside a quoted field is one
/// literal quote.
///
/// Parsing never fails: malformed quoting still produces a table.
///
/// # Examples
///
/// ```
/// use csvtable::csv::CsvParser;
///
/// let parser = CsvParser::new();
/// let table = parser.parse("\"a,b\",c\r\n\"say \"\"hi\"\"\",d");
///
/// assert_eq!(
///     table.as_str_rows(),
///     vec![vec!["a,b", "c"], vec!["say \"hi\"", "d"]]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvParser;

impl CsvParser {
    /// Create a new CSV parser
    pub fn new() -> Self {
        CsvParser
    }

    /// Parse a complete CSV document into records
    pub fn parse(&self, text: &str) -> Table {
        let mut records: Vec<Record> = Vec::new();
        let mut record: Record = Vec::new();
        let mut field = Field::new();
        let mut state = ScanState::Unquoted;
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            match state {
                ScanState::Quoted => {
                    if ch == QUOTE {
                        if chars.peek() == Some(&QUOTE) {
                            // Escaped quote ("")
                            field.push(QUOTE);
                            chars.next();
                        } else {
                            state = ScanState::Unquoted;
                        }
                    } else {
                        field.push(ch);
                    }
                }
                ScanState::Unquoted => match ch {
                    QUOTE => state = ScanState::Quoted,
                    DELIMITER => record.push(std::mem::take(&mut field)),
                    '\n' => {
                        record.push(std::mem::take(&mut field));
                        records.push(std::mem::take(&mut record));
                    }
                    '\r' if chars.peek() == Some(&'\n') => {
                        chars.next();
                        record.push(std::mem::take(&mut field));
                        records.push(std::mem::take(&mut record));
                    }
                    _ => field.push(ch),
                },
            }
        }

        // Flush a last record that has no line ending. An unterminated quoted
        // field lands here too.
        if !field.is_empty() || !record.is_empty() {
            record.push(field);
            records.push(record);
        }

        trace!(
            records = records.len(),
            bytes = text.len(),
            unterminated_quote = state == ScanState::Quoted,
            "parsed csv text"
        );

        Table::from(records)
    }
}
