//! # csvtable
//!
//! RFC 4180-style CSV parsing into an owned table of string records.
//!
//! - Fields separated by commas, records by `\n` or `\r\n`
//! - Double-quoted fields may hold commas and line breaks
//! - `""` inside a quoted field is one literal quote
//! - A last record without a line ending is still returned
//! - Parsing decoded text never fails
//!
//! ## Quick Start
//!
//! ```
//! let table = csvtable::parse("name,quote\r\nada,\"said \"\"hi\"\", then left\"\n");
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table[1][1], "said \"hi\", then left");
//! ```
//!
//! ## Reading files
//!
//! ```no_run
//! use csvtable::{CsvError, CsvReader};
//!
//! match CsvReader::open("data.csv") {
//!     Ok(mut reader) => {
//!         for row in reader.rows() {
//!             println!("{:?}", row);
//!         }
//!     }
//!     Err(CsvError::SourceNotFound { path }) => eprintln!("no such file: {}", path.display()),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

pub mod csv;
pub mod csv_reader;
pub mod error;
pub mod types;

pub use csv::CsvParser;
pub use csv_reader::{parse_file, CsvReader, CsvRowIterator};
pub use error::{CsvError, Result};
pub use types::{Field, Record, Table};

/// Parse decoded CSV text into a table
///
/// Shorthand for `CsvParser::new().parse(text)`.
pub fn parse(text: &str) -> Table {
    CsvParser::new().parse(text)
}
