//! Type definitions for parsed CSV data

use std::ops::Index;

/// A single field value, already unescaped
pub type Field = String;

/// One row of the table, fields in column order
pub type Record = Vec<Field>;

/// Parsed CSV content: records in input order
///
/// A `Table` is built fresh by every parse and owned by the caller.
///
/// # Examples
///
/// ```
/// let table = csvtable::parse("10,20\n30,40\n");
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table[1], vec!["30", "40"]);
/// assert_eq!(table.as_str_rows(), vec![vec!["10", "20"], vec!["30", "40"]]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the input produced no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records as a slice
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Get a record by index
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Iterate over records in input order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Borrowed view of every field, handy for comparisons
    pub fn as_str_rows(&self) -> Vec<Vec<&str>> {
        self.records
            .iter()
            .map(|record| record.iter().map(String::as_str).collect())
            .collect()
    }

    /// Consume the table and return its records
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl From<Vec<Record>> for Table {
    fn from(records: Vec<Record>) -> Self {
        Table { records }
    }
}

impl Index<usize> for Table {
    type Output = Record;

    fn index(&self, index: usize) -> &Record {
        &self.records[index]
    }
}

impl IntoIterator for Table {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
