//! Table structure for Quarry.

use crate::record::Record;
use crate::value::Value;
use alloc::vec;
use alloc::vec::Vec;

/// An ordered, finite sequence of records.
///
/// Tables are values: every operator produces a new table and leaves its
/// input untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    /// Creates a table from records.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Creates an empty table.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a table of positional rows.
    pub fn from_rows(rows: Vec<Vec<Value>>) -> Self {
        Self {
            records: rows.into_iter().map(Record::Row).collect(),
        }
    }

    /// Creates the one-record table produced by counting operators.
    pub fn count_of(count: usize) -> Self {
        Self::new(vec![Record::row(vec![Value::from(count)])])
    }

    /// Returns the count held by a `count_of` table.
    pub fn as_count(&self) -> Option<i64> {
        match self.records.as_slice() {
            [Record::Row(values)] if values.len() == 1 => values[0].as_i64(),
            _ => None,
        }
    }

    /// Returns the number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the table has no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the records.
    #[inline]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the record at `index`.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Returns an iterator over the records.
    pub fn iter(&self) -> core::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Adds a record.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Consumes the table, returning its records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl From<Vec<Record>> for Table {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<Record> for Table {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Table {
    type Item = Record;
    type IntoIter = alloc::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = core::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
