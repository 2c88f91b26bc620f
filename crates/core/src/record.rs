//! Record structure for Quarry tables.
//!
//! Raw input rows are positional. Projections may turn them into named
//! records, and cartesian products pair two records without flattening them.
//! Operators are shape-agnostic; the accessors below fail with
//! `Error::ShapeMismatch` when a callable asks for a shape it was not given.

use crate::error::{Error, Result};
use crate::value::Value;
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

/// Addresses a single field of a record.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FieldRef {
    /// Position in a `Record::Row`.
    Index(usize),
    /// Key in a `Record::Named`.
    Name(String),
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldRef::Index(i) => write!(f, "#{}", i),
            FieldRef::Name(n) => write!(f, "{}", n),
        }
    }
}

impl From<usize> for FieldRef {
    fn from(index: usize) -> Self {
        FieldRef::Index(index)
    }
}

impl From<&str> for FieldRef {
    fn from(name: &str) -> Self {
        FieldRef::Name(name.to_string())
    }
}

impl From<String> for FieldRef {
    fn from(name: String) -> Self {
        FieldRef::Name(name)
    }
}

/// A single record of a table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Record {
    /// Positional fields, like a tuple.
    Row(Vec<Value>),
    /// Fields keyed by name.
    Named(BTreeMap<String, Value>),
    /// A left/right pair produced by a cartesian product.
    Pair(Box<Record>, Box<Record>),
}

impl Record {
    /// Creates a positional record.
    pub fn row(values: Vec<Value>) -> Self {
        Record::Row(values)
    }

    /// Creates a named record from `(name, value)` entries.
    pub fn named<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Record::Named(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Creates a pair record.
    pub fn pair(left: Record, right: Record) -> Self {
        Record::Pair(Box::new(left), Box::new(right))
    }

    /// Returns a short name for this record's shape, used in error messages.
    pub fn shape(&self) -> &'static str {
        match self {
            Record::Row(_) => "positional row",
            Record::Named(_) => "named record",
            Record::Pair(..) => "record pair",
        }
    }

    /// Returns the number of fields. A pair counts the fields of both halves.
    pub fn len(&self) -> usize {
        match self {
            Record::Row(values) => values.len(),
            Record::Named(fields) => fields.len(),
            Record::Pair(l, r) => l.len() + r.len(),
        }
    }

    /// Returns true if this record has no fields.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets a positional field.
    pub fn at(&self, index: usize) -> Result<&Value> {
        match self {
            Record::Row(values) => values.get(index).ok_or_else(|| {
                Error::shape_mismatch(
                    format!("field #{}", index),
                    format!("row of {} fields", values.len()),
                )
            }),
            other => Err(Error::shape_mismatch("positional row", other.shape())),
        }
    }

    /// Gets a named field.
    pub fn get(&self, name: &str) -> Result<&Value> {
        match self {
            Record::Named(fields) => fields
                .get(name)
                .ok_or_else(|| Error::shape_mismatch(format!("field {}", name), "named record without it")),
            other => Err(Error::shape_mismatch("named record", other.shape())),
        }
    }

    /// Gets a field by reference.
    pub fn field(&self, field: &FieldRef) -> Result<&Value> {
        match field {
            FieldRef::Index(i) => self.at(*i),
            FieldRef::Name(n) => self.get(n),
        }
    }

    /// Returns both halves of a pair record.
    pub fn as_pair(&self) -> Result<(&Record, &Record)> {
        match self {
            Record::Pair(l, r) => Ok((l, r)),
            other => Err(Error::shape_mismatch("record pair", other.shape())),
        }
    }

    /// Returns the left half of a pair record.
    pub fn left(&self) -> Result<&Record> {
        self.as_pair().map(|(l, _)| l)
    }

    /// Returns the right half of a pair record.
    pub fn right(&self) -> Result<&Record> {
        self.as_pair().map(|(_, r)| r)
    }

    /// Returns the positional values if this is a row.
    pub fn values(&self) -> Option<&[Value]> {
        match self {
            Record::Row(values) => Some(values),
            _ => None,
        }
    }

    /// Merges the two sides of a join into one record.
    ///
    /// Positional rows concatenate: every left field, then every right field.
    /// Named records take the union of both sides; when a name exists on both
    /// sides the right value is kept. Mixing shapes is a shape mismatch.
    pub fn merge(left: &Record, right: &Record) -> Result<Record> {
        match (left, right) {
            (Record::Row(l), Record::Row(r)) => {
                let mut values = Vec::with_capacity(l.len() + r.len());
                values.extend(l.iter().cloned());
                values.extend(r.iter().cloned());
                Ok(Record::Row(values))
            }
            (Record::Named(l), Record::Named(r)) => {
                let mut fields = l.clone();
                fields.extend(r.iter().map(|(k, v)| (k.clone(), v.clone())));
                Ok(Record::Named(fields))
            }
            (l, r) => Err(Error::shape_mismatch(
                format!("matching shapes to merge ({})", l.shape()),
                r.shape(),
            )),
        }
    }
}

impl From<Vec<Value>> for Record {
    fn from(values: Vec<Value>) -> Self {
        Record::Row(values)
    }
}
