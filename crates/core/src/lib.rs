//! Quarry Core - Record, table and error types for the Quarry query engine.
//!
//! This crate provides the data shapes every Quarry operator consumes and
//! produces:
//!
//! - `Value`: a single field value
//! - `Record`: a positional row, a named record, or a pair of records
//! - `FieldRef`: a positional or named field address
//! - `Table`: an ordered sequence of records
//! - `Error`: errors raised while executing plans
//!
//! # Example
//!
//! ```rust
//! use quarry_core::{Record, Table, Value};
//!
//! let table = Table::from_rows(vec![
//!     vec![Value::Int64(1), Value::String("THEFT".into())],
//!     vec![Value::Int64(2), Value::String("BURGLARY".into())],
//! ]);
//!
//! let first = table.get(0).unwrap();
//! assert_eq!(first.at(1).unwrap().as_str(), Some("THEFT"));
//!
//! let merged = Record::merge(first, table.get(1).unwrap()).unwrap();
//! assert_eq!(merged.len(), 4);
//! ```

#![no_std]

extern crate alloc;

mod error;
mod record;
mod table;
mod value;

pub use error::{Error, Result};
pub use record::{FieldRef, Record};
pub use table::Table;
pub use value::Value;
