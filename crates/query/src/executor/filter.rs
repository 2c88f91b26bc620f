//! Filter executor.

use crate::ast::Predicate;
use alloc::vec::Vec;
use quarry_core::{Result, Table};

/// Filter executor - keeps the records matching a predicate, in input order.
pub struct FilterExecutor<'a> {
    predicate: &'a Predicate,
}

impl<'a> FilterExecutor<'a> {
    /// Creates a new filter executor.
    pub fn new(predicate: &'a Predicate) -> Self {
        Self { predicate }
    }

    /// Executes the filter on the input table.
    pub fn execute(&self, input: &Table) -> Result<Table> {
        let mut records = Vec::new();
        for record in input.iter() {
            if self.predicate.eval(record)? {
                records.push(record.clone());
            }
        }
        Ok(Table::new(records))
    }
}
