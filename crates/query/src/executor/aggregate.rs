//! Count aggregation executor.

use crate::ast::Predicate;
use quarry_core::{Result, Table};

/// Count executor - reduces a table to a one-record table holding a count.
///
/// Without a predicate every record counts; with one, only matching records
/// do. The predicated form is a single pass over the input.
pub struct CountExecutor<'a> {
    predicate: Option<&'a Predicate>,
}

impl<'a> CountExecutor<'a> {
    /// Counts every record.
    pub fn all() -> Self {
        Self { predicate: None }
    }

    /// Counts the records matching `predicate`.
    pub fn matching(predicate: &'a Predicate) -> Self {
        Self {
            predicate: Some(predicate),
        }
    }

    /// Executes the count.
    pub fn execute(&self, input: &Table) -> Result<Table> {
        let count = match self.predicate {
            None => input.len(),
            Some(predicate) => {
                let mut count = 0;
                for record in input.iter() {
                    if predicate.eval(record)? {
                        count += 1;
                    }
                }
                count
            }
        };
        Ok(Table::count_of(count))
    }
}
