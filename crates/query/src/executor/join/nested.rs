//! Nested Loop Join implementation.

use crate::ast::JoinPredicate;
use alloc::vec::Vec;
use quarry_core::{Record, Result, Table};

/// Nested Loop Join executor.
///
/// The simplest join algorithm that compares every pair of rows.
/// Works for any join predicate; output is ordered by (left, right) index.
pub struct NestedLoopJoin<'a> {
    predicate: &'a JoinPredicate,
}

impl<'a> NestedLoopJoin<'a> {
    /// Creates a new nested loop join executor.
    pub fn new(predicate: &'a JoinPredicate) -> Self {
        Self { predicate }
    }

    /// Executes the join, merging every matching pair with `Record::merge`.
    pub fn execute(&self, left: &Table, right: &Table) -> Result<Table> {
        let mut records = Vec::new();

        for l in left.iter() {
            for r in right.iter() {
                if self.predicate.eval(l, r)? {
                    records.push(Record::merge(l, r)?);
                }
            }
        }

        Ok(Table::new(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use quarry_core::{Error, Value};

    fn table_a() -> Table {
        Table::from_rows(vec![
            vec![Value::Int64(1), Value::from("A")],
            vec![Value::Int64(2), Value::from("B")],
            vec![Value::Int64(3), Value::from("C")],
        ])
    }

    fn table_b() -> Table {
        Table::from_rows(vec![
            vec![Value::Int64(1), Value::from("X")],
            vec![Value::Int64(2), Value::from("Y")],
            vec![Value::Int64(4), Value::from("Z")],
        ])
    }

    #[test]
    fn test_nested_loop_join_on_field() {
        let on = JoinPredicate::on(0);
        let result = NestedLoopJoin::new(&on).execute(&table_a(), &table_b()).unwrap();

        // Should match on keys 1 and 2
        assert_eq!(result.len(), 2);
        assert_eq!(
            result.get(0),
            Some(&Record::row(vec![
                Value::Int64(1),
                Value::from("A"),
                Value::Int64(1),
                Value::from("X"),
            ]))
        );
    }

    #[test]
    fn test_nested_loop_join_range() {
        let left = Table::from_rows(vec![vec![Value::Int64(10)], vec![Value::Int64(20)]]);
        let right = Table::from_rows(vec![
            vec![Value::Int64(5)],
            vec![Value::Int64(15)],
            vec![Value::Int64(25)],
        ]);
        let gt = JoinPredicate::try_new(|l, r| Ok(l.at(0)? > r.at(0)?));

        let result = NestedLoopJoin::new(&gt).execute(&left, &right).unwrap();

        // 10 > 5, 20 > 5, 20 > 15 = 3 matches
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_nested_loop_join_missing_field() {
        let on = JoinPredicate::on(5);
        let result = NestedLoopJoin::new(&on).execute(&table_a(), &table_b());
        assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
    }
}
