//! Hash Join implementation.

use alloc::vec::Vec;
use hashbrown::HashMap;
use quarry_core::{FieldRef, Record, Result, Table, Value};
use tracing::debug;

/// Rows of one side grouped by key, plus the keys in first-appearance order.
struct Buckets<'a> {
    keys: Vec<&'a Value>,
    rows: HashMap<&'a Value, Vec<usize>>,
}

impl<'a> Buckets<'a> {
    fn build(table: &'a Table, field: &FieldRef) -> Result<Self> {
        let mut keys = Vec::new();
        let mut rows: HashMap<&'a Value, Vec<usize>> = HashMap::with_capacity(table.len());

        for (idx, record) in table.iter().enumerate() {
            let key = record.field(field)?;
            rows.entry(key)
                .or_insert_with(|| {
                    keys.push(key);
                    Vec::new()
                })
                .push(idx);
        }

        Ok(Self { keys, rows })
    }
}

/// Hash Join executor.
///
/// Both inputs are bucketed by the join field once. For every key present on
/// both sides, the two buckets are combined pairwise and merged with
/// `Record::merge`. Keys missing from either side contribute nothing.
///
/// Output follows the first appearance of each key on the left side. This is
/// deterministic but not part of the contract: compare results as multisets.
pub struct HashJoin<'a> {
    field: &'a FieldRef,
}

impl<'a> HashJoin<'a> {
    /// Creates a new hash join executor.
    pub fn new(field: &'a FieldRef) -> Self {
        Self { field }
    }

    /// Executes the hash join.
    pub fn execute(&self, left: &Table, right: &Table) -> Result<Table> {
        // No pairs exist, so no join field is ever read.
        if left.is_empty() || right.is_empty() {
            return Ok(Table::empty());
        }

        let left_buckets = Buckets::build(left, self.field)?;
        let right_buckets = Buckets::build(right, self.field)?;

        debug!(
            field = %self.field,
            left_keys = left_buckets.keys.len(),
            right_keys = right_buckets.keys.len(),
            "hash join buckets built"
        );

        let mut records = Vec::new();
        for key in &left_buckets.keys {
            let (Some(left_rows), Some(right_rows)) =
                (left_buckets.rows.get(key), right_buckets.rows.get(key))
            else {
                continue;
            };

            records.reserve(left_rows.len() * right_rows.len());
            for &l in left_rows {
                for &r in right_rows {
                    records.push(Record::merge(&left.records()[l], &right.records()[r])?);
                }
            }
        }

        Ok(Table::new(records))
    }
}
