//! Cartesian product.

use alloc::vec::Vec;
use quarry_core::{Record, Table};

/// Cartesian product executor.
///
/// Emits `|left| * |right|` pair records, outer loop over the left table and
/// inner loop over the right.
pub struct CrossProduct;

impl CrossProduct {
    /// Executes the product.
    pub fn execute(&self, left: &Table, right: &Table) -> Table {
        cross_product(left.records(), right.records(), |l, r| {
            Record::pair(l.clone(), r.clone())
        })
        .into()
    }
}

/// Pairs every left item with every right item through `output_fn`.
pub fn cross_product<L, R, O, OF>(left: &[L], right: &[R], output_fn: OF) -> Vec<O>
where
    OF: Fn(&L, &R) -> O,
{
    let mut results = Vec::with_capacity(left.len() * right.len());
    for l in left {
        for r in right {
            results.push(output_fn(l, r));
        }
    }
    results
}
