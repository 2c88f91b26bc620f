//! Property-based tests for the executor and optimizer.
//!
//! These tests verify that fused and lowered operators agree with the
//! operators they replace for randomly generated inputs.

use proptest::prelude::*;
use quarry_core::{Record, Table, Value};
use quarry_query::{execute, optimize, JoinPredicate, Node, Predicate, Query};

/// Strategy for generating a table of two-column rows with small keys, so
/// that joins find matches.
fn table_strategy(max_rows: usize) -> impl Strategy<Value = Table> {
    prop::collection::vec((0i64..8, -100i64..100), 0..max_rows).prop_map(|rows| {
        Table::from_rows(
            rows.into_iter()
                .map(|(k, v)| vec![Value::Int64(k), Value::Int64(v)])
                .collect(),
        )
    })
}

/// A threshold predicate on the second column.
fn above(threshold: i64) -> Predicate {
    Predicate::try_new(move |r| Ok(r.at(1)?.as_i64() > Some(threshold)))
}

/// A modulus predicate on the key column.
fn key_mod(m: i64, rem: i64) -> Predicate {
    Predicate::try_new(move |r| Ok(r.at(0)?.as_i64().map_or(false, |k| k % m == rem)))
}

fn sorted(table: Table) -> Vec<Record> {
    let mut records = table.into_records();
    records.sort();
    records
}

proptest! {
    /// Property: CountIf(p) counts what Count counts after Filter(p).
    #[test]
    fn count_if_equals_count_of_filter(table in table_strategy(40), t in -100i64..100) {
        let fused = execute(&Node::CountIf(above(t)), &table).unwrap();
        let unfused = execute(&Node::then(Node::Filter(above(t)), Node::Count), &table).unwrap();
        prop_assert_eq!(fused, unfused);
    }

    /// Property: fused filters keep exactly the rows satisfying both predicates.
    #[test]
    fn filter_fusion_is_conjunction(
        table in table_strategy(40),
        t in -100i64..100,
        m in 1i64..4,
    ) {
        let rem = 0;
        let plan = Node::then(
            Node::then(Node::All, Node::Filter(above(t))),
            Node::Filter(key_mod(m, rem)),
        );
        let optimized = optimize(plan);

        let p1 = above(t);
        let p2 = key_mod(m, rem);
        let both = Predicate::new(move |r| p1.eval(r).unwrap_or(false) && p2.eval(r).unwrap_or(false));
        let expected = execute(&Node::Filter(both), &table).unwrap();

        prop_assert_eq!(execute(&optimized, &table).unwrap(), expected);
    }

    /// Property: HashJoin and Join on field equality produce the same multiset.
    #[test]
    fn hash_join_equals_nested_loop_join(
        table in table_strategy(30),
        lt in -100i64..100,
        rt in -100i64..100,
    ) {
        let left = Node::Filter(above(lt));
        let right = Node::Filter(above(rt));

        let hash = execute(&Node::hash_join(0, left.clone(), right.clone()), &table).unwrap();
        let eq = JoinPredicate::try_new(|a, b| Ok(a.at(0)? == b.at(0)?));
        let nested = execute(&Node::nested_loop_join(eq, left, right), &table).unwrap();

        prop_assert_eq!(hash.len(), nested.len());
        prop_assert_eq!(sorted(hash), sorted(nested));
    }

    /// Property: a cartesian product of m and n rows has m * n rows.
    #[test]
    fn product_cardinality(table in table_strategy(25), t in -100i64..100) {
        let left = execute(&Node::Filter(above(t)), &table).unwrap().len();
        let product = execute(&Query::product(Node::Filter(above(t)), Query::all()), &table).unwrap();
        prop_assert_eq!(product.len(), left * table.len());
    }

    /// Property: optimization preserves the result of builder-built plans.
    #[test]
    fn optimize_preserves_semantics(
        table in table_strategy(25),
        t1 in -100i64..100,
        t2 in -100i64..100,
        m in 1i64..4,
        shape in 0usize..5,
    ) {
        let base = Query::all().filter(above(t1));
        let plan = match shape {
            0 => base.filter(key_mod(m, 0)),
            1 => base.filter(above(t2)).count(),
            2 => base.filter(above(t2)).filter(key_mod(m, 1)).count(),
            3 => Query::join(JoinPredicate::on(0), base, Query::all().filter(above(t2))),
            _ => Query::join(
                JoinPredicate::new(|a, b| a.at(1).ok() < b.at(1).ok()),
                base.filter(key_mod(m, 0)),
                Query::all(),
            ).count(),
        };

        let expected = execute(&plan, &table).unwrap();
        let actual = execute(&optimize(plan), &table).unwrap();

        if shape == 3 {
            prop_assert_eq!(sorted(actual), sorted(expected));
        } else {
            prop_assert_eq!(actual, expected);
        }
    }
}
