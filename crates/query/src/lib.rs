//! Quarry Query - Plan trees, executor and optimizer for the Quarry engine.
//!
//! This crate provides:
//!
//! - `ast`: plan tree nodes and the callables they carry
//! - `builder`: fluent plan construction (`Query`, `on`)
//! - `executor`: interpretation of plan trees against tables
//! - `optimizer`: rule-based rewriting of plan trees
//!
//! A caller builds a plan, optimizes it, and executes it:
//!
//! ```rust
//! use quarry_core::{Table, Value};
//! use quarry_query::{run, Predicate, Query};
//!
//! let table = Table::from_rows(vec![
//!     vec![Value::Int64(1)],
//!     vec![Value::Int64(5)],
//!     vec![Value::Int64(9)],
//! ]);
//! let big = Predicate::try_new(|r| Ok(r.at(0)?.as_i64() > Some(2)));
//! let odd = Predicate::try_new(|r| Ok(r.at(0)?.as_i64().map_or(false, |v| v % 2 == 1)));
//!
//! let plan = Query::all().filter(big).filter(odd).count();
//! assert_eq!(run(&plan, &table).unwrap().as_count(), Some(2));
//! ```

#![no_std]

extern crate alloc;

pub mod ast;
pub mod builder;
pub mod executor;
pub mod optimizer;

pub use ast::{JoinPredicate, Node, NodeKind, Predicate, Projection};
pub use builder::{on, Query};
pub use executor::{Executor, ExecutorConfig};
pub use optimizer::{Optimizer, OptimizerConfig, Rewrite, RewriteRule};

use quarry_core::{Result, Table};

/// Executes `node` against `table` with the default executor.
pub fn execute(node: &Node, table: &Table) -> Result<Table> {
    Executor::new().execute(node, table)
}

/// Optimizes `node` with the default rules.
pub fn optimize(node: Node) -> Node {
    Optimizer::new().optimize(node)
}

/// Optimizes `node`, then executes the result against `table`.
pub fn run(node: &Node, table: &Table) -> Result<Table> {
    execute(&optimize(node.clone()), table)
}
