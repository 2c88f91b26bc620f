//! Plan runner - interprets a plan tree against a table.
//!
//! The runner walks the tree recursively, delegating each node to its
//! operator. Binary nodes run both children against the same input table;
//! `Then` pipes the output of its first child into its second.

use crate::ast::{Node, NodeKind};
use crate::executor::join::{CrossProduct, HashJoin, NestedLoopJoin};
use crate::executor::{CountExecutor, FilterExecutor, ProjectExecutor};
use alloc::vec::Vec;
use quarry_core::{Error, Result, Table};
use tracing::trace;

/// Configuration for the executor.
#[derive(Clone, Debug, Default)]
pub struct ExecutorConfig {
    /// Node kinds the executor refuses to interpret.
    pub disabled: Vec<NodeKind>,
}

impl ExecutorConfig {
    /// Refuses to interpret `kind`; plans containing it fail with
    /// `Error::UnsupportedNode`.
    pub fn disable(mut self, kind: NodeKind) -> Self {
        if !self.disabled.contains(&kind) {
            self.disabled.push(kind);
        }
        self
    }

    /// Returns true if `kind` may be executed.
    pub fn is_enabled(&self, kind: NodeKind) -> bool {
        !self.disabled.contains(&kind)
    }
}

/// Interprets plan trees.
///
/// Execution never mutates the tree, so one plan can run against any number
/// of tables. Any error aborts the whole execution; no partial table is
/// returned.
#[derive(Clone, Debug, Default)]
pub struct Executor {
    config: ExecutorConfig,
}

impl Executor {
    /// Creates an executor that interprets every node kind.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an executor with the given configuration.
    pub fn with_config(config: ExecutorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Executes `node` against `table`, producing a new table.
    pub fn execute(&self, node: &Node, table: &Table) -> Result<Table> {
        let kind = node.kind();
        if !self.config.is_enabled(kind) {
            return Err(Error::unsupported_node(kind.name()));
        }

        let output = match node {
            Node::All => table.clone(),
            Node::Filter(predicate) => FilterExecutor::new(predicate).execute(table)?,
            Node::Apply(projection) => ProjectExecutor::new(projection).execute(table)?,
            Node::Count => CountExecutor::all().execute(table)?,
            Node::CountIf(predicate) => CountExecutor::matching(predicate).execute(table)?,
            Node::Then(first, second) => {
                let intermediate = self.execute(first, table)?;
                self.execute(second, &intermediate)?
            }
            Node::CartesianProduct(left, right) => {
                let (l, r) = self.execute_sides(left, right, table)?;
                CrossProduct.execute(&l, &r)
            }
            Node::Join(predicate, left, right) => {
                let (l, r) = self.execute_sides(left, right, table)?;
                NestedLoopJoin::new(predicate).execute(&l, &r)?
            }
            Node::HashJoin(field, left, right) => {
                let (l, r) = self.execute_sides(left, right, table)?;
                HashJoin::new(field).execute(&l, &r)?
            }
        };

        trace!(
            kind = %kind,
            input_rows = table.len(),
            output_rows = output.len(),
            "executed node"
        );
        Ok(output)
    }

    /// Runs both children of a binary node against the original input.
    fn execute_sides(&self, left: &Node, right: &Node, table: &Table) -> Result<(Table, Table)> {
        Ok((self.execute(left, table)?, self.execute(right, table)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{JoinPredicate, Predicate, Projection};
    use alloc::vec;
    use quarry_core::{Record, Value};

    fn table() -> Table {
        Table::from_rows(vec![
            vec![Value::Int64(1), Value::from("THEFT")],
            vec![Value::Int64(2), Value::from("BATTERY")],
            vec![Value::Int64(3), Value::from("MOTOR VEHICLE THEFT")],
        ])
    }

    fn is_theft() -> Predicate {
        Predicate::try_new(|r| Ok(r.at(1)?.as_str().is_some_and(|s| s.contains("THEFT"))))
    }

    #[test]
    fn test_execute_all_copies_input() {
        let input = table();
        let output = Executor::new().execute(&Node::All, &input).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_execute_then_pipes_output() {
        let node = Node::then(Node::Filter(is_theft()), Node::Count);
        let output = Executor::new().execute(&node, &table()).unwrap();
        assert_eq!(output.as_count(), Some(2));
    }

    #[test]
    fn test_execute_count_if_matches_count_of_filter() {
        let fused = Executor::new().execute(&Node::CountIf(is_theft()), &table()).unwrap();
        let unfused = Executor::new()
            .execute(&Node::then(Node::Filter(is_theft()), Node::Count), &table())
            .unwrap();
        assert_eq!(fused, unfused);
    }

    #[test]
    fn test_execute_product_runs_children_on_same_input() {
        let node = Node::cartesian_product(Node::Filter(is_theft()), Node::All);
        let output = Executor::new().execute(&node, &table()).unwrap();
        assert_eq!(output.len(), 2 * 3);
    }

    #[test]
    fn test_execute_join_and_hash_join_agree() {
        let join = Node::nested_loop_join(JoinPredicate::on(0), Node::All, Node::Filter(is_theft()));
        let hash = Node::hash_join(0, Node::All, Node::Filter(is_theft()));

        let mut a = Executor::new().execute(&join, &table()).unwrap().into_records();
        let mut b = Executor::new().execute(&hash, &table()).unwrap().into_records();
        a.sort();
        b.sort();
        assert_eq!(a.len(), 2);
        assert_eq!(a, b);
    }

    #[test]
    fn test_execute_shape_mismatch_after_apply() {
        let to_named = Projection::try_new(|r| Ok(Record::named([("type", r.at(1)?.clone())])));
        let node = Node::then(Node::Apply(to_named), Node::Filter(is_theft()));
        let result = Executor::new().execute(&node, &table());
        assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn test_execute_callback_error_aborts() {
        let failing = Projection::try_new(|_| Err(Error::callback("unparseable")));
        let node = Node::then(Node::Apply(failing), Node::Count);
        assert_eq!(
            Executor::new().execute(&node, &table()),
            Err(Error::callback("unparseable"))
        );
    }

    #[test]
    fn test_execute_disabled_kind() {
        let executor = Executor::with_config(ExecutorConfig::default().disable(NodeKind::CartesianProduct));
        let node = Node::then(Node::cartesian_product(Node::All, Node::All), Node::Count);

        assert_eq!(
            executor.execute(&node, &table()),
            Err(Error::unsupported_node("CartesianProduct"))
        );
        assert!(executor.execute(&Node::Count, &table()).is_ok());
    }
}
