//! Fluent plan construction.
//!
//! `Query::all()` is the identity plan. Chaining `filter`, `apply` and
//! `count` wraps the receiver in a new `Then` node and leaves the receiver
//! untouched, so a partial plan can be shared and extended in several
//! directions.
//!
//! ```rust
//! use quarry_query::{on, Predicate, Query};
//!
//! let thefts = Query::all().filter(Predicate::try_new(|r| {
//!     Ok(r.at(1)?.as_str().is_some_and(|s| s.contains("THEFT")))
//! }));
//! let theft_count = thefts.count();
//! let joined = Query::join(on(0), thefts.clone(), Query::all());
//!
//! assert_eq!(theft_count.explain(), "Then\n  Then\n    All\n    Filter\n  Count\n");
//! assert_eq!(joined.kind().name(), "Then");
//! ```

use crate::ast::{JoinPredicate, Node, Predicate, Projection};
use quarry_core::{FieldRef, Result, Table};

/// Entry point for building plans.
pub struct Query;

impl Query {
    /// The identity plan.
    pub fn all() -> Node {
        Node::All
    }

    /// Pairs every record of `left` with every record of `right`. Both sides
    /// run against the same input.
    pub fn product(left: Node, right: Node) -> Node {
        Node::cartesian_product(left, right)
    }

    /// Joins the outputs of `left` and `right` on `predicate`.
    ///
    /// Built as a filtered cartesian product followed by a merge; the
    /// optimizer lowers this shape to `Join` or, for `on(field)` predicates,
    /// `HashJoin`.
    pub fn join(predicate: JoinPredicate, left: Node, right: Node) -> Node {
        Node::then(
            Node::then(
                Node::cartesian_product(left, right),
                Node::Filter(Predicate::on_pair(predicate)),
            ),
            Node::Apply(Projection::merge()),
        )
    }
}

/// A join predicate comparing `field` on both records.
pub fn on(field: impl Into<FieldRef>) -> JoinPredicate {
    JoinPredicate::on(field)
}

impl Node {
    /// Keeps the records matching `predicate`.
    pub fn filter(&self, predicate: Predicate) -> Node {
        Node::then(self.clone(), Node::Filter(predicate))
    }

    /// Maps every record through `projection`.
    pub fn apply(&self, projection: Projection) -> Node {
        Node::then(self.clone(), Node::Apply(projection))
    }

    /// Counts the records.
    pub fn count(&self) -> Node {
        Node::then(self.clone(), Node::Count)
    }

    /// Optimizes this plan, then executes it against `table`.
    pub fn run(&self, table: &Table) -> Result<Table> {
        crate::run(self, table)
    }
}
