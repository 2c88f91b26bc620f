//! Plan tree nodes.
//!
//! Nodes are immutable once built. The optimizer consumes a tree and returns
//! a new one; the executor only borrows it, so one tree can be executed any
//! number of times.

use crate::ast::{JoinPredicate, Predicate, Projection};
use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use quarry_core::FieldRef;

/// The tag of a plan node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    All,
    Filter,
    Apply,
    Count,
    CountIf,
    Then,
    CartesianProduct,
    Join,
    HashJoin,
}

impl NodeKind {
    /// Returns the node kind's name.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::All => "All",
            NodeKind::Filter => "Filter",
            NodeKind::Apply => "Apply",
            NodeKind::Count => "Count",
            NodeKind::CountIf => "CountIf",
            NodeKind::Then => "Then",
            NodeKind::CartesianProduct => "CartesianProduct",
            NodeKind::Join => "Join",
            NodeKind::HashJoin => "HashJoin",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A plan tree node.
#[derive(Clone, Debug)]
pub enum Node {
    /// Identity: outputs every input record.
    All,
    /// Keeps the records matching the predicate.
    Filter(Predicate),
    /// Transforms every record.
    Apply(Projection),
    /// Reduces to a one-record table holding the row count.
    Count,
    /// Reduces to a one-record table holding the count of matching rows.
    /// Produced by count fusion, never by the builder.
    CountIf(Predicate),
    /// Runs `second` on the output of `first`.
    Then(Box<Node>, Box<Node>),
    /// Pairs every output record of `left` with every output record of
    /// `right`. Both children run against the same input table.
    CartesianProduct(Box<Node>, Box<Node>),
    /// Nested-loop join of the children's outputs.
    Join(JoinPredicate, Box<Node>, Box<Node>),
    /// Equi-join on a statically known field.
    HashJoin(FieldRef, Box<Node>, Box<Node>),
}

impl Node {
    /// Creates a `Then` node.
    pub fn then(first: Node, second: Node) -> Self {
        Node::Then(Box::new(first), Box::new(second))
    }

    /// Creates a `CartesianProduct` node.
    pub fn cartesian_product(left: Node, right: Node) -> Self {
        Node::CartesianProduct(Box::new(left), Box::new(right))
    }

    /// Creates a nested-loop `Join` node.
    pub fn nested_loop_join(predicate: JoinPredicate, left: Node, right: Node) -> Self {
        Node::Join(predicate, Box::new(left), Box::new(right))
    }

    /// Creates a `HashJoin` node.
    pub fn hash_join(field: impl Into<FieldRef>, left: Node, right: Node) -> Self {
        Node::HashJoin(field.into(), Box::new(left), Box::new(right))
    }

    /// Returns this node's kind.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::All => NodeKind::All,
            Node::Filter(_) => NodeKind::Filter,
            Node::Apply(_) => NodeKind::Apply,
            Node::Count => NodeKind::Count,
            Node::CountIf(_) => NodeKind::CountIf,
            Node::Then(..) => NodeKind::Then,
            Node::CartesianProduct(..) => NodeKind::CartesianProduct,
            Node::Join(..) => NodeKind::Join,
            Node::HashJoin(..) => NodeKind::HashJoin,
        }
    }

    /// Returns the direct children of this node.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Then(a, b)
            | Node::CartesianProduct(a, b)
            | Node::Join(_, a, b)
            | Node::HashJoin(_, a, b) => alloc::vec![a.as_ref(), b.as_ref()],
            Node::All | Node::Filter(_) | Node::Apply(_) | Node::Count | Node::CountIf(_) => {
                Vec::new()
            }
        }
    }

    /// Renders the tree one node per line, children indented by two spaces.
    ///
    /// ```text
    /// Then
    ///   All
    ///   CountIf
    /// ```
    pub fn explain(&self) -> String {
        let mut out = String::new();
        self.explain_into(&mut out, 0);
        out
    }

    fn explain_into(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(self.kind().name());
        if let Node::Join(JoinPredicate::FieldEquality(field), ..) | Node::HashJoin(field, ..) = self {
            out.push_str(&format!(" [{}]", field));
        }
        out.push('\n');
        for child in self.children() {
            child.explain_into(out, depth + 1);
        }
    }
}
