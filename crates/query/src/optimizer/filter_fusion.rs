//! Filter fusion - merges two adjacent filters into one.
//!
//! ```text
//! Then                          Then
//!  ├─ Then                =>     ├─ x
//!  │   ├─ x                      └─ Filter(p1 AND p2)
//!  │   └─ Filter(p1)
//!  └─ Filter(p2)
//! ```

use crate::ast::Node;
use crate::optimizer::{Rewrite, RewriteRule};

/// Rule that conjoins two consecutive filters.
pub struct FilterFusion;

impl RewriteRule for FilterFusion {
    fn rewrite(&self, node: Node) -> Rewrite {
        let (first, second) = match node {
            Node::Then(first, second) => (first, second),
            other => return Rewrite::Skipped(other),
        };

        match (*first, *second) {
            (Node::Then(x, inner), Node::Filter(p2)) => match *inner {
                Node::Filter(p1) => Rewrite::Applied(Node::then(*x, Node::Filter(p1.and(p2)))),
                inner => Rewrite::Skipped(Node::then(Node::Then(x, inner.into()), Node::Filter(p2))),
            },
            (first, second) => Rewrite::Skipped(Node::then(first, second)),
        }
    }

    fn name(&self) -> &'static str {
        "filter_fusion"
    }
}
