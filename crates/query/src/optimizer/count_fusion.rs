//! Count fusion - folds a filter followed by a count into a single pass.
//!
//! ```text
//! Then(Then(x, Filter(p)), Count)    =>    Then(x, CountIf(p))
//! ```

use crate::ast::Node;
use crate::optimizer::{Rewrite, RewriteRule};

/// Rule that turns `Filter` + `Count` into `CountIf`.
pub struct CountFusion;

impl RewriteRule for CountFusion {
    fn rewrite(&self, node: Node) -> Rewrite {
        let (first, second) = match node {
            Node::Then(first, second) => (first, second),
            other => return Rewrite::Skipped(other),
        };

        match (*first, *second) {
            (Node::Then(x, inner), Node::Count) => match *inner {
                Node::Filter(p) => Rewrite::Applied(Node::then(*x, Node::CountIf(p))),
                inner => Rewrite::Skipped(Node::then(Node::Then(x, inner.into()), Node::Count)),
            },
            (first, second) => Rewrite::Skipped(Node::then(first, second)),
        }
    }

    fn name(&self) -> &'static str {
        "count_fusion"
    }
}
