//! Join recognition - lowers the builder's join idiom to a join operator.
//!
//! The builder expresses a join as a filtered cartesian product followed by
//! a merge. This rule recognizes that shape and replaces it with a physical
//! join:
//!
//! ```text
//! Then                                   Join(p)            HashJoin(f)
//!  ├─ Then                                ├─ l               ├─ l
//!  │   ├─ CartesianProduct(l, r)   =>     └─ r       or      └─ r
//!  │   └─ Filter(pair p)
//!  └─ Apply(merge)
//! ```
//!
//! When `p` is a field equality on `f` and hash lowering is enabled, the
//! result is a `HashJoin`; otherwise a nested-loop `Join`.

use crate::ast::{JoinPredicate, Node, Predicate, Projection};
use crate::optimizer::{Rewrite, RewriteRule};

/// Rule that turns `Then(Then(CartesianProduct, Filter), Apply(merge))`
/// into `Join` or `HashJoin`.
pub struct JoinRecognition {
    lower_to_hash_join: bool,
}

impl Default for JoinRecognition {
    fn default() -> Self {
        Self::new()
    }
}

impl JoinRecognition {
    /// Creates the rule with hash-join lowering enabled.
    pub fn new() -> Self {
        Self {
            lower_to_hash_join: true,
        }
    }

    /// Creates the rule that always produces nested-loop joins.
    pub fn nested_loop_only() -> Self {
        Self {
            lower_to_hash_join: false,
        }
    }

    /// Splits a join idiom into its predicate and sides, or hands the node
    /// back untouched.
    fn split(node: Node) -> Result<(JoinPredicate, Node, Node), Node> {
        let (first, second) = match node {
            Node::Then(first, second) => (first, second),
            other => return Err(other),
        };
        if !matches!(second.as_ref(), Node::Apply(Projection::Merge)) {
            return Err(Node::Then(first, second));
        }

        let (product, filter) = match *first {
            Node::Then(product, filter) => (product, filter),
            other => return Err(Node::then(other, *second)),
        };
        let predicate = match filter.as_ref() {
            Node::Filter(Predicate::Pair(predicate)) => predicate.clone(),
            _ => return Err(Node::then(Node::Then(product, filter), *second)),
        };

        match *product {
            Node::CartesianProduct(left, right) => Ok((predicate, *left, *right)),
            other => Err(Node::then(Node::then(other, *filter), *second)),
        }
    }
}

impl RewriteRule for JoinRecognition {
    fn rewrite(&self, node: Node) -> Rewrite {
        match Self::split(node) {
            Ok((JoinPredicate::FieldEquality(field), left, right)) if self.lower_to_hash_join => {
                Rewrite::Applied(Node::hash_join(field, left, right))
            }
            Ok((predicate, left, right)) => {
                Rewrite::Applied(Node::nested_loop_join(predicate, left, right))
            }
            Err(node) => Rewrite::Skipped(node),
        }
    }

    fn name(&self) -> &'static str {
        "join_recognition"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::NodeKind;

    fn join_idiom(predicate: JoinPredicate) -> Node {
        Node::then(
            Node::then(
                Node::cartesian_product(Node::All, Node::Count),
                Node::Filter(Predicate::on_pair(predicate)),
            ),
            Node::Apply(Projection::merge()),
        )
    }

    #[test]
    fn test_field_equality_lowers_to_hash_join() {
        let rewrite = JoinRecognition::new().rewrite(join_idiom(JoinPredicate::on("id")));
        assert!(rewrite.is_applied());
        assert_eq!(rewrite.into_node().explain(), "HashJoin [id]\n  All\n  Count\n");
    }

    #[test]
    fn test_opaque_predicate_lowers_to_join() {
        let predicate = JoinPredicate::new(|l, r| l.len() < r.len());
        let node = JoinRecognition::new().rewrite(join_idiom(predicate)).into_node();
        assert_eq!(node.kind(), NodeKind::Join);
        assert_eq!(node.children()[1].kind(), NodeKind::Count);
    }

    #[test]
    fn test_nested_loop_only() {
        let node = JoinRecognition::nested_loop_only()
            .rewrite(join_idiom(JoinPredicate::on(0)))
            .into_node();
        assert_eq!(node.explain(), "Join [#0]\n  All\n  Count\n");
    }

    #[test]
    fn test_skips_row_predicate_over_product() {
        let plan = Node::then(
            Node::then(
                Node::cartesian_product(Node::All, Node::All),
                Node::Filter(Predicate::new(|_| true)),
            ),
            Node::Apply(Projection::merge()),
        );
        let rewrite = JoinRecognition::new().rewrite(plan);
        assert!(!rewrite.is_applied());
        assert_eq!(
            rewrite.into_node().explain(),
            "Then\n  Then\n    CartesianProduct\n      All\n      All\n    Filter\n  Apply\n"
        );
    }

    #[test]
    fn test_skips_custom_projection() {
        let plan = Node::then(
            Node::then(
                Node::cartesian_product(Node::All, Node::All),
                Node::Filter(Predicate::on_pair(JoinPredicate::on(0))),
            ),
            Node::Apply(Projection::new(|r| r.clone())),
        );
        assert!(!JoinRecognition::new().rewrite(plan).is_applied());
    }

    #[test]
    fn test_skips_missing_product() {
        let plan = Node::then(
            Node::then(Node::All, Node::Filter(Predicate::on_pair(JoinPredicate::on(0)))),
            Node::Apply(Projection::merge()),
        );
        let rewrite = JoinRecognition::new().rewrite(plan);
        assert!(!rewrite.is_applied());
        assert_eq!(rewrite.into_node().explain(), "Then\n  Then\n    All\n    Filter\n  Apply\n");
    }
}
