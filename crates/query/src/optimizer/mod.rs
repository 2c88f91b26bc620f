//! Query optimizer module.
//!
//! The optimizer rewrites a plan tree bottom-up. At every node it first
//! rebuilds the node from its optimized children, then offers the node to the
//! rules registered for its kind, in registration order. The first rule that
//! applies wins; its result is not offered to the remaining rules. Because
//! children are optimized before their parent, a fused child presents a shape
//! that the parent's rules can match one level up.

mod count_fusion;
mod filter_fusion;
mod join_recognition;
mod rule;

pub use count_fusion::CountFusion;
pub use filter_fusion::FilterFusion;
pub use join_recognition::JoinRecognition;
pub use rule::{Rewrite, RewriteRule};

use crate::ast::{Node, NodeKind};
use alloc::boxed::Box;
use alloc::vec::Vec;
use tracing::debug;

/// Selects which built-in rules the optimizer registers.
#[derive(Clone, Debug)]
pub struct OptimizerConfig {
    /// Conjoin consecutive filters (default: true)
    pub filter_fusion: bool,
    /// Fold a filter followed by a count into `CountIf` (default: true)
    pub count_fusion: bool,
    /// Lower the builder's join idiom to a join operator (default: true)
    pub join_recognition: bool,
    /// Lower field-equality joins to `HashJoin` rather than `Join` (default: true)
    pub hash_join_lowering: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            filter_fusion: true,
            count_fusion: true,
            join_recognition: true,
            hash_join_lowering: true,
        }
    }
}

/// Rule-based query optimizer.
pub struct Optimizer {
    rules: Vec<(NodeKind, Box<dyn RewriteRule>)>,
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Optimizer {
    /// Creates a new optimizer with the default rules.
    ///
    /// The default rules, all registered for `Then`, are tried in this order:
    /// 1. FilterFusion - `Then(Then(x, Filter(p1)), Filter(p2))` to `Then(x, Filter(p1 AND p2))`
    /// 2. CountFusion - `Then(Then(x, Filter(p)), Count)` to `Then(x, CountIf(p))`
    /// 3. JoinRecognition - filtered-and-merged cartesian product to `Join`/`HashJoin`
    pub fn new() -> Self {
        Self::with_config(OptimizerConfig::default())
    }

    /// Creates an optimizer whose built-in rules follow `config`.
    pub fn with_config(config: OptimizerConfig) -> Self {
        let mut optimizer = Self::empty();
        if config.filter_fusion {
            optimizer.register(NodeKind::Then, FilterFusion);
        }
        if config.count_fusion {
            optimizer.register(NodeKind::Then, CountFusion);
        }
        if config.join_recognition {
            let rule = if config.hash_join_lowering {
                JoinRecognition::new()
            } else {
                JoinRecognition::nested_loop_only()
            };
            optimizer.register(NodeKind::Then, rule);
        }
        optimizer
    }

    /// Creates an optimizer without rules. It still rebuilds trees bottom-up.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Registers a rule for `kind`, after every rule already registered.
    pub fn register<R>(&mut self, kind: NodeKind, rule: R) -> &mut Self
    where
        R: RewriteRule + 'static,
    {
        self.rules.push((kind, Box::new(rule)));
        self
    }

    /// Returns the names of the rules registered for `kind`, in order.
    pub fn rule_names(&self, kind: NodeKind) -> Vec<&'static str> {
        self.rules
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, rule)| rule.name())
            .collect()
    }

    /// Optimizes a plan tree.
    pub fn optimize(&self, node: Node) -> Node {
        let mut node = self.rebuild(node);
        let kind = node.kind();

        for (rule_kind, rule) in &self.rules {
            if *rule_kind != kind {
                continue;
            }
            match rule.rewrite(node) {
                Rewrite::Applied(rewritten) => {
                    debug!(rule = rule.name(), kind = %kind, "rewrite rule applied");
                    return rewritten;
                }
                Rewrite::Skipped(unchanged) => node = unchanged,
            }
        }

        node
    }

    /// First stage for every node: optimize children, then rebuild the node.
    fn rebuild(&self, node: Node) -> Node {
        match node {
            Node::Then(first, second) => Node::then(self.optimize(*first), self.optimize(*second)),
            Node::CartesianProduct(left, right) => {
                Node::cartesian_product(self.optimize(*left), self.optimize(*right))
            }
            Node::Join(predicate, left, right) => {
                Node::nested_loop_join(predicate, self.optimize(*left), self.optimize(*right))
            }
            Node::HashJoin(field, left, right) => {
                Node::hash_join(field, self.optimize(*left), self.optimize(*right))
            }
            leaf @ (Node::All
            | Node::Filter(_)
            | Node::Apply(_)
            | Node::Count
            | Node::CountIf(_)) => leaf,
        }
    }
}
