//! Rewrite rule trait.

use crate::ast::Node;

/// Outcome of offering a node to a rewrite rule.
#[derive(Debug)]
pub enum Rewrite {
    /// The rule matched and produced a replacement.
    Applied(Node),
    /// The rule did not match; the node is handed back unchanged.
    Skipped(Node),
}

impl Rewrite {
    /// Returns the resulting node, whether or not the rule applied.
    pub fn into_node(self) -> Node {
        match self {
            Rewrite::Applied(node) | Rewrite::Skipped(node) => node,
        }
    }

    /// Returns true if the rule applied.
    pub fn is_applied(&self) -> bool {
        matches!(self, Rewrite::Applied(_))
    }
}

/// A rewrite rule registered for one node kind.
///
/// Rules must be pure and must never fail: a rule that cannot confidently
/// produce an equivalent tree returns `Rewrite::Skipped`.
pub trait RewriteRule: Send + Sync {
    /// Rewrites the node, or hands it back.
    fn rewrite(&self, node: Node) -> Rewrite;

    /// Returns the name of this rule.
    fn name(&self) -> &'static str {
        "unnamed"
    }
}
