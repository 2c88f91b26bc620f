//! AST module for plan trees and the callables they carry.

mod node;
mod predicate;
mod projection;

pub use node::{Node, NodeKind};
pub use predicate::{JoinPredicate, Predicate};
pub use projection::Projection;
