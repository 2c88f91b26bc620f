//! JOIN algorithm implementations.

mod cross;
mod hash;
mod nested;

pub use cross::{cross_product, CrossProduct};
pub use hash::HashJoin;
pub use nested::NestedLoopJoin;
