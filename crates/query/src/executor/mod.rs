//! Query executor module.

mod aggregate;
mod filter;
pub mod join;
mod project;
mod runner;

pub use aggregate::CountExecutor;
pub use filter::FilterExecutor;
pub use join::{CrossProduct, HashJoin, NestedLoopJoin};
pub use project::ProjectExecutor;
pub use runner::{Executor, ExecutorConfig};
