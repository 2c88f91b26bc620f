//! Error types for Quarry query execution.

use alloc::string::String;
use thiserror::Error as ThisError;

/// Result type alias for Quarry operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised while executing a query plan.
///
/// Every variant is fatal to the `execute`/`run` call that raised it: the
/// caller observes either a complete table or one of these errors.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A node kind the executor has been configured not to interpret.
    #[error("Unsupported node: {kind}")]
    UnsupportedNode { kind: String },

    /// A predicate or projection reported a failure.
    #[error("Callback failed: {message}")]
    Callback { message: String },

    /// A record did not have the shape the consuming stage expected.
    #[error("Shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch { expected: String, found: String },
}

impl Error {
    /// Creates an unsupported node error.
    pub fn unsupported_node(kind: impl Into<String>) -> Self {
        Error::UnsupportedNode { kind: kind.into() }
    }

    /// Creates a callback error.
    pub fn callback(message: impl Into<String>) -> Self {
        Error::Callback {
            message: message.into(),
        }
    }

    /// Creates a shape mismatch error.
    pub fn shape_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Error::ShapeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }
}
