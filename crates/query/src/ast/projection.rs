//! Projection definitions.

use alloc::sync::Arc;
use core::fmt;
use quarry_core::{Record, Result};

type MapFn = dyn Fn(&Record) -> Result<Record> + Send + Sync;

/// A record-to-record transformation.
#[derive(Clone)]
pub enum Projection {
    /// A caller-supplied transformation.
    Map(Arc<MapFn>),
    /// Merges the halves of a `Record::Pair` with `Record::merge`.
    Merge,
}

impl Projection {
    /// Creates a projection from an infallible transformation.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Record) -> Record + Send + Sync + 'static,
    {
        Projection::Map(Arc::new(move |record| Ok(f(record))))
    }

    /// Creates a projection from a fallible transformation.
    pub fn try_new<F>(f: F) -> Self
    where
        F: Fn(&Record) -> Result<Record> + Send + Sync + 'static,
    {
        Projection::Map(Arc::new(f))
    }

    /// The projection that merges joined pairs.
    pub fn merge() -> Self {
        Projection::Merge
    }

    /// Applies the projection to a record.
    pub fn apply(&self, record: &Record) -> Result<Record> {
        match self {
            Projection::Map(f) => f(record),
            Projection::Merge => {
                let (left, right) = record.as_pair()?;
                Record::merge(left, right)
            }
        }
    }
}

impl fmt::Debug for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Projection::Map(_) => write!(f, "Map(<fn>)"),
            Projection::Merge => write!(f, "Merge"),
        }
    }
}
