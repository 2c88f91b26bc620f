//! Predicate definitions for query filtering and joining.
//!
//! Predicates are opaque callables supplied by the caller. The engine never
//! inspects a callable's body; the only structure it relies on is which
//! variant a predicate was built as.

use alloc::boxed::Box;
use alloc::sync::Arc;
use core::fmt;
use quarry_core::{FieldRef, Record, Result};

type RecordFn = dyn Fn(&Record) -> Result<bool> + Send + Sync;
type PairFn = dyn Fn(&Record, &Record) -> Result<bool> + Send + Sync;

/// A predicate over a single record.
#[derive(Clone)]
pub enum Predicate {
    /// A caller-supplied test.
    Opaque(Arc<RecordFn>),
    /// Both predicates must hold. Evaluated left to right, short-circuiting.
    And(Box<Predicate>, Box<Predicate>),
    /// A join predicate applied to the halves of a `Record::Pair`.
    Pair(JoinPredicate),
}

impl Predicate {
    /// Creates a predicate from an infallible test.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Record) -> bool + Send + Sync + 'static,
    {
        Predicate::Opaque(Arc::new(move |record| Ok(f(record))))
    }

    /// Creates a predicate from a fallible test.
    pub fn try_new<F>(f: F) -> Self
    where
        F: Fn(&Record) -> Result<bool> + Send + Sync + 'static,
    {
        Predicate::Opaque(Arc::new(f))
    }

    /// Creates a predicate over pair records from a join predicate.
    pub fn on_pair(join: JoinPredicate) -> Self {
        Predicate::Pair(join)
    }

    /// Conjoins two predicates: a record must satisfy both.
    pub fn and(self, other: Predicate) -> Self {
        Predicate::And(Box::new(self), Box::new(other))
    }

    /// Evaluates the predicate against a record.
    pub fn eval(&self, record: &Record) -> Result<bool> {
        match self {
            Predicate::Opaque(f) => f(record),
            Predicate::And(a, b) => {
                if !a.eval(record)? {
                    return Ok(false);
                }
                b.eval(record)
            }
            Predicate::Pair(join) => {
                let (left, right) = record.as_pair()?;
                join.eval(left, right)
            }
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Opaque(_) => write!(f, "Opaque(<fn>)"),
            Predicate::And(a, b) => f.debug_tuple("And").field(a).field(b).finish(),
            Predicate::Pair(join) => f.debug_tuple("Pair").field(join).finish(),
        }
    }
}

/// A predicate over a left and a right record.
#[derive(Clone)]
pub enum JoinPredicate {
    /// A caller-supplied test.
    Opaque(Arc<PairFn>),
    /// Equality of one field on both sides. Recognized by the optimizer as an
    /// equi-join and lowered to a hash join.
    FieldEquality(FieldRef),
}

impl JoinPredicate {
    /// Creates a join predicate from an infallible test.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Record, &Record) -> bool + Send + Sync + 'static,
    {
        JoinPredicate::Opaque(Arc::new(move |l, r| Ok(f(l, r))))
    }

    /// Creates a join predicate from a fallible test.
    pub fn try_new<F>(f: F) -> Self
    where
        F: Fn(&Record, &Record) -> Result<bool> + Send + Sync + 'static,
    {
        JoinPredicate::Opaque(Arc::new(f))
    }

    /// Creates a join predicate comparing `field` on both records.
    pub fn on(field: impl Into<FieldRef>) -> Self {
        JoinPredicate::FieldEquality(field.into())
    }

    /// Returns the equi-join field, if this predicate is a field equality.
    pub fn equi_join_field(&self) -> Option<&FieldRef> {
        match self {
            JoinPredicate::FieldEquality(field) => Some(field),
            JoinPredicate::Opaque(_) => None,
        }
    }

    /// Evaluates the predicate against a pair of records.
    ///
    /// A field equality fails with a shape mismatch when either side lacks
    /// the field.
    pub fn eval(&self, left: &Record, right: &Record) -> Result<bool> {
        match self {
            JoinPredicate::Opaque(f) => f(left, right),
            JoinPredicate::FieldEquality(field) => Ok(left.field(field)? == right.field(field)?),
        }
    }
}

impl fmt::Debug for JoinPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinPredicate::Opaque(_) => write!(f, "Opaque(<fn>)"),
            JoinPredicate::FieldEquality(field) => {
                f.debug_tuple("FieldEquality").field(field).finish()
            }
        }
    }
}
