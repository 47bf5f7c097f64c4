//! # Settled task outcomes.
//!
//! [`Settled`] is the tagged outcome record stored at each result slot of a
//! settle-all run: either the transform's value or its failure, in the slot
//! matching the task's input-order index.
//!
//! ## Example
//! ```rust
//! use taskcap::{Settled, TaskError};
//!
//! let ok: Settled<u32> = Settled::Fulfilled(7);
//! assert!(ok.is_fulfilled());
//! assert_eq!(ok.value(), Some(&7));
//!
//! let bad: Settled<u32> = Settled::Rejected(TaskError::fail("boom"));
//! assert!(bad.is_rejected());
//! assert_eq!(bad.reason().map(TaskError::as_label), Some("task_failed"));
//! ```

use crate::error::TaskError;

/// Outcome of a single task, tagged by how it settled.
#[derive(Debug, Clone, PartialEq)]
pub enum Settled<T> {
    /// The transform succeeded with this value.
    Fulfilled(T),
    /// The transform failed with this reason.
    Rejected(TaskError),
}

impl<T> Settled<T> {
    /// Returns `true` if the task succeeded.
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, Settled::Fulfilled(_))
    }

    /// Returns `true` if the task failed.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Settled::Rejected(_))
    }

    /// Returns the success value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Settled::Fulfilled(v) => Some(v),
            Settled::Rejected(_) => None,
        }
    }

    /// Returns the failure reason, if any.
    pub fn reason(&self) -> Option<&TaskError> {
        match self {
            Settled::Fulfilled(_) => None,
            Settled::Rejected(e) => Some(e),
        }
    }

    /// Consumes the outcome, returning the success value if any.
    pub fn into_value(self) -> Option<T> {
        match self {
            Settled::Fulfilled(v) => Some(v),
            Settled::Rejected(_) => None,
        }
    }
}
