//! Error types used by the taskcap executor and tasks.
//!
//! This module defines two main error enums:
//!
//! - [`RunError`] — errors surfaced by a run as a whole.
//! - [`TaskError`] — errors produced by individual transform executions.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging/metrics.
//! [`TaskError`] is also the `Rejected` payload of [`Settled`](crate::Settled),
//! so it is `Clone`/`PartialEq` for easy assertions on collected results.

use thiserror::Error;

/// # Errors surfaced by a run as a whole.
///
/// A run fails either at the boundary (invalid configuration), because
/// fail-fast mode observed its first task failure, or (never in practice)
/// because an internal bookkeeping invariant was violated.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RunError {
    /// The concurrency ceiling was zero; the executor requires at least 1.
    #[error("concurrency limit must be at least 1 (got {got})")]
    InvalidConcurrency {
        /// The rejected `max_concurrent` value.
        got: usize,
    },

    /// Fail-fast run aborted on its first failing task.
    ///
    /// Carries exactly one reason: the first chronologically observed
    /// failure. Later failures from tasks already in flight are swallowed.
    #[error("task {index} failed: {reason}")]
    TaskFailed {
        /// Input-order index of the failing task.
        index: usize,
        /// The task's failure.
        reason: TaskError,
    },

    /// Invariant violation inside the run loop (lost join handle,
    /// unfilled result slot).
    #[error("internal run failure: {detail}")]
    Internal {
        /// What went wrong.
        detail: String,
    },
}

impl RunError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use taskcap::RunError;
    ///
    /// let err = RunError::InvalidConcurrency { got: 0 };
    /// assert_eq!(err.as_label(), "run_invalid_concurrency");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RunError::InvalidConcurrency { .. } => "run_invalid_concurrency",
            RunError::TaskFailed { .. } => "run_task_failed",
            RunError::Internal { .. } => "run_internal",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            RunError::InvalidConcurrency { got } => {
                format!("invalid concurrency limit: {got}")
            }
            RunError::TaskFailed { index, reason } => {
                format!("task {index} failed: {}", reason.as_message())
            }
            RunError::Internal { detail } => format!("internal: {detail}"),
        }
    }
}

/// # Errors produced by transform execution.
///
/// These represent failures of a single task managed by the executor.
/// In settle-all mode they are captured into the corresponding result slot;
/// in fail-fast mode the first one aborts the run.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Transform execution failed.
    #[error("execution failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// Transform panicked; the panic was caught at the task boundary.
    #[error("transform panicked: {message}")]
    Panicked {
        /// The panic payload, if it was a string.
        message: String,
    },

    /// Transform observed run cancellation and exited early.
    #[error("context cancelled")]
    Canceled,
}

impl TaskError {
    /// Convenience constructor for [`TaskError::Fail`].
    pub fn fail(error: impl Into<String>) -> Self {
        TaskError::Fail {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use taskcap::TaskError;
    ///
    /// let err = TaskError::fail("boom");
    /// assert_eq!(err.as_label(), "task_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            TaskError::Fail { .. } => "task_failed",
            TaskError::Panicked { .. } => "task_panicked",
            TaskError::Canceled => "task_canceled",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            TaskError::Fail { error } => format!("error: {error}"),
            TaskError::Panicked { message } => format!("panic: {message}"),
            TaskError::Canceled => "context cancelled".to_string(),
        }
    }
}
