//! # Progress report emitted after each task completion.
//!
//! One [`ProgressReport`] is built per completed task, in completion order
//! (not input order), and handed to every registered
//! [`ProgressSink`](crate::ProgressSink).
//!
//! ## Example
//! ```rust
//! use taskcap::ProgressReport;
//!
//! let report = ProgressReport::new(1, 3);
//! assert_eq!(report.done, 1);
//! assert_eq!(report.total, 3);
//! assert_eq!(report.percentage, 33.33);
//! ```

/// Completion counters for a run in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressReport {
    /// Share of tasks completed, in percent, rounded to two decimals.
    pub percentage: f64,
    /// Number of tasks whose outcome has been recorded so far.
    pub done: usize,
    /// Total number of tasks in the run.
    pub total: usize,
}

impl ProgressReport {
    /// Builds a report for `done` of `total` completions.
    ///
    /// Executor-emitted reports always have `total >= 1` (an empty run
    /// settles without emitting any progress). A zero `total` yields
    /// `percentage = 100.0`, never `NaN` or infinity.
    pub fn new(done: usize, total: usize) -> Self {
        debug_assert!(done <= total);

        let percentage = if total == 0 {
            100.0
        } else {
            let raw = done as f64 / total as f64 * 100.0;
            (raw * 100.0).round() / 100.0
        };
        Self {
            percentage,
            done,
            total,
        }
    }
}
