//! # Run bookkeeping.
//!
//! [`RunState`] is the single owned value behind one run: the FIFO pending
//! queue, the active/done counters, the fixed-length result slots, and the
//! abort flag. It is only ever touched from the executor's completion loop,
//! so no lock guards it: `join_next()` serializes every mutation.
//!
//! ## Invariants
//! - `active` never exceeds the concurrency ceiling ([`RunState::next_admission`]
//!   refuses while at the ceiling).
//! - Each result slot is written exactly once, by the task whose index it is.
//! - Once `aborted` is set, no further task is admitted.

use std::collections::VecDeque;

use crate::results::Settled;
use crate::tasks::Task;

/// Mutable state of one run.
pub(crate) struct RunState<I, T> {
    pending: VecDeque<Task<I>>,
    results: Vec<Option<Settled<T>>>,
    active: usize,
    done: usize,
    aborted: bool,
}

impl<I, T> RunState<I, T> {
    /// Creates the state for a run over `pending` tasks (already in input
    /// order), with one result slot per task.
    pub(crate) fn new(pending: VecDeque<Task<I>>) -> Self {
        let total = pending.len();
        Self {
            pending,
            results: std::iter::repeat_with(|| None).take(total).collect(),
            active: 0,
            done: 0,
            aborted: false,
        }
    }

    /// Pops the next task to start, if admission allows.
    ///
    /// Admits while `active < limit` and the run is not aborted; the caller
    /// must actually start the returned task, since `active` is already
    /// incremented for it.
    pub(crate) fn next_admission(&mut self, limit: usize) -> Option<Task<I>> {
        if self.aborted || self.active >= limit {
            return None;
        }
        let task = self.pending.pop_front()?;
        self.active += 1;
        Some(task)
    }

    /// Records one task's outcome at its slot.
    pub(crate) fn record(&mut self, index: usize, outcome: Settled<T>) {
        debug_assert!(self.results[index].is_none(), "slot {index} written twice");
        debug_assert!(self.active > 0);

        self.results[index] = Some(outcome);
        self.done += 1;
        self.active -= 1;
    }

    /// Marks the run aborted; no further admissions will be granted.
    pub(crate) fn abort(&mut self) {
        self.aborted = true;
    }

    /// Number of tasks whose outcome has been recorded.
    pub(crate) fn done(&self) -> usize {
        self.done
    }

    /// Total number of tasks in the run.
    pub(crate) fn total(&self) -> usize {
        self.results.len()
    }

    /// True once nothing is running and nothing is queued.
    pub(crate) fn is_complete(&self) -> bool {
        self.active == 0 && self.pending.is_empty()
    }

    /// Consumes the state, yielding the results in input order.
    ///
    /// Returns `None` if any slot was never written; the caller treats
    /// that as an internal invariant violation.
    pub(crate) fn into_results(self) -> Option<Vec<Settled<T>>> {
        self.results.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskError;

    fn state_over(values: &[&'static str]) -> RunState<&'static str, String> {
        let pending = values
            .iter()
            .enumerate()
            .map(|(index, value)| Task::new(*value, index))
            .collect();
        RunState::new(pending)
    }

    #[test]
    fn test_admission_respects_ceiling() {
        let mut state = state_over(&["a", "b", "c"]);

        assert!(state.next_admission(2).is_some());
        assert!(state.next_admission(2).is_some());
        // At the ceiling: third task stays queued.
        assert!(state.next_admission(2).is_none());
    }

    #[test]
    fn test_admission_is_fifo() {
        let mut state = state_over(&["a", "b", "c"]);

        let first = state.next_admission(3).unwrap().into_parts();
        let second = state.next_admission(3).unwrap().into_parts();
        let third = state.next_admission(3).unwrap().into_parts();
        assert_eq!(first, ("a", 0));
        assert_eq!(second, ("b", 1));
        assert_eq!(third, ("c", 2));
    }

    #[test]
    fn test_record_frees_a_slot_for_admission() {
        let mut state = state_over(&["a", "b", "c"]);
        let task = state.next_admission(1).unwrap();
        assert!(state.next_admission(1).is_none());

        let (_, index) = task.into_parts();
        state.record(index, Settled::Fulfilled("done".into()));
        assert_eq!(state.done(), 1);

        let next = state.next_admission(1).unwrap();
        assert_eq!(next.into_parts().1, 1);
    }

    #[test]
    fn test_abort_blocks_admission() {
        let mut state = state_over(&["a", "b", "c"]);
        state.next_admission(2).unwrap();
        state.abort();
        assert!(state.next_admission(2).is_none());
    }

    #[test]
    fn test_results_keep_input_order() {
        let mut state = state_over(&["a", "b"]);
        state.next_admission(2).unwrap();
        state.next_admission(2).unwrap();

        // Completion order reversed relative to input order.
        state.record(1, Settled::Fulfilled("result-of-b".into()));
        state.record(0, Settled::Rejected(TaskError::fail("error-a")));
        assert!(state.is_complete());

        let results = state.into_results().unwrap();
        assert_eq!(results[0], Settled::Rejected(TaskError::fail("error-a")));
        assert_eq!(results[1], Settled::Fulfilled("result-of-b".to_string()));
    }

    #[test]
    fn test_unfilled_slot_detected() {
        let mut state = state_over(&["a", "b"]);
        state.next_admission(2).unwrap();
        state.next_admission(2).unwrap();
        state.record(0, Settled::Fulfilled("x".into()));

        assert!(state.into_results().is_none());
    }

    #[test]
    fn test_empty_run_is_complete_immediately() {
        let state: RunState<&str, String> = state_over(&[]);
        assert!(state.is_complete());
        assert_eq!(state.total(), 0);
        assert_eq!(state.into_results().unwrap(), Vec::new());
    }
}
