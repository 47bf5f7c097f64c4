//! # Executor: drives a bounded-concurrency run from admission to settlement.
//!
//! The [`Executor`] owns the run configuration and the registered progress
//! sinks. Each call to [`Executor::run_settled`] or
//! [`Executor::run_fail_fast`] drives one complete run:
//!
//! ```text
//! Inputs:
//!   Vec<I> ──► Task{value, index} per input, FIFO pending queue
//!
//! Admission:
//!   while active < max_concurrent: pop front ──► launch() on JoinSet
//!
//! Completion loop (join_next() serializes all bookkeeping):
//!   (index, Ok(value))  ──► results[index] = Fulfilled(value)
//!   (index, Err(e))     ──► settle-all:  results[index] = Rejected(e)
//!                       ──► fail-fast:   abort, cancel token,
//!                                        detach in-flight, return Err
//!   then: emit one ProgressReport ──► admit next queued task
//!
//! Settlement (exactly once per run):
//!   JoinSet drained ──► Ok(results)          (all slots populated)
//!   first failure   ──► Err(TaskFailed)      (fail-fast only)
//! ```
//!
//! ## Rules
//! - `active` never exceeds `max_concurrent`; the ceiling is the
//!   backpressure mechanism.
//! - Result placement is by input index, independent of completion order.
//! - Progress is reported in completion order, never after an abort.
//! - Started tasks are never force-aborted: on fail-fast abort they are
//!   detached with a cancelled token and finish silently in the background.

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::config::RunConfig;
use crate::core::launch::launch;
use crate::core::state::RunState;
use crate::error::RunError;
use crate::progress::{ProgressReport, ProgressSink};
use crate::results::Settled;
use crate::tasks::{Task, TransformRef};

/// Drives bounded-concurrency runs over ordered inputs.
///
/// ## Example
/// ```rust
/// use tokio_util::sync::CancellationToken;
/// use taskcap::{Executor, RunConfig, TaskError, TransformFn, TransformRef};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let double: TransformRef<u32, u32> =
///         TransformFn::arc(|n: u32, _ctx: CancellationToken| async move {
///             Ok::<_, TaskError>(n * 2)
///         });
///
///     let exec = Executor::new(RunConfig::new(3));
///     let results = exec.run_fail_fast(vec![1, 2, 3, 4], double).await?;
///     assert_eq!(results, vec![2, 4, 6, 8]);
///     Ok(())
/// }
/// ```
pub struct Executor {
    /// Run configuration.
    pub cfg: RunConfig,
    sinks: Vec<Arc<dyn ProgressSink>>,
}

impl Executor {
    /// Creates an executor with no progress sinks.
    pub fn new(cfg: RunConfig) -> Self {
        Self::builder(cfg).build()
    }

    /// Starts building an executor with the given config.
    pub fn builder(cfg: RunConfig) -> ExecutorBuilder {
        ExecutorBuilder {
            cfg,
            sinks: Vec::new(),
        }
    }

    /// Runs the transform over all inputs, settling every task.
    ///
    /// Task failures are captured locally: slot `i` holds the tagged
    /// outcome of `inputs[i]`, and the run itself succeeds once every
    /// task has settled, however many of them failed.
    ///
    /// Fails only at the boundary ([`RunError::InvalidConcurrency`]) or on
    /// an internal invariant violation.
    pub async fn run_settled<I, T>(
        &self,
        inputs: Vec<I>,
        transform: TransformRef<I, T>,
    ) -> Result<Vec<Settled<T>>, RunError>
    where
        I: Send + 'static,
        T: Send + 'static,
    {
        self.drive(inputs, transform, false).await
    }

    /// Runs the transform over all inputs, aborting on the first failure.
    ///
    /// On success, slot `i` holds the plain value produced from `inputs[i]`.
    /// On the first failure the run settles immediately with
    /// [`RunError::TaskFailed`]: queued tasks are never started, in-flight
    /// tasks get their [`CancellationToken`] cancelled and finish silently
    /// in the background, and no further progress is reported.
    pub async fn run_fail_fast<I, T>(
        &self,
        inputs: Vec<I>,
        transform: TransformRef<I, T>,
    ) -> Result<Vec<T>, RunError>
    where
        I: Send + 'static,
        T: Send + 'static,
    {
        let settled = self.drive(inputs, transform, true).await?;
        settled
            .into_iter()
            .map(Settled::into_value)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| RunError::Internal {
                detail: "rejected outcome survived a fail-fast run".to_string(),
            })
    }

    /// The completion loop shared by both run modes.
    async fn drive<I, T>(
        &self,
        inputs: Vec<I>,
        transform: TransformRef<I, T>,
        fail_fast: bool,
    ) -> Result<Vec<Settled<T>>, RunError>
    where
        I: Send + 'static,
        T: Send + 'static,
    {
        self.cfg.validate()?;
        let limit = self.cfg.max_concurrent;

        let pending: VecDeque<Task<I>> = inputs
            .into_iter()
            .enumerate()
            .map(|(index, value)| Task::new(value, index))
            .collect();

        let mut state = RunState::new(pending);
        let mut set: JoinSet<_> = JoinSet::new();
        let ctx = CancellationToken::new();

        // Initial admission: up to `limit` tasks, in input order. For an
        // empty input the loop below never runs and the run settles here.
        while let Some(task) = state.next_admission(limit) {
            launch(&mut set, &transform, task, &ctx);
        }

        while let Some(joined) = set.join_next().await {
            let (index, outcome) = joined.map_err(|err| RunError::Internal {
                detail: format!("join handle lost: {err}"),
            })?;

            match outcome {
                Ok(value) => state.record(index, Settled::Fulfilled(value)),
                Err(reason) if fail_fast => {
                    state.abort();
                    ctx.cancel();
                    set.detach_all();
                    return Err(RunError::TaskFailed { index, reason });
                }
                Err(reason) => state.record(index, Settled::Rejected(reason)),
            }

            self.emit_progress(state.done(), state.total()).await;

            if let Some(task) = state.next_admission(limit) {
                launch(&mut set, &transform, task, &ctx);
            }
        }

        debug_assert!(state.is_complete());
        state.into_results().ok_or_else(|| RunError::Internal {
            detail: "result slot left unfilled".to_string(),
        })
    }

    /// Builds one report and hands it to every sink, in registration order.
    async fn emit_progress(&self, done: usize, total: usize) {
        if self.sinks.is_empty() {
            return;
        }
        let report = ProgressReport::new(done, total);
        for sink in &self.sinks {
            sink.on_progress(&report).await;
        }
    }
}

/// Builder for [`Executor`].
pub struct ExecutorBuilder {
    cfg: RunConfig,
    sinks: Vec<Arc<dyn ProgressSink>>,
}

impl ExecutorBuilder {
    /// Registers a progress sink; may be called repeatedly.
    ///
    /// Sinks are notified in registration order after every completion.
    pub fn with_progress(mut self, sink: Arc<dyn ProgressSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Finishes the builder.
    pub fn build(self) -> Executor {
        Executor {
            cfg: self.cfg,
            sinks: self.sinks,
        }
    }
}
