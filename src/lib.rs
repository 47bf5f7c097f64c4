//! # taskcap
//!
//! **Taskcap** is a bounded-concurrency task executor for Rust.
//!
//! Given an ordered collection of inputs and an async transform, it runs
//! the transform over every input while never exceeding a caller-supplied
//! concurrency ceiling, collects outcomes into a result vector aligned to
//! input order, reports progress after each completion, and optionally
//! aborts the whole run on the first failure (fail-fast).
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     inputs[0]      inputs[1]      ...      inputs[n-1]
//!         │              │                       │
//!         ▼              ▼                       ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │  Executor                                                     │
//! │  - pending queue (FIFO, one Task per input, in input order)   │
//! │  - admission: start while active < max_concurrent             │
//! │  - aggregation: join_next() serializes all bookkeeping        │
//! └──────┬──────────────────┬──────────────────┬──────────────────┘
//!        ▼                  ▼                  ▼
//!   ┌──────────┐      ┌──────────┐       ┌──────────┐
//!   │ transform│      │ transform│  ...  │ transform│   (≤ ceiling)
//!   │  .apply  │      │  .apply  │       │  .apply  │
//!   └────┬─────┘      └────┬─────┘       └────┬─────┘
//!        │ (index, outcome)│                  │
//!        └────────────┬────┴──────────────────┘
//!                     ▼
//!          completion loop (one at a time):
//!            results[index] = outcome        (input-order slot)
//!            ProgressSink::on_progress(...)  (completion order)
//!            admit next queued task
//!                     │
//!                     ▼
//!        Ok(results) once drained │ Err(first failure) on fail-fast
//! ```
//!
//! ### Lifecycle
//! ```text
//! Idle ──► Running ──► Settled(AllDone)   = Ok(Vec<Settled<T>> | Vec<T>)
//!                 └──► Settled(Aborted)   = Err(RunError::TaskFailed)
//!
//! Both settled states are terminal and exclusive: a run settles exactly
//! once. On abort, queued tasks never start; in-flight tasks get their
//! CancellationToken cancelled and finish detached, with no further
//! observable effect.
//! ```
//!
//! ## Features
//! | Area            | Description                                                      | Key types / traits                    |
//! |-----------------|------------------------------------------------------------------|---------------------------------------|
//! | **Execution**   | Bounded-concurrency runs with order-preserving results.          | [`Executor`], [`RunConfig`]           |
//! | **Transforms**  | Define the per-input operation as a trait impl or a closure.     | [`Transform`], [`TransformFn`]        |
//! | **Outcomes**    | Tagged per-task results for settle-all runs.                     | [`Settled`]                           |
//! | **Progress**    | Observe completion counts and percentage per completed task.     | [`ProgressSink`], [`ProgressReport`]  |
//! | **Errors**      | Typed errors for the run boundary and task execution.            | [`RunError`], [`TaskError`]           |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogProgress`] sink _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use tokio_util::sync::CancellationToken;
//! use taskcap::{Executor, RunConfig, Settled, TaskError, TransformFn, TransformRef};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetch: TransformRef<&'static str, String> =
//!         TransformFn::arc(|host: &'static str, _ctx: CancellationToken| async move {
//!             if host.is_empty() {
//!                 return Err(TaskError::fail("empty host"));
//!             }
//!             Ok(format!("pinged {host}"))
//!         });
//!
//!     let exec = Executor::new(RunConfig::new(2));
//!     let results = exec
//!         .run_settled(vec!["alpha", "", "gamma"], fetch)
//!         .await?;
//!
//!     assert_eq!(results[0], Settled::Fulfilled("pinged alpha".to_string()));
//!     assert!(results[1].is_rejected());
//!     assert_eq!(results[2], Settled::Fulfilled("pinged gamma".to_string()));
//!     Ok(())
//! }
//! ```

mod config;
mod core;
mod error;
mod progress;
mod results;
mod tasks;

// ---- Public re-exports ----

pub use crate::config::RunConfig;
pub use crate::core::{Executor, ExecutorBuilder};
pub use crate::error::{RunError, TaskError};
pub use crate::progress::{ProgressReport, ProgressSink};
pub use crate::results::Settled;
pub use crate::tasks::{Transform, TransformFn, TransformRef};

// Optional: expose a simple built-in progress logger (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use crate::progress::LogProgress;
