//! Executor core: admission, aggregation, and run lifecycle.
//!
//! The only public API from this module is [`Executor`] (and its builder),
//! which drives a whole run: admits tasks up to the concurrency ceiling,
//! aggregates completions into order-aligned results, reports progress,
//! and settles the run exactly once.
//!
//! Internal modules:
//! - [`state`]: owned run bookkeeping (pending queue, counters, result slots);
//! - [`launch`]: spawns one admitted task with panic capture;
//! - [`executor`]: the public entry points and the completion loop.

mod executor;
mod launch;
mod state;

pub use executor::{Executor, ExecutorBuilder};
