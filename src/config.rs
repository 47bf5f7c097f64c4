//! # Run configuration.
//!
//! Provides [`RunConfig`], the settings an [`Executor`](crate::Executor)
//! applies to every run it drives.
//!
//! Unlike a soft cap, `max_concurrent` here is a hard admission ceiling:
//! the executor never has more than `max_concurrent` transforms in flight,
//! and a value of `0` is rejected at the run boundary rather than being
//! treated as "unlimited".

use crate::error::RunError;

/// Configuration for executor runs.
///
/// ## Field semantics
/// - `max_concurrent`: admission ceiling; at most `n` transforms run
///   simultaneously. Must be `>= 1`, validated when a run starts.
///
/// All fields are public for flexibility; [`RunConfig::validate`] is called
/// at the run boundary so malformed values fail before any task starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Maximum number of transforms to run concurrently.
    ///
    /// Excess inputs wait in the pending queue; the ceiling is the
    /// backpressure mechanism.
    pub max_concurrent: usize,
}

impl RunConfig {
    /// Creates a config with the given concurrency ceiling.
    pub fn new(max_concurrent: usize) -> Self {
        Self { max_concurrent }
    }

    /// Checks the config for malformed values.
    ///
    /// Returns [`RunError::InvalidConcurrency`] if `max_concurrent == 0`.
    pub fn validate(&self) -> Result<(), RunError> {
        if self.max_concurrent == 0 {
            return Err(RunError::InvalidConcurrency { got: 0 });
        }
        Ok(())
    }
}

impl Default for RunConfig {
    /// Default configuration: `max_concurrent = 4`.
    fn default() -> Self {
        Self { max_concurrent: 4 }
    }
}
