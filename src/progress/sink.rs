//! # Progress sink trait.
//!
//! `ProgressSink` is the extension point for observing a run as it
//! completes tasks. Sinks are invoked **inline** by the executor's
//! completion loop, once per completed task, in completion order.
//!
//! ## Contract
//! - Invocations are serialized; a sink never sees two reports at once.
//! - The executor does not retry, buffer, or shield itself from a sink:
//!   a slow sink delays the next admission, and a panicking sink unwinds
//!   through the run. Keep sinks quick and infallible.
//! - After a fail-fast abort, no further reports are emitted, not even
//!   for the failing task itself.

use async_trait::async_trait;

use crate::progress::report::ProgressReport;

/// Contract for run-progress observers.
///
/// Called from the executor's completion loop. Implementations should
/// avoid blocking the async runtime (prefer async I/O and cooperative
/// waits).
#[async_trait]
pub trait ProgressSink: Send + Sync + 'static {
    /// Handles one progress report.
    async fn on_progress(&self, report: &ProgressReport);

    /// Human-readable name (for logs/metrics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
