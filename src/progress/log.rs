//! # Simple logging sink for debugging and demos.
//!
//! [`LogProgress`] prints each report to stdout in a human-readable format.
//! This is primarily useful for development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! [progress] done=3 total=14 (21.43%)
//! ```

use async_trait::async_trait;

use crate::progress::report::ProgressReport;
use crate::progress::sink::ProgressSink;

/// Simple stdout progress sink.
///
/// Enabled via the `logging` feature. Not intended for production use -
/// implement a custom [`ProgressSink`] for structured logging or metrics
/// collection.
pub struct LogProgress;

#[async_trait]
impl ProgressSink for LogProgress {
    async fn on_progress(&self, report: &ProgressReport) {
        println!(
            "[progress] done={} total={} ({:.2}%)",
            report.done, report.total, report.percentage
        );
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
