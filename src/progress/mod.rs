//! # Progress reporting.
//!
//! This module groups the progress **data model** and the **sink** trait the
//! executor notifies after each task completion:
//! - [`ProgressReport`] completion counters and percentage
//! - [`ProgressSink`] extension point for observing run progress
//! - [`LogProgress`] stdout sink for demos (feature `logging`)

mod report;
mod sink;

pub use report::ProgressReport;
pub use sink::ProgressSink;

#[cfg(feature = "logging")]
mod log;
#[cfg(feature = "logging")]
pub use log::LogProgress;
