//! # Task abstractions.
//!
//! This module provides the task-related types:
//! - [`Transform`] - trait for the async per-input operation
//! - [`TransformFn`] - closure-backed transform implementation
//! - [`TransformRef`] - shared reference to a transform (`Arc<dyn Transform>`)
//! - `Task` - crate-private pairing of one input with its result index

mod task;
mod transform;
mod transform_fn;

pub(crate) use task::Task;
pub use transform::{Transform, TransformRef};
pub use transform_fn::TransformFn;
