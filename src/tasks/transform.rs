//! # Transform abstraction.
//!
//! This module defines the [`Transform`] trait: the async, cancelable
//! operation the executor applies to every input. The common handle type is
//! [`TransformRef`], an `Arc<dyn Transform>` suitable for sharing across
//! concurrently running tasks.
//!
//! A transform receives a [`CancellationToken`] alongside its input. The
//! executor never force-aborts a started transform; on fail-fast abort it
//! cancels the token instead, so implementations that check it can stop
//! cooperatively rather than running to completion for a result nobody
//! will see.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::TaskError;

/// Shared handle to a transform.
pub type TransformRef<I, T> = Arc<dyn Transform<I, Output = T>>;

/// # Asynchronous per-input operation.
///
/// Applied once per input element, up to the configured concurrency
/// ceiling at a time. Implementations that may run long should check
/// `ctx.is_cancelled()` (or await `ctx.cancelled()`) and return
/// [`TaskError::Canceled`] promptly after a fail-fast abort.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use tokio_util::sync::CancellationToken;
/// use taskcap::{Transform, TaskError};
///
/// struct Double;
///
/// #[async_trait]
/// impl Transform<u32> for Double {
///     type Output = u32;
///
///     async fn apply(&self, input: u32, _ctx: CancellationToken) -> Result<u32, TaskError> {
///         Ok(input * 2)
///     }
/// }
/// ```
#[async_trait]
pub trait Transform<I>: Send + Sync + 'static {
    /// The success value produced per input.
    type Output: Send + 'static;

    /// Applies the operation to one input.
    ///
    /// The outcome lands in the result slot matching the input's position,
    /// regardless of completion order.
    async fn apply(&self, input: I, ctx: CancellationToken) -> Result<Self::Output, TaskError>;
}
