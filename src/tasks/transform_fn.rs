//! # Closure-backed transform (`TransformFn`)
//!
//! [`TransformFn`] wraps a closure `F: Fn(I, CancellationToken) -> Fut`,
//! producing a fresh future per invocation. Each call owns its own state;
//! if calls need shared state, put an `Arc<...>` inside the closure
//! explicitly.
//!
//! ## Example
//! ```rust
//! use tokio_util::sync::CancellationToken;
//! use taskcap::{TransformFn, TransformRef, TaskError};
//!
//! let double: TransformRef<u32, u32> =
//!     TransformFn::arc(|n: u32, _ctx: CancellationToken| async move {
//!         Ok::<_, TaskError>(n * 2)
//!     });
//! ```

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::TaskError;
use crate::tasks::transform::Transform;

/// Closure-backed transform implementation.
///
/// Wraps a closure that *creates* a new future per input.
#[derive(Debug)]
pub struct TransformFn<F> {
    f: F,
}

impl<F> TransformFn<F> {
    /// Creates a new closure-backed transform.
    ///
    /// Prefer [`TransformFn::arc`] when you immediately need a
    /// [`TransformRef`](crate::TransformRef).
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the transform and returns it as a shared handle.
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

#[async_trait]
impl<I, T, F, Fut> Transform<I> for TransformFn<F>
where
    I: Send + 'static,
    T: Send + 'static,
    F: Fn(I, CancellationToken) -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = Result<T, TaskError>> + Send + 'static,
{
    type Output = T;

    async fn apply(&self, input: I, ctx: CancellationToken) -> Result<T, TaskError> {
        (self.f)(input, ctx).await
    }
}
