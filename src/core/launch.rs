//! # Start one admitted task.
//!
//! Spawns the transform for a single [`Task`] onto the run's `JoinSet`,
//! tagging the outcome with the task's result index and catching panics at
//! the task boundary so one misbehaving transform cannot take the whole
//! run down with it.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::error::TaskError;
use crate::tasks::{Task, TransformRef};

/// Spawns `task` onto `set`.
///
/// The spawned future resolves to `(index, outcome)`; a panicking transform
/// yields `Err(TaskError::Panicked)` at its own index instead of a join
/// error, so the completion loop never loses track of which slot failed.
pub(crate) fn launch<I, T>(
    set: &mut JoinSet<(usize, Result<T, TaskError>)>,
    transform: &TransformRef<I, T>,
    task: Task<I>,
    ctx: &CancellationToken,
) where
    I: Send + 'static,
    T: Send + 'static,
{
    let transform = TransformRef::clone(transform);
    let ctx = ctx.clone();
    let (value, index) = task.into_parts();

    set.spawn(async move {
        let outcome = match AssertUnwindSafe(transform.apply(value, ctx))
            .catch_unwind()
            .await
        {
            Ok(res) => res,
            Err(panic) => Err(TaskError::Panicked {
                message: panic_message(panic.as_ref()),
            }),
        };
        (index, outcome)
    });
}

/// Extracts a printable message from a panic payload.
fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
