//! One queued unit of work: an input value bound to its result index.

/// An input element waiting to run, tagged with the slot its outcome
/// will be written to.
///
/// Created once per input at submission time, in input order, and
/// consumed when the task is admitted.
#[derive(Debug)]
pub(crate) struct Task<I> {
    value: I,
    index: usize,
}

impl<I> Task<I> {
    /// Binds `value` to result slot `index`.
    pub(crate) fn new(value: I, index: usize) -> Self {
        Self { value, index }
    }

    /// Consumes the task, yielding its input and result index.
    pub(crate) fn into_parts(self) -> (I, usize) {
        (self.value, self.index)
    }
}
