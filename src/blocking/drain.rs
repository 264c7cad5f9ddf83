use std::sync::MutexGuard;

use super::State;

/// Draining iterator for [`Blocking`](super::Blocking).
///
/// The queue stays locked until the iterator is dropped. Waiting offerers
/// are woken as elements are removed but only get to insert after that.
#[derive(Debug)]
pub struct Drain<'a, T> {
    state: MutexGuard<'a, State<T>>,
}

impl<'a, T> Drain<'a, T> {
    pub(super) fn new(state: MutexGuard<'a, State<T>>) -> Self {
        Self { state }
    }
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.state.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.state.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}
