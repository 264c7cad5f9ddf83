use crate::error::Result;

/// The contract shared by every queue in this crate.
///
/// Elements are added at the tail and removed from the head. All methods
/// take `&self`: each queue guards its own state with a lock, so a queue can
/// be shared between threads behind an `Arc`.
///
/// ```
/// use queues::{Linked, Queue};
///
/// fn drain_all<T, Q: Queue<T>>(queue: &Q) -> Vec<T> {
///     queue.drain().collect()
/// }
///
/// let queue = Linked::new([1, 2, 3]);
/// assert_eq!(drain_all(&queue), vec![1, 2, 3]);
/// ```
pub trait Queue<T> {
    /// Iterator returned by [`Queue::drain`]
    type Drain<'a>: Iterator<Item = T>
    where
        Self: 'a;

    /// Returns a copy of the head of the queue without removing it.
    fn peek(&self) -> Result<T>;

    /// The number of elements in the queue.
    fn size(&self) -> usize;

    /// `true` if the queue holds no elements.
    fn is_empty(&self) -> bool;

    /// Removes and returns the head of the queue.
    ///
    /// Never blocks: an empty queue returns `Error::NoElementsAvailable`.
    fn get(&self) -> Result<T>;

    /// Inserts an element at the tail of the queue.
    ///
    /// Never blocks: a bounded queue at capacity returns `Error::QueueFull`.
    fn offer(&self, elem: T) -> Result<()>;

    /// `true` if an element equal to `elem` is in the queue.
    fn contains(&self, elem: &T) -> bool;

    /// A one-shot iterator that removes elements from the head as it is
    /// consumed. Elements not consumed stay in the queue.
    fn drain(&self) -> Self::Drain<'_>;

    /// Removes and returns every element, head first.
    fn clear(&self) -> Vec<T>;

    /// Replaces the contents with the elements the queue was created with.
    fn reset(&self);
}
