//! Priority queue

use std::fmt::{self, Debug};
use std::sync::{RwLock, RwLockWriteGuard};

use log::debug;

use self::heap::Heap;
use crate::error::{Error, Result};
use crate::sync::{read, write};
use crate::{Options, Queue};

mod heap;

/// A queue whose head is always its highest priority element.
///
/// Priority is decided by the `less` function given at construction:
/// `less(a, b)` returning `true` means `a` leaves the queue before `b`.
///
/// ```
/// use queues::{Options, Priority, Queue};
///
/// let queue = Priority::new([4, 1, 2], |a: &i32, b: &i32| a < b, Options::new().capacity(4));
/// queue.offer(5).unwrap();
///
/// assert_eq!(queue.drain().collect::<Vec<_>>(), vec![1, 2, 4, 5]);
/// ```
pub struct Priority<T, F = fn(&T, &T) -> bool> {
    heap: RwLock<Heap<T, F>>,
    initial: Vec<T>,
    capacity: Option<usize>,
}

impl<T, F> Priority<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    /// Create a queue holding `elems`, ordered by `less`.
    ///
    /// If there are more elements than the capacity only the `capacity`
    /// highest priority elements are kept.
    pub fn new(elems: impl IntoIterator<Item = T>, less: F, options: Options) -> Self {
        let capacity = options.get_capacity();
        let mut heap = Heap::new(elems.into_iter().collect(), less);

        if let Some(capacity) = capacity.filter(|capacity| *capacity < heap.len()) {
            // Popped in priority order, which is also a valid heap layout
            let kept = (0..capacity).filter_map(|_| heap.pop()).collect();
            heap.replace(kept);
        }

        Self {
            initial: heap.as_slice().to_vec(),
            heap: RwLock::new(heap),
            capacity,
        }
    }
}

impl<T, F> Priority<T, F> {
    /// The capacity, if one was set
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }
}

impl<T, F> Queue<T> for Priority<T, F>
where
    T: Clone + PartialEq,
    F: Fn(&T, &T) -> bool,
{
    type Drain<'a> = Drain<'a, T, F> where Self: 'a;

    fn peek(&self) -> Result<T> {
        read(&self.heap)
            .peek()
            .cloned()
            .ok_or(Error::NoElementsAvailable)
    }

    fn size(&self) -> usize {
        read(&self.heap).len()
    }

    fn is_empty(&self) -> bool {
        read(&self.heap).len() == 0
    }

    fn get(&self) -> Result<T> {
        write(&self.heap).pop().ok_or(Error::NoElementsAvailable)
    }

    fn offer(&self, elem: T) -> Result<()> {
        let mut heap = write(&self.heap);
        if self.capacity.is_some_and(|capacity| heap.len() >= capacity) {
            return Err(Error::QueueFull);
        }
        heap.push(elem);
        Ok(())
    }

    fn contains(&self, elem: &T) -> bool {
        read(&self.heap).as_slice().contains(elem)
    }

    fn drain(&self) -> Self::Drain<'_> {
        Drain {
            heap: write(&self.heap),
        }
    }

    fn clear(&self) -> Vec<T> {
        let mut heap = write(&self.heap);
        let elems: Vec<T> = std::iter::from_fn(|| heap.pop()).collect();
        debug!("cleared {} elements", elems.len());
        elems
    }

    fn reset(&self) {
        write(&self.heap).replace(self.initial.clone());
        debug!("reset to {} elements", self.initial.len());
    }
}

impl<T, F> Debug for Priority<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Priority")
            .field("size", &read(&self.heap).len())
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

/// Draining iterator for [`Priority`], yielding elements highest priority
/// first. The queue stays locked until it is dropped.
pub struct Drain<'a, T, F> {
    heap: RwLockWriteGuard<'a, Heap<T, F>>,
}

impl<T, F> Debug for Drain<'_, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Drain")
            .field("remaining", &self.heap.len())
            .finish_non_exhaustive()
    }
}

impl<T, F> Iterator for Drain<'_, T, F>
where
    F: Fn(&T, &T) -> bool,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, F> ExactSizeIterator for Drain<'_, T, F> where F: Fn(&T, &T) -> bool {}
