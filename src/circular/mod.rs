//! Ring buffer queue

use std::sync::{RwLock, RwLockWriteGuard};

use log::debug;

use self::ring::Ring;
use crate::error::{Error, Result};
use crate::sync::{read, write};
use crate::{Options, Queue};

mod ring;

/// A fixed size queue that overwrites its oldest element when full.
///
/// `offer` never fails: once the queue holds `capacity` elements every new
/// element evicts the head.
///
/// ```
/// use queues::{Circular, Queue};
///
/// let queue = Circular::with_capacity([1, 2, 3], 3);
/// queue.offer(4).unwrap();
/// assert_eq!(queue.size(), 3);
/// assert_eq!(queue.clear(), vec![2, 3, 4]);
/// ```
#[derive(Debug)]
pub struct Circular<T> {
    ring: RwLock<Ring<T>>,
    initial: Vec<T>,
}

impl<T: Clone> Circular<T> {
    /// Create a queue holding `elems`.
    ///
    /// The capacity is taken from `options`, or is the number of elements
    /// if none is set. Elements past the capacity are dropped.
    pub fn new(elems: impl IntoIterator<Item = T>, options: Options) -> Self {
        let mut initial: Vec<T> = elems.into_iter().collect();
        let capacity = options.get_capacity().unwrap_or(initial.len());
        initial.truncate(capacity);

        let mut ring = Ring::with_capacity(capacity);
        initial.iter().cloned().for_each(|elem| ring.push(elem));

        Self {
            ring: RwLock::new(ring),
            initial,
        }
    }

    /// Shorthand for `Circular::new(elems, Options::with_capacity(capacity))`
    pub fn with_capacity(elems: impl IntoIterator<Item = T>, capacity: usize) -> Self {
        Self::new(elems, Options::with_capacity(capacity))
    }
}

impl<T> Circular<T> {
    /// The ring size
    pub fn capacity(&self) -> usize {
        read(&self.ring).capacity()
    }
}

impl<T: Clone + PartialEq> Queue<T> for Circular<T> {
    type Drain<'a> = Drain<'a, T> where Self: 'a;

    fn peek(&self) -> Result<T> {
        read(&self.ring)
            .front()
            .cloned()
            .ok_or(Error::NoElementsAvailable)
    }

    fn size(&self) -> usize {
        read(&self.ring).len()
    }

    fn is_empty(&self) -> bool {
        read(&self.ring).len() == 0
    }

    fn get(&self) -> Result<T> {
        write(&self.ring).pop().ok_or(Error::NoElementsAvailable)
    }

    fn offer(&self, elem: T) -> Result<()> {
        write(&self.ring).push(elem);
        Ok(())
    }

    fn contains(&self, elem: &T) -> bool {
        read(&self.ring).iter().any(|e| e == elem)
    }

    fn drain(&self) -> Self::Drain<'_> {
        Drain {
            ring: write(&self.ring),
        }
    }

    fn clear(&self) -> Vec<T> {
        let elems = write(&self.ring).clear();
        debug!("cleared {} elements", elems.len());
        elems
    }

    fn reset(&self) {
        let mut ring = write(&self.ring);
        ring.clear();
        self.initial.iter().cloned().for_each(|elem| ring.push(elem));
        debug!("reset to {} elements", ring.len());
    }
}

/// Draining iterator for [`Circular`]. The queue stays locked until it is
/// dropped.
#[derive(Debug)]
pub struct Drain<'a, T> {
    ring: RwLockWriteGuard<'a, Ring<T>>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.ring.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.ring.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}
