//! Linked list queue

use std::sync::{RwLock, RwLockWriteGuard};

use log::debug;

use self::list::List;
use crate::error::{Error, Result};
use crate::sync::{read, write};
use crate::Queue;

mod list;
mod slab;

/// An unbounded FIFO queue backed by a singly linked list.
///
/// ```
/// use queues::{Linked, Queue};
///
/// let queue = Linked::new([1, 2]);
/// queue.offer(3).unwrap();
/// assert_eq!(queue.get(), Ok(1));
/// assert_eq!(queue.clear(), vec![2, 3]);
/// ```
#[derive(Debug)]
pub struct Linked<T> {
    list: RwLock<List<T>>,
    initial: Vec<T>,
}

impl<T: Clone> Linked<T> {
    /// Create a queue holding `elems`
    pub fn new(elems: impl IntoIterator<Item = T>) -> Self {
        let initial: Vec<T> = elems.into_iter().collect();
        let mut list = List::new();
        initial.iter().cloned().for_each(|elem| list.push_back(elem));

        Self {
            list: RwLock::new(list),
            initial,
        }
    }
}

impl<T: Clone + PartialEq> Queue<T> for Linked<T> {
    type Drain<'a> = Drain<'a, T> where Self: 'a;

    fn peek(&self) -> Result<T> {
        read(&self.list)
            .front()
            .cloned()
            .ok_or(Error::NoElementsAvailable)
    }

    fn size(&self) -> usize {
        read(&self.list).len()
    }

    fn is_empty(&self) -> bool {
        read(&self.list).len() == 0
    }

    fn get(&self) -> Result<T> {
        write(&self.list)
            .pop_front()
            .ok_or(Error::NoElementsAvailable)
    }

    fn offer(&self, elem: T) -> Result<()> {
        write(&self.list).push_back(elem);
        Ok(())
    }

    fn contains(&self, elem: &T) -> bool {
        read(&self.list).iter().any(|e| e == elem)
    }

    fn drain(&self) -> Self::Drain<'_> {
        Drain {
            list: write(&self.list),
        }
    }

    fn clear(&self) -> Vec<T> {
        let elems = write(&self.list).clear();
        debug!("cleared {} elements", elems.len());
        elems
    }

    fn reset(&self) {
        let mut list = write(&self.list);
        list.clear();
        self.initial.iter().cloned().for_each(|elem| list.push_back(elem));
        debug!("reset to {} elements", list.len());
    }
}

/// Draining iterator for [`Linked`]. The queue stays locked until it is
/// dropped.
#[derive(Debug)]
pub struct Drain<'a, T> {
    list: RwLockWriteGuard<'a, List<T>>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fifo() {
        let queue = Linked::new([1, 2]);
        queue.offer(3).unwrap();
        queue.offer(4).unwrap();
        assert_eq!(queue.size(), 4);
        for expected in 1..=4 {
            assert_eq!(queue.get(), Ok(expected));
        }
        assert_eq!(queue.get(), Err(Error::NoElementsAvailable));
        assert!(queue.is_empty());
    }

    #[test]
    fn peek() {
        let queue = Linked::new(["a".to_string()]);
        assert_eq!(queue.peek(), Ok("a".to_string()));
        assert_eq!(queue.size(), 1);
        queue.get().unwrap();
        assert_eq!(queue.peek(), Err(Error::NoElementsAvailable));
    }

    #[test]
    fn contains() {
        let queue = Linked::new([1, 2, 3]);
        assert!(queue.contains(&2));
        assert!(!queue.contains(&4));
        queue.get().unwrap();
        assert!(!queue.contains(&1));
    }

    #[test]
    fn drain() {
        let queue = Linked::new([1, 2, 3]);
        assert_eq!(queue.drain().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(queue.is_empty());

        queue.offer(4).unwrap();
        assert_eq!(queue.drain().len(), 1);
    }

    #[test]
    fn partial_drain_keeps_the_rest() {
        let queue = Linked::new([1, 2, 3]);
        assert_eq!(queue.drain().next(), Some(1));
        assert_eq!(queue.size(), 2);
        assert_eq!(queue.clear(), vec![2, 3]);
    }

    #[test]
    fn reset() {
        let queue = Linked::new([1, 2, 3]);
        queue.get().unwrap();
        queue.offer(4).unwrap();
        queue.reset();
        assert_eq!(queue.clear(), vec![1, 2, 3]);

        queue.reset();
        queue.reset();
        assert_eq!(queue.size(), 3);
    }

    #[test]
    fn reset_empty() {
        let queue = Linked::<u8>::new([]);
        queue.offer(1).unwrap();
        queue.reset();
        assert!(queue.is_empty());
    }

    #[test]
    fn input_is_copied() {
        let mut elems = vec![1, 2, 3];
        let queue = Linked::new(elems.clone());
        elems[0] = 10;
        queue.reset();
        assert_eq!(queue.peek(), Ok(1));
    }
}
