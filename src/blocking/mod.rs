//! Bounded FIFO queue with waiting operations

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use log::{debug, trace};

pub use self::drain::Drain;
use crate::error::{Error, Result};
use crate::signal::{Listener, Signal};
use crate::sync::lock;
use crate::{Options, Queue};

mod drain;

#[derive(Debug, Copy, Clone, PartialEq)]
enum Condition {
    NotEmpty,
    NotFull,
}

#[derive(Debug)]
pub(crate) struct State<T> {
    elems: VecDeque<T>,
    capacity: Option<usize>,
    not_empty: Signal,
    not_full: Signal,
}

impl<T> State<T> {
    fn new(elems: VecDeque<T>, capacity: Option<usize>) -> Self {
        Self {
            elems,
            capacity,
            not_empty: Signal::new(),
            not_full: Signal::new(),
        }
    }

    fn is_full(&self) -> bool {
        self.capacity
            .is_some_and(|capacity| self.elems.len() >= capacity)
    }

    fn signal(&self, condition: Condition) -> &Signal {
        match condition {
            Condition::NotEmpty => &self.not_empty,
            Condition::NotFull => &self.not_full,
        }
    }

    // Takes the element out of `slot` only if there is room for it.
    fn try_push(&mut self, slot: &mut Option<T>) -> Option<()> {
        if self.is_full() {
            return None;
        }
        if let Some(elem) = slot.take() {
            self.elems.push_back(elem);
            self.not_empty.broadcast();
        }
        Some(())
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        let elem = self.elems.pop_front()?;
        self.not_full.broadcast();
        Some(elem)
    }

    pub(crate) fn len(&self) -> usize {
        self.elems.len()
    }
}

/// A FIFO queue that can suspend callers until an element, or room for
/// one, becomes available.
///
/// `get`, `offer` and `peek` never block. Their `_wait` counterparts do, and
/// come in three flavours: blocking the thread, blocking with a timeout, and
/// async. Any number of threads and tasks can wait on the same queue.
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
///
/// use queues::{Blocking, Options};
///
/// let queue = Arc::new(Blocking::new([], Options::new().capacity(1)));
///
/// let consumer = {
///     let queue = queue.clone();
///     thread::spawn(move || queue.get_wait())
/// };
///
/// queue.offer_wait(7);
/// assert_eq!(consumer.join().unwrap(), 7);
/// ```
#[derive(Debug)]
pub struct Blocking<T> {
    state: Mutex<State<T>>,
    initial: Vec<T>,
    capacity: Option<usize>,
}

impl<T: Clone> Blocking<T> {
    /// Create a queue holding `elems`.
    ///
    /// With a capacity set, elements past the capacity are dropped.
    pub fn new(elems: impl IntoIterator<Item = T>, options: Options) -> Self {
        let capacity = options.get_capacity();
        let initial: Vec<T> = match capacity {
            Some(capacity) => elems.into_iter().take(capacity).collect(),
            None => elems.into_iter().collect(),
        };

        Self {
            state: Mutex::new(State::new(initial.iter().cloned().collect(), capacity)),
            initial,
            capacity,
        }
    }

    /// Returns a copy of the head, waiting until there is one.
    pub fn peek_wait(&self) -> T {
        self.wait(Condition::NotEmpty, |state| state.elems.front().cloned())
    }

    /// Like [`Blocking::peek_wait`], but gives up after `timeout`.
    pub fn peek_wait_timeout(&self, timeout: Duration) -> Option<T> {
        self.wait_deadline(Condition::NotEmpty, timeout, |state| {
            state.elems.front().cloned()
        })
    }

    /// Async version of [`Blocking::peek_wait`]
    pub async fn peek_wait_async(&self) -> T {
        self.wait_async(Condition::NotEmpty, |state| state.elems.front().cloned())
            .await
    }
}

impl<T> Blocking<T> {
    /// The capacity, if one was set
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Removes and returns the head, waiting until there is one.
    pub fn get_wait(&self) -> T {
        self.wait(Condition::NotEmpty, State::pop)
    }

    /// Like [`Blocking::get_wait`], but gives up after `timeout`.
    ///
    /// Returns `None` if no element became available in time.
    pub fn get_wait_timeout(&self, timeout: Duration) -> Option<T> {
        self.wait_deadline(Condition::NotEmpty, timeout, State::pop)
    }

    /// Async version of [`Blocking::get_wait`].
    ///
    /// Dropping the future abandons the wait without consuming an element.
    /// ```
    /// use std::time::Duration;
    ///
    /// use queues::{Blocking, Options};
    ///
    /// # async fn run() {
    /// let queue = Blocking::<u32>::new([], Options::new());
    /// let elem = tokio::time::timeout(Duration::from_millis(10), queue.get_wait_async()).await;
    /// assert!(elem.is_err());
    /// # }
    /// ```
    pub async fn get_wait_async(&self) -> T {
        self.wait_async(Condition::NotEmpty, State::pop).await
    }

    /// Inserts `elem` at the tail, waiting for room if the queue is full.
    pub fn offer_wait(&self, elem: T) {
        let mut slot = Some(elem);
        self.wait(Condition::NotFull, |state| state.try_push(&mut slot))
    }

    /// Like [`Blocking::offer_wait`], but gives up after `timeout`.
    ///
    /// Returns `Error::QueueFull` if no room became available in time. The
    /// element is dropped in that case.
    pub fn offer_wait_timeout(&self, elem: T, timeout: Duration) -> Result<()> {
        let mut slot = Some(elem);
        self.wait_deadline(Condition::NotFull, timeout, |state| {
            state.try_push(&mut slot)
        })
        .ok_or(Error::QueueFull)
    }

    /// Async version of [`Blocking::offer_wait`]
    pub async fn offer_wait_async(&self, elem: T) {
        let mut slot = Some(elem);
        self.wait_async(Condition::NotFull, |state| state.try_push(&mut slot))
            .await
    }

    // Runs `attempt` under the lock. If it fails the caller gets a listener
    // registered before the lock was released.
    fn try_or_listen<R>(
        &self,
        condition: Condition,
        attempt: &mut impl FnMut(&mut State<T>) -> Option<R>,
    ) -> std::result::Result<R, Listener> {
        let mut state = lock(&self.state);
        match attempt(&mut *state) {
            Some(ret) => Ok(ret),
            None => Err(state.signal(condition).listen()),
        }
    }

    fn wait<R>(
        &self,
        condition: Condition,
        mut attempt: impl FnMut(&mut State<T>) -> Option<R>,
    ) -> R {
        loop {
            match self.try_or_listen(condition, &mut attempt) {
                Ok(ret) => return ret,
                Err(listener) => {
                    trace!("waiting for {condition:?}");
                    listener.wait();
                }
            }
        }
    }

    fn wait_deadline<R>(
        &self,
        condition: Condition,
        timeout: Duration,
        mut attempt: impl FnMut(&mut State<T>) -> Option<R>,
    ) -> Option<R> {
        let Some(deadline) = Instant::now().checked_add(timeout) else {
            return Some(self.wait(condition, attempt));
        };

        loop {
            match self.try_or_listen(condition, &mut attempt) {
                Ok(ret) => return Some(ret),
                Err(listener) => {
                    trace!("waiting for {condition:?} until {deadline:?}");
                    if !listener.wait_deadline(deadline) {
                        trace!("timed out waiting for {condition:?}");
                        // One last try, the broadcast may have raced the deadline
                        return self.try_or_listen(condition, &mut attempt).ok();
                    }
                }
            }
        }
    }

    async fn wait_async<R>(
        &self,
        condition: Condition,
        mut attempt: impl FnMut(&mut State<T>) -> Option<R>,
    ) -> R {
        loop {
            match self.try_or_listen(condition, &mut attempt) {
                Ok(ret) => return ret,
                Err(listener) => {
                    trace!("waiting for {condition:?}");
                    listener.wait_async().await;
                }
            }
        }
    }
}

impl<T: Clone + PartialEq> Queue<T> for Blocking<T> {
    type Drain<'a> = Drain<'a, T> where Self: 'a;

    fn peek(&self) -> Result<T> {
        lock(&self.state)
            .elems
            .front()
            .cloned()
            .ok_or(Error::NoElementsAvailable)
    }

    fn size(&self) -> usize {
        lock(&self.state).len()
    }

    fn is_empty(&self) -> bool {
        lock(&self.state).elems.is_empty()
    }

    fn get(&self) -> Result<T> {
        lock(&self.state).pop().ok_or(Error::NoElementsAvailable)
    }

    fn offer(&self, elem: T) -> Result<()> {
        lock(&self.state)
            .try_push(&mut Some(elem))
            .ok_or(Error::QueueFull)
    }

    fn contains(&self, elem: &T) -> bool {
        lock(&self.state).elems.contains(elem)
    }

    fn drain(&self) -> Self::Drain<'_> {
        Drain::new(lock(&self.state))
    }

    fn clear(&self) -> Vec<T> {
        let mut state = lock(&self.state);
        let elems: Vec<T> = state.elems.drain(..).collect();
        state.not_full.broadcast();
        debug!("cleared {} elements", elems.len());
        elems
    }

    fn reset(&self) {
        let mut state = lock(&self.state);
        state.elems = self.initial.iter().cloned().collect();
        debug!(
            "reset to {} elements, waking {} getters and {} offerers",
            state.elems.len(),
            state.not_empty.waiters(),
            state.not_full.waiters()
        );
        state.not_empty.broadcast();
        state.not_full.broadcast();
    }
}
