#![deny(missing_docs)]
//! Thread-safe generic queues sharing one contract, [`Queue`].
//!
//! * [`Blocking`]: FIFO with an optional capacity whose `_wait` methods
//!   suspend the caller until an element, or room for one, is available.
//! * [`Priority`]: heap ordered by a caller supplied `less` function.
//! * [`Circular`]: fixed size ring that overwrites its oldest element.
//! * [`Linked`]: unbounded FIFO over a singly linked list.
//!
//! Every queue remembers the elements it was created with and returns to
//! them on [`Queue::reset`].

pub mod blocking;
pub mod circular;
pub mod error;
pub mod linked;
mod options;
pub mod priority;
mod queue;
mod signal;
mod sync;

pub use blocking::Blocking;
pub use circular::Circular;
pub use error::Error;
pub use linked::Linked;
pub use options::Options;
pub use priority::Priority;
pub use queue::Queue;
