//! Errors

/// Result type returned by the queues
pub type Result<T> = std::result::Result<T, Error>;

/// Queue errors
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The queue was empty when an element was requested
    #[error("no elements available in the queue")]
    NoElementsAvailable,

    /// The queue was at capacity when an element was offered
    #[error("queue is full")]
    QueueFull,
}
