/// Construction options shared by the queues.
///
/// ```
/// use queues::{Blocking, Options};
///
/// let queue = Blocking::new([1, 2, 3], Options::new().capacity(3));
/// assert_eq!(queue.capacity(), Some(3));
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Options {
    capacity: Option<usize>,
}

impl Options {
    /// Options with no capacity set
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for `Options::new().capacity(capacity)`
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new().capacity(capacity)
    }

    /// Set a fixed capacity.
    ///
    /// What happens to initial elements beyond the capacity depends on the
    /// queue: `Blocking` and `Circular` keep the first `capacity` elements,
    /// `Priority` keeps the `capacity` highest priority ones.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub(crate) fn get_capacity(&self) -> Option<usize> {
        self.capacity
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_to_unbounded() {
        assert_eq!(Options::new().get_capacity(), None);
        assert_eq!(Options::default(), Options::new());
    }

    #[test]
    fn capacity() {
        let opts = Options::new().capacity(4);
        assert_eq!(opts.get_capacity(), Some(4));
        assert_eq!(opts, Options::with_capacity(4));
    }

    #[test]
    fn last_capacity_wins() {
        let opts = Options::new().capacity(4).capacity(1);
        assert_eq!(opts.get_capacity(), Some(1));
    }
}
