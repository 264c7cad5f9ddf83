/// Fixed size ring buffer. Pushing onto a full ring overwrites the oldest
/// value.
#[derive(Debug)]
pub(crate) struct Ring<T> {
    buf: Box<[Option<T>]>,
    head: usize,
    tail: usize,
    size: usize,
}

impl<T> Ring<T> {
    pub(crate) fn with_capacity(cap: usize) -> Self {
        Self {
            buf: (0..cap).map(|_| None).collect(),
            head: 0,
            tail: 0,
            size: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.size
    }

    pub(crate) fn push(&mut self, value: T) {
        let cap = self.capacity();
        if cap == 0 {
            return;
        }

        self.buf[self.tail] = Some(value);
        self.tail = (self.tail + 1) % cap;
        if self.size == cap {
            // The oldest value was just overwritten
            self.head = self.tail;
        } else {
            self.size += 1;
        }
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }

        let value = self.buf[self.head].take();
        self.head = (self.head + 1) % self.capacity();
        self.size -= 1;
        value
    }

    pub(crate) fn front(&self) -> Option<&T> {
        if self.size == 0 {
            return None;
        }
        self.buf[self.head].as_ref()
    }

    /// Values from head to tail
    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let cap = self.capacity();
        (0..self.size).filter_map(move |i| self.buf[(self.head + i) % cap].as_ref())
    }

    /// Removes every value, head first, and rewinds head and tail to the
    /// start of the buffer.
    pub(crate) fn clear(&mut self) -> Vec<T> {
        let values = std::iter::from_fn(|| self.pop()).collect();
        self.head = 0;
        self.tail = 0;
        values
    }
}
