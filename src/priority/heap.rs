/// Binary heap ordered by a `less` function instead of `Ord`.
///
/// The children of index `i` live at `2i + 1` and `2i + 2`. The element at
/// index 0 is never `less` than any other.
pub(crate) struct Heap<T, F> {
    elems: Vec<T>,
    less: F,
}

impl<T, F> Heap<T, F> {
    pub(crate) fn len(&self) -> usize {
        self.elems.len()
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.elems
    }

    pub(crate) fn peek(&self) -> Option<&T> {
        self.elems.first()
    }

    /// Replace the contents with elements that are already in heap order.
    pub(crate) fn replace(&mut self, elems: Vec<T>) {
        self.elems = elems;
    }
}

impl<T, F> Heap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    pub(crate) fn new(elems: Vec<T>, less: F) -> Self {
        let mut heap = Self { elems, less };
        heap.heapify();
        heap
    }

    pub(crate) fn push(&mut self, elem: T) {
        self.elems.push(elem);
        self.sift_up(self.elems.len() - 1);
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        if self.elems.is_empty() {
            return None;
        }

        let elem = self.elems.swap_remove(0);
        self.sift_down(0);
        Some(elem)
    }

    fn heapify(&mut self) {
        for i in (0..self.elems.len() / 2).rev() {
            self.sift_down(i);
        }
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !(self.less)(&self.elems[i], &self.elems[parent]) {
                break;
            }
            self.elems.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.elems.len();
        loop {
            let left = 2 * i + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let child = if right < len && (self.less)(&self.elems[right], &self.elems[left]) {
                right
            } else {
                left
            };

            if !(self.less)(&self.elems[child], &self.elems[i]) {
                break;
            }
            self.elems.swap(i, child);
            i = child;
        }
    }

    #[cfg(test)]
    pub(crate) fn is_heap(&self) -> bool {
        (1..self.elems.len()).all(|i| !(self.less)(&self.elems[i], &self.elems[(i - 1) / 2]))
    }
}
