use super::slab::Slab;

#[derive(Debug)]
struct Node<T> {
    value: T,
    next: Option<usize>,
}

/// Singly linked list with O(1) push to the back and pop from the front.
#[derive(Debug)]
pub(crate) struct List<T> {
    nodes: Slab<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    size: usize,
}

impl<T> List<T> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: None,
            tail: None,
            size: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.size
    }

    pub(crate) fn push_back(&mut self, value: T) {
        let key = self.nodes.insert(Node { value, next: None });
        match self.tail.and_then(|tail| self.nodes.get_mut(tail)) {
            Some(tail) => tail.next = Some(key),
            None => self.head = Some(key),
        }
        self.tail = Some(key);
        self.size += 1;
    }

    pub(crate) fn pop_front(&mut self) -> Option<T> {
        let node = self.nodes.remove(self.head?)?;
        self.head = node.next;
        self.size -= 1;
        if self.head.is_none() {
            self.tail = None;
        }
        Some(node.value)
    }

    pub(crate) fn front(&self) -> Option<&T> {
        let head = self.nodes.get(self.head?)?;
        Some(&head.value)
    }

    /// Values from head to tail
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            next: self.head,
        }
    }

    /// Removes every value, head first, and releases the node storage.
    pub(crate) fn clear(&mut self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.size);
        while let Some(value) = self.pop_front() {
            values.push(value);
        }
        *self = Self::new();
        values
    }
}

pub(crate) struct Iter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    next: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.nodes.get(self.next?)?;
        self.next = node.next;
        Some(&node.value)
    }
}
