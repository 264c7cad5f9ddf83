use std::mem::swap;

#[derive(Debug)]
enum Entry<T> {
    Occupied(T),
    Vacant(Option<usize>),
}

impl<T> Entry<T> {
    #[cfg(test)]
    fn is_occupied(&self) -> bool {
        match self {
            Entry::Occupied { .. } => true,
            Entry::Vacant(_) => false,
        }
    }
}

/// Storage for list nodes. Removed slots are kept on a free list and
/// handed out again by `insert`.
#[derive(Debug)]
pub(crate) struct Slab<T> {
    inner: Vec<Entry<T>>,
    next_key: Option<usize>,
}

impl<T> Slab<T> {
    pub(crate) fn new() -> Self {
        Self {
            inner: vec![],
            next_key: None,
        }
    }

    pub(crate) fn insert(&mut self, value: T) -> usize {
        match self.next_key.take() {
            None => {
                self.inner.push(Entry::Occupied(value));
                self.inner.len() - 1
            }
            Some(key) => {
                let mut entry = Entry::Occupied(value);
                swap(&mut self.inner[key], &mut entry);
                if let Entry::Vacant(next) = entry {
                    self.next_key = next;
                }
                key
            }
        }
    }

    pub(crate) fn remove(&mut self, key: usize) -> Option<T> {
        if !matches!(self.inner.get(key), Some(Entry::Occupied(_))) {
            return None;
        }

        let mut entry = Entry::Vacant(self.next_key.take());
        swap(&mut self.inner[key], &mut entry);
        self.next_key = Some(key);
        match entry {
            Entry::Occupied(value) => Some(value),
            Entry::Vacant(_) => None,
        }
    }

    pub(crate) fn get(&self, key: usize) -> Option<&T> {
        self.inner.get(key).and_then(|entry| match entry {
            Entry::Occupied(value) => Some(value),
            _ => None,
        })
    }

    pub(crate) fn get_mut(&mut self, key: usize) -> Option<&mut T> {
        self.inner.get_mut(key).and_then(|entry| match entry {
            Entry::Occupied(value) => Some(value),
            _ => None,
        })
    }

    #[cfg(test)]
    pub(crate) fn count(&self) -> usize {
        self.inner.iter().filter(|e| e.is_occupied()).count()
    }
}
