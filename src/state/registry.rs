// Ordered container for scene items.
//
// A registry is deliberately dumb: it keeps items in logical order and
// nothing else. Index checks and positioning belong to the layout engine
// and the controller.

/// Ordered sequence of items owned by one structure.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry<T> {
    items: Vec<T>,
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add an item at the end.
    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    /// Insert an item before index `index`.
    ///
    /// Panics if `index > len()`.
    pub fn insert_at(&mut self, index: usize, item: T) {
        self.items.insert(index, item);
    }

    /// Remove and return the item at `index`.
    ///
    /// Panics if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    pub fn remove_first(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    pub fn remove_last(&mut self) -> Option<T> {
        self.items.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn at(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Mutable view of every item from `index` to the end.
    ///
    /// An `index` past the end yields an empty slice.
    pub fn tail_mut(&mut self, index: usize) -> &mut [T] {
        let start = index.min(self.items.len());
        &mut self.items[start..]
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Registry<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
