//! Ordered child storage shared by every container node.
//!
//! Positions are signed so callers can pass any index without validating it
//! first: inserting clamps into range, while reading or removing out of range
//! yields `None` and leaves the sequence untouched.

use std::slice;

/// Ordered, exclusively owned children of a container node.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementList<T> {
    items: Vec<T>,
}

impl<T> Default for ElementList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ElementList<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Index of `position` if it addresses an existing child
    #[inline]
    fn index(&self, position: isize) -> Option<usize> {
        usize::try_from(position)
            .ok()
            .filter(|&index| index < self.items.len())
    }

    /// Append `child` as the new last child
    pub fn append(&mut self, child: T) -> &mut T {
        self.items.push(child);
        let last = self.items.len() - 1;
        &mut self.items[last]
    }

    /// Append `child`, or fold it into the last child.
    ///
    /// `merge` receives the current last child and `child`; it returns `None`
    /// once it has absorbed `child`, or hands `child` back to be appended.
    pub fn append_or_merge(
        &mut self,
        child: T,
        merge: impl FnOnce(&mut T, T) -> Option<T>,
    ) -> &mut T {
        let child = match self.items.last_mut() {
            Some(last) => match merge(last, child) {
                Some(child) => child,
                None => {
                    let last = self.items.len() - 1;
                    return &mut self.items[last];
                },
            },
            None => child,
        };
        self.append(child)
    }

    /// Insert `child` so that it occupies `position`.
    ///
    /// Negative positions insert at the front, positions past the end append.
    pub fn insert_at(&mut self, position: isize, child: T) -> &mut T {
        let index = usize::try_from(position)
            .unwrap_or(0)
            .min(self.items.len());
        self.items.insert(index, child);
        &mut self.items[index]
    }

    /// Child at `position`, or `None` when out of range
    pub fn get_at(&self, position: isize) -> Option<&T> {
        self.index(position).map(|index| &self.items[index])
    }

    /// Mutable child at `position`, or `None` when out of range
    pub fn get_at_mut(&mut self, position: isize) -> Option<&mut T> {
        self.index(position).map(|index| &mut self.items[index])
    }

    /// Detach and return the child at `position`; a no-op when out of range
    pub fn remove_at(&mut self, position: isize) -> Option<T> {
        self.index(position).map(|index| self.items.remove(index))
    }

    /// The children in order
    pub fn get_all(&self) -> &[T] {
        &self.items
    }

    /// Remove every child
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Current child count
    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.items.iter_mut()
    }
}

impl<T> FromIterator<T> for ElementList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ElementList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Positional child operations every container node shares.
///
/// Implementors only expose their [`ElementList`]; the operations themselves
/// are provided, so every paragraph-like or list-like node behaves the same at
/// the boundaries.
pub trait Container {
    /// Type of the children this container owns
    type Child;

    fn elements(&self) -> &ElementList<Self::Child>;

    fn elements_mut(&mut self) -> &mut ElementList<Self::Child>;

    /// Append `child` as the new last child
    fn append(&mut self, child: Self::Child) -> &mut Self::Child {
        self.elements_mut().append(child)
    }

    /// Insert `child` at `position`, clamping the position into range
    fn insert_at(&mut self, position: isize, child: Self::Child) -> &mut Self::Child {
        self.elements_mut().insert_at(position, child)
    }

    /// Child at `position`, or `None` when out of range
    fn get_at(&self, position: isize) -> Option<&Self::Child> {
        self.elements().get_at(position)
    }

    /// Detach and return the child at `position`, or `None` when out of range
    fn remove_at(&mut self, position: isize) -> Option<Self::Child> {
        self.elements_mut().remove_at(position)
    }

    /// The children in order
    fn get_all(&self) -> &[Self::Child] {
        self.elements().get_all()
    }

    /// Remove every child
    fn clear(&mut self) {
        self.elements_mut().clear();
    }

    /// Current child count
    fn size(&self) -> usize {
        self.elements().size()
    }
}
