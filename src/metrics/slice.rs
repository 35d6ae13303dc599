//! Index-based views over repeated fields of the wire graph.
//!
//! A view borrows one repeated field; it never allocates a copy of it.
//! Views obtained one after another over the same field see the same
//! elements, so a mutation made through one is observed by the next.

use crate::core::{DataError, Result};

/// A wire record that can be exposed through a slice view.
///
/// `View` and `ViewMut` are the non-owning wrappers handed out by
/// [`SliceView::get`] and [`SliceViewMut::get_mut`].
pub trait Element {
    /// Shared wrapper over one element
    type View<'a>
    where
        Self: 'a;

    /// Exclusive wrapper over one element
    type ViewMut<'a>
    where
        Self: 'a;

    /// Wraps a shared borrow of the element
    fn view(&self) -> Self::View<'_>;

    /// Wraps an exclusive borrow of the element
    fn view_mut(&mut self) -> Self::ViewMut<'_>;
}

/// Read-only view over a repeated field
pub struct SliceView<'a, T> {
    orig: &'a [T],
}

impl<T> Clone for SliceView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceView<'_, T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for SliceView<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.orig).finish()
    }
}

impl<'a, T: Element + 'a> SliceView<'a, T> {
    pub(crate) fn new(orig: &'a [T]) -> Self {
        Self { orig }
    }

    /// Number of elements currently in the field
    pub fn len(&self) -> usize {
        self.orig.len()
    }

    /// Returns true if the field has no elements
    pub fn is_empty(&self) -> bool {
        self.orig.is_empty()
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn get(&self, index: usize) -> T::View<'a> {
        match self.try_get(index) {
            Ok(element) => element,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the element at `index`, or `IndexOutOfRange`
    pub fn try_get(&self, index: usize) -> Result<T::View<'a>> {
        let orig = self.orig;
        orig.get(index)
            .map(|element| element.view())
            .ok_or_else(|| DataError::index_out_of_range(index, orig.len()))
    }

    /// Iterates over the elements in order
    pub fn iter(&self) -> impl Iterator<Item = T::View<'a>> + 'a {
        let orig = self.orig;
        orig.iter().map(|element| element.view())
    }

    /// Borrows the underlying wire records
    pub fn as_wire(&self) -> &'a [T] {
        self.orig
    }
}

/// Mutable view over a repeated field
pub struct SliceViewMut<'a, T> {
    orig: &'a mut Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for SliceViewMut<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.orig.iter()).finish()
    }
}

impl<'a, T: Element + 'a> SliceViewMut<'a, T> {
    pub(crate) fn new(orig: &'a mut Vec<T>) -> Self {
        Self { orig }
    }

    /// Number of elements currently in the field
    pub fn len(&self) -> usize {
        self.orig.len()
    }

    /// Returns true if the field has no elements
    pub fn is_empty(&self) -> bool {
        self.orig.is_empty()
    }

    /// Returns a shared wrapper over the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn get(&self, index: usize) -> T::View<'_> {
        match self.try_get(index) {
            Ok(element) => element,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns a shared wrapper over the element at `index`, or `IndexOutOfRange`
    pub fn try_get(&self, index: usize) -> Result<T::View<'_>> {
        let len = self.orig.len();
        self.orig
            .get(index)
            .map(|element| element.view())
            .ok_or_else(|| DataError::index_out_of_range(index, len))
    }

    /// Returns an exclusive wrapper over the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn get_mut(&mut self, index: usize) -> T::ViewMut<'_> {
        match self.try_get_mut(index) {
            Ok(element) => element,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns an exclusive wrapper over the element at `index`, or `IndexOutOfRange`
    pub fn try_get_mut(&mut self, index: usize) -> Result<T::ViewMut<'_>> {
        let len = self.orig.len();
        self.orig
            .get_mut(index)
            .map(|element| element.view_mut())
            .ok_or_else(|| DataError::index_out_of_range(index, len))
    }

    /// Iterates over shared wrappers in order
    pub fn iter(&self) -> impl Iterator<Item = T::View<'_>> + '_ {
        self.orig.iter().map(|element| element.view())
    }

    /// Iterates over exclusive wrappers in order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = T::ViewMut<'_>> + '_ {
        self.orig.iter_mut().map(|element| element.view_mut())
    }

    /// Appends a wire record to the end of the field
    pub fn push(&mut self, element: T) {
        self.orig.push(element);
    }

    /// Removes all elements for which `keep` returns false
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.orig.retain(keep);
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.orig.clear();
    }

    /// Reborrows as a read-only view
    pub fn as_view(&self) -> SliceView<'_, T> {
        SliceView::new(self.orig.as_slice())
    }

    /// Converts into a read-only view with the full borrow lifetime
    pub fn into_view(self) -> SliceView<'a, T> {
        let orig: &'a Vec<T> = self.orig;
        SliceView::new(orig)
    }

    /// Borrows the underlying wire field
    pub fn as_wire_mut(&mut self) -> &mut Vec<T> {
        self.orig
    }
}

impl<'a, T: Element + Default + 'a> SliceViewMut<'a, T> {
    /// Appends an empty element and returns a wrapper over it
    pub fn append_empty(&mut self) -> T::ViewMut<'_> {
        self.orig.push(T::default());
        let last = self.orig.len() - 1;
        self.orig[last].view_mut()
    }

    /// Truncates or extends the field with empty elements to `len`
    pub fn resize(&mut self, len: usize) {
        self.orig.resize_with(len, T::default);
    }
}
