use crate::functional;

use serde::{Deserialize, Serialize};
use std::slice;
use std::vec;

/// An owned, ordered sequence of elements.
///
/// Operations never reorder the elements. [`filter`](Self::filter) produces a
/// new collection and keeps the relative order of the retained elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Collection<T> {
    pub fn new(items: impl Into<Vec<T>>) -> Self {
        Self {
            items: items.into(),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn first_or_default(&self) -> T
    where
        T: Clone + Default,
    {
        self.first().cloned().unwrap_or_default()
    }

    pub fn last_or_default(&self) -> T
    where
        T: Clone + Default,
    {
        self.last().cloned().unwrap_or_default()
    }

    pub fn filter(&self, predicate: impl FnMut(&T) -> bool) -> Self
    where
        T: Clone,
    {
        Self::new(functional::filter(&self.items, predicate))
    }

    /// Calls `f` on every element in order, stopping at the first error.
    pub fn each<E>(&self, f: impl FnMut(&T) -> Result<(), E>) -> Result<(), E> {
        functional::each(&self.items, f)
    }

    /// Calls `f` on every element in order with mutable access, stopping at the
    /// first error.
    ///
    /// A failure never changes which elements the collection holds nor their
    /// order. Changes `f` already made to earlier elements are kept.
    pub fn each_mut<E>(&mut self, f: impl FnMut(&mut T) -> Result<(), E>) -> Result<(), E> {
        self.items.iter_mut().try_for_each(f)
    }

    pub fn search(&self, predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        functional::search(&self.items, predicate)
    }

    /// Like [`search`](Self::search), but returns `T::default()` on a miss.
    pub fn search_or_default(&self, predicate: impl FnMut(&T) -> bool) -> T
    where
        T: Clone + Default,
    {
        functional::search_or_default(&self.items, predicate)
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: Vec::from_iter(iter),
        }
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> AsRef<[T]> for Collection<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}
