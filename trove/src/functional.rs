//! Free functions over plain slices.
//!
//! These mirror the methods of [`Collection`](crate::Collection) for callers
//! that hold a slice and do not want to wrap it.
use crate::index::{Accessor, Index};

use std::collections::HashMap;
use std::hash::Hash;

/// Returns every element matching `predicate`, in their original order.
pub fn filter<T: Clone>(items: &[T], mut predicate: impl FnMut(&T) -> bool) -> Vec<T> {
    items
        .iter()
        .filter(|item| predicate(item))
        .cloned()
        .collect()
}

/// Calls `f` on every element in order, stopping at the first error.
///
/// Elements after the failing one are never visited.
pub fn each<T, E>(items: &[T], f: impl FnMut(&T) -> Result<(), E>) -> Result<(), E> {
    items.iter().try_for_each(f)
}

/// Returns the first element matching `predicate`.
pub fn search<T>(items: &[T], mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
    items.iter().find(|item| predicate(item))
}

/// Like [`search`], but returns `T::default()` when nothing matches.
///
/// A miss is indistinguishable from a match on a default value; prefer
/// [`search`] unless the default can never be stored.
pub fn search_or_default<T: Clone + Default>(
    items: &[T],
    predicate: impl FnMut(&T) -> bool,
) -> T {
    search(items, predicate).cloned().unwrap_or_default()
}

/// Maps every element by its derived key.
///
/// Later elements overwrite earlier ones holding the same key.
pub fn index_by_func<K, T>(items: &[T], to_key: impl Fn(&T) -> K) -> HashMap<K, T>
where
    K: Eq + Hash,
    T: Clone,
{
    HashMap::from_iter(items.iter().map(|item| (to_key(item), item.clone())))
}

/// Indexes `items` by a key that must be unique.
///
/// On the first duplicated key, `on_duplicate` is called with the offending
/// element and its error is returned instead of an [`Accessor`].
pub fn index_unique<'a, K, T, E>(
    items: &'a [T],
    to_key: impl Fn(&T) -> K,
    on_duplicate: impl FnOnce(&T) -> E,
) -> Result<Accessor<'a, K, T>, E>
where
    K: Eq + Hash,
{
    match Index::build(items, to_key) {
        Ok(index) => Ok(Accessor::new(items, index)),
        Err(crate::Error::DuplicateIdentifier { position, .. }) => {
            Err(on_duplicate(&items[position]))
        }
    }
}

pub fn first<T>(items: &[T]) -> Option<&T> {
    items.first()
}

pub fn last<T>(items: &[T]) -> Option<&T> {
    items.last()
}
