//! Key to position indexing over ordered sequences.
use crate::Error;

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;

/// A mapping from a derived key to the position of the element holding it.
///
/// An [`Index`] is always built in full from a sequence and never updated in
/// place. Every key maps to exactly one position.
#[derive(Debug, Clone)]
pub struct Index<K> {
    positions: HashMap<K, usize>,
}

impl<K> Index<K> {
    /// Indexes `items` by `to_key` in a single pass.
    ///
    /// Fails with [`Error::DuplicateIdentifier`] on the first element whose key
    /// was already produced by an earlier element.
    pub fn build<T>(items: &[T], to_key: impl Fn(&T) -> K) -> Result<Self, Error>
    where
        K: Eq + Hash,
    {
        let mut positions = HashMap::with_capacity(items.len());

        for (position, item) in items.iter().enumerate() {
            match positions.entry(to_key(item)) {
                Entry::Occupied(entry) => {
                    let first = *entry.get();

                    log::debug!(
                        "Rejected duplicated identifier at position {position} (first seen at {first})"
                    );

                    return Err(Error::DuplicateIdentifier { position, first });
                }
                Entry::Vacant(entry) => {
                    entry.insert(position);
                }
            }
        }

        log::debug!("Indexed {} items", positions.len());

        Ok(Self { positions })
    }

    pub fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q> + Eq + Hash,
        Q: Eq + Hash + ?Sized,
    {
        self.positions.get(key).copied()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q> + Eq + Hash,
        Q: Eq + Hash + ?Sized,
    {
        self.positions.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl<K: Eq + Hash> PartialEq for Index<K> {
    fn eq(&self, other: &Self) -> bool {
        self.positions == other.positions
    }
}

impl<K: Eq + Hash> Eq for Index<K> {}

impl<K> Default for Index<K> {
    fn default() -> Self {
        Self {
            positions: HashMap::new(),
        }
    }
}

/// Keyed lookup over a borrowed sequence.
///
/// Produced by [`index_unique`](crate::index_unique). Lookups are O(1) and
/// return the element holding the key, if any.
pub struct Accessor<'a, K, T> {
    items: &'a [T],
    index: Index<K>,
}

impl<'a, K, T> Accessor<'a, K, T> {
    pub fn new(items: &'a [T], index: Index<K>) -> Self {
        Self { items, index }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&'a T>
    where
        K: Borrow<Q> + Eq + Hash,
        Q: Eq + Hash + ?Sized,
    {
        self.items.get(self.index.position(key)?)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q> + Eq + Hash,
        Q: Eq + Hash + ?Sized,
    {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn index(&self) -> &Index<K> {
        &self.index
    }
}

impl<K: Clone, T> Clone for Accessor<'_, K, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            index: self.index.clone(),
        }
    }
}

impl<K, T> fmt::Debug for Accessor<'_, K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("items", &self.items.len())
            .field("keys", &self.index.len())
            .finish()
    }
}
