use crate::{Collection, Error, Index};

use serde::{Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::slice;
use std::sync::Arc;

type ToKey<K, T> = Arc<dyn Fn(&T) -> K + Send + Sync>;

/// A [`Collection`] whose elements all derive a distinct key.
///
/// The key index is rebuilt from scratch whenever the elements change, so a
/// [`UniqueCollection`] can never hold two elements with the same key.
pub struct UniqueCollection<K, T> {
    collection: Collection<T>,
    index: Index<K>,
    to_key: ToKey<K, T>,
}

impl<K, T> UniqueCollection<K, T>
where
    K: Eq + Hash,
{
    pub fn new(
        items: impl Into<Vec<T>>,
        to_key: impl Fn(&T) -> K + Send + Sync + 'static,
    ) -> Result<Self, Error> {
        Self::from_collection(Collection::new(items), to_key)
    }

    pub fn from_collection(
        collection: Collection<T>,
        to_key: impl Fn(&T) -> K + Send + Sync + 'static,
    ) -> Result<Self, Error> {
        Self::indexed(collection, Arc::new(to_key))
    }

    fn indexed(collection: Collection<T>, to_key: ToKey<K, T>) -> Result<Self, Error> {
        let index = Index::build(collection.items(), &*to_key)?;

        Ok(Self {
            collection,
            index,
            to_key,
        })
    }

    /// Keeps the elements matching `predicate` and reindexes them.
    ///
    /// The index is validated again, so a key function that is not
    /// deterministic surfaces as [`Error::DuplicateIdentifier`].
    pub fn filter(&self, predicate: impl FnMut(&T) -> bool) -> Result<Self, Error>
    where
        T: Clone,
    {
        Self::indexed(self.collection.filter(predicate), self.to_key.clone())
    }

    pub fn item<Q>(&self, key: &Q) -> Option<&T>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.collection.items().get(self.index.position(key)?)
    }

    /// Like [`item`](Self::item), but returns `T::default()` for unknown keys.
    pub fn item_or_default<Q>(&self, key: &Q) -> T
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
        T: Clone + Default,
    {
        self.item(key).cloned().unwrap_or_default()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.contains_key(key)
    }

    pub fn key_of(&self, item: &T) -> K {
        (self.to_key)(item)
    }
}

impl<K, T> UniqueCollection<K, T> {
    pub fn collection(&self) -> &Collection<T> {
        &self.collection
    }

    pub fn into_collection(self) -> Collection<T> {
        self.collection
    }

    pub fn index(&self) -> &Index<K> {
        &self.index
    }

    pub fn items(&self) -> &[T] {
        self.collection.items()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.collection.iter()
    }

    pub fn count(&self) -> usize {
        self.collection.count()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.collection.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.collection.last()
    }

    pub fn each<E>(&self, f: impl FnMut(&T) -> Result<(), E>) -> Result<(), E> {
        self.collection.each(f)
    }

    pub fn search(&self, predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        self.collection.search(predicate)
    }
}

impl<K: Clone, T: Clone> Clone for UniqueCollection<K, T> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection.clone(),
            index: self.index.clone(),
            to_key: self.to_key.clone(),
        }
    }
}

impl<K, T: fmt::Debug> fmt::Debug for UniqueCollection<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqueCollection")
            .field("items", &self.collection.items())
            .field("keys", &self.index.len())
            .finish()
    }
}

impl<K, T: Serialize> Serialize for UniqueCollection<K, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.collection.serialize(serializer)
    }
}

impl<'a, K, T> IntoIterator for &'a UniqueCollection<K, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.collection.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Clone, Default, PartialEq, Serialize)]
    struct User {
        id: String,
        name: String,
    }

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.to_owned(),
            name: name.to_owned(),
        }
    }

    fn users() -> UniqueCollection<String, User> {
        UniqueCollection::new(
            [
                user("1", "John"),
                user("2", "Jane"),
                user("3", "Doe"),
                user("4", "Jack"),
                user("5", "Rick"),
                user("6", "Karl"),
            ],
            |user: &User| user.id.clone(),
        )
        .unwrap()
    }

    #[test]
    fn item_by_key() {
        let users = users();

        assert_eq!(users.item("1"), Some(&user("1", "John")));
        assert_eq!(users.item("6").map(|user| user.name.as_str()), Some("Karl"));
        assert_eq!(users.item("7"), None);
        assert!(users.contains_key("3"));
    }

    #[test]
    fn item_or_default() {
        let users = users();

        assert_eq!(users.item_or_default("2").name, "Jane");
        assert_eq!(users.item_or_default("7"), User::default());
    }

    #[test]
    fn items_and_count() {
        let users = users();

        assert_eq!(users.count(), 6);
        assert_eq!(users.items().len(), 6);
        assert_eq!(users.index().len(), 6);
        assert_eq!(users.first().map(|user| user.id.as_str()), Some("1"));
        assert_eq!(users.last().map(|user| user.id.as_str()), Some("6"));
    }

    #[test]
    fn rejects_duplicates() {
        let result = UniqueCollection::new(
            vec![user("1", "John"), user("2", "Jane"), user("1", "Jim")],
            |user: &User| user.id.clone(),
        );

        assert_eq!(
            result.err(),
            Some(Error::DuplicateIdentifier {
                position: 2,
                first: 0
            })
        );
    }

    #[test]
    fn filter_reindexes() {
        let users = users();
        let filtered = users
            .filter(|user| user.id == "2" || user.id == "5")
            .unwrap();

        assert_eq!(filtered.count(), 2);
        assert_eq!(filtered.item("5").map(|user| user.name.as_str()), Some("Rick"));
        assert_eq!(filtered.item("2").map(|user| user.name.as_str()), Some("Jane"));
        assert_eq!(filtered.item("1"), None);
        assert_eq!(filtered.index().position("5"), Some(1));
        assert_eq!(users.count(), 6);
    }

    #[test]
    fn filter_to_nothing() {
        let filtered = users().filter(|_| false).unwrap();

        assert!(filtered.is_empty());
        assert!(filtered.index().is_empty());
    }

    #[test]
    fn filter_revalidates_keys() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        // Every key is fresh on the first pass and collides afterwards.
        let numbers = UniqueCollection::new(vec![1, 2, 3], move |_: &i32| {
            counter.fetch_add(1, Ordering::SeqCst).min(3)
        })
        .unwrap();

        assert!(matches!(
            numbers.filter(|_| true),
            Err(Error::DuplicateIdentifier { .. })
        ));
        assert!(calls.load(Ordering::SeqCst) > 3);
    }

    #[test]
    fn from_collection_and_back() {
        let collection = Collection::new(vec![user("a", "Ada"), user("g", "Grace")]);
        let users =
            UniqueCollection::from_collection(collection.clone(), |user: &User| user.id.clone())
                .unwrap();

        assert_eq!(users.key_of(&user("x", "Xavier")), "x");
        assert_eq!(users.collection(), &collection);
        assert_eq!(users.into_collection(), collection);
    }

    #[test]
    fn clones_share_the_key() {
        let users = users();
        let cloned = users.clone();
        let filtered = cloned.filter(|user| user.name.starts_with('J')).unwrap();

        assert_eq!(
            filtered.iter().map(|user| user.id.as_str()).collect::<Vec<_>>(),
            vec!["1", "2", "4"]
        );
        assert_eq!(filtered.item("4").map(|user| user.name.as_str()), Some("Jack"));
    }

    #[test]
    fn each_and_search_delegate() {
        let users = users();
        let mut ids = String::new();

        let result: Result<(), ()> = users.each(|user| {
            ids.push_str(&user.id);
            Ok(())
        });

        assert_eq!(result, Ok(()));
        assert_eq!(ids, "123456");
        assert_eq!(
            users.search(|user| user.name == "Doe").map(|user| user.id.as_str()),
            Some("3")
        );
    }

    #[test]
    fn serializes_as_a_list() {
        let numbers = UniqueCollection::new(vec![2, 1], |number: &i32| *number).unwrap();

        assert_eq!(ron::ser::to_string(&numbers).unwrap(), "[2,1]");
    }
}
