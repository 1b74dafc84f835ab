//! Reference-semantics associative map.
//!
//! A [`Map`] is a handle to a shared table. Cloning the handle (the
//! equivalent of assigning a map variable) aliases the same table; every
//! mutation is visible through every handle. [`Map::deep_copy`] is the only
//! way to get an independent table.
//!
//! Iteration order is unspecified. [`Map::entries_sorted`] and the
//! `Display` impl sort by key so output is stable.
//!
//! # Examples
//!
//! ```
//! use tether::Map;
//!
//! let scores = Map::from_iter([("Alice", 5)]);
//! let alias = scores.clone();
//!
//! alias.insert("Bob", 3);
//! assert_eq!(scores.to_string(), "map[Alice:5 Bob:3]");
//!
//! assert_eq!(scores.lookup("Carol"), (0, false));
//! ```

use std::cell::RefCell;
use std::fmt;
use std::hash::Hash;
use std::ops::AddAssign;
use std::rc::Rc;

use fxhash::FxBuildHasher;
use hashbrown::HashMap;

type Table<K, V> = HashMap<K, V, FxBuildHasher>;

/// Shared handle to a hash table.
pub struct Map<K, V> {
    table: Rc<RefCell<Table<K, V>>>,
}

impl<K: Eq + Hash, V> Map<K, V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: Rc::new(RefCell::new(Table::default())),
        }
    }

    /// Inserts or overwrites `key`, returning the previous value.
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.table.borrow_mut().insert(key, value)
    }

    /// Removes `key`, returning its value. Deleting an absent key is a no-op.
    pub fn delete<Q>(&self, key: &Q) -> Option<V>
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.borrow_mut().remove(key)
    }

    /// Returns `(value, true)` for a present key and `(V::default(), false)`
    /// for an absent one.
    pub fn lookup<Q>(&self, key: &Q) -> (V, bool)
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone + Default,
    {
        match self.table.borrow().get(key) {
            Some(value) => (value.clone(), true),
            None => (V::default(), false),
        }
    }

    /// Returns true if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.borrow().contains_key(key)
    }

    /// Applies `f` to the value for `key` in place, first inserting
    /// `V::default()` if the key is absent.
    pub fn update<R>(&self, key: K, f: impl FnOnce(&mut V) -> R) -> R
    where
        V: Default,
    {
        let mut table = self.table.borrow_mut();
        f(table.entry(key).or_default())
    }

    /// Adds one to the value for `key`, starting from zero if absent.
    pub fn increment(&self, key: K)
    where
        V: Default + AddAssign + From<u8>,
    {
        self.update(key, |value| *value += V::from(1));
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.table.borrow().len()
    }

    /// Returns true if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.table.borrow().is_empty()
    }

    /// Returns true if both handles refer to the same table.
    pub fn same_table(&self, other: &Map<K, V>) -> bool {
        Rc::ptr_eq(&self.table, &other.table)
    }

    /// Copies every entry into a new, independent table.
    #[must_use]
    pub fn deep_copy(&self) -> Self
    where
        K: Clone,
        V: Clone,
    {
        Self {
            table: Rc::new(RefCell::new(self.table.borrow().clone())),
        }
    }

    /// Returns a snapshot of all entries sorted by key.
    pub fn entries_sorted(&self) -> Vec<(K, V)>
    where
        K: Clone + Ord,
        V: Clone,
    {
        let mut entries: Vec<(K, V)> = self
            .table
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}

impl<K, V> Clone for Map<K, V> {
    /// Aliases the same table.
    fn clone(&self) -> Self {
        Self {
            table: Rc::clone(&self.table),
        }
    }
}

impl<K: Eq + Hash, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let map = Self::new();
        map.table.borrow_mut().extend(iter);
        map
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Map<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.table.borrow().iter()).finish()
    }
}

impl<K, V> fmt::Display for Map<K, V>
where
    K: Eq + Hash + Ord + fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.table.borrow();
        let mut entries: Vec<_> = table.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        f.write_str("map[")?;
        for (i, (key, value)) in entries.into_iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}:{value}")?;
        }
        f.write_str("]")
    }
}
