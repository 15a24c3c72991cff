use core::borrow::Borrow;
use core::ops::{Index, IndexMut};

use super::OrderedMap;
use crate::Rank;
use crate::error::{Error, Result};

impl<K: Ord, V> OrderedMap<K, V> {
    /// Returns the key with exactly `index` smaller keys in the map.
    ///
    /// The index is zero-based, so `select(0)` is the minimum and
    /// `select(len - 1)` the maximum.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `index >= self.len()`.
    ///
    /// # Complexity
    ///
    /// O(height)
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::{Error, OrderedMap};
    ///
    /// let map = OrderedMap::from([("b", 2), ("a", 1), ("c", 3)]);
    /// assert_eq!(map.select(1), Ok(&"b"));
    /// assert_eq!(map.select(3), Err(Error::InvalidArgument { index: 3, len: 3 }));
    /// ```
    pub fn select(&self, index: usize) -> Result<&K> {
        self.get_by_rank(index).map(|(key, _)| key).ok_or(Error::InvalidArgument {
            index,
            len: self.len(),
        })
    }

    /// Returns the number of keys in the map that are strictly less than `key`.
    ///
    /// `key` does not have to be present. For a stored key this is its
    /// zero-based position in sorted order, and `select(rank(key))` returns it.
    ///
    /// # Complexity
    ///
    /// O(height)
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedMap;
    ///
    /// let map = OrderedMap::from([(10, "a"), (20, "b"), (30, "c")]);
    /// assert_eq!(map.rank(&10), 0);
    /// assert_eq!(map.rank(&30), 2);
    /// assert_eq!(map.rank(&25), 2);
    /// assert_eq!(map.rank(&99), 3);
    /// ```
    #[must_use]
    pub fn rank<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.rank(key)
    }

    /// Returns the key-value pair at position `rank` in sorted order, or `None`
    /// if `rank` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert("a", 10);
    /// map.insert("c", 30);
    /// map.insert("b", 20);
    ///
    /// assert_eq!(map.get_by_rank(1), Some((&"b", &20)));
    /// assert!(map.get_by_rank(3).is_none());
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        self.raw.get_by_rank(rank)
    }

    /// Returns the key and a mutable reference to the value at position `rank`
    /// in sorted order.
    ///
    /// The key is returned as a shared reference because mutating it would
    /// violate the map's ordering invariants.
    #[must_use]
    pub fn get_by_rank_mut(&mut self, rank: usize) -> Option<(&K, &mut V)> {
        self.raw.get_by_rank_mut(rank)
    }
}

/// Indexes into the map by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
impl<K: Ord, V> Index<Rank> for OrderedMap<K, V> {
    type Output = V;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_by_rank(rank.0).map(|(_, v)| v).expect("index out of bounds")
    }
}

/// Mutably indexes into the map by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use osbst::{OrderedMap, Rank};
///
/// let mut map = OrderedMap::from([("a", 1), ("b", 2)]);
/// map[Rank(1)] = 5;
///
/// assert_eq!(map.get(&"b"), Some(&5));
/// ```
impl<K: Ord, V> IndexMut<Rank> for OrderedMap<K, V> {
    fn index_mut(&mut self, rank: Rank) -> &mut Self::Output {
        self.get_by_rank_mut(rank.0).map(|(_, v)| v).expect("index out of bounds")
    }
}
