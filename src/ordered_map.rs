use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::Index;

use crate::error::{Error, Result};
use crate::raw::{Cursor, RawBSTMap, Side};

mod capacity;
mod order_statistic;
mod traversal;

pub use traversal::{LevelOrder, Range, RangeKeys};

/// An ordered map based on a size-augmented [binary search tree].
///
/// Given a key type with a [total order], an ordered map stores its entries in key order.
/// Keys must implement [`Ord`]; examples of keys with a total order are strings with
/// lexicographical order and numbers with their natural order.
///
/// Every node records the number of nodes in its subtree, which turns
/// [`select`](OrderedMap::select) and [`rank`](OrderedMap::rank) into single
/// root-to-leaf walks.
///
/// The tree is not rebalanced. All operations take time proportional to the height
/// of the tree, which is logarithmic for random insertion orders but linear when the
/// keys arrive sorted. Deleting a node with two children replaces it by the minimum
/// of its right subtree (Hibbard deletion).
///
/// It is a logic error for a key to be modified in such a way that the key's ordering relative to
/// any other key, as determined by the [`Ord`] trait, changes while it is in the map. The
/// behavior resulting from such a logic error is not specified, but will be encapsulated to the
/// `OrderedMap` that observed it and not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use osbst::OrderedMap;
///
/// let mut letters = OrderedMap::new();
/// for (position, letter) in "binary".chars().enumerate() {
///     letters.insert(letter, position);
/// }
///
/// assert_eq!(letters.len(), 6);
/// assert_eq!(letters.min(), Ok(&'a'));
/// assert_eq!(letters.max(), Ok(&'y'));
/// assert_eq!(letters.select(2), Ok(&'i'));
/// assert_eq!(letters.rank(&'n'), 3);
///
/// // Level order starts at the first key inserted.
/// let levels: String = letters.level_order().collect();
/// assert_eq!(levels, "bainry");
///
/// // In-order iteration is sorted.
/// let sorted: String = letters.keys().collect();
/// assert_eq!(sorted, "abinry");
/// ```
///
/// An `OrderedMap` with a known list of items can be initialized from an array:
///
/// ```
/// use osbst::OrderedMap;
///
/// let solar_distance = OrderedMap::from([
///     ("Mercury", 0.4),
///     ("Venus", 0.7),
///     ("Earth", 1.0),
///     ("Mars", 1.5),
/// ]);
/// assert_eq!(solar_distance.range_len(&"Mars", &"Venus"), 3);
/// ```
///
/// [binary search tree]: https://en.wikipedia.org/wiki/Binary_search_tree
/// [total order]: https://en.wikipedia.org/wiki/Total_order
pub struct OrderedMap<K, V> {
    raw: RawBSTMap<K, V>,
}

/// An iterator over the entries of an `OrderedMap`, in ascending key order.
///
/// This `struct` is created by the [`iter`] method on [`OrderedMap`].
///
/// [`iter`]: OrderedMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    tree: &'a RawBSTMap<K, V>,
    cursor: Cursor,
}

/// An owning iterator over the entries of an `OrderedMap`, sorted by key.
///
/// This `struct` is created by the [`into_iter`] method on [`OrderedMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: alloc::vec::IntoIter<(K, V)>,
}

/// An iterator over the keys of an `OrderedMap`, in ascending order.
///
/// This `struct` is created by the [`keys`] method on [`OrderedMap`].
///
/// [`keys`]: OrderedMap::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over the values of an `OrderedMap`, in ascending key order.
///
/// This `struct` is created by the [`values`] method on [`OrderedMap`].
///
/// [`values`]: OrderedMap::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<K, V> OrderedMap<K, V> {
    /// Makes a new, empty `OrderedMap`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    ///
    /// // entries can now be inserted into the empty map
    /// map.insert(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> OrderedMap<K, V> {
        OrderedMap { raw: RawBSTMap::new() }
    }

    /// Clears the map, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1), read from the root's subtree count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// assert!(a.is_empty());
    /// a.insert(1, "a");
    /// assert!(!a.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the entry with the smallest key, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedMap;
    ///
    /// let map = OrderedMap::from([(2, "b"), (1, "a")]);
    /// assert_eq!(map.first_key_value(), Some((&1, &"a")));
    /// ```
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.raw.first_key_value()
    }

    /// Returns the entry with the largest key, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedMap;
    ///
    /// let map = OrderedMap::from([(2, "b"), (1, "a")]);
    /// assert_eq!(map.last_key_value(), Some((&2, &"b")));
    /// ```
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.raw.last_key_value()
    }

    /// Returns the smallest key in the map.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::{Error, OrderedMap};
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.min(), Err(Error::EmptyCollection { operation: "min" }));
    ///
    /// map.insert("b", 2);
    /// map.insert("a", 1);
    /// assert_eq!(map.min(), Ok(&"a"));
    /// ```
    pub fn min(&self) -> Result<&K> {
        self.first_key_value().map(|(key, _)| key).ok_or(Error::EmptyCollection { operation: "min" })
    }

    /// Returns the largest key in the map.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedMap;
    ///
    /// let map = OrderedMap::from([("b", 2), ("a", 1), ("c", 3)]);
    /// assert_eq!(map.max(), Ok(&"c"));
    /// ```
    pub fn max(&self) -> Result<&K> {
        self.last_key_value().map(|(key, _)| key).ok_or(Error::EmptyCollection { operation: "max" })
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedMap;
    ///
    /// let map = OrderedMap::from([(3, "c"), (1, "a"), (2, "b")]);
    /// let mut iter = map.iter();
    /// assert_eq!(iter.next(), Some((&1, &"a")));
    /// assert_eq!(iter.next_back(), Some((&3, &"c")));
    /// assert_eq!(iter.next(), Some((&2, &"b")));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            tree: &self.raw,
            cursor: Cursor::full(&self.raw),
        }
    }

    /// Gets an iterator over the keys of the map, in sorted order.
    ///
    /// An empty map yields nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedMap;
    ///
    /// let map = OrderedMap::from([(2, "b"), (1, "a")]);
    /// let keys: Vec<_> = map.keys().copied().collect();
    /// assert_eq!(keys, [1, 2]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the map, in order by key.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

impl<K: Ord, V> OrderedMap<K, V> {
    #[inline]
    #[cfg_attr(not(feature = "check-invariants"), allow(clippy::unused_self))]
    fn check_invariants(&self) {
        #[cfg(feature = "check-invariants")]
        debug_assert!(self.raw.validate(), "OrderedMap invariants violated");
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[&1], "b");
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_mut(key)
    }

    /// Returns the stored key and its value for the supplied key.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_key_value(key)
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// assert!(map.contains_key(&1));
    /// assert!(!map.contains_key(&2));
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.contains_key(key)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, `None` is returned and a new
    /// leaf is attached where the search for the key ended.
    ///
    /// If the map did have this key present, the value is updated in place and
    /// the old value is returned. The key and the shape of the tree are left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert!(!map.is_empty());
    ///
    /// map.insert(37, "b");
    /// assert_eq!(map.insert(37, "c"), Some("b"));
    /// assert_eq!(map[&37], "c");
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let replaced = self.raw.insert(key, value);
        self.check_invariants();
        replaced
    }

    /// Inserts `value` under `key`, or deletes `key` when `value` is `None`.
    ///
    /// Returns the value previously stored under `key`, if any. This is a
    /// convenience for callers that model "no value" as deletion; use
    /// [`insert`](Self::insert) and [`delete`](Self::delete) when the intent is known.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.put("k", Some(1));
    /// assert_eq!(map.get(&"k"), Some(&1));
    ///
    /// assert_eq!(map.put("k", None), Some(1));
    /// assert!(!map.contains_key(&"k"));
    /// ```
    pub fn put(&mut self, key: K, value: Option<V>) -> Option<V> {
        match value {
            Some(value) => self.insert(key, value),
            None => self.delete(&key),
        }
    }

    /// Removes a key from the map, returning its value if the key was present.
    ///
    /// Deleting a missing key leaves the map unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([(5, "e"), (3, "c"), (8, "h")]);
    /// assert_eq!(map.delete(&5), Some("e"));
    /// assert_eq!(map.delete(&5), None);
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [3, 8]);
    /// ```
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes a key from the map, returning the stored key and value if the
    /// key was present.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let removed = self.raw.remove_entry(key);
        self.check_invariants();
        removed
    }

    /// Removes the entry with the smallest key and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::{Error, OrderedMap};
    ///
    /// let mut map = OrderedMap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.delete_min(), Ok((1, "a")));
    /// assert_eq!(map.delete_min(), Ok((2, "b")));
    /// assert_eq!(map.delete_min(), Err(Error::EmptyCollection { operation: "delete_min" }));
    /// ```
    pub fn delete_min(&mut self) -> Result<(K, V)> {
        let entry = self.raw.pop_extreme(Side::Left).ok_or(Error::EmptyCollection { operation: "delete_min" })?;
        self.check_invariants();
        Ok(entry)
    }

    /// Removes the entry with the largest key and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the map is empty.
    pub fn delete_max(&mut self) -> Result<(K, V)> {
        let entry = self.raw.pop_extreme(Side::Right).ok_or(Error::EmptyCollection { operation: "delete_max" })?;
        self.check_invariants();
        Ok(entry)
    }

    /// Returns the largest key less than or equal to `key`, or `None` if every
    /// key in the map is greater.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedMap;
    ///
    /// let map = OrderedMap::from([(10, ()), (20, ()), (30, ())]);
    /// assert_eq!(map.floor(&25), Some(&20));
    /// assert_eq!(map.floor(&20), Some(&20));
    /// assert_eq!(map.floor(&5), None);
    /// ```
    pub fn floor<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.nearest(key, Side::Left).map(|handle| &self.raw.node(handle).key)
    }

    /// Returns the smallest key greater than or equal to `key`, or `None` if
    /// every key in the map is smaller.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedMap;
    ///
    /// let map = OrderedMap::from([(10, ()), (20, ()), (30, ())]);
    /// assert_eq!(map.ceiling(&25), Some(&30));
    /// assert_eq!(map.ceiling(&35), None);
    /// ```
    pub fn ceiling<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.nearest(key, Side::Right).map(|handle| &self.raw.node(handle).key)
    }

    /// Checks every structural invariant of the tree: symmetric key order,
    /// subtree counts, and that [`select`](Self::select) and
    /// [`rank`](Self::rank) invert each other.
    ///
    /// Each failed check is logged at `warn` level. This is a diagnostic: it
    /// costs O(n log n) or worse and should not be called on hot paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedMap;
    ///
    /// let map: OrderedMap<_, _> = (0..100).map(|i| (i * 7 % 100, i)).collect();
    /// assert!(map.validate());
    /// ```
    #[must_use]
    pub fn validate(&self) -> bool {
        self.raw.validate()
    }
}

impl<K: Clone, V: Clone> Clone for OrderedMap<K, V> {
    fn clone(&self) -> Self {
        OrderedMap { raw: self.raw.clone() }
    }
}

impl<K: Hash, V: Hash> Hash for OrderedMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Eq, V: Eq> Eq for OrderedMap<K, V> {}

// No `Ord` impl: its by-value `min`/`max` would shadow the inherent
// `OrderedMap::min`/`OrderedMap::max` for every ordered key and value type.
impl<K: PartialOrd, V: PartialOrd> PartialOrd for OrderedMap<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        OrderedMap::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = OrderedMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K: Ord + Copy, V: Copy> Extend<(&'a K, &'a V)> for OrderedMap<K, V> {
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: T) {
        for (&k, &v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for OrderedMap<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedMap;
    ///
    /// let map = OrderedMap::from([(2, "b"), (1, "a")]);
    /// let mut iter = map.into_iter();
    /// assert_eq!(iter.next(), Some((1, "a")));
    /// assert_eq!(iter.next_back(), Some((2, "b")));
    /// ```
    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<K, Q, V> Index<&Q> for OrderedMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        let tree = self.tree;
        self.cursor.next(tree).map(|handle| tree.entry(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.remaining();
        (remaining, Some(remaining))
    }

    fn last(mut self) -> Option<(&'a K, &'a V)> {
        self.next_back()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.cursor.next_back(tree).map(|handle| tree.entry(handle))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            tree: self.tree,
            cursor: self.cursor.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
