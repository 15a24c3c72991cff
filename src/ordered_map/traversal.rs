use alloc::collections::VecDeque;
use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;

use super::{Iter, OrderedMap};
use crate::raw::{Cursor, Handle, RawBSTMap};

/// An iterator over the entries of an `OrderedMap` whose keys lie in a closed
/// interval, in ascending key order.
///
/// This `struct` is created by the [`range`] method on [`OrderedMap`].
///
/// [`range`]: OrderedMap::range
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Range<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over the keys of an `OrderedMap` that lie in a closed interval,
/// in ascending order.
///
/// This `struct` is created by the [`range_keys`] method on [`OrderedMap`].
///
/// [`range_keys`]: OrderedMap::range_keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct RangeKeys<'a, K, V> {
    inner: Range<'a, K, V>,
}

/// A breadth-first iterator over the keys of an `OrderedMap`.
///
/// This `struct` is created by the [`level_order`] method on [`OrderedMap`].
///
/// [`level_order`]: OrderedMap::level_order
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct LevelOrder<'a, K, V> {
    tree: &'a RawBSTMap<K, V>,
    queue: VecDeque<Handle>,
}

impl<K, V> OrderedMap<K, V> {
    /// Returns the number of edges on the longest path from the root to a leaf.
    ///
    /// An empty map has height `-1` and a map with a single entry height `0`.
    /// Since the tree is never rebalanced, inserting `n` keys in increasing
    /// order produces height `n - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.height(), -1);
    ///
    /// for i in 0..10 {
    ///     map.insert(i, ());
    /// }
    /// assert_eq!(map.height(), 9);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn height(&self) -> isize {
        self.raw.height()
    }

    /// Gets an iterator over the keys of the map in level order: the root
    /// first, then every node of the next depth from left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// for key in [4, 2, 6, 1, 3, 5, 7] {
    ///     map.insert(key, ());
    /// }
    ///
    /// let levels: Vec<_> = map.level_order().copied().collect();
    /// assert_eq!(levels, [4, 2, 6, 1, 3, 5, 7]);
    /// ```
    pub fn level_order(&self) -> LevelOrder<'_, K, V> {
        LevelOrder {
            tree: &self.raw,
            queue: self.raw.root().into_iter().collect(),
        }
    }
}

impl<K: Ord, V> OrderedMap<K, V> {
    /// Gets an iterator over the entries whose keys lie in `[lo, hi]`, in
    /// ascending key order.
    ///
    /// Both bounds are inclusive and need not be present in the map. If
    /// `lo > hi`, or no key falls inside the interval, the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedMap;
    ///
    /// let map = OrderedMap::from([(3, "c"), (5, "e"), (8, "h")]);
    /// let entries: Vec<_> = map.range(&4, &8).collect();
    /// assert_eq!(entries, [(&5, &"e"), (&8, &"h")]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height) to position both ends, then amortized O(1) per entry.
    pub fn range<Q>(&self, lo: &Q, hi: &Q) -> Range<'_, K, V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        Range {
            inner: Iter {
                tree: &self.raw,
                cursor: Cursor::range(&self.raw, lo, hi),
            },
        }
    }

    /// Gets an iterator over the keys that lie in `[lo, hi]`, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedMap;
    ///
    /// let map: OrderedMap<_, _> = (1..=9).map(|i| (i, ())).collect();
    /// let keys: Vec<_> = map.range_keys(&3, &6).copied().collect();
    /// assert_eq!(keys, [3, 4, 5, 6]);
    /// assert_eq!(map.range_keys(&6, &3).count(), 0);
    /// ```
    pub fn range_keys<Q>(&self, lo: &Q, hi: &Q) -> RangeKeys<'_, K, V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        RangeKeys {
            inner: self.range(lo, hi),
        }
    }

    /// Returns the number of keys that lie in `[lo, hi]`.
    ///
    /// Computed from two [`rank`](Self::rank) queries and one lookup of `hi`,
    /// without visiting the keys in between. Returns `0` when `lo > hi`.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedMap;
    ///
    /// let map = OrderedMap::from([(3, ()), (5, ()), (8, ())]);
    /// assert_eq!(map.range_len(&3, &8), 3);
    /// assert_eq!(map.range_len(&4, &7), 1);
    /// assert_eq!(map.range_len(&8, &3), 0);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn range_len<Q>(&self, lo: &Q, hi: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.range_len(lo, hi)
    }
}

impl<'a, K, V> Iterator for Range<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Range<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for Range<'_, K, V> {}

impl<K, V> FusedIterator for Range<'_, K, V> {}

impl<K, V> Clone for Range<'_, K, V> {
    fn clone(&self) -> Self {
        Range {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Range<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for RangeKeys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for RangeKeys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for RangeKeys<'_, K, V> {}

impl<K, V> FusedIterator for RangeKeys<'_, K, V> {}

impl<K, V> Clone for RangeKeys<'_, K, V> {
    fn clone(&self) -> Self {
        RangeKeys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for RangeKeys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for LevelOrder<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let tree = self.tree;
        let node = tree.node(self.queue.pop_front()?);
        // Absent children are never queued.
        self.queue.extend(node.left);
        self.queue.extend(node.right);
        Some(&node.key)
    }
}

impl<K, V> FusedIterator for LevelOrder<'_, K, V> {}

impl<K, V> Clone for LevelOrder<'_, K, V> {
    fn clone(&self) -> Self {
        LevelOrder {
            tree: self.tree,
            queue: self.queue.clone(),
        }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for LevelOrder<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
