use super::OrderedMap;
use crate::raw::RawBSTMap;

impl<K, V> OrderedMap<K, V> {
    /// Creates an empty map with room for at least `capacity` entries before
    /// the node pool reallocates.
    ///
    /// This is an extension and is not part of the standard `BTreeMap` API.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedMap;
    ///
    /// let map: OrderedMap<i32, i32> = OrderedMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedMap {
            raw: RawBSTMap::with_capacity(capacity),
        }
    }

    /// Returns the number of entries the map can hold without reallocating its
    /// node pool.
    ///
    /// Slots released by deletions are reused, so capacity never shrinks.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
