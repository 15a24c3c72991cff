/// A zero-based position in the sorted order of an [`OrderedMap`](crate::OrderedMap).
///
/// Indexing a map by `Rank(k)` returns the value stored under the key that has
/// exactly `k` smaller keys, i.e. the value belonging to `map.select(k)`.
///
/// # Examples
///
/// ```
/// use osbst::{OrderedMap, Rank};
///
/// let mut map = OrderedMap::new();
/// map.insert("b", 20);
/// map.insert("a", 10);
///
/// assert_eq!(map[Rank(0)], 10);
/// assert_eq!(map[Rank(1)], 20);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
