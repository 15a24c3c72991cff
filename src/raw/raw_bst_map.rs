use alloc::vec::Vec;
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::mem;

use log::trace;

use super::arena::Arena;
use super::cursor::Cursor;
use super::handle::Handle;
use super::node::{Node, Side};
use super::size::Size;

/// The size-augmented binary search tree backing `OrderedMap`.
///
/// Every mutation is a recursive walk that hands the (possibly new) root of the
/// subtree it was given back to its caller, which stores it in the parent link.
/// Subtree counts are recomputed on the way back up.
pub(crate) struct RawBSTMap<K, V> {
    /// Arena storing all tree nodes.
    pub(super) nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    pub(super) root: Option<Handle>,
}

impl<K, V> RawBSTMap<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the number of key-value pairs in the tree.
    pub(crate) fn len(&self) -> usize {
        self.count(self.root)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    /// Size of the subtree behind `link`; zero for an absent child.
    pub(crate) fn count(&self, link: Option<Handle>) -> usize {
        link.map_or(0, |handle| self.nodes.get(handle).count())
    }

    fn update_count(&mut self, handle: Handle) {
        let node = self.nodes.get(handle);
        let count = Size::of_subtree(self.count(node.left), self.count(node.right));
        self.nodes.get_mut(handle).count = count;
    }

    /// Walks from the root as far as possible towards `side`.
    pub(crate) fn extreme(&self, side: Side) -> Option<Handle> {
        let mut current = self.root?;
        while let Some(next) = self.nodes.get(current).child(side) {
            current = next;
        }
        Some(current)
    }

    pub(crate) fn first_key_value(&self) -> Option<(&K, &V)> {
        self.extreme(Side::Left).map(|handle| self.entry(handle))
    }

    pub(crate) fn last_key_value(&self) -> Option<(&K, &V)> {
        self.extreme(Side::Right).map(|handle| self.entry(handle))
    }

    pub(crate) fn entry(&self, handle: Handle) -> (&K, &V) {
        let node = self.nodes.get(handle);
        (&node.key, &node.value)
    }

    /// Removes the entry at the far `side` of the tree.
    pub(crate) fn pop_extreme(&mut self, side: Side) -> Option<(K, V)> {
        let root = self.root?;
        let (root, extreme) = self.detach_extreme(root, side);
        self.root = root;
        Some(self.nodes.take(extreme).into_entry())
    }

    /// Unlinks the outermost node on `side` of the subtree at `handle` without
    /// releasing it. Returns the new subtree root and the detached node.
    fn detach_extreme(&mut self, handle: Handle, side: Side) -> (Option<Handle>, Handle) {
        let (toward, away) = {
            let node = self.nodes.get(handle);
            (node.child(side), node.child(side.opposite()))
        };
        let Some(child) = toward else {
            return (away, handle);
        };

        let (child, extreme) = self.detach_extreme(child, side);
        self.nodes.get_mut(handle).set_child(side, child);
        self.update_count(handle);
        (Some(handle), extreme)
    }

    /// Length of the longest path from the root to a leaf, in edges.
    pub(crate) fn height(&self) -> isize {
        self.height_at(self.root)
    }

    fn height_at(&self, link: Option<Handle>) -> isize {
        let Some(handle) = link else {
            return -1;
        };
        let node = self.nodes.get(handle);
        1 + self.height_at(node.left).max(self.height_at(node.right))
    }

    /// Empties the tree into a vector of entries in ascending key order.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        let mut cursor = Cursor::full(self);
        let mut handles = Vec::with_capacity(self.len());
        while let Some(handle) = cursor.next(self) {
            handles.push(handle);
        }

        let entries = handles.into_iter().map(|handle| self.nodes.take(handle).into_entry()).collect();
        self.clear();
        entries
    }
}

impl<K: Ord, V> RawBSTMap<K, V> {
    /// Finds the node holding `key`.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).map(|handle| &self.nodes.get(handle).value)
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.search(key)?;
        Some(&mut self.nodes.get_mut(handle).value)
    }

    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).map(|handle| self.entry(handle))
    }

    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).is_some()
    }

    /// Inserts a key-value pair, returning the replaced value if the key was present.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (root, replaced) = self.insert_at(self.root, key, value);
        self.root = Some(root);
        replaced
    }

    fn insert_at(&mut self, link: Option<Handle>, key: K, value: V) -> (Handle, Option<V>) {
        let Some(handle) = link else {
            return (self.nodes.alloc(Node::new(key, value)), None);
        };

        let side = match key.cmp(&self.nodes.get(handle).key) {
            Ordering::Less => Side::Left,
            Ordering::Greater => Side::Right,
            Ordering::Equal => {
                // Shape and counts are untouched by a replacement.
                let replaced = mem::replace(&mut self.nodes.get_mut(handle).value, value);
                return (handle, Some(replaced));
            }
        };

        let child = self.nodes.get(handle).child(side);
        let (child, replaced) = self.insert_at(child, key, value);
        self.nodes.get_mut(handle).set_child(side, Some(child));
        self.update_count(handle);
        (handle, replaced)
    }

    /// Removes `key` from the tree. Missing keys leave the tree untouched.
    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let (root, removed) = self.remove_at(self.root, key);
        self.root = root;
        removed
    }

    fn remove_at<Q>(&mut self, link: Option<Handle>, key: &Q) -> (Option<Handle>, Option<(K, V)>)
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let Some(handle) = link else {
            return (None, None);
        };

        let side = match key.cmp(self.nodes.get(handle).key.borrow()) {
            Ordering::Less => Side::Left,
            Ordering::Greater => Side::Right,
            Ordering::Equal => return self.splice_out(handle),
        };

        let child = self.nodes.get(handle).child(side);
        let (child, removed) = self.remove_at(child, key);
        if removed.is_some() {
            self.nodes.get_mut(handle).set_child(side, child);
            self.update_count(handle);
        }
        (Some(handle), removed)
    }

    /// Hibbard deletion of the node at `handle`. Returns the subtree root that
    /// takes its place together with the removed entry.
    fn splice_out(&mut self, handle: Handle) -> (Option<Handle>, Option<(K, V)>) {
        let (left, right) = {
            let node = self.nodes.get(handle);
            (node.left, node.right)
        };

        let replacement = match (left, right) {
            (_, None) => left,
            (None, Some(_)) => right,
            (Some(left), Some(right)) => {
                let (right, successor) = self.detach_extreme(right, Side::Left);
                let node = self.nodes.get_mut(successor);
                node.left = Some(left);
                node.right = right;
                self.update_count(successor);
                trace!("promoted successor {successor:?} into the place of {handle:?}");
                Some(successor)
            }
        };

        (replacement, Some(self.nodes.take(handle).into_entry()))
    }

    /// The node with the largest key `<= key` (`Side::Left`) or the smallest
    /// key `>= key` (`Side::Right`).
    pub(crate) fn nearest<Q>(&self, key: &Q, side: Side) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.nearest_at(self.root, key, side)
    }

    fn nearest_at<Q>(&self, link: Option<Handle>, key: &Q, side: Side) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = link?;
        let node = self.nodes.get(handle);
        let beyond = match key.cmp(node.key.borrow()) {
            Ordering::Equal => return Some(handle),
            Ordering::Less => Side::Left,
            Ordering::Greater => Side::Right,
        };

        if beyond == side {
            // This node lies on the wrong side of `key`.
            self.nearest_at(node.child(side), key, side)
        } else {
            self.nearest_at(node.child(beyond), key, side).or(Some(handle))
        }
    }

    /// The node with exactly `rank` smaller keys.
    pub(crate) fn select(&self, rank: usize) -> Option<Handle> {
        let mut current = self.root;
        let mut remaining = rank;

        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            let left = self.count(node.left);
            current = match left.cmp(&remaining) {
                Ordering::Greater => node.left,
                Ordering::Less => {
                    remaining -= left + 1;
                    node.right
                }
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    pub(crate) fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        self.select(rank).map(|handle| self.entry(handle))
    }

    pub(crate) fn get_by_rank_mut(&mut self, rank: usize) -> Option<(&K, &mut V)> {
        let handle = self.select(rank)?;
        let node = self.nodes.get_mut(handle);
        Some((&node.key, &mut node.value))
    }

    /// Number of keys strictly less than `key`. `key` need not be present.
    pub(crate) fn rank<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        let mut rank = 0;

        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => {
                    rank += 1 + self.count(node.left);
                    node.right
                }
                Ordering::Equal => return rank + self.count(node.left),
            };
        }
        rank
    }

    /// Number of keys in `[lo, hi]`.
    pub(crate) fn range_len<Q>(&self, lo: &Q, hi: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        if lo > hi {
            return 0;
        }
        self.rank(hi) - self.rank(lo) + usize::from(self.contains_key(hi))
    }
}

impl<K: Clone, V: Clone> Clone for RawBSTMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::collections::BTreeMap;
    use alloc::vec;
    use proptest::prelude::*;

    fn tree_of(keys: &[i32]) -> RawBSTMap<i32, i32> {
        let mut tree = RawBSTMap::new();
        for &key in keys {
            tree.insert(key, key * 10);
        }
        tree
    }

    fn in_order(tree: &RawBSTMap<i32, i32>) -> Vec<i32> {
        let mut cursor = Cursor::full(tree);
        let mut keys = Vec::new();
        while let Some(handle) = cursor.next(tree) {
            keys.push(tree.node(handle).key);
        }
        keys
    }

    #[test]
    fn replacing_a_value_keeps_shape() {
        let mut tree = tree_of(&[4, 2, 6]);
        let root = tree.root();
        assert_eq!(tree.insert(2, 99), Some(20));
        assert_eq!(tree.root(), root);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.get(&2), Some(&99));
        assert!(tree.validate());
    }

    #[test]
    fn two_child_delete_promotes_right_minimum() {
        //       5
        //     3   8
        //        7  9
        //       6
        let mut tree = tree_of(&[5, 3, 8, 7, 9, 6]);
        let six = tree.search(&6).unwrap();

        assert_eq!(tree.remove_entry(&5), Some((5, 50)));
        assert_eq!(tree.root(), Some(six));

        let root = tree.node(six);
        assert_eq!(tree.node(root.left.unwrap()).key, 3);
        assert_eq!(tree.node(root.right.unwrap()).key, 8);
        assert_eq!(root.count(), 5);
        assert_eq!(in_order(&tree), vec![3, 6, 7, 8, 9]);
        assert!(tree.validate());
    }

    #[test]
    fn one_child_delete_splices_child() {
        let mut tree = tree_of(&[5, 3, 1]);
        let three = tree.search(&3).unwrap();
        assert_eq!(tree.remove_entry(&5), Some((5, 50)));
        assert_eq!(tree.root(), Some(three));

        let mut tree = tree_of(&[5, 8, 9]);
        let eight = tree.search(&8).unwrap();
        assert_eq!(tree.remove_entry(&5), Some((5, 50)));
        assert_eq!(tree.root(), Some(eight));
        assert!(tree.validate());
    }

    #[test]
    fn missing_key_delete_is_a_no_op() {
        let mut tree = tree_of(&[5, 3, 8]);
        assert_eq!(tree.remove_entry(&4), None);
        assert_eq!(in_order(&tree), vec![3, 5, 8]);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.nodes.len(), 3);
    }

    #[test]
    fn pop_extreme_releases_nodes() {
        let mut tree = tree_of(&[5, 3, 8, 4]);
        assert_eq!(tree.pop_extreme(Side::Left), Some((3, 30)));
        assert_eq!(tree.pop_extreme(Side::Right), Some((8, 80)));
        assert_eq!(tree.nodes.len(), 2);
        assert_eq!(in_order(&tree), vec![4, 5]);
        assert!(tree.validate());

        let mut empty: RawBSTMap<i32, i32> = RawBSTMap::new();
        assert_eq!(empty.pop_extreme(Side::Left), None);
    }

    #[test]
    fn nearest_on_both_sides() {
        let tree = tree_of(&[10, 5, 15, 12]);
        let key = |handle: Option<Handle>| handle.map(|h| tree.node(h).key);

        assert_eq!(key(tree.nearest(&11, Side::Left)), Some(10));
        assert_eq!(key(tree.nearest(&11, Side::Right)), Some(12));
        assert_eq!(key(tree.nearest(&12, Side::Left)), Some(12));
        assert_eq!(key(tree.nearest(&4, Side::Left)), None);
        assert_eq!(key(tree.nearest(&16, Side::Right)), None);
        assert_eq!(key(tree.nearest(&20, Side::Left)), Some(15));
    }

    #[test]
    fn increasing_keys_degenerate_into_a_path() {
        let keys: Vec<i32> = (0..64).collect();
        let tree = tree_of(&keys);
        assert_eq!(tree.height(), 63);
        assert_eq!(RawBSTMap::<i32, i32>::new().height(), -1);
        assert_eq!(tree_of(&[1]).height(), 0);
    }

    #[test]
    fn drain_yields_sorted_entries() {
        let mut tree = tree_of(&[3, 1, 2]);
        assert_eq!(tree.drain_to_vec(), vec![(1, 10), (2, 20), (3, 30)]);
        assert!(tree.is_empty());
        assert_eq!(tree.nodes.len(), 0);
    }

    #[derive(Clone, Debug)]
    enum Op {
        Insert(i32),
        Remove(i32),
        PopFirst,
        PopLast,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            6 => (0i32..200).prop_map(Op::Insert),
            3 => (0i32..200).prop_map(Op::Remove),
            1 => Just(Op::PopFirst),
            1 => Just(Op::PopLast),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn invariants_hold_after_every_mutation(ops in prop::collection::vec(op_strategy(), 0..300)) {
            let mut tree: RawBSTMap<i32, i32> = RawBSTMap::new();
            let mut model: BTreeMap<i32, i32> = BTreeMap::new();

            for op in ops {
                match op {
                    Op::Insert(key) => {
                        prop_assert_eq!(tree.insert(key, key * 2), model.insert(key, key * 2));
                    }
                    Op::Remove(key) => {
                        prop_assert_eq!(tree.remove_entry(&key), model.remove_entry(&key));
                    }
                    Op::PopFirst => prop_assert_eq!(tree.pop_extreme(Side::Left), model.pop_first()),
                    Op::PopLast => prop_assert_eq!(tree.pop_extreme(Side::Right), model.pop_last()),
                }

                prop_assert!(tree.validate());
                prop_assert_eq!(tree.len(), model.len());
                prop_assert_eq!(tree.nodes.len(), model.len());
            }

            let keys: Vec<i32> = model.keys().copied().collect();
            prop_assert_eq!(in_order(&tree), keys);
        }

        #[test]
        fn select_and_rank_match_sorted_order(keys in prop::collection::vec(-500i32..500, 1..200)) {
            let tree = tree_of(&keys);
            let mut sorted = keys.clone();
            sorted.sort_unstable();
            sorted.dedup();

            for (rank, key) in sorted.iter().enumerate() {
                let handle = tree.select(rank);
                prop_assert_eq!(handle.map(|h| tree.node(h).key), Some(*key));
                prop_assert_eq!(tree.rank(key), rank);
            }
            prop_assert!(tree.select(sorted.len()).is_none());

            // Absent probes rank between their neighbours.
            for probe in -501i32..=501 {
                let expected = sorted.partition_point(|&k| k < probe);
                prop_assert_eq!(tree.rank(&probe), expected);
            }
        }

        #[test]
        fn range_len_counts_closed_interval(keys in prop::collection::vec(0i32..100, 0..100), lo in -5i32..105, hi in -5i32..105) {
            let tree = tree_of(&keys);
            let model: BTreeMap<i32, ()> = keys.iter().map(|&k| (k, ())).collect();
            let expected = if lo > hi { 0 } else { model.range(lo..=hi).count() };
            prop_assert_eq!(tree.range_len(&lo, &hi), expected);
        }
    }
}
