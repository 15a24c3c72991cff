//! Structural self-checks for [`RawBSTMap`].
//!
//! None of these run on the normal operation path. They cost O(n log n) or
//! more and report a broken invariant as `false` instead of panicking, so they
//! can be called on a tree that is already known to be corrupt.

use core::cmp::Ordering;

use log::warn;

use super::cursor::Cursor;
use super::handle::Handle;
use super::raw_bst_map::RawBSTMap;

impl<K: Ord, V> RawBSTMap<K, V> {
    /// Runs every check and logs each one that fails.
    pub(crate) fn validate(&self) -> bool {
        let ordered = self.is_bst();
        let sized = self.is_size_consistent();
        let ranked = self.is_rank_consistent();

        if !ordered {
            warn!("not in symmetric order");
        }
        if !sized {
            warn!("subtree counts not consistent");
        }
        if !ranked {
            warn!("ranks not consistent");
        }
        ordered && sized && ranked
    }

    /// Every key is strictly between the bounds inherited from its ancestors.
    pub(crate) fn is_bst(&self) -> bool {
        self.is_bst_at(self.root, None, None)
    }

    fn is_bst_at(&self, link: Option<Handle>, min: Option<&K>, max: Option<&K>) -> bool {
        let Some(handle) = link else {
            return true;
        };
        let node = self.nodes.get(handle);
        if min.is_some_and(|min| node.key <= *min) || max.is_some_and(|max| node.key >= *max) {
            return false;
        }
        self.is_bst_at(node.left, min, Some(&node.key)) && self.is_bst_at(node.right, Some(&node.key), max)
    }

    /// Every stored count is one more than the sum of its children's counts,
    /// and the tree accounts for every live node in the arena.
    pub(crate) fn is_size_consistent(&self) -> bool {
        self.is_size_consistent_at(self.root) && self.nodes.len() == self.len()
    }

    fn is_size_consistent_at(&self, link: Option<Handle>) -> bool {
        let Some(handle) = link else {
            return true;
        };
        let node = self.nodes.get(handle);
        node.count() == 1 + self.count(node.left) + self.count(node.right)
            && self.is_size_consistent_at(node.left)
            && self.is_size_consistent_at(node.right)
    }

    /// `select` and `rank` are inverse to each other over the whole tree.
    pub(crate) fn is_rank_consistent(&self) -> bool {
        let selects_invert = (0..self.len()).all(|rank| {
            self.select(rank).is_some_and(|handle| self.rank(&self.nodes.get(handle).key) == rank)
        });
        if !selects_invert {
            return false;
        }

        let mut cursor = Cursor::full(self);
        while let Some(handle) = cursor.next(self) {
            let key = &self.nodes.get(handle).key;
            let round_trip = self.select(self.rank(key)).map(|found| self.nodes.get(found).key.cmp(key));
            if round_trip != Some(Ordering::Equal) {
                return false;
            }
        }
        true
    }
}
