use core::borrow::Borrow;
use core::cmp::Ordering;

use smallvec::SmallVec;

use super::handle::Handle;
use super::node::Side;
use super::raw_bst_map::RawBSTMap;

/// Stack of ancestors still to be visited. Inline storage covers any tree of
/// modest height; degenerate trees spill to the heap.
type Stack = SmallVec<[Handle; 32]>;

/// A double-ended in-order walk over a run of consecutive nodes.
///
/// `front` holds the path to the next node in ascending order and `back` the
/// path to the next node in descending order. `remaining` counts the nodes
/// left between the two ends, so the walks never cross.
#[derive(Clone, Debug, Default)]
pub(crate) struct Cursor {
    front: Stack,
    back: Stack,
    remaining: usize,
}

impl Cursor {
    /// A cursor over every node of `tree`.
    pub(crate) fn full<K, V>(tree: &RawBSTMap<K, V>) -> Self {
        let mut cursor = Self {
            remaining: tree.len(),
            ..Self::default()
        };
        push_spine(&mut cursor.front, tree, tree.root(), Side::Left);
        push_spine(&mut cursor.back, tree, tree.root(), Side::Right);
        cursor
    }

    /// A cursor over the nodes whose keys lie in `[lo, hi]`.
    ///
    /// Only the paths towards `lo` and `hi` are explored up front; a subtree
    /// entirely below `lo` or above `hi` is never entered.
    pub(crate) fn range<K, V, Q>(tree: &RawBSTMap<K, V>, lo: &Q, hi: &Q) -> Self
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        let remaining = tree.range_len(lo, hi);
        if remaining == 0 {
            return Self::default();
        }

        let mut cursor = Self {
            remaining,
            ..Self::default()
        };
        push_bound(&mut cursor.front, tree, lo, Side::Left);
        push_bound(&mut cursor.back, tree, hi, Side::Right);
        cursor
    }

    pub(crate) const fn remaining(&self) -> usize {
        self.remaining
    }

    pub(crate) fn next<K, V>(&mut self, tree: &RawBSTMap<K, V>) -> Option<Handle> {
        self.step(tree, Side::Left)
    }

    pub(crate) fn next_back<K, V>(&mut self, tree: &RawBSTMap<K, V>) -> Option<Handle> {
        self.step(tree, Side::Right)
    }

    // `toward` is the side the stack's spine leans to: left for ascending order.
    fn step<K, V>(&mut self, tree: &RawBSTMap<K, V>, toward: Side) -> Option<Handle> {
        if self.remaining == 0 {
            return None;
        }
        let stack = match toward {
            Side::Left => &mut self.front,
            Side::Right => &mut self.back,
        };
        let handle = stack.pop()?;
        push_spine(stack, tree, tree.node(handle).child(toward.opposite()), toward);
        self.remaining -= 1;
        Some(handle)
    }
}

fn push_spine<K, V>(stack: &mut Stack, tree: &RawBSTMap<K, V>, mut link: Option<Handle>, side: Side) {
    while let Some(handle) = link {
        stack.push(handle);
        link = tree.node(handle).child(side);
    }
}

/// Pushes the ancestors of `bound` that lie on the inner side of it: keys
/// `>= bound` when walking ascending (`Side::Left`), `<= bound` otherwise.
fn push_bound<K, V, Q>(stack: &mut Stack, tree: &RawBSTMap<K, V>, bound: &Q, side: Side)
where
    K: Borrow<Q>,
    Q: ?Sized + Ord,
{
    let mut link = tree.root();
    while let Some(handle) = link {
        let node = tree.node(handle);
        let toward = match bound.cmp(node.key.borrow()) {
            Ordering::Equal => {
                stack.push(handle);
                return;
            }
            Ordering::Less => Side::Left,
            Ordering::Greater => Side::Right,
        };
        if toward == side {
            stack.push(handle);
        }
        link = node.child(toward);
    }
}
