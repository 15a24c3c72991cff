use core::num::NonZero;

use super::handle::{Handle, Width};

/// Number of nodes in a non-empty subtree, its root included.
///
/// An absent child counts as zero at the link level, so a stored size is never
/// zero and shares the niche layout of [`Handle`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Size(NonZero<Width>);

impl Size {
    /// A tree never holds more nodes than there are arena slots.
    pub(crate) const MAX: usize = Handle::SLOTS;

    pub(crate) const LEAF: Self = Self::of_subtree(0, 0);

    /// Size of a subtree whose root has children of the given sizes.
    #[inline]
    pub(crate) const fn of_subtree(left: usize, right: usize) -> Self {
        let total = 1 + left + right;
        assert!(total <= Self::MAX, "subtree is larger than the node arena");
        #[allow(clippy::cast_possible_truncation)]
        match NonZero::new(total as Width) {
            Some(raw) => Self(raw),
            None => unreachable!(),
        }
    }

    #[inline]
    pub(crate) const fn get(self) -> usize {
        self.0.get() as usize
    }
}
