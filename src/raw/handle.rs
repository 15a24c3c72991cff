use core::num::NonZero;

#[cfg(test)]
pub(super) type Width = u16;
#[cfg(not(test))]
pub(super) type Width = u32;

/// Slot of a node in the tree's [`Arena`](super::arena::Arena).
///
/// Slot `i` is stored as `i + 1`, so a child link `Option<Handle>` packs into
/// the same width as the handle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<Width>);

impl Handle {
    /// Number of distinct slots a handle can name.
    pub(crate) const SLOTS: usize = Width::MAX as usize;

    #[inline]
    pub(crate) const fn new(slot: usize) -> Self {
        assert!(slot < Self::SLOTS, "slot does not fit in a handle");
        #[allow(clippy::cast_possible_truncation)]
        match NonZero::new((slot + 1) as Width) {
            Some(raw) => Self(raw),
            None => unreachable!(),
        }
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        self.0.get() as usize - 1
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(Handle, Option<Handle>);
    assert_eq_size!(Handle, Width);

    #[test]
    fn first_and_last_slot() {
        assert_eq!(Handle::new(0).slot(), 0);
        assert_eq!(Handle::new(Handle::SLOTS - 1).slot(), Handle::SLOTS - 1);
        assert_ne!(Handle::new(0), Handle::new(1));
    }

    #[test]
    #[should_panic(expected = "slot does not fit in a handle")]
    fn slot_past_the_end() {
        let _ = Handle::new(Handle::SLOTS);
    }

    proptest! {
        #[test]
        fn slot_survives_packing(slot in 0..Handle::SLOTS) {
            prop_assert_eq!(Handle::new(slot).slot(), slot);
        }
    }
}
