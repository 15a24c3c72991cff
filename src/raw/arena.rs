use alloc::vec::Vec;

use super::handle::Handle;
use super::size::Size;

/// Backing store for the nodes of one tree.
///
/// Deleted nodes leave a vacant slot that the next insertion fills before the
/// slot vector grows. The live node count is capped at [`Size::MAX`] so the
/// root's subtree count always fits.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    vacant: Vec<Handle>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            vacant: Vec::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of live nodes.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.vacant.len()
    }

    pub(crate) fn alloc(&mut self, node: T) -> Handle {
        if let Some(handle) = self.vacant.pop() {
            self.slots[handle.slot()] = Some(node);
            return handle;
        }

        // No vacancies, so every slot is live.
        assert!(self.slots.len() < Size::MAX, "node arena is full ({} nodes)", Size::MAX);
        let handle = Handle::new(self.slots.len());
        self.slots.push(Some(node));
        handle
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.slot()].as_ref().unwrap_or_else(|| dangling(handle))
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.slot()].as_mut().unwrap_or_else(|| dangling(handle))
    }

    /// Moves the node out and marks its slot vacant.
    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let node = self.slots[handle.slot()].take().unwrap_or_else(|| dangling(handle));
        self.vacant.push(handle);
        node
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
    }
}

#[cold]
#[track_caller]
fn dangling(handle: Handle) -> ! {
    panic!("{handle:?} does not refer to a live node")
}
