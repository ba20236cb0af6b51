use alloc::rc::Rc;
use core::cell::Cell;

use crate::FrameRect;

#[derive(Debug, Default)]
struct SlotInner {
    latest: Cell<Option<FrameRect>>,
    generation: Cell<u64>,
}

/// A latest-value-wins geometry slot scoped to a view subtree.
///
/// Descendants [`publish`](Self::publish) their global-space frame each layout
/// pass; the nearest ancestor subscriber reads the latest value. There is no
/// queue: intermediate frames are overwritten, which is harmless because only
/// the most recent sample is meaningful.
///
/// Clones share the same slot (`Rc`-backed). All access happens on the single
/// UI thread, so no locking is involved; the slot is deliberately not `Send`.
#[derive(Clone, Debug, Default)]
pub struct FrameSlot {
    inner: Rc<SlotInner>,
}

impl FrameSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a frame, replacing any unread previous value.
    pub fn publish(&self, rect: FrameRect) {
        strace!(
            min_x = rect.min_x,
            min_y = rect.min_y,
            width = rect.width,
            height = rect.height,
            "FrameSlot::publish"
        );
        self.inner.latest.set(Some(rect));
        self.inner
            .generation
            .set(self.inner.generation.get().wrapping_add(1));
    }

    /// The most recently published frame, if any was ever published.
    pub fn latest(&self) -> Option<FrameRect> {
        self.inner.latest.get()
    }

    /// Bumped on every publish. Readers compare against the last generation
    /// they observed to detect fresh frames without clearing the slot.
    pub fn generation(&self) -> u64 {
        self.inner.generation.get()
    }

    /// `true` when both sides reference the same underlying slot.
    pub fn same_slot(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
