use stretcher::{FrameRect, FrameSlot, ReferenceFrame};

/// What the host platform can report about a view's geometry.
///
/// Newer hosts hand out frames already relative to the enclosing scroll
/// container; older ones only expose global-space frames via child-to-ancestor
/// bubbling. The capability is probed once and decides the acquisition
/// strategy for the whole attachment lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostCapability {
    /// `true` when the host reports frames relative to the scroll container's
    /// visible origin, sampled synchronously during layout.
    pub container_relative_geometry: bool,
}

impl HostCapability {
    /// A host with native container-relative geometry reporting.
    pub const NATIVE: Self = Self {
        container_relative_geometry: true,
    };
    /// A backport host: global-space frames bubbled from the tracked view.
    pub const BUBBLED: Self = Self {
        container_relative_geometry: false,
    };
}

/// A per-attachment geometry acquisition strategy.
///
/// Two implementers exist, chosen once per attachment and never re-evaluated
/// per sample: [`DirectSource`] (host pushes container-relative frames) and
/// [`BubbledSource`] (descendants publish global frames into a [`FrameSlot`]).
///
/// Both feed the same computation; [`reference`](Self::reference) tells the
/// computer how to normalize the offsets this source produces.
pub trait GeometrySource {
    /// The coordinate space frames from this source are expressed in.
    fn reference(&self) -> ReferenceFrame;

    /// Reports one synchronous geometry observation from the host.
    fn offer(&mut self, rect: FrameRect);

    /// Takes the most recent frame not yet consumed, if any.
    fn poll(&mut self) -> Option<FrameRect>;

    /// The subtree slot descendants should publish into, for sources that
    /// acquire geometry by bubbling.
    fn slot(&self) -> Option<FrameSlot> {
        None
    }
}

/// Direct acquisition: the host samples the view's frame relative to the
/// scroll container during its layout/paint pass and offers it here.
#[derive(Clone, Debug, Default)]
pub struct DirectSource {
    pending: Option<FrameRect>,
}

impl DirectSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GeometrySource for DirectSource {
    fn reference(&self) -> ReferenceFrame {
        ReferenceFrame::ContainerRelative
    }

    fn offer(&mut self, rect: FrameRect) {
        self.pending = Some(rect);
    }

    fn poll(&mut self) -> Option<FrameRect> {
        self.pending.take()
    }
}

/// Bubbled acquisition: descendants publish global-space frames into a shared
/// [`FrameSlot`]; the attachment drains the slot on its frame tick.
///
/// Pairs with [`ReferenceFrame::Global`]: the computer latches its own
/// baseline from the first bubbled frame.
#[derive(Clone, Debug)]
pub struct BubbledSource {
    slot: FrameSlot,
    seen_generation: Option<u64>,
}

impl BubbledSource {
    pub fn new() -> Self {
        Self::with_slot(FrameSlot::new())
    }

    /// Subscribes to an existing subtree slot.
    ///
    /// A frame published before the subscription is still delivered on the
    /// first poll; it is the latest observation and therefore the one that
    /// establishes the baseline.
    pub fn with_slot(slot: FrameSlot) -> Self {
        Self {
            slot,
            seen_generation: None,
        }
    }
}

impl Default for BubbledSource {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometrySource for BubbledSource {
    fn reference(&self) -> ReferenceFrame {
        ReferenceFrame::Global
    }

    fn offer(&mut self, rect: FrameRect) {
        self.slot.publish(rect);
    }

    fn poll(&mut self) -> Option<FrameRect> {
        let generation = self.slot.generation();
        if self.seen_generation == Some(generation) {
            return None;
        }
        self.seen_generation = Some(generation);
        self.slot.latest()
    }

    fn slot(&self) -> Option<FrameSlot> {
        Some(self.slot.clone())
    }
}
