use alloc::boxed::Box;

use stretcher::{Axis, FrameRect, FrameSlot, StretchComputer, StretchOptions, StretchTransform};

use crate::{BubbledSource, DirectSource, GeometrySource, HostCapability};

/// A framework-neutral attachment that wraps a `stretcher::StretchComputer`
/// together with its geometry acquisition strategy.
///
/// This is the `applyStretch(axis, uniform)` contract: construct one per
/// decorated view, feed it geometry, apply the returned transform. The
/// attachment does not hold any UI objects. Adapters drive it by calling:
/// - `on_frame(rect)` when the host reports geometry synchronously
/// - `tick()` each frame for bubbled hosts (drains the subtree slot)
///
/// Dropping the attachment drops the baseline with it; a remounted view gets
/// a fresh attachment (or call [`reset`](Self::reset) to reuse one).
pub struct StretchAttachment {
    computer: StretchComputer,
    source: Box<dyn GeometrySource>,
}

impl core::fmt::Debug for StretchAttachment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StretchAttachment")
            .field("computer", &self.computer)
            .finish_non_exhaustive()
    }
}

impl StretchAttachment {
    /// Attaches with an explicit source strategy.
    ///
    /// The computer's reference frame always follows the source.
    pub fn with_source(options: StretchOptions, source: impl GeometrySource + 'static) -> Self {
        let options = options.with_reference(source.reference());
        Self {
            computer: StretchComputer::new(options),
            source: Box::new(source),
        }
    }

    /// Direct mode: the host pushes container-relative frames.
    pub fn direct(axis: Axis, uniform: bool) -> Self {
        Self::with_source(
            StretchOptions::new(axis).with_uniform(uniform),
            DirectSource::new(),
        )
    }

    /// Bubbled mode: descendants publish global-space frames into the
    /// attachment's subtree slot (see [`frame_slot`](Self::frame_slot)).
    pub fn bubbled(axis: Axis, uniform: bool) -> Self {
        Self::with_source(
            StretchOptions::new(axis).with_uniform(uniform),
            BubbledSource::new(),
        )
    }

    /// Capability-detection dispatch: picks the strategy once, at attachment
    /// time, based on what the host platform can report.
    pub fn for_capability(capability: HostCapability, axis: Axis, uniform: bool) -> Self {
        if capability.container_relative_geometry {
            Self::direct(axis, uniform)
        } else {
            Self::bubbled(axis, uniform)
        }
    }

    pub fn computer(&self) -> &StretchComputer {
        &self.computer
    }

    pub fn computer_mut(&mut self) -> &mut StretchComputer {
        &mut self.computer
    }

    /// The slot the tracked view should publish its frames into, when the
    /// source acquires geometry by bubbling. `None` for direct sources.
    pub fn frame_slot(&self) -> Option<FrameSlot> {
        self.source.slot()
    }

    /// Reports one geometry observation and returns the transform to apply.
    ///
    /// For direct hosts this is the whole per-frame protocol. For bubbled
    /// hosts it is equivalent to publishing into the slot and ticking.
    pub fn on_frame(&mut self, rect: FrameRect) -> StretchTransform {
        self.source.offer(rect);
        self.pump();
        self.computer.transform()
    }

    /// Advances the attachment one host frame: drains any fresh geometry from
    /// the source and returns the new transform, or `None` when nothing
    /// arrived since the last tick.
    pub fn tick(&mut self) -> Option<StretchTransform> {
        if !self.pump() {
            return None;
        }
        Some(self.computer.transform())
    }

    /// The transform from the most recent observation (identity initially).
    pub fn transform(&self) -> StretchTransform {
        self.computer.transform()
    }

    /// Remount semantics: clears the baseline latch and returns to identity.
    pub fn reset(&mut self) {
        self.computer.reset();
    }

    fn pump(&mut self) -> bool {
        let Some(rect) = self.source.poll() else {
            return false;
        };
        self.computer.apply_frame(rect);
        true
    }
}
