use alloc::sync::Arc;

use crate::Axis;
use crate::computer::StretchComputer;

/// A callback fired when the computed transform changes.
///
/// Fired after the computer's state has been updated, so reading
/// [`StretchComputer::transform`] from the callback sees the new value.
pub type OnChangeCallback = Arc<dyn Fn(&StretchComputer) + Send + Sync>;

/// The coordinate space incoming frames are expressed in.
///
/// Chosen once at attachment time (capability detection against the host);
/// not re-evaluated per sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReferenceFrame {
    /// Frames are already relative to the scroll container's visible origin.
    /// Offsets are used as-is.
    #[default]
    ContainerRelative,
    /// Frames live in an arbitrary stable global space. The computer latches
    /// the first offset it sees as a baseline and tracks displacement from it.
    Global,
}

/// Configuration for [`crate::StretchComputer`].
///
/// Cheap to clone: the only heavy field is the `Arc`'d change callback.
pub struct StretchOptions {
    /// Which scroll direction and edge/length pair drives the effect.
    pub axis: Axis,
    /// Whether the orthogonal dimension also receives the stretch scale.
    /// When `false`, the orthogonal scale is pinned at `1.0`.
    pub uniform: bool,
    pub reference: ReferenceFrame,
    /// Optional callback fired when the computed transform changes.
    pub on_change: Option<OnChangeCallback>,
}

impl StretchOptions {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            uniform: false,
            reference: ReferenceFrame::ContainerRelative,
            on_change: None,
        }
    }

    /// Shorthand for `new(Axis::Vertical)` — the pull-down stretchy header.
    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    /// Shorthand for `new(Axis::Horizontal)`.
    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    pub fn with_uniform(mut self, uniform: bool) -> Self {
        self.uniform = uniform;
        self
    }

    pub fn with_reference(mut self, reference: ReferenceFrame) -> Self {
        self.reference = reference;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&StretchComputer) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Clone for StretchOptions {
    fn clone(&self) -> Self {
        Self {
            axis: self.axis,
            uniform: self.uniform,
            reference: self.reference,
            on_change: self.on_change.clone(),
        }
    }
}

impl core::fmt::Debug for StretchOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StretchOptions")
            .field("axis", &self.axis)
            .field("uniform", &self.uniform)
            .field("reference", &self.reference)
            .finish_non_exhaustive()
    }
}
