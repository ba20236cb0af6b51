/// The scroll axis a stretch effect tracks.
///
/// Fixed for the lifetime of an attachment: the axis decides which edge/length
/// pair of the tracked view drives the effect, and which edge the transform is
/// anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    /// The fixed anchor for this axis: the edge opposite the pulled direction,
    /// so growth visually emanates from the overscrolled edge.
    pub fn anchor(self) -> Anchor {
        match self {
            Self::Vertical => Anchor::BOTTOM_CENTER,
            Self::Horizontal => Anchor::TRAILING_CENTER,
        }
    }
}

/// One frame's geometry observation for the tracked view.
///
/// In container-relative mode, `min_x`/`min_y` are measured from the scroll
/// container's visible origin. In global mode they live in any stable global
/// space; the engine subtracts its own baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameRect {
    pub min_x: f32,
    pub min_y: f32,
    pub width: f32,
    pub height: f32,
}

impl FrameRect {
    pub fn new(min_x: f32, min_y: f32, width: f32, height: f32) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }

    /// Resolves the tracked `(offset, length)` pair for an axis:
    /// vertical → `(min_y, height)`, horizontal → `(min_x, width)`.
    pub fn sample_along(&self, axis: Axis) -> GeometrySample {
        match axis {
            Axis::Vertical => GeometrySample {
                offset: self.min_y,
                length: self.height,
            },
            Axis::Horizontal => GeometrySample {
                offset: self.min_x,
                length: self.width,
            },
        }
    }
}

/// An axis-resolved geometry sample: the signed distance of the view's leading
/// edge from the reference origin, and the view's size along the axis.
///
/// Only the most recent sample is meaningful; the engine keeps no history.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometrySample {
    pub offset: f32,
    pub length: f32,
}

/// A unit anchor point in the view's own coordinate space.
///
/// `(0, 0)` is the leading/top corner, `(1, 1)` the trailing/bottom corner.
/// The anchor stays visually stationary while the scale is applied around it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
}

impl Anchor {
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };
    /// Anchor for vertical stretches: the bottom edge stays put while the view
    /// grows upward toward the pulled top edge.
    pub const BOTTOM_CENTER: Self = Self { x: 0.5, y: 1.0 };
    /// Anchor for horizontal stretches: the trailing edge stays put.
    pub const TRAILING_CENTER: Self = Self { x: 1.0, y: 0.5 };
}

/// The computed output: a scale factor pair plus the fixed anchor to apply it
/// around. Recomputed from scratch on every sample, never cached across them.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StretchTransform {
    pub scale_x: f32,
    pub scale_y: f32,
    pub anchor: Anchor,
}

impl StretchTransform {
    /// The identity transform for an axis (scale 1, axis anchor).
    pub fn identity(axis: Axis) -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
            anchor: axis.anchor(),
        }
    }

    /// `true` when applying this transform is a visual no-op.
    pub fn is_identity(&self) -> bool {
        self.scale_x == 1.0 && self.scale_y == 1.0
    }
}

impl Default for StretchTransform {
    fn default() -> Self {
        Self::identity(Axis::Vertical)
    }
}
