/// A lightweight, serializable snapshot of the baseline latch.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaselineState {
    /// The latched first-sample offset, if derived-mode baselining has fired.
    pub offset: Option<f32>,
}

/// A lightweight, serializable snapshot of the computed scale pair.
///
/// The anchor is deliberately excluded: it is a pure function of the
/// configured axis and is re-derived on restore.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformState {
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

/// A combined snapshot of baseline + transform state.
///
/// This is useful for restoring a stretch effect across remounts without
/// coupling the computer to any specific UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StretchState {
    pub baseline: BaselineState,
    pub transform: TransformState,
}
