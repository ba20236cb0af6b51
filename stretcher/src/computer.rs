use crate::{
    Axis, FrameRect, GeometrySample, ReferenceFrame, StretchOptions, StretchState,
    StretchTransform,
};
use crate::{BaselineState, TransformState};

/// Denominator floor for the scale division, in the same units as `length`.
///
/// Layout can transiently report a zero (not-yet-measured) size; the floor
/// keeps the division finite without clamping `length` anywhere else.
pub const LENGTH_EPSILON: f32 = 1e-4;

/// The core offset → scale mapping, shared by both reference frames.
///
/// `offset` is the (already normalized) displacement of the view's leading
/// edge past the container's resting origin; `length` is the view's size along
/// the tracked axis. Only positive displacement (overscroll past the start of
/// content) stretches; any `offset <= 0` yields `1.0` for positive lengths.
///
/// The rendered size under the anchor grows by exactly the pulled distance:
/// `scale = (length + max(0, offset)) / max(length, EPSILON)`.
pub fn stretch_scale(offset: f32, length: f32) -> f32 {
    let positive = offset.max(0.0);
    let safe_length = length.max(LENGTH_EPSILON);
    (length + positive) / safe_length
}

/// A headless overscroll stretch computer.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it by feeding per-frame geometry
///   ([`apply_frame`](Self::apply_frame) / [`apply_sample`](Self::apply_sample)).
/// - The output is a [`StretchTransform`] your render layer applies around the
///   returned anchor, without affecting layout-reported size to siblings.
///
/// In [`ReferenceFrame::Global`] the computer owns a per-instance baseline,
/// latched from the first sample and cleared only by [`reset`](Self::reset)
/// (i.e. remount). Everything else is recomputed from scratch per sample.
///
/// For attachment/strategy plumbing, see the `stretcher-adapter` crate.
#[derive(Clone, Debug)]
pub struct StretchComputer {
    options: StretchOptions,
    baseline: Option<f32>,
    transform: StretchTransform,
}

impl StretchComputer {
    pub fn new(options: StretchOptions) -> Self {
        sdebug!(
            axis = ?options.axis,
            uniform = options.uniform,
            reference = ?options.reference,
            "StretchComputer::new"
        );
        let transform = StretchTransform::identity(options.axis);
        Self {
            options,
            baseline: None,
            transform,
        }
    }

    pub fn options(&self) -> &StretchOptions {
        &self.options
    }

    /// Replaces the options wholesale.
    ///
    /// Switching the reference frame drops the baseline (a latch from another
    /// coordinate space is meaningless); switching the axis resets the
    /// transform to that axis' identity until the next sample arrives.
    pub fn set_options(&mut self, options: StretchOptions) {
        let prev_axis = self.options.axis;
        let prev_reference = self.options.reference;
        self.options = options;
        strace!(
            axis = ?self.options.axis,
            uniform = self.options.uniform,
            reference = ?self.options.reference,
            "StretchComputer::set_options"
        );

        if self.options.reference != prev_reference {
            self.baseline = None;
        }
        if self.options.axis != prev_axis {
            self.transform = StretchTransform::identity(self.options.axis);
        }
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to
    /// [`set_options`](Self::set_options).
    pub fn update_options(&mut self, f: impl FnOnce(&mut StretchOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&StretchComputer) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| alloc::sync::Arc::new(f) as _);
    }

    pub fn axis(&self) -> Axis {
        self.options.axis
    }

    /// The latched global-space baseline, if one has been established.
    ///
    /// Always `None` in [`ReferenceFrame::ContainerRelative`].
    pub fn baseline(&self) -> Option<f32> {
        self.baseline
    }

    pub fn is_baselined(&self) -> bool {
        self.baseline.is_some()
    }

    /// The transform computed from the most recent sample (identity before the
    /// first sample arrives).
    pub fn transform(&self) -> StretchTransform {
        self.transform
    }

    /// Feeds one frame of geometry, resolving the axis pair from the rect.
    ///
    /// Returns the resulting transform. Fires `on_change` only when the
    /// transform actually changed.
    pub fn apply_frame(&mut self, rect: FrameRect) -> StretchTransform {
        self.apply_sample(rect.sample_along(self.options.axis))
    }

    /// Feeds one axis-resolved sample.
    ///
    /// Total over the numeric domain: transient `length == 0` falls back to
    /// the [`LENGTH_EPSILON`] floor; negative normalized offsets clamp to no
    /// stretch. Negative lengths are not expected from a real layout system.
    pub fn apply_sample(&mut self, sample: GeometrySample) -> StretchTransform {
        if sample.length < 0.0 {
            swarn!(length = sample.length, "apply_sample: negative length");
            debug_assert!(
                sample.length >= 0.0,
                "apply_sample: negative length ({})",
                sample.length
            );
        }

        let normalized = match self.options.reference {
            ReferenceFrame::ContainerRelative => sample.offset,
            // First sample latches the baseline; never rewritten afterwards.
            ReferenceFrame::Global => sample.offset - *self.baseline.get_or_insert(sample.offset),
        };

        let scale = stretch_scale(normalized, sample.length);
        let next = self.transform_for_scale(scale);
        strace!(
            offset = sample.offset,
            length = sample.length,
            normalized,
            scale,
            "apply_sample"
        );

        if next != self.transform {
            self.transform = next;
            self.notify();
        }
        self.transform
    }

    fn transform_for_scale(&self, scale: f32) -> StretchTransform {
        let anchor = self.options.axis.anchor();
        if self.options.uniform {
            return StretchTransform {
                scale_x: scale,
                scale_y: scale,
                anchor,
            };
        }
        match self.options.axis {
            Axis::Vertical => StretchTransform {
                scale_x: 1.0,
                scale_y: scale,
                anchor,
            },
            Axis::Horizontal => StretchTransform {
                scale_x: scale,
                scale_y: 1.0,
                anchor,
            },
        }
    }

    /// Remount semantics: drops the baseline latch and returns to identity.
    ///
    /// The next global-space sample establishes a fresh baseline.
    pub fn reset(&mut self) {
        sdebug!("StretchComputer::reset");
        self.baseline = None;
        let identity = StretchTransform::identity(self.options.axis);
        if self.transform != identity {
            self.transform = identity;
            self.notify();
        }
    }

    /// Returns a lightweight snapshot of the current state.
    pub fn state(&self) -> StretchState {
        StretchState {
            baseline: BaselineState {
                offset: self.baseline,
            },
            transform: TransformState {
                scale_x: self.transform.scale_x,
                scale_y: self.transform.scale_y,
            },
        }
    }

    /// Restores state from a previously captured snapshot.
    ///
    /// The anchor is not part of the snapshot; it is re-derived from the
    /// configured axis.
    pub fn restore_state(&mut self, state: StretchState) {
        self.baseline = state.baseline.offset;
        let next = StretchTransform {
            scale_x: state.transform.scale_x,
            scale_y: state.transform.scale_y,
            anchor: self.options.axis.anchor(),
        };
        if next != self.transform {
            self.transform = next;
            self.notify();
        }
    }

    fn notify(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }
}
