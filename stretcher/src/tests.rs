use crate::*;

use alloc::sync::Arc;
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_f32(&mut self, start: f32, end: f32) -> f32 {
        let unit = (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32;
        start + unit * (end - start)
    }
}

fn vertical_computer(reference: ReferenceFrame, uniform: bool) -> StretchComputer {
    StretchComputer::new(
        StretchOptions::vertical()
            .with_uniform(uniform)
            .with_reference(reference),
    )
}

#[test]
fn scale_is_linear_in_pulled_distance() {
    for length in [1.0f32, 50.0, 150.0, 1000.0] {
        for offset in [0.0f32, 1.0, 30.0, 500.0] {
            assert_eq!(stretch_scale(offset, length), (length + offset) / length);
        }
        assert_eq!(stretch_scale(0.0, length), 1.0);
    }
}

#[test]
fn zero_length_divides_by_epsilon_floor() {
    let scale = stretch_scale(30.0, 0.0);
    assert!(scale.is_finite());
    assert_eq!(scale, 30.0 / LENGTH_EPSILON);

    // At rest with no measured size the result is still finite.
    assert_eq!(stretch_scale(0.0, 0.0), 0.0);
}

#[test]
fn non_positive_offsets_clamp_to_no_stretch() {
    for offset in [0.0f32, -0.5, -2.0, -500.0] {
        assert_eq!(stretch_scale(offset, 150.0), 1.0);
    }
}

#[test]
fn scale_is_monotonic_in_offset() {
    let mut rng = Lcg::new(42);
    for _ in 0..200 {
        let length = rng.gen_f32(0.1, 2000.0);
        let mut offset = 0.0f32;
        let mut last = stretch_scale(offset, length);
        for _ in 0..50 {
            offset += rng.gen_f32(0.0, 40.0);
            let next = stretch_scale(offset, length);
            assert!(
                next >= last,
                "scale decreased: length={length}, offset={offset}"
            );
            last = next;
        }
    }
}

#[test]
fn container_relative_uses_offsets_as_is() {
    let mut c = vertical_computer(ReferenceFrame::ContainerRelative, true);
    let t = c.apply_frame(FrameRect::new(0.0, 30.0, 320.0, 150.0));
    assert_eq!(t.scale_y, 1.2);
    assert_eq!(t.scale_x, 1.2);
    assert_eq!(t.anchor, Anchor::BOTTOM_CENTER);
    assert!(c.baseline().is_none());
}

#[test]
fn global_reference_latches_first_offset_as_baseline() {
    let mut c = vertical_computer(ReferenceFrame::Global, false);
    let offsets = [100.0f32, 105.0, 98.0, 110.0];
    let expected_positive = [0.0f32, 5.0, 0.0, 10.0];

    for (&offset, &positive) in offsets.iter().zip(expected_positive.iter()) {
        let t = c.apply_frame(FrameRect::new(0.0, offset, 320.0, 150.0));
        assert_eq!(c.baseline(), Some(100.0));
        assert_eq!(t.scale_y, stretch_scale(positive, 150.0));
    }
}

#[test]
fn non_uniform_vertical_keeps_orthogonal_scale_at_one() {
    let mut c = vertical_computer(ReferenceFrame::ContainerRelative, false);
    for offset in [0.0f32, 30.0, 5000.0] {
        let t = c.apply_frame(FrameRect::new(0.0, offset, 320.0, 150.0));
        assert_eq!(t.scale_x, 1.0);
    }
}

#[test]
fn uniform_scales_both_axes_equally() {
    let mut c = StretchComputer::new(
        StretchOptions::horizontal()
            .with_uniform(true)
            .with_reference(ReferenceFrame::ContainerRelative),
    );
    for offset in [0.0f32, 12.5, 77.0] {
        let t = c.apply_frame(FrameRect::new(offset, 0.0, 200.0, 40.0));
        assert_eq!(t.scale_x, t.scale_y);
        assert_eq!(t.scale_x, stretch_scale(offset, 200.0));
    }
}

#[test]
fn horizontal_at_rest_is_exact_identity() {
    let mut c = StretchComputer::new(StretchOptions::horizontal().with_uniform(true));
    let t = c.apply_frame(FrameRect::new(0.0, 0.0, 200.0, 40.0));
    assert_eq!(t.scale_x, 1.0);
    assert_eq!(t.scale_y, 1.0);
    assert!(t.is_identity());
    assert_eq!(t.anchor, Anchor::TRAILING_CENTER);
}

#[test]
fn anchor_is_static_per_axis() {
    assert_eq!(Axis::Vertical.anchor(), Anchor::BOTTOM_CENTER);
    assert_eq!(Axis::Horizontal.anchor(), Anchor::TRAILING_CENTER);

    // Sample data never moves the anchor.
    let mut c = vertical_computer(ReferenceFrame::ContainerRelative, true);
    for offset in [-50.0f32, 0.0, 400.0] {
        let t = c.apply_frame(FrameRect::new(0.0, offset, 320.0, 150.0));
        assert_eq!(t.anchor, Anchor::BOTTOM_CENTER);
    }
}

#[test]
fn frame_rect_resolves_axis_pairs() {
    let rect = FrameRect::new(7.0, 11.0, 200.0, 150.0);
    assert_eq!(
        rect.sample_along(Axis::Vertical),
        GeometrySample {
            offset: 11.0,
            length: 150.0
        }
    );
    assert_eq!(
        rect.sample_along(Axis::Horizontal),
        GeometrySample {
            offset: 7.0,
            length: 200.0
        }
    );
}

#[test]
fn on_change_fires_only_when_transform_changes() {
    let fired = Arc::new(AtomicUsize::new(0));
    let mut c = StretchComputer::new(StretchOptions::vertical().with_on_change(Some({
        let fired = Arc::clone(&fired);
        move |_: &StretchComputer| {
            fired.fetch_add(1, Ordering::Relaxed);
        }
    })));

    // Identity → identity: no notification.
    c.apply_frame(FrameRect::new(0.0, 0.0, 320.0, 150.0));
    assert_eq!(fired.load(Ordering::Relaxed), 0);

    c.apply_frame(FrameRect::new(0.0, 30.0, 320.0, 150.0));
    assert_eq!(fired.load(Ordering::Relaxed), 1);

    // Same sample again: transform unchanged, no extra notification.
    c.apply_frame(FrameRect::new(0.0, 30.0, 320.0, 150.0));
    assert_eq!(fired.load(Ordering::Relaxed), 1);
}

#[test]
fn on_change_observes_the_new_transform() {
    let seen = Arc::new(AtomicUsize::new(0));
    let mut c = StretchComputer::new(StretchOptions::vertical().with_on_change(Some({
        let seen = Arc::clone(&seen);
        move |c: &StretchComputer| {
            if c.transform().scale_y > 1.0 {
                seen.fetch_add(1, Ordering::Relaxed);
            }
        }
    })));
    c.apply_frame(FrameRect::new(0.0, 30.0, 320.0, 150.0));
    assert_eq!(seen.load(Ordering::Relaxed), 1);
}

#[test]
fn reset_drops_baseline_and_relatches() {
    let mut c = vertical_computer(ReferenceFrame::Global, false);
    c.apply_frame(FrameRect::new(0.0, 100.0, 320.0, 150.0));
    assert_eq!(c.baseline(), Some(100.0));

    c.reset();
    assert!(!c.is_baselined());
    assert!(c.transform().is_identity());

    // Remount: a fresh first sample establishes a fresh baseline.
    c.apply_frame(FrameRect::new(0.0, 250.0, 320.0, 150.0));
    assert_eq!(c.baseline(), Some(250.0));
    assert!(c.transform().is_identity());
}

#[test]
fn set_options_reference_switch_drops_baseline() {
    let mut c = vertical_computer(ReferenceFrame::Global, false);
    c.apply_frame(FrameRect::new(0.0, 100.0, 320.0, 150.0));
    assert!(c.is_baselined());

    c.update_options(|o| o.reference = ReferenceFrame::ContainerRelative);
    assert!(!c.is_baselined());

    // Unchanged reference keeps the latch.
    let mut c = vertical_computer(ReferenceFrame::Global, false);
    c.apply_frame(FrameRect::new(0.0, 100.0, 320.0, 150.0));
    c.update_options(|o| o.uniform = true);
    assert_eq!(c.baseline(), Some(100.0));
}

#[test]
fn set_options_axis_switch_resets_transform() {
    let mut c = vertical_computer(ReferenceFrame::ContainerRelative, false);
    c.apply_frame(FrameRect::new(0.0, 30.0, 320.0, 150.0));
    assert!(c.transform().scale_y > 1.0);

    c.update_options(|o| o.axis = Axis::Horizontal);
    assert_eq!(c.transform(), StretchTransform::identity(Axis::Horizontal));
}

#[test]
fn slot_is_latest_value_wins() {
    let slot = FrameSlot::new();
    assert!(slot.latest().is_none());
    assert_eq!(slot.generation(), 0);

    let writer = slot.clone();
    assert!(writer.same_slot(&slot));

    writer.publish(FrameRect::new(0.0, 100.0, 320.0, 150.0));
    writer.publish(FrameRect::new(0.0, 105.0, 320.0, 150.0));

    // No queuing: the intermediate frame is gone, the generation counted both.
    assert_eq!(slot.latest(), Some(FrameRect::new(0.0, 105.0, 320.0, 150.0)));
    assert_eq!(slot.generation(), 2);
}

#[test]
fn state_snapshot_restores_across_remount() {
    let mut c = vertical_computer(ReferenceFrame::Global, false);
    c.apply_frame(FrameRect::new(0.0, 100.0, 320.0, 150.0));
    c.apply_frame(FrameRect::new(0.0, 130.0, 320.0, 150.0));
    let snapshot = c.state();
    assert_eq!(snapshot.baseline.offset, Some(100.0));
    assert_eq!(snapshot.transform.scale_y, 1.2);

    let mut fresh = vertical_computer(ReferenceFrame::Global, false);
    fresh.restore_state(snapshot);
    assert_eq!(fresh.baseline(), Some(100.0));
    assert_eq!(fresh.transform().scale_y, 1.2);
    assert_eq!(fresh.transform().anchor, Anchor::BOTTOM_CENTER);

    // The restored latch keeps normalizing subsequent samples.
    let t = fresh.apply_frame(FrameRect::new(0.0, 160.0, 320.0, 150.0));
    assert_eq!(t.scale_y, stretch_scale(60.0, 150.0));
}
