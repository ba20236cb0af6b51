// Simulates a framework adapter driving a stretch attachment through a
// pull-down gesture, on both a native host and a bubbled backport host.
use stretcher::{Axis, FrameRect, StretchTransform};
use stretcher_adapter::{HostCapability, StretchAttachment};

fn describe(label: &str, t: StretchTransform) {
    println!(
        "{label}: scale=({:.3}, {:.3}) anchor=({}, {})",
        t.scale_x, t.scale_y, t.anchor.x, t.anchor.y
    );
}

fn main() {
    // Native host: layout reports container-relative frames each pass.
    let mut native = StretchAttachment::for_capability(HostCapability::NATIVE, Axis::Vertical, true);
    for offset in [0.0, 12.0, 30.0, 55.0, 30.0, 0.0] {
        let t = native.on_frame(FrameRect::new(0.0, offset, 320.0, 150.0));
        describe("native", t);
    }

    // Backport host: the tracked view bubbles window-space frames into the
    // attachment's slot; the adapter ticks once per frame.
    let mut legacy =
        StretchAttachment::for_capability(HostCapability::BUBBLED, Axis::Vertical, true);
    let slot = legacy.frame_slot().expect("bubbled attachment has a slot");
    for min_y in [100.0, 112.0, 130.0, 155.0, 130.0, 100.0] {
        slot.publish(FrameRect::new(0.0, min_y, 320.0, 150.0));
        if let Some(t) = legacy.tick() {
            describe("legacy", t);
        } else {
            println!("legacy: transform unchanged");
        }
    }
}
