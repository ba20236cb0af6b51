// Example: global-space geometry with the engine's own baseline latch.
use stretcher::{FrameRect, ReferenceFrame, StretchComputer, StretchOptions};

fn main() {
    let mut c = StretchComputer::new(
        StretchOptions::vertical().with_reference(ReferenceFrame::Global),
    );

    // Frames arrive in window coordinates; the first one fixes the baseline.
    for min_y in [100.0, 105.0, 98.0, 110.0] {
        let t = c.apply_frame(FrameRect::new(0.0, min_y, 320.0, 150.0));
        println!(
            "min_y={min_y}: baseline={:?}, scale_y={}",
            c.baseline(),
            t.scale_y
        );
    }

    // Remount: reset drops the latch, the next frame re-establishes it.
    c.reset();
    c.apply_frame(FrameRect::new(0.0, 400.0, 320.0, 150.0));
    println!("after reset: baseline={:?}", c.baseline());
}
