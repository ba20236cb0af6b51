// Example: minimal usage with container-relative geometry.
use stretcher::{FrameRect, StretchComputer, StretchOptions};

fn main() {
    let mut c = StretchComputer::new(StretchOptions::vertical().with_uniform(true));

    // At rest: the header sits at the container origin.
    let t = c.apply_frame(FrameRect::new(0.0, 0.0, 320.0, 150.0));
    println!("at rest: {t:?} (identity={})", t.is_identity());

    // Pulled 30pt past the top: the header grows by exactly that distance.
    let t = c.apply_frame(FrameRect::new(0.0, 30.0, 320.0, 150.0));
    println!("pulled 30: scale_y={}, anchor={:?}", t.scale_y, t.anchor);

    // Scrolled into the content: no stretch, ever.
    let t = c.apply_frame(FrameRect::new(0.0, -500.0, 320.0, 150.0));
    println!("scrolled in: identity={}", t.is_identity());
}
