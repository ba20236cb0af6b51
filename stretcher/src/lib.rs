//! A headless overscroll stretch engine.
//!
//! For adapter-level utilities (attachment, geometry sources), see the
//! `stretcher-adapter` crate.
//!
//! This crate computes the scale transform behind the classic "stretchy
//! header" effect: while the user pulls past the start of a scrollable
//! container, the leading view grows by exactly the pulled distance, anchored
//! at its far edge. At rest (or scrolled into the content) the transform is
//! the identity.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - per-frame geometry for the tracked view (a [`FrameRect`])
//! - either container-relative frames, or global-space frames that the engine
//!   baselines itself (see [`ReferenceFrame`])
//!
//! The engine applies the resulting [`StretchTransform`] to nothing; your
//! adapter hands `scale_x`/`scale_y` and the [`Anchor`] to the host's render
//! layer.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod computer;
mod options;
mod slot;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use computer::{LENGTH_EPSILON, StretchComputer, stretch_scale};
pub use options::{OnChangeCallback, ReferenceFrame, StretchOptions};
pub use slot::FrameSlot;
pub use state::{BaselineState, StretchState, TransformState};
pub use types::{Anchor, Axis, FrameRect, GeometrySample, StretchTransform};
