//! Adapter utilities for the `stretcher` crate.
//!
//! The `stretcher` crate is UI-agnostic and focuses on the core math and
//! state. This crate provides small, framework-neutral helpers commonly
//! needed by adapters:
//!
//! - The attachment contract: wrap a view's geometry feed and get back the
//!   transform to apply each frame
//! - Geometry-source strategies for hosts with and without native
//!   container-relative geometry (direct vs bubbled acquisition)
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod attachment;
mod source;


pub use attachment::StretchAttachment;
pub use source::{BubbledSource, DirectSource, GeometrySource, HostCapability};
