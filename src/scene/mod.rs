//! Landing page template assembly.
//!
//! [`SceneGraphBuilder`] lays down a fixed three-section page (Hero,
//! Testimonial, CTA) on any [`DesignCanvas`](crate::canvas::DesignCanvas),
//! registering every created name in an [`AnchorIndex`]. Content overlay
//! later addresses nodes purely by those names.

pub mod anchors;
pub mod build;
pub mod copy;

mod cta;
mod hero;
mod testimonial;

pub use anchors::{AnchorEntry, AnchorFingerprint, AnchorIndex, MAX_REPEAT_ROWS};
pub use build::{BuiltScene, PAGE_WIDTH, SceneGraphBuilder};
