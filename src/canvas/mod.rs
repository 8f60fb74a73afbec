//! The host-canvas boundary.
//!
//! Everything this crate knows about the canvas hosting a scene graph goes
//! through [`DesignCanvas`]. [`InMemoryCanvas`] is the reference host used by
//! tests and headless tools.

/// The host contract trait.
pub mod host;
/// In-memory reference host.
pub mod memory;
/// Node handles, kinds and layout vocabulary.
pub mod node;
/// Paints, effects and style patches.
pub mod style;

pub use host::DesignCanvas;
pub use memory::{FontRun, InMemoryCanvas, LayoutSnapshot, NodeSnapshot, TextSnapshot};
pub use node::{
    Capabilities, CrossAxisAlign, FontDescriptor, LayoutDirection, MainAxisAlign, NodeId, NodeInfo,
    NodeKind, ShapeKind, SizingMode,
};
pub use style::{
    DropShadow, Effect, GradientPaint, GradientStop, LayoutPatch, Paint, Stroke, StylePatch,
    TextPatch,
};
