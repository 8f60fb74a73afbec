use async_trait::async_trait;

use crate::canvas::node::{
    Capabilities, FontDescriptor, LayoutDirection, NodeId, NodeInfo, ShapeKind,
};
use crate::canvas::style::StylePatch;
use crate::foundation::error::PageforgeResult;

/// Contract between this crate and the design canvas hosting the scene graph.
///
/// The canvas owns every node; this crate only ever holds [`NodeId`] handles.
/// Ordering guarantees the engine relies on:
///
/// - `append_child` appends at the end of the parent's child list, and child
///   order is the visual stacking and reading order.
/// - `find_descendant` walks the subtree under `root` (excluding `root`) in
///   deterministic preorder and returns the first match.
/// - `load_font` is the only suspension point a canvas introduces; setting
///   text or fonts through `set_style` requires the effective face to have
///   been loaded first.
///
/// `set_selection`, `scroll_into_view` and `notify` may be no-ops; callers
/// consult [`Self::capabilities`] once up front instead of probing per call.
#[async_trait]
pub trait DesignCanvas {
    /// Create a detached auto-layout container.
    fn create_container(&mut self, direction: LayoutDirection) -> NodeId;

    /// Create a detached, empty text node.
    fn create_text(&mut self) -> NodeId;

    /// Create a detached shape node.
    fn create_shape(&mut self, kind: ShapeKind) -> NodeId;

    /// Append `child` as the last child of `parent`.
    fn append_child(&mut self, parent: NodeId, child: NodeId) -> PageforgeResult<()>;

    /// First node under `root` (preorder, excluding `root`) matching the
    /// predicate.
    fn find_descendant(
        &self,
        root: NodeId,
        predicate: &dyn Fn(&NodeInfo<'_>) -> bool,
    ) -> Option<NodeId>;

    /// Apply a partial style mutation atomically.
    fn set_style(&mut self, node: NodeId, patch: &StylePatch) -> PageforgeResult<()>;

    /// Font face of each contiguous styled run of a text node, in text order.
    ///
    /// Non-text nodes report no runs.
    fn text_font_runs(&self, node: NodeId) -> Vec<FontDescriptor>;

    /// Make a font face available for text mutation. Awaitable.
    async fn load_font(&mut self, font: &FontDescriptor) -> PageforgeResult<()>;

    /// Replace the user's selection. May be a no-op.
    fn set_selection(&mut self, nodes: &[NodeId]);

    /// Scroll the viewport so `nodes` are visible. May be a no-op.
    fn scroll_into_view(&mut self, nodes: &[NodeId]);

    /// Show a transient notification. May be a no-op.
    fn notify(&mut self, message: &str);

    /// Which optional surfaces this host actually provides.
    fn capabilities(&self) -> Capabilities;
}
