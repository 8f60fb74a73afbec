//! In-memory reference canvas for tests, demos and headless use.
//!
//! Nodes live in an arena addressed by [`NodeId`]. The implementation models
//! the host contracts the engine depends on: deterministic preorder search,
//! exclusive child ownership, and text mutation gated on loaded fonts. Font
//! loads can be scripted to fail for error-path tests.

use std::collections::BTreeSet;

use async_trait::async_trait;
use serde::Serialize;
use smallvec::SmallVec;

use crate::canvas::host::DesignCanvas;
use crate::canvas::node::{
    Capabilities, CrossAxisAlign, FontDescriptor, LayoutDirection, MainAxisAlign, NodeId, NodeInfo,
    NodeKind, ShapeKind, SizingMode,
};
use crate::canvas::style::{Effect, Paint, Stroke, StylePatch};
use crate::foundation::core::{Edges, Point, Size};
use crate::foundation::error::{PageforgeError, PageforgeResult};

/// One contiguous styled run of a text body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontRun {
    /// Run length in characters.
    pub len: usize,
    /// Face used by the run.
    pub font: FontDescriptor,
}

#[derive(Clone, Debug)]
struct TextBlock {
    characters: String,
    runs: SmallVec<[FontRun; 2]>,
    size_px: f64,
    line_height: f64,
}

impl Default for TextBlock {
    fn default() -> Self {
        Self {
            characters: String::new(),
            runs: SmallVec::new(),
            size_px: 16.0,
            line_height: 1.5,
        }
    }
}

#[derive(Clone, Debug, Default)]
struct LayoutSpec {
    direction: Option<LayoutDirection>,
    padding: Edges,
    item_spacing: f64,
    main_align: MainAxisAlign,
    cross_align: CrossAxisAlign,
}

#[derive(Clone, Debug)]
struct NodeRecord {
    name: String,
    kind: NodeKind,
    shape: Option<ShapeKind>,
    visible: bool,
    opacity: f64,
    position: Point,
    size: Size,
    sizing_x: SizingMode,
    sizing_y: SizingMode,
    fills: Vec<Paint>,
    stroke: Option<Stroke>,
    corner_radius: f64,
    effects: Vec<Effect>,
    layout: LayoutSpec,
    text: Option<TextBlock>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl NodeRecord {
    fn new(kind: NodeKind) -> Self {
        Self {
            name: String::new(),
            kind,
            shape: None,
            visible: true,
            opacity: 1.0,
            position: Point::ZERO,
            size: Size::ZERO,
            sizing_x: SizingMode::Hug,
            sizing_y: SizingMode::Hug,
            fills: Vec::new(),
            stroke: None,
            corner_radius: 0.0,
            effects: Vec::new(),
            layout: LayoutSpec::default(),
            text: None,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Serializable view of a subtree, for dumps and fixtures.
#[derive(Clone, Debug, Serialize)]
pub struct NodeSnapshot {
    /// Node name.
    pub name: String,
    /// Node kind.
    pub kind: NodeKind,
    /// Shape subtype for shape nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<ShapeKind>,
    /// Visibility flag.
    pub visible: bool,
    /// Opacity.
    pub opacity: f64,
    /// Top-left corner in parent space.
    pub position: Point,
    /// Explicit size; zero when both axes hug content.
    pub size: Size,
    /// Horizontal sizing behavior.
    pub sizing_x: SizingMode,
    /// Vertical sizing behavior.
    pub sizing_y: SizingMode,
    /// Fill paints.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<Paint>,
    /// Stroke, when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Stroke>,
    /// Corner radius.
    pub corner_radius: f64,
    /// Effects.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<Effect>,
    /// Auto-layout settings, for containers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutSnapshot>,
    /// Text body, for text nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextSnapshot>,
    /// Children in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

/// Auto-layout part of a [`NodeSnapshot`].
#[derive(Clone, Copy, Debug, Serialize)]
pub struct LayoutSnapshot {
    /// Main-axis direction.
    pub direction: LayoutDirection,
    /// Per-side padding.
    pub padding: Edges,
    /// Space between children in pixels.
    pub item_spacing: f64,
    /// Main-axis distribution.
    pub main_align: MainAxisAlign,
    /// Cross-axis alignment.
    pub cross_align: CrossAxisAlign,
}

/// Text part of a [`NodeSnapshot`].
#[derive(Clone, Debug, Serialize)]
pub struct TextSnapshot {
    /// Full text body.
    pub characters: String,
    /// Face of each contiguous run, in order.
    pub fonts: Vec<FontDescriptor>,
    /// Font size in pixels.
    pub size_px: f64,
    /// Line height as a multiple of font size.
    pub line_height: f64,
}

/// Arena-backed [`DesignCanvas`] implementation.
#[derive(Clone, Debug)]
pub struct InMemoryCanvas {
    nodes: Vec<NodeRecord>,
    loaded_fonts: BTreeSet<String>,
    failing_fonts: BTreeSet<String>,
    font_loads: Vec<FontDescriptor>,
    notices: Vec<String>,
    selection: Vec<NodeId>,
    scrolled: Vec<NodeId>,
    caps: Capabilities,
}

impl Default for InMemoryCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCanvas {
    /// Empty canvas with every capability available.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            loaded_fonts: BTreeSet::new(),
            failing_fonts: BTreeSet::new(),
            font_loads: Vec::new(),
            notices: Vec::new(),
            selection: Vec::new(),
            scrolled: Vec::new(),
            caps: Capabilities::all(),
        }
    }

    /// Empty canvas reporting the given capabilities.
    pub fn with_capabilities(caps: Capabilities) -> Self {
        Self {
            caps,
            ..Self::new()
        }
    }

    fn alloc(&mut self, record: NodeRecord) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(record);
        id
    }

    fn record(&self, id: NodeId) -> PageforgeResult<&NodeRecord> {
        self.nodes
            .get(id.0 as usize)
            .ok_or_else(|| PageforgeError::canvas(format!("unknown node {id}")))
    }

    fn record_mut(&mut self, id: NodeId) -> PageforgeResult<&mut NodeRecord> {
        self.nodes
            .get_mut(id.0 as usize)
            .ok_or_else(|| PageforgeError::canvas(format!("unknown node {id}")))
    }

    /// Total number of nodes ever created.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Nodes that were never appended to a parent, in creation order.
    pub fn page_roots(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.parent.is_none())
            .map(|(i, _)| NodeId(i as u32))
            .collect()
    }

    /// Name of a node.
    pub fn name_of(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id.0 as usize).map(|n| n.name.as_str())
    }

    /// Text body of a text node.
    pub fn text_of(&self, id: NodeId) -> Option<&str> {
        self.nodes
            .get(id.0 as usize)
            .and_then(|n| n.text.as_ref())
            .map(|t| t.characters.as_str())
    }

    /// Visibility flag of a node. Unknown nodes report `false`.
    pub fn is_visible(&self, id: NodeId) -> bool {
        self.nodes.get(id.0 as usize).is_some_and(|n| n.visible)
    }

    /// Children of a node, in order.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0 as usize)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Every `load_font` call observed, in order.
    pub fn font_loads(&self) -> &[FontDescriptor] {
        &self.font_loads
    }

    /// Whether a face has been loaded.
    pub fn is_font_loaded(&self, font: &FontDescriptor) -> bool {
        self.loaded_fonts.contains(&font.key())
    }

    /// Make future loads of `font` fail.
    pub fn fail_font(&mut self, font: &FontDescriptor) {
        self.failing_fonts.insert(font.key());
    }

    /// Transient notifications raised so far.
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Current selection.
    pub fn selection(&self) -> &[NodeId] {
        &self.selection
    }

    /// Nodes scrolled into view so far.
    pub fn scrolled(&self) -> &[NodeId] {
        &self.scrolled
    }

    /// Overwrite a text node's body with explicitly styled runs.
    ///
    /// Host-side affordance for simulating text a designer hand-styled after
    /// a build (mixed faces). Run lengths must cover the characters exactly.
    pub fn set_text_runs(
        &mut self,
        id: NodeId,
        characters: &str,
        runs: Vec<FontRun>,
    ) -> PageforgeResult<()> {
        let char_count = characters.chars().count();
        let run_total: usize = runs.iter().map(|r| r.len).sum();
        if run_total != char_count {
            return Err(PageforgeError::canvas(format!(
                "font runs cover {run_total} characters, text has {char_count}"
            )));
        }
        let record = self.record_mut(id)?;
        let Some(text) = record.text.as_mut() else {
            return Err(PageforgeError::canvas(format!("node {id} is not a text node")));
        };
        text.characters = characters.to_owned();
        text.runs = SmallVec::from_vec(runs);
        Ok(())
    }

    /// Serializable snapshot of the subtree under `root` (inclusive).
    pub fn snapshot(&self, root: NodeId) -> PageforgeResult<NodeSnapshot> {
        let record = self.record(root)?;
        let children = record
            .children
            .iter()
            .map(|c| self.snapshot(*c))
            .collect::<PageforgeResult<Vec<_>>>()?;
        Ok(NodeSnapshot {
            name: record.name.clone(),
            kind: record.kind,
            shape: record.shape,
            visible: record.visible,
            opacity: record.opacity,
            position: record.position,
            size: record.size,
            sizing_x: record.sizing_x,
            sizing_y: record.sizing_y,
            fills: record.fills.clone(),
            stroke: record.stroke,
            corner_radius: record.corner_radius,
            effects: record.effects.clone(),
            layout: record.layout.direction.map(|direction| LayoutSnapshot {
                direction,
                padding: record.layout.padding,
                item_spacing: record.layout.item_spacing,
                main_align: record.layout.main_align,
                cross_align: record.layout.cross_align,
            }),
            text: record.text.as_ref().map(|t| TextSnapshot {
                characters: t.characters.clone(),
                fonts: t.runs.iter().map(|r| r.font.clone()).collect(),
                size_px: t.size_px,
                line_height: t.line_height,
            }),
            children,
        })
    }

    fn is_ancestor(&self, maybe_ancestor: NodeId, of: NodeId) -> bool {
        let mut cursor = self.nodes.get(of.0 as usize).and_then(|n| n.parent);
        while let Some(id) = cursor {
            if id == maybe_ancestor {
                return true;
            }
            cursor = self.nodes.get(id.0 as usize).and_then(|n| n.parent);
        }
        false
    }

    fn apply_text_patch(
        &mut self,
        id: NodeId,
        patch: &crate::canvas::style::TextPatch,
    ) -> PageforgeResult<()> {
        // Mutating characters or face requires the effective face(s) loaded.
        if patch.characters.is_some() || patch.font.is_some() {
            let required: Vec<String> = match &patch.font {
                Some(font) => vec![font.key()],
                None => {
                    let record = self.record(id)?;
                    let Some(text) = record.text.as_ref() else {
                        return Err(PageforgeError::canvas(format!(
                            "node {id} is not a text node"
                        )));
                    };
                    text.runs.iter().map(|r| r.font.key()).collect()
                }
            };
            for key in required {
                if !self.loaded_fonts.contains(&key) {
                    return Err(PageforgeError::canvas(format!(
                        "font {key} must be loaded before text mutation"
                    )));
                }
            }
        }

        let record = self.record_mut(id)?;
        let Some(text) = record.text.as_mut() else {
            return Err(PageforgeError::canvas(format!("node {id} is not a text node")));
        };

        if let Some(font) = &patch.font {
            // A single face now spans the whole body.
            let len = patch
                .characters
                .as_deref()
                .unwrap_or(&text.characters)
                .chars()
                .count();
            text.runs = SmallVec::from_vec(vec![FontRun {
                len,
                font: font.clone(),
            }]);
        }
        if let Some(characters) = &patch.characters {
            let len = characters.chars().count();
            text.characters = characters.clone();
            let face = match text.runs.first() {
                Some(run) => Some(run.font.clone()),
                None => None,
            };
            text.runs = match face {
                Some(font) => SmallVec::from_vec(vec![FontRun { len, font }]),
                None => SmallVec::new(),
            };
        }
        if let Some(size_px) = patch.size_px {
            text.size_px = size_px;
        }
        if let Some(line_height) = patch.line_height {
            text.line_height = line_height;
        }
        Ok(())
    }
}

#[async_trait]
impl DesignCanvas for InMemoryCanvas {
    fn create_container(&mut self, direction: LayoutDirection) -> NodeId {
        let mut record = NodeRecord::new(NodeKind::Container);
        record.layout.direction = Some(direction);
        self.alloc(record)
    }

    fn create_text(&mut self) -> NodeId {
        let mut record = NodeRecord::new(NodeKind::Text);
        record.text = Some(TextBlock::default());
        self.alloc(record)
    }

    fn create_shape(&mut self, kind: ShapeKind) -> NodeId {
        let mut record = NodeRecord::new(NodeKind::Shape);
        record.shape = Some(kind);
        self.alloc(record)
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> PageforgeResult<()> {
        if parent == child {
            return Err(PageforgeError::canvas(format!(
                "cannot append node {child} to itself"
            )));
        }
        self.record(child)?;
        if self.record(parent)?.kind != NodeKind::Container {
            return Err(PageforgeError::canvas(format!(
                "node {parent} is not a container"
            )));
        }
        if self.record(child)?.parent.is_some() {
            return Err(PageforgeError::canvas(format!(
                "node {child} already has a parent"
            )));
        }
        if self.is_ancestor(child, parent) {
            return Err(PageforgeError::canvas(format!(
                "appending node {child} under {parent} would create a cycle"
            )));
        }
        self.record_mut(child)?.parent = Some(parent);
        self.record_mut(parent)?.children.push(child);
        Ok(())
    }

    fn find_descendant(
        &self,
        root: NodeId,
        predicate: &dyn Fn(&NodeInfo<'_>) -> bool,
    ) -> Option<NodeId> {
        let root = self.nodes.get(root.0 as usize)?;
        let mut stack: Vec<NodeId> = root.children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let record = self.nodes.get(id.0 as usize)?;
            let info = NodeInfo {
                name: &record.name,
                kind: record.kind,
                visible: record.visible,
            };
            if predicate(&info) {
                return Some(id);
            }
            stack.extend(record.children.iter().rev().copied());
        }
        None
    }

    fn set_style(&mut self, node: NodeId, patch: &StylePatch) -> PageforgeResult<()> {
        // Validate up front; a rejected patch must not partially apply.
        let kind = self.record(node)?.kind;
        if patch.text.is_some() && kind != NodeKind::Text {
            return Err(PageforgeError::canvas(format!(
                "text patch on non-text node {node}"
            )));
        }
        if patch.layout.is_some() && kind != NodeKind::Container {
            return Err(PageforgeError::canvas(format!(
                "layout patch on non-container node {node}"
            )));
        }

        if let Some(text_patch) = &patch.text {
            self.apply_text_patch(node, text_patch)?;
        }

        let record = self.record_mut(node)?;
        if let Some(name) = &patch.name {
            record.name = name.clone();
        }
        if let Some(visible) = patch.visible {
            record.visible = visible;
        }
        if let Some(opacity) = patch.opacity {
            record.opacity = opacity.clamp(0.0, 1.0);
        }
        if let Some(fills) = &patch.fills {
            record.fills = fills.clone();
        }
        if let Some(stroke) = patch.stroke {
            record.stroke = Some(stroke);
        }
        if let Some(corner_radius) = patch.corner_radius {
            record.corner_radius = corner_radius;
        }
        if let Some(effects) = &patch.effects {
            record.effects = effects.clone();
        }
        if let Some(position) = patch.position {
            record.position = position;
        }
        if let Some(size) = patch.size {
            record.size = size;
            record.sizing_x = SizingMode::Fixed;
            record.sizing_y = SizingMode::Fixed;
        }

        // Last so explicit sizing modes win over the fixed sizing implied by
        // a `size` in the same patch.
        if let Some(layout) = &patch.layout {
            let record = self.record_mut(node)?;
            if let Some(padding) = layout.padding {
                record.layout.padding = padding;
            }
            if let Some(item_spacing) = layout.item_spacing {
                record.layout.item_spacing = item_spacing;
            }
            if let Some(main_align) = layout.main_align {
                record.layout.main_align = main_align;
            }
            if let Some(cross_align) = layout.cross_align {
                record.layout.cross_align = cross_align;
            }
            if let Some(sizing_x) = layout.sizing_x {
                record.sizing_x = sizing_x;
            }
            if let Some(sizing_y) = layout.sizing_y {
                record.sizing_y = sizing_y;
            }
        }
        Ok(())
    }

    fn text_font_runs(&self, node: NodeId) -> Vec<FontDescriptor> {
        self.nodes
            .get(node.0 as usize)
            .and_then(|n| n.text.as_ref())
            .map(|t| t.runs.iter().map(|r| r.font.clone()).collect())
            .unwrap_or_default()
    }

    async fn load_font(&mut self, font: &FontDescriptor) -> PageforgeResult<()> {
        if self.failing_fonts.contains(&font.key()) {
            return Err(PageforgeError::canvas(format!(
                "font {} is not available",
                font.key()
            )));
        }
        self.font_loads.push(font.clone());
        self.loaded_fonts.insert(font.key());
        Ok(())
    }

    fn set_selection(&mut self, nodes: &[NodeId]) {
        if self.caps.selection {
            self.selection = nodes.to_vec();
        }
    }

    fn scroll_into_view(&mut self, nodes: &[NodeId]) {
        if self.caps.scroll_into_view {
            self.scrolled.extend_from_slice(nodes);
        }
    }

    fn notify(&mut self, message: &str) {
        if self.caps.notify {
            self.notices.push(message.to_owned());
        }
    }

    fn capabilities(&self) -> Capabilities {
        self.caps
    }
}
