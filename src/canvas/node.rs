use serde::{Deserialize, Serialize};

/// Opaque node handle issued by a canvas.
///
/// Handles are only meaningful to the canvas that created them and are never
/// reused within one canvas.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct NodeId(pub u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Scene node kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Auto-layout container with ordered children.
    Container,
    /// Text leaf.
    Text,
    /// Vector shape leaf.
    Shape,
}

/// Shape subtype for [`NodeKind::Shape`] leaves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Axis-aligned rectangle.
    Rect,
    /// Ellipse.
    Ellipse,
    /// Horizontal rule.
    Line,
}

/// Main-axis direction of an auto-layout container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutDirection {
    /// Children flow left to right.
    Row,
    /// Children flow top to bottom.
    Column,
}

/// Per-axis sizing behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizingMode {
    /// Hug content.
    #[default]
    Hug,
    /// Use the node's explicit size on this axis.
    Fixed,
    /// Stretch to fill the parent on this axis.
    Fill,
}

/// Child distribution along the main axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MainAxisAlign {
    /// Pack children at the start.
    #[default]
    Start,
    /// Center children.
    Center,
    /// Pack children at the end.
    End,
    /// Distribute remaining space between children.
    SpaceBetween,
}

/// Child alignment across the main axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossAxisAlign {
    /// Align to the start edge.
    #[default]
    Start,
    /// Center on the cross axis.
    Center,
    /// Align to the end edge.
    End,
}

/// A loadable font face: family plus named style.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FontDescriptor {
    /// Family name, e.g. `Inter`.
    pub family: String,
    /// Style name, e.g. `Semi Bold`.
    pub style: String,
}

impl FontDescriptor {
    /// Construct a descriptor.
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }

    /// Stable `family/style` key for ledgers and dedup.
    pub fn key(&self) -> String {
        format!("{}/{}", self.family, self.style)
    }
}

impl std::fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.family, self.style)
    }
}

/// Read-only view of a node offered to descendant-search predicates.
#[derive(Clone, Copy, Debug)]
pub struct NodeInfo<'a> {
    /// Node name.
    pub name: &'a str,
    /// Node kind.
    pub kind: NodeKind,
    /// Visibility flag.
    pub visible: bool,
}

/// Optional host surfaces, resolved once and then trusted.
///
/// A `false` capability means the corresponding canvas call is a documented
/// no-op for that host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Host supports changing the user's selection.
    pub selection: bool,
    /// Host supports scrolling the viewport to nodes.
    pub scroll_into_view: bool,
    /// Host supports transient user notifications.
    pub notify: bool,
}

impl Capabilities {
    /// Every optional surface available.
    pub fn all() -> Self {
        Self {
            selection: true,
            scroll_into_view: true,
            notify: true,
        }
    }

    /// No optional surface available.
    pub fn none() -> Self {
        Self::default()
    }
}
