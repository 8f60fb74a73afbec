use serde::{Deserialize, Serialize};

use crate::canvas::node::{CrossAxisAlign, FontDescriptor, MainAxisAlign, SizingMode};
use crate::color::Rgba;
use crate::foundation::core::{Affine, Edges, Point, Size, Vec2};

/// One stop of a gradient ramp.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the gradient axis in `[0, 1]`.
    pub position: f64,
    /// Stop color.
    pub color: Rgba,
}

/// Linear gradient: ordered stops plus a 2×3 transform mapping the unit
/// gradient axis into the node's local space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientPaint {
    /// Ordered color stops.
    pub stops: Vec<GradientStop>,
    /// Placement transform.
    pub transform: Affine,
}

impl GradientPaint {
    /// Top-to-bottom gradient over the node's bounds.
    pub fn vertical(stops: Vec<GradientStop>) -> Self {
        Self {
            stops,
            transform: Affine::new([0.0, -1.0, 1.0, 0.0, 0.0, 1.0]),
        }
    }
}

/// Fill paint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Paint {
    /// Solid color.
    Solid(Rgba),
    /// Linear gradient.
    LinearGradient(GradientPaint),
}

impl Paint {
    /// Single solid fill, ready for a patch.
    pub fn solid(color: Rgba) -> Vec<Paint> {
        vec![Paint::Solid(color)]
    }
}

/// Stroke style.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Stroke color.
    pub color: Rgba,
    /// Stroke weight in pixels.
    pub weight: f64,
}

/// Node effect.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// Drop shadow behind the node.
    DropShadow(DropShadow),
}

/// Drop-shadow parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DropShadow {
    /// Shadow color (straight alpha).
    pub color: Rgba,
    /// Offset in pixels.
    pub offset: Vec2,
    /// Blur radius in pixels.
    pub blur: f64,
    /// Spread in pixels.
    pub spread: f64,
}

/// Auto-layout fields of a [`StylePatch`]; only meaningful on containers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutPatch {
    /// Per-side padding.
    pub padding: Option<Edges>,
    /// Space between children in pixels.
    pub item_spacing: Option<f64>,
    /// Main-axis distribution.
    pub main_align: Option<MainAxisAlign>,
    /// Cross-axis alignment.
    pub cross_align: Option<CrossAxisAlign>,
    /// Horizontal sizing behavior.
    pub sizing_x: Option<SizingMode>,
    /// Vertical sizing behavior.
    pub sizing_y: Option<SizingMode>,
}

/// Text fields of a [`StylePatch`]; only meaningful on text nodes.
///
/// Setting `characters` or `font` requires the effective font face to be
/// loaded first; hosts reject the mutation otherwise.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextPatch {
    /// Replace the full text body.
    pub characters: Option<String>,
    /// Font face for the whole body.
    pub font: Option<FontDescriptor>,
    /// Font size in pixels.
    pub size_px: Option<f64>,
    /// Line height as a multiple of font size.
    pub line_height: Option<f64>,
}

/// Partial style mutation applied atomically by [`set_style`].
///
/// `None` fields are left untouched. One patch is one observable mutation
/// from the caller's perspective.
///
/// [`set_style`]: crate::canvas::DesignCanvas::set_style
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StylePatch {
    /// Rename the node.
    pub name: Option<String>,
    /// Show or hide the node.
    pub visible: Option<bool>,
    /// Node opacity in `[0, 1]`.
    pub opacity: Option<f64>,
    /// Replace fills.
    pub fills: Option<Vec<Paint>>,
    /// Replace the stroke.
    pub stroke: Option<Stroke>,
    /// Corner radius in pixels.
    pub corner_radius: Option<f64>,
    /// Replace effects.
    pub effects: Option<Vec<Effect>>,
    /// Auto-layout changes.
    pub layout: Option<LayoutPatch>,
    /// Absolute position of the node's top-left corner.
    pub position: Option<Point>,
    /// Explicit size; also switches both axes to fixed sizing.
    pub size: Option<Size>,
    /// Text changes.
    pub text: Option<TextPatch>,
}

impl StylePatch {
    /// Patch that only renames.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Patch that only toggles visibility.
    pub fn visibility(visible: bool) -> Self {
        Self {
            visible: Some(visible),
            ..Self::default()
        }
    }

    /// Patch that only replaces the text body.
    pub fn characters(text: impl Into<String>) -> Self {
        Self {
            text: Some(TextPatch {
                characters: Some(text.into()),
                ..TextPatch::default()
            }),
            ..Self::default()
        }
    }
}
