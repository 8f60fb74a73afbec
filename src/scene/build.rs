//! Scene assembly: font preload, page root and section dispatch.

use tracing::debug;

use crate::canvas::{
    CrossAxisAlign, DesignCanvas, DropShadow, Effect, FontDescriptor, LayoutDirection, LayoutPatch,
    MainAxisAlign, NodeId, NodeKind, Paint, ShapeKind, SizingMode, Stroke, StylePatch, TextPatch,
};
use crate::color::{Rgba, hex_to_rgb, hex_to_rgba, parse_rgba_str};
use crate::foundation::core::{Edges, Point, Size, Vec2};
use crate::foundation::error::PageforgeResult;
use crate::scene::anchors::AnchorIndex;
use crate::scene::{cta, hero, testimonial};
use crate::tokens::TokenResolver;
use crate::tokens::schema::TypeStyle;

/// Width of the page frame in canvas pixels.
pub const PAGE_WIDTH: f64 = 1440.0;

/// Every build lands its page root at the same canvas position; repeated
/// builds therefore coexist as duplicates rather than replacing each other.
const PAGE_ORIGIN: Point = Point::new(0.0, 0.0);

/// Typography variants the template uses; their faces are preloaded before
/// any text node is created.
const TYPE_VARIANTS_USED: [&str; 7] = [
    "display", "headline", "title", "body-lg", "body", "label", "caption",
];

/// Result of one build.
#[derive(Debug)]
pub struct BuiltScene {
    /// Root node appended to the canvas.
    pub root: NodeId,
    /// Registry of every named node the build created.
    pub anchors: AnchorIndex,
}

/// Assembles the landing page template on a host canvas.
///
/// One builder performs one build. The topology and anchor-name set depend
/// only on the token schema and the default copy, never on canvas state, so
/// two builds over the same inputs are structurally identical.
pub struct SceneGraphBuilder<'a, C: DesignCanvas> {
    canvas: &'a mut C,
    tokens: &'a TokenResolver,
    theme: String,
}

impl<'a, C: DesignCanvas> SceneGraphBuilder<'a, C> {
    /// Builder over `canvas` resolving tokens against `theme`.
    pub fn new(canvas: &'a mut C, tokens: &'a TokenResolver, theme: impl Into<String>) -> Self {
        Self {
            canvas,
            tokens,
            theme: theme.into(),
        }
    }

    /// Build the full page: Hero, then Testimonial, then CTA.
    ///
    /// Section order is load-bearing (child order is stacking and scan
    /// order) and must not be changed. The only suspension points are the
    /// upfront font loads; assembly itself is synchronous.
    #[tracing::instrument(skip_all, fields(theme = %self.theme))]
    pub async fn build(self) -> PageforgeResult<BuiltScene> {
        let Self {
            canvas,
            tokens,
            theme,
        } = self;

        let mut faces: Vec<FontDescriptor> = Vec::new();
        for variant in TYPE_VARIANTS_USED {
            let face = tokens.font_for_variant(variant);
            if !faces.contains(&face) {
                faces.push(face);
            }
        }
        for face in &faces {
            canvas.load_font(face).await?;
        }

        let mut ctx = SectionCtx {
            canvas,
            tokens,
            theme: &theme,
            anchors: AnchorIndex::new(),
        };

        let root = ctx.container(
            "Landing Page",
            LayoutDirection::Column,
            ContainerSpec {
                fills: Paint::solid(ctx.rgb("canvas")),
                size: Some(Size::new(PAGE_WIDTH, 0.0)),
                sizing_y: Some(SizingMode::Hug),
                position: Some(PAGE_ORIGIN),
                ..ContainerSpec::default()
            },
        )?;

        hero::build(&mut ctx, root)?;
        testimonial::build(&mut ctx, root)?;
        cta::build(&mut ctx, root)?;

        let anchors = ctx.anchors;
        debug!(
            anchors = anchors.len(),
            fingerprint = %anchors.fingerprint(),
            "landing page assembled"
        );
        Ok(BuiltScene { root, anchors })
    }
}

/// Spec for one auto-layout container, consumed by [`SectionCtx::container`].
#[derive(Clone, Debug)]
pub(crate) struct ContainerSpec {
    pub padding: Edges,
    pub item_spacing: f64,
    pub main_align: MainAxisAlign,
    pub cross_align: CrossAxisAlign,
    pub sizing_x: Option<SizingMode>,
    pub sizing_y: Option<SizingMode>,
    pub size: Option<Size>,
    pub position: Option<Point>,
    pub fills: Vec<Paint>,
    pub stroke: Option<Stroke>,
    pub corner_radius: f64,
    pub effects: Vec<Effect>,
    pub opacity: f64,
}

impl Default for ContainerSpec {
    fn default() -> Self {
        Self {
            padding: Edges::zero(),
            item_spacing: 0.0,
            main_align: MainAxisAlign::Start,
            cross_align: CrossAxisAlign::Start,
            sizing_x: None,
            sizing_y: None,
            size: None,
            position: None,
            fills: Vec::new(),
            stroke: None,
            corner_radius: 0.0,
            effects: Vec::new(),
            opacity: 1.0,
        }
    }
}

/// Spec for one shape leaf, consumed by [`SectionCtx::shape`].
#[derive(Clone, Debug)]
pub(crate) struct ShapeSpec {
    pub size: Size,
    pub fills: Vec<Paint>,
    pub stroke: Option<Stroke>,
    pub corner_radius: f64,
    pub opacity: f64,
}

impl Default for ShapeSpec {
    fn default() -> Self {
        Self {
            size: Size::ZERO,
            fills: Vec::new(),
            stroke: None,
            corner_radius: 0.0,
            opacity: 1.0,
        }
    }
}

/// Shared state handed to section builders.
///
/// Wraps the canvas with token-aware creation helpers and records every
/// created name into the build's [`AnchorIndex`].
pub(crate) struct SectionCtx<'a, C: DesignCanvas> {
    pub canvas: &'a mut C,
    tokens: &'a TokenResolver,
    theme: &'a str,
    pub anchors: AnchorIndex,
}

impl<'a, C: DesignCanvas> SectionCtx<'a, C> {
    /// Hex for a color token under the build's theme.
    pub fn hex(&self, token: &str) -> String {
        self.tokens.color(self.theme, token)
    }

    /// Opaque color for a token.
    pub fn rgb(&self, token: &str) -> Rgba {
        hex_to_rgb(&self.hex(token))
    }

    /// Color for a token with an explicit alpha.
    pub fn rgba(&self, token: &str, alpha: f64) -> Rgba {
        hex_to_rgba(&self.hex(token), alpha)
    }

    /// Pixel value for a spacing step.
    pub fn space(&self, step: i32) -> f64 {
        self.tokens.spacing(step)
    }

    /// Named corner radius.
    pub fn radius(&self, name: &str) -> f64 {
        self.tokens.radius(name)
    }

    /// Effects list for a shadow preset; empty when the preset is unknown.
    pub fn shadow(&self, name: &str) -> Vec<Effect> {
        match self.tokens.shadow(name) {
            Some(preset) => vec![Effect::DropShadow(DropShadow {
                color: parse_rgba_str(&preset.color),
                offset: Vec2::new(preset.offset_x, preset.offset_y),
                blur: preset.blur,
                spread: preset.spread,
            })],
            None => Vec::new(),
        }
    }

    /// Metrics for a typography variant.
    pub fn type_style(&self, variant: &str) -> TypeStyle {
        self.tokens.type_style(variant)
    }

    /// Create, style and register a named container.
    pub fn container(
        &mut self,
        name: &str,
        direction: LayoutDirection,
        spec: ContainerSpec,
    ) -> PageforgeResult<NodeId> {
        let id = self.canvas.create_container(direction);
        let patch = StylePatch {
            name: Some(name.to_owned()),
            opacity: (spec.opacity < 1.0).then_some(spec.opacity),
            fills: (!spec.fills.is_empty()).then_some(spec.fills),
            stroke: spec.stroke,
            corner_radius: (spec.corner_radius > 0.0).then_some(spec.corner_radius),
            effects: (!spec.effects.is_empty()).then_some(spec.effects),
            position: spec.position,
            size: spec.size,
            layout: Some(LayoutPatch {
                padding: Some(spec.padding),
                item_spacing: Some(spec.item_spacing),
                main_align: Some(spec.main_align),
                cross_align: Some(spec.cross_align),
                sizing_x: spec.sizing_x,
                sizing_y: spec.sizing_y,
            }),
            ..StylePatch::default()
        };
        self.canvas.set_style(id, &patch)?;
        self.anchors.insert(name, id, NodeKind::Container)?;
        Ok(id)
    }

    /// Create, style and register a named text leaf.
    pub fn text(
        &mut self,
        name: &str,
        variant: &str,
        color_token: &str,
        characters: &str,
    ) -> PageforgeResult<NodeId> {
        let style = self.type_style(variant);
        let font = self.tokens.font_for_variant(variant);
        let id = self.canvas.create_text();
        let patch = StylePatch {
            name: Some(name.to_owned()),
            fills: Some(Paint::solid(self.rgb(color_token))),
            text: Some(TextPatch {
                characters: Some(characters.to_owned()),
                font: Some(font),
                size_px: Some(style.font_size),
                line_height: Some(style.line_height),
            }),
            ..StylePatch::default()
        };
        self.canvas.set_style(id, &patch)?;
        self.anchors.insert(name, id, NodeKind::Text)?;
        Ok(id)
    }

    /// Create, style and register a named shape leaf.
    pub fn shape(&mut self, name: &str, kind: ShapeKind, spec: ShapeSpec) -> PageforgeResult<NodeId> {
        let id = self.canvas.create_shape(kind);
        let patch = StylePatch {
            name: Some(name.to_owned()),
            opacity: (spec.opacity < 1.0).then_some(spec.opacity),
            fills: (!spec.fills.is_empty()).then_some(spec.fills),
            stroke: spec.stroke,
            corner_radius: (spec.corner_radius > 0.0).then_some(spec.corner_radius),
            size: Some(spec.size),
            ..StylePatch::default()
        };
        self.canvas.set_style(id, &patch)?;
        self.anchors.insert(name, id, NodeKind::Shape)?;
        Ok(id)
    }

    /// Append `child` under `parent`.
    pub fn append(&mut self, parent: NodeId, child: NodeId) -> PageforgeResult<()> {
        self.canvas.append_child(parent, child)
    }
}
