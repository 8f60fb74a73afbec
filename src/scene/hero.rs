//! Hero section: nav bar, copy stack with highlights, visual panel and
//! metric strip.

use crate::canvas::{
    CrossAxisAlign, DesignCanvas, GradientPaint, GradientStop, LayoutDirection, MainAxisAlign,
    NodeId, Paint, ShapeKind, SizingMode, Stroke,
};
use crate::foundation::core::{Edges, Size};
use crate::foundation::error::PageforgeResult;
use crate::scene::anchors::{
    HERO_ASSURANCE, HERO_CTA_PRIMARY_LABEL, HERO_CTA_SECONDARY_LABEL, HERO_HEADING,
    HERO_SUBHEADING, MAX_REPEAT_ROWS, hero_highlight_row, hero_highlight_text, hero_metric_label,
    hero_metric_row, hero_metric_value,
};
use crate::scene::build::{ContainerSpec, PAGE_WIDTH, SectionCtx, ShapeSpec};
use crate::scene::copy;

pub(crate) fn build<C: DesignCanvas>(
    ctx: &mut SectionCtx<'_, C>,
    page: NodeId,
) -> PageforgeResult<()> {
    let section = ctx.container(
        "Hero",
        LayoutDirection::Column,
        ContainerSpec {
            padding: Edges {
                top: ctx.space(6),
                right: ctx.space(9),
                bottom: ctx.space(8),
                left: ctx.space(9),
            },
            item_spacing: ctx.space(8),
            sizing_x: Some(SizingMode::Fill),
            fills: vec![Paint::LinearGradient(GradientPaint::vertical(vec![
                GradientStop {
                    position: 0.0,
                    color: ctx.rgb("surface/400"),
                },
                GradientStop {
                    position: 1.0,
                    color: ctx.rgb("canvas"),
                },
            ]))],
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(page, section)?;

    nav_bar(ctx, section)?;
    body(ctx, section)?;
    metric_strip(ctx, section)?;
    Ok(())
}

fn nav_bar<C: DesignCanvas>(ctx: &mut SectionCtx<'_, C>, section: NodeId) -> PageforgeResult<()> {
    let nav = ctx.container(
        "Hero:Nav",
        LayoutDirection::Row,
        ContainerSpec {
            sizing_x: Some(SizingMode::Fill),
            main_align: MainAxisAlign::SpaceBetween,
            cross_align: CrossAxisAlign::Center,
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(section, nav)?;

    let brand = ctx.container(
        "Hero:Nav:Brand",
        LayoutDirection::Row,
        ContainerSpec {
            item_spacing: ctx.space(3),
            cross_align: CrossAxisAlign::Center,
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(nav, brand)?;

    let mark = ctx.shape(
        "Hero:Nav:Brand:Mark",
        ShapeKind::Rect,
        ShapeSpec {
            size: Size::new(28.0, 28.0),
            corner_radius: ctx.radius("md"),
            fills: vec![Paint::LinearGradient(GradientPaint::vertical(vec![
                GradientStop {
                    position: 0.0,
                    color: ctx.rgb("primary/400"),
                },
                GradientStop {
                    position: 1.0,
                    color: ctx.rgb("accent/400"),
                },
            ]))],
            ..ShapeSpec::default()
        },
    )?;
    ctx.append(brand, mark)?;
    let name = ctx.text("Hero:Nav:Brand:Name", "label", "neutral/0", copy::DEFAULT_BRAND_NAME)?;
    ctx.append(brand, name)?;

    let links = ctx.container(
        "Hero:Nav:Links",
        LayoutDirection::Row,
        ContainerSpec {
            item_spacing: ctx.space(6),
            cross_align: CrossAxisAlign::Center,
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(nav, links)?;
    for (i, label) in copy::DEFAULT_NAV_LINKS.iter().enumerate() {
        let link = ctx.text(&format!("Hero:Nav:Link:{i}"), "label", "neutral/300", label)?;
        ctx.append(links, link)?;
    }

    let nav_cta = ctx.container(
        "Hero:Nav:CTA",
        LayoutDirection::Row,
        ContainerSpec {
            padding: Edges::symmetric(ctx.space(2), ctx.space(4)),
            cross_align: CrossAxisAlign::Center,
            corner_radius: ctx.radius("pill"),
            stroke: Some(Stroke {
                color: ctx.rgb("neutral/700"),
                weight: 1.0,
            }),
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(links, nav_cta)?;
    let nav_cta_label = ctx.text("Hero:Nav:CTA:Label", "label", "neutral/0", copy::DEFAULT_NAV_CTA)?;
    ctx.append(nav_cta, nav_cta_label)?;
    Ok(())
}

fn body<C: DesignCanvas>(ctx: &mut SectionCtx<'_, C>, section: NodeId) -> PageforgeResult<()> {
    let row = ctx.container(
        "Hero:Body",
        LayoutDirection::Row,
        ContainerSpec {
            sizing_x: Some(SizingMode::Fill),
            item_spacing: ctx.space(9),
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(section, row)?;

    copy_stack(ctx, row)?;
    visual_panel(ctx, row)?;
    Ok(())
}

fn copy_stack<C: DesignCanvas>(ctx: &mut SectionCtx<'_, C>, row: NodeId) -> PageforgeResult<()> {
    let stack = ctx.container(
        "Hero:Copy",
        LayoutDirection::Column,
        ContainerSpec {
            sizing_x: Some(SizingMode::Fill),
            item_spacing: ctx.space(5),
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(row, stack)?;

    let badge = ctx.container(
        "Hero:Badge",
        LayoutDirection::Row,
        ContainerSpec {
            padding: Edges::symmetric(ctx.space(2), ctx.space(4)),
            item_spacing: ctx.space(2),
            cross_align: CrossAxisAlign::Center,
            corner_radius: ctx.radius("pill"),
            fills: Paint::solid(ctx.rgba("primary/400", 0.12)),
            stroke: Some(Stroke {
                color: ctx.rgba("primary/400", 0.4),
                weight: 1.0,
            }),
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(stack, badge)?;
    let badge_dot = ctx.shape(
        "Hero:Badge:Dot",
        ShapeKind::Ellipse,
        ShapeSpec {
            size: Size::new(8.0, 8.0),
            fills: Paint::solid(ctx.rgb("success")),
            ..ShapeSpec::default()
        },
    )?;
    ctx.append(badge, badge_dot)?;
    let badge_text = ctx.text("Hero:Badge:Text", "caption", "primary/300", copy::DEFAULT_HERO_BADGE)?;
    ctx.append(badge, badge_text)?;

    let heading = ctx.text(HERO_HEADING, "display", "neutral/0", copy::DEFAULT_HERO_HEADING)?;
    ctx.append(stack, heading)?;
    let subheading = ctx.text(
        HERO_SUBHEADING,
        "body-lg",
        "neutral/300",
        copy::DEFAULT_HERO_SUBHEADING,
    )?;
    ctx.append(stack, subheading)?;

    cta_pair(ctx, stack)?;

    let assurance = ctx.text(
        HERO_ASSURANCE,
        "caption",
        "neutral/400",
        copy::DEFAULT_HERO_ASSURANCE,
    )?;
    ctx.append(stack, assurance)?;

    let highlights = ctx.container(
        "Hero:Highlights",
        LayoutDirection::Column,
        ContainerSpec {
            item_spacing: ctx.space(3),
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(stack, highlights)?;
    for i in 0..MAX_REPEAT_ROWS {
        let row = ctx.container(
            &hero_highlight_row(i),
            LayoutDirection::Row,
            ContainerSpec {
                item_spacing: ctx.space(3),
                cross_align: CrossAxisAlign::Center,
                ..ContainerSpec::default()
            },
        )?;
        ctx.append(highlights, row)?;
        let dot = ctx.shape(
            &format!("Hero:Highlight:{i}:Dot"),
            ShapeKind::Ellipse,
            ShapeSpec {
                size: Size::new(6.0, 6.0),
                fills: Paint::solid(ctx.rgb("accent/400")),
                ..ShapeSpec::default()
            },
        )?;
        ctx.append(row, dot)?;
        let text = ctx.text(
            &hero_highlight_text(i),
            "body",
            "neutral/200",
            copy::DEFAULT_HIGHLIGHTS[i],
        )?;
        ctx.append(row, text)?;
    }
    Ok(())
}

fn cta_pair<C: DesignCanvas>(ctx: &mut SectionCtx<'_, C>, stack: NodeId) -> PageforgeResult<()> {
    let pair = ctx.container(
        "HeroCTA",
        LayoutDirection::Row,
        ContainerSpec {
            item_spacing: ctx.space(4),
            cross_align: CrossAxisAlign::Center,
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(stack, pair)?;

    let primary = ctx.container(
        "HeroCTA:Primary",
        LayoutDirection::Row,
        ContainerSpec {
            padding: Edges::symmetric(ctx.space(3), ctx.space(5)),
            cross_align: CrossAxisAlign::Center,
            corner_radius: ctx.radius("md"),
            fills: Paint::solid(ctx.rgb("primary/500")),
            effects: ctx.shadow("raised"),
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(pair, primary)?;
    let primary_label = ctx.text(
        HERO_CTA_PRIMARY_LABEL,
        "label",
        "neutral/0",
        copy::DEFAULT_HERO_PRIMARY_CTA,
    )?;
    ctx.append(primary, primary_label)?;

    let secondary = ctx.container(
        "HeroCTA:Secondary",
        LayoutDirection::Row,
        ContainerSpec {
            padding: Edges::symmetric(ctx.space(3), ctx.space(5)),
            cross_align: CrossAxisAlign::Center,
            corner_radius: ctx.radius("md"),
            stroke: Some(Stroke {
                color: ctx.rgb("neutral/700"),
                weight: 1.0,
            }),
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(pair, secondary)?;
    let secondary_label = ctx.text(
        HERO_CTA_SECONDARY_LABEL,
        "label",
        "neutral/0",
        copy::DEFAULT_HERO_SECONDARY_CTA,
    )?;
    ctx.append(secondary, secondary_label)?;
    Ok(())
}

fn visual_panel<C: DesignCanvas>(ctx: &mut SectionCtx<'_, C>, row: NodeId) -> PageforgeResult<()> {
    let panel = ctx.container(
        "Hero:Visual",
        LayoutDirection::Column,
        ContainerSpec {
            size: Some(Size::new(520.0, 560.0)),
            padding: Edges::uniform(ctx.space(5)),
            item_spacing: ctx.space(5),
            main_align: MainAxisAlign::End,
            corner_radius: ctx.radius("lg"),
            fills: vec![Paint::LinearGradient(GradientPaint::vertical(vec![
                GradientStop {
                    position: 0.0,
                    color: ctx.rgb("primary/600"),
                },
                GradientStop {
                    position: 1.0,
                    color: ctx.rgb("accent/500"),
                },
            ]))],
            effects: ctx.shadow("overlay"),
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(row, panel)?;

    let glow = ctx.shape(
        "Hero:Visual:Glow",
        ShapeKind::Ellipse,
        ShapeSpec {
            size: Size::new(240.0, 240.0),
            fills: Paint::solid(ctx.rgba("accent/300", 0.35)),
            opacity: 0.8,
            ..ShapeSpec::default()
        },
    )?;
    ctx.append(panel, glow)?;

    let card = ctx.container(
        "Hero:Visual:Card",
        LayoutDirection::Column,
        ContainerSpec {
            sizing_x: Some(SizingMode::Fill),
            padding: Edges::uniform(ctx.space(4)),
            item_spacing: ctx.space(3),
            corner_radius: ctx.radius("md"),
            fills: Paint::solid(ctx.rgba("surface/600", 0.72)),
            effects: ctx.shadow("soft"),
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(panel, card)?;
    let card_title = ctx.text("Hero:Visual:Card:Title", "label", "neutral/0", "Weekly signups")?;
    ctx.append(card, card_title)?;
    for (i, (width, token)) in [
        (320.0, "primary/400"),
        (240.0, "accent/400"),
        (168.0, "success"),
    ]
    .into_iter()
    .enumerate()
    {
        let bar = ctx.shape(
            &format!("Hero:Visual:Card:Bar:{i}"),
            ShapeKind::Rect,
            ShapeSpec {
                size: Size::new(width, 8.0),
                corner_radius: ctx.radius("pill"),
                fills: Paint::solid(ctx.rgb(token)),
                ..ShapeSpec::default()
            },
        )?;
        ctx.append(card, bar)?;
    }
    Ok(())
}

fn metric_strip<C: DesignCanvas>(ctx: &mut SectionCtx<'_, C>, section: NodeId) -> PageforgeResult<()> {
    let strip = ctx.container(
        "HeroMetrics",
        LayoutDirection::Column,
        ContainerSpec {
            sizing_x: Some(SizingMode::Fill),
            item_spacing: ctx.space(5),
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(section, strip)?;

    let inner_width = PAGE_WIDTH - 2.0 * ctx.space(9);
    let divider = ctx.shape(
        "HeroMetrics:Divider",
        ShapeKind::Line,
        ShapeSpec {
            size: Size::new(inner_width, 1.0),
            stroke: Some(Stroke {
                color: ctx.rgb("neutral/700"),
                weight: 1.0,
            }),
            ..ShapeSpec::default()
        },
    )?;
    ctx.append(strip, divider)?;

    let row = ctx.container(
        "HeroMetrics:Row",
        LayoutDirection::Row,
        ContainerSpec {
            sizing_x: Some(SizingMode::Fill),
            main_align: MainAxisAlign::SpaceBetween,
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(strip, row)?;
    for (i, (value, label)) in copy::DEFAULT_METRICS.iter().enumerate() {
        let cell = ctx.container(
            &hero_metric_row(i),
            LayoutDirection::Column,
            ContainerSpec {
                item_spacing: ctx.space(1),
                ..ContainerSpec::default()
            },
        )?;
        ctx.append(row, cell)?;
        let value_text = ctx.text(&hero_metric_value(i), "headline", "neutral/0", value)?;
        ctx.append(cell, value_text)?;
        let label_text = ctx.text(&hero_metric_label(i), "caption", "neutral/400", label)?;
        ctx.append(cell, label_text)?;
    }
    Ok(())
}
