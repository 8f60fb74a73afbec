//! Closing call-to-action band.

use crate::canvas::{
    CrossAxisAlign, DesignCanvas, GradientPaint, GradientStop, LayoutDirection, MainAxisAlign,
    NodeId, Paint, SizingMode, Stroke,
};
use crate::foundation::core::Edges;
use crate::foundation::error::PageforgeResult;
use crate::scene::anchors::{CTA_HEADING, CTA_PRIMARY_LABEL, CTA_SECONDARY_LABEL, CTA_SUBHEADING};
use crate::scene::build::{ContainerSpec, SectionCtx};
use crate::scene::copy;

pub(crate) fn build<C: DesignCanvas>(
    ctx: &mut SectionCtx<'_, C>,
    page: NodeId,
) -> PageforgeResult<()> {
    let section = ctx.container(
        "CTA",
        LayoutDirection::Column,
        ContainerSpec {
            padding: Edges::symmetric(ctx.space(9), ctx.space(9)),
            sizing_x: Some(SizingMode::Fill),
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(page, section)?;

    let band = ctx.container(
        "CTA:Band",
        LayoutDirection::Column,
        ContainerSpec {
            sizing_x: Some(SizingMode::Fill),
            padding: Edges::symmetric(ctx.space(8), ctx.space(8)),
            item_spacing: ctx.space(5),
            cross_align: CrossAxisAlign::Center,
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
    ctx.append(section, band)?;

    let heading = ctx.text(CTA_HEADING, "headline", "neutral/0", copy::DEFAULT_CTA_HEADING)?;
    ctx.append(band, heading)?;
    let subheading = ctx.text(
        CTA_SUBHEADING,
        "body-lg",
        "neutral/100",
        copy::DEFAULT_CTA_SUBHEADING,
    )?;
    ctx.append(band, subheading)?;

    let actions = ctx.container(
        "CTA:Actions",
        LayoutDirection::Row,
        ContainerSpec {
            item_spacing: ctx.space(4),
            cross_align: CrossAxisAlign::Center,
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(band, actions)?;

    let primary = ctx.container(
        "CTA:Primary",
        LayoutDirection::Row,
        ContainerSpec {
            padding: Edges::symmetric(ctx.space(3), ctx.space(5)),
            cross_align: CrossAxisAlign::Center,
            main_align: MainAxisAlign::Center,
            corner_radius: ctx.radius("md"),
            fills: Paint::solid(ctx.rgb("neutral/0")),
            effects: ctx.shadow("soft"),
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(actions, primary)?;
    let primary_label = ctx.text(CTA_PRIMARY_LABEL, "label", "neutral/900", copy::DEFAULT_CTA_PRIMARY)?;
    ctx.append(primary, primary_label)?;

    let secondary = ctx.container(
        "CTA:Secondary",
        LayoutDirection::Row,
        ContainerSpec {
            padding: Edges::symmetric(ctx.space(3), ctx.space(5)),
            cross_align: CrossAxisAlign::Center,
            main_align: MainAxisAlign::Center,
            corner_radius: ctx.radius("md"),
            stroke: Some(Stroke {
                color: ctx.rgba("neutral/0", 0.45),
                weight: 1.0,
            }),
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(actions, secondary)?;
    let secondary_label = ctx.text(CTA_SECONDARY_LABEL, "label", "neutral/0", copy::DEFAULT_CTA_SECONDARY)?;
    ctx.append(secondary, secondary_label)?;
    Ok(())
}
