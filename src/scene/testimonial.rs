//! Testimonial section: centered intro, proof points and an elevated quote
//! card with attribution.

use crate::canvas::{
    CrossAxisAlign, DesignCanvas, GradientPaint, GradientStop, LayoutDirection, MainAxisAlign,
    NodeId, Paint, ShapeKind, SizingMode, Stroke,
};
use crate::foundation::core::{Edges, Size};
use crate::foundation::error::PageforgeResult;
use crate::scene::anchors::{
    MAX_REPEAT_ROWS, TESTIMONIAL_ATTRIBUTION_NAME, TESTIMONIAL_ATTRIBUTION_ROLE,
    TESTIMONIAL_CALLOUT_TEXT, TESTIMONIAL_HEADING, TESTIMONIAL_QUOTE, TESTIMONIAL_SUBHEADING,
    testimonial_bullet_row, testimonial_bullet_text,
};
use crate::scene::build::{ContainerSpec, SectionCtx, ShapeSpec};
use crate::scene::copy;

const RATING_STARS: usize = 5;

pub(crate) fn build<C: DesignCanvas>(
    ctx: &mut SectionCtx<'_, C>,
    page: NodeId,
) -> PageforgeResult<()> {
    let section = ctx.container(
        "Testimonial",
        LayoutDirection::Column,
        ContainerSpec {
            padding: Edges::symmetric(ctx.space(9), ctx.space(9)),
            item_spacing: ctx.space(7),
            sizing_x: Some(SizingMode::Fill),
            fills: Paint::solid(ctx.rgb("surface/500")),
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(page, section)?;

    intro(ctx, section)?;

    let body = ctx.container(
        "Testimonial:Body",
        LayoutDirection::Row,
        ContainerSpec {
            sizing_x: Some(SizingMode::Fill),
            item_spacing: ctx.space(8),
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(section, body)?;

    proof_points(ctx, body)?;
    quote_card(ctx, body)?;
    Ok(())
}

fn intro<C: DesignCanvas>(ctx: &mut SectionCtx<'_, C>, section: NodeId) -> PageforgeResult<()> {
    let intro = ctx.container(
        "Testimonial:Intro",
        LayoutDirection::Column,
        ContainerSpec {
            sizing_x: Some(SizingMode::Fill),
            item_spacing: ctx.space(3),
            cross_align: CrossAxisAlign::Center,
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(section, intro)?;

    let heading = ctx.text(
        TESTIMONIAL_HEADING,
        "headline",
        "neutral/0",
        copy::DEFAULT_TESTIMONIAL_HEADING,
    )?;
    ctx.append(intro, heading)?;
    let subheading = ctx.text(
        TESTIMONIAL_SUBHEADING,
        "body-lg",
        "neutral/300",
        copy::DEFAULT_TESTIMONIAL_SUBHEADING,
    )?;
    ctx.append(intro, subheading)?;
    Ok(())
}

fn proof_points<C: DesignCanvas>(ctx: &mut SectionCtx<'_, C>, body: NodeId) -> PageforgeResult<()> {
    let points = ctx.container(
        "Testimonial:Points",
        LayoutDirection::Column,
        ContainerSpec {
            sizing_x: Some(SizingMode::Fill),
            item_spacing: ctx.space(4),
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(body, points)?;

    for i in 0..MAX_REPEAT_ROWS {
        let row = ctx.container(
            &testimonial_bullet_row(i),
            LayoutDirection::Row,
            ContainerSpec {
                item_spacing: ctx.space(3),
                ..ContainerSpec::default()
            },
        )?;
        ctx.append(points, row)?;
        let mark = ctx.shape(
            &format!("Testimonial:Bullet:{i}:Mark"),
            ShapeKind::Ellipse,
            ShapeSpec {
                size: Size::new(20.0, 20.0),
                fills: Paint::solid(ctx.rgba("success", 0.2)),
                stroke: Some(Stroke {
                    color: ctx.rgb("success"),
                    weight: 1.5,
                }),
                ..ShapeSpec::default()
            },
        )?;
        ctx.append(row, mark)?;
        let text = ctx.text(
            &testimonial_bullet_text(i),
            "body",
            "neutral/200",
            copy::DEFAULT_TESTIMONIAL_BULLETS[i],
        )?;
        ctx.append(row, text)?;
    }

    let callout = ctx.container(
        "Testimonial:Callout",
        LayoutDirection::Row,
        ContainerSpec {
            padding: Edges::symmetric(ctx.space(3), ctx.space(4)),
            item_spacing: ctx.space(2),
            cross_align: CrossAxisAlign::Center,
            corner_radius: ctx.radius("md"),
            fills: Paint::solid(ctx.rgba("accent/400", 0.1)),
            stroke: Some(Stroke {
                color: ctx.rgba("accent/400", 0.35),
                weight: 1.0,
            }),
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(points, callout)?;
    let callout_text = ctx.text(
        TESTIMONIAL_CALLOUT_TEXT,
        "caption",
        "accent/300",
        copy::DEFAULT_TESTIMONIAL_CALLOUT,
    )?;
    ctx.append(callout, callout_text)?;
    Ok(())
}

fn quote_card<C: DesignCanvas>(ctx: &mut SectionCtx<'_, C>, body: NodeId) -> PageforgeResult<()> {
    let card = ctx.container(
        "Testimonial:Card",
        LayoutDirection::Column,
        ContainerSpec {
            sizing_x: Some(SizingMode::Fill),
            padding: Edges::uniform(ctx.space(6)),
            item_spacing: ctx.space(5),
            corner_radius: ctx.radius("lg"),
            fills: Paint::solid(ctx.rgb("surface/400")),
            stroke: Some(Stroke {
                color: ctx.rgb("neutral/700"),
                weight: 1.0,
            }),
            effects: ctx.shadow("raised"),
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(body, card)?;

    let rating = ctx.container(
        "Testimonial:Card:Rating",
        LayoutDirection::Row,
        ContainerSpec {
            item_spacing: ctx.space(1),
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(card, rating)?;
    for i in 0..RATING_STARS {
        let star = ctx.shape(
            &format!("Testimonial:Card:Rating:Star:{i}"),
            ShapeKind::Ellipse,
            ShapeSpec {
                size: Size::new(10.0, 10.0),
                fills: Paint::solid(ctx.rgb("accent/300")),
                ..ShapeSpec::default()
            },
        )?;
        ctx.append(rating, star)?;
    }

    let quote = ctx.text(
        TESTIMONIAL_QUOTE,
        "title",
        "neutral/0",
        copy::DEFAULT_TESTIMONIAL_QUOTE,
    )?;
    ctx.append(card, quote)?;

    let attribution = ctx.container(
        "Testimonial:Attribution",
        LayoutDirection::Row,
        ContainerSpec {
            item_spacing: ctx.space(3),
            cross_align: CrossAxisAlign::Center,
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(card, attribution)?;

    let avatar = ctx.container(
        "Testimonial:Attribution:Avatar",
        LayoutDirection::Row,
        ContainerSpec {
            size: Some(Size::new(48.0, 48.0)),
            main_align: MainAxisAlign::Center,
            cross_align: CrossAxisAlign::Center,
            corner_radius: ctx.radius("pill"),
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
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(attribution, avatar)?;
    let initials = ctx.text(
        "Testimonial:Attribution:Initials",
        "label",
        "neutral/0",
        copy::DEFAULT_AVATAR_INITIALS,
    )?;
    ctx.append(avatar, initials)?;

    let meta = ctx.container(
        "Testimonial:Attribution:Meta",
        LayoutDirection::Column,
        ContainerSpec {
            item_spacing: ctx.space(1),
            ..ContainerSpec::default()
        },
    )?;
    ctx.append(attribution, meta)?;
    let name = ctx.text(
        TESTIMONIAL_ATTRIBUTION_NAME,
        "label",
        "neutral/0",
        copy::DEFAULT_ATTRIBUTION_NAME,
    )?;
    ctx.append(meta, name)?;
    let role = ctx.text(
        TESTIMONIAL_ATTRIBUTION_ROLE,
        "caption",
        "neutral/400",
        copy::DEFAULT_ATTRIBUTION_ROLE,
    )?;
    ctx.append(meta, role)?;
    Ok(())
}
