use pageforge::canvas::{FontDescriptor, FontRun, LayoutDirection};
use pageforge::scene::anchors::{
    self, hero_highlight_row, hero_highlight_text, hero_metric_label, hero_metric_row,
    hero_metric_value,
};
use pageforge::scene::copy;
use pageforge::{
    ApplyStats, BuiltScene, ContentPayload, DesignCanvas, InMemoryCanvas, SceneGraphBuilder,
    TokenResolver, apply_content,
};
use serde_json::json;

async fn build(canvas: &mut InMemoryCanvas) -> BuiltScene {
    let tokens = TokenResolver::builtin().unwrap();
    SceneGraphBuilder::new(canvas, &tokens, "dark")
        .build()
        .await
        .unwrap()
}

fn payload(value: serde_json::Value) -> ContentPayload {
    serde_json::from_value(value).unwrap()
}

fn text_at<'a>(canvas: &'a InMemoryCanvas, scene: &BuiltScene, name: &str) -> &'a str {
    let id = scene.anchors.node(name).unwrap();
    canvas.text_of(id).unwrap()
}

#[tokio::test]
async fn short_highlight_list_hides_the_leftover_row() {
    let mut canvas = InMemoryCanvas::new();
    let scene = build(&mut canvas).await;

    let stats = apply_content(
        &mut canvas,
        scene.root,
        &payload(json!({ "hero": { "highlights": ["Fast setup", "Zero config"] } })),
    )
    .await
    .unwrap();

    assert_eq!(text_at(&canvas, &scene, &hero_highlight_text(0)), "Fast setup");
    assert_eq!(text_at(&canvas, &scene, &hero_highlight_text(1)), "Zero config");
    assert!(canvas.is_visible(scene.anchors.node(&hero_highlight_row(0)).unwrap()));
    assert!(canvas.is_visible(scene.anchors.node(&hero_highlight_row(1)).unwrap()));
    assert!(!canvas.is_visible(scene.anchors.node(&hero_highlight_row(2)).unwrap()));

    assert_eq!(stats.texts_set, 2);
    assert_eq!(stats.rows_shown, 2);
    assert_eq!(stats.rows_hidden, 1);
    assert_eq!(stats.anchors_missed, 0);
}

#[tokio::test]
async fn empty_highlight_list_hides_every_row() {
    let mut canvas = InMemoryCanvas::new();
    let scene = build(&mut canvas).await;

    let stats = apply_content(
        &mut canvas,
        scene.root,
        &payload(json!({ "hero": { "highlights": [] } })),
    )
    .await
    .unwrap();

    for i in 0..3 {
        assert!(!canvas.is_visible(scene.anchors.node(&hero_highlight_row(i)).unwrap()));
        // Hidden rows keep their template copy.
        assert_eq!(
            text_at(&canvas, &scene, &hero_highlight_text(i)),
            copy::DEFAULT_HIGHLIGHTS[i]
        );
    }
    assert_eq!(stats.rows_hidden, 3);
    assert_eq!(stats.texts_set, 0);
}

#[tokio::test]
async fn absent_list_leaves_rows_alone() {
    let mut canvas = InMemoryCanvas::new();
    let scene = build(&mut canvas).await;

    let stats = apply_content(
        &mut canvas,
        scene.root,
        &payload(json!({ "hero": { "title": "Only a title" } })),
    )
    .await
    .unwrap();

    assert_eq!(text_at(&canvas, &scene, anchors::HERO_HEADING), "Only a title");
    for i in 0..3 {
        assert!(canvas.is_visible(scene.anchors.node(&hero_highlight_row(i)).unwrap()));
    }
    assert_eq!(stats.rows_shown, 0);
    assert_eq!(stats.rows_hidden, 0);
}

#[tokio::test]
async fn surplus_list_items_are_dropped() {
    let mut canvas = InMemoryCanvas::new();
    let scene = build(&mut canvas).await;

    let stats = apply_content(
        &mut canvas,
        scene.root,
        &payload(json!({ "hero": { "highlights": ["a", "b", "c", "d", "e"] } })),
    )
    .await
    .unwrap();

    assert_eq!(text_at(&canvas, &scene, &hero_highlight_text(2)), "c");
    assert_eq!(stats.rows_shown, 3);
    assert_eq!(stats.rows_hidden, 0);
    assert_eq!(stats.texts_set, 3);
}

#[tokio::test]
async fn metric_cells_update_in_place_without_hiding() {
    let mut canvas = InMemoryCanvas::new();
    let scene = build(&mut canvas).await;

    let stats = apply_content(
        &mut canvas,
        scene.root,
        &payload(json!({ "metrics": [{ "value": "72%" }] })),
    )
    .await
    .unwrap();

    assert_eq!(text_at(&canvas, &scene, &hero_metric_value(0)), "72%");
    // An omitted field inside a metric keeps the template copy, and short
    // lists never blank the strip.
    assert_eq!(
        text_at(&canvas, &scene, &hero_metric_label(0)),
        copy::DEFAULT_METRICS[0].1
    );
    for i in 0..3 {
        assert!(canvas.is_visible(scene.anchors.node(&hero_metric_row(i)).unwrap()));
    }
    assert_eq!(
        text_at(&canvas, &scene, &hero_metric_value(2)),
        copy::DEFAULT_METRICS[2].0
    );
    assert_eq!(stats.texts_set, 1);
    assert_eq!(stats.rows_hidden, 0);
}

#[tokio::test]
async fn full_payload_rewrites_every_section() {
    let mut canvas = InMemoryCanvas::new();
    let scene = build(&mut canvas).await;

    apply_content(
        &mut canvas,
        scene.root,
        &payload(json!({
            "hero": {
                "title": "Ship docs faster",
                "subtitle": "Generated in seconds.",
                "primaryCta": "Try it",
                "secondaryCta": "Watch demo",
                "assurance": "Free for 14 days",
                "highlights": ["One", "Two", "Three"]
            },
            "metrics": [
                { "value": "3x", "label": "Faster launches" },
                { "value": "98%", "label": "Satisfaction" },
                { "value": "12k", "label": "Teams onboard" }
            ],
            "testimonial": {
                "heading": "Teams agree",
                "subtitle": "Real results",
                "quote": "It changed how we ship.",
                "bullets": ["Quick", "Reliable"],
                "attribution": "Ana Silva",
                "attributionRole": "CTO, Meridian",
                "callout": "From our case study"
            },
            "cta": {
                "title": "Start today",
                "subtitle": "Nothing to install.",
                "primaryCta": "Create a page",
                "secondaryCta": "Read the docs"
            }
        })),
    )
    .await
    .unwrap();

    assert_eq!(text_at(&canvas, &scene, anchors::HERO_HEADING), "Ship docs faster");
    assert_eq!(text_at(&canvas, &scene, anchors::HERO_ASSURANCE), "Free for 14 days");
    assert_eq!(text_at(&canvas, &scene, &hero_metric_label(2)), "Teams onboard");
    assert_eq!(
        text_at(&canvas, &scene, anchors::TESTIMONIAL_ATTRIBUTION_NAME),
        "Ana Silva"
    );
    assert_eq!(
        text_at(&canvas, &scene, anchors::TESTIMONIAL_ATTRIBUTION_ROLE),
        "CTO, Meridian"
    );
    assert_eq!(text_at(&canvas, &scene, anchors::CTA_SECONDARY_LABEL), "Read the docs");
}

#[tokio::test]
async fn applying_to_a_bare_tree_skips_quietly() {
    let mut canvas = InMemoryCanvas::new();
    let root = canvas.create_container(LayoutDirection::Column);

    let stats = apply_content(
        &mut canvas,
        root,
        &payload(json!({
            "hero": { "title": "Hello", "subtitle": "World" },
            "cta": { "title": "Go" }
        })),
    )
    .await
    .unwrap();

    assert_eq!(stats, ApplyStats { anchors_missed: 3, ..ApplyStats::default() });
    assert_eq!(canvas.node_count(), 1);
}

#[tokio::test]
async fn rewriting_mixed_run_text_loads_each_face() {
    let mut canvas = InMemoryCanvas::new();
    let scene = build(&mut canvas).await;
    let heading = scene.anchors.node(anchors::HERO_HEADING).unwrap();

    // Simulate a designer restyling part of the heading by hand.
    let bold = FontDescriptor::new("Inter", "Bold");
    let medium = FontDescriptor::new("Inter", "Medium");
    canvas
        .set_text_runs(
            heading,
            "Old heading",
            vec![
                FontRun { len: 3, font: bold.clone() },
                FontRun { len: 8, font: medium.clone() },
            ],
        )
        .unwrap();
    let loads_before = canvas.font_loads().len();

    apply_content(
        &mut canvas,
        scene.root,
        &payload(json!({ "hero": { "title": "New heading" } })),
    )
    .await
    .unwrap();

    // Both faces get re-requested before the characters change.
    assert_eq!(canvas.font_loads().len(), loads_before + 2);
    assert_eq!(canvas.text_of(heading), Some("New heading"));
}

#[tokio::test]
async fn font_failure_mid_apply_leaves_earlier_writes_in_place() {
    let mut canvas = InMemoryCanvas::new();
    let scene = build(&mut canvas).await;
    canvas.fail_font(&FontDescriptor::new("Inter", "Semi Bold"));

    let err = apply_content(
        &mut canvas,
        scene.root,
        &payload(json!({
            "hero": { "title": "Partial title" },
            "testimonial": { "quote": "Never lands" }
        })),
    )
    .await
    .unwrap_err();

    assert_eq!(err.surface_message(), "font Inter/Semi Bold is not available");
    // The hero heading was rewritten before the failure; there is no rollback.
    assert_eq!(text_at(&canvas, &scene, anchors::HERO_HEADING), "Partial title");
    assert_eq!(
        text_at(&canvas, &scene, anchors::TESTIMONIAL_QUOTE),
        copy::DEFAULT_TESTIMONIAL_QUOTE
    );
}
