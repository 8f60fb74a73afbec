use pageforge::canvas::NodeKind;
use pageforge::scene::anchors::{
    self, MAX_REPEAT_ROWS, hero_highlight_row, hero_highlight_text, hero_metric_label,
    hero_metric_row, hero_metric_value, testimonial_bullet_row, testimonial_bullet_text,
};
use pageforge::{BuiltScene, DesignCanvas, InMemoryCanvas, SceneGraphBuilder, TokenResolver};

async fn build(canvas: &mut InMemoryCanvas, theme: &str) -> BuiltScene {
    let tokens = TokenResolver::builtin().unwrap();
    SceneGraphBuilder::new(canvas, &tokens, theme)
        .build()
        .await
        .unwrap()
}

const TEXT_ANCHORS: [&str; 15] = [
    anchors::HERO_HEADING,
    anchors::HERO_SUBHEADING,
    anchors::HERO_CTA_PRIMARY_LABEL,
    anchors::HERO_CTA_SECONDARY_LABEL,
    anchors::HERO_ASSURANCE,
    anchors::TESTIMONIAL_HEADING,
    anchors::TESTIMONIAL_SUBHEADING,
    anchors::TESTIMONIAL_QUOTE,
    anchors::TESTIMONIAL_ATTRIBUTION_NAME,
    anchors::TESTIMONIAL_ATTRIBUTION_ROLE,
    anchors::TESTIMONIAL_CALLOUT_TEXT,
    anchors::CTA_HEADING,
    anchors::CTA_SUBHEADING,
    anchors::CTA_PRIMARY_LABEL,
    anchors::CTA_SECONDARY_LABEL,
];

#[tokio::test]
async fn template_registers_every_content_anchor() {
    let mut canvas = InMemoryCanvas::new();
    let scene = build(&mut canvas, "dark").await;

    for name in TEXT_ANCHORS {
        let entry = scene.anchors.get(name).unwrap_or_else(|| {
            panic!("anchor {name} missing from build");
        });
        assert_eq!(entry.kind, NodeKind::Text, "{name} should be a text node");
    }
    for i in 0..MAX_REPEAT_ROWS {
        for (row, text) in [
            (hero_highlight_row(i), hero_highlight_text(i)),
            (testimonial_bullet_row(i), testimonial_bullet_text(i)),
        ] {
            assert_eq!(scene.anchors.get(&row).unwrap().kind, NodeKind::Container);
            assert_eq!(scene.anchors.get(&text).unwrap().kind, NodeKind::Text);
        }
        assert_eq!(
            scene.anchors.get(&hero_metric_row(i)).unwrap().kind,
            NodeKind::Container
        );
        assert_eq!(
            scene.anchors.get(&hero_metric_value(i)).unwrap().kind,
            NodeKind::Text
        );
        assert_eq!(
            scene.anchors.get(&hero_metric_label(i)).unwrap().kind,
            NodeKind::Text
        );
    }
}

#[tokio::test]
async fn every_anchor_is_reachable_by_name_scan() {
    let mut canvas = InMemoryCanvas::new();
    let scene = build(&mut canvas, "dark").await;

    for name in scene.anchors.names() {
        let found = canvas.find_descendant(scene.root, &|info| info.name == name);
        // The root itself is excluded from descendant scans.
        if name == "Landing Page" {
            assert_eq!(found, None);
        } else {
            assert_eq!(found, scene.anchors.node(name), "scan disagrees for {name}");
        }
    }
}

#[tokio::test]
async fn repeated_builds_are_identical_and_coexist() {
    let mut canvas = InMemoryCanvas::new();
    let first = build(&mut canvas, "dark").await;
    let second = build(&mut canvas, "dark").await;

    let first_names: Vec<&str> = first.anchors.names().collect();
    let second_names: Vec<&str> = second.anchors.names().collect();
    assert_eq!(first_names, second_names);
    assert_eq!(first.anchors.fingerprint(), second.anchors.fingerprint());

    // Both pages stay on the canvas; nothing was replaced.
    assert_ne!(first.root, second.root);
    assert_eq!(canvas.page_roots(), vec![first.root, second.root]);
}

#[tokio::test]
async fn theme_changes_colors_but_not_topology() {
    let mut dark_canvas = InMemoryCanvas::new();
    let dark = build(&mut dark_canvas, "dark").await;
    let mut light_canvas = InMemoryCanvas::new();
    let light = build(&mut light_canvas, "light").await;

    assert_eq!(dark.anchors.fingerprint(), light.anchors.fingerprint());
    assert_eq!(dark_canvas.node_count(), light_canvas.node_count());
}

#[tokio::test]
async fn sections_land_in_fixed_order() {
    let mut canvas = InMemoryCanvas::new();
    let scene = build(&mut canvas, "dark").await;

    let sections: Vec<&str> = canvas
        .children_of(scene.root)
        .iter()
        .map(|id| canvas.name_of(*id).unwrap())
        .collect();
    assert_eq!(sections, vec!["Hero", "Testimonial", "CTA"]);
}

#[tokio::test]
async fn build_preloads_each_distinct_face_once() {
    let mut canvas = InMemoryCanvas::new();
    build(&mut canvas, "dark").await;

    let mut keys: Vec<String> = canvas.font_loads().iter().map(|f| f.key()).collect();
    keys.sort();
    assert_eq!(
        keys,
        vec![
            "Inter/Bold",
            "Inter/Medium",
            "Inter/Regular",
            "Inter/Semi Bold",
        ]
    );
}

#[tokio::test]
async fn scan_is_scoped_to_the_given_subtree() {
    let mut canvas = InMemoryCanvas::new();
    let scene = build(&mut canvas, "dark").await;

    let testimonial = canvas
        .find_descendant(scene.root, &|info| info.name == "Testimonial")
        .unwrap();
    assert!(
        canvas
            .find_descendant(testimonial, &|info| info.name == anchors::CTA_HEADING)
            .is_none()
    );
    assert!(
        canvas
            .find_descendant(testimonial, &|info| info.name == anchors::TESTIMONIAL_QUOTE)
            .is_some()
    );
}
