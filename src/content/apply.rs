//! Content overlay: walk a generated payload and rewrite the matching page
//! nodes by anchor name.

use tracing::debug;

use crate::canvas::{DesignCanvas, NodeId, NodeKind, StylePatch};
use crate::content::payload::{ContentPayload, MetricContent};
use crate::foundation::error::PageforgeResult;
use crate::scene::anchors::{
    CTA_HEADING, CTA_PRIMARY_LABEL, CTA_SECONDARY_LABEL, CTA_SUBHEADING, HERO_ASSURANCE,
    HERO_CTA_PRIMARY_LABEL, HERO_CTA_SECONDARY_LABEL, HERO_HEADING, HERO_SUBHEADING,
    MAX_REPEAT_ROWS, TESTIMONIAL_ATTRIBUTION_NAME, TESTIMONIAL_ATTRIBUTION_ROLE,
    TESTIMONIAL_CALLOUT_TEXT, TESTIMONIAL_HEADING, TESTIMONIAL_QUOTE, TESTIMONIAL_SUBHEADING,
    hero_highlight_row, hero_highlight_text, hero_metric_label, hero_metric_value,
    testimonial_bullet_row, testimonial_bullet_text,
};

/// Tally of what one overlay pass touched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplyStats {
    /// Text nodes whose characters were replaced.
    pub texts_set: usize,
    /// Repeatable rows switched visible.
    pub rows_shown: usize,
    /// Repeatable rows switched hidden.
    pub rows_hidden: usize,
    /// Defined targets whose anchor was absent from the tree.
    pub anchors_missed: usize,
}

/// Overlay `payload` onto the subtree under `root`.
///
/// Only fields the payload defines are touched. Targets are located by an
/// exact-name scan of the whole subtree, filtered to the expected node kind;
/// a missing anchor skips that field and the pass continues. Errors from the
/// canvas itself (font loads, style writes) abort the pass.
#[tracing::instrument(skip_all)]
pub async fn apply_content<C: DesignCanvas>(
    canvas: &mut C,
    root: NodeId,
    payload: &ContentPayload,
) -> PageforgeResult<ApplyStats> {
    let mut pass = Overlay {
        canvas,
        root,
        stats: ApplyStats::default(),
    };

    if let Some(hero) = &payload.hero {
        pass.set_opt(HERO_HEADING, &hero.title).await?;
        pass.set_opt(HERO_SUBHEADING, &hero.subtitle).await?;
        pass.set_opt(HERO_CTA_PRIMARY_LABEL, &hero.primary_cta).await?;
        pass.set_opt(HERO_CTA_SECONDARY_LABEL, &hero.secondary_cta)
            .await?;
        pass.set_opt(HERO_ASSURANCE, &hero.assurance).await?;
        pass.apply_rows(&hero.highlights, hero_highlight_row, hero_highlight_text)
            .await?;
    }

    pass.apply_metrics(&payload.metrics).await?;

    if let Some(testimonial) = &payload.testimonial {
        pass.set_opt(TESTIMONIAL_HEADING, &testimonial.heading).await?;
        pass.set_opt(TESTIMONIAL_SUBHEADING, &testimonial.subtitle)
            .await?;
        pass.set_opt(TESTIMONIAL_QUOTE, &testimonial.quote).await?;
        pass.apply_rows(
            &testimonial.bullets,
            testimonial_bullet_row,
            testimonial_bullet_text,
        )
        .await?;
        pass.set_opt(TESTIMONIAL_ATTRIBUTION_NAME, &testimonial.attribution)
            .await?;
        pass.set_opt(TESTIMONIAL_ATTRIBUTION_ROLE, &testimonial.attribution_role)
            .await?;
        pass.set_opt(TESTIMONIAL_CALLOUT_TEXT, &testimonial.callout)
            .await?;
    }

    if let Some(cta) = &payload.cta {
        pass.set_opt(CTA_HEADING, &cta.title).await?;
        pass.set_opt(CTA_SUBHEADING, &cta.subtitle).await?;
        pass.set_opt(CTA_PRIMARY_LABEL, &cta.primary_cta).await?;
        pass.set_opt(CTA_SECONDARY_LABEL, &cta.secondary_cta).await?;
    }

    Ok(pass.stats)
}

struct Overlay<'a, C: DesignCanvas> {
    canvas: &'a mut C,
    root: NodeId,
    stats: ApplyStats,
}

impl<'a, C: DesignCanvas> Overlay<'a, C> {
    fn find(&mut self, name: &str, kind: NodeKind) -> Option<NodeId> {
        let found = self
            .canvas
            .find_descendant(self.root, &|info| info.name == name && info.kind == kind);
        if found.is_none() {
            debug!(anchor = name, "content target not found, skipping");
            self.stats.anchors_missed += 1;
        }
        found
    }

    /// Replace a text node's characters, loading every face it currently
    /// renders with first.
    async fn write_text(&mut self, node: NodeId, value: &str) -> PageforgeResult<()> {
        let faces = self.canvas.text_font_runs(node);
        let mut loaded: Vec<String> = Vec::with_capacity(faces.len());
        for face in &faces {
            if !loaded.contains(&face.key()) {
                self.canvas.load_font(face).await?;
                loaded.push(face.key());
            }
        }
        self.canvas.set_style(node, &StylePatch::characters(value))?;
        self.stats.texts_set += 1;
        Ok(())
    }

    async fn set_text(&mut self, name: &str, value: &str) -> PageforgeResult<()> {
        if let Some(node) = self.find(name, NodeKind::Text) {
            self.write_text(node, value).await?;
        }
        Ok(())
    }

    async fn set_opt(&mut self, name: &str, value: &Option<String>) -> PageforgeResult<()> {
        if let Some(value) = value {
            self.set_text(name, value).await?;
        }
        Ok(())
    }

    fn set_row_visible(&mut self, name: &str, visible: bool) -> PageforgeResult<()> {
        let Some(node) = self.find(name, NodeKind::Container) else {
            return Ok(());
        };
        self.canvas.set_style(node, &StylePatch::visibility(visible))?;
        if visible {
            self.stats.rows_shown += 1;
        } else {
            self.stats.rows_hidden += 1;
        }
        Ok(())
    }

    /// Repeatable-row policy: an absent list leaves every row alone; a
    /// provided list rewrites and shows the rows it covers and hides the
    /// rest. A covered row whose text anchor is gone is hidden too, and
    /// entries past the template's row count are dropped.
    async fn apply_rows(
        &mut self,
        items: &Option<Vec<String>>,
        row_name: fn(usize) -> String,
        text_name: fn(usize) -> String,
    ) -> PageforgeResult<()> {
        let Some(items) = items else {
            return Ok(());
        };
        for i in 0..MAX_REPEAT_ROWS {
            let target = items
                .get(i)
                .and_then(|text| self.find(&text_name(i), NodeKind::Text).map(|n| (n, text)));
            match target {
                Some((node, text)) => {
                    self.write_text(node, text).await?;
                    self.set_row_visible(&row_name(i), true)?;
                }
                None => self.set_row_visible(&row_name(i), false)?,
            }
        }
        Ok(())
    }

    /// Metric cells update in place and never hide; a short list leaves the
    /// remaining cells at their defaults.
    async fn apply_metrics(&mut self, metrics: &Option<Vec<MetricContent>>) -> PageforgeResult<()> {
        let Some(metrics) = metrics else {
            return Ok(());
        };
        for (i, metric) in metrics.iter().take(MAX_REPEAT_ROWS).enumerate() {
            self.set_opt(&hero_metric_value(i), &metric.value).await?;
            self.set_opt(&hero_metric_label(i), &metric.label).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{InMemoryCanvas, LayoutDirection};
    use crate::content::payload::HeroContent;

    fn tiny_page(canvas: &mut InMemoryCanvas) -> NodeId {
        let root = canvas.create_container(LayoutDirection::Column);
        let heading = canvas.create_text();
        canvas
            .set_style(heading, &StylePatch::named(HERO_HEADING))
            .unwrap();
        canvas.append_child(root, heading).unwrap();
        root
    }

    #[tokio::test]
    async fn defined_fields_rewrite_and_misses_stay_silent() {
        let mut canvas = InMemoryCanvas::new();
        let root = tiny_page(&mut canvas);
        let payload = ContentPayload {
            hero: Some(HeroContent {
                title: Some("Fresh heading".into()),
                subtitle: Some("misses, no Hero:Subheading node".into()),
                ..HeroContent::default()
            }),
            ..ContentPayload::default()
        };

        let stats = apply_content(&mut canvas, root, &payload).await.unwrap();
        assert_eq!(stats.texts_set, 1);
        assert_eq!(stats.anchors_missed, 1);
        let heading = canvas
            .find_descendant(root, &|info| info.name == HERO_HEADING)
            .unwrap();
        assert_eq!(canvas.text_of(heading), Some("Fresh heading"));
    }

    #[tokio::test]
    async fn lookup_requires_matching_kind() {
        let mut canvas = InMemoryCanvas::new();
        let root = canvas.create_container(LayoutDirection::Column);
        // A container wearing a text anchor's name must not satisfy it.
        let impostor = canvas.create_container(LayoutDirection::Row);
        canvas
            .set_style(impostor, &StylePatch::named(CTA_HEADING))
            .unwrap();
        canvas.append_child(root, impostor).unwrap();

        let payload = ContentPayload {
            cta: Some(crate::content::payload::CtaContent {
                title: Some("ignored".into()),
                ..Default::default()
            }),
            ..ContentPayload::default()
        };
        let stats = apply_content(&mut canvas, root, &payload).await.unwrap();
        assert_eq!(stats.texts_set, 0);
        assert_eq!(stats.anchors_missed, 1);
    }

    #[tokio::test]
    async fn missing_text_anchor_hides_the_covered_row() {
        let mut canvas = InMemoryCanvas::new();
        let root = canvas.create_container(LayoutDirection::Column);
        // Row container present, text anchor gone.
        let row = canvas.create_container(LayoutDirection::Row);
        canvas
            .set_style(row, &StylePatch::named(hero_highlight_row(0)))
            .unwrap();
        canvas.append_child(root, row).unwrap();

        let payload = ContentPayload {
            hero: Some(HeroContent {
                highlights: Some(vec!["Orphaned".into()]),
                ..HeroContent::default()
            }),
            ..ContentPayload::default()
        };
        let stats = apply_content(&mut canvas, root, &payload).await.unwrap();

        assert!(!canvas.is_visible(row));
        // One miss for the text anchor, one per absent later row container.
        assert_eq!(
            stats,
            ApplyStats {
                rows_hidden: 1,
                anchors_missed: 3,
                ..ApplyStats::default()
            }
        );
    }

    #[tokio::test]
    async fn empty_payload_touches_nothing() {
        let mut canvas = InMemoryCanvas::new();
        let root = tiny_page(&mut canvas);
        let stats = apply_content(&mut canvas, root, &ContentPayload::default())
            .await
            .unwrap();
        assert_eq!(stats, ApplyStats::default());
    }
}
