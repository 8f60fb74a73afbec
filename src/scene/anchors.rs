//! Anchor names and the per-build anchor registry.
//!
//! Anchor names are the only contract between the scene builder and content
//! application: no node references cross that boundary. The exact strings
//! here are therefore load-bearing; lookups never error, so renaming one
//! silently orphans the corresponding payload field.

use std::collections::BTreeMap;

use serde::Serialize;
use xxhash_rust::xxh3::Xxh3;

use crate::canvas::{NodeId, NodeKind};
use crate::foundation::error::{PageforgeError, PageforgeResult};

/// Upper bound on repeatable rows (highlights, metrics, bullets).
pub const MAX_REPEAT_ROWS: usize = 3;

/// `hero.title`
pub const HERO_HEADING: &str = "Hero:Heading";
/// `hero.subtitle`
pub const HERO_SUBHEADING: &str = "Hero:Subheading";
/// `hero.primaryCta`
pub const HERO_CTA_PRIMARY_LABEL: &str = "HeroCTA:Primary:Label";
/// `hero.secondaryCta`
pub const HERO_CTA_SECONDARY_LABEL: &str = "HeroCTA:Secondary:Label";
/// `hero.assurance`
pub const HERO_ASSURANCE: &str = "Hero:Assurance";
/// `testimonial.heading`
pub const TESTIMONIAL_HEADING: &str = "Testimonial:Heading";
/// `testimonial.subtitle`
pub const TESTIMONIAL_SUBHEADING: &str = "Testimonial:Subheading";
/// `testimonial.quote`
pub const TESTIMONIAL_QUOTE: &str = "Testimonial:Quote";
/// `testimonial.attribution`
pub const TESTIMONIAL_ATTRIBUTION_NAME: &str = "Testimonial:Attribution:Name";
/// `testimonial.attributionRole`
pub const TESTIMONIAL_ATTRIBUTION_ROLE: &str = "Testimonial:Attribution:Role";
/// `testimonial.callout`
pub const TESTIMONIAL_CALLOUT_TEXT: &str = "Testimonial:Callout:Text";
/// `cta.title`
pub const CTA_HEADING: &str = "CTA:Heading";
/// `cta.subtitle`
pub const CTA_SUBHEADING: &str = "CTA:Subheading";
/// `cta.primaryCta`
pub const CTA_PRIMARY_LABEL: &str = "CTA:Primary:Label";
/// `cta.secondaryCta`
pub const CTA_SECONDARY_LABEL: &str = "CTA:Secondary:Label";

/// Row container of highlight `i`.
pub fn hero_highlight_row(i: usize) -> String {
    format!("Hero:Highlight:{i}")
}

/// Text anchor of highlight `i`.
pub fn hero_highlight_text(i: usize) -> String {
    format!("Hero:Highlight:{i}:Text")
}

/// Row container of metric `i`. Metric rows are never hidden.
pub fn hero_metric_row(i: usize) -> String {
    format!("HeroMetric:{i}")
}

/// Value anchor of metric `i`.
pub fn hero_metric_value(i: usize) -> String {
    format!("HeroMetric:{i}:Value")
}

/// Label anchor of metric `i`.
pub fn hero_metric_label(i: usize) -> String {
    format!("HeroMetric:{i}:Label")
}

/// Row container of testimonial bullet `i`.
pub fn testimonial_bullet_row(i: usize) -> String {
    format!("Testimonial:Bullet:{i}")
}

/// Text anchor of testimonial bullet `i`.
pub fn testimonial_bullet_text(i: usize) -> String {
    format!("Testimonial:Bullet:{i}:Text")
}

const XXH3_SEED: u64 = 0x51c7a3e94b02d6f8;

/// Stable fingerprint of an anchor set, independent of node handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct AnchorFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl std::fmt::Display for AnchorFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// One registered anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AnchorEntry {
    /// Node handle in the build's canvas.
    pub node: NodeId,
    /// Kind the anchor was created with.
    pub kind: NodeKind,
}

/// Name → node registry for one build.
///
/// Populated by the builder as it creates named nodes and sealed when the
/// build returns; never reused across builds. Content application does not
/// consult it (that path scans the live tree), but tooling and determinism
/// checks do.
#[derive(Clone, Debug, Default, Serialize)]
pub struct AnchorIndex {
    entries: BTreeMap<String, AnchorEntry>,
}

impl AnchorIndex {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named node. Names must be unique within a build.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        node: NodeId,
        kind: NodeKind,
    ) -> PageforgeResult<()> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(PageforgeError::validation(format!(
                "duplicate node name in one build: \"{name}\""
            )));
        }
        self.entries.insert(name, AnchorEntry { node, kind });
        Ok(())
    }

    /// Entry for `name`, when registered.
    pub fn get(&self, name: &str) -> Option<&AnchorEntry> {
        self.entries.get(name)
    }

    /// Node handle for `name`, when registered.
    pub fn node(&self, name: &str) -> Option<NodeId> {
        self.entries.get(name).map(|e| e.node)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fingerprint over the sorted `(name, kind)` set.
    ///
    /// Node handles are excluded, so two builds of the same template
    /// fingerprint identically even though their node handles differ.
    pub fn fingerprint(&self) -> AnchorFingerprint {
        let mut hasher = Xxh3::with_seed(XXH3_SEED);
        for (name, entry) in &self.entries {
            hasher.update(&(name.len() as u32).to_le_bytes());
            hasher.update(name.as_bytes());
            let kind = match entry.kind {
                NodeKind::Container => 0u8,
                NodeKind::Text => 1,
                NodeKind::Shape => 2,
            };
            hasher.update(&[kind]);
        }
        let digest = hasher.digest128();
        AnchorFingerprint {
            hi: (digest >> 64) as u64,
            lo: digest as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeatable_names_are_stable() {
        assert_eq!(hero_highlight_row(0), "Hero:Highlight:0");
        assert_eq!(hero_highlight_text(2), "Hero:Highlight:2:Text");
        assert_eq!(hero_metric_value(1), "HeroMetric:1:Value");
        assert_eq!(testimonial_bullet_text(0), "Testimonial:Bullet:0:Text");
    }

    #[test]
    fn fingerprint_ignores_node_handles() {
        let mut a = AnchorIndex::new();
        a.insert(HERO_HEADING, NodeId(1), NodeKind::Text).unwrap();
        a.insert(HERO_ASSURANCE, NodeId(2), NodeKind::Text).unwrap();

        let mut b = AnchorIndex::new();
        b.insert(HERO_ASSURANCE, NodeId(90), NodeKind::Text).unwrap();
        b.insert(HERO_HEADING, NodeId(17), NodeKind::Text).unwrap();

        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn fingerprint_tracks_names_and_kinds() {
        let mut a = AnchorIndex::new();
        a.insert(HERO_HEADING, NodeId(1), NodeKind::Text).unwrap();

        let mut b = AnchorIndex::new();
        b.insert(HERO_HEADING, NodeId(1), NodeKind::Container).unwrap();
        assert_ne!(a.fingerprint(), b.fingerprint());

        let mut c = AnchorIndex::new();
        c.insert(HERO_SUBHEADING, NodeId(1), NodeKind::Text).unwrap();
        assert_ne!(a.fingerprint(), c.fingerprint());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut index = AnchorIndex::new();
        index.insert(CTA_HEADING, NodeId(0), NodeKind::Text).unwrap();
        assert!(index.insert(CTA_HEADING, NodeId(1), NodeKind::Text).is_err());
    }
}
