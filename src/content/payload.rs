//! Generated-copy payload: the JSON shape a model reply must carry and the
//! tolerant extraction that digs it out of chatty replies.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::foundation::error::{PageforgeError, PageforgeResult};

/// Status text surfaced whenever a reply carries no usable payload, either
/// because no JSON object could be located or because the object failed to
/// parse.
pub const MALFORMED_REPLY_MESSAGE: &str =
    "The model reply did not contain valid landing page content.";

/// Top-level payload. Every field is optional; absent sections leave their
/// part of the page untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentPayload {
    pub hero: Option<HeroContent>,
    pub metrics: Option<Vec<MetricContent>>,
    pub testimonial: Option<TestimonialContent>,
    pub cta: Option<CtaContent>,
}

/// Replacement copy for the hero section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroContent {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub primary_cta: Option<String>,
    pub secondary_cta: Option<String>,
    pub assurance: Option<String>,
    pub highlights: Option<Vec<String>>,
}

/// One metric cell. Value and label replace independently.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetricContent {
    pub value: Option<String>,
    pub label: Option<String>,
}

/// Replacement copy for the testimonial section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestimonialContent {
    pub heading: Option<String>,
    pub subtitle: Option<String>,
    pub quote: Option<String>,
    pub bullets: Option<Vec<String>>,
    pub attribution: Option<String>,
    pub attribution_role: Option<String>,
    pub callout: Option<String>,
}

/// Replacement copy for the closing call-to-action band.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CtaContent {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub primary_cta: Option<String>,
    pub secondary_cta: Option<String>,
}

impl ContentPayload {
    /// Parse a raw model reply.
    ///
    /// The candidate region runs from the leftmost `{` to the rightmost `}`;
    /// prose or code fences around it are discarded. A reply with no such
    /// region, or whose region is not a valid payload object, fails with
    /// [`MALFORMED_REPLY_MESSAGE`].
    pub fn from_reply(raw: &str) -> PageforgeResult<Self> {
        let Some(region) = extract_json_object(raw) else {
            debug!(len = raw.len(), "reply contains no JSON object region");
            return Err(PageforgeError::content_format(MALFORMED_REPLY_MESSAGE));
        };
        match serde_json::from_str(region) {
            Ok(payload) => Ok(payload),
            Err(err) => {
                debug!(error = %err, "discarding malformed payload region");
                Err(PageforgeError::content_format(MALFORMED_REPLY_MESSAGE))
            }
        }
    }
}

/// Slice from the leftmost `{` through the rightmost `}`, or `None` when the
/// input has no such span.
pub fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_object_between_prose() {
        let raw = "Sure! Here is the content:\n```json\n{\"hero\": {}}\n```\nLet me know.";
        assert_eq!(extract_json_object(raw), Some("{\"hero\": {}}"));
    }

    #[test]
    fn extraction_requires_brace_pair_in_order() {
        assert_eq!(extract_json_object("no braces"), None);
        assert_eq!(extract_json_object("} reversed {"), None);
        assert_eq!(extract_json_object("{}"), Some("{}"));
    }

    #[test]
    fn from_reply_reads_camel_case_fields() {
        let payload = ContentPayload::from_reply(
            r#"{"hero": {"title": "Ship faster", "primaryCta": "Try it"},
                "metrics": [{"value": "2x", "label": "Faster launches"}],
                "testimonial": {"attributionRole": "CTO, Acme"},
                "cta": {"secondaryCta": "Talk to us"}}"#,
        )
        .unwrap();
        let hero = payload.hero.unwrap();
        assert_eq!(hero.title.as_deref(), Some("Ship faster"));
        assert_eq!(hero.primary_cta.as_deref(), Some("Try it"));
        assert_eq!(hero.subtitle, None);
        let metrics = payload.metrics.unwrap();
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics[0].value.as_deref(), Some("2x"));
        assert_eq!(
            payload.testimonial.unwrap().attribution_role.as_deref(),
            Some("CTO, Acme")
        );
        assert_eq!(
            payload.cta.unwrap().secondary_cta.as_deref(),
            Some("Talk to us")
        );
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let payload =
            ContentPayload::from_reply(r#"{"hero": {"title": "Hi", "tone": "bold"}}"#).unwrap();
        assert_eq!(payload.hero.unwrap().title.as_deref(), Some("Hi"));
    }

    #[test]
    fn malformed_region_yields_fixed_message() {
        for raw in ["nothing here", "{\"hero\": [1, 2}", "{not json}"] {
            let err = ContentPayload::from_reply(raw).unwrap_err();
            assert_eq!(err.surface_message(), MALFORMED_REPLY_MESSAGE);
        }
    }
}
