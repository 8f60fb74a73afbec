//! Overlaying generated copy onto a built page.

pub mod apply;
pub mod payload;

pub use apply::{ApplyStats, apply_content};
pub use payload::{
    ContentPayload, CtaContent, HeroContent, MALFORMED_REPLY_MESSAGE, MetricContent,
    TestimonialContent, extract_json_object,
};
