//! Default copy baked into the page template.
//!
//! Builds must be deterministic over these strings: the anchor-set contract
//! in the tests assumes unchanged copy. Generated content overwrites copy in
//! place after a build; nothing here is required to survive application.

/// Brand mark label in the nav.
pub const DEFAULT_BRAND_NAME: &str = "Fieldstone";

/// Nav links, left to right.
pub const DEFAULT_NAV_LINKS: [&str; 3] = ["Product", "Pricing", "Docs"];

/// Nav call-to-action label.
pub const DEFAULT_NAV_CTA: &str = "Get started";

/// Eyebrow badge above the hero heading.
pub const DEFAULT_HERO_BADGE: &str = "Now in public beta";

/// Hero heading.
pub const DEFAULT_HERO_HEADING: &str = "Launch pages that convert";

/// Hero subheading.
pub const DEFAULT_HERO_SUBHEADING: &str =
    "Design, publish, and iterate on landing pages without waiting on a developer.";

/// Primary hero call to action.
pub const DEFAULT_HERO_PRIMARY_CTA: &str = "Start free trial";

/// Secondary hero call to action.
pub const DEFAULT_HERO_SECONDARY_CTA: &str = "Book a demo";

/// Assurance caption under the hero buttons.
pub const DEFAULT_HERO_ASSURANCE: &str = "No credit card required";

/// Hero highlight rows, top to bottom.
pub const DEFAULT_HIGHLIGHTS: [&str; 3] = [
    "Drag-and-drop sections",
    "Built-in A/B testing",
    "One-click publishing",
];

/// Metric strip defaults as `(value, label)` pairs.
pub const DEFAULT_METRICS: [(&str, &str); 3] = [
    ("10k+", "teams shipping weekly"),
    ("99.9%", "uptime last quarter"),
    ("4.8/5", "average review score"),
];

/// Testimonial section heading.
pub const DEFAULT_TESTIMONIAL_HEADING: &str = "Loved by modern teams";

/// Testimonial section subheading.
pub const DEFAULT_TESTIMONIAL_SUBHEADING: &str =
    "Hear how design-led companies ship faster with less back-and-forth.";

/// Quote body.
pub const DEFAULT_TESTIMONIAL_QUOTE: &str =
    "“We went from brief to live page in an afternoon. Our conversion rate has never been higher.”";

/// Supporting bullet rows beside the quote card.
pub const DEFAULT_TESTIMONIAL_BULLETS: [&str; 3] = [
    "Launched 40+ campaign pages in one quarter",
    "Cut design handoff time by 70%",
    "Doubled trial signups in two months",
];

/// Attribution name under the quote.
pub const DEFAULT_ATTRIBUTION_NAME: &str = "Maya Okonkwo";

/// Attribution role under the quote.
pub const DEFAULT_ATTRIBUTION_ROLE: &str = "Head of Growth, Fieldstone";

/// Initials shown in the avatar circle.
pub const DEFAULT_AVATAR_INITIALS: &str = "MO";

/// Callout chip under the attribution.
pub const DEFAULT_TESTIMONIAL_CALLOUT: &str = "Results from a 90-day rollout";

/// Closing section heading.
pub const DEFAULT_CTA_HEADING: &str = "Ready to launch your next page?";

/// Closing section subheading.
pub const DEFAULT_CTA_SUBHEADING: &str = "Join thousands of teams building with confidence.";

/// Closing primary call to action.
pub const DEFAULT_CTA_PRIMARY: &str = "Get started now";

/// Closing secondary call to action.
pub const DEFAULT_CTA_SECONDARY: &str = "Talk to sales";
