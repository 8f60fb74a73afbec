//! Token resolution with deterministic fallbacks.
//!
//! Every lookup here is total: unknown themes, groups, shades, steps or
//! variants resolve to fixed fallbacks instead of erroring. Style resolution
//! feeds the scene builder, so a half-broken schema should degrade the page,
//! not abort the build.

use crate::canvas::FontDescriptor;
use crate::color::{DEFAULT_COLOR_HEX, Rgba, hex_to_rgb};
use crate::foundation::error::PageforgeResult;
use crate::tokens::schema::{ColorGroup, ShadowTokens, TokenSchema, TypeStyle};

/// Theme used when the requested theme is unknown.
pub const DEFAULT_THEME: &str = "dark";

/// Shade used when a token omits the shade or the requested shade is missing.
pub const DEFAULT_SHADE: &str = "500";

/// Descending weight thresholds mapped to face style names.
///
/// The final entry (threshold 0) is the universal fallback, so selection is a
/// step function over the whole `u32` range.
const FONT_STYLE_THRESHOLDS: [(u32, &str); 4] = [
    (700, "Bold"),
    (600, "Semi Bold"),
    (500, "Medium"),
    (0, "Regular"),
];

/// Used when a typography variant is unknown.
const FALLBACK_TYPE_STYLE: TypeStyle = TypeStyle {
    font_size: 16.0,
    font_weight: 400,
    line_height: 1.5,
};

/// Resolves abstract token names into concrete style values.
///
/// Holds a validated, immutable [`TokenSchema`]; construction is the only
/// fallible operation.
#[derive(Debug, Clone)]
pub struct TokenResolver {
    schema: TokenSchema,
}

impl TokenResolver {
    /// Validate `schema` and wrap it in a resolver.
    pub fn new(schema: TokenSchema) -> PageforgeResult<Self> {
        schema.validate()?;
        Ok(Self { schema })
    }

    /// Resolver over the embedded default schema.
    pub fn builtin() -> PageforgeResult<Self> {
        Self::new(TokenSchema::builtin()?)
    }

    /// Borrow the underlying schema.
    pub fn schema(&self) -> &TokenSchema {
        &self.schema
    }

    /// Resolve a `"group/shade"` color token to a hex string.
    ///
    /// Omitted shade defaults to [`DEFAULT_SHADE`]. Unknown themes fall back
    /// to [`DEFAULT_THEME`]; single-string groups resolve verbatim with the
    /// shade ignored; anything else missing resolves to
    /// [`DEFAULT_COLOR_HEX`]. Never fails.
    pub fn color(&self, theme: &str, token: &str) -> String {
        let (group, shade) = token.split_once('/').unwrap_or((token, DEFAULT_SHADE));

        let groups = self
            .schema
            .colors
            .get(theme)
            .or_else(|| self.schema.colors.get(DEFAULT_THEME));
        let Some(groups) = groups else {
            return DEFAULT_COLOR_HEX.to_owned();
        };

        match groups.get(group) {
            Some(ColorGroup::Single(hex)) => hex.clone(),
            Some(ColorGroup::Shades(shades)) => shades
                .get(shade)
                .or_else(|| shades.get(DEFAULT_SHADE))
                .cloned()
                .unwrap_or_else(|| DEFAULT_COLOR_HEX.to_owned()),
            None => DEFAULT_COLOR_HEX.to_owned(),
        }
    }

    /// [`Self::color`] decoded to a normalized color.
    pub fn rgb(&self, theme: &str, token: &str) -> Rgba {
        hex_to_rgb(&self.color(theme, token))
    }

    /// Pixel value for an integer spacing step.
    ///
    /// The step is clamped into the scale's index range, so out-of-range and
    /// negative steps saturate instead of erroring.
    pub fn spacing(&self, step: i32) -> f64 {
        let scale = &self.schema.spacing.base.scale;
        match scale.len() {
            0 => 0.0,
            n => {
                let idx = (step.max(0) as usize).min(n - 1);
                scale[idx]
            }
        }
    }

    /// Named corner radius in pixels; unknown names resolve to 0.
    pub fn radius(&self, name: &str) -> f64 {
        self.schema.radii.get(name).copied().unwrap_or(0.0)
    }

    /// Named shadow preset, when defined.
    pub fn shadow(&self, name: &str) -> Option<&ShadowTokens> {
        self.schema.shadows.get(name)
    }

    /// Font face for a numeric weight via the descending threshold table.
    pub fn font_for_weight(&self, weight: u32) -> FontDescriptor {
        let style = FONT_STYLE_THRESHOLDS
            .iter()
            .find(|(threshold, _)| weight >= *threshold)
            .map(|(_, style)| *style)
            .unwrap_or("Regular");
        FontDescriptor::new(self.schema.typography.font_family.clone(), style)
    }

    /// Metrics for a typography variant; unknown variants resolve to a fixed
    /// body-like style.
    pub fn type_style(&self, variant: &str) -> TypeStyle {
        self.schema
            .typography
            .scale
            .get(variant)
            .copied()
            .unwrap_or(FALLBACK_TYPE_STYLE)
    }

    /// Font face for a typography variant's weight.
    pub fn font_for_variant(&self, variant: &str) -> FontDescriptor {
        self.font_for_weight(self.type_style(variant).font_weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolver() -> TokenResolver {
        TokenResolver::builtin().unwrap()
    }

    #[test]
    fn color_resolves_group_and_shade() {
        let r = resolver();
        assert_eq!(r.color("dark", "primary/600"), "#4F46E5");
        // Omitted shade defaults to 500.
        assert_eq!(r.color("dark", "primary"), r.color("dark", "primary/500"));
    }

    #[test]
    fn color_single_string_group_ignores_shade() {
        let r = resolver();
        assert_eq!(r.color("dark", "success"), "#34D399");
        assert_eq!(r.color("dark", "success/900"), "#34D399");
    }

    #[test]
    fn unknown_theme_falls_back_to_default_theme() {
        let r = resolver();
        assert_eq!(
            r.color("dark-unknown", "primary/500"),
            r.color(DEFAULT_THEME, "primary/500")
        );
    }

    #[test]
    fn missing_shade_then_default_shade_then_default_color() {
        let r = resolver();
        // accent has no 950, falls back to its 500.
        assert_eq!(r.color("dark", "accent/950"), r.color("dark", "accent/500"));

        // A group with neither the requested nor the default shade.
        let schema = TokenSchema::from_json_str(
            &json!({
                "colors": { "dark": { "brand": { "100": "#ABCDEF" } } },
                "typography": {
                    "fontFamily": "Inter",
                    "scale": { "body": { "fontSize": 16, "fontWeight": 400, "lineHeight": 1.5 } }
                },
                "spacing": { "base": { "scale": [0, 8] } }
            })
            .to_string(),
        )
        .unwrap();
        let r = TokenResolver::new(schema).unwrap();
        assert_eq!(r.color("dark", "brand/900"), DEFAULT_COLOR_HEX);
        assert_eq!(r.color("dark", "nope/500"), DEFAULT_COLOR_HEX);
    }

    #[test]
    fn color_is_total_over_hostile_input() {
        let r = resolver();
        for token in ["", "/", "//", "primary/", "/500", "a/b/c", "✨"] {
            let hex = r.color("not-a-theme", token);
            assert!(hex.starts_with('#'), "got {hex:?} for {token:?}");
        }
    }

    #[test]
    fn spacing_saturates_at_both_ends() {
        let r = resolver();
        let scale = r.schema().spacing.base.scale.clone();
        assert_eq!(r.spacing(-100), scale[0]);
        assert_eq!(r.spacing(0), scale[0]);
        assert_eq!(r.spacing(3), scale[3]);
        assert_eq!(r.spacing(9999), *scale.last().unwrap());
    }

    #[test]
    fn font_weight_selection_is_monotonic() {
        let r = resolver();
        let rank = |weight: u32| -> usize {
            let style = r.font_for_weight(weight).style;
            FONT_STYLE_THRESHOLDS
                .iter()
                .position(|(_, s)| *s == style)
                .unwrap()
        };
        let mut prev = rank(0);
        for w in (0..=1000).step_by(25) {
            let cur = rank(w);
            // Lower rank index means a higher threshold was selected.
            assert!(cur <= prev, "weight {w} regressed");
            prev = cur;
        }
        assert_eq!(r.font_for_weight(700).style, "Bold");
        assert_eq!(r.font_for_weight(650).style, "Semi Bold");
        assert_eq!(r.font_for_weight(500).style, "Medium");
        assert_eq!(r.font_for_weight(350).style, "Regular");
    }

    #[test]
    fn type_style_unknown_variant_falls_back() {
        let r = resolver();
        let s = r.type_style("no-such-variant");
        assert_eq!(s.font_size, 16.0);
        assert_eq!(s.font_weight, 400);
        let display = r.type_style("display");
        assert_eq!(display.font_size, 64.0);
    }
}
