//! Serde model of the design-token schema.
//!
//! The schema is plain data: themes of color groups, a typography scale, a
//! spacing scale, radii and shadow presets. It is loaded once, validated once
//! and never mutated afterwards (resolution happens in
//! [`crate::tokens::resolve`]).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color::is_valid_hex;
use crate::foundation::error::{PageforgeError, PageforgeResult};

/// Default schema shipped with the crate.
const DEFAULT_TOKENS_JSON: &str = include_str!("../../data/default_tokens.json");

/// A color group: either one hex for the whole group or a shade→hex map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorGroup {
    /// Single hex value, shade-independent.
    Single(String),
    /// Shade key (e.g. `"500"`) → hex value.
    Shades(BTreeMap<String, String>),
}

/// One theme's color groups, keyed by group name.
pub type ThemeColors = BTreeMap<String, ColorGroup>;

/// Resolved metrics of one typography variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    /// Font size in pixels.
    pub font_size: f64,
    /// Numeric font weight (100..=900 in practice).
    pub font_weight: u32,
    /// Line height as a multiple of the font size.
    pub line_height: f64,
}

/// Typography tokens: one family plus a named variant scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Typography {
    /// Font family shared by every variant.
    pub font_family: String,
    /// Variant name → metrics.
    pub scale: BTreeMap<String, TypeStyle>,
}

/// Spacing tokens, namespaced under a single `base` scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    /// The base scale.
    pub base: SpacingScale,
}

/// An ordered pixel sequence indexed by integer step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacingScale {
    /// Pixel value per step.
    pub scale: Vec<f64>,
}

/// One drop-shadow preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowTokens {
    /// `rgba(...)` color string, parsed fail-soft at use time.
    pub color: String,
    /// Horizontal offset in pixels.
    pub offset_x: f64,
    /// Vertical offset in pixels.
    pub offset_y: f64,
    /// Blur radius in pixels.
    pub blur: f64,
    /// Spread in pixels (may be negative).
    pub spread: f64,
}

/// The full immutable token schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenSchema {
    /// Theme name → color groups.
    pub colors: BTreeMap<String, ThemeColors>,
    /// Typography tokens.
    pub typography: Typography,
    /// Spacing tokens.
    pub spacing: Spacing,
    /// Named corner radii in pixels.
    pub radii: BTreeMap<String, f64>,
    /// Named shadow presets.
    pub shadows: BTreeMap<String, ShadowTokens>,
}

impl TokenSchema {
    /// The schema embedded in the crate.
    pub fn builtin() -> PageforgeResult<Self> {
        Self::from_json_str(DEFAULT_TOKENS_JSON)
    }

    /// Parse a schema from JSON text. Does not validate; see [`Self::validate`].
    pub fn from_json_str(json: &str) -> PageforgeResult<Self> {
        serde_json::from_str(json).map_err(|e| PageforgeError::serde(format!("token schema: {e}")))
    }

    /// Check structural requirements the resolver relies on.
    ///
    /// Returns the first problem found, tagged with enough path context to fix
    /// the offending entry. Shadow color strings are deliberately not checked
    /// here; they go through the fail-soft `rgba(...)` path.
    pub fn validate(&self) -> PageforgeResult<()> {
        if self.colors.is_empty() {
            return Err(PageforgeError::validation("colors: at least one theme required"));
        }
        for (theme, groups) in &self.colors {
            if groups.is_empty() {
                return Err(PageforgeError::validation(format!(
                    "colors.{theme}: at least one color group required"
                )));
            }
            for (group, def) in groups {
                match def {
                    ColorGroup::Single(hex) => {
                        if !is_valid_hex(hex) {
                            return Err(PageforgeError::validation(format!(
                                "colors.{theme}.{group}: invalid hex \"{hex}\""
                            )));
                        }
                    }
                    ColorGroup::Shades(shades) => {
                        if shades.is_empty() {
                            return Err(PageforgeError::validation(format!(
                                "colors.{theme}.{group}: shade map must not be empty"
                            )));
                        }
                        for (shade, hex) in shades {
                            if !is_valid_hex(hex) {
                                return Err(PageforgeError::validation(format!(
                                    "colors.{theme}.{group}.{shade}: invalid hex \"{hex}\""
                                )));
                            }
                        }
                    }
                }
            }
        }

        if self.typography.font_family.trim().is_empty() {
            return Err(PageforgeError::validation(
                "typography.fontFamily must not be empty",
            ));
        }
        if self.typography.scale.is_empty() {
            return Err(PageforgeError::validation(
                "typography.scale: at least one variant required",
            ));
        }
        for (variant, style) in &self.typography.scale {
            if !(style.font_size.is_finite() && style.font_size > 0.0) {
                return Err(PageforgeError::validation(format!(
                    "typography.scale.{variant}: fontSize must be finite and > 0"
                )));
            }
            if !(style.line_height.is_finite() && style.line_height > 0.0) {
                return Err(PageforgeError::validation(format!(
                    "typography.scale.{variant}: lineHeight must be finite and > 0"
                )));
            }
            if style.font_weight == 0 || style.font_weight > 1000 {
                return Err(PageforgeError::validation(format!(
                    "typography.scale.{variant}: fontWeight must be in 1..=1000"
                )));
            }
        }

        if self.spacing.base.scale.is_empty() {
            return Err(PageforgeError::validation(
                "spacing.base.scale must not be empty",
            ));
        }
        for (i, v) in self.spacing.base.scale.iter().enumerate() {
            if !(v.is_finite() && *v >= 0.0) {
                return Err(PageforgeError::validation(format!(
                    "spacing.base.scale[{i}]: must be finite and >= 0"
                )));
            }
        }

        for (name, r) in &self.radii {
            if !(r.is_finite() && *r >= 0.0) {
                return Err(PageforgeError::validation(format!(
                    "radii.{name}: must be finite and >= 0"
                )));
            }
        }

        for (name, s) in &self.shadows {
            if !(s.blur.is_finite() && s.blur >= 0.0) {
                return Err(PageforgeError::validation(format!(
                    "shadows.{name}: blur must be finite and >= 0"
                )));
            }
            if !(s.offset_x.is_finite() && s.offset_y.is_finite() && s.spread.is_finite()) {
                return Err(PageforgeError::validation(format!(
                    "shadows.{name}: offsets and spread must be finite"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builtin_parses_and_validates() {
        let schema = TokenSchema::builtin().unwrap();
        schema.validate().unwrap();
        assert!(schema.colors.contains_key("dark"));
        assert!(schema.colors.contains_key("light"));
        assert_eq!(schema.typography.font_family, "Inter");
        assert!(schema.typography.scale.contains_key("display"));
        assert_eq!(schema.spacing.base.scale.first(), Some(&0.0));
    }

    #[test]
    fn color_group_shorthand_forms() {
        let groups: ThemeColors = serde_json::from_value(json!({
            "success": "#34D399",
            "primary": { "500": "#6366F1" }
        }))
        .unwrap();
        assert_eq!(groups["success"], ColorGroup::Single("#34D399".into()));
        assert!(matches!(groups["primary"], ColorGroup::Shades(_)));
    }

    #[test]
    fn empty_schema_fails_validation() {
        let schema = TokenSchema::default();
        let err = schema.validate().unwrap_err();
        assert!(err.to_string().contains("colors"));
    }

    #[test]
    fn bad_hex_is_rejected_with_path() {
        let schema = TokenSchema::from_json_str(
            &json!({
                "colors": { "dark": { "primary": { "500": "#NOPE" } } },
                "typography": {
                    "fontFamily": "Inter",
                    "scale": { "body": { "fontSize": 16, "fontWeight": 400, "lineHeight": 1.5 } }
                },
                "spacing": { "base": { "scale": [0, 4] } }
            })
            .to_string(),
        )
        .unwrap();
        let err = schema.validate().unwrap_err();
        assert!(err.to_string().contains("colors.dark.primary.500"));
    }

    #[test]
    fn partial_json_takes_defaults_then_fails_validation() {
        let schema = TokenSchema::from_json_str("{}").unwrap();
        assert!(schema.validate().is_err());
    }
}
