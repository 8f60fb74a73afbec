//! Hex and `rgba(...)` color parsing.
//!
//! Style values are cosmetic, so parsing here fails soft: malformed input
//! resolves to a fixed fallback instead of an error. Schemas are still
//! validated strictly up front (see [`crate::tokens::schema`]).

use serde::{Deserialize, Serialize};

/// Fallback hex used when a color cannot be resolved or parsed.
pub const DEFAULT_COLOR_HEX: &str = "#111827";

/// Alpha applied by the `rgba(...)` fallback path.
pub const FALLBACK_ALPHA: f64 = 0.16;

/// Straight-alpha color with channels normalized to `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Rgba {
    /// Construct from raw channel values.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Construct a fully opaque color.
    pub fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// The same color with a different alpha, clamped to `[0, 1]`.
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }
}

/// Return `true` when `s` is a parseable `#RRGGBB` hex string.
pub fn is_valid_hex(s: &str) -> bool {
    let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
    digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parse `#RRGGBB` into an opaque normalized color.
///
/// Malformed input resolves to [`DEFAULT_COLOR_HEX`].
pub fn hex_to_rgb(hex: &str) -> Rgba {
    match strict_hex(hex) {
        Some(c) => c,
        // `DEFAULT_COLOR_HEX` itself always parses.
        None => strict_hex(DEFAULT_COLOR_HEX).unwrap_or(Rgba::opaque(0.0, 0.0, 0.0)),
    }
}

/// Parse `#RRGGBB` plus a separate alpha clamped to `[0, 1]`.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> Rgba {
    hex_to_rgb(hex).with_alpha(alpha)
}

fn strict_hex(hex: &str) -> Option<Rgba> {
    let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
    if digits.len() != 6 {
        return None;
    }
    let packed = u32::from_str_radix(digits, 16).ok()?;
    let r = (packed >> 16) & 0xFF;
    let g = (packed >> 8) & 0xFF;
    let b = packed & 0xFF;
    Some(Rgba::opaque(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
    ))
}

/// Parse an `rgba(r, g, b, a)` style string into a normalized color.
///
/// Accepts `rgb(...)` or `rgba(...)` spelling but always requires exactly four
/// components. Components may be integers or decimals; whitespace between
/// tokens is ignored. On any mismatch the fixed fallback color with
/// [`FALLBACK_ALPHA`] is returned.
pub fn parse_rgba_str(s: &str) -> Rgba {
    match scan_rgba(s) {
        Some([r, g, b, a]) => Rgba::new(
            (r / 255.0).clamp(0.0, 1.0),
            (g / 255.0).clamp(0.0, 1.0),
            (b / 255.0).clamp(0.0, 1.0),
            a.clamp(0.0, 1.0),
        ),
        None => Rgba::new(0.0, 0.0, 0.0, FALLBACK_ALPHA),
    }
}

/// Byte-cursor scan of `rgba?( n , n , n , n )`.
fn scan_rgba(s: &str) -> Option<[f64; 4]> {
    let bytes = s.trim().as_bytes();
    let mut pos = 0usize;

    let eat_ws = |pos: &mut usize| {
        while *pos < bytes.len() && bytes[*pos].is_ascii_whitespace() {
            *pos += 1;
        }
    };
    let eat = |pos: &mut usize, expected: u8| -> Option<()> {
        if *pos < bytes.len() && bytes[*pos] == expected {
            *pos += 1;
            Some(())
        } else {
            None
        }
    };

    eat(&mut pos, b'r')?;
    eat(&mut pos, b'g')?;
    eat(&mut pos, b'b')?;
    // Optional 'a' in the function name.
    let _ = eat(&mut pos, b'a');
    eat_ws(&mut pos);
    eat(&mut pos, b'(')?;

    let mut out = [0.0f64; 4];
    for (i, slot) in out.iter_mut().enumerate() {
        eat_ws(&mut pos);
        let start = pos;
        if pos < bytes.len() && (bytes[pos] == b'+' || bytes[pos] == b'-') {
            pos += 1;
        }
        while pos < bytes.len() && (bytes[pos].is_ascii_digit() || bytes[pos] == b'.') {
            pos += 1;
        }
        if pos == start {
            return None;
        }
        *slot = s.trim()[start..pos].parse::<f64>().ok()?;
        eat_ws(&mut pos);
        if i < 3 {
            eat(&mut pos, b',')?;
        }
    }

    eat(&mut pos, b')')?;
    eat_ws(&mut pos);
    if pos != bytes.len() {
        return None;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn hex_parses_channels() {
        let c = hex_to_rgb("#FF0000");
        assert!(close(c.r, 1.0) && close(c.g, 0.0) && close(c.b, 0.0));
        assert!(close(c.a, 1.0));

        let c = hex_to_rgb("4F46E5");
        assert!(close(c.r, 79.0 / 255.0));
        assert!(close(c.g, 70.0 / 255.0));
        assert!(close(c.b, 229.0 / 255.0));
    }

    #[test]
    fn malformed_hex_falls_back() {
        let fallback = hex_to_rgb(DEFAULT_COLOR_HEX);
        assert_eq!(hex_to_rgb("#12"), fallback);
        assert_eq!(hex_to_rgb("not-a-color"), fallback);
        assert_eq!(hex_to_rgb("#GGGGGG"), fallback);
    }

    #[test]
    fn hex_with_alpha_clamps() {
        assert!(close(hex_to_rgba("#FFFFFF", 0.5).a, 0.5));
        assert!(close(hex_to_rgba("#FFFFFF", 7.0).a, 1.0));
        assert!(close(hex_to_rgba("#FFFFFF", -1.0).a, 0.0));
    }

    #[test]
    fn rgba_string_whitespace_and_decimals() {
        let c = parse_rgba_str("rgba(2, 6, 23, 0.16)");
        assert!(close(c.r, 2.0 / 255.0));
        assert!(close(c.a, 0.16));

        let c = parse_rgba_str("  rgba( 255 ,255,  255 , 1 )  ");
        assert!(close(c.r, 1.0) && close(c.a, 1.0));

        // rgb(...) spelling with four components still matches.
        let c = parse_rgba_str("rgb(0, 0, 0, 0.5)");
        assert!(close(c.a, 0.5));
    }

    #[test]
    fn rgba_string_requires_four_components() {
        let fallback = Rgba::new(0.0, 0.0, 0.0, FALLBACK_ALPHA);
        assert_eq!(parse_rgba_str("rgba(1, 2, 3)"), fallback);
        assert_eq!(parse_rgba_str("rgb(1, 2, 3)"), fallback);
        assert_eq!(parse_rgba_str("hsl(120, 50%, 50%)"), fallback);
        assert_eq!(parse_rgba_str(""), fallback);
        assert_eq!(parse_rgba_str("rgba(1, 2, 3, 0.5) trailing"), fallback);
    }

    #[test]
    fn valid_hex_check() {
        assert!(is_valid_hex("#FFFFFF"));
        assert!(is_valid_hex("0f172a"));
        assert!(!is_valid_hex("#FFF"));
        assert!(!is_valid_hex("#GGGGGG"));
    }
}
