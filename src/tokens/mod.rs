//! Design tokens: the schema model and the resolver over it.

/// Token resolution with deterministic fallbacks.
pub mod resolve;
/// Serde schema model and validation.
pub mod schema;

pub use resolve::{DEFAULT_SHADE, DEFAULT_THEME, TokenResolver};
pub use schema::{ColorGroup, ShadowTokens, TokenSchema, TypeStyle, Typography};
