//! Shared foundation types: errors and small geometry values.

/// Geometry re-exports and padding values.
pub mod core;
/// Unified error type and result alias.
pub mod error;
