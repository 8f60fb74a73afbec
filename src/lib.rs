//! Pageforge composes token-driven landing pages on a host design canvas and
//! overlays generated marketing copy onto them.
//!
//! The public API is session-oriented:
//!
//! - Resolve design tokens through a [`TokenResolver`]
//! - Lay down the page template with a [`SceneGraphBuilder`] on any
//!   [`DesignCanvas`]
//! - Drive prompt → provider → overlay with a [`GenerationSession`]
//!
//! Every canvas write is addressed by stable anchor names, so the same
//! template and overlay logic run against the bundled [`InMemoryCanvas`] or
//! any host that implements the canvas contract.
#![forbid(unsafe_code)]

/// Host canvas contract and the in-memory reference host.
pub mod canvas;
/// Hex and `rgba(...)` parsing with fail-soft fallbacks.
pub mod color;
/// Overlaying generated payloads onto a built page.
pub mod content;
mod foundation;
/// Prompting, status reporting and the generation state machine.
pub mod generate;
/// Content providers (Gemini, scripted).
pub mod provider;
/// Template assembly and anchor registry.
pub mod scene;
/// Token schema, validation and resolution.
pub mod tokens;

pub use crate::foundation::core::{Affine, Edges, Point, Rect, Size, Vec2};
pub use crate::foundation::error::{PageforgeError, PageforgeResult};

pub use crate::canvas::{
    Capabilities, DesignCanvas, FontDescriptor, InMemoryCanvas, NodeId, StylePatch,
};
pub use crate::content::{ApplyStats, ContentPayload, apply_content};
pub use crate::generate::{
    GenerationReport, GenerationSession, GenerationState, RecordingStatusSink, StatusSink,
    StatusUpdate,
};
pub use crate::provider::{ContentProvider, GeminiProvider, ScriptedProvider};
pub use crate::scene::{AnchorFingerprint, AnchorIndex, BuiltScene, SceneGraphBuilder};
pub use crate::tokens::{TokenResolver, TokenSchema};
