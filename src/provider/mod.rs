//! Content providers: where generated copy comes from.

pub mod gemini;
pub mod scripted;

use async_trait::async_trait;

use crate::foundation::error::PageforgeResult;

pub use gemini::GeminiProvider;
pub use scripted::ScriptedProvider;

/// Source of raw model replies.
///
/// `generate` is the orchestrator's only network suspension point. The reply
/// is returned raw; extracting and parsing the payload out of it is the
/// caller's job.
#[async_trait]
pub trait ContentProvider {
    /// Request one reply for a fully rendered prompt.
    async fn generate(&self, prompt: &str) -> PageforgeResult<String>;

    /// Whether the provider has the credentials it needs. Sessions refuse to
    /// start a run against an unconfigured provider.
    fn is_configured(&self) -> bool {
        true
    }
}
