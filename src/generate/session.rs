//! One canvas-bound generation session: prompt in, populated page out.

use tracing::{debug, warn};

use crate::canvas::{Capabilities, DesignCanvas};
use crate::content::{ApplyStats, ContentPayload, apply_content};
use crate::foundation::error::{PageforgeError, PageforgeResult};
use crate::generate::prompt::build_prompt;
use crate::generate::status::{GenerationState, StatusSink, StatusUpdate};
use crate::provider::ContentProvider;
use crate::scene::{BuiltScene, SceneGraphBuilder};
use crate::tokens::TokenResolver;

/// Status line for a prompt that is empty or whitespace.
pub const EMPTY_PROMPT_MESSAGE: &str = "Describe the landing page you want before generating.";
/// Status line for a provider with no credentials.
pub const UNCONFIGURED_PROVIDER_MESSAGE: &str =
    "Content provider credentials are not configured.";
/// Status line for a completed run.
pub const SUCCESS_MESSAGE: &str = "Landing page generated.";

/// Outcome of one run. Terminal state plus whatever the run produced before
/// finishing; a failed run reports no scene even when partial mutations were
/// left behind.
#[derive(Debug)]
pub struct GenerationReport {
    pub state: GenerationState,
    pub message: String,
    pub scene: Option<BuiltScene>,
    pub stats: Option<ApplyStats>,
}

/// Drives the full generate flow against one canvas.
///
/// The session exclusively borrows its canvas, so a second command over the
/// same canvas cannot start while a run is in flight. A terminal state ends
/// the run only; the session value stays usable for the next command.
pub struct GenerationSession<'a, C: DesignCanvas, P: ContentProvider> {
    canvas: &'a mut C,
    provider: &'a P,
    tokens: &'a TokenResolver,
    theme: String,
    caps: Capabilities,
}

impl<'a, C: DesignCanvas, P: ContentProvider> GenerationSession<'a, C, P> {
    /// Bind a session to a canvas. Host capabilities are read once here and
    /// trusted for the session's lifetime.
    pub fn new(
        canvas: &'a mut C,
        provider: &'a P,
        tokens: &'a TokenResolver,
        theme: impl Into<String>,
    ) -> Self {
        let caps = canvas.capabilities();
        Self {
            canvas,
            provider,
            tokens,
            theme: theme.into(),
            caps,
        }
    }

    /// Run one generate command. Every state transition is reported through
    /// `sink`; the returned report repeats the terminal state and message.
    #[tracing::instrument(skip_all)]
    pub async fn run(&mut self, prompt: &str, sink: &mut dyn StatusSink) -> GenerationReport {
        // Guards fire before Loading: no status traffic, no network.
        if prompt.trim().is_empty() {
            return self.fail(sink, PageforgeError::validation(EMPTY_PROMPT_MESSAGE));
        }
        if !self.provider.is_configured() {
            return self.fail(
                sink,
                PageforgeError::validation(UNCONFIGURED_PROVIDER_MESSAGE),
            );
        }
        match self.drive(prompt, sink).await {
            Ok(report) => report,
            Err(err) => self.fail(sink, err),
        }
    }

    async fn drive(
        &mut self,
        prompt: &str,
        sink: &mut dyn StatusSink,
    ) -> PageforgeResult<GenerationReport> {
        emit(sink, GenerationState::Loading, "Preparing your landing page...");
        let rendered = build_prompt(prompt);

        emit(
            sink,
            GenerationState::Requesting,
            "Requesting landing page content...",
        );
        let reply = self.provider.generate(&rendered).await?;
        let payload = ContentPayload::from_reply(&reply)?;

        // The page is built inside this transition; a reply rejected above
        // therefore leaves the canvas untouched.
        emit(sink, GenerationState::Applying, "Applying generated content...");
        let scene = SceneGraphBuilder::new(self.canvas, self.tokens, self.theme.as_str())
            .build()
            .await?;
        let stats = apply_content(self.canvas, scene.root, &payload).await?;
        debug!(
            texts = stats.texts_set,
            missed = stats.anchors_missed,
            "content applied"
        );

        if self.caps.selection {
            self.canvas.set_selection(&[scene.root]);
        }
        if self.caps.scroll_into_view {
            self.canvas.scroll_into_view(&[scene.root]);
        }
        if self.caps.notify {
            self.canvas.notify(SUCCESS_MESSAGE);
        }
        emit(sink, GenerationState::Success, SUCCESS_MESSAGE);
        Ok(GenerationReport {
            state: GenerationState::Success,
            message: SUCCESS_MESSAGE.to_owned(),
            scene: Some(scene),
            stats: Some(stats),
        })
    }

    fn fail(&mut self, sink: &mut dyn StatusSink, err: PageforgeError) -> GenerationReport {
        let message = err.surface_message();
        warn!(error = %err, "generation run failed");
        if self.caps.notify {
            self.canvas.notify(&message);
        }
        emit(sink, GenerationState::Error, &message);
        GenerationReport {
            state: GenerationState::Error,
            message,
            scene: None,
            stats: None,
        }
    }
}

fn emit(sink: &mut dyn StatusSink, state: GenerationState, message: &str) {
    sink.status(&StatusUpdate::new(state, message));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::InMemoryCanvas;
    use crate::generate::status::RecordingStatusSink;
    use crate::provider::ScriptedProvider;

    #[tokio::test]
    async fn blank_prompt_goes_straight_to_error_without_network() {
        let mut canvas = InMemoryCanvas::new();
        let provider = ScriptedProvider::single("{}");
        let tokens = TokenResolver::builtin().unwrap();
        let mut session = GenerationSession::new(&mut canvas, &provider, &tokens, "dark");
        let mut sink = RecordingStatusSink::new();

        let report = session.run("   \n", &mut sink).await;
        assert_eq!(report.state, GenerationState::Error);
        assert_eq!(report.message, EMPTY_PROMPT_MESSAGE);
        assert_eq!(sink.states(), vec![GenerationState::Error]);
        assert_eq!(provider.calls(), 0);
        assert_eq!(canvas.page_roots(), Vec::new());
    }
}
