//! Canned-reply provider for tests and offline demos.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::foundation::error::{PageforgeError, PageforgeResult};
use crate::provider::ContentProvider;

/// Replays a fixed queue of replies, one per `generate` call.
///
/// Replies starting with `ERR:` are returned as provider errors carrying the
/// remainder as the message, so failure paths can be scripted alongside
/// success paths.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new(replies: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Single canned reply.
    pub fn single(reply: impl Into<String>) -> Self {
        Self::new([reply.into()])
    }

    /// Provider whose next call fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::new([format!("ERR:{}", message.into())])
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        match self.prompts.lock() {
            Ok(prompts) => prompts.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Number of `generate` calls made.
    pub fn calls(&self) -> usize {
        self.prompts().len()
    }
}

#[async_trait]
impl ContentProvider for ScriptedProvider {
    async fn generate(&self, prompt: &str) -> PageforgeResult<String> {
        match self.prompts.lock() {
            Ok(mut prompts) => prompts.push(prompt.to_owned()),
            Err(poisoned) => poisoned.into_inner().push(prompt.to_owned()),
        }
        let next = match self.replies.lock() {
            Ok(mut replies) => replies.pop_front(),
            Err(poisoned) => poisoned.into_inner().pop_front(),
        };
        match next {
            Some(reply) => match reply.strip_prefix("ERR:") {
                Some(message) => Err(PageforgeError::provider(message)),
                None => Ok(reply),
            },
            None => Err(PageforgeError::provider("script exhausted")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_in_order_then_exhausts() {
        let provider = ScriptedProvider::new(["one", "two"]);
        assert_eq!(provider.generate("a").await.unwrap(), "one");
        assert_eq!(provider.generate("b").await.unwrap(), "two");
        assert!(provider.generate("c").await.is_err());
        assert_eq!(provider.prompts(), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn err_prefix_scripts_a_failure() {
        let provider = ScriptedProvider::failing("quota exceeded");
        let err = provider.generate("prompt").await.unwrap_err();
        assert_eq!(err.surface_message(), "quota exceeded");
    }
}
