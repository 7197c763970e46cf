use async_trait::async_trait;

use super::types::{PromptChoice, PromptRequest};

/// Blocking user dialogs presented by the host application.
///
/// Presentation is asynchronous on every real platform, but from the gate's
/// perspective each call suspends until exactly one action has fired.
#[async_trait]
pub trait UserPrompt: Send + Sync {
    /// Present a two-action dialog and return the chosen action.
    async fn confirm(&self, request: PromptRequest<'_>) -> PromptChoice;

    /// Present a notice with a single dismiss action and wait for it.
    async fn notice(&self, title: &str, message: &str);
}
