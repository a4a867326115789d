use std::sync::Arc;

use tracing::{error, info};

use super::completion::{ChatMessage, CompletionError, CompletionGateway, CompletionRequest};
use super::domain::UserProfile;
use super::prompt::{user_prompt, SYSTEM_PROMPT};

/// Fetches recommendation text from the injected completion gateway. Every
/// gateway fault degrades to a descriptive string substituted for the
/// recommendation, so the pipeline always answers; only the content of the
/// string signals the failure.
pub struct RecommendationAdvisor<G> {
    gateway: Arc<G>,
    model: String,
    max_tokens: u32,
}

impl<G> RecommendationAdvisor<G>
where
    G: CompletionGateway,
{
    pub fn new(gateway: Arc<G>, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            gateway,
            model: model.into(),
            max_tokens,
        }
    }

    pub async fn recommend(&self, profile: &UserProfile) -> String {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(user_prompt(profile)),
            ],
            max_tokens: self.max_tokens,
        };

        info!(model = %self.model, "requesting policy recommendations");

        match self.gateway.complete(request).await {
            Ok(text) => {
                info!("recommendations extracted from completion response");
                text
            }
            Err(err @ (CompletionError::EmptyChoices | CompletionError::MissingContent)) => {
                error!(%err, "completion response missing expected fields");
                format!("API response error: {err}")
            }
            Err(err @ CompletionError::Payload(_)) => {
                error!(%err, "completion response had unexpected structure");
                format!("API response structure error: {err}")
            }
            Err(err) => {
                error!(%err, "completion request failed");
                format!("An unexpected error occurred: {err}")
            }
        }
    }
}
