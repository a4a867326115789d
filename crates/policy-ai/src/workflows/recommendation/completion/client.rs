use reqwest::Client;
use tracing::warn;

use super::{
    first_choice_text, CompletionError, CompletionGateway, CompletionRequest, CompletionResponse,
};
use crate::config::CompletionConfig;

const ERROR_DETAIL_LIMIT: usize = 200;

/// Thin wrapper around an OpenAI-compatible chat-completions endpoint. Built
/// once at startup from configuration and shared read-only; the inner reqwest
/// client is a cheap cloneable handle.
#[derive(Debug, Clone)]
pub struct HttpCompletionClient {
    http: Client,
    endpoint: String,
    api_key: String,
    max_attempts: u32,
}

impl HttpCompletionClient {
    pub fn from_config(config: &CompletionConfig) -> Result<Self, CompletionError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(CompletionError::MissingApiKey)?;

        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| CompletionError::Transport(err.to_string()))?;

        Ok(Self {
            http,
            endpoint: format!(
                "{}/chat/completions",
                config.base_url.trim_end_matches('/')
            ),
            api_key,
            max_attempts: config.max_attempts.max(1),
        })
    }

    async fn attempt(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|err| CompletionError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api {
                status: status.as_u16(),
                detail: clip_detail(detail),
            });
        }

        let payload: CompletionResponse = response
            .json()
            .await
            .map_err(|err| CompletionError::Payload(err.to_string()))?;

        first_choice_text(payload)
    }
}

#[async_trait::async_trait]
impl CompletionGateway for HttpCompletionClient {
    /// Transport faults are retried up to the configured attempt budget;
    /// provider and shape faults are returned on first sight.
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        let mut last_transport_fault = None;

        for attempt in 1..=self.max_attempts {
            match self.attempt(&request).await {
                Ok(text) => return Ok(text),
                Err(CompletionError::Transport(detail)) => {
                    warn!(attempt, %detail, "completion request transport fault");
                    last_transport_fault = Some(CompletionError::Transport(detail));
                }
                Err(other) => return Err(other),
            }
        }

        Err(last_transport_fault
            .unwrap_or_else(|| CompletionError::Transport("no attempts were made".to_string())))
    }
}

/// Provider error bodies can be arbitrarily large HTML pages; keep only a
/// prefix so error strings stay loggable.
fn clip_detail(detail: String) -> String {
    if detail.len() <= ERROR_DETAIL_LIMIT {
        return detail;
    }

    let mut end = ERROR_DETAIL_LIMIT;
    while !detail.is_char_boundary(end) {
        end -= 1;
    }

    format!("{}...", &detail[..end])
}
