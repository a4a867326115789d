mod client;

pub use client::HttpCompletionClient;

use serde::{Deserialize, Serialize};

/// One chat message in an OpenAI-compatible completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system",
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user",
            content: content.into(),
        }
    }
}

/// Request body for the chat-completions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

/// The response fields the pipeline relies on; everything else the provider
/// returns is ignored.
#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

/// Faults raised by completion gateways, grouped by how the caller recovers:
/// `EmptyChoices`/`MissingContent` are shape mismatches in an otherwise valid
/// response, `Payload` is an undecodable body, and the rest are transport or
/// provider failures.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("completion response contained no choices")]
    EmptyChoices,
    #[error("completion choice carried no message content")]
    MissingContent,
    #[error("could not decode completion payload: {0}")]
    Payload(String),
    #[error("completion request failed: {0}")]
    Transport(String),
    #[error("completion provider returned status {status}: {detail}")]
    Api { status: u16, detail: String },
    #[error("no completion API key configured; set APP_LLM_API_KEY")]
    MissingApiKey,
}

/// Gateway trait over the external completion provider so services stay
/// testable without network access.
#[async_trait::async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Issue one completion request and return the first choice's message
    /// content verbatim.
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError>;
}

pub(crate) fn first_choice_text(response: CompletionResponse) -> Result<String, CompletionError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(CompletionError::EmptyChoices)?;

    choice.message.content.ok_or(CompletionError::MissingContent)
}
