use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::response::Response;
use serde_json::Value;

use crate::config::CompletionConfig;
use crate::workflows::recommendation::completion::{
    CompletionError, CompletionGateway, CompletionRequest,
};
use crate::workflows::recommendation::domain::{
    Gender, HealthStatus, MaritalStatus, ProfileSubmission, UserProfile, YesNo,
};
use crate::workflows::recommendation::validation::ProfileValidator;
use crate::workflows::recommendation::{recommendation_router, RecommendationService};

pub(super) fn completion_config() -> CompletionConfig {
    CompletionConfig {
        api_key: Some("gsk-test".to_string()),
        base_url: "https://api.groq.com/openai/v1".to_string(),
        model: "llama3-70b-8192".to_string(),
        max_tokens: 1000,
        request_timeout: Duration::from_secs(5),
        max_attempts: 2,
    }
}

/// The intake form's documented example profile.
pub(super) fn submission() -> ProfileSubmission {
    ProfileSubmission {
        age: 30,
        gender: Gender::Male,
        marital_status: MaritalStatus::Married,
        smoking_status: YesNo::No,
        drinking_status: YesNo::Yes,
        chronic_conditions: "hypertension, diabetes".to_string(),
        annual_income: 60000.0,
        occupation: "Engineer".to_string(),
        dependents: 2,
        health_status: HealthStatus::Good,
        family_health_history: "heart disease, diabetes".to_string(),
    }
}

/// Profile firing every scoring rule at once.
pub(super) fn risky_submission() -> ProfileSubmission {
    ProfileSubmission {
        age: 55,
        gender: Gender::Female,
        marital_status: MaritalStatus::Single,
        smoking_status: YesNo::Yes,
        drinking_status: YesNo::Yes,
        chronic_conditions: "hypertension, diabetes".to_string(),
        annual_income: 42000.0,
        occupation: "Teacher".to_string(),
        dependents: 0,
        health_status: HealthStatus::Fair,
        family_health_history: String::new(),
    }
}

/// Profile firing no scoring rule at all.
pub(super) fn quiet_submission() -> ProfileSubmission {
    ProfileSubmission {
        age: 25,
        gender: Gender::Other,
        marital_status: MaritalStatus::Married,
        smoking_status: YesNo::No,
        drinking_status: YesNo::No,
        chronic_conditions: String::new(),
        annual_income: 52000.0,
        occupation: "Accountant".to_string(),
        dependents: 0,
        health_status: HealthStatus::Good,
        family_health_history: String::new(),
    }
}

pub(super) fn validated(submission: ProfileSubmission) -> UserProfile {
    ProfileValidator
        .validate(submission)
        .expect("fixture submission validates")
}

pub(super) fn build_service<G>(gateway: G) -> RecommendationService<G>
where
    G: CompletionGateway,
{
    RecommendationService::new(Arc::new(gateway), &completion_config())
}

pub(super) fn router_with_gateway<G>(gateway: G) -> axum::Router
where
    G: CompletionGateway + 'static,
{
    recommendation_router(Arc::new(build_service(gateway)))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Gateway returning a fixed reply.
pub(super) struct StaticGateway {
    pub(super) reply: String,
}

impl StaticGateway {
    pub(super) fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait::async_trait]
impl CompletionGateway for StaticGateway {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, CompletionError> {
        Ok(self.reply.clone())
    }
}

/// Gateway capturing every request so tests can assert on the prompt.
#[derive(Default)]
pub(super) struct RecordingGateway {
    requests: Mutex<Vec<CompletionRequest>>,
}

impl RecordingGateway {
    pub(super) fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().expect("request mutex poisoned").clone()
    }
}

#[async_trait::async_trait]
impl CompletionGateway for RecordingGateway {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        self.requests
            .lock()
            .expect("request mutex poisoned")
            .push(request);
        Ok("Consider a comprehensive family health plan.".to_string())
    }
}

pub(super) struct EmptyChoicesGateway;

#[async_trait::async_trait]
impl CompletionGateway for EmptyChoicesGateway {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, CompletionError> {
        Err(CompletionError::EmptyChoices)
    }
}

pub(super) struct MissingContentGateway;

#[async_trait::async_trait]
impl CompletionGateway for MissingContentGateway {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, CompletionError> {
        Err(CompletionError::MissingContent)
    }
}

pub(super) struct PayloadMismatchGateway;

#[async_trait::async_trait]
impl CompletionGateway for PayloadMismatchGateway {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, CompletionError> {
        Err(CompletionError::Payload(
            "expected struct CompletionResponse, found array".to_string(),
        ))
    }
}

pub(super) struct TransportFailureGateway;

#[async_trait::async_trait]
impl CompletionGateway for TransportFailureGateway {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, CompletionError> {
        Err(CompletionError::Transport(
            "connection reset by peer".to_string(),
        ))
    }
}
