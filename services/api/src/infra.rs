use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use policy_ai::workflows::recommendation::{
    CompletionError, CompletionGateway, CompletionRequest, Gender, HealthStatus, MaritalStatus,
    YesNo,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Offline gateway returning a fixed recommendation so demos and tests run
/// without provider credentials.
pub(crate) struct CannedCompletionGateway {
    reply: String,
}

impl CannedCompletionGateway {
    pub(crate) fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

impl Default for CannedCompletionGateway {
    fn default() -> Self {
        Self::new(
            "1. Comprehensive family health plan covering the listed chronic conditions.\n\
             2. Term life policy sized to replace ten years of income.\n\
             3. Critical illness rider for the hereditary risks in the family history.",
        )
    }
}

#[async_trait::async_trait]
impl CompletionGateway for CannedCompletionGateway {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, CompletionError> {
        Ok(self.reply.clone())
    }
}

pub(crate) fn parse_gender(raw: &str) -> Result<Gender, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "male" => Ok(Gender::Male),
        "female" => Ok(Gender::Female),
        "other" => Ok(Gender::Other),
        _ => Err(format!("expected Male, Female, or Other, got '{raw}'")),
    }
}

pub(crate) fn parse_marital_status(raw: &str) -> Result<MaritalStatus, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "single" => Ok(MaritalStatus::Single),
        "married" => Ok(MaritalStatus::Married),
        "divorced" => Ok(MaritalStatus::Divorced),
        "widowed" => Ok(MaritalStatus::Widowed),
        _ => Err(format!(
            "expected Single, Married, Divorced, or Widowed, got '{raw}'"
        )),
    }
}

pub(crate) fn parse_yes_no(raw: &str) -> Result<YesNo, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" => Ok(YesNo::Yes),
        "no" => Ok(YesNo::No),
        _ => Err(format!("expected Yes or No, got '{raw}'")),
    }
}

pub(crate) fn parse_health_status(raw: &str) -> Result<HealthStatus, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "good" => Ok(HealthStatus::Good),
        "fair" => Ok(HealthStatus::Fair),
        "poor" => Ok(HealthStatus::Poor),
        _ => Err(format!("expected good, fair, or poor, got '{raw}'")),
    }
}
