use std::sync::Arc;

use serde_json::json;
use tracing::info;

use super::advisor::RecommendationAdvisor;
use super::assessment::{explanations, health_risk_estimate, risk_score};
use super::completion::CompletionGateway;
use super::domain::{PolicyRecommendation, ProfileSubmission};
use super::validation::{ProfileValidationError, ProfileValidator};
use crate::config::CompletionConfig;

/// Service composing the validator, scoring rules, and completion advisor.
pub struct RecommendationService<G> {
    validator: ProfileValidator,
    advisor: RecommendationAdvisor<G>,
}

impl<G> RecommendationService<G>
where
    G: CompletionGateway,
{
    pub fn new(gateway: Arc<G>, config: &CompletionConfig) -> Self {
        Self {
            validator: ProfileValidator,
            advisor: RecommendationAdvisor::new(gateway, config.model.clone(), config.max_tokens),
        }
    }

    /// Run the full pipeline for one submission: validate, score, explain,
    /// estimate, and fetch recommendation text. The completion step never
    /// fails; a gateway fault yields degraded text in `recommendations`.
    pub async fn process(
        &self,
        submission: ProfileSubmission,
    ) -> Result<PolicyRecommendation, RecommendationError> {
        let profile = self.validator.validate(submission)?;

        let risk_score = risk_score(&profile);
        let explanations = explanations(&profile);
        let health_risk_prediction = health_risk_estimate(&profile);
        info!(
            risk_score,
            explanation_count = explanations.len(),
            "profile validated and scored"
        );

        let recommendations = self.advisor.recommend(&profile).await;

        Ok(PolicyRecommendation {
            recommendations,
            risk_score,
            explanations,
            health_risk_prediction,
        })
    }
}

/// Error raised by the recommendation service.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error(transparent)]
    Validation(#[from] ProfileValidationError),
    #[error("{0}")]
    Unexpected(String),
}

impl RecommendationError {
    /// Error record shape shared by the HTTP layer and CLI output: an
    /// `error` key and nothing else, never a partial recommendation.
    pub fn error_payload(&self) -> serde_json::Value {
        json!({ "error": self.to_string() })
    }
}
