//! Personalized policy recommendation pipeline: intake validation, additive
//! risk scoring, rule-based explanations, and completion-backed
//! recommendation text.

pub mod advisor;
pub mod assessment;
pub mod completion;
pub mod domain;
pub mod prompt;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use advisor::RecommendationAdvisor;
pub use assessment::{explanations, health_risk_estimate, risk_score, HEALTH_RISK_ESTIMATE};
pub use completion::{
    ChatMessage, CompletionError, CompletionGateway, CompletionRequest, HttpCompletionClient,
};
pub use domain::{
    Gender, HealthStatus, MaritalStatus, PolicyRecommendation, ProfileSubmission, UserProfile,
    YesNo,
};
pub use prompt::{user_prompt, SYSTEM_PROMPT};
pub use router::recommendation_router;
pub use service::{RecommendationError, RecommendationService};
pub use validation::{ProfileValidationError, ProfileValidator};
