use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::{debug, warn};

use super::completion::CompletionGateway;
use super::domain::ProfileSubmission;
use super::service::{RecommendationError, RecommendationService};

/// Router builder exposing the recommendation pipeline over HTTP.
pub fn recommendation_router<G>(service: Arc<RecommendationService<G>>) -> Router
where
    G: CompletionGateway + 'static,
{
    Router::new()
        .route("/", get(status_handler))
        .route(
            "/inference/policy-recommendation",
            post(recommend_handler::<G>),
        )
        .with_state(service)
}

pub(crate) async fn status_handler() -> Json<serde_json::Value> {
    debug!("status route called");
    Json(json!({ "status": "API is running" }))
}

pub(crate) async fn recommend_handler<G>(
    State(service): State<Arc<RecommendationService<G>>>,
    Json(submission): Json<ProfileSubmission>,
) -> Response
where
    G: CompletionGateway + 'static,
{
    match service.process(submission).await {
        Ok(recommendation) => {
            let payload = json!({ "recommendation": recommendation });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => {
            warn!(%err, "recommendation request failed");
            error_response(err)
        }
    }
}

pub(crate) fn error_response(err: RecommendationError) -> Response {
    match err {
        RecommendationError::Validation(_) => {
            (StatusCode::UNPROCESSABLE_ENTITY, Json(err.error_payload())).into_response()
        }
        RecommendationError::Unexpected(message) => {
            let payload = json!({
                "detail": format!("Failed to process recommendation for user data: {message}"),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
