use std::sync::Arc;

use super::common::*;
use crate::workflows::recommendation::advisor::RecommendationAdvisor;
use crate::workflows::recommendation::completion::CompletionGateway;
use crate::workflows::recommendation::prompt::SYSTEM_PROMPT;

fn advisor<G>(gateway: Arc<G>) -> RecommendationAdvisor<G>
where
    G: CompletionGateway,
{
    let config = completion_config();
    RecommendationAdvisor::new(gateway, config.model, config.max_tokens)
}

#[tokio::test]
async fn successful_completion_text_is_returned_verbatim() {
    let gateway = Arc::new(StaticGateway::new(
        "1. Term life insurance with critical illness rider.",
    ));
    let advisor = advisor(gateway);

    let text = advisor.recommend(&validated(submission())).await;

    assert_eq!(text, "1. Term life insurance with critical illness rider.");
}

#[tokio::test]
async fn request_carries_system_prompt_profile_block_and_budget() {
    let gateway = Arc::new(RecordingGateway::default());
    let advisor = advisor(gateway.clone());

    advisor.recommend(&validated(risky_submission())).await;

    let requests = gateway.requests();
    assert_eq!(requests.len(), 1);

    let request = &requests[0];
    assert_eq!(request.model, "llama3-70b-8192");
    assert_eq!(request.max_tokens, 1000);
    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.messages[0].role, "system");
    assert_eq!(request.messages[0].content, SYSTEM_PROMPT);
    assert_eq!(request.messages[1].role, "user");

    let prompt = &request.messages[1].content;
    assert!(prompt.starts_with("User details:\n"));
    assert!(prompt.contains("- Age: 55\n"));
    assert!(prompt.contains("- Gender: Female\n"));
    assert!(prompt.contains("- Marital Status: Single\n"));
    assert!(prompt.contains("- Smoking Status: Yes\n"));
    assert!(prompt.contains("- Drinking Status: Yes\n"));
    assert!(prompt.contains("- Chronic Conditions: hypertension, diabetes\n"));
    assert!(prompt.contains("- Annual Income: 42000\n"));
    assert!(prompt.contains("- Occupation: Teacher\n"));
    assert!(prompt.contains("- Number of Dependents: 0\n"));
    assert!(prompt.contains("- Health Status: fair\n"));
    assert!(prompt.contains("- Family Health History: \n"));
    assert!(
        prompt.ends_with("Provide personalized insurance policy recommendations based on this data.")
    );
}

#[tokio::test]
async fn empty_choices_degrade_to_response_error_text() {
    let advisor = advisor(Arc::new(EmptyChoicesGateway));

    let text = advisor.recommend(&validated(submission())).await;

    assert!(text.starts_with("API response error: "));
    assert!(text.contains("no choices"));
}

#[tokio::test]
async fn missing_content_degrades_to_response_error_text() {
    let advisor = advisor(Arc::new(MissingContentGateway));

    let text = advisor.recommend(&validated(submission())).await;

    assert!(text.starts_with("API response error: "));
}

#[tokio::test]
async fn undecodable_payload_degrades_to_structure_error_text() {
    let advisor = advisor(Arc::new(PayloadMismatchGateway));

    let text = advisor.recommend(&validated(submission())).await;

    assert!(text.starts_with("API response structure error: "));
}

#[tokio::test]
async fn transport_fault_degrades_to_unexpected_error_text() {
    let advisor = advisor(Arc::new(TransportFailureGateway));

    let text = advisor.recommend(&validated(submission())).await;

    assert!(text.starts_with("An unexpected error occurred: "));
    assert!(text.contains("connection reset by peer"));
}
