use std::sync::Arc;

use futures::StreamExt;

use aarogya_domain::services::{ChatServiceError, ChatServiceTrait};
use aarogya_domain::testing::MockChatService;

#[test]
fn mock_service_coerces_to_trait_object() {
    let mock_service = Arc::new(MockChatService);
    let _: Arc<dyn ChatServiceTrait + Send + Sync> = mock_service;
}

#[tokio::test]
async fn empty_message_is_rejected() {
    let service = MockChatService;
    let result = service.symptom_stream("").await;
    assert!(matches!(result, Err(ChatServiceError::Validation(_))));
}

#[tokio::test]
async fn stream_tokens_arrive_in_order() {
    let service = MockChatService;
    let stream = service.symptom_stream("I have a headache").await.unwrap();

    let tokens: Vec<String> = stream.map(|chunk| chunk.unwrap()).collect().await;
    assert!(tokens.len() > 1);
    assert!(tokens[0].starts_with("Symptom(s):"));
}

#[tokio::test]
async fn support_reply_names_the_assistant() {
    let service = MockChatService;
    let reply = service.support_reply("I feel overwhelmed").await.unwrap();

    assert_eq!(reply.assistant.name, "Asha");
    assert!(!reply.coping_tips.is_empty());
    assert!(!reply.crisis_check);
}
