use super::*;
use crate::error::ErrorCode;

// =============================================================================
// LlmError::error_code
// =============================================================================

#[test]
fn error_code_missing_api_key() {
    let err = LlmError::MissingApiKey { var: "OPENAI_API_KEY".into() };
    assert_eq!(err.error_code(), "E_MISSING_API_KEY");
    assert_eq!(err.to_string(), "missing API key: env var OPENAI_API_KEY not set");
}

#[test]
fn error_code_api_response() {
    let err = LlmError::ApiResponse { status: 500, body: "oops".into() };
    assert_eq!(err.error_code(), "E_API_RESPONSE");
}

#[test]
fn error_code_empty_completion() {
    assert_eq!(LlmError::EmptyCompletion.error_code(), "E_EMPTY_COMPLETION");
}

// =============================================================================
// LlmError::retryable
// =============================================================================

#[test]
fn retryable_transport_and_server_errors() {
    assert!(LlmError::ApiRequest("conn refused".into()).retryable());
    assert!(LlmError::ApiResponse { status: 429, body: "rate limited".into() }.retryable());
    assert!(LlmError::ApiResponse { status: 503, body: "unavailable".into() }.retryable());
}

#[test]
fn not_retryable_client_errors() {
    assert!(!LlmError::ApiResponse { status: 400, body: "bad request".into() }.retryable());
    assert!(!LlmError::ApiResponse { status: 401, body: "unauthorized".into() }.retryable());
    assert!(!LlmError::ApiParse("json".into()).retryable());
    assert!(!LlmError::MissingApiKey { var: "KEY".into() }.retryable());
}

// =============================================================================
// LlmError::is_configuration
// =============================================================================

#[test]
fn configuration_errors_are_flagged() {
    assert!(LlmError::MissingApiKey { var: "KEY".into() }.is_configuration());
    assert!(LlmError::ConfigParse("bad".into()).is_configuration());
    assert!(LlmError::HttpClientBuild("tls".into()).is_configuration());
    assert!(!LlmError::ApiRequest("timeout".into()).is_configuration());
    assert!(!LlmError::EmptyCompletion.is_configuration());
}

// =============================================================================
// ContentBlock serde
// =============================================================================

#[test]
fn content_block_text_deserializes() {
    let block: ContentBlock = serde_json::from_value(serde_json::json!({ "type": "text", "text": "A-->B" })).unwrap();
    assert_eq!(block, ContentBlock::Text { text: "A-->B".into() });
}

#[test]
fn content_block_unknown_type_deserializes_to_unknown() {
    let block: ContentBlock =
        serde_json::from_value(serde_json::json!({ "type": "redacted_thinking", "data": "x" })).unwrap();
    assert_eq!(block, ContentBlock::Unknown);
}

// =============================================================================
// ChatResponse::first_text
// =============================================================================

fn response(content: Vec<ContentBlock>) -> ChatResponse {
    ChatResponse { content, model: "mock".into(), stop_reason: "end_turn".into(), input_tokens: 0, output_tokens: 0 }
}

#[test]
fn content_block_thinking_deserializes_to_unknown() {
    let block: ContentBlock =
        serde_json::from_value(serde_json::json!({ "type": "thinking", "thinking": "hmm" })).unwrap();
    assert_eq!(block, ContentBlock::Unknown);
}

#[test]
fn first_text_skips_non_text_blocks() {
    let resp = response(vec![
        ContentBlock::Unknown,
        ContentBlock::Text { text: "first".into() },
        ContentBlock::Text { text: "second".into() },
    ]);
    assert_eq!(resp.first_text(), Some("first"));
}

#[test]
fn first_text_none_without_text_blocks() {
    let resp = response(vec![ContentBlock::Unknown]);
    assert_eq!(resp.first_text(), None);
}

#[test]
fn message_user_sets_role() {
    let msg = Message::user("hello");
    assert_eq!(msg.role, "user");
    assert_eq!(msg.content, "hello");
}
