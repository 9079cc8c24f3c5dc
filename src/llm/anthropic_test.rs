use super::*;

fn make_response(content: serde_json::Value) -> String {
    serde_json::json!({
        "id": "msg_123",
        "type": "message",
        "role": "assistant",
        "content": content,
        "model": "claude-sonnet-4-5-20250929",
        "stop_reason": "end_turn",
        "usage": { "input_tokens": 100, "output_tokens": 50 }
    })
    .to_string()
}

#[test]
fn parse_text_response() {
    let json = make_response(serde_json::json!([
        { "type": "text", "text": "A[Submit]-->B[Approve]" }
    ]));
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.first_text(), Some("A[Submit]-->B[Approve]"));
    assert_eq!(resp.model, "claude-sonnet-4-5-20250929");
    assert_eq!(resp.stop_reason, "end_turn");
    assert_eq!(resp.input_tokens, 100);
    assert_eq!(resp.output_tokens, 50);
}

#[test]
fn parse_unknown_content_filtered() {
    let json = make_response(serde_json::json!([
        { "type": "text", "text": "hi" },
        { "type": "some_future_type", "data": {} }
    ]));
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.content.len(), 1);
}

#[test]
fn parse_thinking_blocks_are_filtered() {
    let json = make_response(serde_json::json!([
        { "type": "thinking", "thinking": "Let me think..." },
        { "type": "text", "text": "graph TD\nA-->B" }
    ]));
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.content, vec![ContentBlock::Text { text: "graph TD\nA-->B".into() }]);
}

#[test]
fn parse_missing_stop_reason_defaults_to_end_turn() {
    let json = serde_json::json!({
        "content": [{ "type": "text", "text": "A-->B" }],
        "model": "claude",
        "stop_reason": null,
        "usage": { "input_tokens": 1, "output_tokens": 1 }
    })
    .to_string();
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.stop_reason, "end_turn");
}

#[test]
fn parse_invalid_json() {
    let err = parse_response("not json").unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}

#[test]
fn request_body_carries_system_and_temperature() {
    let request = ChatRequest {
        model: "claude-sonnet-4-5-20250929".into(),
        system: "You are a Mermaid diagram expert.".into(),
        messages: vec![Message::user("draw it")],
        temperature: 0.25,
        max_tokens: 512,
    };
    let body = serde_json::to_value(ApiRequest::from(&request)).unwrap();
    assert_eq!(body["model"], "claude-sonnet-4-5-20250929");
    assert_eq!(body["system"], "You are a Mermaid diagram expert.");
    assert_eq!(body["max_tokens"], 512);
    assert_eq!(body["temperature"], 0.25);
    assert_eq!(body["messages"][0]["role"], "user");
    assert_eq!(body["messages"][0]["content"], "draw it");
}

#[test]
fn request_body_omits_empty_system() {
    let request = ChatRequest {
        model: "m".into(),
        system: String::new(),
        messages: vec![Message::user("x")],
        temperature: 0.0,
        max_tokens: 16,
    };
    let body = serde_json::to_value(ApiRequest::from(&request)).unwrap();
    assert!(body.get("system").is_none());
}
