//! Scripted [`LlmChat`] for tests: replays queued results and records requests.

use std::sync::Mutex;

use super::types::{ChatRequest, ChatResponse, ContentBlock, LlmChat, LlmError};

pub struct MockLlm {
    responses: Mutex<Vec<Result<ChatResponse, LlmError>>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockLlm {
    pub fn new(responses: Vec<Result<ChatResponse, LlmError>>) -> Self {
        Self { responses: Mutex::new(responses), requests: Mutex::new(Vec::new()) }
    }

    pub fn replying(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|text| Ok(text_response(text))).collect())
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl LlmChat for MockLlm {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() { Ok(text_response("")) } else { responses.remove(0) }
    }
}

pub fn text_response(text: &str) -> ChatResponse {
    ChatResponse {
        content: vec![ContentBlock::Text { text: text.into() }],
        model: "mock".into(),
        stop_reason: "end_turn".into(),
        input_tokens: 10,
        output_tokens: 5,
    }
}
