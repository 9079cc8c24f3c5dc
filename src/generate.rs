//! Generation client — workflow description → raw model output → document.
//!
//! DESIGN
//! ======
//! One call issues exactly one chat request (system instruction + enhanced
//! user description) and returns the first completion's text verbatim. No
//! retries, no timeout beyond the HTTP transport's own. The pipeline wrapper
//! then sanitizes the raw text and assembles the diagram document.

use std::fmt::Write;
use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::document::{DiagramDocument, DocumentOptions};
use crate::llm::LlmChat;
use crate::llm::config::DEFAULT_LLM_MAX_TOKENS;
use crate::llm::types::{ChatRequest, LlmError, Message};
use crate::sanitize::{CleanedBody, Sanitizer};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Models offered by the CLI. Any identifier is accepted.
pub const SUGGESTED_MODELS: &[&str] = &["gpt-4o-mini", "gpt-4o", "gpt-4-turbo"];

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a Mermaid diagram expert. \
Turn the user's description into a reflective, detailed end-to-end workflow. \
Include all nodes, conditional branches, notes, subgraphs, classDefs—whatever makes it clear. \
Use underscores in multi-word IDs (no spaces). \
Return ONLY valid Mermaid code body—no markdown fences or extra commentary.";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// No usable credential or client; raised before any request is sent.
    #[error("LLM not configured: {0}")]
    Configuration(String),
    #[error("upstream generation failed: {0}")]
    Upstream(#[source] LlmError),
    #[error("workflow description must not be empty")]
    EmptyDescription,
    #[error("temperature {0} outside [0, 1]")]
    InvalidTemperature(f32),
}

impl crate::error::ErrorCode for GenerateError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "E_LLM_NOT_CONFIGURED",
            Self::Upstream(_) => "E_UPSTREAM",
            Self::EmptyDescription => "E_EMPTY_DESCRIPTION",
            Self::InvalidTemperature(_) => "E_INVALID_TEMPERATURE",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Upstream(e) if e.retryable())
    }
}

impl From<LlmError> for GenerateError {
    fn from(err: LlmError) -> Self {
        if err.is_configuration() { Self::Configuration(err.to_string()) } else { Self::Upstream(err) }
    }
}

/// Inputs for one generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub description: String,
    pub system_prompt: String,
    /// Sampling temperature in `[0, 1]`, passed through unmodified.
    pub temperature: f32,
    pub model: String,
}

impl GenerationRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// # Errors
    ///
    /// [`GenerateError::EmptyDescription`] for a blank description,
    /// [`GenerateError::InvalidTemperature`] outside `[0, 1]` (NaN included).
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.description.trim().is_empty() {
            return Err(GenerateError::EmptyDescription);
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(GenerateError::InvalidTemperature(self.temperature));
        }
        Ok(())
    }
}

/// Every stage of one generation, for callers that show or store them.
#[derive(Debug, Clone)]
pub struct Generation {
    pub raw: String,
    pub body: CleanedBody,
    pub document: DiagramDocument,
}

// =============================================================================
// PROMPT
// =============================================================================

/// Wrap a workflow description in the diagram-request template.
#[must_use]
pub fn build_user_prompt(description: &str) -> String {
    let mut prompt = String::with_capacity(description.len() + 512);
    let _ = writeln!(prompt, "Create a detailed Mermaid workflow diagram for:");
    let _ = writeln!(prompt, "{}", description.trim());
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Requirements:");
    let _ = writeln!(prompt, "- Use meaningful node IDs and descriptive labels");
    let _ = writeln!(prompt, "- Include decision points with yes/no branches where appropriate");
    let _ = writeln!(prompt, "- Group related steps into subgraphs");
    let _ = writeln!(prompt, "- Add helpful notes for key steps");
    let _ = writeln!(prompt, "- Use consistent styling with classDef");
    let _ = writeln!(prompt, "- Make the diagram read clearly from start to finish");
    prompt
}

// =============================================================================
// GENERATOR
// =============================================================================

pub struct Generator {
    llm: Option<Arc<dyn LlmChat>>,
    sanitizer: Sanitizer,
    max_tokens: u32,
}

impl Generator {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>) -> Self {
        Self { llm, sanitizer: Sanitizer::default(), max_tokens: DEFAULT_LLM_MAX_TOKENS }
    }

    #[must_use]
    pub fn with_sanitizer(mut self, sanitizer: Sanitizer) -> Self {
        self.sanitizer = sanitizer;
        self
    }

    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.llm.is_some()
    }

    /// Issue one chat request and return the first completion verbatim.
    ///
    /// # Errors
    ///
    /// Validation errors and a missing client fail before any request;
    /// provider failures surface as [`GenerateError::Upstream`].
    pub async fn generate_raw(&self, request: &GenerationRequest) -> Result<String, GenerateError> {
        let Some(llm) = &self.llm else {
            return Err(GenerateError::Configuration("no API credential available".into()));
        };
        request.validate()?;

        let chat = ChatRequest {
            model: request.model.clone(),
            system: request.system_prompt.clone(),
            messages: vec![Message::user(build_user_prompt(&request.description))],
            temperature: request.temperature,
            max_tokens: self.max_tokens,
        };

        info!(model = %request.model, temperature = request.temperature, "requesting diagram");
        let started = Instant::now();
        let response = llm.chat(&chat).await.map_err(GenerateError::from)?;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        info!(
            model = %response.model,
            stop_reason = %response.stop_reason,
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            elapsed_ms,
            "diagram generated"
        );

        response
            .first_text()
            .map(str::to_owned)
            .ok_or(GenerateError::Upstream(LlmError::EmptyCompletion))
    }

    /// Generate, sanitize, and assemble a diagram document.
    ///
    /// An empty cleaned body is not an error; the document then carries only
    /// its header lines.
    ///
    /// # Errors
    ///
    /// Same as [`Generator::generate_raw`].
    pub async fn generate(
        &self,
        request: &GenerationRequest,
        options: &DocumentOptions,
    ) -> Result<Generation, GenerateError> {
        let raw = self.generate_raw(request).await?;
        let body = self.sanitizer.sanitize(&raw);
        if body.is_empty() {
            warn!("generated output contained no diagram lines");
        }
        let document = DiagramDocument::assemble(options, &body);
        Ok(Generation { raw, body, document })
    }
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
