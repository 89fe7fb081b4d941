//! Optional text-generation collaborator
//!
//! The interview runs entirely off the static bank; the LLM is only ever
//! asked to reword a question so it sounds like a human recruiter. It is a
//! capability interface with two implementations: the live HTTP client and
//! a stub that always fails, so every caller already handles degradation.

pub mod client;
pub mod reword;

use async_trait::async_trait;

use crate::core::error::{CoachError, Result};

pub use client::OpenAiCompatClient;
pub use reword::reword_question;

/// One chat message in the provider-neutral format
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system",
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user",
            content: content.into(),
        }
    }
}

/// Best-effort text generation. Callers must treat any error as "keep the
/// original phrasing"; a failure here never aborts a turn.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn generate(&self, messages: &[ChatMessage], temperature: f32) -> Result<String>;
}

/// Stub used by tests and the scripted scenario: generation always fails,
/// so the pipeline exercises its fallback path deterministically.
pub struct DisabledLlm;

#[async_trait]
impl LanguageModel for DisabledLlm {
    async fn generate(&self, _messages: &[ChatMessage], _temperature: f32) -> Result<String> {
        Err(CoachError::Llm("rewording disabled".into()))
    }
}

/// Pick the provider from configuration.
///
/// `LLM_PROVIDER=openai_compat` enables the HTTP client; anything else
/// (including unset) runs with rewording disabled.
pub fn build_llm() -> Box<dyn LanguageModel> {
    match std::env::var("LLM_PROVIDER").as_deref() {
        Ok("openai_compat") => Box::new(OpenAiCompatClient::from_env()),
        _ => Box::new(DisabledLlm),
    }
}
