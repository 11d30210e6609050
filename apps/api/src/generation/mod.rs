// Roadmap generation and chat.
// Implements: prompt assembly, the roadmap pipeline, chat replies, HTTP handlers.
// All generation calls go through llm_client — no direct provider calls here.

pub mod chat;
pub mod handlers;
pub mod prompt_assembler;
pub mod prompts;
pub mod roadmap;

use thiserror::Error;

use crate::llm_client::LlmError;

/// Why a generation request failed. None of these are retried.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Generation gateway failed: {0}")]
    Gateway(#[from] LlmError),

    #[error("Invalid JSON response from AI: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid roadmap structure: {0}")]
    InvalidStructure(String),
}

impl GenerationError {
    /// True when the provider answered but the answer was unusable.
    pub fn is_malformed_output(&self) -> bool {
        matches!(
            self,
            GenerationError::Parse(_) | GenerationError::InvalidStructure(_)
        )
    }
}
