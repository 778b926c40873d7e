//! Text-completion backends.

mod openai;

pub use openai::OpenAiBackend;

/// A pluggable text-completion backend.
pub trait CompletionBackend {
    /// Send one prompt and return the raw completion text.
    fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}
