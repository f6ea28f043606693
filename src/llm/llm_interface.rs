use async_trait::async_trait;
use thiserror::Error;

/// Failures reported by a generation provider.
///
/// Providers only hand back a message; `ErrorClassifier` decides what it means.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LLMError {
    /// The client could not be constructed from the credential and model.
    #[error("{0}")]
    Init(String),
    /// The generation request itself failed.
    #[error("{0}")]
    Invocation(String),
}

impl LLMError {
    pub fn message(&self) -> &str {
        match self {
            LLMError::Init(message) | LLMError::Invocation(message) => message,
        }
    }
}

/// A model that answers a single-turn prompt with generated text.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate_content(&self, prompt: &str) -> Result<String, LLMError>;
}

/// Builds a model client for one request.
///
/// The credential is passed in explicitly on every call so implementations
/// hold no per-caller state.
pub trait LLMFactory: Send + Sync {
    fn create_model(&self, api_key: &str, model: &str) -> Result<Box<dyn GenerativeModel>, LLMError>;
}
