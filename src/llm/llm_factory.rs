use reqwest::Client;
use tracing::debug;

use super::gemini_llm::GeminiLLM;
use super::llm_interface::{GenerativeModel, LLMError, LLMFactory};

/// Creates a fresh `GeminiLLM` per request.
///
/// Only the connection pool is shared; it is immutable and cheap to clone.
#[derive(Debug, Clone)]
pub struct GeminiLLMFactory {
    client: Client,
    base_url: String,
}

impl GeminiLLMFactory {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

impl LLMFactory for GeminiLLMFactory {
    fn create_model(&self, api_key: &str, model: &str) -> Result<Box<dyn GenerativeModel>, LLMError> {
        debug!("Creating Gemini client for model {}", model);
        let llm = GeminiLLM::new(self.client.clone(), &self.base_url, model, api_key)?;
        Ok(Box::new(llm))
    }
}
