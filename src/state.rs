use std::sync::Arc;

use crate::config::Config;
use crate::credentials::{CredentialSource, EnvCredential};
use crate::llm::{GeminiLLMFactory, LLMFactory};
use crate::translate::{TranslationHandler, TranslatorSettings};

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub translator: Arc<TranslationHandler>,
}

impl AppState {
    /// Wire the Gemini provider and the environment credential from `config`.
    pub fn new(config: Config) -> Self {
        let factory = Arc::new(GeminiLLMFactory::new(config.provider.base_url.clone()));
        let credentials = Arc::new(EnvCredential::new(config.provider.api_key_env.clone()));
        Self::with_parts(config, factory, credentials)
    }

    pub fn with_parts(
        config: Config,
        factory: Arc<dyn LLMFactory>,
        credentials: Arc<dyn CredentialSource>,
    ) -> Self {
        let translator = TranslationHandler::new(TranslatorSettings::from_config(&config), factory, credentials);
        Self::with_translator(config, translator)
    }

    pub fn with_translator(config: Config, translator: TranslationHandler) -> Self {
        Self {
            config: Arc::new(config),
            translator: Arc::new(translator),
        }
    }
}
