use std::sync::Arc;
use std::time::Instant;

use uuid::Uuid;

use super::error::TranslateError;
use super::interface::{TranslationRequest, TranslationResult};
use super::prompt::build_prompt;
use crate::config::Config;
use crate::credentials::CredentialSource;
use crate::diagnostics::{DiagnosticEvent, DiagnosticsSink, TracingSink};
use crate::languages;
use crate::llm::{ErrorClassifier, ErrorKind, LLMError, LLMFactory, SubstringClassifier};

#[derive(Debug, Clone)]
pub struct TranslatorSettings {
    pub model: String,
    pub max_text_length: usize,
    /// Report `processingTime` and log every step.
    pub debug: bool,
}

impl TranslatorSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            model: config.provider.model.clone(),
            max_text_length: config.translation.max_text_length,
            debug: config.mode.is_debug(),
        }
    }
}

/// Validates a request, asks the provider for a translation and shapes the
/// result. Holds no per-request state; one instance serves every request.
pub struct TranslationHandler {
    settings: TranslatorSettings,
    factory: Arc<dyn LLMFactory>,
    credentials: Arc<dyn CredentialSource>,
    classifier: Arc<dyn ErrorClassifier>,
    diagnostics: Arc<dyn DiagnosticsSink>,
}

impl TranslationHandler {
    pub fn new(
        settings: TranslatorSettings,
        factory: Arc<dyn LLMFactory>,
        credentials: Arc<dyn CredentialSource>,
    ) -> Self {
        let diagnostics = Arc::new(TracingSink::new(settings.debug));
        Self {
            settings,
            factory,
            credentials,
            classifier: Arc::new(SubstringClassifier),
            diagnostics,
        }
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn ErrorClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticsSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn credentials(&self) -> &dyn CredentialSource {
        self.credentials.as_ref()
    }

    /// Run the whole pipeline on a raw request body.
    pub async fn translate(&self, body: &[u8]) -> Result<TranslationResult, TranslateError> {
        let request_id = Uuid::new_v4();
        let started = Instant::now();
        self.diagnostics.record(
            request_id,
            &DiagnosticEvent::RequestReceived {
                body_bytes: body.len(),
            },
        );

        let result = self.run(request_id, body, started).await;
        self.record_outcome(request_id, started, &result);
        result
    }

    /// Report a request the transport refused before its body reached
    /// `translate`, and hand the error back for the response.
    pub fn reject(&self, error: TranslateError) -> TranslateError {
        self.record_failure(Uuid::new_v4(), Instant::now(), &error);
        error
    }

    fn record_outcome(
        &self,
        request_id: Uuid,
        started: Instant,
        result: &Result<TranslationResult, TranslateError>,
    ) {
        match result {
            Ok(result) => self.diagnostics.record(
                request_id,
                &DiagnosticEvent::Completed {
                    elapsed: started.elapsed(),
                    translation_length: result.translation.chars().count(),
                },
            ),
            Err(err) => self.record_failure(request_id, started, err),
        }
    }

    fn record_failure(&self, request_id: Uuid, started: Instant, err: &TranslateError) {
        let details = err.details();
        self.diagnostics.record(
            request_id,
            &DiagnosticEvent::Failed {
                code: err.code(),
                details: &details,
                elapsed: started.elapsed(),
            },
        );
    }

    async fn run(
        &self,
        request_id: Uuid,
        body: &[u8],
        started: Instant,
    ) -> Result<TranslationResult, TranslateError> {
        let value = TranslationRequest::parse_body(body)?;
        self.diagnostics.record(request_id, &DiagnosticEvent::BodyParsed);

        let request = TranslationRequest::from_value(&value, self.settings.max_text_length)?;
        self.diagnostics.record(
            request_id,
            &DiagnosticEvent::FieldsValidated {
                text_length: request.text.chars().count(),
                target_language: &request.target_language,
            },
        );

        let api_key = self.credentials.api_key();
        self.diagnostics.record(
            request_id,
            &DiagnosticEvent::CredentialChecked {
                present: api_key.is_some(),
            },
        );
        let api_key = api_key.ok_or_else(|| TranslateError::ApiKeyMissing {
            var: self.credentials.name().to_string(),
        })?;

        let mut result = self.translate_request(request_id, request, &api_key).await?;
        if self.settings.debug {
            result.processing_time = Some(started.elapsed().as_millis() as u64);
        }
        Ok(result)
    }

    /// Resolve the language, call the provider and trim its answer.
    async fn translate_request(
        &self,
        request_id: Uuid,
        request: TranslationRequest,
        api_key: &str,
    ) -> Result<TranslationResult, TranslateError> {
        let display_name = languages::display_name(&request.target_language);
        self.diagnostics.record(
            request_id,
            &DiagnosticEvent::LanguageResolved {
                input: &request.target_language,
                display_name,
            },
        );

        let prompt = build_prompt(display_name, &request.text);
        let model = self
            .factory
            .create_model(api_key, &self.settings.model)
            .map_err(|e| self.classify(e))?;

        self.diagnostics.record(
            request_id,
            &DiagnosticEvent::ProviderCalled {
                model: &self.settings.model,
                prompt_length: prompt.chars().count(),
            },
        );
        let generated = model
            .generate_content(&prompt)
            .await
            .map_err(|e| self.classify(e))?;

        let target_language = display_name.to_string();
        Ok(TranslationResult {
            translation: generated.trim().to_string(),
            source_text: request.text,
            target_language,
            processing_time: None,
        })
    }

    fn classify(&self, error: LLMError) -> TranslateError {
        let message = error.message().to_string();
        match self.classifier.classify(&error) {
            ErrorKind::InvalidApiKey => TranslateError::InvalidApiKey(message),
            ErrorKind::QuotaExceeded => TranslateError::QuotaExceeded(message),
            ErrorKind::Unknown => TranslateError::Unknown(message),
        }
    }
}
