use std::time::Duration;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::translate::ErrorCode;

/// One step of the translation pipeline, as reported to a `DiagnosticsSink`.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticEvent<'a> {
    RequestReceived { body_bytes: usize },
    BodyParsed,
    FieldsValidated { text_length: usize, target_language: &'a str },
    CredentialChecked { present: bool },
    LanguageResolved { input: &'a str, display_name: &'a str },
    ProviderCalled { model: &'a str, prompt_length: usize },
    Completed { elapsed: Duration, translation_length: usize },
    Failed { code: ErrorCode, details: &'a str, elapsed: Duration },
}

/// Receives pipeline events for one request.
pub trait DiagnosticsSink: Send + Sync {
    fn record(&self, request_id: Uuid, event: &DiagnosticEvent<'_>);
}

/// Logs through `tracing`.
///
/// Quiet mode logs outcomes only; verbose mode logs every step.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink {
    verbose: bool,
}

impl TracingSink {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl DiagnosticsSink for TracingSink {
    fn record(&self, request_id: Uuid, event: &DiagnosticEvent<'_>) {
        match event {
            DiagnosticEvent::Completed { elapsed, translation_length } => {
                info!(
                    %request_id,
                    elapsed_ms = elapsed.as_millis() as u64,
                    translation_length,
                    "Translation completed"
                );
            }
            DiagnosticEvent::Failed { code, details, elapsed } => {
                let elapsed_ms = elapsed.as_millis() as u64;
                if code.status().is_server_error() {
                    error!(%request_id, code = code.as_str(), elapsed_ms, "Translation failed: {}", details);
                } else {
                    warn!(%request_id, code = code.as_str(), elapsed_ms, "Translation rejected: {}", details);
                }
            }
            _ if !self.verbose => {}
            DiagnosticEvent::RequestReceived { body_bytes } => {
                info!(%request_id, body_bytes, "Translation request received");
            }
            DiagnosticEvent::BodyParsed => {
                info!(%request_id, "Request body parsed");
            }
            DiagnosticEvent::FieldsValidated { text_length, target_language } => {
                info!(%request_id, text_length, target_language, "Fields validated");
            }
            DiagnosticEvent::CredentialChecked { present } => {
                info!(%request_id, api_key_present = present, "Credential checked");
            }
            DiagnosticEvent::LanguageResolved { input, display_name } => {
                info!(%request_id, input, display_name, "Target language resolved");
            }
            DiagnosticEvent::ProviderCalled { model, prompt_length } => {
                info!(%request_id, model, prompt_length, "Calling generation provider");
            }
        }
    }
}
