use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use super::interface::ErrorResponse;

/// Stable machine-readable tag carried in every error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    JsonParseError,
    MissingFields,
    TextTooLong,
    ApiKeyMissing,
    InvalidApiKey,
    QuotaExceeded,
    UnknownError,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JsonParseError => "JSON_PARSE_ERROR",
            Self::MissingFields => "MISSING_FIELDS",
            Self::TextTooLong => "TEXT_TOO_LONG",
            Self::ApiKeyMissing => "API_KEY_MISSING",
            Self::InvalidApiKey => "INVALID_API_KEY",
            Self::QuotaExceeded => "QUOTA_EXCEEDED",
            Self::UnknownError => "UNKNOWN_ERROR",
        }
    }

    pub const fn status(self) -> StatusCode {
        match self {
            Self::JsonParseError | Self::MissingFields | Self::TextTooLong => StatusCode::BAD_REQUEST,
            Self::QuotaExceeded => StatusCode::TOO_MANY_REQUESTS,
            Self::ApiKeyMissing | Self::InvalidApiKey | Self::UnknownError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("Invalid JSON in request body: {0}")]
    JsonParse(String),

    #[error("Missing required fields")]
    MissingFields,

    #[error("Text too long: {length} characters (maximum {max})")]
    TextTooLong { length: usize, max: usize },

    #[error("Request body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },

    #[error("API key not configured: {var} is not set")]
    ApiKeyMissing { var: String },

    #[error("Invalid API key: {0}")]
    InvalidApiKey(String),

    #[error("API quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Translation failed: {0}")]
    Unknown(String),
}

impl TranslateError {
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::JsonParse(_) => ErrorCode::JsonParseError,
            Self::MissingFields => ErrorCode::MissingFields,
            Self::TextTooLong { .. } | Self::BodyTooLarge { .. } => ErrorCode::TextTooLong,
            Self::ApiKeyMissing { .. } => ErrorCode::ApiKeyMissing,
            Self::InvalidApiKey(_) => ErrorCode::InvalidApiKey,
            Self::QuotaExceeded(_) => ErrorCode::QuotaExceeded,
            Self::Unknown(_) => ErrorCode::UnknownError,
        }
    }

    pub const fn status_code(&self) -> StatusCode {
        self.code().status()
    }

    /// The diagnostic string placed in `details`.
    pub fn details(&self) -> String {
        match self {
            Self::JsonParse(message) => message.clone(),
            Self::MissingFields => "Both 'text' and 'targetLanguage' are required".to_string(),
            Self::TextTooLong { length, max } => {
                format!("Maximum {} characters allowed, received {}", max, length)
            }
            Self::BodyTooLarge { limit } => format!("Request body is larger than {} bytes", limit),
            Self::ApiKeyMissing { var } => format!("{} environment variable is not set", var),
            Self::InvalidApiKey(message) | Self::QuotaExceeded(message) | Self::Unknown(message) => {
                message.clone()
            }
        }
    }

    fn summary(&self) -> &'static str {
        match self {
            Self::JsonParse(_) => "Invalid JSON in request body",
            Self::MissingFields => "Missing required fields",
            Self::TextTooLong { .. } | Self::BodyTooLarge { .. } => "Text too long",
            Self::ApiKeyMissing { .. } => "API key not configured",
            Self::InvalidApiKey(_) => "Invalid API key",
            Self::QuotaExceeded(_) => "API quota exceeded",
            Self::Unknown(_) => "Translation failed",
        }
    }

    fn solution(&self) -> Option<String> {
        match self {
            Self::ApiKeyMissing { var } => Some(format!(
                "Set the {} secret or environment variable for this service and redeploy",
                var
            )),
            Self::InvalidApiKey(_) => {
                Some("Check that the configured API key is valid and enabled for the Gemini API".to_string())
            }
            Self::QuotaExceeded(_) => Some("Wait a moment and retry, or raise the provider quota".to_string()),
            _ => None,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.summary().to_string(),
            details: self.details(),
            error_code: Some(self.code().as_str().to_string()),
            solution: self.solution(),
        }
    }
}

impl IntoResponse for TranslateError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_response())).into_response()
    }
}
