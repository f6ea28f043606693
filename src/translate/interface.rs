use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::TranslateError;

/// A validated translation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    pub text: String,
    pub target_language: String,
}

impl TranslationRequest {
    /// First validation step: the body must be JSON of any shape.
    pub fn parse_body(body: &[u8]) -> Result<Value, TranslateError> {
        serde_json::from_slice(body).map_err(|e| TranslateError::JsonParse(e.to_string()))
    }

    /// Remaining validation steps: both fields are non-empty strings, then
    /// `text` is at most `max_text_length` characters.
    ///
    /// Length is counted in Unicode scalar values, not UTF-16 code units, so
    /// text outside the Basic Multilingual Plane (most emoji) counts once per
    /// character rather than twice.
    pub fn from_value(value: &Value, max_text_length: usize) -> Result<Self, TranslateError> {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let (Some(text), Some(target_language)) = (field("text"), field("targetLanguage")) else {
            return Err(TranslateError::MissingFields);
        };

        let length = text.chars().count();
        if length > max_text_length {
            return Err(TranslateError::TextTooLong {
                length,
                max: max_text_length,
            });
        }

        Ok(Self {
            text,
            target_language,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub translation: String,
    pub source_text: String,
    pub target_language: String,
    /// Milliseconds spent on the request; only reported in debug mode.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub processing_time: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub solution: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_valid_body() {
        let value = TranslationRequest::parse_body(br#"{"text":"Hello","targetLanguage":"es"}"#).unwrap();
        let request = TranslationRequest::from_value(&value, 1000).unwrap();
        assert_eq!(request.text, "Hello");
        assert_eq!(request.target_language, "es");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = TranslationRequest::parse_body(b"{text: nope").unwrap_err();
        assert!(matches!(err, TranslateError::JsonParse(_)));
    }

    #[test]
    fn missing_or_empty_fields_are_rejected() {
        for body in [
            json!({}),
            json!({"text": "Hello"}),
            json!({"targetLanguage": "es"}),
            json!({"text": "", "targetLanguage": "es"}),
            json!({"text": "Hello", "targetLanguage": ""}),
            json!({"text": 42, "targetLanguage": "es"}),
            json!(["Hello", "es"]),
            json!(null),
        ] {
            let err = TranslationRequest::from_value(&body, 1000).unwrap_err();
            assert_eq!(err, TranslateError::MissingFields, "body: {}", body);
        }
    }

    #[test]
    fn length_limit_counts_characters() {
        let at_limit = "é".repeat(1000);
        assert!(TranslationRequest::from_value(&json!({"text": at_limit, "targetLanguage": "fr"}), 1000).is_ok());

        let emoji = "😀".repeat(1000);
        assert!(TranslationRequest::from_value(&json!({"text": emoji, "targetLanguage": "fr"}), 1000).is_ok());

        let over = "a".repeat(1001);
        let err =
            TranslationRequest::from_value(&json!({"text": over, "targetLanguage": "not-a-language"}), 1000)
                .unwrap_err();
        assert_eq!(err, TranslateError::TextTooLong { length: 1001, max: 1000 });
    }

    #[test]
    fn missing_fields_checked_before_length() {
        let over = "a".repeat(2000);
        let err = TranslationRequest::from_value(&json!({"text": over}), 1000).unwrap_err();
        assert_eq!(err, TranslateError::MissingFields);
    }

    #[test]
    fn result_omits_processing_time_unless_set() {
        let result = TranslationResult {
            translation: "Hola".to_string(),
            source_text: "Hello".to_string(),
            target_language: "Spanish".to_string(),
            processing_time: None,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({"translation": "Hola", "sourceText": "Hello", "targetLanguage": "Spanish"})
        );
    }
}
