use super::llm_interface::LLMError;

/// What a provider failure means for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidApiKey,
    QuotaExceeded,
    Unknown,
}

/// Maps provider failures onto `ErrorKind`.
///
/// Providers report errors as free text, so this is the one place that has to
/// change when the provider's wording does.
pub trait ErrorClassifier: Send + Sync {
    fn classify(&self, error: &LLMError) -> ErrorKind;
}

/// Default classifier: case-insensitive keyword search over the message.
///
/// Construction failures can only be credential problems. Invocation failures
/// are checked for quota/rate wording first, then for credential wording.
#[derive(Debug, Clone, Default)]
pub struct SubstringClassifier;

impl SubstringClassifier {
    fn mentions_api_key(message: &str) -> bool {
        message.contains("api key") || message.contains("api_key")
    }

    fn mentions_quota(message: &str) -> bool {
        message.contains("quota") || starts_word(message, "rate")
    }
}

impl ErrorClassifier for SubstringClassifier {
    fn classify(&self, error: &LLMError) -> ErrorKind {
        let message = error.message().to_lowercase();
        match error {
            LLMError::Init(_) if Self::mentions_api_key(&message) => ErrorKind::InvalidApiKey,
            LLMError::Init(_) => ErrorKind::Unknown,
            LLMError::Invocation(_) if Self::mentions_quota(&message) => ErrorKind::QuotaExceeded,
            LLMError::Invocation(_) if Self::mentions_api_key(&message) => ErrorKind::InvalidApiKey,
            LLMError::Invocation(_) => ErrorKind::Unknown,
        }
    }
}

/// True when `word` occurs at the start of a word in `haystack`, so "rate
/// limit" and "ratelimited" match but "generate" does not.
fn starts_word(haystack: &str, word: &str) -> bool {
    haystack.match_indices(word).any(|(idx, _)| {
        haystack[..idx]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric())
    })
}
