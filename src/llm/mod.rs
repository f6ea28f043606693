pub mod llm_interface;
pub mod gemini_llm;
pub mod llm_factory;
pub mod error_classifier;

pub use llm_interface::*;
pub use gemini_llm::GeminiLLM;
pub use llm_factory::GeminiLLMFactory;
pub use error_classifier::{ErrorClassifier, ErrorKind, SubstringClassifier};
