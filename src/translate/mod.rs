pub mod interface;
pub mod error;
pub mod prompt;
pub mod handler;

pub use interface::{ErrorResponse, TranslationRequest, TranslationResult};
pub use error::{ErrorCode, TranslateError};
pub use prompt::build_prompt;
pub use handler::{TranslationHandler, TranslatorSettings};
