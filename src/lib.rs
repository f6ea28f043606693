//! HTTP gateway that translates text for game clients through Gemini
//! without exposing the provider credential to them.

pub mod config;
pub mod credentials;
pub mod diagnostics;
pub mod edge;
pub mod languages;
pub mod llm;
pub mod routes;
pub mod state;
pub mod translate;

pub use config::{Config, Mode};
pub use edge::EdgeHandler;
pub use state::AppState;
