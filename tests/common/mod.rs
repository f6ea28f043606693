#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response};
use lingo_gateway::credentials::StaticCredential;
use lingo_gateway::llm::{GenerativeModel, LLMError, LLMFactory};
use lingo_gateway::{AppState, Config, Mode};
use serde_json::Value;

/// Provider stand-in that returns a canned reply and counts calls.
pub struct MockFactory {
    reply: Result<String, LLMError>,
    calls: Arc<AtomicUsize>,
    prompts: Arc<Mutex<Vec<String>>>,
}

struct MockModel {
    reply: Result<String, LLMError>,
    calls: Arc<AtomicUsize>,
    prompts: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl GenerativeModel for MockModel {
    async fn generate_content(&self, prompt: &str) -> Result<String, LLMError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone()
    }
}

impl MockFactory {
    pub fn new(reply: Result<String, LLMError>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Arc::new(AtomicUsize::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl LLMFactory for MockFactory {
    fn create_model(&self, _api_key: &str, _model: &str) -> Result<Box<dyn GenerativeModel>, LLMError> {
        Ok(Box::new(MockModel {
            reply: self.reply.clone(),
            calls: self.calls.clone(),
            prompts: self.prompts.clone(),
        }))
    }
}

pub fn test_state(factory: Arc<MockFactory>, api_key: Option<&str>, mode: Mode) -> AppState {
    let mut config = Config::default();
    config.mode = mode;
    test_state_with_config(factory, api_key, config)
}

pub fn test_state_with_config(factory: Arc<MockFactory>, api_key: Option<&str>, config: Config) -> AppState {
    AppState::with_parts(
        config,
        factory,
        Arc::new(StaticCredential::new("GEMINI_API_KEY", api_key.map(str::to_string))),
    )
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn assert_cors(response: &Response) {
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "GET, POST, OPTIONS");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
    assert_eq!(headers["content-type"], "application/json");
}
