use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::languages::LANGUAGE_NAMES;
use crate::state::AppState;
use crate::translate::{TranslateError, TranslationResult};

/// `max_body_bytes` caps how much of a `/translate` body is buffered.
pub fn create_routes(max_body_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/", get(service_info).fallback(not_found))
        .route("/health", get(health_check).fallback(not_found))
        .route(
            "/translate",
            post(translate)
                .fallback(not_found)
                .layer(DefaultBodyLimit::max(max_body_bytes)),
        )
        .fallback(not_found)
}

/// The complete application: routes, state, CORS and request tracing.
pub fn create_app(state: AppState) -> Router {
    create_routes(state.config.translation.max_body_bytes)
        .layer(middleware::from_fn(cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Answers every `OPTIONS` request directly and stamps the CORS and
/// content-type headers on every response.
async fn cors(request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers
        .entry(header::CONTENT_TYPE)
        .or_insert(HeaderValue::from_static("application/json"));
    response
}

async fn service_info(State(state): State<AppState>) -> Json<Value> {
    let languages: serde_json::Map<String, Value> = LANGUAGE_NAMES
        .iter()
        .map(|(code, name)| (code.to_string(), Value::from(*name)))
        .collect();

    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Translation gateway backed by Gemini",
        "mode": state.config.mode.as_str(),
        "model": state.config.provider.model,
        "endpoints": {
            "GET /": "Service information",
            "GET /health": "Health check",
            "POST /translate": "Translate text: {\"text\": string, \"targetLanguage\": string}"
        },
        "maxTextLength": state.config.translation.max_text_length,
        "supportedLanguages": languages,
    }))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Translation service is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "mode": state.config.mode.as_str(),
        "apiKeyConfigured": state.translator.credentials().api_key().is_some(),
    }))
}

async fn translate(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<TranslationResult>, TranslateError> {
    let body = body.map_err(|rejection| {
        let error = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            TranslateError::BodyTooLarge {
                limit: state.config.translation.max_body_bytes,
            }
        } else {
            TranslateError::JsonParse(rejection.body_text())
        };
        state.translator.reject(error)
    })?;
    state.translator.translate(&body).await.map(Json)
}

async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({"error": "Not found"})))
}
