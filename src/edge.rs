use std::convert::Infallible;

use axum::{body::Body, http::Request, response::Response, Router};
use tower::ServiceExt;

use crate::routes;
use crate::state::AppState;

/// Serverless-style entry point: one request in, one response out, no
/// listener. Dispatches through the same router the server binary uses.
#[derive(Clone)]
pub struct EdgeHandler {
    router: Router,
}

impl EdgeHandler {
    pub fn new(state: AppState) -> Self {
        Self {
            router: routes::create_app(state),
        }
    }

    pub async fn fetch(&self, request: Request<Body>) -> Response {
        let result: Result<Response, Infallible> = self.router.clone().oneshot(request).await;
        match result {
            Ok(response) => response,
            Err(never) => match never {},
        }
    }
}
