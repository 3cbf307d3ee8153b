#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use road_ops_analyzer::client::CompletionClient;
use road_ops_analyzer::error::AnalysisError;
use road_ops_analyzer::prompt::ChatCompletionRequest;

pub const BOUNDARY: &str = "road-ops-test-boundary";

/// Stand-in for the remote model. Counts calls and replays a fixed outcome.
pub struct StubClient {
    outcome: Result<String, (u16, String)>,
    calls: AtomicUsize,
}

impl StubClient {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err((status, body.to_string())),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionClient for StubClient {
    async fn complete(&self, _request: &ChatCompletionRequest) -> Result<String, AnalysisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Ok(text) => Ok(text.clone()),
            Err((status, body)) => Err(AnalysisError::Api {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

pub fn build_test_app(client: Arc<StubClient>) -> Router {
    road_ops_analyzer::build_app(client)
}

/// A multipart body with a single part.
pub fn multipart_body(field: &str, file_name: Option<&str>, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    match file_name {
        Some(name) => body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{field}\"; filename=\"{name}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        ),
        None => body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{field}\"\r\n\r\n").as_bytes(),
        ),
    }
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn post_multipart(app: Router, uri: &str, body: Vec<u8>) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, json: Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
