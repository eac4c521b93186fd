// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{FailingArticleStore, InMemoryArticleStore};
use article_views::application::services::ApplicationServices;
use article_views::domain::article::{ArticleReadRepository, ArticleViewRepository};
use article_views::presentation::http::{routes::build_router, state::HttpState};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use serde_json::Value;

pub fn services_for(store: Arc<InMemoryArticleStore>) -> Arc<ApplicationServices> {
    let view_repo: Arc<dyn ArticleViewRepository> = store.clone();
    let read_repo: Arc<dyn ArticleReadRepository> = store;
    Arc::new(ApplicationServices::new(view_repo, read_repo))
}

pub fn failing_services() -> Arc<ApplicationServices> {
    let store = Arc::new(FailingArticleStore);
    let view_repo: Arc<dyn ArticleViewRepository> = store.clone();
    let read_repo: Arc<dyn ArticleReadRepository> = store;
    Arc::new(ApplicationServices::new(view_repo, read_repo))
}

pub fn make_test_router(store: Arc<InMemoryArticleStore>) -> axum::Router {
    build_router(
        HttpState {
            services: services_for(store),
        },
        &[],
    )
}

pub fn make_failing_router() -> axum::Router {
    build_router(
        HttpState {
            services: failing_services(),
        },
        &[],
    )
}

pub fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Splits a response into its status and JSON body, asserting the content type.
pub async fn read_json(resp: Response) -> (StatusCode, Value) {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {}",
        ct
    );
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body");
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    let (status, json) = read_json(resp).await;
    assert_eq!(status, expected_status);
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
