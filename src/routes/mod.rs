//! Route modules for the Faleproxy server

pub mod fetch;
pub mod health;
pub mod index;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index::index))
        .route("/health", get(health::health_check))
        .route("/fetch", post(fetch::fetch_page))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::fetch::{validate_url, FetchError, FetchedPage, Fetcher};
    use crate::text::TargetSpec;
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct FixtureFetcher;

    #[async_trait]
    impl Fetcher for FixtureFetcher {
        async fn fetch(&self, url: &str) -> std::result::Result<FetchedPage, FetchError> {
            validate_url(url)?;
            Ok(FetchedPage {
                url: url.to_string(),
                status: 200,
                content_type: Some("text/html".to_string()),
                body: "<html><head><title>Yale University Test Page</title></head>\
                       <body><a href=\"http://yale.edu\">About Yale</a></body></html>"
                    .to_string(),
            })
        }
    }

    fn app() -> Router {
        router(AppState::with_fetcher(
            Config::default(),
            Arc::new(FixtureFetcher),
            TargetSpec::yale_to_fale().unwrap(),
        ))
    }

    async fn post_fetch(body: Body, content_type: Option<&str>) -> (StatusCode, Value) {
        let mut request = Request::builder().method("POST").uri("/fetch");
        if let Some(content_type) = content_type {
            request = request.header(header::CONTENT_TYPE, content_type);
        }

        let response = app().oneshot(request.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn post_json(json: &str) -> (StatusCode, Value) {
        post_fetch(Body::from(json.to_string()), Some("application/json")).await
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let (status, body) = post_json(r#"{"url": "http://example.com/"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["title"], "Fale University Test Page");
        assert_eq!(body["originalUrl"], "http://example.com/");
        let content = body["content"].as_str().unwrap();
        assert!(content.contains("<title>Fale University Test Page</title>"));
        assert!(content.contains(r#"<a href="http://yale.edu">About Fale</a>"#));
    }

    #[tokio::test]
    async fn test_missing_url() {
        let (status, body) = post_json("{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "URL is required");
    }

    #[tokio::test]
    async fn test_empty_and_null_url() {
        for json in [r#"{"url": ""}"#, r#"{"url": null}"#, r#"{"url": "  \t "}"#] {
            let (status, body) = post_json(json).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{json}");
            assert_eq!(body["error"], "URL is required");
        }
    }

    #[tokio::test]
    async fn test_no_body_is_missing_url() {
        let (status, body) = post_fetch(Body::empty(), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "URL is required");
    }

    #[tokio::test]
    async fn test_invalid_url_is_server_error() {
        let (status, body) = post_json(r#"{"url": "not-a-valid-url"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("Invalid URL"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let (status, body) = post_json(r#"{"url": 42}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "faleproxy-server");
    }

    #[tokio::test]
    async fn test_index_page() {
        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("/fetch"));
    }
}
