//! HTTP API for page specs
//!
//! - `POST /api/spec/validate` - validate a JSON body
//! - `GET  /api/spec/render?spec=…|url=…` - render a standalone HTML page

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;

use super::config::Config;
use super::default_spec::default_spec;
use super::loader::{LoadError, SpecSource, fetch_remote, parse_and_validate_limited};
use super::render::document::{render_document, render_error_document};
use super::render::{RenderEnv, render_page};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct SpecApiState {
    pub config: Config,
    pub client: reqwest::Client,
}

impl SpecApiState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

/// Create the spec API router
pub fn spec_api_router(state: SpecApiState) -> Router {
    let body_limit = state.config.max_spec_bytes;
    Router::new()
        .route("/api/spec/validate", post(validate_spec))
        .route("/api/spec/render", get(render_spec))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderQuery {
    pub spec: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub reduced_motion: bool,
}

// ============================================================================
// API Handlers
// ============================================================================

/// POST /api/spec/validate
///
/// Response: `{"valid":true,"sections":n,"title":…}` or an error body with
/// 400 (malformed JSON), 413 (too large) or 422 (schema violation)
async fn validate_spec(State(state): State<SpecApiState>, body: String) -> Response {
    match parse_and_validate_limited(&body, state.config.max_spec_bytes) {
        Ok(spec) => {
            tracing::info!("Validated spec with {} sections", spec.sections.len());
            (
                StatusCode::OK,
                Json(json!({
                    "valid": true,
                    "sections": spec.sections.len(),
                    "title": spec.meta.title,
                })),
            )
                .into_response()
        }
        Err(error) => {
            tracing::info!("Spec rejected ({}): {}", error.kind().as_str(), error);
            error_response(&error)
        }
    }
}

/// GET /api/spec/render
///
/// Inline `spec` wins over `url`; with neither the built-in page is rendered.
async fn render_spec(
    State(state): State<SpecApiState>,
    Query(query): Query<RenderQuery>,
) -> Response {
    let source = SpecSource::from_query(query.spec, query.url);
    tracing::info!("Rendering spec from {} source", source.label());

    let result = match &source {
        SpecSource::Inline(text) => parse_and_validate_limited(text, state.config.max_spec_bytes),
        SpecSource::Remote(url) => {
            fetch_remote(&state.client, url, &state.config.fetch_options()).await
        }
        SpecSource::Fallback => default_spec(),
    };

    match result {
        Ok(spec) => {
            let env = RenderEnv {
                prefers_reduced_motion: query.reduced_motion,
            };
            let page = render_page(&spec, &env);
            tracing::debug!("Rendered {} sections", page.nodes.len());
            Html(render_document(&page)).into_response()
        }
        Err(error) => {
            tracing::warn!("Spec render failed ({}): {}", error.kind().as_str(), error);
            (status_of(&error), Html(render_error_document(&error))).into_response()
        }
    }
}

fn status_of(error: &LoadError) -> StatusCode {
    StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::BAD_REQUEST)
}

fn error_response(error: &LoadError) -> Response {
    (status_of(error), Json(error.to_json())).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use std::time::Duration;
    use tower::ServiceExt;

    fn create_test_app(max_spec_bytes: usize) -> Router {
        spec_api_router(SpecApiState::new(Config {
            fetch_timeout: Duration::from_secs(1),
            max_spec_bytes,
            allow_http_sources: false,
        }))
    }

    fn encode(value: &str) -> String {
        value
            .bytes()
            .map(|b| match b {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                    (b as char).to_string()
                }
                _ => format!("%{b:02X}"),
            })
            .collect()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn post_validate(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/spec/validate")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: String) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    const VALID: &str = r#"{"meta":{"title":"Acme","description":"D"},"sections":[{"type":"hero","headline":"H","cta":{"primary":{"text":"Go","href":"/x"}}}]}"#;

    #[tokio::test]
    async fn test_validate_accepts_valid_spec() {
        let (status, body) = send(create_test_app(4096), post_validate(VALID)).await;
        assert_eq!(status, StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["valid"], true);
        assert_eq!(body["sections"], 1);
    }

    #[tokio::test]
    async fn test_validate_reports_schema_error() {
        let (status, body) = send(
            create_test_app(4096),
            post_validate(r#"{"meta":{"title":"T"},"sections":[]}"#),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let body: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["error"]["kind"], "schema");
        assert_eq!(body["error"]["path"], "meta.description");
    }

    #[tokio::test]
    async fn test_validate_reports_parse_error() {
        let (status, body) = send(create_test_app(4096), post_validate("{bad")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["error"]["kind"], "parse");
        assert_eq!(body["error"]["line"], 1);
    }

    #[tokio::test]
    async fn test_validate_rejects_oversized_body() {
        let (status, _) = send(create_test_app(32), post_validate(VALID)).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_render_inline_spec() {
        let uri = format!("/api/spec/render?spec={}", encode(VALID));
        let (status, html) = send(create_test_app(4096), get(uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Acme</title>"));
        assert!(html.contains(r#"href="/x""#));
    }

    #[tokio::test]
    async fn test_render_inline_wins_over_url() {
        let uri = format!(
            "/api/spec/render?spec={}&url={}",
            encode(VALID),
            encode("http://unreachable.invalid/spec.json")
        );
        let (status, html) = send(create_test_app(4096), get(uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<title>Acme</title>"));
    }

    #[tokio::test]
    async fn test_render_without_params_uses_default_page() {
        let (status, html) = send(create_test_app(64 * 1024), get("/api/spec/render".into())).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<title>Pagewright"));
    }

    #[tokio::test]
    async fn test_render_reduced_motion() {
        let uri = format!("/api/spec/render?reducedMotion=true&spec={}", encode(VALID));
        let (_, html) = send(create_test_app(4096), get(uri)).await;
        assert!(html.contains(r#"data-motion="none""#));
    }

    #[tokio::test]
    async fn test_render_error_pages() {
        let uri = format!("/api/spec/render?spec={}", encode("{bad"));
        let (status, html) = send(create_test_app(4096), get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(html.contains("not valid JSON"));

        let uri = format!(
            "/api/spec/render?spec={}",
            encode(r#"{"meta":{"title":"T","description":"D"},"sections":[{"type":"carousel"}]}"#)
        );
        let (status, html) = send(create_test_app(4096), get(uri)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(html.contains("sections[0].type"));

        let uri = format!("/api/spec/render?url={}", encode("http://acme.test/spec.json"));
        let (status, html) = send(create_test_app(4096), get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(html.contains("http://acme.test/spec.json"));
    }

    #[tokio::test]
    async fn test_render_refuses_loopback_sources() {
        for url in ["http://127.0.0.1:6379/", "http://localhost:3000/spec.json", "https://[::1]/"] {
            let uri = format!("/api/spec/render?url={}", encode(url));
            let (status, html) = send(create_test_app(4096), get(uri)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{url}");
            assert!(html.contains("local addresses are not allowed"), "{url}");
        }
    }

    #[tokio::test]
    async fn test_render_neutralizes_script_links() {
        let spec = r#"{"meta":{"title":"T","description":"D"},"sections":[{"type":"hero","headline":"H","cta":{"primary":{"text":"Go","href":"JaVaScRiPt:alert(1)"}}}]}"#;
        let uri = format!("/api/spec/render?spec={}", encode(spec));
        let (status, html) = send(create_test_app(4096), get(uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!html.to_ascii_lowercase().contains("javascript:"));
    }
}
