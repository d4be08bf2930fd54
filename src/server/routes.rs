//! Axum route handlers for the color service.
//!
//! # Routes
//!
//! - `GET  /health`                            - `{"status": "ok", ...}`
//! - `GET  /color`                             - current color as plain text
//! - `POST /color/:color`                      - replace current color, 204
//! - `GET  /color/object`                      - `{"name", "r", "g", "b"}`
//! - `GET  /color/compute-emotion?op=&c1=&c2=` - emotion label as plain text

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::color::{ColorError, ColorObject, ColorStore, EmotionEngine, ErrorKind};
use crate::config::ServiceConfig;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The current color.
    pub store: Arc<ColorStore>,
    /// Emotion calculator.
    pub engine: EmotionEngine,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(ColorStore::new()),
            engine: EmotionEngine::new(),
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            store: Arc::new(ColorStore::with_color(config.initial_color.clone())),
            engine: EmotionEngine::with_policy(config.index_policy),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Error response: `{"error": message, "kind": kind}`.
#[derive(Debug)]
pub struct ApiError(ColorError);

impl From<ColorError> for ApiError {
    fn from(err: ColorError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.0.kind();
        let status = match kind {
            ErrorKind::Parse | ErrorKind::Range | ErrorKind::Lookup => StatusCode::BAD_REQUEST,
            ErrorKind::DivisionByZero => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::Index => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        } else {
            tracing::debug!(error = %self.0, "Request rejected");
        }
        (
            status,
            Json(serde_json::json!({
                "error": self.0.to_string(),
                "kind": kind,
            })),
        )
            .into_response()
    }
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/color", get(get_color_handler))
        .route("/color/object", get(get_color_object_handler))
        .route("/color/compute-emotion", get(compute_emotion_handler))
        .route("/color/:color", post(set_color_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GET /health - liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "service": "colorservice",
    }))
}

/// GET /color - current color, verbatim.
async fn get_color_handler(State(state): State<AppState>) -> String {
    state.store.get()
}

/// POST /color/:color - replace the current color. No validation.
async fn set_color_handler(
    State(state): State<AppState>,
    Path(color): Path<String>,
) -> StatusCode {
    state.store.set(color);
    StatusCode::NO_CONTENT
}

/// GET /color/object - current color with channel values.
async fn get_color_object_handler(
    State(state): State<AppState>,
) -> Result<Json<ColorObject>, ApiError> {
    Ok(Json(state.store.get_structured()?))
}

#[derive(Debug, Deserialize)]
pub struct EmotionQuery {
    pub op: String,
    pub c1: String,
    pub c2: String,
}

/// GET /color/compute-emotion - emotion label for `op` applied to `c1`, `c2`.
async fn compute_emotion_handler(
    State(state): State<AppState>,
    Query(query): Query<EmotionQuery>,
) -> Result<String, ApiError> {
    let emotion = state
        .engine
        .compute_emotion(&query.op, &query.c1, &query.c2)?;
    Ok(emotion.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::IndexPolicy;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), 4096)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = app_router(AppState::new());
        let (status, body) = send(app, "GET", "/health").await;
        assert_eq!(status, StatusCode::OK);

        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], crate::VERSION);
        assert_eq!(json["service"], "colorservice");
    }

    #[tokio::test]
    async fn test_post_and_get() {
        let state = AppState::new();

        let (status, body) = send(app_router(state.clone()), "POST", "/color/green").await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());

        let (status, body) = send(app_router(state.clone()), "GET", "/color").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "green");
    }

    #[tokio::test]
    async fn test_post_decodes_path() {
        let state = AppState::new();
        let (status, _) = send(app_router(state.clone()), "POST", "/color/light%20blue").await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(state.store.get(), "light blue");
    }

    #[tokio::test]
    async fn test_get_default_color() {
        let (status, body) = send(app_router(AppState::new()), "GET", "/color").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "white");
    }

    #[tokio::test]
    async fn test_get_color_object_default() {
        let (status, body) = send(app_router(AppState::new()), "GET", "/color/object").await;
        assert_eq!(status, StatusCode::OK);

        let color: ColorObject = serde_json::from_str(&body).unwrap();
        assert_eq!(color.name, "white");
        assert_eq!(color.r, 0xff);
        assert_eq!(color.g, 0xff);
        assert_eq!(color.b, 0xff);
    }

    #[tokio::test]
    async fn test_get_color_object_hex() {
        let state = AppState::new();
        state.store.set("0a0b0c");

        let (status, body) = send(app_router(state), "GET", "/color/object").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "0a0b0c", "r": 10, "g": 12, "b": 11})
        );
    }

    #[tokio::test]
    async fn test_get_color_object_invalid() {
        let state = AppState::new();
        state.store.set("not-a-color");

        let (status, body) = send(app_router(state), "GET", "/color/object").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["kind"], "parse");
    }

    #[tokio::test]
    async fn test_compute_emotion_vectors() {
        let state = AppState::new();
        let vectors = [
            ("add", "0a0a0a", "050505", "willpower"),
            ("sub", "0a0a0a", "080808", "rage"),
            ("mul", "030303", "010101", "hope"),
            ("div", "080808", "020202", "greed"),
        ];
        for (op, c1, c2, expected) in vectors {
            let uri = format!("/color/compute-emotion?op={op}&c1={c1}&c2={c2}");
            let (status, body) = send(app_router(state.clone()), "GET", &uri).await;
            assert_eq!(status, StatusCode::OK, "{op}");
            assert_eq!(body, expected);
        }
    }

    #[tokio::test]
    async fn test_compute_emotion_error_statuses() {
        let state = AppState::new();
        let cases = [
            ("xor", "0a0a0a", "050505", StatusCode::BAD_REQUEST, "lookup"),
            ("add", "0a0a", "050505", StatusCode::BAD_REQUEST, "parse"),
            ("add", "ff0a0a", "050505", StatusCode::BAD_REQUEST, "range"),
            (
                "div",
                "0a0a0a",
                "000000",
                StatusCode::UNPROCESSABLE_ENTITY,
                "division_by_zero",
            ),
            (
                "sub",
                "000000",
                "010101",
                StatusCode::INTERNAL_SERVER_ERROR,
                "index",
            ),
        ];
        for (op, c1, c2, expected_status, expected_kind) in cases {
            let uri = format!("/color/compute-emotion?op={op}&c1={c1}&c2={c2}");
            let (status, body) = send(app_router(state.clone()), "GET", &uri).await;
            assert_eq!(status, expected_status, "{op} {c1} {c2}");
            let json: Value = serde_json::from_str(&body).unwrap();
            assert_eq!(json["kind"], expected_kind);
            assert!(json["error"].as_str().is_some());
        }
    }

    #[tokio::test]
    async fn test_compute_emotion_missing_param() {
        let uri = "/color/compute-emotion?op=add&c1=0a0a0a";
        let (status, _) = send(app_router(AppState::new()), "GET", uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_wrap_policy_from_config() {
        let config = ServiceConfig {
            index_policy: IndexPolicy::Wrap,
            initial_color: "0a0a0a".to_string(),
            ..ServiceConfig::default()
        };
        let state = AppState::from_config(&config);

        let (_, body) = send(app_router(state.clone()), "GET", "/color").await;
        assert_eq!(body, "0a0a0a");

        let uri = "/color/compute-emotion?op=sub&c1=000000&c2=010101";
        let (status, body) = send(app_router(state), "GET", uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "fear");
    }

    #[tokio::test]
    async fn test_concurrent_reads() {
        let state = AppState::new();
        state.store.set("0a0a0a");
        let app = app_router(state);

        let mut tasks = tokio::task::JoinSet::new();
        for _ in 0..32 {
            let app = app.clone();
            tasks.spawn(async move { send(app, "GET", "/color").await });
        }
        while let Some(result) = tasks.join_next().await {
            let (status, body) = result.unwrap();
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, "0a0a0a");
        }
    }
}
