// Web server: Axum-based upload/search front end.
//
// GET / serves the embedded form from static/. The two POST routes return
// JSON: /extract_keywords takes a multipart file upload, /search_keywords a
// urlencoded `search` field.
//
// The keyword engine is built before the listener binds, so a broken model
// artifact stops startup instead of surfacing on the first request.

use std::sync::Arc;

use anyhow::Result;
use axum::body::Body;
use axum::extract::{DefaultBodyLimit, Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use chrono::{DateTime, Utc};
use include_dir::{include_dir, Dir};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::keywords::KeywordEngine;

pub mod handlers;

// The upload form and its stylesheet, embedded at compile time.
static ASSETS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/static");

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<dyn KeywordEngine>,
    /// When the model finished loading, reported by /health.
    pub loaded_at: DateTime<Utc>,
    /// Largest accepted request body, in bytes.
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(engine: Arc<dyn KeywordEngine>, max_upload_bytes: usize) -> Self {
        Self {
            engine,
            loaded_at: Utc::now(),
            max_upload_bytes,
        }
    }
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(state: AppState, port: u16, bind: &str) -> Result<()> {
    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("Lexis listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/static/{*path}", get(serve_static))
        .route(
            "/extract_keywords",
            post(handlers::extract::extract_keywords),
        )
        .route("/search_keywords", post(handlers::search::search_keywords))
        .layer(DefaultBodyLimit::max(state.max_upload_bytes))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check: reports vocabulary size and model load time.
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({
            "status": "ok",
            "features": state.engine.vocabulary_size(),
            "loaded_at": state.loaded_at.to_rfc3339(),
        })),
    )
}

/// The empty upload/search form.
async fn index() -> Response {
    match ASSETS.get_file("index.html") {
        Some(file) => asset_response(file.contents(), "index.html"),
        None => api_error(StatusCode::SERVICE_UNAVAILABLE, "Web assets not found"),
    }
}

async fn serve_static(Path(path): Path<String>) -> Response {
    match ASSETS.get_file(&path) {
        Some(file) => asset_response(file.contents(), &path),
        None => api_error(StatusCode::NOT_FOUND, "Not found"),
    }
}

fn asset_response(contents: &'static [u8], path: &str) -> Response {
    let mime = mime_type(path);
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, HeaderValue::from_static(mime))
        .body(Body::from(contents))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

fn mime_type(path: &str) -> &'static str {
    let ext = path.rsplit('.').next().unwrap_or("");
    match ext {
        "html" => "text/html; charset=utf-8",
        "js" | "mjs" => "application/javascript",
        "css" => "text/css",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "ico" => "image/x-icon",
        "json" => "application/json",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
