// Router tests: drive the axum app in-process with tower's oneshot.
//
// The engine is built from the fixture model, so these cover the HTTP
// boundary only: multipart/form decoding, status codes, and JSON shape.

#![cfg(feature = "web")]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use indexmap::IndexMap;
use serde::Deserialize;
use tower::ServiceExt;

use lexis::keywords::TfIdfKeywordEngine;
use lexis::model::VocabularyModel;
use lexis::web::{build_router, AppState};

const BOUNDARY: &str = "lexis-test-boundary";

#[derive(Deserialize)]
struct ExtractBody {
    filename: Option<String>,
    keywords: IndexMap<String, f64>,
}

fn app_with_limit(max_upload_bytes: usize) -> Router {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/model");
    let model = VocabularyModel::load(&dir).unwrap();
    let engine = TfIdfKeywordEngine::new(Arc::new(model)).unwrap();
    build_router(AppState::new(Arc::new(engine), max_upload_bytes))
}

fn app() -> Router {
    app_with_limit(1024 * 1024)
}

fn multipart_request(field: &str, filename: &str, content: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: text/plain\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/extract_keywords")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn search_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/search_keywords")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

// ============================================================
// GET routes
// ============================================================

#[tokio::test]
async fn index_serves_html_form() {
    let response = app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let html = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(html.contains("/extract_keywords"));
    assert!(html.contains("/search_keywords"));
}

#[tokio::test]
async fn static_assets_are_served() {
    let response = app()
        .oneshot(Request::get("/static/style.css").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app()
        .oneshot(Request::get("/static/missing.js").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_reports_vocabulary_size() {
    let response = app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["features"], 12);
    assert!(json["loaded_at"].is_string());
}

// ============================================================
// POST /extract_keywords
// ============================================================

#[tokio::test]
async fn upload_returns_keywords_in_rank_order() {
    let response = app()
        .oneshot(multipart_request("file", "doc.txt", b"Data data engine model"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: ExtractBody = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body.filename.as_deref(), Some("doc.txt"));
    let keys: Vec<&str> = body.keywords.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["data", "model", "engine"]);
    assert_eq!(body.keywords["data"], 0.686);
}

#[tokio::test]
async fn upload_with_invalid_utf8_is_accepted() {
    let response = app()
        .oneshot(multipart_request("file", "latin1.txt", b"pro\xffcess syst\xe8m system"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: ExtractBody = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(body.keywords.contains_key("process"));
    assert!(body.keywords.contains_key("system"));
}

#[tokio::test]
async fn upload_without_alphabetic_text_is_empty_not_error() {
    let response = app()
        .oneshot(multipart_request("file", "numbers.txt", b"1234 5678 90 !!!"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: ExtractBody = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(body.keywords.is_empty());
}

#[tokio::test]
async fn upload_without_file_field_is_bad_request() {
    let response = app()
        .oneshot(multipart_request("attachment", "doc.txt", b"data"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(json["error"].as_str().unwrap().contains("file"));
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let content = "data ".repeat(200);
    let response = app_with_limit(256)
        .oneshot(multipart_request("file", "big.txt", content.as_bytes()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn non_multipart_upload_is_client_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/extract_keywords")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("data"))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}

// ============================================================
// POST /search_keywords
// ============================================================

#[tokio::test]
async fn search_returns_matching_terms() {
    let response = app().oneshot(search_request("search=at")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["query"], "at");
    assert_eq!(json["search_results"], serde_json::json!(["data"]));
}

#[tokio::test]
async fn empty_search_returns_vocabulary_prefix() {
    let response = app().oneshot(search_request("search=")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["search_results"].as_array().unwrap().len(), 12);
    assert_eq!(json["search_results"][0], "box");
}

#[tokio::test]
async fn search_without_field_is_client_error() {
    let response = app().oneshot(search_request("query=at")).await.unwrap();
    assert!(response.status().is_client_error());
}
