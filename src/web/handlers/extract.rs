// POST /extract_keywords: top keywords for an uploaded document.
//
// Expects multipart/form-data with a `file` field. The bytes are decoded
// leniently (invalid UTF-8 dropped) and scored off the async runtime.
//
// Returns 400 when the `file` field is missing, 413 when the body exceeds
// the configured upload cap.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::keywords::KeywordResult;
use crate::text::decode_lenient;
use crate::web::{api_error, AppState};

/// Name of the multipart field carrying the document.
pub const FILE_FIELD: &str = "file";

/// Response body. Serialized from the typed map so keywords stay in rank order.
#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub filename: Option<String>,
    pub keywords: KeywordResult,
}

pub async fn extract_keywords(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let mut multipart = match multipart {
        Ok(m) => m,
        Err(rejection) => return api_error(rejection.status(), &rejection.body_text()),
    };

    let mut upload = None;
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return api_error(e.status(), &e.body_text()),
        };
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().map(str::to_string);
        match field.bytes().await {
            Ok(bytes) => {
                upload = Some((filename, bytes));
                break;
            }
            Err(e) => return api_error(e.status(), &e.body_text()),
        }
    }

    let Some((filename, bytes)) = upload else {
        return api_error(StatusCode::BAD_REQUEST, "Missing 'file' upload field");
    };

    let text = decode_lenient(&bytes);
    let engine = state.engine.clone();
    let keywords = match tokio::task::spawn_blocking(move || engine.extract_keywords(&text)).await {
        Ok(keywords) => keywords,
        Err(e) => {
            tracing::error!(error = %e, "Keyword extraction task failed");
            return api_error(StatusCode::INTERNAL_SERVER_ERROR, "Keyword extraction failed");
        }
    };

    tracing::info!(
        filename = filename.as_deref().unwrap_or("<unnamed>"),
        bytes = bytes.len(),
        keywords = keywords.len(),
        "Extracted keywords from upload"
    );

    Json(ExtractResponse { filename, keywords }).into_response()
}
