// POST /search_keywords: vocabulary terms containing the submitted query.
//
// Expects an application/x-www-form-urlencoded body with a `search` field.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::Deserialize;

use crate::web::{api_error, AppState};

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    pub search: String,
}

pub async fn search_keywords(
    State(state): State<AppState>,
    form: Result<Form<SearchForm>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => return api_error(rejection.status(), &rejection.body_text()),
    };

    let results = state.engine.search_vocabulary(&form.search);

    Json(serde_json::json!({
        "query": form.search,
        "search_results": results,
    }))
    .into_response()
}
