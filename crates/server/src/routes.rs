// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP routes
//!
//! - `GET /`: playbook form
//! - `POST /docs`: form submission, answers with the rendered page
//! - `POST /api/docs?format=markdown`: playbook JSON body, rendered docs back
//! - `GET /healthz`

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use pbdoc_render::{FormatError, GenerateError, OutputFormat, Rendered};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::pages::{IndexPage, EMPTY_PLAYBOOK_MESSAGE, INDEX_TEMPLATE};
use crate::state::AppState;

type SharedState = Arc<AppState>;

/// Build the axum router.
pub fn router(state: AppState) -> Router {
    let body_limit = state.max_body_bytes;
    Router::new()
        .route("/", get(index))
        .route("/docs", post(document_playbook))
        .route("/api/docs", post(api_docs))
        .route("/healthz", get(healthz))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

#[derive(Debug, Deserialize)]
struct DocsForm {
    #[serde(default)]
    playbook: String,
}

#[derive(Debug, Deserialize)]
struct ApiParams {
    format: Option<String>,
}

/// Errors answered by the JSON API.
#[derive(Debug, Error)]
enum ApiError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Format(_) => StatusCode::BAD_REQUEST,
            ApiError::Generate(GenerateError::Render(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Generate(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

async fn index(State(state): State<SharedState>) -> Response {
    render_page(&state, StatusCode::OK, &IndexPage::default())
}

async fn document_playbook(
    State(state): State<SharedState>,
    Form(form): Form<DocsForm>,
) -> Response {
    if form.playbook.trim().is_empty() {
        return render_page(
            &state,
            StatusCode::OK,
            &IndexPage::error(EMPTY_PLAYBOOK_MESSAGE, ""),
        );
    }

    match state.page_docs(&form.playbook) {
        Ok(docs) => {
            info!(bytes = form.playbook.len(), "documented submitted playbook");
            let page = IndexPage {
                error: None,
                playbook: form.playbook,
                html_docs: Some(docs.html),
                markdown_docs: Some(docs.markdown),
            };
            render_page(&state, StatusCode::OK, &page)
        }
        Err(e) => {
            info!(error = %e, "rejected submitted playbook");
            render_page(
                &state,
                StatusCode::UNPROCESSABLE_ENTITY,
                &IndexPage::error(e.to_string(), form.playbook),
            )
        }
    }
}

async fn api_docs(
    State(state): State<SharedState>,
    Query(params): Query<ApiParams>,
    body: String,
) -> Result<Response, ApiError> {
    let format = match params.format.as_deref() {
        Some(name) => name.parse::<OutputFormat>()?,
        None => OutputFormat::Json,
    };

    let rendered = state.render(&body, format)?;
    let response = match rendered {
        Rendered::Json(value) => Json(value).into_response(),
        Rendered::Text(text) => {
            ([(header::CONTENT_TYPE, format.content_type())], text).into_response()
        }
    };
    Ok(response)
}

async fn healthz() -> &'static str {
    "ok"
}

fn render_page(state: &AppState, status: StatusCode, page: &IndexPage) -> Response {
    match state.pages.render(INDEX_TEMPLATE, page) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!(error = %e, "failed to render page");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page").into_response()
        }
    }
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
