use crate::{error::AppError, view, AppState};
use axum::{
    async_trait,
    extract::{FromRequestParts, Path, State},
    http::{request::Parts, StatusCode},
    response::{Html, Redirect},
    Form, Json,
};
use database::TextStore;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// The form body posted by the add and edit forms.
#[derive(Debug, Deserialize)]
pub struct ContentForm {
    content: Option<String>,
}

/// Returns the submitted content, or `None` if it is missing or empty.
/// A body that fails to parse counts as missing.
fn submitted(form: Option<Form<ContentForm>>) -> Option<String> {
    form.and_then(|Form(f)| f.content).filter(|c| !c.is_empty())
}

/// A record id taken from the `{id}` path segment.
///
/// Only plain decimal digits that fit an `i32` are accepted. Anything else
/// answers 404, as if the route did not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::NOT_FOUND)?;
        parse_record_id(&raw).map(RecordId).ok_or(StatusCode::NOT_FOUND)
    }
}

fn parse_record_id(raw: &str) -> Option<i32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

fn to_index() -> Redirect {
    Redirect::to("/")
}

/// # GET /
pub async fn index<S: TextStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Html<String>, AppError> {
    let records = state.store.list().await.map_err(AppError::LoadPage)?;
    Ok(Html(view::render_index(&records)))
}

/// # POST /add
pub async fn add_text<S: TextStore>(
    State(state): State<Arc<AppState<S>>>,
    form: Option<Form<ContentForm>>,
) -> Result<Redirect, AppError> {
    let Some(content) = submitted(form) else {
        return Ok(to_index());
    };

    state.store.insert(&content).await.map_err(AppError::AddText)?;
    Ok(to_index())
}

/// # POST /edit/:id
pub async fn edit_text<S: TextStore>(
    RecordId(id): RecordId,
    State(state): State<Arc<AppState<S>>>,
    form: Option<Form<ContentForm>>,
) -> Result<Redirect, AppError> {
    let Some(content) = submitted(form) else {
        return Ok(to_index());
    };

    let updated = state
        .store
        .update(id, &content)
        .await
        .map_err(AppError::UpdateText)?;
    if updated == 0 {
        tracing::debug!(id, "Update matched no text.");
    }
    Ok(to_index())
}

/// # POST /delete/:id
pub async fn delete_text<S: TextStore>(
    RecordId(id): RecordId,
    State(state): State<Arc<AppState<S>>>,
) -> Result<Redirect, AppError> {
    let deleted = state.store.delete(id).await.map_err(AppError::DeleteText)?;
    if deleted == 0 {
        tracing::debug!(id, "Delete matched no text.");
    }
    Ok(to_index())
}

/// # GET /liveness
/// The process is up; the store is not consulted.
pub async fn liveness() -> Json<Value> {
    Json(json!({ "status": "alive" }))
}

/// # GET /health
/// Healthy only if a database connection can be opened right now.
pub async fn health<S: TextStore>(
    State(state): State<Arc<AppState<S>>>,
) -> (StatusCode, Json<Value>) {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "healthy" }))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "status": "unhealthy" })),
        ),
    }
}
