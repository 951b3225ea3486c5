use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::DbError;
use thiserror::Error;

/// A failed request, tagged with the operation the route was performing.
///
/// The underlying `DbError` has already been logged by the database crate;
/// only a generic message ever reaches the client.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error loading page: {0}")]
    LoadPage(#[source] DbError),
    #[error("Error adding text: {0}")]
    AddText(#[source] DbError),
    #[error("Error updating text: {0}")]
    UpdateText(#[source] DbError),
    #[error("Error deleting text: {0}")]
    DeleteText(#[source] DbError),
}

impl AppError {
    fn parts(&self) -> (&'static str, &DbError) {
        match self {
            AppError::LoadPage(e) => ("Error loading page", e),
            AppError::AddText(e) => ("Error adding text", e),
            AppError::UpdateText(e) => ("Error updating text", e),
            AppError::DeleteText(e) => ("Error deleting text", e),
        }
    }
}

/// Converts our custom `AppError` into a plain-text 500 response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (message, source) = self.parts();
        let body = if source.is_connection() {
            "Error connecting to the database"
        } else {
            message
        };
        tracing::debug!(error = %self, "Request failed.");

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
