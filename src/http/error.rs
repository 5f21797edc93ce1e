use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::catalog::CatalogError;
use crate::folders::FolderError;
use crate::http::pages;
use crate::report::ReportError;

/// Handler error, rendered as a small HTML error page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Catalog(CatalogError::Folder(FolderError::InvalidName(_))) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Rejected request: {}", self);
        }
        (status, Html(pages::error_page(status, &self.to_string()))).into_response()
    }
}
