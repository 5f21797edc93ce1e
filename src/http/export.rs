use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};

use crate::http::error::AppError;
use crate::http::records::with_catalog;
use crate::http::state::AppState;
use crate::report::{self, REPORT_FILENAME};

/// GET /download_pdf — current list as a PDF attachment.
pub async fn download_pdf(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let records = with_catalog(&state, |c| c.list()).await?;
    let pdf = tokio::task::spawn_blocking(move || report::build_pdf(&records)).await??;

    let disposition = format!("attachment; filename=\"{REPORT_FILENAME}\"");
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        pdf,
    ))
}
