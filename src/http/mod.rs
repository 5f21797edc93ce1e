pub mod error;
pub mod export;
pub mod pages;
pub mod records;
pub mod state;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use crate::http::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(records::list).post(records::create))
        .route("/delete/{index}", get(records::delete))
        .route("/edit/{index}", get(records::edit_form).post(records::update))
        .route("/download_pdf", get(export::download_pdf))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
