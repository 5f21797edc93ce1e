use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use crate::catalog::Catalog;
use crate::http::error::AppError;
use crate::http::pages;
use crate::http::state::AppState;

/// Fields posted by both the add and the edit forms.
#[derive(Debug, Deserialize)]
pub struct DramaForm {
    pub drama_name: String,
    pub genre: String,
}

/// Run a catalog operation off the async runtime; every one of them does
/// blocking file I/O.
pub(crate) async fn with_catalog<T, F>(state: &AppState, op: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&Catalog) -> Result<T, crate::catalog::CatalogError> + Send + 'static,
{
    let catalog = state.catalog.clone();
    let result = tokio::task::spawn_blocking(move || op(&catalog)).await?;
    Ok(result?)
}

fn back_to_list() -> Redirect {
    Redirect::to("/")
}

/// GET / — listing plus the add form.
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let records = with_catalog(&state, |c| c.list()).await?;
    Ok(Html(pages::index_page(&records)))
}

/// POST / — append a record, then redirect so a refresh does not resubmit.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<DramaForm>,
) -> Result<Redirect, AppError> {
    with_catalog(&state, move |c| c.add(&form.drama_name, &form.genre)).await?;
    Ok(back_to_list())
}

/// GET /delete/{index}
pub async fn delete(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Redirect, AppError> {
    with_catalog(&state, move |c| c.remove(index)).await?;
    Ok(back_to_list())
}

/// GET /edit/{index} — pre-filled form, or back to the list when the index
/// is out of range.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Response, AppError> {
    let record = with_catalog(&state, move |c| c.get(index)).await?;
    Ok(match record {
        Some(record) => Html(pages::edit_page(index, &record)).into_response(),
        None => back_to_list().into_response(),
    })
}

/// POST /edit/{index}
pub async fn update(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Form(form): Form<DramaForm>,
) -> Result<Redirect, AppError> {
    with_catalog(&state, move |c| c.edit(index, &form.drama_name, &form.genre)).await?;
    Ok(back_to_list())
}
