use std::sync::Arc;
use crate::catalog::Catalog;

/// Shared application state injected into all route handlers via axum::extract::State.
/// Holds no records itself; every request reloads the store through the catalog.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
