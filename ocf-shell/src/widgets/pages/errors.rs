use thiserror::Error;

/// Errors emitted while loading the page catalog.
#[derive(Debug, Error)]
pub(crate) enum PagesError {
    #[error("page catalog JSON failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("page route '{route}' is declared more than once")]
    DuplicateRoute { route: String },
}
