use thiserror::Error;

/// Errors emitted while loading or validating the menu catalog.
#[derive(Debug, Error)]
pub(crate) enum CatalogError {
    #[error("menu catalog JSON failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid menu item '{name}': {reason}")]
    InvalidItem { name: String, reason: &'static str },
}
