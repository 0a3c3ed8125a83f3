use std::collections::HashSet;

use super::errors::PagesError;
use super::model::PageCatalog;

const PAGES_JSON: &str = include_str!("../../../assets/pages.json");

/// Parse a page catalog, rejecting duplicate routes.
pub(crate) fn parse_catalog(json: &str) -> Result<PageCatalog, PagesError> {
    let catalog: PageCatalog = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for page in catalog.pages() {
        if !seen.insert(page.route.as_str()) {
            return Err(PagesError::DuplicateRoute {
                route: page.route.clone(),
            });
        }
    }

    Ok(catalog)
}

pub(crate) fn load_embedded_catalog() -> PageCatalog {
    match parse_catalog(PAGES_JSON) {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("page catalog rejected, using empty catalog: {err}");
            PageCatalog::default()
        },
    }
}
