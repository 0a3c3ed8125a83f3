use super::errors::CatalogError;
use super::model::MenuCatalog;

const MENUS_JSON: &str = include_str!("../../../assets/menus.json");

/// Parse and validate a menu catalog document.
pub(crate) fn parse_catalog(json: &str) -> Result<MenuCatalog, CatalogError> {
    let catalog: MenuCatalog = serde_json::from_str(json)?;
    catalog.validate()?;
    Ok(catalog)
}

/// Load the embedded catalog, falling back to empty menus on error.
pub(crate) fn load_embedded_catalog() -> MenuCatalog {
    match parse_catalog(MENUS_JSON) {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("menu catalog rejected, using empty menus: {err}");
            MenuCatalog::default()
        },
    }
}
