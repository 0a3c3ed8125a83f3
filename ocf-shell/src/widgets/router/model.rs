use std::fmt;

/// Route of the home page.
pub(crate) const HOME_ROUTE: &str = "/";

/// Opaque site route, path plus optional query string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct RouteKey(String);

impl RouteKey {
    pub(crate) fn new(route: impl Into<String>) -> Self {
        Self(route.into())
    }

    pub(crate) fn home() -> Self {
        Self::new(HOME_ROUTE)
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    /// Route without its query string.
    pub(crate) fn path(&self) -> &str {
        self.0.split_once('?').map_or(self.0.as_str(), |(path, _)| path)
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
