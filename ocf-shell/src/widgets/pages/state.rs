use super::model::{PageCatalog, PageView};
use crate::widgets::router::RouteKey;

/// Content currently shown and the results page input.
#[derive(Debug)]
pub(crate) struct PagesState {
    catalog: PageCatalog,
    page: PageView,
    results_query: String,
}

impl PagesState {
    pub(crate) fn new(catalog: PageCatalog) -> Self {
        let page = catalog.resolve(&RouteKey::home());
        Self {
            catalog,
            page,
            results_query: String::new(),
        }
    }

    pub(crate) fn page(&self) -> &PageView {
        &self.page
    }

    pub(crate) fn results_query(&self) -> &str {
        &self.results_query
    }

    /// Show the content for `route`, seeding the results input from it.
    pub(super) fn show(&mut self, route: &RouteKey) {
        self.page = self.catalog.resolve(route);
        self.results_query = match &self.page {
            PageView::SearchResults(results) => results.query.clone(),
            _ => String::new(),
        };
    }

    pub(super) fn set_results_query(&mut self, text: String) {
        self.results_query = text;
    }
}
