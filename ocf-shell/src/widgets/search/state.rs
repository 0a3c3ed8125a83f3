use super::model::SearchRequest;

/// In-flight text of the header search input.
#[derive(Debug, Default)]
pub(crate) struct SearchState {
    query: String,
}

impl SearchState {
    pub(crate) fn query(&self) -> &str {
        &self.query
    }

    pub(super) fn update_query(&mut self, text: String) {
        self.query = text;
    }

    /// Confirm the current text, clearing it when it forms a request.
    pub(super) fn take_request(&mut self) -> Option<SearchRequest> {
        let request = SearchRequest::new(&self.query)?;
        self.query.clear();
        Some(request)
    }

    pub(super) fn clear(&mut self) {
        self.query.clear();
    }
}
