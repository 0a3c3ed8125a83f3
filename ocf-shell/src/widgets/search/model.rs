use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str};

/// Path of the search results destination.
pub(crate) const SEARCH_PATH: &str = "/search";
const QUERY_PARAM: &str = "q";

/// Bytes escaped in a query value. Matches `encodeURIComponent`.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A confirmed, trimmed, non-empty search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchRequest {
    query: String,
}

impl SearchRequest {
    /// Build a request from raw input. Blank input yields `None`.
    pub(crate) fn new(raw: &str) -> Option<Self> {
        let query = raw.trim();
        if query.is_empty() {
            return None;
        }

        Some(Self {
            query: query.to_string(),
        })
    }

    pub(crate) fn query(&self) -> &str {
        &self.query
    }

    /// Route of the results page for this query.
    pub(crate) fn to_route(&self) -> String {
        let encoded =
            percent_encoding::utf8_percent_encode(&self.query, QUERY_VALUE);
        format!("{SEARCH_PATH}?{QUERY_PARAM}={encoded}")
    }

    /// Recover the request carried by a results route.
    pub(crate) fn from_route(route: &str) -> Option<Self> {
        let (path, query) = route.split_once('?')?;
        if path != SEARCH_PATH {
            return None;
        }

        let value = query.split('&').find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (key == QUERY_PARAM).then_some(value)
        })?;
        let value = value.replace('+', " ");
        let decoded = percent_decode_str(&value).decode_utf8_lossy();

        Self::new(&decoded)
    }
}
