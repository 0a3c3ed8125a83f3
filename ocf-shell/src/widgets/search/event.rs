/// Intent events handled by the search widget.
#[derive(Debug, Clone)]
pub(crate) enum SearchIntent {
    QueryChanged(String),
    Submit,
    Clear,
}

/// Effect events produced by the search reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SearchEffect {
    /// Close every open menu, including the search panel.
    CloseMenus,
    Navigate { route: String },
}

/// Search event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SearchEvent {
    Intent(SearchIntent),
    Effect(SearchEffect),
}
