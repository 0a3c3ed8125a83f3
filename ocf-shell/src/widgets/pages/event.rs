use crate::widgets::router::RouteKey;

/// Intent events handled by the pages widget.
#[derive(Debug, Clone)]
pub(crate) enum PagesIntent {
    Show { route: RouteKey },
    ResultsQueryChanged(String),
    ResultsSubmit,
    /// A result card or content link was pressed.
    OpenRoute { route: String },
    Back,
}

/// Effect events produced by the pages reducer.
#[derive(Debug, Clone)]
pub(crate) enum PagesEffect {
    Navigate { route: String },
    Back,
}

/// Pages event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum PagesEvent {
    Intent(PagesIntent),
    Effect(PagesEffect),
}
