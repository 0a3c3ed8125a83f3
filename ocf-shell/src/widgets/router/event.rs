use super::model::RouteKey;

/// Navigation requests handled by the router.
#[derive(Debug, Clone)]
pub(crate) enum RouterIntent {
    Navigate { route: String },
    Back,
}

/// Effect events produced by the router reducer.
#[derive(Debug, Clone)]
pub(crate) enum RouterEffect {
    /// A navigation completed.
    RouteChanged { route: RouteKey },
}

/// Router event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum RouterEvent {
    Intent(RouterIntent),
    Effect(RouterEffect),
}
