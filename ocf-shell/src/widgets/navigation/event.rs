use super::model::{MenuId, SubmenuId};

/// Intent events handled by the navigation presentation layer.
#[derive(Debug, Clone)]
pub(crate) enum NavigationIntent {
    OpenMenu(MenuId),
    CloseMenu(MenuId),
    ToggleMenu(MenuId),
    ToggleSubmenu(SubmenuId),
    CollapseSubmenu,
    CloseAll,
    /// A leaf entry was pressed.
    ItemSelected { href: String },
}

/// Effect events produced by the navigation reducer.
#[derive(Debug, Clone)]
pub(crate) enum NavigationEffect {
    NavigateTo { route: String },
}

/// Navigation event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum NavigationEvent {
    /// Intent event reduced by the navigation widget.
    Intent(NavigationIntent),
    /// External effect orchestrated by app-level routing.
    Effect(NavigationEffect),
}
