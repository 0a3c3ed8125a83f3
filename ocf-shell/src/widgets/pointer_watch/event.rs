use iced::Point;

use crate::widgets::navigation::MenuId;

/// Global pointer activity observed by the watcher.
#[derive(Debug, Clone)]
pub(crate) enum PointerWatchIntent {
    CursorMoved { position: Point },
    CursorLeft,
    /// Mouse presses carry no position; touch presses do.
    Pressed { position: Option<Point> },
}

/// Menu store updates requested by the watcher.
#[derive(Debug, Clone)]
pub(crate) enum PointerWatchEffect {
    CloseMenu(MenuId),
    CollapseSubmenu,
}

/// Pointer watch event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum PointerWatchEvent {
    Intent(PointerWatchIntent),
    Effect(PointerWatchEffect),
}
