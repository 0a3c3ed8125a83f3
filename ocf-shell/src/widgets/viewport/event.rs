use iced::Size;

use super::model::ViewportMode;

/// Intent events handled by the viewport widget.
#[derive(Debug, Clone)]
pub(crate) enum ViewportIntent {
    /// Window size reported once at startup.
    Measured(Size),
    Resized(Size),
}

/// Effect events produced by the viewport reducer.
#[derive(Debug, Clone)]
pub(crate) enum ViewportEffect {
    ModeChanged { mode: ViewportMode },
}

/// Viewport event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum ViewportEvent {
    Intent(ViewportIntent),
    Effect(ViewportEffect),
}
