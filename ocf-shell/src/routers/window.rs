use iced::{Size, Task, window};

use super::viewport;
use crate::app::{App, AppEvent};
use crate::widgets::viewport::{ViewportEvent, ViewportIntent};

/// Re-evaluate the responsive mode on every window resize.
pub(crate) fn handle_resize(app: &mut App, size: Size) -> Task<AppEvent> {
    viewport::route_intent(app, ViewportIntent::Resized(size))
}

/// Ask the runtime for the window size once at startup.
pub(crate) fn request_initial_size() -> Task<AppEvent> {
    window::latest().and_then(window::size).map(|size| {
        AppEvent::Viewport(ViewportEvent::Intent(ViewportIntent::Measured(
            size,
        )))
    })
}
