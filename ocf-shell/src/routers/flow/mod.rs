use iced::Task;

use super::window;
use crate::app::{App, AppEvent};

pub(crate) mod route_change;

/// First tasks once the runtime is ready.
pub(crate) fn startup(app: &mut App) -> Task<AppEvent> {
    Task::batch([
        window::request_initial_size(),
        app.widgets.language.startup_task().map(AppEvent::Language),
    ])
}
