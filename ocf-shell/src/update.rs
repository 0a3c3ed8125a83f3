use iced::{Task, window};

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router or handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::IcedReady => routers::flow::startup(app),
        AppEvent::Navigation(event) => routers::navigation::route(app, event),
        AppEvent::PointerWatch(event) => {
            routers::pointer_watch::route(app, event)
        },
        AppEvent::Viewport(event) => routers::viewport::route(app, event),
        AppEvent::Search(event) => routers::search::route(app, event),
        AppEvent::Router(event) => routers::router::route(app, event),
        AppEvent::Pages(event) => routers::pages::route(app, event),
        AppEvent::Language(event) => routers::language::route(app, event),
        AppEvent::Window(window::Event::Resized(size)) => {
            routers::window::handle_resize(app, size)
        },
        AppEvent::Window(_) => Task::none(),
    }
}
