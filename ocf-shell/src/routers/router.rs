use iced::Task;

use super::flow::route_change;
use crate::app::{App, AppEvent};
use crate::widgets::router::{RouterEffect, RouterEvent};

/// Route a navigation request through the host router.
pub(crate) fn route(app: &mut App, event: RouterEvent) -> Task<AppEvent> {
    match event {
        RouterEvent::Intent(event) => {
            app.widgets.router.reduce(event).map(AppEvent::Router)
        },
        RouterEvent::Effect(RouterEffect::RouteChanged { route }) => {
            route_change::reset(&mut app.widgets, &route)
        },
    }
}
