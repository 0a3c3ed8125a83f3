use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::navigation::{NavigationEvent, NavigationIntent};
use crate::widgets::router::{RouterEvent, RouterIntent};
use crate::widgets::search::{SearchEffect, SearchEvent};

/// Route a search event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: SearchEvent) -> Task<AppEvent> {
    match event {
        SearchEvent::Intent(event) => {
            app.widgets.search.reduce(event).map(AppEvent::Search)
        },
        SearchEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_effect(effect: SearchEffect) -> Task<AppEvent> {
    match effect {
        SearchEffect::CloseMenus => Task::done(AppEvent::Navigation(
            NavigationEvent::Intent(NavigationIntent::CloseAll),
        )),
        SearchEffect::Navigate { route } => Task::done(AppEvent::Router(
            RouterEvent::Intent(RouterIntent::Navigate { route }),
        )),
    }
}
