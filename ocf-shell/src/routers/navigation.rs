use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::navigation::{
    NavigationEffect, NavigationEvent, NavigationIntent,
};
use crate::widgets::router::{RouterEvent, RouterIntent};

/// Route a navigation event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: NavigationEvent) -> Task<AppEvent> {
    match event {
        NavigationEvent::Intent(event) => route_intent(app, event),
        NavigationEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, event: NavigationIntent) -> Task<AppEvent> {
    app.widgets
        .navigation
        .reduce(event)
        .map(AppEvent::Navigation)
}

fn route_effect(effect: NavigationEffect) -> Task<AppEvent> {
    match effect {
        NavigationEffect::NavigateTo { route } => Task::done(AppEvent::Router(
            RouterEvent::Intent(RouterIntent::Navigate { route }),
        )),
    }
}
