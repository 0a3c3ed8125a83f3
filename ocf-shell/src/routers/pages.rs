use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::pages::{PagesEffect, PagesEvent};
use crate::widgets::router::{RouterEvent, RouterIntent};

/// Route a pages event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: PagesEvent) -> Task<AppEvent> {
    match event {
        PagesEvent::Intent(event) => {
            app.widgets.pages.reduce(event).map(AppEvent::Pages)
        },
        PagesEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_effect(effect: PagesEffect) -> Task<AppEvent> {
    let intent = match effect {
        PagesEffect::Navigate { route } => RouterIntent::Navigate { route },
        PagesEffect::Back => RouterIntent::Back,
    };

    Task::done(AppEvent::Router(RouterEvent::Intent(intent)))
}
