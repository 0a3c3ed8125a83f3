use iced::Task;

use super::event::{RouterEffect, RouterEvent, RouterIntent};
use super::model::RouteKey;
use super::state::RouterState;

/// Reduce a navigation request into a route change.
pub(crate) fn reduce(
    state: &mut RouterState,
    event: RouterIntent,
) -> Task<RouterEvent> {
    let route = match event {
        RouterIntent::Navigate { route } => {
            state.push(RouteKey::new(route));
            state.current().clone()
        },
        RouterIntent::Back => match state.pop() {
            Some(route) => route.clone(),
            None => return Task::none(),
        },
    };

    log::info!("route changed: {route}");
    Task::done(RouterEvent::Effect(RouterEffect::RouteChanged { route }))
}
