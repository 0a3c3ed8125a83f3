use iced::Task;

use super::event::{NavigationEffect, NavigationEvent, NavigationIntent};
use super::state::NavigationState;

/// Reduce a navigation intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut NavigationState,
    event: NavigationIntent,
) -> Task<NavigationEvent> {
    match event {
        NavigationIntent::OpenMenu(menu) => {
            state.open(menu);
            Task::none()
        },
        NavigationIntent::CloseMenu(menu) => {
            state.close(menu);
            Task::none()
        },
        NavigationIntent::ToggleMenu(menu) => {
            state.toggle(menu);
            log::debug!("menu toggled: {menu:?} -> {:?}", state.open_menu());
            Task::none()
        },
        NavigationIntent::ToggleSubmenu(name) => {
            state.toggle_submenu(name);
            Task::none()
        },
        NavigationIntent::CollapseSubmenu => {
            state.collapse_submenu();
            Task::none()
        },
        NavigationIntent::CloseAll => {
            state.close_all();
            Task::none()
        },
        NavigationIntent::ItemSelected { href } => {
            state.close_all();
            Task::done(NavigationEvent::Effect(NavigationEffect::NavigateTo {
                route: href,
            }))
        },
    }
}
