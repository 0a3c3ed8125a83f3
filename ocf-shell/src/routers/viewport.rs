use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::navigation::{MenuId, NavigationEvent, NavigationIntent};
use crate::widgets::viewport::{
    ViewportEffect, ViewportEvent, ViewportIntent, ViewportMode,
};

/// Route a viewport event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: ViewportEvent) -> Task<AppEvent> {
    match event {
        ViewportEvent::Intent(event) => route_intent(app, event),
        ViewportEvent::Effect(effect) => route_effect(effect),
    }
}

pub(crate) fn route_intent(
    app: &mut App,
    event: ViewportIntent,
) -> Task<AppEvent> {
    app.widgets.viewport.reduce(event).map(AppEvent::Viewport)
}

fn route_effect(effect: ViewportEffect) -> Task<AppEvent> {
    match effect {
        ViewportEffect::ModeChanged { mode } => {
            Task::batch(unreachable_menus(mode).iter().map(|menu| {
                Task::done(AppEvent::Navigation(NavigationEvent::Intent(
                    NavigationIntent::CloseMenu(*menu),
                )))
            }))
        },
    }
}

/// Menus that have no rendered region in `mode`.
fn unreachable_menus(mode: ViewportMode) -> &'static [MenuId] {
    match mode {
        ViewportMode::Desktop => &[MenuId::Mobile],
        ViewportMode::Mobile => &MenuId::DESKTOP,
    }
}

#[cfg(test)]
mod tests {
    use super::unreachable_menus;
    use crate::widgets::navigation::MenuId;
    use crate::widgets::viewport::ViewportMode;

    #[test]
    fn given_mode_change_when_listing_unreachable_menus_then_other_layout_is_closed()
     {
        assert_eq!(unreachable_menus(ViewportMode::Desktop), &[MenuId::Mobile]);
        assert_eq!(
            unreachable_menus(ViewportMode::Mobile),
            &[MenuId::Main, MenuId::Tools, MenuId::Resources]
        );
    }
}
