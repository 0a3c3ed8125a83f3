use iced::Task;

use crate::app::{App, AppEvent};
use crate::layout;
use crate::widgets::navigation::{NavigationEvent, NavigationIntent};
use crate::widgets::pointer_watch::{
    PointerWatchCtx, PointerWatchEffect, PointerWatchEvent, PointerWatchIntent,
};

/// Route pointer activity through the watcher or into the menu store.
pub(crate) fn route(app: &mut App, event: PointerWatchEvent) -> Task<AppEvent> {
    match event {
        PointerWatchEvent::Intent(event) => route_intent(app, event),
        PointerWatchEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, event: PointerWatchIntent) -> Task<AppEvent> {
    let widgets = &mut app.widgets;
    let navigation = widgets.navigation.vm();
    let regions = layout::menu_regions(
        &navigation,
        widgets.viewport.class(),
        widgets.viewport.width().unwrap_or_default(),
    );
    let ctx = PointerWatchCtx {
        open_menu: widgets.navigation.open_menu(),
        has_expanded_submenu: widgets.navigation.has_expanded_submenu(),
        regions: &regions,
    };

    widgets
        .pointer_watch
        .reduce(event, &ctx)
        .map(AppEvent::PointerWatch)
}

fn route_effect(effect: PointerWatchEffect) -> Task<AppEvent> {
    let intent = match effect {
        PointerWatchEffect::CloseMenu(menu) => {
            NavigationIntent::CloseMenu(menu)
        },
        PointerWatchEffect::CollapseSubmenu => {
            NavigationIntent::CollapseSubmenu
        },
    };

    Task::done(AppEvent::Navigation(NavigationEvent::Intent(intent)))
}
