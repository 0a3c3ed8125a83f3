mod catalog;
mod errors;
mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use event::{NavigationEffect, NavigationEvent, NavigationIntent};
pub(crate) use model::{MenuId, NavigationViewModel};
use state::NavigationState;

/// Navigation widget owning the menu state store.
pub(crate) struct NavigationWidget {
    state: NavigationState,
}

impl NavigationWidget {
    /// Construct the widget with the embedded menu catalog.
    pub(crate) fn new() -> Self {
        Self {
            state: NavigationState::with_catalog(
                catalog::load_embedded_catalog(),
            ),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: NavigationIntent,
    ) -> Task<NavigationEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> NavigationViewModel<'_> {
        NavigationViewModel {
            catalog: self.state.catalog(),
            open_menu: self.state.open_menu(),
            expanded_submenu: self.state.expanded_submenu(),
        }
    }

    pub(crate) fn open_menu(&self) -> Option<MenuId> {
        self.state.open_menu()
    }

    pub(crate) fn is_open(&self, menu: MenuId) -> bool {
        self.state.is_open(menu)
    }

    /// Return whether a submenu is expanded under the open menu.
    pub(crate) fn has_expanded_submenu(&self) -> bool {
        self.state.expanded_submenu().is_some()
    }
}
