mod event;
pub(crate) mod model;
mod reducer;
mod state;

use iced::Task;

pub(crate) use event::{RouterEffect, RouterEvent, RouterIntent};
pub(crate) use model::RouteKey;
use state::RouterState;

/// In-process host router owning the current route.
pub(crate) struct RouterWidget {
    state: RouterState,
}

impl RouterWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: RouterState::default(),
        }
    }

    /// Reduce a navigation request into a route change.
    pub(crate) fn reduce(&mut self, event: RouterIntent) -> Task<RouterEvent> {
        reducer::reduce(&mut self.state, event)
    }

    pub(crate) fn current(&self) -> &RouteKey {
        self.state.current()
    }

    pub(crate) fn can_go_back(&self) -> bool {
        self.state.can_go_back()
    }
}
