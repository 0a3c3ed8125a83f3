mod event;
pub(crate) mod model;
mod reducer;
mod state;

use iced::Task;

pub(crate) use event::{
    PointerWatchEffect, PointerWatchEvent, PointerWatchIntent,
};
use model::MenuRegions;
use state::PointerWatchState;

/// Menu state the watcher needs to decide on a dismissal.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PointerWatchCtx<'a> {
    pub(crate) open_menu: Option<crate::widgets::navigation::MenuId>,
    pub(crate) has_expanded_submenu: bool,
    pub(crate) regions: &'a MenuRegions,
}

/// Outside-interaction watcher for the navigation menus.
pub(crate) struct PointerWatchWidget {
    state: PointerWatchState,
}

impl PointerWatchWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: PointerWatchState::default(),
        }
    }

    /// Reduce pointer activity into menu dismissal effects.
    pub(crate) fn reduce(
        &mut self,
        event: PointerWatchIntent,
        ctx: &PointerWatchCtx<'_>,
    ) -> Task<PointerWatchEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    #[cfg(test)]
    pub(crate) fn cursor(&self) -> Option<iced::Point> {
        self.state.cursor()
    }
}
