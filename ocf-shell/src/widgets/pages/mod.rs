mod catalog;
mod errors;
mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use event::{PagesEffect, PagesEvent, PagesIntent};
pub(crate) use model::PagesViewModel;
use state::PagesState;

/// Content area showing the page for the current route.
pub(crate) struct PagesWidget {
    state: PagesState,
}

impl PagesWidget {
    /// Construct the widget with the embedded page catalog.
    pub(crate) fn new() -> Self {
        Self {
            state: PagesState::new(catalog::load_embedded_catalog()),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(&mut self, event: PagesIntent) -> Task<PagesEvent> {
        reducer::reduce(&mut self.state, event)
    }

    pub(crate) fn vm(&self) -> PagesViewModel<'_> {
        PagesViewModel {
            page: self.state.page(),
            results_query: self.state.results_query(),
        }
    }
}
