mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use event::{SearchEffect, SearchEvent, SearchIntent};
pub(crate) use model::SearchRequest;
use state::SearchState;

/// Search dispatch for the header search input.
pub(crate) struct SearchWidget {
    state: SearchState,
}

impl SearchWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: SearchState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(&mut self, event: SearchIntent) -> Task<SearchEvent> {
        reducer::reduce(&mut self.state, event)
    }

    pub(crate) fn query(&self) -> &str {
        self.state.query()
    }
}
