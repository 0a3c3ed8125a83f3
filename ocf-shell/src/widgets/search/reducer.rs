use iced::Task;

use super::event::{SearchEffect, SearchEvent, SearchIntent};
use super::state::SearchState;

/// Reduce a search intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut SearchState,
    event: SearchIntent,
) -> Task<SearchEvent> {
    match event {
        SearchIntent::QueryChanged(text) => {
            state.update_query(text);
            Task::none()
        },
        SearchIntent::Submit => Task::batch(
            submit_effects(state)
                .into_iter()
                .map(|effect| Task::done(SearchEvent::Effect(effect))),
        ),
        SearchIntent::Clear => {
            state.clear();
            Task::none()
        },
    }
}

fn submit_effects(state: &mut SearchState) -> Vec<SearchEffect> {
    let Some(request) = state.take_request() else {
        return Vec::new();
    };

    log::debug!("search submitted: {}", request.query());
    vec![
        SearchEffect::CloseMenus,
        SearchEffect::Navigate {
            route: request.to_route(),
        },
    ]
}
