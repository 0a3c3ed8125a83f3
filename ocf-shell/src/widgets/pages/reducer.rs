use iced::Task;

use super::event::{PagesEffect, PagesEvent, PagesIntent};
use super::state::PagesState;
use crate::widgets::search::SearchRequest;

/// Reduce a pages intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut PagesState,
    event: PagesIntent,
) -> Task<PagesEvent> {
    match event {
        PagesIntent::Show { route } => {
            state.show(&route);
            Task::none()
        },
        PagesIntent::ResultsQueryChanged(text) => {
            state.set_results_query(text);
            Task::none()
        },
        PagesIntent::ResultsSubmit => {
            match SearchRequest::new(state.results_query()) {
                Some(request) => navigate(request.to_route()),
                None => Task::none(),
            }
        },
        PagesIntent::OpenRoute { route } => navigate(route),
        PagesIntent::Back => {
            Task::done(PagesEvent::Effect(PagesEffect::Back))
        },
    }
}

fn navigate(route: String) -> Task<PagesEvent> {
    Task::done(PagesEvent::Effect(PagesEffect::Navigate { route }))
}
