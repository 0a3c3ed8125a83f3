use iced::Task;

use super::event::{ViewportEffect, ViewportEvent, ViewportIntent};
use super::state::ViewportState;

/// Reduce a viewport intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut ViewportState,
    event: ViewportIntent,
) -> Task<ViewportEvent> {
    let size = match event {
        ViewportIntent::Measured(size) => {
            log::debug!("initial window size: {size:?}");
            size
        },
        ViewportIntent::Resized(size) => size,
    };

    let previous = state.measure(size.width);
    let mode = state.class().mode();
    if previous.mode() == mode {
        return Task::none();
    }

    log::debug!("viewport mode changed: {:?} -> {mode:?}", previous.mode());
    Task::done(ViewportEvent::Effect(ViewportEffect::ModeChanged { mode }))
}
