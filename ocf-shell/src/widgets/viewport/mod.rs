mod event;
pub(crate) mod model;
mod reducer;
mod state;

use iced::Task;

pub(crate) use event::{ViewportEffect, ViewportEvent, ViewportIntent};
pub(crate) use model::{ViewportClass, ViewportMode};
use state::ViewportState;

/// Responsive mode detector fed by window size events.
pub(crate) struct ViewportWidget {
    state: ViewportState,
}

impl ViewportWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: ViewportState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: ViewportIntent,
    ) -> Task<ViewportEvent> {
        reducer::reduce(&mut self.state, event)
    }

    pub(crate) fn class(&self) -> ViewportClass {
        self.state.class()
    }

    #[cfg(test)]
    pub(crate) fn mode(&self) -> ViewportMode {
        self.state.class().mode()
    }

    pub(crate) fn width(&self) -> Option<f32> {
        self.state.width()
    }
}
