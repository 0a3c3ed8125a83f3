use iced::{Event, Subscription, event, mouse, touch, window};

use super::{App, AppEvent};
use crate::widgets::pointer_watch::{PointerWatchEvent, PointerWatchIntent};

/// Build the active subscription set.
///
/// Both listeners live as long as the shell itself.
pub(super) fn subscription(_app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));
    let pointer_subs = event::listen_with(pointer_event);

    Subscription::batch([win_subs, pointer_subs])
}

/// Keep only the pointer activity the outside-interaction watcher needs.
///
/// Presses are forwarded whether or not a widget captured them.
fn pointer_event(
    event: Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<AppEvent> {
    let intent = match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            PointerWatchIntent::CursorMoved { position }
        },
        Event::Mouse(mouse::Event::CursorLeft) => {
            PointerWatchIntent::CursorLeft
        },
        Event::Mouse(mouse::Event::ButtonPressed(
            mouse::Button::Left | mouse::Button::Right | mouse::Button::Middle,
        )) => PointerWatchIntent::Pressed { position: None },
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            PointerWatchIntent::Pressed {
                position: Some(position),
            }
        },
        _ => return None,
    };

    Some(AppEvent::PointerWatch(PointerWatchEvent::Intent(intent)))
}
