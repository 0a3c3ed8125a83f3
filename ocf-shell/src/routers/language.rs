use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::language::{LanguageEffect, LanguageEvent, LanguageIntent};

/// Route a language event through the widget reducer.
pub(crate) fn route(app: &mut App, event: LanguageEvent) -> Task<AppEvent> {
    match event {
        LanguageEvent::Intent(event) => {
            app.widgets.language.reduce(event).map(AppEvent::Language)
        },
        LanguageEvent::Effect(effect) => route_effect(effect),
    }
}

/// Feed save completions back into the widget.
fn route_effect(effect: LanguageEffect) -> Task<AppEvent> {
    let intent = match effect {
        LanguageEffect::SaveCompleted(language) => {
            LanguageIntent::SaveCompleted(language)
        },
        LanguageEffect::SaveFailed(message) => {
            LanguageIntent::SaveFailed(message)
        },
    };

    Task::done(AppEvent::Language(LanguageEvent::Intent(intent)))
}
