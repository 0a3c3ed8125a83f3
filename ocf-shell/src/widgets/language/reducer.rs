use iced::Task;

use super::event::{LanguageEffect, LanguageEvent, LanguageIntent};
use super::model::Language;
use super::state::LanguageState;
use super::storage::{ShellSettings, save_settings};

/// Reduce a language intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut LanguageState,
    event: LanguageIntent,
) -> Task<LanguageEvent> {
    match event {
        LanguageIntent::Select(language) => {
            if state.active() == language {
                return Task::none();
            }

            state.set_active(language);
            log::info!("language changed to {}", language.code());

            if state.save_in_flight() {
                log::debug!("language save queued: {}", language.code());
                state.set_pending_save(Some(language));
                return Task::none();
            }

            state.set_save_in_flight(true);
            request_save(language)
        },
        LanguageIntent::SaveCompleted(language) => {
            log::debug!("language preference saved: {}", language.code());
            match settle_save(state, Some(language)) {
                Some(next) => request_save(next),
                None => Task::none(),
            }
        },
        LanguageIntent::SaveFailed(message) => {
            log::warn!("failed to save language preference: {message}");
            match settle_save(state, None) {
                Some(next) => request_save(next),
                None => Task::none(),
            }
        },
    }
}

/// Finish the running save and pick the follow-up one, if any.
///
/// Saves never overlap. A language selected while a save was running is
/// written next unless it is the one that was just saved.
fn settle_save(
    state: &mut LanguageState,
    saved: Option<Language>,
) -> Option<Language> {
    let next = state
        .pending_save()
        .filter(|pending| Some(*pending) != saved);
    state.set_pending_save(None);
    state.set_save_in_flight(next.is_some());
    next
}

/// Persist `language` off the update loop.
pub(super) fn request_save(language: Language) -> Task<LanguageEvent> {
    let settings = ShellSettings {
        language: Some(language),
    };

    Task::perform(
        async move {
            match save_settings(&settings) {
                Ok(()) => Ok(language),
                Err(err) => Err(format!("{err}")),
            }
        },
        |result| match result {
            Ok(language) => {
                LanguageEvent::Effect(LanguageEffect::SaveCompleted(language))
            },
            Err(message) => {
                LanguageEvent::Effect(LanguageEffect::SaveFailed(message))
            },
        },
    )
}

#[cfg(test)]
mod tests {
    use super::{reduce, settle_save};
    use crate::widgets::language::model::Language;
    use crate::widgets::language::state::LanguageState;
    use crate::widgets::language::{LanguageIntent, LanguageWidget};

    #[test]
    fn given_save_in_flight_when_another_language_selected_then_save_is_queued()
     {
        let mut state = LanguageState::new(Language::En);

        let _task = reduce(&mut state, LanguageIntent::Select(Language::Es));
        let _task = reduce(&mut state, LanguageIntent::Select(Language::Ja));

        assert_eq!(state.active(), Language::Ja);
        assert!(state.save_in_flight());
        assert_eq!(state.pending_save(), Some(Language::Ja));
    }

    #[test]
    fn given_queued_language_when_first_save_completes_then_follow_up_starts()
     {
        let mut state = LanguageState::new(Language::En);
        let _task = reduce(&mut state, LanguageIntent::Select(Language::Es));
        let _task = reduce(&mut state, LanguageIntent::Select(Language::Ja));

        let next = settle_save(&mut state, Some(Language::Es));

        assert_eq!(next, Some(Language::Ja));
        assert!(state.save_in_flight());
        assert_eq!(state.pending_save(), None);

        let _task =
            reduce(&mut state, LanguageIntent::SaveCompleted(Language::Ja));
        assert!(!state.save_in_flight());
    }

    #[test]
    fn given_queued_language_equal_to_saved_when_settled_then_no_follow_up() {
        let mut state = LanguageState::new(Language::En);
        let _task = reduce(&mut state, LanguageIntent::Select(Language::Es));
        let _task = reduce(&mut state, LanguageIntent::Select(Language::Ja));
        let _task = reduce(&mut state, LanguageIntent::Select(Language::Es));

        let next = settle_save(&mut state, Some(Language::Es));

        assert_eq!(next, None);
        assert!(!state.save_in_flight());
    }

    #[test]
    fn given_queued_language_when_save_fails_then_follow_up_still_starts() {
        let mut state = LanguageState::new(Language::En);
        let _task = reduce(&mut state, LanguageIntent::Select(Language::Es));
        let _task = reduce(&mut state, LanguageIntent::Select(Language::Ja));

        let _task = reduce(
            &mut state,
            LanguageIntent::SaveFailed(String::from("disk full")),
        );

        assert!(state.save_in_flight());
        assert_eq!(state.pending_save(), None);
    }

    #[test]
    fn given_other_language_when_selected_then_it_is_active_and_save_starts() {
        let mut widget = LanguageWidget::with_language(Language::En);

        let _task = widget.reduce(LanguageIntent::Select(Language::Es));

        assert_eq!(widget.active(), Language::Es);
        assert!(widget.save_in_flight());
        assert_eq!(widget.translator().text("tools"), "Herramientas");
    }

    #[test]
    fn given_same_language_when_selected_then_no_save_is_started() {
        let mut widget = LanguageWidget::with_language(Language::Es);

        let _task = widget.reduce(LanguageIntent::Select(Language::Es));

        assert_eq!(widget.active(), Language::Es);
        assert!(!widget.save_in_flight());
    }

    #[test]
    fn given_save_failure_when_reported_then_language_stays_selected() {
        let mut widget = LanguageWidget::with_language(Language::En);

        let _task = widget.reduce(LanguageIntent::SaveFailed(String::from(
            "settings IO failed",
        )));

        assert_eq!(widget.active(), Language::En);
        assert!(!widget.save_in_flight());
    }

    #[test]
    fn given_save_completed_when_reported_then_flag_is_cleared() {
        let mut widget = LanguageWidget::with_language(Language::Ja);

        let _task =
            widget.reduce(LanguageIntent::SaveCompleted(Language::Ja));

        assert!(!widget.save_in_flight());
        assert_eq!(widget.translator().text("search"), "検索");
    }
}
