mod errors;
mod event;
pub(crate) mod model;
mod reducer;
mod services;
mod state;
mod storage;
pub(crate) mod view;

use iced::Task;

pub(crate) use event::{LanguageEffect, LanguageEvent, LanguageIntent};
pub(crate) use model::{Language, Translator};
use state::LanguageState;
use storage::SettingsLoadStatus;

/// Language switcher owning the active display language.
pub(crate) struct LanguageWidget {
    state: LanguageState,
    pending_initial_save: bool,
}

impl LanguageWidget {
    /// Load the saved preference, falling back to the system locale.
    pub(crate) fn load() -> Self {
        let saved = match storage::load_settings() {
            Ok(load) => {
                let (settings, status) = load.into_parts();
                match status {
                    SettingsLoadStatus::Loaded => {},
                    SettingsLoadStatus::Missing => {
                        log::debug!("settings file not found, using defaults");
                    },
                    SettingsLoadStatus::Invalid(message) => {
                        log::warn!("settings file invalid: {message}");
                    },
                }
                settings.language
            },
            Err(err) => {
                log::warn!("failed to load settings: {err}");
                None
            },
        };

        let (language, pending_initial_save) = services::initial_language(
            saved,
            services::detect_system_language(),
        );
        log::info!("display language: {}", language.code());

        Self {
            state: LanguageState::new(language),
            pending_initial_save,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_language(language: Language) -> Self {
        Self {
            state: LanguageState::new(language),
            pending_initial_save: false,
        }
    }

    /// Persist a language adopted from the system locale.
    pub(crate) fn startup_task(&mut self) -> Task<LanguageEvent> {
        if !std::mem::take(&mut self.pending_initial_save) {
            return Task::none();
        }

        self.state.set_save_in_flight(true);
        reducer::request_save(self.state.active())
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: LanguageIntent,
    ) -> Task<LanguageEvent> {
        reducer::reduce(&mut self.state, event)
    }

    pub(crate) fn active(&self) -> Language {
        self.state.active()
    }

    #[cfg(test)]
    pub(crate) fn save_in_flight(&self) -> bool {
        self.state.save_in_flight()
    }

    pub(crate) fn translator(&self) -> Translator {
        Translator::new(self.state.active())
    }
}
