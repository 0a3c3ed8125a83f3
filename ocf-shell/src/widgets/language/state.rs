use super::model::Language;

/// Active display language and the progress of its persistence.
#[derive(Debug, Default)]
pub(crate) struct LanguageState {
    active: Language,
    save_in_flight: bool,
    pending_save: Option<Language>,
}

impl LanguageState {
    pub(crate) fn new(active: Language) -> Self {
        Self {
            active,
            save_in_flight: false,
            pending_save: None,
        }
    }

    pub(crate) fn active(&self) -> Language {
        self.active
    }

    pub(crate) fn save_in_flight(&self) -> bool {
        self.save_in_flight
    }

    /// Language waiting for the running save to finish.
    pub(crate) fn pending_save(&self) -> Option<Language> {
        self.pending_save
    }

    pub(super) fn set_active(&mut self, language: Language) {
        self.active = language;
    }

    pub(super) fn set_save_in_flight(&mut self, value: bool) {
        self.save_in_flight = value;
    }

    pub(super) fn set_pending_save(&mut self, language: Option<Language>) {
        self.pending_save = language;
    }
}
