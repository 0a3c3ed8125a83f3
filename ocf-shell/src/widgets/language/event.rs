use super::model::Language;

/// Intent events handled by the language widget.
#[derive(Debug, Clone)]
pub(crate) enum LanguageIntent {
    Select(Language),
    SaveCompleted(Language),
    SaveFailed(String),
}

/// Effect events produced by the language reducer.
#[derive(Debug, Clone)]
pub(crate) enum LanguageEffect {
    SaveCompleted(Language),
    SaveFailed(String),
}

/// Language event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum LanguageEvent {
    Intent(LanguageIntent),
    Effect(LanguageEffect),
}
