use super::model::Language;

/// Locale variables consulted in order of precedence.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Detect the system language from the process environment.
pub(crate) fn detect_system_language() -> Option<Language> {
    detect_with(|name| std::env::var(name).ok())
}

fn detect_with(lookup: impl Fn(&str) -> Option<String>) -> Option<Language> {
    let locale = LOCALE_VARS
        .into_iter()
        .filter_map(lookup)
        .find(|value| !value.trim().is_empty())?;

    language_from_locale(&locale)
}

/// Map a POSIX locale such as `es_ES.UTF-8` to a supported language.
pub(crate) fn language_from_locale(locale: &str) -> Option<Language> {
    let primary = locale
        .trim()
        .split(['_', '-', '.', '@'])
        .next()
        .unwrap_or_default();

    Language::from_code(primary)
}

/// Choose the startup language and whether it still has to be saved.
///
/// A saved preference wins. Otherwise a non-English system language is
/// adopted and persisted, and English is used without saving.
pub(crate) fn initial_language(
    saved: Option<Language>,
    system: Option<Language>,
) -> (Language, bool) {
    match (saved, system) {
        (Some(language), _) => (language, false),
        (None, Some(language)) if language != Language::En => (language, true),
        _ => (Language::En, false),
    }
}
