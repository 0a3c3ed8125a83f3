use std::fmt;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Display languages supported by the shell.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Language {
    #[default]
    En,
    Es,
    Ja,
}

impl Language {
    pub(crate) const ALL: [Language; 3] =
        [Language::En, Language::Es, Language::Ja];

    pub(crate) fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Ja => "ja",
        }
    }

    pub(crate) fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(code))
    }

    fn table(self) -> Table {
        match self {
            Language::En => EN,
            Language::Es => ES,
            Language::Ja => JA,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Ja => "日本語",
        };
        f.write_str(name)
    }
}

const YEAR_PLACEHOLDER: &str = "{year}";

const EN: &[(&str, &str)] = &[
    ("home", "Home"),
    ("foundation", "Foundation"),
    ("tools", "Tools"),
    ("resources", "Resources"),
    ("about", "About"),
    ("manifesto", "Manifesto"),
    ("forTraders", "For Traders"),
    ("forDevelopers", "For Developers"),
    ("defiFundamentals", "DeFi Fundamentals"),
    ("securityGuide", "Security Guide"),
    ("walletGuide", "Wallet Guide"),
    ("privacyPolicy", "Privacy Policy"),
    ("termsOfService", "Terms of Service"),
    ("cookiePolicy", "Cookie Policy"),
    ("menu", "Menu"),
    ("search", "Search"),
    ("searchPlaceholder", "Search the entire site..."),
    ("searchHint", "Search our knowledge base, guides, tools, and more"),
    ("closeSearch", "Close search"),
    ("returnHome", "Return to Homepage"),
    ("notFound", "Page not found"),
    ("noResults", "No pages match your search."),
    ("noResultsHint", "Try different keywords or browse the menus."),
    ("brand", "Open Crypto Foundation"),
    ("brandShort", "OCF"),
    (
        "copyright",
        "© {year} Open Crypto Foundation. All rights reserved.",
    ),
];

const ES: &[(&str, &str)] = &[
    ("home", "Inicio"),
    ("foundation", "Fundación"),
    ("tools", "Herramientas"),
    ("resources", "Recursos"),
    ("about", "Acerca de"),
    ("manifesto", "Manifiesto"),
    ("forTraders", "Para Traders"),
    ("forDevelopers", "Para Desarrolladores"),
    ("defiFundamentals", "Fundamentos DeFi"),
    ("securityGuide", "Guía de Seguridad"),
    ("walletGuide", "Guía de Billeteras"),
    ("privacyPolicy", "Política de Privacidad"),
    ("termsOfService", "Términos de Servicio"),
    ("cookiePolicy", "Política de Cookies"),
    ("menu", "Menú"),
    ("search", "Buscar"),
    ("searchPlaceholder", "Buscar en todo el sitio..."),
    ("searchHint", "Busca en guías, herramientas, recursos y más"),
    ("closeSearch", "Cerrar búsqueda"),
    ("returnHome", "Volver al inicio"),
    ("notFound", "Página no encontrada"),
    ("noResults", "Ninguna página coincide con tu búsqueda."),
    ("noResultsHint", "Prueba otras palabras clave o explora los menús."),
    ("brand", "Open Crypto Foundation"),
    ("brandShort", "OCF"),
    (
        "copyright",
        "© {year} Open Crypto Foundation. Todos los derechos reservados.",
    ),
];

const JA: &[(&str, &str)] = &[
    ("home", "ホーム"),
    ("foundation", "財団"),
    ("tools", "ツール"),
    ("resources", "リソース"),
    ("about", "会社概要"),
    ("manifesto", "声明"),
    ("forTraders", "トレーダー向け"),
    ("forDevelopers", "開発者向け"),
    ("defiFundamentals", "DeFi基礎"),
    ("securityGuide", "セキュリティガイド"),
    ("walletGuide", "ウォレットガイド"),
    ("privacyPolicy", "プライバシーポリシー"),
    ("termsOfService", "利用規約"),
    ("cookiePolicy", "クッキーポリシー"),
    ("menu", "メニュー"),
    ("search", "検索"),
    ("searchPlaceholder", "サイト全体を検索..."),
    ("searchHint", "ガイド、ツール、リソースなどを検索"),
    ("closeSearch", "検索を閉じる"),
    ("returnHome", "ホームに戻る"),
    ("notFound", "ページが見つかりません"),
    ("noResults", "検索に一致するページはありません。"),
    ("noResultsHint", "別のキーワードを試すか、メニューから探してください。"),
    ("brand", "Open Crypto Foundation"),
    ("brandShort", "OCF"),
    (
        "copyright",
        "© {year} Open Crypto Foundation. 無断複写・転載を禁じます。",
    ),
];

type Table = &'static [(&'static str, &'static str)];

fn lookup(table: Table, key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, value)| *value)
}

/// Look `key` up in `table`, then in English, then return the key itself.
fn resolve<'a>(table: Table, language: Language, key: &'a str) -> &'a str {
    if let Some(value) = lookup(table, key) {
        return value;
    }

    log::warn!(
        "translation missing for key: {key} in language: {}",
        language.code()
    );
    lookup(EN, key).unwrap_or(key)
}

/// Resolve translated strings for the active language.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Translator {
    language: Language,
    year: i32,
}

impl Translator {
    pub(crate) fn new(language: Language) -> Self {
        Self::with_year(language, chrono::Local::now().year())
    }

    pub(crate) fn with_year(language: Language, year: i32) -> Self {
        Self { language, year }
    }

    /// Translate `key`, falling back to English and then to the key itself.
    pub(crate) fn text(&self, key: &str) -> String {
        let resolved = resolve(self.language.table(), self.language, key);

        if resolved.contains(YEAR_PLACEHOLDER) {
            resolved.replace(YEAR_PLACEHOLDER, &self.year.to_string())
        } else {
            resolved.to_string()
        }
    }

    /// Translate an optional key, using `fallback` when no key is given.
    pub(crate) fn label(&self, key: Option<&str>, fallback: &str) -> String {
        match key {
            Some(key) => self.text(key),
            None => fallback.to_string(),
        }
    }
}
