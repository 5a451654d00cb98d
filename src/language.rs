// SPDX-License-Identifier: MPL-2.0
//! The closed set of languages the site ships translations for, plus
//! detection of the visitor's preferred language from the host locale.

use std::fmt;
use unic_langid::LanguageIdentifier;

/// A language the translation catalog carries. `En` is the site default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    It,
    Fr,
    De,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::It, Language::Fr, Language::De];

    /// Primary language subtag, as used in `data-i18n` storage and `lang=`
    /// query parameters.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::It => "it",
            Language::Fr => "fr",
            Language::De => "de",
        }
    }

    /// Emoji shown in the language-menu indicator.
    pub fn flag(self) -> &'static str {
        match self {
            Language::En => "🇬🇧",
            Language::It => "🇮🇹",
            Language::Fr => "🇫🇷",
            Language::De => "🇩🇪",
        }
    }

    /// Name of the language in that language, as shown in the menu options.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::It => "Italiano",
            Language::Fr => "Français",
            Language::De => "Deutsch",
        }
    }

    /// Parses a bare language code. Region subtags are not accepted here;
    /// use [`detect_from_tag`] for full locale strings.
    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Maps a reported locale tag (e.g. `it-CH`, `en_US`) to a supported
/// language by its primary subtag. Unsupported or unparsable tags fall back
/// to the default language.
pub fn detect_from_tag(tag: &str) -> Language {
    let normalized = tag.trim().replace('_', "-");
    match normalized.parse::<LanguageIdentifier>() {
        Ok(id) => Language::from_code(id.language.as_str()).unwrap_or_default(),
        Err(_) => Language::default(),
    }
}

/// Reads the host's reported locale once and maps it to a supported
/// language. Returns the default when the host reports nothing.
pub fn detect_preferred() -> Language {
    sys_locale::get_locale()
        .as_deref()
        .map(detect_from_tag)
        .unwrap_or_default()
}
