use crate::language::Language;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Keys containing this marker are applied with raw-HTML injection instead
/// of plain text. No key in the current catalog carries it; the marker is
/// kept for compatibility with the `data-i18n` attribute contract.
const HTML_KEY_MARKER: &str = "html_";

pub fn is_html_key(key: &str) -> bool {
    key.contains(HTML_KEY_MARKER)
}

/// The embedded translation catalog: one Fluent bundle per supported
/// language, loaded once from the compiled-in `.ftl` assets.
pub struct Catalog {
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::load()
    }
}

impl Catalog {
    pub fn load() -> Self {
        let mut bundles = HashMap::new();

        for language in Language::ALL {
            let filename = format!("{}.ftl", language.code());
            let content = Asset::get(&filename)
                .unwrap_or_else(|| panic!("Missing embedded catalog file: {filename}"));
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let res = FluentResource::try_new(source).expect("Failed to parse FTL file.");
            let locale: LanguageIdentifier = language
                .code()
                .parse()
                .expect("catalog language codes are valid identifiers");
            let mut bundle = FluentBundle::new(vec![locale]);
            bundle.add_resource(res).expect("Failed to add resource.");
            bundles.insert(language, bundle);
        }

        Self { bundles }
    }

    /// Pure lookup: the display string for `key` in `language`, or `None`
    /// when the key is absent from that language's table. No fallback to
    /// another language happens here; missing keys are the caller's
    /// partial-translation policy to handle.
    pub fn lookup(&self, language: Language, key: &str) -> Option<String> {
        let bundle = self.bundles.get(&language)?;
        let msg = bundle.get_message(key)?;
        let pattern = msg.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            Some(value.into_owned())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::keys::TranslationKey;

    #[test]
    fn every_key_is_present_in_every_language() {
        let catalog = Catalog::load();
        for language in Language::ALL {
            for key in TranslationKey::ALL {
                assert!(
                    catalog.lookup(language, key.as_str()).is_some(),
                    "key {:?} missing from {} table",
                    key.as_str(),
                    language
                );
            }
        }
    }

    #[test]
    fn lookup_returns_language_specific_text() {
        let catalog = Catalog::load();
        assert_eq!(
            catalog.lookup(Language::Fr, "nav_home").as_deref(),
            Some("Accueil")
        );
        assert_eq!(
            catalog.lookup(Language::De, "nav_home").as_deref(),
            Some("Startseite")
        );
        assert_eq!(
            catalog.lookup(Language::En, "nav_home").as_deref(),
            Some("Home")
        );
        assert_eq!(
            catalog.lookup(Language::It, "nav_about").as_deref(),
            Some("Chi Siamo")
        );
    }

    #[test]
    fn lookup_preserves_punctuation_and_symbols() {
        let catalog = Catalog::load();
        assert_eq!(
            catalog.lookup(Language::En, "footer_copyright").as_deref(),
            Some("© 2025 Speats. All Rights Reserved.")
        );
        assert_eq!(
            catalog.lookup(Language::It, "email_us").as_deref(),
            Some("O inviaci un'email:")
        );
    }

    #[test]
    fn lookup_returns_none_for_unknown_key() {
        let catalog = Catalog::load();
        assert_eq!(catalog.lookup(Language::En, "no_such_key"), None);
        assert_eq!(catalog.lookup(Language::De, ""), None);
    }

    #[test]
    fn html_marker_is_detected_anywhere_in_the_key() {
        assert!(is_html_key("hero_html_banner"));
        assert!(is_html_key("html_footer"));
        assert!(!is_html_key("hero_title"));
    }

    #[test]
    fn no_catalog_key_is_html_bearing() {
        for key in TranslationKey::ALL {
            assert!(!is_html_key(key.as_str()));
        }
    }
}
