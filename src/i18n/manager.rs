// SPDX-License-Identifier: MPL-2.0
//! The language manager: current-language state, text substitution, and
//! preference handling.
//!
//! Held as an explicit context object by the application root rather than
//! ambient state, so rendering and selection handling can be exercised
//! against a plain [`Document`] and an in-memory store.

use crate::config::PreferenceStore;
use crate::error::Error;
use crate::i18n::catalog::{is_html_key, Catalog};
use crate::language::{self, Language};
use crate::page::document::Document;

pub struct LanguageManager {
    catalog: Catalog,
    current: Language,
}

impl Default for LanguageManager {
    fn default() -> Self {
        Self::new(Catalog::load())
    }
}

impl LanguageManager {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            current: Language::default(),
        }
    }

    pub fn current(&self) -> Language {
        self.current
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Switches to `code`. An unknown code is logged and ignored: state,
    /// document, and store are left untouched and `false` is returned.
    /// On success the document is re-rendered, the language indicator
    /// updated, and the new code persisted immediately.
    pub fn set_language(
        &mut self,
        code: &str,
        document: &mut Document,
        store: &mut dyn PreferenceStore,
    ) -> bool {
        let Some(language) = Language::from_code(code) else {
            eprintln!("{}", Error::UnsupportedLanguage(code.to_string()));
            return false;
        };
        self.apply(language, document, store, true);
        true
    }

    /// Page-load entry point. A stored, valid preference wins and skips
    /// detection entirely; otherwise the reported locale is detected,
    /// adopted, and persisted so detection happens at most once per client.
    pub fn initialize(
        &mut self,
        stored: Option<&str>,
        reported_locale: Option<&str>,
        document: &mut Document,
        store: &mut dyn PreferenceStore,
    ) {
        match stored.and_then(Language::from_code) {
            Some(saved) => self.apply(saved, document, store, false),
            None => {
                let detected = reported_locale
                    .map(language::detect_from_tag)
                    .unwrap_or_default();
                self.apply(detected, document, store, true);
            }
        }
    }

    /// Applies the current language to every marked slot. Keys absent from
    /// the current table leave the slot's prior content untouched; there is
    /// no cross-language fallback.
    pub fn render(&self, document: &mut Document) {
        for slot in document.text_slots_mut() {
            let key = slot.key().to_string();
            if let Some(text) = self.catalog.lookup(self.current, &key) {
                if is_html_key(&key) {
                    slot.set_html(text);
                } else {
                    slot.set_text(text);
                }
            }
        }
    }

    fn apply(
        &mut self,
        language: Language,
        document: &mut Document,
        store: &mut dyn PreferenceStore,
        persist: bool,
    ) {
        self.current = language;
        self.render(document);
        document.set_flag_indicator(language);
        if persist {
            if let Err(err) = store.set_language(language.code()) {
                eprintln!("Failed to persist language preference: {}", err);
            }
        }
    }
}
