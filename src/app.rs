// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! `App` wires together the language manager, the page model, and the two
//! menu state machines, and translates messages into side effects like
//! preference persistence or analytics events. The page-load sequence and
//! the language-switch policy live here so user-facing behavior is easy to
//! audit in one place.

use crate::analytics::{action, category, AnalyticsSink};
use crate::config::PreferenceStore;
use crate::i18n::manager::LanguageManager;
use crate::language::Language;
use crate::page::document::Document;
use crate::page::{lang_menu, nav};
use crate::seo;

/// Root state bridging the page model, localization, and persisted
/// preferences.
pub struct App {
    manager: LanguageManager,
    nav: nav::State,
    lang_menu: lang_menu::State,
    document: Document,
    store: Box<dyn PreferenceStore>,
    analytics: Option<Box<dyn AnalyticsSink>>,
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Nav(nav::Message),
    LangMenu(lang_menu::Message),
    NavLinkClicked { label: String },
    CtaClicked { label: String },
    /// An observed image entered the viewport.
    ImageVisible { index: usize },
}

impl App {
    pub fn new(
        document: Document,
        store: Box<dyn PreferenceStore>,
        analytics: Option<Box<dyn AnalyticsSink>>,
    ) -> Self {
        Self {
            manager: LanguageManager::default(),
            nav: nav::State::default(),
            lang_menu: lang_menu::State::default(),
            document,
            store,
            analytics,
        }
    }

    /// The page-load sequence: adopt the stored or detected language,
    /// render, then run the SEO passes. `reported_locale` is the host's
    /// locale string; pass [`crate::language::detect_preferred`]'s input
    /// (`sys_locale::get_locale()`) in production and a fixed tag in tests.
    pub fn initialize(&mut self, reported_locale: Option<&str>) {
        let stored = self.store.language();
        self.manager.initialize(
            stored.as_deref(),
            reported_locale,
            &mut self.document,
            self.store.as_mut(),
        );

        seo::lazy::setup(&mut self.document);
        seo::alt_text::backfill(&mut self.document);
        let links = seo::hreflang::alternate_links(self.document.base_url());
        self.document.append_head_links(links);
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Nav(message) => match nav::update(message, &mut self.nav) {
                nav::Event::MenuOpened => {
                    self.document.set_body_scroll_locked(true);
                    self.document.set_nav_expanded(true);
                }
                nav::Event::MenuClosed => {
                    self.document.set_body_scroll_locked(false);
                    self.document.set_nav_expanded(false);
                }
                nav::Event::None => {}
            },
            Message::LangMenu(message) => {
                match lang_menu::update(message, &mut self.lang_menu) {
                    lang_menu::Event::Selected(code) => self.select_language(&code),
                    lang_menu::Event::None => {}
                }
            }
            Message::NavLinkClicked { label } => {
                self.track(category::NAVIGATION, action::CLICK, &label);
            }
            Message::CtaClicked { label } => {
                self.track(category::CTA, action::CLICK, &label);
            }
            Message::ImageVisible { index } => {
                seo::lazy::image_visible(&mut self.document, index);
            }
        }
    }

    pub fn current_language(&self) -> Language {
        self.manager.current()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn nav_menu_open(&self) -> bool {
        self.nav.is_open()
    }

    pub fn language_menu_open(&self) -> bool {
        self.lang_menu.is_open()
    }

    /// A rejected code leaves the menu open and tracks nothing; the switch
    /// itself already logged the condition.
    fn select_language(&mut self, code: &str) {
        let applied = self
            .manager
            .set_language(code, &mut self.document, self.store.as_mut());
        if applied {
            self.lang_menu.close();
            let label = self.manager.current().native_name();
            self.track(category::LANGUAGE, action::CHANGE, label);
        }
    }

    fn track(&self, category: &str, action: &str, label: &str) {
        if let Some(sink) = &self.analytics {
            sink.track(category, action, label);
        }
    }
}
