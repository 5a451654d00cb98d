// SPDX-License-Identifier: MPL-2.0
//! Explicit model of the parts of the page the runtime touches.
//!
//! The runtime never owns the whole page; it owns the translatable text
//! slots (the `data-i18n` contract), the images it lazy-loads and backfills
//! alt text for, the alternate-language head links, and a handful of
//! page-level flags (scroll lock, navigation ARIA state, the language
//! indicator). Keeping this as a plain value lets every behavior be tested
//! without a UI runtime.

use crate::language::Language;
use crate::seo::hreflang::AlternateLink;

/// How translated content is applied to a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectionMode {
    Text,
    Html,
}

/// A node marked with `data-i18n="<key>"`. The language manager is the sole
/// writer of its content.
#[derive(Debug, Clone)]
pub struct TextSlot {
    key: String,
    content: String,
    mode: InjectionMode,
}

impl TextSlot {
    pub fn new(key: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            content: content.into(),
            mode: InjectionMode::Text,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn mode(&self) -> InjectionMode {
        self.mode
    }

    pub(crate) fn set_text(&mut self, content: String) {
        self.content = content;
        self.mode = InjectionMode::Text;
    }

    pub(crate) fn set_html(&mut self, content: String) {
        self.content = content;
        self.mode = InjectionMode::Html;
    }
}

/// An image element together with the surrounding context the SEO passes
/// read (parent text and the nearest section heading).
#[derive(Debug, Clone, Default)]
pub struct ImageSlot {
    pub(crate) src: Option<String>,
    pub(crate) data_src: Option<String>,
    pub(crate) alt: Option<String>,
    pub(crate) hero: bool,
    pub(crate) parent_text: String,
    pub(crate) section_heading: Option<String>,
    pub(crate) lazy: bool,
    pub(crate) loaded: bool,
    pub(crate) observed: bool,
}

impl ImageSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    pub fn with_data_src(mut self, data_src: impl Into<String>) -> Self {
        self.data_src = Some(data_src.into());
        self
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Marks the image as part of the hero section, which is excluded from
    /// lazy loading.
    pub fn hero(mut self) -> Self {
        self.hero = true;
        self
    }

    pub fn with_parent_text(mut self, text: impl Into<String>) -> Self {
        self.parent_text = text.into();
        self
    }

    pub fn with_section_heading(mut self, heading: impl Into<String>) -> Self {
        self.section_heading = Some(heading.into());
        self
    }

    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    pub fn alt(&self) -> Option<&str> {
        self.alt.as_deref()
    }

    pub fn is_lazy(&self) -> bool {
        self.lazy
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_observed(&self) -> bool {
        self.observed
    }
}

/// The page as the runtime sees it.
#[derive(Debug, Default)]
pub struct Document {
    base_url: String,
    text_slots: Vec<TextSlot>,
    images: Vec<ImageSlot>,
    head_links: Vec<AlternateLink>,
    flag_indicator: Option<&'static str>,
    body_scroll_locked: bool,
    nav_expanded: bool,
}

impl Document {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn push_text_slot(&mut self, slot: TextSlot) {
        self.text_slots.push(slot);
    }

    pub fn push_image(&mut self, image: ImageSlot) {
        self.images.push(image);
    }

    pub fn text_slots(&self) -> &[TextSlot] {
        &self.text_slots
    }

    pub(crate) fn text_slots_mut(&mut self) -> &mut [TextSlot] {
        &mut self.text_slots
    }

    /// First slot carrying `key`, if any.
    pub fn text_slot(&self, key: &str) -> Option<&TextSlot> {
        self.text_slots.iter().find(|slot| slot.key() == key)
    }

    pub fn images(&self) -> &[ImageSlot] {
        &self.images
    }

    pub(crate) fn images_mut(&mut self) -> &mut [ImageSlot] {
        &mut self.images
    }

    pub fn head_links(&self) -> &[AlternateLink] {
        &self.head_links
    }

    pub(crate) fn append_head_links(&mut self, links: Vec<AlternateLink>) {
        self.head_links.extend(links);
    }

    /// The emoji currently shown by the language-menu indicator.
    pub fn flag_indicator(&self) -> Option<&'static str> {
        self.flag_indicator
    }

    pub(crate) fn set_flag_indicator(&mut self, language: Language) {
        self.flag_indicator = Some(language.flag());
    }

    pub fn body_scroll_locked(&self) -> bool {
        self.body_scroll_locked
    }

    pub(crate) fn set_body_scroll_locked(&mut self, locked: bool) {
        self.body_scroll_locked = locked;
    }

    /// `aria-expanded` on the hamburger toggle.
    pub fn nav_aria_expanded(&self) -> bool {
        self.nav_expanded
    }

    /// `aria-hidden` on the navigation wrapper. Always the inverse of
    /// [`Document::nav_aria_expanded`].
    pub fn nav_aria_hidden(&self) -> bool {
        !self.nav_expanded
    }

    pub(crate) fn set_nav_expanded(&mut self, expanded: bool) {
        self.nav_expanded = expanded;
    }
}
