// SPDX-License-Identifier: MPL-2.0
//! `speats_site` models the client-side runtime of the Speats marketing
//! site: language switching over a four-language translation catalog,
//! detection and persistence of the visitor's language preference, the
//! mobile-navigation and language-menu state machines, and the SEO passes
//! the site runs at page load.
//!
//! The page is an explicit [`page::document::Document`] value and every
//! operation is a synchronous state transition, so the whole runtime can be
//! driven and asserted on without a browser.

pub mod analytics;
pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod language;
pub mod page;
pub mod seo;
