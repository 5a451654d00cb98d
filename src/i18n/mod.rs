// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the site.
//!
//! This module owns the translation catalog, the current-language state,
//! and the substitution of translated text into the page.
//!
//! # Features
//!
//! - Automatic language detection from the stored preference or host locale
//! - Compile-time embedded Fluent catalogs for the four supported languages
//! - Runtime language switching with immediate persistence
//! - Silent skip of keys missing from the current table (partial-translation
//!   policy)

pub mod catalog;
pub mod keys;
pub mod manager;
