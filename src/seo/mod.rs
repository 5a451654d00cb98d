// SPDX-License-Identifier: MPL-2.0
//! SEO housekeeping run once at page load: lazy image loading, alt-text
//! backfill, and alternate-language head links.

pub mod alt_text;
pub mod hreflang;
pub mod lazy;
