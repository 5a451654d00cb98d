// SPDX-License-Identifier: MPL-2.0
//! Lazy image loading.
//!
//! Mirrors the intersection-observer flow: every image outside the hero
//! section is marked for lazy loading and observed; when an observed image
//! becomes visible and carries a `data-src`, that value is promoted to
//! `src`, the image is marked loaded, and observation stops.

use crate::page::document::Document;

/// Marks all non-hero images as lazy and starts observing them. Runs once
/// at page load.
pub fn setup(document: &mut Document) {
    for image in document.images_mut() {
        if image.hero {
            continue;
        }
        image.lazy = true;
        image.observed = true;
    }
}

/// An observed image entered the viewport. Images without a `data-src`
/// stay observed; the swap happens when the attribute appears.
pub fn image_visible(document: &mut Document, index: usize) {
    let Some(image) = document.images_mut().get_mut(index) else {
        return;
    };
    if !image.observed {
        return;
    }
    if let Some(data_src) = image.data_src.clone() {
        image.src = Some(data_src);
        image.loaded = true;
        image.observed = false;
    }
}
