// SPDX-License-Identifier: MPL-2.0
//! Backfills missing `alt` attributes from surrounding context.

use crate::page::document::Document;

/// Site-wide fallback when no context text is available.
pub const FALLBACK_ALT: &str = "Immagine Speats";

/// Gives every image without an `alt` attribute one derived from, in order:
/// the trimmed text of its parent element, the nearest section heading, or
/// the site fallback. Images that already carry an `alt` (even an empty
/// one) are left alone.
pub fn backfill(document: &mut Document) {
    for image in document.images_mut() {
        if image.alt.is_some() {
            continue;
        }
        let parent = image.parent_text.trim();
        let alt = if !parent.is_empty() {
            parent.to_string()
        } else if let Some(heading) = image
            .section_heading
            .as_deref()
            .filter(|heading| !heading.is_empty())
        {
            heading.to_string()
        } else {
            FALLBACK_ALT.to_string()
        };
        image.alt = Some(alt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::document::ImageSlot;

    #[test]
    fn parent_text_wins_over_heading() {
        let mut document = Document::new("https://speats.ch/");
        document.push_image(
            ImageSlot::new()
                .with_parent_text("  Process Automation  ")
                .with_section_heading("Our AI Solutions."),
        );

        backfill(&mut document);
        assert_eq!(document.images()[0].alt(), Some("Process Automation"));
    }

    #[test]
    fn heading_is_used_when_parent_text_is_blank() {
        let mut document = Document::new("https://speats.ch/");
        document.push_image(
            ImageSlot::new()
                .with_parent_text("   ")
                .with_section_heading("Our Approach"),
        );

        backfill(&mut document);
        assert_eq!(document.images()[0].alt(), Some("Our Approach"));
    }

    #[test]
    fn fallback_applies_without_any_context() {
        let mut document = Document::new("https://speats.ch/");
        document.push_image(ImageSlot::new());

        backfill(&mut document);
        assert_eq!(document.images()[0].alt(), Some(FALLBACK_ALT));
    }

    #[test]
    fn existing_alt_is_preserved() {
        let mut document = Document::new("https://speats.ch/");
        document.push_image(
            ImageSlot::new()
                .with_alt("BrokerAI dashboard")
                .with_parent_text("something else"),
        );

        backfill(&mut document);
        assert_eq!(document.images()[0].alt(), Some("BrokerAI dashboard"));
    }
}
