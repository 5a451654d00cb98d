// SPDX-License-Identifier: MPL-2.0
//! Alternate-language head links (`<link rel="alternate" hreflang=…>`).

use crate::language::Language;

/// One `rel="alternate"` link destined for the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternateLink {
    pub hreflang: String,
    pub href: String,
}

/// Builds one link per catalog language plus an `x-default`, from the page
/// URL with any fragment stripped. The `lang` query parameter is appended
/// with `?` or `&` depending on whether the URL already has a query.
pub fn alternate_links(page_url: &str) -> Vec<AlternateLink> {
    let base = page_url.split('#').next().unwrap_or(page_url);
    let separator = if base.contains('?') { '&' } else { '?' };

    let mut links: Vec<AlternateLink> = Language::ALL
        .into_iter()
        .map(|language| AlternateLink {
            hreflang: language.code().to_string(),
            href: format!("{base}{separator}lang={}", language.code()),
        })
        .collect();

    links.push(AlternateLink {
        hreflang: "x-default".to_string(),
        href: base.to_string(),
    });
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_link_per_language_plus_default() {
        let links = alternate_links("https://speats.ch/");
        assert_eq!(links.len(), Language::ALL.len() + 1);
        assert_eq!(links[0].hreflang, "en");
        assert_eq!(links[0].href, "https://speats.ch/?lang=en");
        assert_eq!(links.last().unwrap().hreflang, "x-default");
        assert_eq!(links.last().unwrap().href, "https://speats.ch/");
    }

    #[test]
    fn existing_query_uses_ampersand() {
        let links = alternate_links("https://speats.ch/?ref=ad");
        assert_eq!(links[1].hreflang, "it");
        assert_eq!(links[1].href, "https://speats.ch/?ref=ad&lang=it");
    }

    #[test]
    fn fragment_is_stripped() {
        let links = alternate_links("https://speats.ch/index.html#services");
        assert_eq!(links[2].href, "https://speats.ch/index.html?lang=fr");
        assert_eq!(
            links.last().unwrap().href,
            "https://speats.ch/index.html"
        );
    }
}
