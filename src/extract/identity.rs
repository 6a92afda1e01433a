// src/extract/identity.rs
//
// Who the character is and where the page came from. The character id
// is the one thing extraction cannot proceed without: a record that
// cannot be correlated to its source sheet is useless downstream.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;
use url::Url;

use crate::core::dom;
use crate::error::ScrapeError;
use crate::params::{SHEET_HOST, SHEET_PATH};

const NAME: &[&str] = &[
    ".ddbc-character-tidbits__heading h1",
    ".ct-character-tidbits__heading h1",
];
const RACE: &[&str] = &[
    ".ddbc-character-summary__race",
    ".ct-character-summary__race",
];
const BACKGROUND: &[&str] = &[
    ".ddbc-character-summary__background",
    ".ct-character-summary__background",
];

// Saved pages carry their own location.
const CANONICAL_LINK: &[&str] = &["link[rel=\"canonical\"]"];
const OG_URL_META: &[&str] = &["meta[property=\"og:url\"]"];

static CHARACTER_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/characters/(\d+)").expect("character id pattern"));

/// Precondition: the URL must point at a character sheet on the sheet
/// site. Checked before any extraction runs.
pub fn verify_sheet_page(url: &Url) -> Result<(), ScrapeError> {
    let host_ok = url.host_str().is_some_and(|h| h.contains(SHEET_HOST));
    if host_ok && url.path().contains(SHEET_PATH) {
        Ok(())
    } else {
        Err(ScrapeError::WrongPage(url.to_string()))
    }
}

/// Numeric character id from the page path, e.g. "/characters/90210042".
pub fn character_id(url: &Url) -> Option<String> {
    CHARACTER_ID_RE
        .captures(url.path())
        .map(|cap| cap[1].to_string())
}

/// Recover the page URL from the document itself: canonical link first,
/// og:url as fallback.
pub fn page_url(doc: &Html) -> Option<Url> {
    let href = dom::select_first(doc, CANONICAL_LINK)
        .and_then(|el| el.value().attr("href").map(str::to_string))
        .or_else(|| {
            dom::select_first(doc, OG_URL_META)
                .and_then(|el| el.value().attr("content").map(str::to_string))
        })?;
    Url::parse(&href).ok()
}

pub fn name(doc: &Html) -> String {
    dom::text_or(doc, NAME, "")
}

pub fn race(doc: &Html) -> String {
    dom::text_or(doc, RACE, "")
}

pub fn background(doc: &Html) -> String {
    dom::text_or(doc, BACKGROUND, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn accepts_character_sheet_urls() {
        assert!(verify_sheet_page(&url("https://www.dndbeyond.com/characters/90210042")).is_ok());
        assert!(verify_sheet_page(&url("https://dndbeyond.com/characters/1/")).is_ok());
    }

    #[test]
    fn rejects_other_pages() {
        assert!(verify_sheet_page(&url("https://www.dndbeyond.com/monsters/wolf")).is_err());
        assert!(verify_sheet_page(&url("https://example.com/characters/42")).is_err());
    }

    #[test]
    fn character_id_from_path() {
        assert_eq!(
            character_id(&url("https://www.dndbeyond.com/characters/90210042")).as_deref(),
            Some("90210042")
        );
        assert_eq!(
            character_id(&url("https://www.dndbeyond.com/characters/42/builder")).as_deref(),
            Some("42")
        );
        assert_eq!(character_id(&url("https://www.dndbeyond.com/my-characters")), None);
    }

    #[test]
    fn canonical_link_beats_og_url() {
        let doc = Html::parse_document(r#"
            <head>
              <link rel="canonical" href="https://www.dndbeyond.com/characters/1">
              <meta property="og:url" content="https://www.dndbeyond.com/characters/2">
            </head>
        "#);
        assert_eq!(
            page_url(&doc).unwrap().as_str(),
            "https://www.dndbeyond.com/characters/1"
        );
    }

    #[test]
    fn og_url_fallback() {
        let doc = Html::parse_document(r#"
            <head><meta property="og:url" content="https://www.dndbeyond.com/characters/2"></head>
        "#);
        assert_eq!(
            page_url(&doc).unwrap().as_str(),
            "https://www.dndbeyond.com/characters/2"
        );
    }

    #[test]
    fn trivial_fields_default_to_empty() {
        let doc = Html::parse_document("<body></body>");
        assert_eq!(name(&doc), "");
        assert_eq!(race(&doc), "");
        assert_eq!(background(&doc), "");
    }
}
