//! Picture Locator
//!
//! Finds embedded-image markup `![alt](url)` in markdown text.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::entities::PictureRef;

/// Embedded-image markup. `.` does not cross newlines, matching is lazy.
const PICTURE_PATTERN: &str = r"!\[.*?\]\((.*?)\)";

fn picture_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PICTURE_PATTERN).expect("picture pattern is a valid regex"))
}

/// Lazily yield picture URLs in document order.
///
/// URLs are returned exactly as written: no trimming, no deduplication,
/// no validation.
pub fn picture_urls(text: &str) -> impl Iterator<Item = &str> + '_ {
    picture_regex()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
}

/// All picture references in `text`, indexed from 0.
pub fn locate_pictures(text: &str) -> Vec<PictureRef> {
    picture_urls(text)
        .enumerate()
        .map(|(index, url)| PictureRef::new(index, url))
        .collect()
}
