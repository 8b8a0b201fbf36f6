//! Property tests for picture extraction.

use proptest::prelude::*;

use picbed::domain::services::{locate_pictures, picture_urls};

fn url() -> impl Strategy<Value = String> {
    proptest::string::string_regex("https?://[a-z0-9.-]{1,12}/[A-Za-z0-9_./-]{0,20}").unwrap()
}

fn alt_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 ,.-]{0,12}").unwrap()
}

/// Text that cannot form image markup on its own
fn filler() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 #*_\n-]{0,24}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every `![alt](url)` is extracted, in document order,
    /// duplicates included.
    #[test]
    fn property_extracts_all_pictures_in_order(
        pictures in proptest::collection::vec((alt_text(), url(), filler()), 0..8),
        head in filler(),
    ) {
        let mut text = head;
        for (alt, url, tail) in &pictures {
            text.push_str(&format!("![{}]({})", alt, url));
            text.push_str(tail);
        }

        let expected: Vec<&str> = pictures.iter().map(|(_, url, _)| url.as_str()).collect();
        let found: Vec<&str> = picture_urls(&text).collect();
        prop_assert_eq!(found, expected);

        let located = locate_pictures(&text);
        for (i, picture) in located.iter().enumerate() {
            prop_assert_eq!(picture.index, i);
        }
    }

    /// PROPERTY: plain links and bare URLs are never extracted.
    #[test]
    fn property_non_image_markup_is_ignored(
        links in proptest::collection::vec((alt_text(), url(), filler()), 0..8),
    ) {
        let mut text = String::new();
        for (label, url, tail) in &links {
            text.push_str(&format!("[{}]({}) {} ", label, url, url));
            text.push_str(tail);
        }

        prop_assert!(locate_pictures(&text).is_empty());
    }

    /// PROPERTY: extraction never panics on arbitrary input.
    #[test]
    fn property_locator_total_on_any_text(text in any::<String>()) {
        let _ = locate_pictures(&text);
    }
}
