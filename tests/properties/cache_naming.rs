//! Property tests for cache file naming.

use std::collections::HashSet;
use std::path::Path;

use chrono::{Local, TimeZone};
use proptest::prelude::*;

use picbed::domain::entities::{PictureRef, CACHE_EXTENSION};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: within one run (same second) every reference gets its own
    /// cache file, even when URLs repeat.
    #[test]
    fn property_cache_names_unique_within_a_run(
        count in 1usize..64,
        secs in 0i64..4_000_000_000,
    ) {
        let at = Local.timestamp_opt(secs, 0).single();
        prop_assume!(at.is_some());
        let at = at.unwrap();

        let names: HashSet<String> = (0..count)
            .map(|i| PictureRef::new(i, "http://same/url.png").cache_file_name(&at))
            .collect();

        prop_assert_eq!(names.len(), count);
    }

    /// PROPERTY: names are `<14 digits>_<index>.png` and live in the cache dir.
    #[test]
    fn property_cache_name_shape(index in 0usize..10_000, secs in 0i64..4_000_000_000) {
        let at = Local.timestamp_opt(secs, 0).single();
        prop_assume!(at.is_some());
        let at = at.unwrap();
        let picture = PictureRef::new(index, "http://a/b.jpg");

        let name = picture.cache_file_name(&at);
        let (stamp, rest) = name.split_once('_').unwrap();
        prop_assert_eq!(stamp.len(), 14);
        prop_assert!(stamp.chars().all(|c| c.is_ascii_digit()));
        prop_assert_eq!(rest, format!("{}.{}", index, CACHE_EXTENSION));

        let path = picture.cache_path(Path::new("cache"), &at);
        prop_assert_eq!(path, Path::new("cache").join(&name));
    }
}
