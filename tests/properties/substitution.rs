//! Property tests for URL substitution during migration.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use proptest::prelude::*;

use picbed::application::{MigrateOptions, MigrateUseCase, PictureTransfer};
use picbed::domain::entities::Document;
use picbed::domain::ports::{
    DocumentRepository, PictureSource, PictureStore, StoreError, StoreResult,
};
use picbed::domain::services::locate_pictures;
use picbed::domain::value_objects::StoreBackend;
use picbed::PicbedResult;

/// Unused by `migrate_text`; present to satisfy the use case
struct NoDocuments;

impl DocumentRepository for NoDocuments {
    fn load(&self, path: &Path) -> PicbedResult<Document> {
        Ok(Document::new(path, ""))
    }

    fn save(&self, _path: &Path, _content: &str) -> PicbedResult<()> {
        Ok(())
    }

    fn list(&self, _dir: &Path, _extension: &str) -> PicbedResult<Vec<PathBuf>> {
        Ok(Vec::new())
    }
}

/// Fails every URL in `failing`
struct FlakySource {
    failing: HashSet<String>,
}

impl PictureSource for FlakySource {
    fn fetch(&self, url: &str, _local_path: &Path) -> StoreResult<()> {
        if self.failing.contains(url) {
            return Err(StoreError::Fetch {
                url: url.to_string(),
                message: "unreachable".to_string(),
            });
        }
        Ok(())
    }
}

/// Maps every picture to `https://bkt.ep/pfx/<last path segment of the url>`.
///
/// The cache path is ignored so the new URL depends only on the original.
struct NamingStore;

thread_local! {
    static LAST_URL: std::cell::RefCell<String> = const { std::cell::RefCell::new(String::new()) };
}

impl PictureStore for NamingStore {
    fn backend(&self) -> StoreBackend {
        StoreBackend::AliyunOss
    }

    fn upload(&self, _local_path: &Path) -> StoreResult<String> {
        Ok(LAST_URL.with(|u| {
            let url = u.borrow();
            let name = url.rsplit('/').next().unwrap_or_default();
            format!("https://bkt.ep/pfx/{}", name)
        }))
    }

    fn download(&self, _remote_key: &str, _local_path: &Path) -> StoreResult<()> {
        Ok(())
    }

    fn public_url(&self, remote_key: &str) -> String {
        format!("https://bkt.ep/{}", remote_key)
    }
}

/// Records the URL being fetched so the store can name the upload after it
struct RecordingSource(FlakySource);

impl PictureSource for RecordingSource {
    fn fetch(&self, url: &str, local_path: &Path) -> StoreResult<()> {
        LAST_URL.with(|u| *u.borrow_mut() = url.to_string());
        self.0.fetch(url, local_path)
    }
}

fn use_case(
    failing: HashSet<String>,
) -> MigrateUseCase<NoDocuments, RecordingSource, NamingStore> {
    let source = RecordingSource(FlakySource { failing });
    MigrateUseCase::new(
        NoDocuments,
        PictureTransfer::new(source, NamingStore),
        MigrateOptions::new(),
    )
}

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9]{1,6}\\.png").unwrap()
}

fn document() -> impl Strategy<Value = (String, Vec<String>)> {
    proptest::collection::vec((0..4usize, name()), 0..8).prop_map(|parts| {
        let mut text = String::from("# doc\n");
        let mut urls = Vec::new();
        for (host, name) in parts {
            let url = format!("http://host{}/img/{}", host, name);
            text.push_str(&format!("para ![p]({})\n", url));
            urls.push(url);
        }
        (text, urls)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a second migration pass over the output changes nothing.
    #[test]
    fn property_substitution_is_idempotent((text, _urls) in document()) {
        let migrate = use_case(HashSet::new());

        let pictures = locate_pictures(&text);
        let (once, _) = migrate.migrate_text(&text, &pictures);
        let again_pictures = locate_pictures(&once);
        let (twice, outcomes) = migrate.migrate_text(&once, &again_pictures);

        prop_assert_eq!(&twice, &once);
        prop_assert!(outcomes.iter().all(|o| o.is_migrated()));
    }

    /// PROPERTY: one outcome per reference in document order; failed URLs
    /// stay in the text, migrated ones are gone.
    #[test]
    fn property_failures_are_isolated(
        (text, urls) in document(),
        fail_mask in proptest::collection::vec(any::<bool>(), 8),
    ) {
        let failing: HashSet<String> = urls
            .iter()
            .zip(&fail_mask)
            .filter(|(_, fail)| **fail)
            .map(|(url, _)| url.clone())
            .collect();
        let migrate = use_case(failing.clone());

        let pictures = locate_pictures(&text);
        let (output, outcomes) = migrate.migrate_text(&text, &pictures);

        prop_assert_eq!(outcomes.len(), urls.len());
        for (i, outcome) in outcomes.iter().enumerate() {
            prop_assert_eq!(outcome.index, i);
            prop_assert_eq!(&outcome.original_url, &urls[i]);
            prop_assert_eq!(outcome.is_migrated(), !failing.contains(&urls[i]));
        }
        for url in &urls {
            prop_assert_eq!(output.contains(url.as_str()), failing.contains(url));
        }
    }

    /// PROPERTY: a document without pictures is returned unchanged.
    #[test]
    fn property_no_pictures_no_transfers(
        text in proptest::string::string_regex("[A-Za-z0-9 #\n]{0,64}").unwrap()
    ) {
        let migrate = use_case(HashSet::new());

        let (output, outcomes) = migrate.migrate_text(&text, &locate_pictures(&text));

        prop_assert_eq!(output, text);
        prop_assert!(outcomes.is_empty());
    }
}
