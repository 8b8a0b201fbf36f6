//! Migrate Use Case
//!
//! Orchestrates the migration of one markdown document:
//! 1. Load the document and locate its pictures
//! 2. For each picture, fetch it into the cache and upload it
//! 3. Substitute the new URL in the text
//! 4. Write the document under the output directory
//!
//! A failing picture never aborts the run; its URL is left as it was.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Duration, Local};
use tracing::{debug, info};

use crate::domain::entities::{Document, PictureRef};
use crate::domain::ports::{
    Clock, DocumentRepository, MigrateEvent, MigrateEventSink, NoopEventSink, PictureSource,
    PictureStore, SystemClock,
};
use crate::domain::services::locate_pictures;
use crate::error::{PicbedError, PicbedResult};

use super::super::transfer::PictureTransfer;
use super::options::MigrateOptions;
use super::result::{MigrateResult, PictureOutcome};

/// A document together with the pictures found in it
#[derive(Debug, Clone)]
struct LoadedDocument {
    document: Document,
    pictures: Vec<PictureRef>,
}

/// Migrate use case - moves a document's pictures to the picture bed
pub struct MigrateUseCase<D, S, P, C = SystemClock>
where
    D: DocumentRepository,
    S: PictureSource,
    P: PictureStore,
    C: Clock,
{
    documents: D,
    transfer: PictureTransfer<S, P>,
    clock: C,
    options: MigrateOptions,
    events: Arc<dyn MigrateEventSink>,
    loaded: Option<LoadedDocument>,
    /// Earliest cache timestamp the next document may use
    next_stamp: Option<DateTime<Local>>,
}

impl<D, S, P> MigrateUseCase<D, S, P, SystemClock>
where
    D: DocumentRepository,
    S: PictureSource,
    P: PictureStore,
{
    pub fn new(documents: D, transfer: PictureTransfer<S, P>, options: MigrateOptions) -> Self {
        Self {
            documents,
            transfer,
            clock: SystemClock,
            options,
            events: Arc::new(NoopEventSink),
            loaded: None,
            next_stamp: None,
        }
    }
}

impl<D, S, P, C> MigrateUseCase<D, S, P, C>
where
    D: DocumentRepository,
    S: PictureSource,
    P: PictureStore,
    C: Clock,
{
    /// Replace the clock used to timestamp cache files
    pub fn with_clock<C2: Clock>(self, clock: C2) -> MigrateUseCase<D, S, P, C2> {
        MigrateUseCase {
            documents: self.documents,
            transfer: self.transfer,
            clock,
            options: self.options,
            events: self.events,
            loaded: self.loaded,
            next_stamp: self.next_stamp,
        }
    }

    /// Report progress to `events`
    pub fn with_events(mut self, events: Arc<dyn MigrateEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn options(&self) -> &MigrateOptions {
        &self.options
    }

    pub fn set_cache_dir(&mut self, cache_dir: impl Into<PathBuf>) {
        self.options.cache_dir = cache_dir.into();
    }

    pub fn set_output_dir(&mut self, output_dir: impl Into<PathBuf>) {
        self.options.output_dir = output_dir.into();
    }

    /// Load a document and locate its pictures, replacing any previous one
    pub fn load(&mut self, path: &Path) -> PicbedResult<&[PictureRef]> {
        let document = self.documents.load(path)?;
        let pictures = locate_pictures(document.content());
        info!(
            document = %path.display(),
            pictures = pictures.len(),
            "loaded document"
        );

        let loaded = self.loaded.insert(LoadedDocument { document, pictures });
        Ok(&loaded.pictures)
    }

    /// Forget the loaded document
    ///
    /// Cache timestamps keep advancing, so the next document never reuses
    /// a cache name of an earlier one.
    pub fn clear(&mut self) {
        self.loaded = None;
    }

    /// Currently loaded document, with any substitutions made so far
    pub fn document(&self) -> Option<&Document> {
        self.loaded.as_ref().map(|l| &l.document)
    }

    /// Pictures located in the loaded document
    pub fn pictures(&self) -> &[PictureRef] {
        self.loaded
            .as_ref()
            .map(|l| l.pictures.as_slice())
            .unwrap_or(&[])
    }

    /// Load `path` and migrate it
    pub fn execute(&mut self, path: &Path) -> PicbedResult<MigrateResult> {
        self.load(path)?;
        self.migrate()
    }

    /// Migrate the loaded document and write it to the output directory
    ///
    /// Fails with `DocumentNotLoaded` before any network activity when
    /// nothing has been loaded.
    pub fn migrate(&mut self) -> PicbedResult<MigrateResult> {
        let loaded = self.loaded.as_ref().ok_or(PicbedError::DocumentNotLoaded)?;
        let source = loaded.document.source_path().to_path_buf();
        let output = loaded
            .document
            .output_path(&self.options.output_dir)
            .ok_or_else(|| PicbedError::NoFileName {
                path: source.clone(),
            })?;

        self.events.on_event(MigrateEvent::Started {
            source: source.clone(),
            picture_count: loaded.pictures.len(),
        });

        let (content, outcomes, last_stamp) =
            self.migrate_pictures(loaded.document.content(), &loaded.pictures, self.next_stamp);
        if let Some(stamp) = last_stamp {
            self.next_stamp = Some(stamp + Duration::seconds(1));
        }

        if let Some(loaded) = self.loaded.as_mut() {
            loaded.document.set_content(content.clone());
        }
        self.documents.save(&output, &content)?;

        let result = MigrateResult {
            source,
            output,
            outcomes,
            content,
        };

        info!(
            document = %result.source.display(),
            output = %result.output.display(),
            migrated = result.migrated_count(),
            failed = result.failed_count(),
            "migrated document"
        );
        self.events.on_event(MigrateEvent::Completed {
            output: result.output.clone(),
            migrated_count: result.migrated_count(),
            failed_count: result.failed_count(),
        });

        Ok(result)
    }

    /// Run every picture through the transfer and substitute the new URLs.
    ///
    /// Pictures are processed in order, each exactly once. On success every
    /// literal occurrence of the original URL is replaced; on failure the
    /// text is left as it is and the error is recorded.
    pub fn migrate_text(&self, text: &str, pictures: &[PictureRef]) -> (String, Vec<PictureOutcome>) {
        let (content, outcomes, _) = self.migrate_pictures(text, pictures, self.next_stamp);
        (content, outcomes)
    }

    /// Cache timestamps are never earlier than `earliest`. Returns the last
    /// timestamp used, if any picture was processed.
    fn migrate_pictures(
        &self,
        text: &str,
        pictures: &[PictureRef],
        earliest: Option<DateTime<Local>>,
    ) -> (String, Vec<PictureOutcome>, Option<DateTime<Local>>) {
        let mut document = Document::new(PathBuf::new(), text);
        let total = pictures.len();
        let mut outcomes = Vec::with_capacity(total);
        let mut last_stamp = None;

        for picture in pictures {
            let now = self.clock.now();
            let stamp = match earliest {
                Some(earliest) if now < earliest => earliest,
                _ => now,
            };
            last_stamp = last_stamp.max(Some(stamp));
            let cache_path = picture.cache_path(&self.options.cache_dir, &stamp);

            match self.transfer.transfer(&picture.url, &cache_path) {
                Ok(new_url) => {
                    let replacements = document.replace_all(&picture.url, &new_url);
                    info!(
                        index = picture.index,
                        total,
                        url = %picture.url,
                        new_url = %new_url,
                        replacements,
                        "migrated picture"
                    );
                    self.events.on_event(MigrateEvent::PictureMigrated {
                        index: picture.index,
                        total,
                        original_url: picture.url.clone(),
                        new_url: new_url.clone(),
                    });
                    outcomes.push(PictureOutcome::migrated(
                        picture.index,
                        picture.url.clone(),
                        cache_path,
                        new_url,
                        replacements,
                    ));
                }
                Err(err) => {
                    debug!(
                        index = picture.index,
                        total,
                        url = %picture.url,
                        error = %err,
                        "failed to migrate picture"
                    );
                    self.events.on_event(MigrateEvent::PictureFailed {
                        index: picture.index,
                        total,
                        original_url: picture.url.clone(),
                        error: err.to_string(),
                    });
                    outcomes.push(PictureOutcome::failed(
                        picture.index,
                        picture.url.clone(),
                        cache_path,
                        err.to_string(),
                    ));
                }
            }
        }

        (document.into_content(), outcomes, last_stamp)
    }
}
