//! Import orchestration: selection, tag extraction and track assembly

use crate::selection::{find_cover, is_audio};
use crate::{ImportConfig, ImportError, ImportProgress, ImportSummary, Result, SelectedFile};
use rand::seq::SliceRandom;
use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Instant;
use tapedeck_core::{CassetteColor, TagExtractor, Track, CASSETTE_COLORS};
use tapedeck_metadata::MetadataReader;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, info, warn};

/// Builds tracks from a batch of selected files
#[derive(Clone)]
pub struct TrackImporter {
    config: ImportConfig,
    extractor: Arc<dyn TagExtractor>,
}

impl TrackImporter {
    /// Create an importer that reads tags with `MetadataReader`
    pub fn new(config: ImportConfig) -> Self {
        let reader = MetadataReader::with_id3_scan_limit(config.id3_scan_limit);
        Self::with_extractor(config, Arc::new(reader))
    }

    /// Create an importer with a custom tag extractor
    pub fn with_extractor(config: ImportConfig, extractor: Arc<dyn TagExtractor>) -> Self {
        Self { config, extractor }
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Import a batch in the background
    ///
    /// Returns a channel for receiving progress updates and a handle to the
    /// import task. The channel closes when the import finishes.
    pub fn import_files(
        &self,
        files: Vec<SelectedFile>,
    ) -> (mpsc::Receiver<ImportProgress>, JoinHandle<Result<ImportSummary>>) {
        let (tx, rx) = mpsc::channel(100);

        let config = self.config.clone();
        let extractor = Arc::clone(&self.extractor);

        let handle = tokio::spawn(async move {
            Self::import_files_impl(files, config, extractor, tx).await
        });

        (rx, handle)
    }

    /// Import a batch and wait for the summary
    pub async fn import(&self, files: Vec<SelectedFile>) -> Result<ImportSummary> {
        let (mut rx, handle) = self.import_files(files);
        while let Some(progress) = rx.recv().await {
            debug!(
                "Import progress: {}/{}",
                progress.processed_files, progress.total_files
            );
        }
        handle.await?
    }

    /// Build the track for a single audio file, without a cover
    pub fn import_file(&self, file: &SelectedFile) -> Result<Track> {
        if !is_audio(file, &self.config) {
            return Err(ImportError::UnsupportedFormat(file.name.clone()));
        }
        Ok(build_track(self.extractor.as_ref(), file, None))
    }

    async fn import_files_impl(
        files: Vec<SelectedFile>,
        config: ImportConfig,
        extractor: Arc<dyn TagExtractor>,
        progress_tx: mpsc::Sender<ImportProgress>,
    ) -> Result<ImportSummary> {
        let start_time = Instant::now();

        let cover = find_cover(&files, &config.cover_keywords).map(|f| f.name.clone());
        let selected = files.len();
        let audio: Vec<SelectedFile> = files
            .into_iter()
            .filter(|f| is_audio(f, &config))
            .collect();
        let skipped = selected
            .saturating_sub(audio.len())
            .saturating_sub(usize::from(cover.is_some()));

        let total_files = audio.len();
        let mut progress = ImportProgress::new(total_files);
        let _ = progress_tx.send(progress.clone()).await;

        // A zero limit would leave every task waiting for a permit
        let semaphore = Arc::new(Semaphore::new(config.max_concurrent.max(1)));
        let mut tasks = JoinSet::new();

        for file in audio {
            let semaphore = Arc::clone(&semaphore);
            let extractor = Arc::clone(&extractor);
            let cover = cover.clone();

            tasks.spawn(async move {
                let name = file.name.clone();
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(e) => return (name, Err(ImportError::Task(e.to_string()))),
                };
                let result = tokio::task::spawn_blocking(move || {
                    build_track(extractor.as_ref(), &file, cover)
                })
                .await
                .map_err(ImportError::from);
                (name, result)
            });
        }

        let mut tracks = Vec::with_capacity(total_files);
        let mut errors = Vec::new();

        while let Some(joined) = tasks.join_next().await {
            let (name, result) = match joined {
                Ok(outcome) => outcome,
                Err(e) => (String::from("<unknown>"), Err(ImportError::from(e))),
            };

            match result {
                Ok(track) => {
                    debug!("Imported: {}", name);
                    tracks.push(track);
                    progress.successful_imports += 1;
                }
                Err(e) => {
                    warn!("Failed to import {}: {}", name, e);
                    errors.push((name.clone(), e.to_string()));
                    progress.failed_imports += 1;
                }
            }

            progress.processed_files += 1;
            progress.current_file = Some(name);
            let _ = progress_tx.send(progress.clone()).await;
        }

        tracks.sort_by(compare_names);

        let summary = ImportSummary {
            total_processed: progress.processed_files,
            successful: progress.successful_imports,
            failed: progress.failed_imports,
            skipped,
            tracks,
            cover,
            errors,
            duration_ms: u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX),
        };
        info!("{}", summary.summary_text());

        Ok(summary)
    }
}

/// Read one file's tags and fold them into a new track
fn build_track(extractor: &dyn TagExtractor, file: &SelectedFile, cover: Option<String>) -> Track {
    let raw = file.as_raw();
    let tags = if extractor.supports(&raw) {
        extractor.extract(&raw)
    } else {
        Default::default()
    };

    let mut track = Track::new(&file.name).with_tags(tags);
    track.cover = cover;
    track.color = random_color();
    track
}

fn random_color() -> CassetteColor {
    CASSETTE_COLORS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or_default()
}

/// Case-insensitive name order, ties broken by the exact name
fn compare_names(a: &Track, b: &Track) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}
