//! Command implementations
//!
//! Each command returns data; printing is left to `main`.

use crate::config::CliConfig;
use crate::error::{CliError, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tapedeck_core::{TagBundle, TagExtractor};
use tapedeck_importer::scanner::{load_files, FileScanner};
use tapedeck_importer::{ImportConfig, ImportError, ImportSummary, SelectedFile, TrackImporter};
use tapedeck_lyrics::{format_clock, LyricsView};
use tapedeck_metadata::MetadataReader;
use tracing::{debug, info};

/// Tags read from one file by `inspect`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectReport {
    pub file: String,
    pub format: String,
    pub tags: TagBundle,
    /// Why nothing could be read, if so
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Read the tags of each file
pub async fn inspect(paths: &[PathBuf], config: &ImportConfig) -> Vec<InspectReport> {
    let reader = MetadataReader::with_id3_scan_limit(config.id3_scan_limit);
    let mut reports = Vec::with_capacity(paths.len());

    for path in paths {
        let report = match SelectedFile::from_path(path).await {
            Ok(file) => {
                let raw = file.as_raw();
                let (tags, note) = match reader.try_extract(&raw) {
                    Ok(tags) => (tags, None),
                    Err(e) => (TagBundle::default(), Some(e.to_string())),
                };
                InspectReport {
                    file: path.display().to_string(),
                    format: raw.format().label().to_string(),
                    tags,
                    note,
                }
            }
            Err(e) => InspectReport {
                file: path.display().to_string(),
                format: String::new(),
                tags: TagBundle::default(),
                note: Some(e.to_string()),
            },
        };
        reports.push(report);
    }

    reports
}

/// Scan `paths`, load every file and import the batch
pub async fn import(paths: &[PathBuf], config: &CliConfig) -> Result<ImportSummary> {
    let import_config = config.import_config()?;

    let mut scanner = FileScanner::new().follow_links(config.import.follow_links);
    if let Some(depth) = config.import.max_depth {
        scanner = scanner.max_depth(depth);
    }

    let found = scanner.scan_all(paths);
    info!("Found {} files", found.len());
    let files = load_files(&found).await;

    let (mut rx, handle) = TrackImporter::new(import_config).import_files(files);
    while let Some(progress) = rx.recv().await {
        if let Some(current) = &progress.current_file {
            info!(
                "[{:>5.1}%] {} ({}/{})",
                progress.percentage(),
                current,
                progress.processed_files,
                progress.total_files
            );
        }
    }

    let summary = handle.await.map_err(ImportError::from)??;
    Ok(summary)
}

/// Load the lyric timeline of an `.lrc` file or of an audio file's tags
pub async fn lyrics(path: &Path, config: &ImportConfig) -> Result<LyricsView> {
    let is_lrc = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("lrc"));

    let raw = if is_lrc {
        tokio::fs::read_to_string(path).await?
    } else {
        let file = SelectedFile::from_path(path).await?;
        let reader = MetadataReader::with_id3_scan_limit(config.id3_scan_limit);
        reader
            .extract(&file.as_raw())
            .lyrics
            .ok_or_else(|| CliError::NoLyrics(path.display().to_string()))?
    };

    let view = LyricsView::from_raw(Some(&raw));
    debug!(
        "Loaded {} lyric lines (synced: {})",
        view.len(),
        view.is_synced
    );
    Ok(view)
}

/// Render a timeline, marking the line active at `position`
pub fn render_timeline(view: &LyricsView, position: Option<f64>) -> String {
    let active = position.and_then(|p| view.active_index(p));

    view.lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let marker = if Some(index) == active { "> " } else { "  " };
            match line.timestamp() {
                Some(time) if view.is_synced => {
                    format!("{marker}[{:>5}] {}", format_clock(time), line.text)
                }
                _ if view.is_synced => format!("{marker}        {}", line.text),
                _ => format!("{marker}{}", line.text),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
