//! Common types for the importer

use crate::{ImportError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tapedeck_core::{RawAudioFile, Track};
use tapedeck_metadata::ID3_SCAN_LIMIT;

/// Configuration for import operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportConfig {
    /// Extensions (lowercase, no dot) always treated as audio
    pub audio_extensions: Vec<String>,

    /// Name fragments that mark an image as the batch cover
    pub cover_keywords: Vec<String>,

    /// Leading bytes of an MP3 examined for an ID3v2 tag
    pub id3_scan_limit: usize,

    /// Files whose tags are read at the same time
    pub max_concurrent: usize,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            audio_extensions: ["mp3", "wav", "flac", "m4a"].map(String::from).to_vec(),
            cover_keywords: ["front", "cover", "folder"].map(String::from).to_vec(),
            id3_scan_limit: ID3_SCAN_LIMIT,
            max_concurrent: 4,
        }
    }
}

impl ImportConfig {
    /// Reject settings the importer cannot run with
    ///
    /// Extensions and keywords are lower-cased and stripped of a leading dot.
    pub fn validate(mut self) -> Result<Self> {
        if self.max_concurrent == 0 {
            return Err(ImportError::InvalidConfig(
                "maxConcurrent must be at least 1".to_string(),
            ));
        }
        if self.id3_scan_limit < 10 {
            return Err(ImportError::InvalidConfig(format!(
                "id3ScanLimit {} cannot hold an ID3v2 header",
                self.id3_scan_limit
            )));
        }

        self.audio_extensions = normalize(self.audio_extensions, |s| s.trim_start_matches('.'));
        self.cover_keywords = normalize(self.cover_keywords, |s| s);
        Ok(self)
    }
}

fn normalize(values: Vec<String>, strip: impl Fn(&str) -> &str) -> Vec<String> {
    values
        .iter()
        .map(|v| strip(v.trim()).to_lowercase())
        .filter(|v| !v.is_empty())
        .collect()
}

/// One file picked by the user, already read into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name including extension
    pub name: String,

    /// MIME type as reported by the picker or guessed from the name
    pub mime_type: Option<String>,

    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: None,
            bytes,
        }
    }

    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Read a file from disk, guessing its MIME type from the extension
    pub async fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ImportError::InvalidPath(path.display().to_string()))?
            .to_string();
        let bytes = tokio::fs::read(path).await?;
        let mime_type = mime_guess::from_path(path)
            .first()
            .map(|mime| mime.essence_str().to_string());

        Ok(Self {
            name,
            mime_type,
            bytes,
        })
    }

    /// Lowercase name, for keyword and extension matching
    pub fn lowercase_name(&self) -> String {
        self.name.to_lowercase()
    }

    /// True when the MIME type starts with `prefix` (e.g. `"image/"`)
    pub fn has_mime_prefix(&self, prefix: &str) -> bool {
        self.mime_type
            .as_deref()
            .is_some_and(|mime| mime.to_ascii_lowercase().starts_with(prefix))
    }

    pub fn as_raw(&self) -> RawAudioFile<'_> {
        RawAudioFile::new(&self.name, &self.bytes)
    }
}

/// Progress update during import
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportProgress {
    /// Number of audio files in the batch
    pub total_files: usize,

    /// Number of audio files finished so far
    pub processed_files: usize,

    /// Number of tracks created
    pub successful_imports: usize,

    /// Number of files whose task failed
    pub failed_imports: usize,

    /// Most recently finished file
    pub current_file: Option<String>,
}

impl ImportProgress {
    pub fn new(total_files: usize) -> Self {
        Self {
            total_files,
            processed_files: 0,
            successful_imports: 0,
            failed_imports: 0,
            current_file: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.processed_files >= self.total_files
    }

    pub fn percentage(&self) -> f32 {
        if self.total_files == 0 {
            return 100.0;
        }
        (self.processed_files as f32 / self.total_files as f32) * 100.0
    }
}

/// Summary of an import operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    /// Imported tracks, sorted by name
    pub tracks: Vec<Track>,

    /// Name of the image used as cover for every track
    pub cover: Option<String>,

    /// Audio files processed
    pub total_processed: usize,

    /// Tracks created
    pub successful: usize,

    /// Files whose task failed
    pub failed: usize,

    /// Selected files that are neither audio nor the cover
    pub skipped: usize,

    /// File name and message for each failed file
    pub errors: Vec<(String, String)>,

    pub duration_ms: u64,
}

impl ImportSummary {
    pub fn summary_text(&self) -> String {
        format!(
            "Import complete: {} tracks, {} failed, {} other files skipped",
            self.successful, self.failed, self.skipped
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ImportConfig::default();
        assert_eq!(config.audio_extensions, ["mp3", "wav", "flac", "m4a"]);
        assert_eq!(config.cover_keywords, ["front", "cover", "folder"]);
        assert_eq!(config.id3_scan_limit, 300_000);
        assert!(config.clone().validate().is_ok());
    }

    #[test]
    fn validate_normalizes_lists() {
        let config = ImportConfig {
            audio_extensions: vec![".OGG".into(), " Mp3 ".into(), String::new()],
            cover_keywords: vec!["Artwork".into()],
            ..ImportConfig::default()
        }
        .validate()
        .unwrap();
        assert_eq!(config.audio_extensions, ["ogg", "mp3"]);
        assert_eq!(config.cover_keywords, ["artwork"]);
    }

    #[test]
    fn validate_rejects_unusable_limits() {
        let zero_workers = ImportConfig {
            max_concurrent: 0,
            ..ImportConfig::default()
        };
        assert!(matches!(
            zero_workers.validate(),
            Err(ImportError::InvalidConfig(_))
        ));

        let tiny_window = ImportConfig {
            id3_scan_limit: 4,
            ..ImportConfig::default()
        };
        assert!(tiny_window.validate().is_err());
    }

    #[test]
    fn config_deserializes_partially() {
        let config: ImportConfig = serde_json::from_str(r#"{"maxConcurrent": 2}"#).unwrap();
        assert_eq!(config.max_concurrent, 2);
        assert_eq!(config.cover_keywords, ImportConfig::default().cover_keywords);
    }

    #[test]
    fn mime_prefix_matching() {
        let file = SelectedFile::new("a.jpg", vec![]).with_mime_type("Image/JPEG");
        assert!(file.has_mime_prefix("image/"));
        assert!(!file.has_mime_prefix("audio/"));
        assert!(!SelectedFile::new("a", vec![]).has_mime_prefix("image/"));
    }

    #[test]
    fn progress_percentage() {
        let mut progress = ImportProgress::new(4);
        assert_eq!(progress.percentage(), 0.0);
        progress.processed_files = 1;
        assert_eq!(progress.percentage(), 25.0);
        assert!(!progress.is_complete());
        assert_eq!(ImportProgress::new(0).percentage(), 100.0);
    }
}
