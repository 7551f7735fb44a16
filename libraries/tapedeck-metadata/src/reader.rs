/// Metadata facade: picks a tag reader by file extension
use crate::error::{MetadataError, Result};
use crate::flac::read_vorbis_comments;
use crate::id3::Id3Reader;
use tapedeck_core::{AudioFormat, RawAudioFile, TagBundle, TagExtractor};
use tracing::debug;

/// Tag reader for the formats the deck understands
///
/// `.flac` files go through the Vorbis comment reader, `.mp3` files through
/// the ID3v2 lyrics reader. Other extensions yield an empty bundle without
/// touching the bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataReader {
    id3: Id3Reader,
}

impl MetadataReader {
    /// Create a new metadata reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader that examines at most `limit` bytes of MP3 files
    pub fn with_id3_scan_limit(limit: usize) -> Self {
        Self {
            id3: Id3Reader::with_scan_limit(limit),
        }
    }

    /// Read tags, reporting why nothing could be read
    pub fn try_extract(&self, file: &RawAudioFile<'_>) -> Result<TagBundle> {
        match file.format() {
            AudioFormat::Flac => read_vorbis_comments(file.bytes).map(|scan| scan.tags()),
            AudioFormat::Mp3 => self.id3.scan(file.bytes).map(|scan| scan.tags()),
            other => Err(MetadataError::UnsupportedFormat(other.label().to_string())),
        }
    }
}

impl TagExtractor for MetadataReader {
    fn extract(&self, file: &RawAudioFile<'_>) -> TagBundle {
        self.try_extract(file).unwrap_or_else(|e| {
            debug!(file = file.name, "Metadata extraction skipped: {}", e);
            TagBundle::default()
        })
    }

    fn supports(&self, file: &RawAudioFile<'_>) -> bool {
        matches!(file.format(), AudioFormat::Flac | AudioFormat::Mp3)
    }
}

/// Extract tags from one selected file with the default reader
pub fn extract_tags(file: &RawAudioFile<'_>) -> TagBundle {
    MetadataReader::new().extract(file)
}
