/// Core traits for Tapedeck
use crate::types::{RawAudioFile, TagBundle};

/// Tag extractor trait
///
/// Implementers turn the raw bytes of one selected file into a `TagBundle`.
///
/// Extraction is fail-soft: malformed or unsupported input yields an empty
/// bundle instead of an error, so a bad file never blocks a library import.
/// Implementations must be stateless across calls so one extractor can be
/// shared between concurrent import tasks.
pub trait TagExtractor: Send + Sync {
    /// Extract tags from a borrowed file buffer
    fn extract(&self, file: &RawAudioFile<'_>) -> TagBundle;

    /// Check if the extractor has a reader for the given file
    fn supports(&self, file: &RawAudioFile<'_>) -> bool;
}
