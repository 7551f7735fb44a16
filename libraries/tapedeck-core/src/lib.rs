//! Tapedeck Core
//!
//! Platform-agnostic types, traits, and error handling shared by the Tapedeck
//! tag readers, lyric tooling and library importer.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `RawAudioFile`, `TagBundle`, `Track`, `AudioFormat`
//! - **Core Traits**: `TagExtractor`
//! - **Error Handling**: Unified `TapedeckError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tapedeck_core::types::{AudioFormat, QualityLabel, RawAudioFile, TagBundle};
//!
//! let bytes = b"fLaC";
//! let file = RawAudioFile::new("song.flac", bytes);
//! assert_eq!(file.format(), AudioFormat::Flac);
//! assert_eq!(file.format().quality_label(), QualityLabel::Lossless);
//!
//! let tags = TagBundle::default();
//! assert!(tags.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TapedeckError};
pub use traits::TagExtractor;

pub use types::{
    AudioFormat, CassetteColor, QualityLabel, RawAudioFile, TagBundle, Track, TrackId,
    CASSETTE_COLORS, UNKNOWN_ARTIST,
};
