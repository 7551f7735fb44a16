//! Tapedeck Metadata
//!
//! Tag readers for the files a user drops onto the deck.
//!
//! This crate provides:
//! - FLAC Vorbis comment reading (lyrics, artist, album)
//! - ID3v2.2/2.3/2.4 unsynchronized lyrics reading (`USLT` / `ULT`)
//! - A facade that picks the reader by file extension
//! - Optional WebAssembly bindings (`wasm` feature)
//!
//! Every reader is fail-soft: malformed, truncated or foreign input produces
//! an empty `TagBundle` rather than an error, so one bad file never stops an
//! import. The `read_*` / `scan` entry points expose the underlying
//! `MetadataError` for callers that want to know why.
//!
//! # Example
//!
//! ```rust
//! use tapedeck_core::{RawAudioFile, TagExtractor};
//! use tapedeck_metadata::{parse_flac_tags, MetadataReader};
//!
//! let reader = MetadataReader::new();
//! let tags = reader.extract(&RawAudioFile::new("mixtape.flac", b"fLaC"));
//! assert!(tags.is_empty());
//!
//! assert!(parse_flac_tags(b"RIFF....WAVE").is_empty());
//! ```

mod bytes;
mod error;
pub mod flac;
pub mod id3;
mod reader;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use bytes::syncsafe_u32;
pub use error::{MetadataError, Result};
pub use flac::{parse_flac_tags, read_vorbis_comments, FlacScan, VorbisComments, FLAC_SIGNATURE};
pub use id3::{parse_id3_tags, Id3Reader, Id3Scan, ID3_SCAN_LIMIT};
pub use reader::{extract_tags, MetadataReader};
