//! Tapedeck Library Importer
//!
//! Turns a batch of user-selected files into playable tracks.
//!
//! # Features
//!
//! - Audio selection by extension or `audio/*` MIME type
//! - One shared cover image per batch (`front` / `cover` / `folder` preferred)
//! - Tag extraction on the blocking pool, bounded concurrency
//! - Progress reporting over an `mpsc` channel
//! - Directory scanning for command-line imports
//!
//! # Architecture
//!
//! - `types`: configuration, selected files, progress and summary
//! - `selection`: audio and cover filters
//! - `scanner`: filesystem walking
//! - `importer`: orchestration of the import

mod error;
mod types;

pub mod importer;
pub mod scanner;
pub mod selection;

pub use error::ImportError;
pub use importer::TrackImporter;
pub use types::*;

/// Re-export commonly used types
pub type Result<T> = std::result::Result<T, ImportError>;
