//! Tapedeck Lyrics
//!
//! LRC parsing and the lyric timeline shown beside the deck.
//!
//! This crate provides:
//! - `parse_lrc`: timestamped (`[MM:SS.ff]`) and plain lyric lines
//! - `LyricsView`: synced/unsynced display model with active-line lookup
//! - `format_clock`: `m:ss` durations
//! - Optional WebAssembly bindings (`wasm` feature)
//!
//! Parsing is total: any text, including none, yields a (possibly empty)
//! list of lines.
//!
//! # Example
//!
//! ```rust
//! use tapedeck_lyrics::{format_clock, LyricsView};
//!
//! let view = LyricsView::from_raw(Some("[00:01.00]Press play\n[00:04.00]Rewind"));
//! assert!(view.is_synced);
//! assert_eq!(view.active_index(2.0), Some(0));
//! assert_eq!(format_clock(64.0), "1:04");
//! ```

pub mod display;
pub mod lrc;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use display::{format_clock, LyricsView};
pub use lrc::{is_synced, parse_lrc, LrcLine};
