mod format;
mod tags;
mod track;

pub use format::{AudioFormat, QualityLabel};
pub use tags::{RawAudioFile, TagBundle};
pub use track::{CassetteColor, Track, TrackId, CASSETTE_COLORS, UNKNOWN_ARTIST};
