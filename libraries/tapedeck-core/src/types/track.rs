/// Track domain type
use crate::types::{AudioFormat, QualityLabel, TagBundle};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Artist shown when a track carries no artist tag
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Track identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    /// Create a track ID from an existing string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random track ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Color of the cassette label strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CassetteColor {
    #[default]
    Red,
    Orange,
    Blue,
    Green,
    Purple,
    Black,
    Cyan,
}

/// Every strip color, in palette order
pub const CASSETTE_COLORS: [CassetteColor; 7] = [
    CassetteColor::Red,
    CassetteColor::Orange,
    CassetteColor::Blue,
    CassetteColor::Green,
    CassetteColor::Purple,
    CassetteColor::Black,
    CassetteColor::Cyan,
];

impl CassetteColor {
    /// CSS hex value
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Red => "#dc2626",
            Self::Orange => "#ea580c",
            Self::Blue => "#2563eb",
            Self::Green => "#16a34a",
            Self::Purple => "#7c3aed",
            Self::Black => "#18181b",
            Self::Cyan => "#0891b2",
        }
    }

    /// Palette entry at `index`, wrapping around
    pub fn from_index(index: usize) -> Self {
        CASSETTE_COLORS[index % CASSETTE_COLORS.len()]
    }
}

impl TryFrom<String> for CassetteColor {
    type Error = String;

    fn try_from(hex: String) -> Result<Self, Self::Error> {
        CASSETTE_COLORS
            .into_iter()
            .find(|color| color.hex().eq_ignore_ascii_case(&hex))
            .ok_or_else(|| format!("not a cassette color: {hex}"))
    }
}

impl From<CassetteColor> for String {
    fn from(color: CassetteColor) -> Self {
        color.hex().to_string()
    }
}

/// A library entry built from one selected audio file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// File name without its last extension
    pub name: String,

    /// Artist tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    /// Album tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,

    /// Embedded lyrics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lyrics: Option<String>,

    /// Name of the cover image selected alongside the audio files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,

    /// Duration in seconds, filled in once the player has loaded the file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f64>,

    /// Container format
    pub format: AudioFormat,

    /// Label printed on the tape
    pub quality_label: QualityLabel,

    /// Label strip color
    pub color: CassetteColor,
}

impl Track {
    /// Create a track for `file_name` with no tags
    pub fn new(file_name: &str) -> Self {
        let format = AudioFormat::from_file_name(file_name);
        Self {
            id: TrackId::generate(),
            name: strip_extension(file_name).to_string(),
            artist: None,
            album: None,
            lyrics: None,
            cover: None,
            duration_secs: None,
            quality_label: format.quality_label(),
            format,
            color: CassetteColor::default(),
        }
    }

    /// Fold extracted tags into the track
    #[must_use]
    pub fn with_tags(mut self, tags: TagBundle) -> Self {
        self.artist = tags.artist;
        self.album = tags.album;
        self.lyrics = tags.lyrics;
        self
    }

    /// Artist for display, falling back to "Unknown Artist"
    pub fn display_artist(&self) -> &str {
        self.artist.as_deref().unwrap_or(UNKNOWN_ARTIST)
    }
}

fn strip_extension(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => stem,
        _ => file_name,
    }
}
