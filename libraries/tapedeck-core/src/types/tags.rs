/// Tag extraction input and output types
use crate::types::AudioFormat;
use serde::{Deserialize, Serialize};

/// A selected file lent to a tag reader for the duration of one call
#[derive(Debug, Clone, Copy)]
pub struct RawAudioFile<'a> {
    /// File name as selected by the user (no directory component required)
    pub name: &'a str,

    /// Full or truncated file contents
    pub bytes: &'a [u8],
}

impl<'a> RawAudioFile<'a> {
    /// Borrow a buffer and its file name
    pub fn new(name: &'a str, bytes: &'a [u8]) -> Self {
        Self { name, bytes }
    }

    /// Lowercase extension after the last `.`, if any
    pub fn extension(&self) -> Option<String> {
        extension_of(self.name)
    }

    /// Container format derived from the extension
    pub fn format(&self) -> AudioFormat {
        AudioFormat::from_file_name(self.name)
    }
}

pub(crate) fn extension_of(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Tags located in one file
///
/// A field is only `Some` when a concrete value was found in the file. Display
/// defaults such as "Unknown Artist" are applied by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagBundle {
    /// Lyrics text, possibly LRC-formatted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lyrics: Option<String>,

    /// Track artist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    /// Album title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
}

impl TagBundle {
    /// A bundle carrying only lyrics
    pub fn with_lyrics(lyrics: impl Into<String>) -> Self {
        Self {
            lyrics: Some(lyrics.into()),
            ..Self::default()
        }
    }

    /// Check if no field was found
    pub fn is_empty(&self) -> bool {
        self.lyrics.is_none() && self.artist.is_none() && self.album.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased() {
        let file = RawAudioFile::new("Side A.FLAC", &[]);
        assert_eq!(file.extension().as_deref(), Some("flac"));
        assert_eq!(file.format(), AudioFormat::Flac);
    }

    #[test]
    fn names_without_extension() {
        assert_eq!(RawAudioFile::new("README", &[]).extension(), None);
        assert_eq!(RawAudioFile::new(".hidden", &[]).extension(), None);
        assert_eq!(RawAudioFile::new("trailing.", &[]).extension(), None);
    }

    #[test]
    fn empty_bundle_serializes_to_empty_object() {
        let json = serde_json::to_string(&TagBundle::default()).unwrap();
        assert_eq!(json, "{}");

        let json = serde_json::to_string(&TagBundle::with_lyrics("la la")).unwrap();
        assert_eq!(json, r#"{"lyrics":"la la"}"#);
    }
}
