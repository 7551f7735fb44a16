/// Container format and quality label types
use crate::types::tags::extension_of;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Audio container format, derived from the file extension
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AudioFormat {
    Flac,
    Mp3,
    Wav,
    M4a,
    Aac,
    Aiff,
    /// Any other extension, stored upper-cased
    Other(String),
    /// File name without an extension
    Unknown,
}

impl AudioFormat {
    /// Map an extension (with or without case) to a format
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "" => Self::Unknown,
            "flac" => Self::Flac,
            "mp3" => Self::Mp3,
            "wav" => Self::Wav,
            "m4a" => Self::M4a,
            "aac" => Self::Aac,
            "aiff" | "aif" => Self::Aiff,
            other => Self::Other(other.to_ascii_uppercase()),
        }
    }

    /// Map a file name to a format using its last extension
    pub fn from_file_name(name: &str) -> Self {
        extension_of(name).map_or(Self::Unknown, |ext| Self::from_extension(&ext))
    }

    /// Upper-case label shown on the cassette ("FLAC", "MP3", ...)
    pub fn label(&self) -> &str {
        match self {
            Self::Flac => "FLAC",
            Self::Mp3 => "MP3",
            Self::Wav => "WAV",
            Self::M4a => "M4A",
            Self::Aac => "AAC",
            Self::Aiff => "AIFF",
            Self::Other(label) => label,
            Self::Unknown => "AUDIO",
        }
    }

    /// Quality label printed on the tape for this format
    pub fn quality_label(&self) -> QualityLabel {
        match self {
            Self::Flac | Self::Wav | Self::Aiff => QualityLabel::Lossless,
            Self::M4a | Self::Aac => QualityLabel::HighQuality,
            Self::Mp3 => QualityLabel::Stereo,
            Self::Other(_) | Self::Unknown => QualityLabel::NormalBias,
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for AudioFormat {
    fn from(label: String) -> Self {
        if label.eq_ignore_ascii_case("AUDIO") {
            return Self::Unknown;
        }
        Self::from_extension(&label)
    }
}

impl From<AudioFormat> for String {
    fn from(format: AudioFormat) -> Self {
        format.label().to_string()
    }
}

/// Tape quality label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityLabel {
    #[serde(rename = "LOSSLESS")]
    Lossless,
    #[serde(rename = "HIGH QUALITY")]
    HighQuality,
    #[serde(rename = "STEREO")]
    Stereo,
    #[serde(rename = "NORMAL BIAS")]
    NormalBias,
}

impl QualityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lossless => "LOSSLESS",
            Self::HighQuality => "HIGH QUALITY",
            Self::Stereo => "STEREO",
            Self::NormalBias => "NORMAL BIAS",
        }
    }
}

impl fmt::Display for QualityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_labels_by_format() {
        assert_eq!(AudioFormat::Flac.quality_label(), QualityLabel::Lossless);
        assert_eq!(AudioFormat::Wav.quality_label(), QualityLabel::Lossless);
        assert_eq!(AudioFormat::Aiff.quality_label(), QualityLabel::Lossless);
        assert_eq!(AudioFormat::M4a.quality_label(), QualityLabel::HighQuality);
        assert_eq!(AudioFormat::Aac.quality_label(), QualityLabel::HighQuality);
        assert_eq!(AudioFormat::Mp3.quality_label(), QualityLabel::Stereo);
        assert_eq!(
            AudioFormat::from_extension("ogg").quality_label(),
            QualityLabel::NormalBias
        );
    }

    #[test]
    fn labels_are_upper_case() {
        assert_eq!(AudioFormat::from_file_name("a.Mp3").label(), "MP3");
        assert_eq!(AudioFormat::from_file_name("a.opus").label(), "OPUS");
        assert_eq!(AudioFormat::from_file_name("noext").label(), "AUDIO");
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&AudioFormat::Flac).unwrap();
        assert_eq!(json, r#""FLAC""#);

        let back: AudioFormat = serde_json::from_str(r#""AUDIO""#).unwrap();
        assert_eq!(back, AudioFormat::Unknown);

        let label = serde_json::to_string(&QualityLabel::NormalBias).unwrap();
        assert_eq!(label, r#""NORMAL BIAS""#);
    }
}
