/// Metadata-specific errors
use thiserror::Error;

/// Result type alias using `MetadataError`
pub type Result<T> = std::result::Result<T, MetadataError>;

/// Metadata error types
///
/// These never reach the caller of the `parse_*` functions or the facade,
/// which collapse every error into an empty `TagBundle`. They exist so the
/// readers can tell "malformed input" from "nothing found" internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    /// Buffer does not start with `fLaC`
    #[error("Not a FLAC stream: missing fLaC signature")]
    NotFlac,

    /// Buffer does not start with `ID3`
    #[error("No ID3v2 tag: missing ID3 signature")]
    NotId3,

    /// ID3v2 major version other than 2, 3 or 4
    #[error("Unsupported ID3v2 version: 2.{0}")]
    UnsupportedVersion(u8),

    /// Extension without a tag reader
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A read ran past the end of the available bytes
    #[error("Truncated data at offset {offset}: needed {needed} bytes, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// Text that could not be decoded with its declared encoding
    #[error("Invalid text: {0}")]
    InvalidText(String),
}

impl From<MetadataError> for tapedeck_core::TapedeckError {
    fn from(err: MetadataError) -> Self {
        tapedeck_core::TapedeckError::metadata(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tapedeck_core::TapedeckError;

    #[test]
    fn converts_into_core_error() {
        let err: TapedeckError = MetadataError::UnsupportedVersion(5).into();
        assert_eq!(
            err.to_string(),
            "Metadata error: Unsupported ID3v2 version: 2.5"
        );
    }
}
