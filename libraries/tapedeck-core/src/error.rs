/// Core error types for Tapedeck
use thiserror::Error;

/// Result type alias using `TapedeckError`
pub type Result<T> = std::result::Result<T, TapedeckError>;

/// Core error type for Tapedeck
#[derive(Error, Debug)]
pub enum TapedeckError {
    /// Metadata parsing errors
    #[error("Metadata error: {0}")]
    Metadata(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl TapedeckError {
    /// Create a metadata error
    pub fn metadata(msg: impl Into<String>) -> Self {
        Self::Metadata(msg.into())
    }

    /// Create an import error
    pub fn import(msg: impl Into<String>) -> Self {
        Self::Import(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_format_messages() {
        assert_eq!(
            TapedeckError::metadata("bad block").to_string(),
            "Metadata error: bad block"
        );
        assert_eq!(
            TapedeckError::invalid_input("empty name").to_string(),
            "Invalid input: empty name"
        );
    }

    #[test]
    fn io_errors_are_transparent() {
        let err: TapedeckError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.to_string(), "gone");
    }
}
