//! Error types for the importer

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Import task failed: {0}")]
    Task(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid import configuration: {0}")]
    InvalidConfig(String),
}

impl From<tokio::task::JoinError> for ImportError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Task(err.to_string())
    }
}

impl From<ImportError> for tapedeck_core::TapedeckError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::Io(e) => Self::Io(e),
            ImportError::InvalidPath(msg) | ImportError::InvalidConfig(msg) => {
                Self::InvalidInput(msg)
            }
            other => Self::Import(other.to_string()),
        }
    }
}
