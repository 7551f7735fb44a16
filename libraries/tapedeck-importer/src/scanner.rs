//! Filesystem scanning for command-line imports
//!
//! Collects every regular file under the given paths. Audio and cover
//! selection happen later on the loaded batch, so images and other files are
//! kept here.

use crate::{ImportError, Result, SelectedFile};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Scanner for files in directories
#[derive(Debug, Clone, Default)]
pub struct FileScanner {
    /// Whether to follow symbolic links
    follow_links: bool,

    /// Maximum depth to traverse
    max_depth: Option<usize>,
}

impl FileScanner {
    /// Create a new file scanner
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to follow symbolic links
    #[must_use]
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Set maximum directory depth to traverse
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// List the files under `path`, sorted by path
    ///
    /// A path naming a file yields just that file.
    pub fn scan(&self, path: &Path) -> Result<Vec<PathBuf>> {
        if !path.exists() {
            return Err(ImportError::InvalidPath(format!(
                "{} does not exist",
                path.display()
            )));
        }

        if path.is_file() {
            return Ok(vec![path.to_path_buf()]);
        }

        let mut walker = WalkDir::new(path)
            .follow_links(self.follow_links)
            .sort_by_file_name();

        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        let mut files = Vec::new();
        for entry in walker {
            match entry {
                Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
                Ok(_) => {}
                Err(e) => tracing::warn!("Skipping unreadable entry: {}", e),
            }
        }

        Ok(files)
    }

    /// Scan several paths, skipping (and logging) the ones that fail
    pub fn scan_all(&self, paths: &[PathBuf]) -> Vec<PathBuf> {
        let mut all_files = Vec::new();

        for path in paths {
            match self.scan(path) {
                Ok(mut files) => all_files.append(&mut files),
                Err(e) => {
                    tracing::warn!("Failed to scan {}: {}", path.display(), e);
                }
            }
        }

        all_files
    }
}

/// Read every path into memory
///
/// Files that cannot be read are logged and left out of the batch.
pub async fn load_files(paths: &[PathBuf]) -> Vec<SelectedFile> {
    let mut files = Vec::with_capacity(paths.len());

    for path in paths {
        match SelectedFile::from_path(path).await {
            Ok(file) => files.push(file),
            Err(e) => tracing::warn!("Failed to read {}: {}", path.display(), e),
        }
    }

    files
}
