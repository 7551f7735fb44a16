//! Audio and cover filters over a batch of selected files

use crate::{ImportConfig, SelectedFile};

/// Check if a selected file should become a track
///
/// Either its extension is configured as audio or its MIME type is `audio/*`.
pub fn is_audio(file: &SelectedFile, config: &ImportConfig) -> bool {
    let name = file.lowercase_name();
    let by_extension = config
        .audio_extensions
        .iter()
        .any(|ext| name.ends_with(&format!(".{ext}")));

    by_extension || file.has_mime_prefix("audio/")
}

pub fn is_image(file: &SelectedFile) -> bool {
    file.has_mime_prefix("image/")
}

/// Pick the cover image for a batch
///
/// The first image whose name contains one of the keywords, else the first
/// image.
pub fn find_cover<'a>(files: &'a [SelectedFile], keywords: &[String]) -> Option<&'a SelectedFile> {
    let mut images = files.iter().filter(|f| is_image(f));
    let first = images.clone().next();

    images
        .find(|f| {
            let name = f.lowercase_name();
            keywords.iter().any(|k| name.contains(k.as_str()))
        })
        .or(first)
}
