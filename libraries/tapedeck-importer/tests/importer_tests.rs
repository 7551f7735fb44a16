//! Integration tests for the track importer

use std::sync::Arc;
use std::time::Duration;
use tapedeck_core::{AudioFormat, QualityLabel, RawAudioFile, TagBundle, TagExtractor};
use tapedeck_importer::scanner::{load_files, FileScanner};
use tapedeck_importer::{ImportConfig, SelectedFile, TrackImporter};
use tempfile::TempDir;

// ===== Fixtures =====

fn flac_with_comments(comments: &[&str]) -> Vec<u8> {
    let vendor = b"tapedeck";
    let mut payload = Vec::new();
    payload.extend_from_slice(&(vendor.len() as u32).to_le_bytes());
    payload.extend_from_slice(vendor);
    payload.extend_from_slice(&(comments.len() as u32).to_le_bytes());
    for comment in comments {
        payload.extend_from_slice(&(comment.len() as u32).to_le_bytes());
        payload.extend_from_slice(comment.as_bytes());
    }

    let mut out = b"fLaC".to_vec();
    out.push(0x84);
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes()[1..]);
    out.extend_from_slice(&payload);
    out
}

fn mp3_with_lyrics(text: &str) -> Vec<u8> {
    let mut frame = vec![3];
    frame.extend_from_slice(b"eng\0");
    frame.extend_from_slice(text.as_bytes());

    let mut body = b"USLT".to_vec();
    body.extend_from_slice(&(frame.len() as u32).to_be_bytes());
    body.extend_from_slice(&[0, 0]);
    body.extend_from_slice(&frame);

    let size = body.len() as u32;
    let mut out = b"ID3\x03\x00\x00".to_vec();
    out.extend_from_slice(&[
        ((size >> 21) & 0x7F) as u8,
        ((size >> 14) & 0x7F) as u8,
        ((size >> 7) & 0x7F) as u8,
        (size & 0x7F) as u8,
    ]);
    out.extend_from_slice(&body);
    out
}

/// Extractor that panics on files whose name contains "boom"
struct ExplodingExtractor;

impl TagExtractor for ExplodingExtractor {
    fn extract(&self, file: &RawAudioFile<'_>) -> TagBundle {
        if file.name.contains("boom") {
            panic!("extractor exploded on {}", file.name);
        }
        TagBundle::with_lyrics("stub")
    }

    fn supports(&self, _file: &RawAudioFile<'_>) -> bool {
        true
    }
}

// ===== Tests =====

#[tokio::test]
async fn imports_mixed_batch() {
    let files = vec![
        SelectedFile::new("02 Side B.mp3", mp3_with_lyrics("[00:01.00]Flip it"))
            .with_mime_type("audio/mpeg"),
        SelectedFile::new("01 Side A.flac", flac_with_comments(&["ARTIST=The Capstans", "ALBUM=C60"])),
        SelectedFile::new("back.jpg", vec![0xFF, 0xD8]).with_mime_type("image/jpeg"),
        SelectedFile::new("Folder.jpg", vec![0xFF, 0xD8]).with_mime_type("image/jpeg"),
        SelectedFile::new("liner notes.txt", b"hi".to_vec()).with_mime_type("text/plain"),
        SelectedFile::new("03 Demo.wav", b"RIFF".to_vec()),
    ];

    let summary = TrackImporter::new(ImportConfig::default())
        .import(files)
        .await
        .unwrap();

    assert_eq!(summary.total_processed, 3);
    assert_eq!(summary.successful, 3);
    assert_eq!(summary.failed, 0);
    // back.jpg and the notes; Folder.jpg is the cover
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.cover.as_deref(), Some("Folder.jpg"));

    let names: Vec<&str> = summary.tracks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["01 Side A", "02 Side B", "03 Demo"]);

    let side_a = &summary.tracks[0];
    assert_eq!(side_a.artist.as_deref(), Some("The Capstans"));
    assert_eq!(side_a.album.as_deref(), Some("C60"));
    assert_eq!(side_a.format, AudioFormat::Flac);
    assert_eq!(side_a.quality_label, QualityLabel::Lossless);

    let side_b = &summary.tracks[1];
    assert_eq!(side_b.lyrics.as_deref(), Some("[00:01.00]Flip it"));
    assert_eq!(side_b.display_artist(), "Unknown Artist");
    assert_eq!(side_b.quality_label, QualityLabel::Stereo);

    let demo = &summary.tracks[2];
    assert!(demo.lyrics.is_none());
    assert_eq!(demo.quality_label, QualityLabel::Lossless);

    assert!(summary
        .tracks
        .iter()
        .all(|t| t.cover.as_deref() == Some("Folder.jpg")));
}

#[tokio::test]
async fn audio_mime_type_admits_unlisted_extension() {
    let files = vec![
        SelectedFile::new("field.ogg", b"OggS".to_vec()).with_mime_type("audio/ogg"),
        SelectedFile::new("other.ogg", b"OggS".to_vec()),
    ];

    let summary = TrackImporter::new(ImportConfig::default())
        .import(files)
        .await
        .unwrap();

    assert_eq!(summary.tracks.len(), 1);
    assert_eq!(summary.tracks[0].format.label(), "OGG");
    assert_eq!(summary.tracks[0].quality_label, QualityLabel::NormalBias);
    assert_eq!(summary.skipped, 1);
}

#[tokio::test]
async fn corrupt_tags_still_produce_tracks() {
    let mut truncated = flac_with_comments(&["ARTIST=Half"]);
    truncated.truncate(12);

    let files = vec![
        SelectedFile::new("garbage.flac", vec![0x00; 64]),
        SelectedFile::new("short.flac", truncated),
        SelectedFile::new("noise.mp3", vec![0xFF; 32]),
    ];

    let summary = TrackImporter::new(ImportConfig::default())
        .import(files)
        .await
        .unwrap();

    assert_eq!(summary.successful, 3);
    assert!(summary.errors.is_empty());
    assert!(summary.tracks.iter().all(|t| t.artist.is_none()));
}

#[tokio::test]
async fn panicking_file_does_not_abort_batch() {
    let importer = TrackImporter::with_extractor(
        ImportConfig {
            max_concurrent: 2,
            ..ImportConfig::default()
        },
        Arc::new(ExplodingExtractor),
    );

    let files = vec![
        SelectedFile::new("a.mp3", vec![]),
        SelectedFile::new("boom.mp3", vec![]),
        SelectedFile::new("c.mp3", vec![]),
        SelectedFile::new("d.flac", vec![]),
    ];

    let summary = importer.import(files).await.unwrap();
    assert_eq!(summary.total_processed, 4);
    assert_eq!(summary.successful, 3);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.errors.len(), 1);
    assert_eq!(summary.errors[0].0, "boom.mp3");
    assert!(summary
        .tracks
        .iter()
        .all(|t| t.lyrics.as_deref() == Some("stub")));
}

#[tokio::test]
async fn zero_concurrency_still_completes() {
    // Fields are public, so this config never went through validate()
    let importer = TrackImporter::new(ImportConfig {
        max_concurrent: 0,
        ..ImportConfig::default()
    });
    let files = vec![
        SelectedFile::new("a.mp3", mp3_with_lyrics("one")),
        SelectedFile::new("b.flac", flac_with_comments(&["ARTIST=Two"])),
    ];

    let summary = tokio::time::timeout(Duration::from_secs(5), importer.import(files))
        .await
        .expect("import finished")
        .unwrap();
    assert_eq!(summary.successful, 2);
    assert_eq!(summary.tracks[1].artist.as_deref(), Some("Two"));
}

#[tokio::test]
async fn progress_reaches_completion() {
    let files: Vec<SelectedFile> = (0..10)
        .map(|i| SelectedFile::new(format!("track{i:02}.mp3"), mp3_with_lyrics("la")))
        .collect();

    let importer = TrackImporter::new(ImportConfig {
        max_concurrent: 3,
        ..ImportConfig::default()
    });
    let (mut rx, handle) = importer.import_files(files);

    let mut updates = Vec::new();
    while let Some(progress) = rx.recv().await {
        updates.push(progress);
    }
    let summary = handle.await.unwrap().unwrap();

    // Initial update plus one per file
    assert_eq!(updates.len(), 11);
    assert_eq!(updates[0].processed_files, 0);
    assert!(updates
        .windows(2)
        .all(|w| w[1].processed_files == w[0].processed_files + 1));

    let last = updates.last().unwrap();
    assert!(last.is_complete());
    assert_eq!(last.successful_imports, 10);
    assert_eq!(summary.tracks.len(), 10);
    assert_eq!(summary.tracks[0].name, "track00");
}

#[tokio::test]
async fn empty_batch() {
    let summary = TrackImporter::new(ImportConfig::default())
        .import(Vec::new())
        .await
        .unwrap();

    assert!(summary.tracks.is_empty());
    assert_eq!(summary.cover, None);
    assert_eq!(summary.summary_text(), "Import complete: 0 tracks, 0 failed, 0 other files skipped");
}

#[tokio::test]
async fn imports_from_disk() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("Tape.flac"),
        flac_with_comments(&["ARTIST=On Disk"]),
    )
    .unwrap();
    std::fs::write(dir.path().join("cover.png"), [0x89, b'P', b'N', b'G']).unwrap();

    let paths = FileScanner::new().scan(dir.path()).unwrap();
    let files = load_files(&paths).await;
    assert_eq!(files.len(), 2);

    let cover = files.iter().find(|f| f.name == "cover.png").unwrap();
    assert_eq!(cover.mime_type.as_deref(), Some("image/png"));

    let summary = TrackImporter::new(ImportConfig::default())
        .import(files)
        .await
        .unwrap();
    assert_eq!(summary.tracks.len(), 1);
    assert_eq!(summary.tracks[0].artist.as_deref(), Some("On Disk"));
    assert_eq!(summary.cover.as_deref(), Some("cover.png"));
}

#[tokio::test]
async fn from_path_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = SelectedFile::from_path(&dir.path().join("missing.mp3")).await;
    assert!(result.is_err());
}

#[test]
fn summary_serializes_camel_case() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let summary = runtime
        .block_on(TrackImporter::new(ImportConfig::default()).import(vec![SelectedFile::new(
            "x.wav",
            vec![],
        )]))
        .unwrap();

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["totalProcessed"], 1);
    assert_eq!(json["tracks"][0]["qualityLabel"], "LOSSLESS");
    assert!(json["durationMs"].is_u64());
}
