//! FLAC Vorbis comment reader
//!
//! Walks the metadata blocks that follow the `fLaC` signature and collects the
//! `KEY=VALUE` entries of every VORBIS_COMMENT block. All other blocks are
//! skipped as opaque spans of their declared length.
//!
//! Two byte orders share this container: block header lengths are 24-bit
//! big-endian, while every integer inside a Vorbis comment block is 32-bit
//! little-endian.

use crate::bytes::ByteCursor;
use crate::error::{MetadataError, Result};
use std::collections::HashMap;
use tapedeck_core::TagBundle;
use tracing::debug;

/// FLAC stream signature
pub const FLAC_SIGNATURE: &[u8; 4] = b"fLaC";

/// FLAC metadata block types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    StreamInfo,
    Padding,
    Application,
    SeekTable,
    VorbisComment,
    CueSheet,
    Picture,
    /// Types 7..=126
    Reserved(u8),
    /// Type 127
    Invalid,
}

impl BlockType {
    pub fn from_byte(byte: u8) -> Self {
        match byte & 0x7F {
            0 => Self::StreamInfo,
            1 => Self::Padding,
            2 => Self::Application,
            3 => Self::SeekTable,
            4 => Self::VorbisComment,
            5 => Self::CueSheet,
            6 => Self::Picture,
            127 => Self::Invalid,
            other => Self::Reserved(other),
        }
    }
}

/// FLAC metadata block header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    pub is_last: bool,
    pub block_type: BlockType,
    /// Payload length in bytes
    pub length: u32,
}

impl BlockHeader {
    pub const SIZE: usize = 4;

    fn read(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        let flags = cursor.u8()?;
        let length = cursor.u24_be()?;
        Ok(Self {
            is_last: flags & 0x80 != 0,
            block_type: BlockType::from_byte(flags),
            length,
        })
    }
}

/// Comments collected from VORBIS_COMMENT blocks
///
/// Keys are upper-cased; a repeated key keeps the last value seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VorbisComments {
    /// Length of the (skipped) vendor string of the last block read
    pub vendor_length: u32,
    /// Comment count declared by the last block read
    pub declared_count: u32,
    entries: HashMap<String, String>,
}

impl VorbisComments {
    /// Value for an upper-case key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn insert(&mut self, comment: &str) {
        if let Some((key, value)) = comment.split_once('=') {
            self.entries.insert(key.to_uppercase(), value.to_string());
        }
    }

    /// Non-empty value for `key`
    fn value(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| !v.is_empty()).map(str::to_string)
    }
}

/// Result of walking a FLAC metadata section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlacScan {
    pub comments: VorbisComments,
    /// Number of block headers read
    pub blocks_read: usize,
    /// A header or payload ran past the end of the buffer
    pub truncated: bool,
}

impl FlacScan {
    /// Map the collected comments onto the public tag fields
    pub fn tags(&self) -> TagBundle {
        TagBundle {
            lyrics: self
                .comments
                .value("LYRICS")
                .or_else(|| self.comments.value("UNSYNCED LYRICS")),
            artist: self.comments.value("ARTIST"),
            album: self.comments.value("ALBUM"),
        }
    }
}

/// Walk the metadata blocks of a FLAC stream
///
/// Fails only when the signature is missing. A block that runs past the end of
/// the buffer stops the walk; comments read before that point are kept and
/// `truncated` is set.
pub fn read_vorbis_comments(data: &[u8]) -> Result<FlacScan> {
    let mut cursor = ByteCursor::new(data);
    if cursor.take(FLAC_SIGNATURE.len()).ok() != Some(FLAC_SIGNATURE.as_slice()) {
        return Err(MetadataError::NotFlac);
    }

    let mut scan = FlacScan::default();

    while !cursor.is_empty() {
        let header = match BlockHeader::read(&mut cursor) {
            Ok(header) => header,
            Err(e) => {
                debug!("FLAC block header cut short: {}", e);
                scan.truncated = true;
                break;
            }
        };
        scan.blocks_read += 1;

        let length = header.length as usize;
        let payload = cursor.peek_up_to(length);

        if header.block_type == BlockType::VorbisComment {
            if let Err(e) = read_comment_block(payload, &mut scan.comments) {
                debug!("Vorbis comment block cut short: {}", e);
                scan.truncated = true;
            }
        }

        if cursor.skip(length).is_err() {
            debug!(
                "FLAC block {:?} declares {} bytes, {} available",
                header.block_type,
                length,
                payload.len()
            );
            scan.truncated = true;
            break;
        }

        if header.is_last {
            break;
        }
    }

    Ok(scan)
}

fn read_comment_block(payload: &[u8], comments: &mut VorbisComments) -> Result<()> {
    let mut cursor = ByteCursor::new(payload);

    let vendor_length = cursor.u32_le()?;
    comments.vendor_length = vendor_length;
    cursor.skip(vendor_length as usize)?;

    let count = cursor.u32_le()?;
    comments.declared_count = count;

    for index in 0..count {
        let length = cursor.u32_le()? as usize;
        let bytes = cursor.take(length)?;
        match std::str::from_utf8(bytes) {
            Ok(comment) => comments.insert(comment),
            Err(e) => debug!("Skipping Vorbis comment {}: {}", index, e),
        }
    }

    Ok(())
}

/// Extract lyrics, artist and album from a FLAC buffer
///
/// Returns an empty bundle for anything that is not a FLAC stream.
pub fn parse_flac_tags(data: &[u8]) -> TagBundle {
    match read_vorbis_comments(data) {
        Ok(scan) => scan.tags(),
        Err(e) => {
            debug!("No FLAC tags: {}", e);
            TagBundle::default()
        }
    }
}
