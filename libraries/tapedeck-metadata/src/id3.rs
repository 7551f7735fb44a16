//! ID3v2 unsynchronized lyrics reader
//!
//! Supports ID3v2.2, v2.3 and v2.4 frame layouts and decodes `USLT` / `ULT`
//! frames. Every other frame is skipped by its declared size.
//!
//! Only a bounded prefix of the file is examined (`ID3_SCAN_LIMIT` bytes by
//! default). Lyrics stored past that prefix are not found.

use crate::bytes::ByteCursor;
use crate::error::{MetadataError, Result};
use tapedeck_core::TagBundle;
use tracing::debug;

/// ID3v2 tag signature
pub const ID3_SIGNATURE: &[u8; 3] = b"ID3";

/// Size of the ID3v2 tag header
pub const ID3_HEADER_SIZE: usize = 10;

/// Default number of leading bytes examined for an ID3v2 tag
pub const ID3_SCAN_LIMIT: usize = 300_000;

/// Text encoding marker at the start of text-bearing frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// 0: ISO-8859-1, though many taggers write UTF-8 under this marker
    Latin1,
    /// 1: UTF-16 with byte order mark
    Utf16,
    /// 2: UTF-16 big-endian without byte order mark
    Utf16Be,
    /// 3: UTF-8
    Utf8,
}

impl TextEncoding {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Self::Latin1),
            1 => Some(Self::Utf16),
            2 => Some(Self::Utf16Be),
            3 => Some(Self::Utf8),
            _ => None,
        }
    }

    /// Width of one code unit, which is also the width of the null terminator
    pub fn unit_size(self) -> usize {
        match self {
            Self::Latin1 | Self::Utf8 => 1,
            Self::Utf16 | Self::Utf16Be => 2,
        }
    }

    /// Split `bytes` after the first unit-aligned null terminator
    ///
    /// Returns `None` if no terminator is present.
    fn split_terminated(self, bytes: &[u8]) -> Option<(&[u8], &[u8])> {
        let unit = self.unit_size();
        let end = bytes
            .chunks_exact(unit)
            .position(|chunk| chunk.iter().all(|&b| b == 0))?
            * unit;
        Some((&bytes[..end], &bytes[end + unit..]))
    }

    fn decode(self, bytes: &[u8]) -> Result<String> {
        let text = match self {
            Self::Latin1 => match std::str::from_utf8(bytes) {
                Ok(text) => text.to_string(),
                Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
            },
            Self::Utf8 => std::str::from_utf8(bytes)
                .map_err(|e| MetadataError::InvalidText(e.to_string()))?
                .to_string(),
            Self::Utf16 => match bytes {
                [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes)?,
                [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes)?,
                _ => decode_utf16(bytes, u16::from_le_bytes)?,
            },
            Self::Utf16Be => match bytes {
                [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes)?,
                _ => decode_utf16(bytes, u16::from_be_bytes)?,
            },
        };
        Ok(text.trim_end_matches('\0').to_string())
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String> {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| unit([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|e| MetadataError::InvalidText(e.to_string()))
}

/// ID3v2 tag header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Id3Header {
    /// Major version (2, 3 or 4)
    pub version: u8,
    pub revision: u8,
    pub flags: u8,
    /// Size of the tag following the 10-byte header
    pub tag_size: u32,
}

impl Id3Header {
    fn read(data: &[u8]) -> Result<Self> {
        if !data.starts_with(ID3_SIGNATURE) {
            return Err(MetadataError::NotId3);
        }
        let mut cursor = ByteCursor::at(data, ID3_SIGNATURE.len());
        let version = cursor.u8()?;
        let revision = cursor.u8()?;
        let flags = cursor.u8()?;
        let tag_size = cursor.syncsafe_u32()?;

        if !matches!(version, 2..=4) {
            return Err(MetadataError::UnsupportedVersion(version));
        }

        Ok(Self {
            version,
            revision,
            flags,
            tag_size,
        })
    }

    fn frame_header_size(&self) -> usize {
        if self.version == 2 {
            6
        } else {
            10
        }
    }
}

/// One frame of an ID3v2 tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Id3Frame<'a> {
    /// 3-byte (v2.2) or 4-byte (v2.3/v2.4) frame id
    pub id: &'a [u8],
    /// Declared payload size
    pub size: u32,
    pub payload: &'a [u8],
}

impl Id3Frame<'_> {
    /// `USLT` in v2.3/v2.4, `ULT` in v2.2
    pub fn is_unsynced_lyrics(&self) -> bool {
        self.id == b"USLT" || self.id == b"ULT"
    }

    /// Frame id as text, for logging
    pub fn id_str(&self) -> String {
        String::from_utf8_lossy(self.id).into_owned()
    }

    fn read<'a>(cursor: &mut ByteCursor<'a>, version: u8) -> Result<Id3Frame<'a>> {
        let (id, size) = match version {
            2 => {
                let id = cursor.take(3)?;
                (id, cursor.u24_be()?)
            }
            3 => {
                let id = cursor.take(4)?;
                let size = cursor.u32_be()?;
                cursor.skip(2)?;
                (id, size)
            }
            _ => {
                let id = cursor.take(4)?;
                let size = cursor.syncsafe_u32()?;
                cursor.skip(2)?;
                (id, size)
            }
        };
        let payload = cursor.take(size as usize)?;
        Ok(Id3Frame { id, size, payload })
    }

    /// Decode a USLT/ULT payload into its lyric text
    ///
    /// Layout: encoding byte, 3-byte language, content descriptor ending in a
    /// null of the encoding's unit size, then the lyric text.
    pub fn lyrics(&self) -> Result<String> {
        let mut cursor = ByteCursor::new(self.payload);
        let marker = cursor.u8()?;
        let encoding = TextEncoding::from_byte(marker)
            .ok_or_else(|| MetadataError::InvalidText(format!("unknown encoding {marker}")))?;
        cursor.skip(3)?;

        let (_descriptor, text) = encoding.split_terminated(cursor.rest()).ok_or_else(|| {
            MetadataError::InvalidText("unterminated content descriptor".to_string())
        })?;
        encoding.decode(text)
    }
}

/// Result of walking an ID3v2 tag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Id3Scan {
    pub version: u8,
    /// Text of the last lyrics frame that decoded successfully
    pub lyrics: Option<String>,
    /// Number of frames read
    pub frames_read: usize,
    /// A frame ran past the tag or buffer end
    pub truncated: bool,
}

impl Id3Scan {
    pub fn tags(&self) -> TagBundle {
        TagBundle {
            lyrics: self.lyrics.clone(),
            ..TagBundle::default()
        }
    }
}

/// ID3v2 lyrics reader with a bounded scan window
#[derive(Debug, Clone, Copy)]
pub struct Id3Reader {
    scan_limit: usize,
}

impl Default for Id3Reader {
    fn default() -> Self {
        Self {
            scan_limit: ID3_SCAN_LIMIT,
        }
    }
}

impl Id3Reader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Examine at most `scan_limit` leading bytes
    pub fn with_scan_limit(scan_limit: usize) -> Self {
        Self { scan_limit }
    }

    pub fn scan_limit(&self) -> usize {
        self.scan_limit
    }

    /// Walk the frames of the tag at the start of `data`
    pub fn scan(&self, data: &[u8]) -> Result<Id3Scan> {
        let data = &data[..data.len().min(self.scan_limit)];
        let header = Id3Header::read(data)?;

        let limit = ID3_HEADER_SIZE
            .saturating_add(header.tag_size as usize)
            .min(data.len());
        let mut cursor = ByteCursor::at(&data[..limit], ID3_HEADER_SIZE);
        let frame_header_size = header.frame_header_size();

        let mut scan = Id3Scan {
            version: header.version,
            ..Id3Scan::default()
        };

        while cursor.remaining() >= frame_header_size {
            // Padding runs to the end of the tag
            if cursor.peek_u8() == Some(0) {
                break;
            }

            let frame = match Id3Frame::read(&mut cursor, header.version) {
                Ok(frame) => frame,
                Err(e) => {
                    debug!("ID3 frame overruns the tag: {}", e);
                    scan.truncated = true;
                    break;
                }
            };
            scan.frames_read += 1;

            if frame.is_unsynced_lyrics() {
                match frame.lyrics() {
                    Ok(text) if !text.is_empty() => scan.lyrics = Some(text),
                    Ok(_) => debug!("Empty {} frame", frame.id_str()),
                    Err(e) => debug!("Skipping {} frame: {}", frame.id_str(), e),
                }
            }
        }

        Ok(scan)
    }

    /// Extract lyrics from an MP3 buffer, empty on any failure
    pub fn read_tags(&self, data: &[u8]) -> TagBundle {
        match self.scan(data) {
            Ok(scan) => scan.tags(),
            Err(e) => {
                debug!("No ID3 tags: {}", e);
                TagBundle::default()
            }
        }
    }
}

/// Extract unsynchronized lyrics from the ID3v2 tag of `data`
///
/// Examines the first `ID3_SCAN_LIMIT` bytes only.
pub fn parse_id3_tags(data: &[u8]) -> TagBundle {
    Id3Reader::new().read_tags(data)
}
