//! Bounds-checked reads over a borrowed byte buffer

use crate::error::{MetadataError, Result};

/// Forward-only reader over a byte slice
///
/// Every read checks the remaining length first and reports
/// `MetadataError::Truncated` instead of panicking.
#[derive(Debug, Clone)]
pub(crate) struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Start reading at `pos` (clamped to the end of `data`)
    pub fn at(data: &'a [u8], pos: usize) -> Self {
        Self {
            data,
            pos: pos.min(data.len()),
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Next byte without consuming it
    pub fn peek_u8(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Up to `len` bytes from the current position without consuming them
    pub fn peek_up_to(&self, len: usize) -> &'a [u8] {
        let end = self.pos + len.min(self.remaining());
        &self.data[self.pos..end]
    }

    /// Everything from the current position on
    pub fn rest(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    pub fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(MetadataError::Truncated {
                offset: self.pos,
                needed: len,
                available: self.remaining(),
            });
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.take(len).map(|_| ())
    }

    pub fn array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    pub fn u8(&mut self) -> Result<u8> {
        Ok(self.array::<1>()?[0])
    }

    /// 24-bit big-endian, widened to `u32`
    pub fn u24_be(&mut self) -> Result<u32> {
        let [b0, b1, b2] = self.array::<3>()?;
        Ok((u32::from(b0) << 16) | (u32::from(b1) << 8) | u32::from(b2))
    }

    pub fn u32_be(&mut self) -> Result<u32> {
        Ok(u32::from_be_bytes(self.array()?))
    }

    pub fn u32_le(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.array()?))
    }

    /// 28-bit syncsafe integer: 7 value bits per byte, most significant first
    pub fn syncsafe_u32(&mut self) -> Result<u32> {
        Ok(syncsafe_u32(self.array()?))
    }
}

/// Decode a 4-byte ID3v2 syncsafe integer
pub fn syncsafe_u32(bytes: [u8; 4]) -> u32 {
    (u32::from(bytes[0] & 0x7F) << 21)
        | (u32::from(bytes[1] & 0x7F) << 14)
        | (u32::from(bytes[2] & 0x7F) << 7)
        | u32::from(bytes[3] & 0x7F)
}
