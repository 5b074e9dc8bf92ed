use log::error;

use super::bits::{expand3, expand4, expand5, expand6};
use super::decoder::DecodeError;
use super::format::{PixelFormat, Rgba, StorageKind};
use super::palette::lookup;

/// RGBA8 pixels are stored as `[G, B, A, R]`.
#[inline]
pub const fn decode_rgba8(bytes: [u8; 4]) -> Rgba {
    [bytes[3], bytes[0], bytes[1], bytes[2]]
}

/// Inverse of [`decode_rgba8`].
#[inline]
pub const fn encode_rgba8(color: Rgba) -> [u8; 4] {
    [color[1], color[2], color[3], color[0]]
}

#[inline]
pub const fn decode_rgb565(value: u16) -> Rgba {
    [
        expand5((value >> 11) as u8),
        expand6((value >> 5) as u8),
        expand5(value as u8),
        0xFF,
    ]
}

/// Bit 15 selects between opaque 5-5-5 colour and 3-4-4-4 colour with alpha.
#[inline]
pub const fn decode_rgb5a3(value: u16) -> Rgba {
    if value & 0x8000 != 0 {
        [
            expand5((value >> 10) as u8),
            expand5((value >> 5) as u8),
            expand5(value as u8),
            0xFF,
        ]
    } else {
        [
            expand4((value >> 8) as u8),
            expand4((value >> 4) as u8),
            expand4(value as u8),
            expand3((value >> 12) as u8),
        ]
    }
}

#[inline]
pub const fn decode_i4(intensity: u8) -> Rgba {
    let i = expand4(intensity);
    [i, i, i, i]
}

/// Reads pixels one at a time, in storage order, from a pixel data region.
///
/// Every read checks the remaining length first, so a short region yields
/// `DecodeError::TruncatedPixelData` instead of reading past its end.
pub struct PixelReader<'a> {
    format: PixelFormat,
    data: &'a [u8],
    palette: &'a [Rgba],
    cursor: usize,
    /// Low nibble of the last byte read by a 4-bit format, not yet consumed.
    pending_nibble: Option<u8>,
    expected_len: usize,
}

impl<'a> PixelReader<'a> {
    /// `palette` is ignored by direct-colour formats.
    pub fn new(format: PixelFormat, data: &'a [u8], palette: &'a [Rgba]) -> Self {
        Self {
            format,
            data,
            palette,
            cursor: 0,
            pending_nibble: None,
            expected_len: data.len(),
        }
    }

    /// Sets the total size reported by truncation errors, normally the byte
    /// count the whole image requires.
    pub fn with_expected_len(mut self, expected_len: usize) -> Self {
        self.expected_len = expected_len;
        self
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let end = self.cursor + N;
        let Some(bytes) = self.data.get(self.cursor..end) else {
            error!(
                "Pixel data ended at byte {} while reading {} more",
                self.data.len(),
                N
            );
            return Err(DecodeError::TruncatedPixelData {
                expected: self.expected_len.max(end),
                actual: self.data.len(),
            });
        };
        self.cursor = end;

        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// High nibble of a fresh byte first, then the low nibble of that byte.
    fn next_nibble(&mut self) -> Result<u8, DecodeError> {
        if let Some(low) = self.pending_nibble.take() {
            return Ok(low);
        }
        let [byte] = self.take::<1>()?;
        self.pending_nibble = Some(byte & 0x0F);
        Ok(byte >> 4)
    }

    pub fn next_pixel(&mut self) -> Result<Rgba, DecodeError> {
        match self.format.storage() {
            StorageKind::Direct32 => Ok(decode_rgba8(self.take::<4>()?)),
            StorageKind::Direct16 => {
                let value = u16::from_be_bytes(self.take::<2>()?);
                match self.format {
                    PixelFormat::Rgb5a3 => Ok(decode_rgb5a3(value)),
                    _ => Ok(decode_rgb565(value)),
                }
            }
            StorageKind::Direct4 => Ok(decode_i4(self.next_nibble()?)),
            StorageKind::Indexed8 => {
                let [index] = self.take::<1>()?;
                lookup(self.palette, index)
            }
            StorageKind::Indexed4 => {
                let index = self.next_nibble()?;
                lookup(self.palette, index)
            }
        }
    }
}
