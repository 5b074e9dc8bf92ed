use log::{debug, error, warn};

use super::decoder::DecodeError;
use super::format::PixelFormat;
use super::swizzle::check_dimensions;
use crate::constants::*;

/// Every field of the fixed 0xA0-byte record header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KrtHeader {
    pub width: u32,
    pub height: u32,
    pub format_code: u32,
    /// Tile area hint (16, 32 or 64). Informational only.
    pub block_size: u16,
    pub flags: [u8; 2],
    pub mode_flag: u32,
    /// Stated size of the pixel data in bytes.
    pub image_size: u32,
    /// Zero when the record has no palette.
    pub palette_offset: u32,
    pub image_offset: u32,
    /// End of the pixel data. Zero means the data runs to the end of the record.
    pub file_size: u32,
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([data[offset], data[offset + 1]])
}

impl KrtHeader {
    /// Reads the raw header fields without validating them.
    pub fn read(data: &[u8]) -> Result<Self, DecodeError> {
        if data.len() < HEADER_SIZE {
            error!(
                "Record of {} bytes is shorter than the {:#x}-byte header",
                data.len(),
                HEADER_SIZE
            );
            return Err(DecodeError::TruncatedHeader { len: data.len() });
        }

        let header = Self {
            width: read_u32(data, WIDTH_OFFSET),
            height: read_u32(data, HEIGHT_OFFSET),
            format_code: read_u32(data, FORMAT_OFFSET),
            block_size: read_u16(data, BLOCK_SIZE_OFFSET),
            flags: [data[FLAGS_OFFSET], data[FLAGS_OFFSET + 1]],
            mode_flag: read_u32(data, MODE_FLAG_OFFSET),
            image_size: read_u32(data, IMAGE_SIZE_OFFSET),
            palette_offset: read_u32(data, PALETTE_OFFSET_OFFSET),
            image_offset: read_u32(data, IMAGE_OFFSET_OFFSET),
            file_size: read_u32(data, FILE_SIZE_OFFSET),
        };
        debug!("Header read: {:?}", header);
        Ok(header)
    }

    /// Serialises the header into exactly `HEADER_SIZE` bytes.
    pub fn write(&self) -> Vec<u8> {
        let mut out = vec![0u8; HEADER_SIZE];
        out[WIDTH_OFFSET..WIDTH_OFFSET + 4].copy_from_slice(&self.width.to_be_bytes());
        out[HEIGHT_OFFSET..HEIGHT_OFFSET + 4].copy_from_slice(&self.height.to_be_bytes());
        out[FORMAT_OFFSET..FORMAT_OFFSET + 4].copy_from_slice(&self.format_code.to_be_bytes());
        out[BLOCK_SIZE_OFFSET..BLOCK_SIZE_OFFSET + 2]
            .copy_from_slice(&self.block_size.to_be_bytes());
        out[FLAGS_OFFSET..FLAGS_OFFSET + 2].copy_from_slice(&self.flags);
        out[MODE_FLAG_OFFSET..MODE_FLAG_OFFSET + 4].copy_from_slice(&self.mode_flag.to_be_bytes());
        out[IMAGE_SIZE_OFFSET..IMAGE_SIZE_OFFSET + 4]
            .copy_from_slice(&self.image_size.to_be_bytes());
        out[PALETTE_OFFSET_OFFSET..PALETTE_OFFSET_OFFSET + 4]
            .copy_from_slice(&self.palette_offset.to_be_bytes());
        out[IMAGE_OFFSET_OFFSET..IMAGE_OFFSET_OFFSET + 4]
            .copy_from_slice(&self.image_offset.to_be_bytes());
        out[FILE_SIZE_OFFSET..FILE_SIZE_OFFSET + 4].copy_from_slice(&self.file_size.to_be_bytes());
        out
    }
}

/// A validated record, with its palette and pixel regions borrowed from the
/// input buffer.
#[derive(Debug, Clone)]
pub struct RawTexture<'a> {
    pub header: KrtHeader,
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    /// Empty for direct-colour formats.
    pub palette_bytes: &'a [u8],
    pub pixel_bytes: &'a [u8],
}

impl<'a> RawTexture<'a> {
    /// Parses and validates a record header and carves out its data regions.
    ///
    /// Checks run in order: header length, format code, dimensions, stated
    /// image size, offsets. The first failure is returned.
    pub fn parse(data: &'a [u8]) -> Result<Self, DecodeError> {
        let header = KrtHeader::read(data)?;
        let format = PixelFormat::from_code(header.format_code).inspect_err(|_| {
            error!("Unsupported pixel format code {:#x}", header.format_code);
        })?;
        let (width, height) = (header.width, header.height);
        debug!("Format {} at {}x{}", format, width, height);

        let tile = format.tile_size();
        check_dimensions(width, height, tile)?;
        if header.block_size as u32 != tile.area() {
            warn!(
                "Block size hint {} disagrees with the {}x{} tile of {}, ignoring it",
                header.block_size, tile.width, tile.height, format
            );
        }

        let expected_size = format
            .data_size(width, height)
            .ok_or(DecodeError::UnsupportedDimensions { width, height })?;
        if header.image_size as usize != expected_size {
            error!(
                "Stated image size {} does not match {} bytes for {}x{} {}",
                header.image_size, expected_size, width, height, format
            );
            return Err(DecodeError::SizeMismatch {
                stated: header.image_size,
                expected: expected_size,
            });
        }

        let palette = header.palette_offset as usize;
        let start = header.image_offset as usize;
        let end = match header.file_size {
            0 => data.len(),
            end => end as usize,
        };
        if start > end || end > data.len() || (palette != 0 && palette > start) {
            error!(
                "Offsets out of range: palette={:#x} start={:#x} end={:#x} len={:#x}",
                palette,
                start,
                end,
                data.len()
            );
            return Err(DecodeError::OffsetOutOfRange {
                palette,
                start,
                end,
                len: data.len(),
            });
        }

        let palette_bytes = if palette == 0 {
            &data[0..0]
        } else {
            &data[palette..start]
        };
        let pixel_bytes = &data[start..end];
        debug!(
            "Palette region {} bytes, pixel region {} bytes",
            palette_bytes.len(),
            pixel_bytes.len()
        );

        Ok(Self {
            header,
            width,
            height,
            format,
            palette_bytes,
            pixel_bytes,
        })
    }
}
