#![allow(dead_code)]

use lib_krt::constants::*;
use lib_krt::{DecodedImage, KrtHeader, PixelFormat};

pub const RGBA8: u32 = 0x0F;
pub const RGB5A3: u32 = 0x10;
pub const CI8_RGB565: u32 = 0x11;
pub const CI8_RGB5A3: u32 = 0x12;
pub const CI4_RGB565: u32 = 0x13;
pub const I4: u32 = 0x16;
pub const RGB565: u32 = 0x17;

/// Pixel data size a valid header states for the given format.
pub fn stated_size(format_code: u32, width: u32, height: u32) -> u32 {
    PixelFormat::from_code(format_code)
        .ok()
        .and_then(|format| format.data_size(width, height))
        .unwrap_or(0) as u32
}

/// Builds a record laid out as header, palette (if any), pixel data, with an
/// explicit end offset right after the pixel data.
pub fn build_record(
    width: u32,
    height: u32,
    format_code: u32,
    palette: &[u8],
    pixels: &[u8],
) -> Vec<u8> {
    let palette_offset = if palette.is_empty() { 0 } else { HEADER_SIZE };
    let image_offset = HEADER_SIZE + palette.len();
    let header = KrtHeader {
        width,
        height,
        format_code,
        block_size: 16,
        flags: DEFAULT_FLAGS,
        mode_flag: 0,
        image_size: stated_size(format_code, width, height),
        palette_offset: palette_offset as u32,
        image_offset: image_offset as u32,
        file_size: (image_offset + pixels.len()) as u32,
    };

    let mut record = header.write();
    record.extend_from_slice(palette);
    record.extend_from_slice(pixels);
    record
}

/// 16-bit big-endian values as bytes.
pub fn be_u16s(values: &[u16]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_be_bytes()).collect()
}

/// An image where every pixel is distinct: R = x, G = y, B = x ^ y, A = 255 - x.
pub fn gradient(width: u32, height: u32) -> DecodedImage {
    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            rgba.extend_from_slice(&[x as u8, y as u8, (x ^ y) as u8, 255 - x as u8]);
        }
    }
    DecodedImage::new(width, height, rgba)
}
