use log::{debug, error, info};
use thiserror::Error;

use super::format::{DecodedImage, PixelFormat};
use super::header::KrtHeader;
use super::pixel::encode_rgba8;
use super::swizzle::{check_dimensions, tile_coords};
use crate::constants::{DEFAULT_FLAGS, DEFAULT_MODE_FLAG, HEADER_SIZE};

#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("Encoding to {0} is not supported, only RGBA8 is")]
    UnsupportedEncodeFormat(PixelFormat),
    #[error("Unsupported image dimensions {width}x{height}")]
    UnsupportedDimensions { width: u32, height: u32 },
    #[error("Invalid pixel data length: expected {expected} bytes, got {actual}")]
    InvalidPixelDataLength { expected: usize, actual: usize },
}

/// Encodes an RGBA8 image into a complete KRT record.
///
/// Only `PixelFormat::Rgba8` is accepted as `format`. The image dimensions
/// must be non-zero multiples of the 4x4 tile.
pub fn encode(image: &DecodedImage, format: PixelFormat) -> Result<Vec<u8>, EncodingError> {
    info!("Starting encoding");

    if format != PixelFormat::Rgba8 {
        error!("Cannot encode to {}, only RGBA8 is supported", format);
        return Err(EncodingError::UnsupportedEncodeFormat(format));
    }

    let (width, height) = (image.width, image.height);
    let tile = format.tile_size();
    check_dimensions(width, height, tile)
        .map_err(|_| EncodingError::UnsupportedDimensions { width, height })?;

    let data_size = format
        .data_size(width, height)
        .filter(|&size| HEADER_SIZE + size <= u32::MAX as usize)
        .ok_or_else(|| {
            error!("Image {}x{} is too large for a KRT record", width, height);
            EncodingError::UnsupportedDimensions { width, height }
        })?;
    if image.rgba_data.len() != data_size {
        error!(
            "Pixel buffer holds {} bytes, expected {}",
            image.rgba_data.len(),
            data_size
        );
        return Err(EncodingError::InvalidPixelDataLength {
            expected: data_size,
            actual: image.rgba_data.len(),
        });
    }

    // Step 1: Write header
    let header = KrtHeader {
        width,
        height,
        format_code: format.code(),
        block_size: tile.area() as u16,
        flags: DEFAULT_FLAGS,
        mode_flag: DEFAULT_MODE_FLAG,
        image_size: data_size as u32,
        palette_offset: 0,
        image_offset: HEADER_SIZE as u32,
        file_size: (HEADER_SIZE + data_size) as u32,
    };
    let mut encoded_data = header.write();
    encoded_data.reserve(data_size);
    debug!("Header written: {:?}", header);

    // Step 2: Write pixels in tile order
    let pixel_count = width as usize * height as usize;
    for index in 0..pixel_count {
        let (x, y) = tile_coords(index, width, tile);
        let offset = (y as usize * width as usize + x as usize) * DecodedImage::BYTES_PER_PIXEL;
        let color = [
            image.rgba_data[offset],
            image.rgba_data[offset + 1],
            image.rgba_data[offset + 2],
            image.rgba_data[offset + 3],
        ];
        encoded_data.extend_from_slice(&encode_rgba8(color));
    }
    debug!("{} pixels written in tile order", pixel_count);

    info!("Encoding process completed successfully");
    Ok(encoded_data)
}
