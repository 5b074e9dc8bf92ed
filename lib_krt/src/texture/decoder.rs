use log::{debug, error, info};
use thiserror::Error;

use super::format::{DecodedImage, Rgba};
use super::header::RawTexture;
use super::palette::resolve_palette;
use super::pixel::PixelReader;
use super::swizzle::tile_coords;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Record of {len} bytes is too short for the texture header")]
    TruncatedHeader { len: usize },
    #[error("Stated image size {stated} does not match the {expected} bytes the format requires")]
    SizeMismatch { stated: u32, expected: usize },
    #[error(
        "Data offsets out of range: palette={palette:#x} start={start:#x} end={end:#x} length={len:#x}"
    )]
    OffsetOutOfRange {
        palette: usize,
        start: usize,
        end: usize,
        len: usize,
    },
    #[error("Unsupported pixel format code {0:#x}")]
    UnsupportedFormat(u32),
    #[error("Unsupported image dimensions {width}x{height}")]
    UnsupportedDimensions { width: u32, height: u32 },
    #[error("Pixel data truncated: expected {expected} bytes, got {actual}")]
    TruncatedPixelData { expected: usize, actual: usize },
    #[error("Indexed texture has no palette")]
    MissingPalette,
    #[error("Invalid palette index: {index} exceeds palette size of {palette_len}")]
    PaletteIndexOutOfRange { index: u8, palette_len: usize },
}

/// Decodes a complete KRT record into a row-major RGBA8 image.
pub fn decode(data: &[u8]) -> Result<DecodedImage, DecodeError> {
    info!("Starting decoding of {} byte record", data.len());
    let texture = RawTexture::parse(data)?;
    decode_texture(&texture)
}

/// Decodes an already parsed record.
pub fn decode_texture(texture: &RawTexture<'_>) -> Result<DecodedImage, DecodeError> {
    let (width, height) = (texture.width, texture.height);
    let format = texture.format;

    let palette: Vec<Rgba> = match format.palette_format() {
        Some(palette_format) => resolve_palette(texture.palette_bytes, palette_format)?,
        None => Vec::new(),
    };

    let required = format
        .data_size(width, height)
        .ok_or(DecodeError::UnsupportedDimensions { width, height })?;
    if texture.pixel_bytes.len() < required {
        error!(
            "Pixel data holds {} bytes, {}x{} {} needs {}",
            texture.pixel_bytes.len(),
            width,
            height,
            format,
            required
        );
        return Err(DecodeError::TruncatedPixelData {
            expected: required,
            actual: texture.pixel_bytes.len(),
        });
    }

    let pixel_count = width as usize * height as usize;
    let tile = format.tile_size();
    let mut rgba_data = vec![0u8; pixel_count * DecodedImage::BYTES_PER_PIXEL];
    let mut reader =
        PixelReader::new(format, texture.pixel_bytes, &palette).with_expected_len(required);

    for index in 0..pixel_count {
        let (x, y) = tile_coords(index, width, tile);
        let color = reader.next_pixel()?;
        let offset = (y as usize * width as usize + x as usize) * DecodedImage::BYTES_PER_PIXEL;
        rgba_data[offset..offset + DecodedImage::BYTES_PER_PIXEL].copy_from_slice(&color);
    }
    debug!(
        "Consumed {} of {} pixel data bytes",
        reader.position(),
        texture.pixel_bytes.len()
    );

    info!("Decoded {}x{} {} texture", width, height, format);
    Ok(DecodedImage::new(width, height, rgba_data))
}
