use log::{debug, error};

use super::decoder::DecodeError;
use super::format::{PaletteFormat, Rgba};
use super::pixel::{decode_rgb565, decode_rgb5a3};

/// Size in bytes of one palette entry.
pub const ENTRY_SIZE: usize = 2;

/// Expands a palette blob into RGBA8 colours, index 0 first.
///
/// # Parameters
/// - `palette_bytes`: big-endian 16-bit entries. A trailing odd byte is ignored.
/// - `format`: bit layout of each entry.
///
/// # Errors
/// - Returns `DecodeError::MissingPalette` if `palette_bytes` holds no entry
pub fn resolve_palette(
    palette_bytes: &[u8],
    format: PaletteFormat,
) -> Result<Vec<Rgba>, DecodeError> {
    if palette_bytes.len() < ENTRY_SIZE {
        error!("Indexed texture has no palette data");
        return Err(DecodeError::MissingPalette);
    }

    let palette: Vec<Rgba> = palette_bytes
        .chunks_exact(ENTRY_SIZE)
        .map(|entry| {
            let value = u16::from_be_bytes([entry[0], entry[1]]);
            match format {
                PaletteFormat::Rgb565 => decode_rgb565(value),
                PaletteFormat::Rgb5a3 => decode_rgb5a3(value),
            }
        })
        .collect();

    debug!("Resolved {} {:?} palette entries", palette.len(), format);
    Ok(palette)
}

/// Colour for a palette index.
///
/// # Errors
/// - Returns `DecodeError::PaletteIndexOutOfRange` if `index` is past the end of `palette`
#[inline]
pub fn lookup(palette: &[Rgba], index: u8) -> Result<Rgba, DecodeError> {
    palette.get(index as usize).copied().ok_or_else(|| {
        error!(
            "Palette index {} exceeds palette size of {}",
            index,
            palette.len()
        );
        DecodeError::PaletteIndexOutOfRange {
            index,
            palette_len: palette.len(),
        }
    })
}
