use std::fmt;

use super::decoder::DecodeError;

/// An RGBA8 colour, channels in R, G, B, A order.
pub type Rgba = [u8; 4];

/// Layout of the 16-bit entries of a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteFormat {
    Rgb565,
    Rgb5a3,
}

/// How pixel units are laid out in the pixel data region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    /// Two pixels per byte, colour stored directly.
    Direct4,
    Direct16,
    Direct32,
    /// Two pixels per byte, high nibble first, each a palette index.
    Indexed4,
    Indexed8,
}

/// Dimensions of one swizzle tile in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSize {
    pub width: u32,
    pub height: u32,
}

impl TileSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn area(&self) -> u32 {
        self.width * self.height
    }
}

/// Every pixel format a KRT record may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgba8,
    Rgb565,
    Rgb5a3,
    Ci8(PaletteFormat),
    Ci4(PaletteFormat),
    /// 4-bit intensity, replicated into all four channels.
    I4,
}

impl PixelFormat {
    pub const RGBA8_CODE: u32 = 0x0F;
    pub const RGB5A3_CODE: u32 = 0x10;
    pub const CI8_RGB565_CODE: u32 = 0x11;
    pub const CI8_RGB5A3_CODE: u32 = 0x12;
    pub const CI4_RGB565_CODE: u32 = 0x13;
    pub const I4_CODE: u32 = 0x16;
    pub const RGB565_CODE: u32 = 0x17;

    /// Looks up the format stored in a record header.
    pub fn from_code(code: u32) -> Result<Self, DecodeError> {
        match code {
            Self::RGBA8_CODE => Ok(PixelFormat::Rgba8),
            Self::RGB5A3_CODE => Ok(PixelFormat::Rgb5a3),
            Self::RGB565_CODE => Ok(PixelFormat::Rgb565),
            Self::CI8_RGB565_CODE => Ok(PixelFormat::Ci8(PaletteFormat::Rgb565)),
            Self::CI8_RGB5A3_CODE => Ok(PixelFormat::Ci8(PaletteFormat::Rgb5a3)),
            Self::CI4_RGB565_CODE => Ok(PixelFormat::Ci4(PaletteFormat::Rgb565)),
            Self::I4_CODE => Ok(PixelFormat::I4),
            _ => Err(DecodeError::UnsupportedFormat(code)),
        }
    }

    /// Header code for this format.
    ///
    /// CI4 records are only ever seen with an RGB565 palette, so both CI4
    /// variants share one code.
    pub const fn code(&self) -> u32 {
        match self {
            PixelFormat::Rgba8 => Self::RGBA8_CODE,
            PixelFormat::Rgb565 => Self::RGB565_CODE,
            PixelFormat::Rgb5a3 => Self::RGB5A3_CODE,
            PixelFormat::Ci8(PaletteFormat::Rgb565) => Self::CI8_RGB565_CODE,
            PixelFormat::Ci8(PaletteFormat::Rgb5a3) => Self::CI8_RGB5A3_CODE,
            PixelFormat::Ci4(_) => Self::CI4_RGB565_CODE,
            PixelFormat::I4 => Self::I4_CODE,
        }
    }

    pub const fn tile_size(&self) -> TileSize {
        match self {
            PixelFormat::Rgba8 | PixelFormat::Rgb565 | PixelFormat::Rgb5a3 => TileSize::new(4, 4),
            PixelFormat::Ci8(_) => TileSize::new(8, 4),
            PixelFormat::Ci4(_) | PixelFormat::I4 => TileSize::new(8, 8),
        }
    }

    pub const fn storage(&self) -> StorageKind {
        match self {
            PixelFormat::Rgba8 => StorageKind::Direct32,
            PixelFormat::Rgb565 | PixelFormat::Rgb5a3 => StorageKind::Direct16,
            PixelFormat::Ci8(_) => StorageKind::Indexed8,
            PixelFormat::Ci4(_) => StorageKind::Indexed4,
            PixelFormat::I4 => StorageKind::Direct4,
        }
    }

    pub const fn bits_per_pixel(&self) -> u32 {
        match self.storage() {
            StorageKind::Direct4 | StorageKind::Indexed4 => 4,
            StorageKind::Indexed8 => 8,
            StorageKind::Direct16 => 16,
            StorageKind::Direct32 => 32,
        }
    }

    /// Palette entry layout for indexed formats, `None` for direct colour.
    pub const fn palette_format(&self) -> Option<PaletteFormat> {
        match self {
            PixelFormat::Ci8(palette) | PixelFormat::Ci4(palette) => Some(*palette),
            _ => None,
        }
    }

    /// Number of pixel data bytes an image of the given size occupies, or
    /// `None` if it does not fit in a `usize`.
    pub fn data_size(&self, width: u32, height: u32) -> Option<usize> {
        let bits = (width as u64)
            .checked_mul(height as u64)?
            .checked_mul(self.bits_per_pixel() as u64)?;
        usize::try_from(bits.div_ceil(8)).ok()
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelFormat::Rgba8 => write!(f, "RGBA8"),
            PixelFormat::Rgb565 => write!(f, "RGB565"),
            PixelFormat::Rgb5a3 => write!(f, "RGB5A3"),
            PixelFormat::Ci8(palette) => write!(f, "CI8 ({palette:?} palette)"),
            PixelFormat::Ci4(palette) => write!(f, "CI4 ({palette:?} palette)"),
            PixelFormat::I4 => write!(f, "I4"),
        }
    }
}

/// A decoded texture: row-major RGBA8 pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba_data: Vec<u8>,
}

impl DecodedImage {
    pub const BYTES_PER_PIXEL: usize = 4;

    pub fn new(width: u32, height: u32, rgba_data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            rgba_data,
        }
    }

    /// Colour at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * Self::BYTES_PER_PIXEL;
        let bytes = self.rgba_data.get(offset..offset + Self::BYTES_PER_PIXEL)?;
        Some([bytes[0], bytes[1], bytes[2], bytes[3]])
    }
}
