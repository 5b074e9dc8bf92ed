pub mod bits;
pub mod decoder;
pub mod encoder;
pub mod format;
pub mod header;
pub mod palette;
pub mod pixel;
pub mod swizzle;

pub use decoder::{decode, decode_texture, DecodeError};
pub use encoder::{encode, EncodingError};
pub use format::{DecodedImage, PaletteFormat, PixelFormat, Rgba, StorageKind, TileSize};
pub use header::{KrtHeader, RawTexture};
