//! Layout of the fixed KRT header. All multi-byte fields are big-endian.

/// Size of the fixed header. Pixel data written by the encoder starts here.
pub const HEADER_SIZE: usize = 0xA0;

/// The record starts with this many zero bytes.
pub const LEADING_PADDING_SIZE: usize = 0x20;

pub const WIDTH_OFFSET: usize = 0x20;
pub const HEIGHT_OFFSET: usize = 0x24;
pub const FORMAT_OFFSET: usize = 0x28;
pub const BLOCK_SIZE_OFFSET: usize = 0x2C;
pub const FLAGS_OFFSET: usize = 0x2E;
pub const MODE_FLAG_OFFSET: usize = 0x34;
pub const IMAGE_SIZE_OFFSET: usize = 0x38;
pub const PALETTE_OFFSET_OFFSET: usize = 0x6C;
pub const IMAGE_OFFSET_OFFSET: usize = 0x70;
pub const FILE_SIZE_OFFSET: usize = 0x74;

/// Value almost every shipped texture carries in the two flag bytes.
pub const DEFAULT_FLAGS: [u8; 2] = [0x01, 0x01];

/// Mode flag written by the encoder.
pub const DEFAULT_MODE_FLAG: u32 = 0xFF;
