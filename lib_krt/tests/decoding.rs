mod common;

use common::*;
use lib_krt::constants::HEADER_SIZE;
use lib_krt::texture::bits::{expand3, expand4, expand5};
use lib_krt::{decode, decode_texture, DecodeError, RawTexture};

#[test]
fn test_decode_truncated_header() {
    let data = vec![0u8; HEADER_SIZE - 1];
    assert!(matches!(
        decode(&data),
        Err(DecodeError::TruncatedHeader { .. })
    ));
}

#[test]
fn test_decode_unknown_format() {
    let record = build_record(4, 4, 0x99, &[], &[0u8; 64]);
    assert!(matches!(
        decode(&record),
        Err(DecodeError::UnsupportedFormat(0x99))
    ));
}

#[test]
fn test_decode_pixel_data_one_byte_short() {
    let record = build_record(4, 4, RGBA8, &[], &[0u8; 63]);
    assert!(matches!(
        decode(&record),
        Err(DecodeError::TruncatedPixelData {
            expected: 64,
            actual: 63
        })
    ));
}

#[test]
fn test_decode_size_mismatch() {
    let mut record = build_record(4, 4, RGB565, &[], &[0u8; 32]);
    // Stated image size of width * height, as older tooling wrote it.
    record[0x38..0x3C].copy_from_slice(&16u32.to_be_bytes());
    assert!(matches!(
        decode(&record),
        Err(DecodeError::SizeMismatch {
            stated: 16,
            expected: 32
        })
    ));
}

#[test]
fn test_decode_unaligned_dimensions() {
    let record = build_record(8, 6, RGB565, &[], &[0u8; 96]);
    assert!(matches!(
        decode(&record),
        Err(DecodeError::UnsupportedDimensions {
            width: 8,
            height: 6
        })
    ));
}

#[test]
fn test_decode_ci8_index_out_of_range() {
    let palette = be_u16s(&[0x0000, 0xFFFF]);
    let mut pixels = vec![0u8; 32];
    pixels[0] = 2;
    let record = build_record(8, 4, CI8_RGB565, &palette, &pixels);
    assert!(matches!(
        decode(&record),
        Err(DecodeError::PaletteIndexOutOfRange {
            index: 2,
            palette_len: 2
        })
    ));
}

#[test]
fn test_decode_ci8_missing_palette() {
    let record = build_record(8, 4, CI8_RGB565, &[], &[0u8; 32]);
    assert!(matches!(decode(&record), Err(DecodeError::MissingPalette)));
}

#[test]
fn test_decode_rgb565_tiles() {
    // An 8x4 image is two 4x4 tiles side by side.
    let mut values = vec![0xF800u16; 16];
    values.extend(std::iter::repeat(0x001F).take(16));
    let record = build_record(8, 4, RGB565, &[], &be_u16s(&values));

    let image = decode(&record).unwrap();
    assert_eq!(image.width, 8);
    assert_eq!(image.height, 4);
    assert_eq!(image.rgba_data.len(), 8 * 4 * 4);
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(image.pixel(x, y), Some([255, 0, 0, 255]));
            assert_eq!(image.pixel(x + 4, y), Some([0, 0, 255, 255]));
        }
    }
}

#[test]
fn test_decode_rgb5a3_dispatch() {
    let mut values = vec![0u16; 16];
    values[0] = 0x8421;
    values[1] = 0x0421;
    let record = build_record(4, 4, RGB5A3, &[], &be_u16s(&values));

    let image = decode(&record).unwrap();
    assert_eq!(
        image.pixel(0, 0),
        Some([expand5(1), expand5(1), expand5(1), 255])
    );
    assert_eq!(
        image.pixel(1, 0),
        Some([expand4(4), expand4(2), expand4(1), expand3(0)])
    );
}

#[test]
fn test_decode_rgba8_channel_order() {
    let mut pixels = vec![0u8; 64];
    pixels[..4].copy_from_slice(&[0x10, 0x20, 0x30, 0x40]);
    let record = build_record(4, 4, RGBA8, &[], &pixels);

    let image = decode(&record).unwrap();
    assert_eq!(image.pixel(0, 0), Some([0x40, 0x10, 0x20, 0x30]));
}

#[test]
fn test_decode_ci8_rgb5a3_palette() {
    // Opaque white, half transparent grey.
    let palette = be_u16s(&[0xFFFF, 0x4888]);
    let mut pixels = vec![0u8; 64];
    // Second tile of a 16x4 image starts at x = 8.
    pixels[32] = 1;
    let record = build_record(16, 4, CI8_RGB5A3, &palette, &pixels);

    let image = decode(&record).unwrap();
    assert_eq!(image.pixel(0, 0), Some([255, 255, 255, 255]));
    assert_eq!(
        image.pixel(8, 0),
        Some([expand4(8), expand4(8), expand4(8), expand3(4)])
    );
    assert_eq!(image.pixel(9, 0), Some([255, 255, 255, 255]));
}

#[test]
fn test_decode_ci4_nibbles() {
    let palette_values: Vec<u16> = (0..16).map(|i| (i as u16) << 11).collect();
    let palette = be_u16s(&palette_values);
    let mut pixels = vec![0u8; 32];
    pixels[0] = 0x1F;
    // Byte 4 holds pixels 8 and 9, the start of the second row of the tile.
    pixels[4] = 0x30;
    let record = build_record(8, 8, CI4_RGB565, &palette, &pixels);

    let image = decode(&record).unwrap();
    assert_eq!(image.pixel(0, 0), Some([expand5(1), 0, 0, 255]));
    assert_eq!(image.pixel(1, 0), Some([expand5(15), 0, 0, 255]));
    assert_eq!(image.pixel(0, 1), Some([expand5(3), 0, 0, 255]));
    assert_eq!(image.pixel(1, 1), Some([0, 0, 0, 255]));
}

#[test]
fn test_decode_i4() {
    let mut pixels = vec![0u8; 32];
    pixels[0] = 0xF8;
    let record = build_record(8, 8, I4, &[], &pixels);

    let image = decode(&record).unwrap();
    assert_eq!(image.pixel(0, 0), Some([255, 255, 255, 255]));
    assert_eq!(image.pixel(1, 0), Some([0x88, 0x88, 0x88, 0x88]));
    assert_eq!(image.pixel(2, 0), Some([0, 0, 0, 0]));
}

#[test]
fn test_decode_parsed_texture() {
    let palette = be_u16s(&[0x07E0]);
    let record = build_record(8, 4, CI8_RGB565, &palette, &[0u8; 32]);

    let texture = RawTexture::parse(&record).unwrap();
    assert_eq!(texture.palette_bytes, &palette[..]);
    assert_eq!(texture.pixel_bytes.len(), 32);

    let image = decode_texture(&texture).unwrap();
    assert!(image
        .rgba_data
        .chunks_exact(4)
        .all(|pixel| pixel == [0, 255, 0, 255]));
}

#[test]
fn test_decode_ignores_trailing_data() {
    let mut record = build_record(4, 4, RGB565, &[], &[0xFF; 32]);
    // Clear the end offset so the data runs to the end of the buffer.
    record[0x74..0x78].copy_from_slice(&0u32.to_be_bytes());
    record.extend_from_slice(&[0xAB; 16]);

    let image = decode(&record).unwrap();
    assert!(image
        .rgba_data
        .chunks_exact(4)
        .all(|pixel| pixel == [255, 255, 255, 255]));
}
