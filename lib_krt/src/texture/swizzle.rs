//! Mapping between storage order and image coordinates.
//!
//! Pixel data is stored tile by tile, left to right then top to bottom, and
//! row-major inside each tile. Both directions assume the image dimensions
//! are exact tile multiples; [`check_dimensions`] must have passed first.

use log::error;

use super::decoder::DecodeError;
use super::format::TileSize;

/// Rejects images whose dimensions are zero or not multiples of the tile.
pub fn check_dimensions(width: u32, height: u32, tile: TileSize) -> Result<(), DecodeError> {
    if width == 0 || height == 0 || width % tile.width != 0 || height % tile.height != 0 {
        error!(
            "Image dimensions {}x{} are not a multiple of the {}x{} tile",
            width, height, tile.width, tile.height
        );
        return Err(DecodeError::UnsupportedDimensions { width, height });
    }
    Ok(())
}

/// Image coordinate of the pixel stored at `index`.
#[inline]
pub fn tile_coords(index: usize, image_width: u32, tile: TileSize) -> (u32, u32) {
    let tile_area = tile.area() as usize;
    let tiles_per_row = (image_width / tile.width) as usize;

    let index_in_tile = index % tile_area;
    let tile_id = index / tile_area;
    let tile_col = tile_id % tiles_per_row;
    let tile_row = tile_id / tiles_per_row;

    let x = tile_col * tile.width as usize + index_in_tile % tile.width as usize;
    let y = tile_row * tile.height as usize + index_in_tile / tile.width as usize;
    (x as u32, y as u32)
}

/// Storage index of the pixel at `(x, y)`. Inverse of [`tile_coords`].
#[inline]
pub fn linear_index(x: u32, y: u32, image_width: u32, tile: TileSize) -> usize {
    let tiles_per_row = (image_width / tile.width) as usize;
    let tile_id = (y / tile.height) as usize * tiles_per_row + (x / tile.width) as usize;
    let index_in_tile = (y % tile.height) * tile.width + x % tile.width;
    tile_id * tile.area() as usize + index_in_tile as usize
}
