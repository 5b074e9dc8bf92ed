use image::{ImageError, RgbaImage};
use lib_krt::{decode, encode, DecodeError, DecodedImage, EncodingError, PixelFormat};
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("IO error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Image processing error: {0}")]
    Image(#[from] ImageError),

    #[error("KRT decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("KRT encode error: {0}")]
    Encode(#[from] EncodingError),

    #[error("Decoded buffer does not match its {width}x{height} dimensions")]
    BufferSize { width: u32, height: u32 },
}

fn read_file(path: &Path) -> Result<Vec<u8>, ToolError> {
    fs::read(path).map_err(|source| ToolError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, data: &[u8]) -> Result<(), ToolError> {
    fs::write(path, data).map_err(|source| ToolError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// `input` with its extension replaced, used when no output path is given.
pub fn default_output(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}

/// Loads a KRT record from disk and decodes it.
pub fn open_krt(path: &Path) -> Result<DecodedImage, ToolError> {
    let data = read_file(path)?;
    debug!("Read {} bytes from {}", data.len(), path.display());
    Ok(decode(&data)?)
}

/// Loads raw record bytes without decoding them.
pub fn open_record(path: &Path) -> Result<Vec<u8>, ToolError> {
    read_file(path)
}

/// Writes a decoded texture as PNG (or any format implied by the extension).
pub fn save_image(path: &Path, texture: DecodedImage) -> Result<(), ToolError> {
    let (width, height) = (texture.width, texture.height);
    let image = RgbaImage::from_raw(width, height, texture.rgba_data)
        .ok_or(ToolError::BufferSize { width, height })?;
    image.save(path)?;
    info!("Image saved successfully to {}", path.display());
    Ok(())
}

/// Opens any image the `image` crate understands as RGBA8.
pub fn open_image(path: &Path) -> Result<DecodedImage, ToolError> {
    let image = image::open(path)?.into_rgba8();
    let (width, height) = image.dimensions();
    debug!("Opened {}x{} image {}", width, height, path.display());
    Ok(DecodedImage::new(width, height, image.into_raw()))
}

/// Encodes an image as an RGBA8 KRT record and writes it out.
pub fn save_krt(path: &Path, image: &DecodedImage) -> Result<(), ToolError> {
    let encoded = encode(image, PixelFormat::Rgba8)?;
    write_file(path, &encoded)?;
    info!(
        "KRT record of {} bytes saved to {}",
        encoded.len(),
        path.display()
    );
    Ok(())
}
