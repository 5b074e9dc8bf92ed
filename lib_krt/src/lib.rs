pub mod constants;
pub mod texture;

use log::*;
use std::io::Write;

pub use crate::texture::format::{DecodedImage, PixelFormat};
pub use crate::texture::header::{KrtHeader, RawTexture};
pub use crate::texture::{decode, decode_texture, encode, DecodeError, EncodingError};

/// Installs a stderr logger for front ends.
///
/// `RUST_LOG` takes precedence over the default level, which is `Info`, or
/// `Debug` when `verbose` is set. Calling this twice is a no-op.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let _ = env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter_level(level)
        .parse_env("RUST_LOG")
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init();
}
