use argh::FromArgs;
use lib_krt::{PixelFormat, RawTexture};
use log::info;
use std::path::PathBuf;

use crate::filemanager::{
    default_output, open_image, open_krt, open_record, save_image, save_krt, ToolError,
};

#[derive(FromArgs, Debug)]
/// Convert a KRT texture into a PNG image
#[argh(subcommand, name = "decode")]
pub struct DecodeCmd {
    /// input KRT file
    #[argh(option)]
    pub input: PathBuf,

    /// output image path [default: input with a .png extension]
    #[argh(option)]
    pub output: Option<PathBuf>,
}

#[derive(FromArgs, Debug)]
/// Convert an image into an RGBA8 KRT texture
#[argh(subcommand, name = "encode")]
pub struct EncodeCmd {
    /// input image file (PNG or any other format the image crate reads)
    #[argh(option)]
    pub input: PathBuf,

    /// output KRT path [default: input with a .krt extension]
    #[argh(option)]
    pub output: Option<PathBuf>,
}

#[derive(FromArgs, Debug)]
/// Print the header of a KRT texture
#[argh(subcommand, name = "info")]
pub struct InfoCmd {
    /// input KRT file
    #[argh(option)]
    pub input: PathBuf,
}

pub fn handle_decode_command(cmd: DecodeCmd) -> Result<(), ToolError> {
    let output = cmd
        .output
        .unwrap_or_else(|| default_output(&cmd.input, "png"));
    info!("Decoding {} to {}", cmd.input.display(), output.display());

    let texture = open_krt(&cmd.input)?;
    save_image(&output, texture)
}

pub fn handle_encode_command(cmd: EncodeCmd) -> Result<(), ToolError> {
    let output = cmd
        .output
        .unwrap_or_else(|| default_output(&cmd.input, "krt"));
    info!("Encoding {} to {}", cmd.input.display(), output.display());

    let image = open_image(&cmd.input)?;
    save_krt(&output, &image)
}

pub fn handle_info_command(cmd: InfoCmd) -> Result<(), ToolError> {
    let data = open_record(&cmd.input)?;
    let texture = RawTexture::parse(&data)?;
    let header = &texture.header;
    let tile = texture.format.tile_size();

    println!("{}", cmd.input.display());
    println!("  dimensions:     {}x{}", header.width, header.height);
    println!(
        "  format:         {} (code {:#04x})",
        texture.format, header.format_code
    );
    println!(
        "  tile:           {}x{}, {} bpp",
        tile.width,
        tile.height,
        texture.format.bits_per_pixel()
    );
    println!("  block size:     {}", header.block_size);
    println!(
        "  flags:          {:02x} {:02x}, mode {:#x}",
        header.flags[0], header.flags[1], header.mode_flag
    );
    println!("  image size:     {} bytes", header.image_size);
    match texture.format {
        PixelFormat::Ci8(_) | PixelFormat::Ci4(_) => println!(
            "  palette:        {:#x}, {} entries",
            header.palette_offset,
            texture.palette_bytes.len() / 2
        ),
        _ => println!("  palette:        none"),
    }
    println!(
        "  pixel data:     {:#x}..{:#x} ({} bytes)",
        header.image_offset,
        header.image_offset as usize + texture.pixel_bytes.len(),
        texture.pixel_bytes.len()
    );
    Ok(())
}
