mod commands;
mod filemanager;

use argh::FromArgs;
use log::error;
use std::process::ExitCode;

#[derive(FromArgs, Debug)]
/// Convert textures between the KRT format and common image formats
struct TopLevel {
    /// log every decoding step
    #[argh(switch, short = 'v')]
    verbose: bool,

    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Decode(commands::DecodeCmd),
    Encode(commands::EncodeCmd),
    Info(commands::InfoCmd),
}

fn main() -> ExitCode {
    let cli: TopLevel = argh::from_env();
    lib_krt::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Decode(cmd) => commands::handle_decode_command(cmd),
        Commands::Encode(cmd) => commands::handle_encode_command(cmd),
        Commands::Info(cmd) => commands::handle_info_command(cmd),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
