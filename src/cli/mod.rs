mod args;
mod config;
mod global;
mod handlers;
mod logging;

use clap::{Parser, Subcommand};
use std::io::IsTerminal;

use args::{BufferCommand, ConfigAction, IntCommand};
use config::{create_codec, load_registry};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "radix64")]
#[command(version)]
#[command(
    about = "Order-preserving base-64 encoding: encoded strings sort like the bytes and integers they encode",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode and decode byte buffers
    #[command(subcommand)]
    Buffer(BufferCommand),

    /// Encode and decode non-negative integers
    #[command(subcommand)]
    Int(IntCommand),

    /// Inspect configured alphabets
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

impl Cli {
    /// Whether stderr output may carry ANSI colors.
    pub fn use_color(&self) -> bool {
        color_enabled(
            self.global.no_color,
            std::env::var_os("NO_COLOR").is_some(),
            std::io::stderr().is_terminal(),
        )
    }
}

fn color_enabled(no_color_flag: bool, no_color_env: bool, is_terminal: bool) -> bool {
    !no_color_flag && !no_color_env && is_terminal
}

/// Prints an error the way the binary reports failures.
pub fn report_error(err: &dyn std::error::Error, color: bool) {
    if color {
        eprintln!("\x1b[1;31merror:\x1b[0m {}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    logging::setup_logging(cli.global.verbose, cli.use_color());

    let registry = load_registry(&cli.global)?;

    match cli.command {
        Commands::Buffer(command) => {
            let codec = create_codec(&registry, &cli.global)?;
            handlers::buffer::handle(command, &codec)
        }
        Commands::Int(command) => {
            let codec = create_codec(&registry, &cli.global)?;
            handlers::int::handle(command, &codec)
        }
        Commands::Config { action } => handlers::config::handle(action, &registry),
    }
}
