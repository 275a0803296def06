use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Byte buffer operations
#[derive(Subcommand, Debug)]
pub enum BufferCommand {
    /// Encode bytes to a radix-64 string
    Encode(BufferEncodeArgs),
    /// Decode a radix-64 string back to bytes
    Decode(BufferDecodeArgs),
}

/// Arguments for encoding a buffer
#[derive(Args, Debug)]
pub struct BufferEncodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Fixed output length in symbols (default: ceil(bytes * 8 / 6))
    #[arg(short = 'l', long, value_name = "N")]
    pub length: Option<usize>,

    /// Treat the input as hex text instead of raw bytes
    #[arg(long)]
    pub hex: bool,
}

/// Arguments for decoding a buffer
#[derive(Args, Debug)]
pub struct BufferDecodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output length in bytes (default: ceil(symbols * 6 / 8))
    #[arg(short = 'b', long, value_name = "N")]
    pub bytes: Option<usize>,

    /// Write the decoded bytes as hex text
    #[arg(long)]
    pub hex: bool,
}

/// Integer operations
#[derive(Subcommand, Debug)]
pub enum IntCommand {
    /// Encode a non-negative decimal integer
    Encode {
        /// The integer to encode (any size)
        value: String,

        /// Fixed output length in symbols
        #[arg(short = 'l', long, value_name = "N")]
        length: Option<usize>,
    },
    /// Decode a radix-64 string to a decimal integer
    Decode {
        /// The encoded string
        encoded: String,
    },
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// List configured alphabets
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show details for a specific alphabet
    Show {
        /// Alphabet name
        alphabet: String,
    },
}
