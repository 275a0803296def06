use clap::Args;
use std::path::PathBuf;

/// Global arguments that apply to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Alphabet to use (see `config list`)
    #[arg(short = 'a', long, global = true, env = "RADIX64_ALPHABET")]
    pub alphabet: Option<String>,

    /// Extra alphabet config file, merged after the standard locations
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Fail instead of silently dropping high-order bits in buffer encoding
    #[arg(long, global = true)]
    pub strict: bool,

    /// Log debug details to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}
