mod cli;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();
    let color = cli.use_color();
    if let Err(e) = cli::run(cli) {
        cli::report_error(e.as_ref(), color);
        std::process::exit(1);
    }
}
