//! salesdash: sales activity dashboard CLI.

use clap::Parser;
use sd_core::cli::{run, Cli};
use sd_core::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_json);
    let code = run(&cli);
    std::process::exit(code.as_i32());
}
