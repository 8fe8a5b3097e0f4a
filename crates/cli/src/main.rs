use std::process::ExitCode;

use build_misc_cli::cli_args::Args;
use clap::Parser;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    build_misc_cli::execute(&args)
}
