use std::process::ExitCode;

use clap::Parser;
use console::style;
use txtfmt::cli::Cli;

fn main() -> ExitCode {
    txtfmt::init_tracing();
    let cli = Cli::parse();
    match txtfmt::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", style("Error:").for_stderr().red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
