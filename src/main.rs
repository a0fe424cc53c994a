//! CLI entry point for the sorting visualizer

use clap::Parser;
use sortvis::io::cli::{Cli, Invocation, parse_error_status, usage};
use sortvis::io::session::Session;
use std::process::ExitCode;

// Allow print for usage text and fatal error reporting
#[allow(clippy::print_stdout, clippy::print_stderr)]
fn main() -> ExitCode {
    sortvis::io::logging::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return ExitCode::from(parse_error_status(&error));
        }
    };

    let result = cli.resolve().and_then(|invocation| match invocation {
        Invocation::Help => {
            print!("{}", usage());
            Ok(())
        }
        Invocation::Run(config) => Session::new(config).run().map(|_| ()),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
