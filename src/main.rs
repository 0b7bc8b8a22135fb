//! Confetti - Command-line tool for planning confetti explosions

use std::process::ExitCode;

use confetti::cli;

fn main() -> ExitCode {
    cli::run()
}
