//! Chargen command line entry point

use std::process::ExitCode;

fn main() -> ExitCode {
    match chargen_core::cli::run() {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
