use std::{io, process::ExitCode};

use words::{limits, logging};

fn main() -> ExitCode {
    if let Err(err) = logging::init() {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }
    match limits::report(&mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("failed to write limits: {err}");
            ExitCode::FAILURE
        }
    }
}
