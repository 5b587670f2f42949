use std::{
    io::{self, BufWriter},
    process::ExitCode,
};

use words::{driver, error::Chain, logging, options};

fn main() -> ExitCode {
    let args = options::parse_args();
    if let Err(err) = logging::init() {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    let mut stdout = BufWriter::new(io::stdout().lock());
    match driver::run(&args, io::stdin().lock(), &mut stdout) {
        Ok(summary) => {
            log::debug!("{summary:?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{}", Chain(&err));
            ExitCode::FAILURE
        }
    }
}
