use clap::Parser;
use std::path::PathBuf;

use crate::counter::Mode;

/// Count the words in files, or standard input when no file is given.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct ProgramArguments {
    /// Count the total amount of words. This is the default behavior
    #[arg(short, long, overrides_with_all = ["count", "frequency"])]
    pub count: bool,

    /// Count the frequency of each word
    #[arg(short, long, overrides_with_all = ["count", "frequency"])]
    pub frequency: bool,

    /// Input files, read in order. Reads STDIN when empty
    #[arg()]
    pub input_files: Vec<PathBuf>,
}

impl ProgramArguments {
    /// The flag given last decides the mode.
    pub fn mode(&self) -> Mode {
        if self.frequency {
            Mode::Frequency
        } else {
            Mode::Count
        }
    }
}

pub fn parse_args() -> ProgramArguments {
    ProgramArguments::parse()
}
