//! Error types shared by the counting pipeline and the driver.

use std::{error::Error as StdError, fmt, io, path::PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Storage for a new entry could not be obtained
    #[error("failed to allocate an entry for '{word}'")]
    Allocation { word: String },

    /// An input file could not be opened. The driver skips the file.
    #[error("Error opening file: {}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An open source failed part way through
    #[error("Error counting words from {source_name}")]
    Read {
        source_name: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to initialize word counts: {0}")]
    Initialization(String),

    #[error("failed to write results: {0}")]
    Output(#[from] io::Error),
}

impl Error {
    /// Whether the driver may carry on with the next input after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::FileOpen { .. })
    }
}

/// Shows an error followed by each of its sources, `: `-separated.
pub struct Chain<'a>(pub &'a dyn StdError);

impl fmt::Display for Chain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        let mut source = self.0.source();
        while let Some(cause) = source {
            write!(f, ": {cause}")?;
            source = cause.source();
        }
        Ok(())
    }
}
