use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("error opening input file {path:?}: {source}")]
    InputUnavailable { path: PathBuf, source: io::Error },
    #[error("error opening output file {path:?}: {source}")]
    OutputUnavailable { path: PathBuf, source: io::Error },
    #[error("error reading input: {source}")]
    Read { source: io::Error },
    #[error("error writing tokens: {source}")]
    Write { source: io::Error },
    #[error("usage: {message}")]
    Usage { message: String },
}

impl Error {
    pub fn get_error_name(&self) -> &str {
        match self {
            Error::InputUnavailable { .. } => "InputUnavailable",
            Error::OutputUnavailable { .. } => "OutputUnavailable",
            Error::Read { .. } => "Read",
            Error::Write { .. } => "Write",
            Error::Usage { .. } => "Usage",
        }
    }
}
