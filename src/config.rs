//! Run configuration.

use std::path::PathBuf;

use crate::errors::errors::Error;

/// Input read when no path is given.
pub const DEFAULT_INPUT: &str = "program.txt";

/// Output written when no path is given.
pub const DEFAULT_OUTPUT: &str = "tokens.txt";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl Config {
    /// Builds a config from positional arguments, program name excluded:
    /// `[input] [output]`.
    pub fn from_args<I, S>(args: I) -> Result<Config, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let mut config = Config::default();

        match args.as_slice() {
            [] => {}
            [input] => config.input = PathBuf::from(input),
            [input, output] => {
                config.input = PathBuf::from(input);
                config.output = PathBuf::from(output);
            }
            _ => {
                return Err(Error::Usage {
                    message: format!(
                        "lexical {} takes at most 2 arguments ([input] [output]), received {}",
                        VERSION,
                        args.len()
                    ),
                })
            }
        }

        Ok(config)
    }
}
