#![allow(clippy::module_inception)]

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
};

use tracing::info;

use crate::{config::Config, errors::errors::Error, lexer::tokens::Token};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod report;

extern crate regex;

/// Tokenizes `config.input`, writes the file report to `config.output` and
/// prints the console report to `console`.
///
/// Both files are opened before any scanning happens. The file report is
/// complete before the console is touched, so a failing console still
/// leaves every token in `config.output`.
pub fn run<W: Write>(config: &Config, console: &mut W) -> Result<Vec<Token>, Error> {
    let input = File::open(&config.input).map_err(|source| Error::InputUnavailable {
        path: config.input.clone(),
        source,
    })?;
    let output = File::create(&config.output).map_err(|source| Error::OutputUnavailable {
        path: config.output.clone(),
        source,
    })?;

    let tokens = lexer::lexer::tokenize_reader(BufReader::new(input))?;

    info!(
        input = %config.input.display(),
        output = %config.output.display(),
        tokens = tokens.len(),
        "tokenized"
    );

    report::write_file(&mut BufWriter::new(output), &tokens)?;
    report::write_console(console, &tokens)?;

    Ok(tokens)
}
