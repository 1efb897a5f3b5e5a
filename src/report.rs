//! Token stream reports.
//!
//! The console and file reports list the same tokens in the same order with
//! the same fields (class part, value part, line number). Only the
//! punctuation differs.

use std::io::Write;

use crate::{errors::errors::Error, lexer::tokens::Token};

pub fn write_console<W: Write>(out: &mut W, tokens: &[Token]) -> Result<(), Error> {
    for token in tokens {
        writeln!(out, "{}", token.console_line()).map_err(|source| Error::Write { source })?;
    }

    Ok(())
}

pub fn write_file<W: Write>(out: &mut W, tokens: &[Token]) -> Result<(), Error> {
    for token in tokens {
        writeln!(out, "{}", token.file_line()).map_err(|source| Error::Write { source })?;
    }

    out.flush().map_err(|source| Error::Write { source })
}
