//! Error types for the lexer driver.
//!
//! Scanning itself cannot fail; every error here comes from the I/O
//! boundary or from the command line.

pub mod errors;
