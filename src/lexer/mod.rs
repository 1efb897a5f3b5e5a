//! Lexical analysis module.
//!
//! Converts source text into a flat stream of classified tokens:
//!
//! - Keyword and operator lookup tables
//! - Integer and double constant recognition
//! - Identifier fallback for everything else
//! - `//` line comments
//! - Line numbers on every token

pub mod classify;
pub mod lexer;
pub mod tokens;
