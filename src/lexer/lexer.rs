use std::io::BufRead;

use tracing::{debug, trace};

use crate::errors::errors::Error;

use super::{classify::classify, tokens::Token};

/// Read in place of the character after the end of a line. It is neither
/// whitespace nor `/`, so it never ends a span or starts a comment.
const SENTINEL: char = '\0';

/// ASCII whitespace, vertical tab included.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

#[derive(Debug, Default)]
pub struct Lexer {
    tokens: Vec<Token>,
    line: usize,
}

impl Lexer {
    pub fn new() -> Lexer {
        Lexer::default()
    }

    /// Scans the next line, numbering it one past the previous line.
    pub fn push_line(&mut self, line: &str) {
        self.line += 1;
        tokenize_line(line, self.line, &mut self.tokens);
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn finish(self) -> Vec<Token> {
        self.tokens
    }
}

/// Appends the tokens of one line to `tokens`.
///
/// A span is flushed when the character after it is whitespace or when it
/// reaches the end of the line. Hitting `//` stops the line outright, and
/// whatever span was still being built at that point is discarded.
pub fn tokenize_line(line: &str, line_no: usize, tokens: &mut Vec<Token>) {
    let chars: Vec<char> = line.chars().collect();
    let before = tokens.len();
    let mut buffer = String::new();

    for (i, &c) in chars.iter().enumerate() {
        let next = chars.get(i + 1).copied().unwrap_or(SENTINEL);

        if is_space(c) {
            continue;
        } else if c == '/' && next == '/' {
            if !buffer.is_empty() {
                trace!(line = line_no, span = %buffer, "dropping span cut by comment");
            }
            break;
        }

        buffer.push(c);

        if is_space(next) || i == chars.len() - 1 {
            let kind = classify(&buffer);
            trace!(line = line_no, span = %buffer, %kind, "classified span");
            tokens.push(Token::new(kind, std::mem::take(&mut buffer), line_no));
        }
    }

    debug!(line = line_no, count = tokens.len() - before, "scanned line");
}

/// Tokenizes a whole source text, numbering lines from 1.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new();

    for line in source.lines() {
        lex.push_line(line);
    }

    lex.finish()
}

/// Tokenizes everything `reader` yields, one line at a time.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD and end up inside
/// whatever span contains them. Only a failing read is an error.
pub fn tokenize_reader<R: BufRead>(mut reader: R) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| Error::Read { source })?;
        if read == 0 {
            break;
        }

        let mut bytes = buf.as_slice();
        if let Some(rest) = bytes.strip_suffix(b"\n") {
            bytes = rest.strip_suffix(b"\r").unwrap_or(rest);
        }
        lex.push_line(&String::from_utf8_lossy(bytes));
    }

    Ok(lex.finish())
}

