use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("while", TokenKind::Identifier);
        map.insert("string", TokenKind::Identifier);
        map.insert("for", TokenKind::Identifier);
        map.insert("if", TokenKind::Identifier);
        map.insert("public", TokenKind::Identifier);
        map.insert("private", TokenKind::Identifier);
        map.insert("protected", TokenKind::Identifier);
        map.insert("static", TokenKind::Identifier);
        map.insert("class", TokenKind::Class);
        map.insert("array", TokenKind::Identifier);
        map.insert("continue", TokenKind::Identifier);
        map.insert("main", TokenKind::Identifier);
        map.insert("void", TokenKind::Identifier);
        map.insert("true", TokenKind::Identifier);
        map.insert("false", TokenKind::Identifier);
        map.insert("abstract", TokenKind::Identifier);
        map.insert("sealed", TokenKind::Identifier);
        map.insert("break", TokenKind::Identifier);
        map.insert("return", TokenKind::Identifier);
        map
    };

    pub static ref OPERATOR_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("&&", TokenKind::And);
        map.insert("||", TokenKind::Or);
        map.insert("==", TokenKind::Equals);
        map.insert("!=", TokenKind::NotEquals);
        map.insert("+=", TokenKind::Assignment);
        map.insert("-=", TokenKind::Assignment);
        map.insert("*=", TokenKind::Assignment);
        map.insert("/=", TokenKind::Assignment);
        map.insert(">=", TokenKind::Comparison);
        map.insert("<=", TokenKind::Comparison);
        map.insert(">", TokenKind::Comparison);
        map.insert("<", TokenKind::Comparison);
        map.insert("+", TokenKind::Plus);
        map.insert("-", TokenKind::Dash);
        map.insert("*", TokenKind::Star);
        map.insert("/", TokenKind::Slash);
        map.insert("%", TokenKind::Percent);
        map.insert(":", TokenKind::Colon);
        map.insert(",", TokenKind::Comma);
        map.insert(";", TokenKind::Semicolon);
        map.insert("(", TokenKind::OpenParen);
        map.insert(")", TokenKind::CloseParen);
        map.insert("{", TokenKind::OpenCurly);
        map.insert("}", TokenKind::CloseCurly);
        map
    };
}

/// Classification of a token.
///
/// Every keyword other than `class` is reported as [`TokenKind::Identifier`],
/// so downstream consumers only ever see `class` as a distinct keyword.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Class,
    Identifier,
    IntegerConstant,
    DoubleConstant,

    And,        // &&
    Or,         // ||
    Equals,     // ==
    NotEquals,  // !=
    Assignment, // += -= *= /=
    Comparison, // > < >= <=

    Plus,
    Dash,
    Star,
    Slash,
    Percent,

    Colon,
    Comma,
    Semicolon,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
}

impl TokenKind {
    /// The class part as it appears in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Class => "class",
            TokenKind::Identifier => "ID",
            TokenKind::IntegerConstant => "Integer_Constant",
            TokenKind::DoubleConstant => "Double_Constant",
            TokenKind::And => "&",
            TokenKind::Or => "|",
            TokenKind::Equals => "=",
            TokenKind::NotEquals => "!=",
            TokenKind::Assignment => "Assignment",
            TokenKind::Comparison => "Comparison",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Colon => ":",
            TokenKind::Comma => "','",
            TokenKind::Semicolon => ";",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} , {} , {} )", self.kind, self.value, self.line)
    }
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, line: usize) -> Self {
        Token {
            kind,
            value: value.into(),
            line,
        }
    }

    /// Line written to the terminal for this token.
    pub fn console_line(&self) -> String {
        format!(
            "(Classpart: {} , Valuepart: {}, lineno: {})",
            self.kind, self.value, self.line
        )
    }

    /// Line written to the token file for this token.
    pub fn file_line(&self) -> String {
        self.to_string()
    }
}
