use migscript_common::Span;
use serde::Serialize;
use std::fmt;

/// Words the lexer reports as [`TokenKind::Keyword`]. Matching is exact and
/// case-sensitive.
pub const KEYWORDS: [&str; 2] = ["let", "writl"];

/// A single token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Matched text. String tokens exclude their quotes.
    pub lexeme: String,
    /// Line counter at the moment the token was emitted. For a string that
    /// spans lines this is the line of its last character; use
    /// `span.start.line` for the line it begins on.
    pub line: u32,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            span,
        }
    }
}

/// All token kinds in MigScript.
///
/// `OpenParen`, `CloseParen`, `BinaryOperator` and `Let` are reserved:
/// the scanner never produces them, parentheses and operators come out
/// as `Symbol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Identifier,
    Number,
    String,
    Keyword,
    Symbol,
    OpenParen,
    CloseParen,
    BinaryOperator,
    Let,
}

impl TokenKind {
    /// Classify an identifier-shaped lexeme.
    pub fn from_word(word: &str) -> Self {
        if KEYWORDS.contains(&word) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::Keyword => "Keyword",
            TokenKind::Symbol => "Symbol",
            TokenKind::OpenParen => "OpenParen",
            TokenKind::CloseParen => "CloseParen",
            TokenKind::BinaryOperator => "BinaryOperator",
            TokenKind::Let => "Let",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_lookup_is_case_sensitive() {
        assert_eq!(TokenKind::from_word("let"), TokenKind::Keyword);
        assert_eq!(TokenKind::from_word("writl"), TokenKind::Keyword);
        assert_eq!(TokenKind::from_word("LET"), TokenKind::Identifier);
        assert_eq!(TokenKind::from_word("Let1"), TokenKind::Identifier);
        assert_eq!(TokenKind::from_word("writln"), TokenKind::Identifier);
    }

    #[test]
    fn kind_displays_as_variant_name() {
        assert_eq!(TokenKind::Keyword.to_string(), "Keyword");
        assert_eq!(TokenKind::BinaryOperator.to_string(), "BinaryOperator");
        assert_eq!(format!("{}", TokenKind::Symbol), format!("{:?}", TokenKind::Symbol));
    }
}
