use migscript_common::{Diagnostic, DiagnosticBag, Position};
use unicode_general_category::{get_general_category, GeneralCategory};

use super::cursor::Cursor;
use super::token::{Token, TokenKind};

/// Source name used when none is given.
pub const DEFAULT_FILE: &str = "<stdin>";

/// Tokenize `source` with default (lenient) settings.
///
/// Never fails: unknown characters become one-character `Symbol` tokens and
/// an unterminated string runs to the end of input.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source, DEFAULT_FILE).collect()
}

/// Hand-written single-pass lexer for MigScript.
///
/// Recognises identifiers, the keywords `let` and `writl`, runs of decimal
/// digits, double-quoted strings, and treats every other non-whitespace
/// character as a symbol. In strict mode an unterminated string is also
/// reported as an error; the token stream is the same either way.
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    diagnostics: DiagnosticBag,
    strict: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str, file: impl Into<String>) -> Self {
        Self {
            cursor: Cursor::new(source, file),
            diagnostics: DiagnosticBag::new(),
            strict: false,
        }
    }

    /// Enable or disable strict diagnostics.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Tokenize the entire source, returning all tokens and diagnostics.
    pub fn tokenize(mut self) -> (Vec<Token>, DiagnosticBag) {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        (tokens, self.diagnostics)
    }

    /// Scan the next token, or `None` once only whitespace remains.
    fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();

        let start = self.cursor.position();
        let ch = self.cursor.advance()?;

        let token = match ch {
            '"' => self.scan_string(start),
            c if is_letter(c) => self.scan_word(start),
            c if is_decimal_digit(c) => self.scan_number(start),
            _ => self.make_token(TokenKind::Symbol, start),
        };
        Some(token)
    }

    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(char::is_whitespace);
    }

    /// Identifier or keyword. The first letter is already consumed.
    fn scan_word(&mut self, start: Position) -> Token {
        self.cursor.eat_while(is_word_continue);
        let kind = TokenKind::from_word(self.cursor.slice_from(start.offset));
        self.make_token(kind, start)
    }

    /// Run of decimal digits. The first digit is already consumed.
    fn scan_number(&mut self, start: Position) -> Token {
        self.cursor.eat_while(is_decimal_digit);
        self.make_token(TokenKind::Number, start)
    }

    /// String body up to the closing quote or end of input. The opening
    /// quote is already consumed. Newlines are kept verbatim and there are
    /// no escape sequences.
    fn scan_string(&mut self, start: Position) -> Token {
        let body_start = self.cursor.position().offset;
        self.cursor.eat_while(|c| c != '"');
        let value = self.cursor.slice_from(body_start);

        if !self.cursor.eat('"') && self.strict {
            let span = self.cursor.span_from(start);
            self.diagnostics.report(
                Diagnostic::error("unterminated string literal")
                    .with_span(span)
                    .with_suggestion("add a closing '\"'"),
            );
        }

        Token::new(
            TokenKind::String,
            value,
            self.cursor.line(),
            self.cursor.span_from(start),
        )
    }

    fn make_token(&self, kind: TokenKind, start: Position) -> Token {
        Token::new(
            kind,
            self.cursor.slice_from(start.offset),
            self.cursor.line(),
            self.cursor.span_from(start),
        )
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Letter categories Lu, Ll, Lt, Lm and Lo. Letter numbers such as `Ⅻ`
/// are not letters.
fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Category Nd only: `٣` is a digit, `²` is not.
fn is_decimal_digit(c: char) -> bool {
    matches!(get_general_category(c), GeneralCategory::DecimalNumber)
}

fn is_word_continue(c: char) -> bool {
    is_letter(c) || is_decimal_digit(c) || c == '_'
}
