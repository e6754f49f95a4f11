use std::io::{self, Write};

use crate::lexer::Token;

/// Echo pass: writes one line per token. It assigns no meaning to keywords.
pub struct Interpreter<W: Write> {
    out: W,
}

impl<W: Write> Interpreter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn interpret(&mut self, tokens: &[Token]) -> io::Result<()> {
        for token in tokens {
            writeln!(self.out, "{}", echo_line(token))?;
        }
        self.out.flush()
    }
}

/// `Token: {lexeme} | Type: {kind} | Line: {line}`
pub fn echo_line(token: &Token) -> String {
    format!(
        "Token: {} | Type: {} | Line: {}",
        token.lexeme, token.kind, token.line
    )
}

/// Token stream as a pretty-printed JSON array.
pub fn render_json(tokens: &[Token]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tokens)
}
