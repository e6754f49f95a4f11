pub mod cursor;
pub mod token;

mod scanner;

pub use scanner::{tokenize, Lexer, DEFAULT_FILE};
pub use token::{Token, TokenKind, KEYWORDS};
