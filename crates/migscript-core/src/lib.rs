//! Core of the MigScript front end.
//!
//! The [`lexer`] turns source text into [`lexer::Token`]s. Everything else
//! here backs the command-line front ends: reading console input, echoing
//! tokens, and rendering diagnostics.

pub mod cli;
pub mod interpreter;
pub mod lexer;
pub mod log;
pub mod report;
pub mod session;
pub mod source;

pub use lexer::{tokenize, Lexer, Token, TokenKind};
