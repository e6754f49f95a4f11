//! Properties that hold for every input, checked over generated sources.

use migscript_core::lexer::{Lexer, TokenKind};
use migscript_core::tokenize;
use proptest::prelude::*;

const MAX_INPUT_BYTES: usize = 256;

/// Sources biased towards the characters the scanner cares about.
fn script_source() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just("let".to_string()),
            Just("writl".to_string()),
            Just("\"".to_string()),
            Just("\n".to_string()),
            Just("\r".to_string()),
            Just(" ".to_string()),
            "[a-zA-Z_0-9=+();.-]{1,4}",
            any::<char>().prop_map(String::from),
        ],
        0..64,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn tokenize_handles_lossy_utf8_inputs_without_panicking(
        bytes in proptest::collection::vec(any::<u8>(), 0..=MAX_INPUT_BYTES)
    ) {
        let input = String::from_utf8_lossy(&bytes).into_owned();
        let tokens = tokenize(&input);
        prop_assert!(tokens.len() <= input.chars().count());
    }

    #[test]
    fn spans_reconstruct_the_source(source in script_source()) {
        let tokens = tokenize(&source);
        let mut cursor = 0usize;

        for token in &tokens {
            let range = token.span.range();
            prop_assert!(range.start >= cursor);
            prop_assert!(source[cursor..range.start].chars().all(char::is_whitespace));

            let text = &source[range.clone()];
            if token.kind == TokenKind::String {
                let body = text.strip_prefix('"').unwrap();
                let body = body.strip_suffix('"').unwrap_or(body);
                prop_assert_eq!(body, token.lexeme.as_str());
            } else {
                prop_assert_eq!(text, token.lexeme.as_str());
                prop_assert!(!text.chars().any(char::is_whitespace));
            }
            cursor = range.end;
        }

        prop_assert!(source[cursor..].chars().all(char::is_whitespace));
    }

    #[test]
    fn lines_never_decrease_and_count_only_newlines(source in script_source()) {
        let tokens = tokenize(&source);
        let mut previous = 1u32;

        for token in &tokens {
            prop_assert!(token.line >= previous);
            prop_assert!(token.span.start.line <= token.line);

            let consumed = &source[..token.span.end.offset as usize];
            let expected = 1 + consumed.matches('\n').count() as u32;
            prop_assert_eq!(token.line, expected);
            previous = token.line;
        }
    }

    #[test]
    fn strict_mode_only_adds_diagnostics(source in script_source()) {
        let (lenient, quiet) = Lexer::new(&source, "p.mig").tokenize();
        let (strict, diags) = Lexer::new(&source, "p.mig").strict(true).tokenize();
        prop_assert!(quiet.diagnostics().is_empty());
        prop_assert_eq!(&lenient, &strict);
        prop_assert!(diags.diagnostics().len() <= 1);
    }

    #[test]
    fn only_the_five_live_kinds_are_produced(source in script_source()) {
        for token in tokenize(&source) {
            prop_assert!(matches!(
                token.kind,
                TokenKind::Identifier
                    | TokenKind::Number
                    | TokenKind::String
                    | TokenKind::Keyword
                    | TokenKind::Symbol
            ));
        }
    }
}
