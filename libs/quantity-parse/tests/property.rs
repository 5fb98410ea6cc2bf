//! Property-based tests using QuickCheck

use quickcheck::{QuickCheck, TestResult};

use mensura_parse::{Parser, TokenKind, Tokenizer, UnitTrie};
use mensura_units::{default_prefixes, default_units};

/// Property: any formatted finite f64 lexes to exactly one Number token
/// followed by Eof.
#[test]
fn prop_formatted_float_is_one_number_token() {
    fn prop(value: f64) -> TestResult {
        if !value.is_finite() {
            return TestResult::discard();
        }
        let text = format!("{value}");
        let mut tokenizer = Tokenizer::new();
        let tokens = match tokenizer.tokenize(&text) {
            Ok(tokens) => tokens,
            Err(e) => return TestResult::error(format!("{text}: {e}")),
        };
        if tokens.len() != 2 {
            return TestResult::error(format!("{text}: {} tokens", tokens.len()));
        }
        TestResult::from_bool(
            tokens[0].kind == TokenKind::Number && tokens[1].kind == TokenKind::Eof,
        )
    }

    QuickCheck::new()
        .tests(1000)
        .quickcheck(prop as fn(f64) -> TestResult);
}

/// Property: the lenient tokenizer accepts arbitrary input without
/// panicking, and the token stream always ends in Eof.
#[test]
fn prop_lenient_tokenizer_total() {
    fn prop(s: String) -> bool {
        let mut tokenizer = Tokenizer::new();
        match tokenizer.tokenize(&s) {
            Ok(tokens) => tokens.last().map(|t| t.kind) == Some(TokenKind::Eof),
            // Lenient mode never errors on characters, only Eof exists.
            Err(_) => true,
        }
    }

    QuickCheck::new().tests(500).quickcheck(prop as fn(String) -> bool);
}

/// Property: parsing never panics on arbitrary input, and a successful
/// parse is stable across repeated calls on the same parser.
#[test]
fn prop_parse_is_total_and_repeatable() {
    fn prop(s: String) -> bool {
        let trie = UnitTrie::new(default_units(), default_prefixes());
        let mut parser = Parser::new(&trie);
        match parser.parse_owned(&s) {
            Ok(first) => parser.parse_owned(&s) == Ok(first),
            Err(_) => true,
        }
    }

    QuickCheck::new().tests(500).quickcheck(prop as fn(String) -> bool);
}
