//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Identifiers and number literals
//! - String literals
//! - Operators and punctuation
//! - End-of-input handling
//! - Error cases

use crate::errors::errors::ErrorImpl;

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar Baz123 CamelCase").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].text(), "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].text(), "bar");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].text(), "Baz123");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].text(), "CamelCase");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 0 1234567890").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::NumberLiteral);
    assert_eq!(tokens[0].number, 42);
    assert_eq!(tokens[0].text(), "42");
    assert_eq!(tokens[1].number, 0);
    assert_eq!(tokens[2].number, 1_234_567_890);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_number_stops_at_first_non_digit() {
    let mut lexer = Lexer::new("123abc");

    let token = lexer.next_token().unwrap().unwrap();
    assert_eq!(token.kind, TokenKind::NumberLiteral);
    assert_eq!(token.number, 123);
    assert_eq!(token.span.start, 0);
    assert_eq!(token.span.end, 3);
    assert_eq!(lexer.position(), 3);

    let token = lexer.next_token().unwrap().unwrap();
    assert_eq!(token.kind, TokenKind::Identifier);
    assert_eq!(token.text(), "abc");
}

#[test]
fn test_digit_runs_fold_to_base_ten() {
    for run in ["7", "10", "007", "65535", "18446744073709551615"] {
        let mut lexer = Lexer::new(run);
        let token = lexer.next_token().unwrap().unwrap();

        assert_eq!(token.number, run.parse::<u64>().unwrap());
        assert_eq!(lexer.position(), run.len());
    }
}

#[test]
fn test_number_overflow_is_an_error() {
    let error = tokenize("int x = 18446744073709551616;").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::NumberParseError {
            token: "18446744073709551616".to_string()
        }
    );
    assert_eq!(error.get_span().start, 8);
    assert_eq!(error.get_span().end, 28);
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" "multiple words" """#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].text(), "\"hello\"");
    assert_eq!(tokens[1].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[1].text(), "\"multiple words\"");
    assert_eq!(tokens[2].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[2].text(), "\"\"");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_string_may_contain_anything_but_a_quote() {
    let tokens = tokenize("\"a+b;\n\t@ é\"").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].span.start, 0);
    assert_eq!(tokens[0].span.end, "\"a+b;\n\t@ é\"".len());
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_unterminated_string() {
    let error = tokenize("str s = \"abc;").unwrap_err();

    assert_eq!(error.get_kind(), &ErrorImpl::UnterminatedString);
    assert_eq!(error.get_span().start, 8);
    assert_eq!(error.get_span().text, "\"abc;");
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("+ - * / : ; = { } ( ) < >").unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::ForwardSlash,
            TokenKind::Colon,
            TokenKind::SemiColon,
            TokenKind::Equals,
            TokenKind::LeftBracket,
            TokenKind::RightBracket,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::LeftAngleBracket,
            TokenKind::RightAngleBracket,
            TokenKind::EOF,
        ]
    );
    assert!(tokens[..13].iter().all(|token| token.is_operator()));
    assert!(!tokens[13].is_operator());
}

#[test]
fn test_operators_need_no_whitespace() {
    let tokens = tokenize("a=b+1;").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Equals);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].kind, TokenKind::Plus);
    assert_eq!(tokens[4].kind, TokenKind::NumberLiteral);
    assert_eq!(tokens[5].kind, TokenKind::SemiColon);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_simple_program() {
    let tokens = tokenize("int x = 42;").unwrap();

    assert_eq!(tokens.len(), 6); // int, x, =, 42, ;, EOF
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].text(), "int");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].text(), "x");
    assert_eq!(tokens[2].kind, TokenKind::Equals);
    assert_eq!(tokens[3].kind, TokenKind::NumberLiteral);
    assert_eq!(tokens[3].number, 42);
    assert_eq!(tokens[4].kind, TokenKind::SemiColon);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_token_spans() {
    let source = "str name = \"jo\";";
    let tokens = tokenize(source).unwrap();

    for token in &tokens[..tokens.len() - 1] {
        assert_eq!(token.text(), &source[token.span.start..token.span.end]);
    }
    assert_eq!(tokens[3].span.start, 11);
    assert_eq!(tokens[3].span.end, 15);
}

#[test]
fn test_whitespace_only_source_yields_one_eof() {
    for source in ["", " ", "\n", "  \n \n  "] {
        let mut lexer = Lexer::new(source);

        let token = lexer.next_token().unwrap().unwrap();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.span.text, "");
        assert!(token.span.is_synthetic());

        assert!(lexer.next_token().unwrap().is_none());
        assert!(lexer.next_token().unwrap().is_none());
    }
}

#[test]
fn test_tokenize_newlines() {
    let tokens = tokenize("int x\nint y\n").unwrap();

    assert_eq!(tokens[0].text(), "int");
    assert_eq!(tokens[1].text(), "x");
    assert_eq!(tokens[2].text(), "int");
    assert_eq!(tokens[3].text(), "y");
    assert_eq!(tokens[2].span.start, 6);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unrecognized_character() {
    let error = tokenize("int x = @;").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnrecognizedCharacter { character: '@' }
    );
    assert_eq!(error.get_span().start, 8);
    assert_eq!(error.get_span().end, 9);
}

#[test]
fn test_underscore_is_not_an_identifier_character() {
    let error = tokenize("my_var").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnrecognizedCharacter { character: '_' }
    );
    assert_eq!(error.get_span().start, 2);
}

#[test]
fn test_tabs_are_not_whitespace() {
    let error = tokenize("\tint").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnrecognizedCharacter { character: '\t' }
    );
}

#[test]
fn test_lexer_moves_past_unrecognized_character() {
    let mut lexer = Lexer::new("@@x");

    assert!(lexer.next_token().is_err());
    assert!(lexer.next_token().is_err());

    let token = lexer.next_token().unwrap().unwrap();
    assert_eq!(token.kind, TokenKind::Identifier);
    assert_eq!(token.text(), "x");
}

#[test]
fn test_lexer_iterator_ends_after_eof() {
    let kinds: Vec<TokenKind> = Lexer::new("a ;")
        .map(|token| token.unwrap().kind)
        .collect();

    assert_eq!(
        kinds,
        vec![TokenKind::Identifier, TokenKind::SemiColon, TokenKind::EOF]
    );
}
