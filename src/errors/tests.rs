//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::{render_error, TextSpan};

fn span_at(start: usize, end: usize, source: &str) -> TextSpan {
    TextSpan::new(start, end, source)
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognizedCharacter { character: '@' },
        span_at(4, 5, "int @"),
    );

    assert_eq!(error.get_error_name(), "UnrecognizedCharacter");
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnrecognizedCharacter { character: '@' }
    );
}

#[test]
fn test_error_span() {
    let error = Error::new(
        ErrorImpl::UndefinedSymbol {
            name: "z".to_string(),
        },
        span_at(8, 9, "int y = z;"),
    );

    assert_eq!(error.get_span().start, 8);
    assert_eq!(error.get_span().text, "z");
}

#[test]
fn test_error_names_cover_parse_failures() {
    let cases = [
        (
            ErrorImpl::ExpectedIdentifier {
                found: "`;`".to_string(),
            },
            "ExpectedIdentifier",
        ),
        (
            ErrorImpl::ExpectedValue {
                found: "`;`".to_string(),
            },
            "ExpectedValue",
        ),
        (
            ErrorImpl::ExpectedSemicolon {
                found: "end of input".to_string(),
            },
            "ExpectedSemicolon",
        ),
        (ErrorImpl::UnterminatedString, "UnterminatedString"),
        (
            ErrorImpl::SymbolAlreadyDeclared {
                name: "a".to_string(),
            },
            "SymbolAlreadyDeclared",
        ),
        (
            ErrorImpl::NotImplemented {
                feature: "function call".to_string(),
            },
            "NotImplemented",
        ),
        (ErrorImpl::NestingTooDeep { limit: 128 }, "NestingTooDeep"),
    ];

    for (kind, name) in cases {
        let error = Error::new(kind, TextSpan::null());
        assert_eq!(error.get_error_name(), name);
    }
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognizedCharacter { character: '@' },
        TextSpan::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::ExpectedSemicolon {
            found: "`}`".to_string(),
        },
        TextSpan::null(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "expected `;`, found `}`"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display_includes_span() {
    let error = Error::new(
        ErrorImpl::UndefinedSymbol {
            name: "z".to_string(),
        },
        span_at(8, 9, "int y = z;"),
    );

    assert_eq!(error.to_string(), "symbol \"z\" is not declared at 8..9");
}

#[test]
fn test_render_error_points_at_span() {
    let source = "int a = 1;\n  int y = z;\n";
    let error = Error::new(
        ErrorImpl::UndefinedSymbol {
            name: "z".to_string(),
        },
        span_at(21, 22, source),
    );

    let rendered = render_error(&error, source, "main.jsam");
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(
        lines[0],
        "Error: UndefinedSymbol (`z` is used before it is declared)"
    );
    assert_eq!(lines[1], "-> main.jsam");
    assert_eq!(lines[3], "2 | int y = z;");
    assert_eq!(lines[4], "  | --------^");
}

#[test]
fn test_render_error_at_end_of_input() {
    let source = "int x = 5\n";
    let error = Error::new(
        ErrorImpl::ExpectedSemicolon {
            found: "end of input".to_string(),
        },
        TextSpan::null(),
    );

    let rendered = render_error(&error, source, "main.jsam");
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[3], "1 | int x = 5");
    assert_eq!(lines[4], "  | ---------^");
}

#[test]
fn test_render_error_counts_characters_not_bytes() {
    let source = "str s = \"é\"; int y = z;\n";
    let start = source.find('z').unwrap();
    let error = Error::new(
        ErrorImpl::UndefinedSymbol {
            name: "z".to_string(),
        },
        span_at(start, start + 1, source),
    );

    let rendered = render_error(&error, source, "main.jsam");
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[3], "1 | str s = \"é\"; int y = z;");
    assert_eq!(lines[4], "  | ---------------------^");
}
