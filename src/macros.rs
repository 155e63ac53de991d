//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a TextSpan over the lexer's source
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// The two-argument form is for every kind except number literals, whose
/// numeric payload is zero.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::NumberLiteral, span, 42);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $span:expr) => {
        Token {
            kind: $kind,
            span: $span,
            number: 0,
        }
    };
    ($kind:expr, $span:expr, $number:expr) => {
        Token {
            kind: $kind,
            span: $span,
            number: $number,
        }
    };
}

/// Creates a TextSpan from `$start` up to the lexer's current position.
///
/// # Example
///
/// ```ignore
/// let span = MK_SPAN!(lexer, start);
/// ```
#[macro_export]
macro_rules! MK_SPAN {
    ($lexer:expr, $start:expr) => {
        TextSpan::new($start, $lexer.pos, &$lexer.source)
    };
}
