use crate::{
    errors::errors::{Error, ErrorImpl},
    TextSpan, MK_SPAN, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, OPERATOR_LOOKUP};

/// Character-at-a-time scanner producing one token per `next_token` call.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
        }
    }

    pub fn at(&self) -> Option<char> {
        self.source.get(self.pos..)?.chars().next()
    }

    /// Byte offset of the cursor. One past the source length once `EOF` has been returned.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    fn consume(&mut self) -> Option<char> {
        let c = self.at()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.at(), Some(' ') | Some('\n')) {
            self.pos += 1;
        }
    }

    /// Returns the next token.
    ///
    /// At the end of the source a single `EOF` token is returned; every call
    /// after that returns `Ok(None)`.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        self.skip_whitespace();

        if self.pos > self.source.len() {
            return Ok(None);
        }

        if self.pos == self.source.len() {
            self.pos += 1;
            return Ok(Some(MK_TOKEN!(TokenKind::EOF, TextSpan::null())));
        }

        let start = self.pos;
        let Some(c) = self.at() else {
            return Ok(None);
        };

        if c.is_ascii_digit() {
            let number = lex_number(self, start)?;
            return Ok(Some(MK_TOKEN!(
                TokenKind::NumberLiteral,
                MK_SPAN!(self, start),
                number
            )));
        }

        if let Some(kind) = OPERATOR_LOOKUP.get(&c) {
            self.consume();

            let kind = if *kind == TokenKind::DoubleQuote {
                lex_string(self, start)?
            } else {
                *kind
            };

            return Ok(Some(MK_TOKEN!(kind, MK_SPAN!(self, start))));
        }

        let kind = lex_identifier(self, start)?;
        Ok(Some(MK_TOKEN!(kind, MK_SPAN!(self, start))))
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

/// Folds a run of decimal digits into its value, leaving the cursor after the run.
fn lex_number(lexer: &mut Lexer, start: usize) -> Result<u64, Error> {
    let mut value: Option<u64> = Some(0);

    while let Some(digit) = lexer.at().and_then(|c| c.to_digit(10)) {
        lexer.consume();
        value = value
            .and_then(|v| v.checked_mul(10))
            .and_then(|v| v.checked_add(u64::from(digit)));
    }

    value.ok_or_else(|| {
        let span = MK_SPAN!(lexer, start);
        Error::new(
            ErrorImpl::NumberParseError {
                token: span.text.clone(),
            },
            span,
        )
    })
}

/// Scans the body of a string literal whose opening quote is already consumed.
fn lex_string(lexer: &mut Lexer, start: usize) -> Result<TokenKind, Error> {
    while let Some(c) = lexer.consume() {
        if c == '"' {
            return Ok(TokenKind::StringLiteral);
        }
    }

    Err(Error::new(
        ErrorImpl::UnterminatedString,
        MK_SPAN!(lexer, start),
    ))
}

fn lex_identifier(lexer: &mut Lexer, start: usize) -> Result<TokenKind, Error> {
    // The offending character is consumed so a caller that keeps going cannot spin on it
    let first = lexer.consume().unwrap_or_default();
    if !first.is_ascii_alphanumeric() {
        return Err(Error::new(
            ErrorImpl::UnrecognizedCharacter { character: first },
            MK_SPAN!(lexer, start),
        ));
    }

    while lexer.at().is_some_and(|c| c.is_ascii_alphanumeric()) {
        lexer.consume();
    }

    Ok(TokenKind::Identifier)
}

/// Tokenizes the whole source, ending with exactly one `EOF` token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    Lexer::new(source).collect()
}
