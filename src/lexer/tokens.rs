use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::TextSpan;

lazy_static! {
    pub static ref OPERATOR_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('+', TokenKind::Plus);
        map.insert('-', TokenKind::Minus);
        map.insert('*', TokenKind::Asterisk);
        map.insert('/', TokenKind::ForwardSlash);
        map.insert(':', TokenKind::Colon);
        map.insert(';', TokenKind::SemiColon);
        map.insert('=', TokenKind::Equals);
        map.insert('{', TokenKind::LeftBracket);
        map.insert('}', TokenKind::RightBracket);
        map.insert('(', TokenKind::LeftBrace);
        map.insert(')', TokenKind::RightBrace);
        map.insert('<', TokenKind::LeftAngleBracket);
        map.insert('>', TokenKind::RightAngleBracket);
        map.insert('"', TokenKind::DoubleQuote);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    NumberLiteral,
    StringLiteral,
    Identifier,

    Colon,
    SemiColon,
    Equals,

    LeftBracket,  // {
    RightBracket, // }
    LeftBrace,    // (
    RightBrace,   // )
    LeftAngleBracket,
    RightAngleBracket,

    Plus,
    Minus,
    Asterisk,
    ForwardSlash,

    // Only seen inside the lexer, before a string literal is scanned
    DoubleQuote,
}

impl TokenKind {
    pub fn is_operator(&self) -> bool {
        !matches!(
            self,
            TokenKind::EOF
                | TokenKind::NumberLiteral
                | TokenKind::StringLiteral
                | TokenKind::Identifier
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: TextSpan,
    pub number: u64,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EOF => write!(f, "end of input"),
            _ => write!(f, "`{}`", self.span.text),
        }
    }
}

impl Token {
    pub fn is_operator(&self) -> bool {
        self.kind.is_operator()
    }

    pub fn text(&self) -> &str {
        &self.span.text
    }

    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn debug(&self) {
        if self.is_one_of_many(&[
            TokenKind::StringLiteral,
            TokenKind::Identifier,
            TokenKind::NumberLiteral,
        ]) {
            println!("{} ({})", self.kind, self.span.text);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
