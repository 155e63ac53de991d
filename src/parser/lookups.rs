use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

use crate::{ast::types::Type, lexer::tokens::TokenKind};

use super::parser::Parser;

lazy_static! {
    /// Words reserved for statements the parser does not support yet.
    pub static ref KEYWORD_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("if");
        set.insert("else");
        set
    };
}

/// A binary operator and how tightly it binds. Higher binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorEntry {
    pub kind: TokenKind,
    pub symbol: &'static str,
    pub priority: u8,
}

pub const ASSIGNMENT_PRIORITY: u8 = 1;
pub const ADDITIVE_PRIORITY: u8 = 10;
pub const MULTIPLICATIVE_PRIORITY: u8 = 20;

pub fn create_operator_lookups(parser: &mut Parser) {
    parser.operator(TokenKind::Equals, "=", ASSIGNMENT_PRIORITY);

    // Additive and multiplicative
    parser.operator(TokenKind::Plus, "+", ADDITIVE_PRIORITY);
    parser.operator(TokenKind::Minus, "-", ADDITIVE_PRIORITY);
    parser.operator(TokenKind::Asterisk, "*", MULTIPLICATIVE_PRIORITY);
    parser.operator(TokenKind::ForwardSlash, "/", MULTIPLICATIVE_PRIORITY);
}

pub fn create_type_lookups(parser: &mut Parser) {
    parser.register_type(Type::int());
    parser.register_type(Type::string());
}

// Lookup tables inside parser struct, so each parser owns its own
pub type OperatorLookup = HashMap<TokenKind, OperatorEntry>;
pub type TypeLookup = HashMap<String, Type>;
