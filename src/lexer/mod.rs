//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Character-by-character scanning with one character of lookahead
//! - Recognition of number literals, string literals and identifiers
//! - Single-character operators and punctuation
//! - Token spans for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
