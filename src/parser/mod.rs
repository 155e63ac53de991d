//! Parser module for building the statement tree.
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into a sequence of typed statement nodes. It handles:
//!
//! - Variable declarations against the table of known types
//! - Values and binary expressions with precedence climbing
//! - Assignment to previously declared names
//! - Symbol table bookkeeping
//!
//! Constructs the language reserves but does not support yet (keyword
//! statements, function calls) are reported as unsupported rather than
//! treated as a grammar mismatch.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod symbols;
