//! Error types and error handling for the front end.
//!
//! This module defines the error types used by the tokenizer and the
//! parser. It includes:
//!
//! - Error structures carrying the offending source span
//! - Specific error variants for scanning and parsing failures
//! - Error names and suggestions for the driver's report

pub mod errors;

#[cfg(test)]
mod tests;
