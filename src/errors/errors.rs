use std::fmt::Display;

use thiserror::Error;

use crate::TextSpan;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at {}..{}", .span.start, .span.end)]
pub struct Error {
    internal_error: ErrorImpl,
    span: TextSpan,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: TextSpan) -> Self {
        Error {
            internal_error: error_impl,
            span,
        }
    }

    pub fn get_span(&self) -> &TextSpan {
        &self.span
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ExpectedIdentifier { .. } => "ExpectedIdentifier",
            ErrorImpl::ExpectedValue { .. } => "ExpectedValue",
            ErrorImpl::ExpectedSemicolon { .. } => "ExpectedSemicolon",
            ErrorImpl::UndefinedSymbol { .. } => "UndefinedSymbol",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnrecognizedCharacter { .. } => "UnrecognizedCharacter",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::SymbolAlreadyDeclared { .. } => "SymbolAlreadyDeclared",
            ErrorImpl::NotImplemented { .. } => "NotImplemented",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::ExpectedIdentifier { found } => ErrorTip::Suggestion(format!(
                "expected a variable name after the type, found {}",
                found
            )),
            ErrorImpl::ExpectedValue { found } => {
                ErrorTip::Suggestion(format!("expected a value, found {}", found))
            }
            ErrorImpl::ExpectedSemicolon { found } => {
                ErrorTip::Suggestion(format!("expected `;`, found {}", found))
            }
            ErrorImpl::UndefinedSymbol { name } => ErrorTip::Suggestion(format!(
                "`{}` is used before it is declared",
                name
            )),
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("add a closing `\"` to the string"))
            }
            ErrorImpl::UnrecognizedCharacter { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::SymbolAlreadyDeclared { name } => {
                ErrorTip::Suggestion(format!("Variable `{}` already declared", name))
            }
            ErrorImpl::NotImplemented { feature } => ErrorTip::Suggestion(format!(
                "{} is reserved by the language but not supported yet",
                feature
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "expressions can nest at most {} levels deep, split this one up",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// `found` fields hold a printable description of the offending token,
/// e.g. `` `}` `` or `end of input`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("expected identifier, found {found}")]
    ExpectedIdentifier { found: String },
    #[error("expected value, found {found}")]
    ExpectedValue { found: String },
    #[error("expected `;`, found {found}")]
    ExpectedSemicolon { found: String },
    #[error("symbol {name:?} is not declared")]
    UndefinedSymbol { name: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unrecognized character {character:?}")]
    UnrecognizedCharacter { character: char },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("symbol {name:?} already declared")]
    SymbolAlreadyDeclared { name: String },
    #[error("{feature} is not implemented")]
    NotImplemented { feature: String },
    #[error("expression nested more than {limit} levels deep")]
    NestingTooDeep { limit: usize },
}
