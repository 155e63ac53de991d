//! Parser implementation for building the statement tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! The parser walks a token vector with a single token of lookahead and
//! rewinds through explicit checkpoints when a trial parse does not match.
//!
//! It maintains tables for:
//! - Binary operators and their priorities
//! - Known type names
//! - Declared symbols

use std::fmt::Display;

use crate::{
    ast::{ast::Statement, types::Type},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    TextSpan, MK_TOKEN,
};

use super::{
    lookups::{
        create_operator_lookups, create_type_lookups, OperatorEntry, OperatorLookup, TypeLookup,
    },
    stmt::parse_stmt,
    symbols::{RedeclarationPolicy, SymbolTable},
};

/// How many groupings or chained assignments may nest inside one another.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parser settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserConfig {
    pub redeclaration: RedeclarationPolicy,
}

/// Result of trying one grammar alternative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Matched(T),
    /// The alternative does not apply here; no tokens were consumed.
    NoMatch,
    /// The input is a construct the language reserves but the parser does not handle yet.
    Unsupported(Unsupported),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unsupported {
    pub feature: String,
    pub span: TextSpan,
}

impl Unsupported {
    pub fn new(feature: &str, span: TextSpan) -> Self {
        Unsupported {
            feature: feature.to_string(),
            span,
        }
    }

    pub fn into_error(self) -> Error {
        Error::new(
            ErrorImpl::NotImplemented {
                feature: self.feature,
            },
            self.span,
        )
    }
}

/// Informational, non-fatal findings collected during a parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    MissingInitializer { name: String, span: TextSpan },
    Redeclared { name: String, span: TextSpan },
}

impl Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::MissingInitializer { name, .. } => {
                write!(f, "`{}` declared without initializer", name)
            }
            Notice::Redeclared { name, .. } => {
                write!(f, "`{}` redeclared, previous declaration replaced", name)
            }
        }
    }
}

/// A saved cursor position to rewind a trial parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// The main parser structure that maintains parsing state.
///
/// One instance owns its cursor and tables outright, so separate instances
/// never share state.
pub struct Parser {
    /// The list of tokens to parse, always ending with `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Binary operators by token kind
    operators: OperatorLookup,
    /// Known types by name
    types: TypeLookup,
    /// Declared names
    symbols: SymbolTable,
    /// Informational findings, in source order
    notices: Vec<Notice>,
    /// Current grouping/assignment nesting
    depth: usize,
    config: ParserConfig,
}

impl Parser {
    /// Creates a new Parser instance with its operator and type tables registered.
    ///
    /// A trailing `EOF` token is appended if `tokens` lacks one.
    pub fn new(mut tokens: Vec<Token>, config: ParserConfig) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            tokens.push(MK_TOKEN!(TokenKind::EOF, TextSpan::null()));
        }

        let mut parser = Parser {
            tokens,
            pos: 0,
            operators: OperatorLookup::new(),
            types: TypeLookup::new(),
            symbols: SymbolTable::new(),
            notices: vec![],
            depth: 0,
            config,
        };
        create_operator_lookups(&mut parser);
        create_type_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the kind of the token after the current one.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(TokenKind::EOF, |token| token.kind)
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The cursor never moves past the final `EOF`.
    pub fn advance(&mut self) -> &Token {
        let current = self.pos;
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[current]
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.pos)
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.0;
    }

    /// Builds an error located at the current token.
    ///
    /// `make` receives a printable description of the token.
    pub fn error_here(&self, make: impl FnOnce(String) -> ErrorImpl) -> Error {
        let token = self.current_token();
        Error::new(make(token.to_string()), token.span.clone())
    }

    /// Expects a token of the specified kind, failing with the error `make` builds.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        make: impl FnOnce(String) -> ErrorImpl,
    ) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(self.error_here(make));
        }

        Ok(self.advance().clone())
    }

    pub fn expect_semicolon(&mut self) -> Result<Token, Error> {
        self.expect_error(TokenKind::SemiColon, |found| {
            ErrorImpl::ExpectedSemicolon { found }
        })
    }

    /// Runs `parse_fn` one nesting level deeper.
    ///
    /// Fails with `NestingTooDeep` at the current token instead of recursing
    /// past `MAX_NESTING_DEPTH`.
    pub fn nested<T>(
        &mut self,
        parse_fn: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error_here(|_| ErrorImpl::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            }));
        }

        self.depth += 1;
        let result = parse_fn(self);
        self.depth -= 1;

        result
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Registers a binary operator.
    pub fn operator(&mut self, kind: TokenKind, symbol: &'static str, priority: u8) {
        self.operators.insert(
            kind,
            OperatorEntry {
                kind,
                symbol,
                priority,
            },
        );
    }

    /// Returns the operator entry for the current token, if it is a binary operator.
    pub fn current_operator(&self) -> Option<OperatorEntry> {
        self.operators.get(&self.current_token_kind()).copied()
    }

    pub fn register_type(&mut self, ty: Type) {
        self.types.insert(ty.name.clone(), ty);
    }

    pub fn lookup_type(&self, name: &str) -> Option<&Type> {
        self.types.get(name)
    }

    pub fn lookup_symbol(&self, name: &str) -> Option<&Statement> {
        self.symbols.get(name)
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Adds a fully parsed declaration to the symbol table, applying the
    /// configured redeclaration policy.
    pub fn declare(&mut self, declaration: Statement) -> Result<(), Error> {
        if self.symbols.contains(&declaration.name) {
            match self.config.redeclaration {
                RedeclarationPolicy::Reject => {
                    return Err(Error::new(
                        ErrorImpl::SymbolAlreadyDeclared {
                            name: declaration.name.clone(),
                        },
                        declaration.span.clone(),
                    ));
                }
                RedeclarationPolicy::Overwrite => self.notice(Notice::Redeclared {
                    name: declaration.name.clone(),
                    span: declaration.span.clone(),
                }),
            }
        }

        self.symbols.insert(declaration);
        Ok(())
    }

    /// Parses top-level statements until `EOF`. The first error aborts the parse.
    pub fn parse(&mut self) -> Result<Vec<Statement>, Error> {
        let mut body = vec![];

        while self.has_tokens() {
            body.push(parse_stmt(self)?);
        }

        Ok(body)
    }
}

/// Parses a stream of tokens into the statement tree.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (with its symbol table and notices after parsing)
/// - Result containing either the top-level statements or the first Error
pub fn parse(tokens: Vec<Token>, config: ParserConfig) -> (Parser, Result<Vec<Statement>, Error>) {
    let mut parser = Parser::new(tokens, config);
    let result = parser.parse();

    (parser, result)
}

/// Everything a successful parse of one source unit produces.
#[derive(Debug, Clone)]
pub struct ParseOutput {
    pub statements: Vec<Statement>,
    pub notices: Vec<Notice>,
    pub symbols: SymbolTable,
}

/// Tokenizes and parses `source` in one go.
pub fn parse_source(source: &str, config: ParserConfig) -> Result<ParseOutput, Error> {
    let tokens = tokenize(source)?;
    let (parser, result) = parse(tokens, config);
    let statements = result?;

    Ok(ParseOutput {
        statements,
        notices: parser.notices,
        symbols: parser.symbols,
    })
}
