use crate::{
    ast::ast::{Statement, StatementKind},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    expr::{expect_value, parse_expr},
    lookups::KEYWORD_LOOKUP,
    parser::{Notice, Outcome, Parser, Unsupported},
};

/// Parses one top-level statement: a variable declaration, a keyword
/// construct, or an expression followed by `;`, tried in that order.
pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    match parse_var_decl_stmt(parser)? {
        Outcome::Matched(stmt) => return Ok(stmt),
        Outcome::Unsupported(unsupported) => return Err(unsupported.into_error()),
        Outcome::NoMatch => {}
    }

    match parse_keyword_stmt(parser) {
        Outcome::Matched(stmt) => return Ok(stmt),
        Outcome::Unsupported(unsupported) => return Err(unsupported.into_error()),
        Outcome::NoMatch => {}
    }

    match parse_expr(parser)? {
        Outcome::Matched(expr) => {
            parser.expect_semicolon()?;
            Ok(expr)
        }
        Outcome::Unsupported(unsupported) => Err(unsupported.into_error()),
        Outcome::NoMatch => Err(parser.error_here(|found| ErrorImpl::ExpectedValue { found })),
    }
}

/// `<type> <identifier> ( = <value> )? ;`
///
/// Does not match, and consumes nothing, unless the first token names a
/// registered type.
pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Outcome<Statement>, Error> {
    let start = parser.checkpoint();

    if parser.current_token_kind() != TokenKind::Identifier {
        return Ok(Outcome::NoMatch);
    }

    let type_token = parser.advance().clone();
    let Some(ty) = parser.lookup_type(type_token.text()).cloned() else {
        parser.restore(start);
        return Ok(Outcome::NoMatch);
    };

    if KEYWORD_LOOKUP.contains(parser.current_token().text()) {
        return Err(parser.error_here(|found| ErrorImpl::ExpectedIdentifier { found }));
    }

    let name_token = parser.expect_error(TokenKind::Identifier, |found| {
        ErrorImpl::ExpectedIdentifier { found }
    })?;

    let mut stmt = Statement::new(
        StatementKind::VariableDeclaration,
        name_token.text(),
        ty,
        name_token.span.clone(),
    );

    if parser.current_token_kind() == TokenKind::Equals {
        parser.advance();
        let value = expect_value(parser)?;
        parser.expect_semicolon()?;

        stmt.params.push(value);
    } else {
        parser.expect_semicolon()?;
        parser.notice(Notice::MissingInitializer {
            name: stmt.name.clone(),
            span: stmt.span.clone(),
        });
    }

    parser.declare(stmt.clone())?;

    Ok(Outcome::Matched(stmt))
}

/// Reserved for `if`/`else`. Reports them as unsupported and never consumes tokens.
pub fn parse_keyword_stmt(parser: &mut Parser) -> Outcome<Statement> {
    let token = parser.current_token();

    if token.kind == TokenKind::Identifier && KEYWORD_LOOKUP.contains(token.text()) {
        let feature = format!("`{}` statement", token.text());
        return Outcome::Unsupported(Unsupported::new(&feature, token.span.clone()));
    }

    Outcome::NoMatch
}
