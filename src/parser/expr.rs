use crate::{
    ast::{
        ast::{Statement, StatementKind},
        types::Type,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::{Outcome, Parser, Unsupported};

/// Parses a value followed by any chain of binary operators.
pub fn parse_expr(parser: &mut Parser) -> Result<Outcome<Statement>, Error> {
    let left = match parse_value(parser)? {
        Outcome::Matched(value) => value,
        other => return Ok(other),
    };

    Ok(Outcome::Matched(parse_binary_expr(parser, left, 0)?))
}

/// Like `parse_expr`, for positions where an expression is mandatory.
pub fn expect_expr(parser: &mut Parser) -> Result<Statement, Error> {
    required(parser, parse_expr)
}

/// Like `parse_value`, for positions where a value is mandatory.
pub fn expect_value(parser: &mut Parser) -> Result<Statement, Error> {
    required(parser, parse_value)
}

fn required(
    parser: &mut Parser,
    parse_fn: fn(&mut Parser) -> Result<Outcome<Statement>, Error>,
) -> Result<Statement, Error> {
    match parse_fn(parser)? {
        Outcome::Matched(stmt) => Ok(stmt),
        Outcome::Unsupported(unsupported) => Err(unsupported.into_error()),
        Outcome::NoMatch => Err(parser.error_here(|found| ErrorImpl::ExpectedValue { found })),
    }
}

/// Parses a single operand: a literal, a declared identifier, or a `(`-led nested expression.
pub fn parse_value(parser: &mut Parser) -> Result<Outcome<Statement>, Error> {
    match parser.current_token_kind() {
        TokenKind::NumberLiteral => {
            let token = parser.advance().clone();
            Ok(Outcome::Matched(Statement::new(
                StatementKind::Literal,
                token.text(),
                Type::int(),
                token.span.clone(),
            )))
        }
        TokenKind::StringLiteral => {
            let token = parser.advance().clone();
            Ok(Outcome::Matched(Statement::new(
                StatementKind::Literal,
                token.text(),
                Type::string(),
                token.span.clone(),
            )))
        }
        TokenKind::Identifier => parse_symbol_expr(parser),
        TokenKind::LeftBrace => parse_grouping_expr(parser),
        _ => Ok(Outcome::NoMatch),
    }
}

pub fn parse_symbol_expr(parser: &mut Parser) -> Result<Outcome<Statement>, Error> {
    let start = parser.checkpoint();
    let token = parser.advance().clone();

    if parser.current_token_kind() == TokenKind::LeftBrace {
        parser.restore(start);
        return Ok(parse_call_expr(parser));
    }

    let Some(declaration) = parser.lookup_symbol(token.text()) else {
        return Err(Error::new(
            ErrorImpl::UndefinedSymbol {
                name: token.text().to_string(),
            },
            token.span.clone(),
        ));
    };

    Ok(Outcome::Matched(Statement::new(
        StatementKind::IdentifierExpression,
        token.text(),
        declaration.ty.clone(),
        token.span.clone(),
    )))
}

/// `<identifier> (` is reserved for function calls, which have no argument
/// grammar yet. Reports the call as unsupported without consuming it.
pub fn parse_call_expr(parser: &mut Parser) -> Outcome<Statement> {
    if parser.current_token_kind() == TokenKind::Identifier
        && parser.peek_token_kind() == TokenKind::LeftBrace
    {
        return Outcome::Unsupported(Unsupported::new(
            "function call",
            parser.current_token().span.clone(),
        ));
    }

    Outcome::NoMatch
}

/// `(` followed by an expression. A closing `)` is consumed when present but
/// not required.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Outcome<Statement>, Error> {
    parser.advance();

    let inner = parser.nested(parse_expr)?;
    if let Outcome::Matched(_) = inner {
        if parser.current_token_kind() == TokenKind::RightBrace {
            parser.advance();
        }
    }

    match inner {
        Outcome::NoMatch => Err(parser.error_here(|found| ErrorImpl::ExpectedValue { found })),
        other => Ok(other),
    }
}

/// Precedence climbing over the operator table.
///
/// Consumes operators whose priority is at least `min_priority`. Equal
/// priorities group to the left. `=` hands over to `parse_assignment_expr`,
/// which ends the expression.
pub fn parse_binary_expr(
    parser: &mut Parser,
    mut left: Statement,
    min_priority: u8,
) -> Result<Statement, Error> {
    while let Some(entry) = parser.current_operator() {
        if entry.priority < min_priority {
            break;
        }

        if entry.kind == TokenKind::Equals {
            return parse_assignment_expr(parser, left);
        }

        let operator_token = parser.advance().clone();
        let mut right = expect_value(parser)?;

        while let Some(next) = parser.current_operator() {
            if next.priority <= entry.priority {
                break;
            }
            right = parse_binary_expr(parser, right, entry.priority + 1)?;
        }

        let ty = left.ty.clone();
        left = Statement::new(StatementKind::OperatorCall, entry.symbol, ty, operator_token.span)
            .with_params(vec![left, right]);
    }

    Ok(left)
}

/// `<identifier> = <expression>`. The target must be a declared identifier.
pub fn parse_assignment_expr(parser: &mut Parser, left: Statement) -> Result<Statement, Error> {
    parser.advance();

    let undefined = || {
        Error::new(
            ErrorImpl::UndefinedSymbol {
                name: left.name.clone(),
            },
            left.span.clone(),
        )
    };

    if left.kind != StatementKind::IdentifierExpression {
        return Err(undefined());
    }

    let ty = parser
        .lookup_symbol(&left.name)
        .map(|declaration| declaration.ty.clone())
        .ok_or_else(undefined)?;

    let value = parser.nested(expect_expr)?;

    Ok(Statement::new(
        StatementKind::AssignmentExpression,
        &left.name,
        ty,
        left.span.clone(),
    )
    .with_params(vec![value]))
}
