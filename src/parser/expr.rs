use crate::{
    ast::{
        ast::Expr,
        expressions::{BeginExpr, IfExpr, InfixExpr, IntegerLiteral, PrefixExpr, SymbolExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    literals::decode_integer,
    lookups::{led_lookup, nud_lookup, BindingPower},
    parser::Parser,
    stmt::{expect_block_end, parse_block_stmt},
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = nud_lookup(token_kind).ok_or_else(|| {
        Error::new(ErrorImpl::NoPrefixParseFn { kind: token_kind }, parser.get_position())
    })?;

    let mut left = nud(parser)?;

    // While the next operator binds tighter than the floor, fold it into lhs
    while !parser.peek_is(TokenKind::Semicolon) && bp < parser.peek_precedence() {
        let Some(led) = led_lookup(parser.peek_token_kind()) else {
            return Ok(left);
        };

        parser.advance();
        left = led(parser, left)?;
    }

    Ok(left)
}

pub fn parse_symbol_expr(parser: &mut Parser) -> Result<Expr, Error> {
    Ok(Expr::Symbol(SymbolExpr::new(parser.current_token().clone())))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    match decode_integer(&token.literal) {
        Some(value) => Ok(Expr::Integer(IntegerLiteral { token, value })),
        None => Err(Error::new(
            ErrorImpl::NumberParseError {
                token: token.literal,
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let right = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

// Operands of equal precedence associate left: the right side is parsed
// with this operator's own binding power as the floor.
pub fn parse_binary_expr(parser: &mut Parser, left: Expr) -> Result<Expr, Error> {
    let bp = parser.current_precedence();
    let operator_token = parser.advance();
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::RParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance();

    let condition = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::Then)?;

    let consequence = parse_block_stmt(parser);

    let alternative = if parser.current_is(TokenKind::Else) {
        Some(parse_block_stmt(parser))
    } else {
        None
    };

    expect_block_end(parser)?;

    Ok(Expr::If(IfExpr {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_begin_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();
    let body = parse_block_stmt(parser);

    expect_block_end(parser)?;

    Ok(Expr::Begin(BeginExpr { token, body }))
}
