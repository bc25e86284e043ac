use crate::{ast::ast::Expr, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,
    Comparison,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr) -> Result<Expr, Error>;

// The handler set is fixed by the grammar, so the tables are plain matches
// rather than maps filled in per parser.

/// Binding power of `kind` in infix position. Tokens that are not infix
/// operators bind at `Lowest`, which ends any expression loop.
pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Equal | TokenKind::NotEqual => BindingPower::Equals,
        TokenKind::LessThan
        | TokenKind::GreaterThan
        | TokenKind::LessOrEqual
        | TokenKind::GreaterOrEqual => BindingPower::Comparison,
        TokenKind::Plus | TokenKind::Minus => BindingPower::Sum,
        TokenKind::Star | TokenKind::Slash => BindingPower::Product,
        _ => BindingPower::Lowest,
    }
}

/// Null denotation: how a token starts an expression.
pub fn nud_lookup(kind: TokenKind) -> Option<NUDHandler> {
    let handler: NUDHandler = match kind {
        TokenKind::Identifier => parse_symbol_expr,
        TokenKind::IntegerLiteral => parse_integer_expr,
        TokenKind::Minus => parse_prefix_expr,
        TokenKind::LParen => parse_grouping_expr,
        TokenKind::If => parse_if_expr,
        TokenKind::Begin => parse_begin_expr,
        _ => return None,
    };
    Some(handler)
}

/// Left denotation: how a token continues an expression already parsed.
pub fn led_lookup(kind: TokenKind) -> Option<LEDHandler> {
    let handler: LEDHandler = match kind {
        TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Star
        | TokenKind::Slash
        | TokenKind::GreaterThan
        | TokenKind::LessThan
        | TokenKind::Equal
        | TokenKind::NotEqual
        | TokenKind::LessOrEqual
        | TokenKind::GreaterOrEqual => parse_binary_expr,
        _ => return None,
    };
    Some(handler)
}
