use crate::{
    ast::{
        ast::Stmt,
        expressions::SymbolExpr,
        statements::{AssignStmt, BlockStmt, DeclStmt, ExpressionStmt, GotoStmt, MarkerStmt},
        types::TypeRef,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    log::trace!(
        "statement at {} starting with {}",
        parser.get_position().0,
        parser.current_token()
    );

    match parser.current_token_kind() {
        TokenKind::Identifier if parser.peek_is(TokenKind::Assign) => parse_assign_stmt(parser),
        TokenKind::Identifier if parser.peek_is(TokenKind::Colon) => parse_colon_stmt(parser),
        TokenKind::Goto => parse_goto_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest)?;

    parser.skip_semicolon();

    Ok(Stmt::Expression(ExpressionStmt { token, expression }))
}

pub fn parse_assign_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let name = SymbolExpr::new(parser.advance());
    let token = parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;

    parser.skip_semicolon();

    Ok(Stmt::Assign(AssignStmt { token, name, value }))
}

/// `ident :` opens either a declaration or a label. The token after the
/// colon decides: a type keyword makes a declaration, anything that can
/// begin a statement (or close the enclosing block) makes a label.
pub fn parse_colon_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let name = parser.advance();
    let follower = parser.peek_token_kind();

    if follower.is_type() {
        parse_decl_stmt(parser, name)
    } else if follower.can_start_statement() {
        Ok(Stmt::Marker(MarkerStmt {
            token: parser.current_token().clone(),
            label: SymbolExpr::new(name),
        }))
    } else {
        Err(Error::new(
            ErrorImpl::ExpectedType {
                name: name.literal,
                found: follower,
            },
            parser.peek_token().span.start.clone(),
        ))
    }
}

/// Parses `: type [= value] [;]` with `current` on the colon.
pub fn parse_decl_stmt(parser: &mut Parser, name: Token) -> Result<Stmt, Error> {
    let token = parser.advance();

    let type_ref = TypeRef::from_token(parser.current_token().clone()).ok_or_else(|| {
        Error::new(
            ErrorImpl::ExpectedType {
                name: name.literal.clone(),
                found: parser.current_token_kind(),
            },
            parser.get_position(),
        )
    })?;

    let initializer = if parser.peek_is(TokenKind::Equal) {
        parser.advance();
        parser.advance();
        Some(parse_expr(parser, BindingPower::Lowest)?)
    } else {
        None
    };

    parser.skip_semicolon();

    Ok(Stmt::Decl(DeclStmt {
        token,
        name: SymbolExpr::new(name),
        type_ref,
        initializer,
    }))
}

pub fn parse_goto_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::Identifier)?;
    let label = SymbolExpr::new(parser.current_token().clone());

    parser.skip_semicolon();

    Ok(Stmt::Goto(GotoStmt { token, label }))
}

/// Parses statements after the opening keyword under `current` (`then`,
/// `else` or `begin`) up to, but not including, `else`, `end` or end of input.
///
/// Failed statements are recorded and skipped so one bad line does not
/// lose the rest of the block.
pub fn parse_block_stmt(parser: &mut Parser) -> BlockStmt {
    let token = parser.advance();
    let mut statements = Vec::new();

    while !parser.current_is(TokenKind::Else)
        && !parser.current_is(TokenKind::End)
        && !parser.current_is(TokenKind::EndOfInput)
    {
        if !parser.current_is(TokenKind::Semicolon) {
            match parse_stmt(parser) {
                Ok(stmt) => statements.push(stmt),
                Err(error) => parser.record(error),
            }
        }
        parser.advance();
    }

    BlockStmt { token, statements }
}

/// Requires `current` to be the `end` closing an `if` or `begin` block.
pub fn expect_block_end(parser: &Parser) -> Result<(), Error> {
    if parser.current_is(TokenKind::End) {
        Ok(())
    } else {
        Err(Error::new(
            ErrorImpl::UnclosedBlock {
                found: parser.current_token_kind(),
            },
            parser.get_position(),
        ))
    }
}
