use std::fmt::{Display, Formatter, Result};

use crate::{lexer::tokens::Token, Span};

use super::{
    expressions::{BeginExpr, IfExpr, InfixExpr, IntegerLiteral, PrefixExpr, SymbolExpr},
    statements::{AssignStmt, BlockStmt, DeclStmt, ExpressionStmt, GotoStmt, MarkerStmt},
};

/// Statement
///
/// Every statement form of the language. Consumers match exhaustively, so a
/// new statement form is a new variant here.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Decl(DeclStmt),
    Assign(AssignStmt),
    Expression(ExpressionStmt),
    Block(BlockStmt),
    Goto(GotoStmt),
    Marker(MarkerStmt),
}

impl Stmt {
    /// The token the statement was built from.
    pub fn token(&self) -> &Token {
        match self {
            Stmt::Decl(stmt) => &stmt.token,
            Stmt::Assign(stmt) => &stmt.token,
            Stmt::Expression(stmt) => &stmt.token,
            Stmt::Block(stmt) => &stmt.token,
            Stmt::Goto(stmt) => &stmt.token,
            Stmt::Marker(stmt) => &stmt.token,
        }
    }

    pub fn token_literal(&self) -> &str {
        &self.token().literal
    }

    pub fn get_span(&self) -> &Span {
        &self.token().span
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Stmt::Decl(stmt) => Display::fmt(stmt, f),
            Stmt::Assign(stmt) => Display::fmt(stmt, f),
            Stmt::Expression(stmt) => Display::fmt(stmt, f),
            Stmt::Block(stmt) => Display::fmt(stmt, f),
            Stmt::Goto(stmt) => Display::fmt(stmt, f),
            Stmt::Marker(stmt) => Display::fmt(stmt, f),
        }
    }
}

/// Expression
///
/// Every expression form of the language.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Symbol(SymbolExpr),
    Integer(IntegerLiteral),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    If(IfExpr),
    Begin(BeginExpr),
}

impl Expr {
    /// The token the expression was built from.
    pub fn token(&self) -> &Token {
        match self {
            Expr::Symbol(expr) => &expr.token,
            Expr::Integer(expr) => &expr.token,
            Expr::Prefix(expr) => &expr.token,
            Expr::Infix(expr) => &expr.token,
            Expr::If(expr) => &expr.token,
            Expr::Begin(expr) => &expr.token,
        }
    }

    pub fn token_literal(&self) -> &str {
        &self.token().literal
    }

    pub fn get_span(&self) -> &Span {
        &self.token().span
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expr::Symbol(expr) => Display::fmt(expr, f),
            Expr::Integer(expr) => Display::fmt(expr, f),
            Expr::Prefix(expr) => Display::fmt(expr, f),
            Expr::Infix(expr) => Display::fmt(expr, f),
            Expr::If(expr) => Display::fmt(expr, f),
            Expr::Begin(expr) => Display::fmt(expr, f),
        }
    }
}

/// Root of a parse: the top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.statements.iter()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_lines(f, &self.statements)
    }
}

/// Writes statements one per line, with no trailing newline.
pub(crate) fn write_lines(f: &mut Formatter<'_>, statements: &[Stmt]) -> Result {
    for (index, stmt) in statements.iter().enumerate() {
        if index > 0 {
            writeln!(f)?;
        }
        write!(f, "{}", stmt)?;
    }
    Ok(())
}
