use std::{
    fmt::{Display, Formatter, Result},
    slice::Iter,
};

use crate::lexer::tokens::Token;

use super::{
    ast::{write_lines, Expr, Stmt},
    expressions::SymbolExpr,
    types::TypeRef,
};

/// Block Statement
/// Statements between a `then`/`else`/`begin` and the keyword closing them.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub token: Token,
    pub statements: Vec<Stmt>,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_lines(f, &self.statements)
    }
}

/// Expression Statement
/// A bare expression, including `if` and `begin` forms.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub token: Token,
    pub expression: Expr,
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.expression)
    }
}

/// Declaration Statement
/// `name: type [= value];` The token is the colon.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclStmt {
    pub token: Token,
    pub name: SymbolExpr,
    pub type_ref: TypeRef,
    pub initializer: Option<Expr>,
}

impl Display for DeclStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}: {}", self.name, self.type_ref)?;
        if let Some(initializer) = &self.initializer {
            write!(f, " = {}", initializer)?;
        }
        write!(f, ";")
    }
}

/// Assignment Statement
/// `name := value;` The token is the `:=`.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub token: Token,
    pub name: SymbolExpr,
    pub value: Expr,
}

impl Display for AssignStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} := {};", self.name, self.value)
    }
}

/// Goto Statement
/// `goto label;`
#[derive(Debug, Clone, PartialEq)]
pub struct GotoStmt {
    pub token: Token,
    pub label: SymbolExpr,
}

impl Display for GotoStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {};", self.token.literal, self.label)
    }
}

/// Marker Statement
/// Defines a jump target: `label:`. The token is the colon.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStmt {
    pub token: Token,
    pub label: SymbolExpr,
}

impl Display for MarkerStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}:", self.label)
    }
}
