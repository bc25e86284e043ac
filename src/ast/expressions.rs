use std::fmt::{Display, Formatter, Result};

use crate::lexer::tokens::Token;

use super::{ast::Expr, statements::BlockStmt};

// LITERALS

/// Symbol Expression
/// Represents an identifier in the AST, including declared names and labels.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub token: Token,
    pub value: String,
}

impl SymbolExpr {
    pub fn new(token: Token) -> Self {
        let value = token.literal.clone();
        SymbolExpr { token, value }
    }
}

impl Display for SymbolExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.value)
    }
}

/// Integer Literal
/// `value` is the decoded number; the token keeps the lexeme as written,
/// radix suffix included.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.token.literal)
    }
}

// OPERATORS

/// Prefix Expression
/// A unary operator applied to its operand, e.g. `-x`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub token: Token,
    pub operator: String,
    pub right: Box<Expr>,
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

/// Infix Expression
/// Arithmetic and comparison operators, e.g. `a + b` or `a <> b`.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    pub token: Token,
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Box<Expr>,
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

// COMPOUND

/// If Expression
/// `if <condition> then <block> [else <block>] end`
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub token: Token,
    pub condition: Box<Expr>,
    pub consequence: BlockStmt,
    pub alternative: Option<BlockStmt>,
}

impl Display for IfExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "if {} then\n{}\n", self.condition, self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, "else\n{}\n", alternative)?;
        }
        write!(f, "end")
    }
}

/// Begin Expression
/// `begin <block> end`, a block used as a value.
#[derive(Debug, Clone, PartialEq)]
pub struct BeginExpr {
    pub token: Token,
    pub body: BlockStmt,
}

impl Display for BeginExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "begin\n{}\nend", self.body)
    }
}
