use std::fmt::{Display, Formatter, Result};

use crate::lexer::tokens::{Token, TokenKind};

/// Declared types of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literals {
    Integer,
    Real,
}

impl Literals {
    pub fn from_kind(kind: TokenKind) -> Option<Literals> {
        match kind {
            TokenKind::Integer => Some(Literals::Integer),
            TokenKind::Real => Some(Literals::Real),
            _ => None,
        }
    }
}

impl Display for Literals {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Literals::Integer => write!(f, "integer"),
            Literals::Real => write!(f, "real"),
        }
    }
}

/// Type Reference
/// The type named on the right of a declaration colon.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeRef {
    pub token: Token,
    pub name: String,
    pub literal: Literals,
}

impl TypeRef {
    /// Builds a reference from a type keyword token; `None` for any other kind.
    pub fn from_token(token: Token) -> Option<TypeRef> {
        let literal = Literals::from_kind(token.kind)?;
        Some(TypeRef {
            name: token.literal.clone(),
            token,
            literal,
        })
    }
}

impl Display for TypeRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.name)
    }
}
