use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("integer", TokenKind::Integer);
        map.insert("real", TokenKind::Real);
        map.insert("read", TokenKind::Read);
        map.insert("write", TokenKind::Write);
        map.insert("goto", TokenKind::Goto);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("end", TokenKind::End);
        map.insert("loop", TokenKind::Loop);
        map.insert("begin", TokenKind::Begin);
        map.insert("skip", TokenKind::Skip);
        map.insert("space", TokenKind::Space);
        map.insert("tab", TokenKind::Tab);
        map.insert("mod", TokenKind::Mod);
        map.insert("of", TokenKind::Of);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Illegal,
    EndOfInput,

    Identifier,
    IntegerLiteral,

    Assign, // :=
    Plus,
    Minus,
    Star,
    Slash,
    GreaterThan,
    LessThan,
    Equal,
    NotEqual, // <>
    LessOrEqual,
    GreaterOrEqual,

    Comma,
    Semicolon,
    Colon,
    LParen,
    RParen,

    // Reserved
    Integer,
    Real,
    Read,
    Write,
    If,
    Then,
    Else,
    End,
    Loop,
    Begin,
    Goto,
    Skip,
    Space,
    Tab,
    Mod,
    Of,
}

impl TokenKind {
    /// Type keywords usable on the right of a declaration colon.
    pub fn is_type(&self) -> bool {
        matches!(self, TokenKind::Integer | TokenKind::Real)
    }

    /// Whether a token of this kind may open a statement, or legitimately
    /// follow the last statement of a block or of the input.
    pub fn can_start_statement(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::IntegerLiteral
                | TokenKind::Minus
                | TokenKind::LParen
                | TokenKind::If
                | TokenKind::Begin
                | TokenKind::Goto
                | TokenKind::Read
                | TokenKind::Write
                | TokenKind::Loop
                | TokenKind::Skip
                | TokenKind::Space
                | TokenKind::Tab
                | TokenKind::End
                | TokenKind::Else
                | TokenKind::EndOfInput
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Returns the keyword kind for `ident`, or `Identifier` when it is not reserved.
pub fn lookup_ident(ident: &str) -> TokenKind {
    RESERVED_LOOKUP
        .get(ident)
        .copied()
        .unwrap_or(TokenKind::Identifier)
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
}

// Spans are diagnostics only; two tokens are the same lexeme regardless of where they sit.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.literal == other.literal
    }
}

impl Eq for Token {}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_one_of_many(&[TokenKind::Identifier, TokenKind::IntegerLiteral, TokenKind::Illegal]) {
            write!(f, "{} ({})", self.kind, self.literal)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl Token {
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.iter().any(|kind| *kind == self.kind)
    }
}
