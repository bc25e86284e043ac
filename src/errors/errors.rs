use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::ExpectedType { .. } => "ExpectedType",
            ErrorImpl::UnclosedBlock { .. } => "UnclosedBlock",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Expected `{}` here but found `{}`",
                expected, found
            )),
            ErrorImpl::NoPrefixParseFn { kind } => match kind {
                TokenKind::Illegal => ErrorTip::Suggestion(String::from(
                    "This character is not part of the language",
                )),
                TokenKind::EndOfInput => ErrorTip::Suggestion(String::from(
                    "The input ended in the middle of an expression",
                )),
                _ => ErrorTip::None,
            },
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, use an H, B, C or D suffix for based literals and stay within 64 bits",
                token
            )),
            ErrorImpl::ExpectedType { name, .. } => ErrorTip::Suggestion(format!(
                "Declare `{}` as `integer` or `real`, or follow the label with a statement",
                name
            )),
            ErrorImpl::UnclosedBlock { .. } => {
                ErrorTip::Suggestion(String::from("Did you forget an `end`?"))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind },
    #[error("could not parse {token:?} as integer")]
    NumberParseError { token: String },
    #[error("expected a type for {name:?}, got {found} instead")]
    ExpectedType { name: String, found: TokenKind },
    #[error("expected End to close the block, got {found} instead")]
    UnclosedBlock { found: TokenKind },
}
