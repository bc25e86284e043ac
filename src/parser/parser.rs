//! Parser state for building the Abstract Syntax Tree.
//!
//! The parser pulls tokens from the lexer one at a time through a two-token
//! window (`current` and `peek`). Statements are parsed by recursive descent
//! and expressions with NUD/LED handlers keyed by token kind.
//!
//! Parse functions leave `current` on the last token of the construct they
//! built; the program and block loops step past it.

use std::mem;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{binding_power, BindingPower},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens, pulled on demand
    lexer: Lexer,
    /// Token under examination
    current: Token,
    /// Token after `current`
    peek: Token,
    /// Errors recorded so far, in source order
    errors: Vec<Error>,
}

impl Parser {
    /// Creates a new Parser and fills its lookahead window.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Parser {
            lexer,
            current,
            peek,
            errors: vec![],
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances to the next token and returns the previous current token.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let peek = mem::replace(&mut self.peek, next);
        let previous = mem::replace(&mut self.current, peek);
        log::trace!("current token: {}", self.current);
        previous
    }

    /// Advances only when the peek token has the expected kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(()) with `current` now on the expected token, otherwise an
    /// `UnexpectedToken` error positioned at the peek token.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<(), Error> {
        if self.peek_is(expected_kind) {
            self.advance();
            Ok(())
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: self.peek.kind,
                },
                self.peek.span.start.clone(),
            ))
        }
    }

    /// Steps onto an optional statement terminator.
    pub fn skip_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }
    }

    pub fn current_precedence(&self) -> BindingPower {
        binding_power(self.current.kind)
    }

    pub fn peek_precedence(&self) -> BindingPower {
        binding_power(self.peek.kind)
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Appends an error to the log; parsing carries on.
    pub fn record(&mut self, error: Error) {
        log::debug!(
            "parse error at {}: {}",
            error.get_position().0,
            error
        );
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Parses statements until end of input.
    ///
    /// A statement that fails to parse is left out of the program and its
    /// error recorded; parsing resumes at the following token.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = vec![];

        while !self.current_is(TokenKind::EndOfInput) {
            if !self.current_is(TokenKind::Semicolon) {
                match parse_stmt(self) {
                    Ok(stmt) => statements.push(stmt),
                    Err(error) => self.record(error),
                }
            }
            self.advance();
        }

        Program { statements }
    }
}

/// Parses source text into a Program.
///
/// This is the main entry point. The program is complete only when the
/// returned error list is empty.
///
/// # Arguments
///
/// * `source` - The source text
/// * `file` - Name used in token positions, `"shell"` when absent
pub fn parse(source: String, file: Option<String>) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source, file));
    let program = parser.parse_program();

    (program, parser.into_errors())
}
