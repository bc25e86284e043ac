//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms the lexer's token stream
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with operator precedence and handles:
//!
//! - Statement parsing (declarations, assignments, labels, goto)
//! - Expression parsing (prefix and infix operators, `if` and `begin` forms)
//! - Radix-suffixed integer literals
//! - Error recording and recovery
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod literals;
pub mod lookups;
pub mod parser;
pub mod stmt;
