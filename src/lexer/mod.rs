//! Lexical analysis module.
//!
//! This module contains the lexer that turns source text into tokens on
//! demand. It handles:
//!
//! - Keywords and identifiers (runs of ASCII letters)
//! - Integer literals, including radix-suffixed lexemes such as `5ABH`
//! - One and two character operators (`:=`, `<>`, `<=`, `>=`)
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;
