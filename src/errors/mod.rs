//! Error types for the front end.
//!
//! This module defines the errors recorded while parsing. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for syntactic failures
//! - Helpful suggestions for error reports

pub mod errors;
