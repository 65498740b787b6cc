//! Lexical analysis module.
//!
//! Converts source text into a stream of tokens for the parser:
//!
//! - Tokenization of source text using regex patterns
//! - Recognition of keywords, identifiers, number literals and operators
//! - Token spans for diagnostics
//! - Bad characters and out-of-range numbers reported as diagnostics

pub mod lexer;
pub mod tokens;
