//! Parser module for building the expression tree.
//!
//! Transforms a token stream into a [`SyntaxTree`](crate::ast::ast::SyntaxTree)
//! holding exactly one expression. Binary and unary operators are parsed by
//! precedence climbing: every recursive call carries the binding power of the
//! operator that led to it, and stops at operators that do not bind tighter.
//!
//! The parser never fails. A missing token is reported and replaced with a
//! synthesized placeholder (see [`cursor::TokenCursor::expect`]), so parsing
//! always finishes with a complete tree.

pub mod cursor;
pub mod expr;
pub mod lookups;
pub mod parser;

#[cfg(test)]
mod tests;
