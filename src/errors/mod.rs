//! Diagnostics for the front end.
//!
//! Nothing in the lexer or the parser aborts on bad input. Every problem is
//! recorded as a [`errors::Diagnostic`] carrying the span it refers to, and
//! collected in discovery order into a [`bag::DiagnosticBag`].

pub mod bag;
pub mod errors;
