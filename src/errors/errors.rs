use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Span};

/// A recoverable problem found while lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    internal_error: ErrorImpl,
    span: Span,
}

impl Diagnostic {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Diagnostic {
            internal_error: error_impl,
            span,
        }
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::BadCharacter { .. } => "BadCharacter",
            ErrorImpl::InvalidNumber { .. } => "InvalidNumber",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
        }
    }

    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::BadCharacter { .. } => ErrorTip::None,
            ErrorImpl::InvalidNumber { .. } => ErrorTip::Suggestion(String::from(
                "numbers must fit in a 32-bit signed integer",
            )),
            ErrorImpl::UnexpectedToken { found, expected } => match (found, expected) {
                (_, TokenKind::CloseParen) => {
                    ErrorTip::Suggestion(String::from("did you forget a closing `)`?"))
                }
                (found, TokenKind::EOF) => ErrorTip::Suggestion(format!(
                    "only one expression is allowed, found trailing {}",
                    match found.text() {
                        Some(text) => format!("`{}`", text),
                        None => found.to_string(),
                    }
                )),
                (TokenKind::EOF, _) => {
                    ErrorTip::Suggestion(String::from("the expression ends too early"))
                }
                _ => ErrorTip::None,
            },
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

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

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("bad character input: {character:?}")]
    BadCharacter { character: char },
    #[error("the number {text} isn't a valid i32")]
    InvalidNumber { text: String },
    #[error("unexpected token <{found}>, expected <{expected}>")]
    UnexpectedToken { found: TokenKind, expected: TokenKind },
}
