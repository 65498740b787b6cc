use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    BadToken,
    Whitespace,
    Number,
    Identifier,

    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Or,  // ||
    And, // &&

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    True,
    False,
}

impl TokenKind {
    /// The fixed spelling of operator, punctuation and keyword kinds.
    pub fn text(&self) -> Option<&'static str> {
        match self {
            TokenKind::OpenParen => Some("("),
            TokenKind::CloseParen => Some(")"),
            TokenKind::Assignment => Some("="),
            TokenKind::Equals => Some("=="),
            TokenKind::Not => Some("!"),
            TokenKind::NotEquals => Some("!="),
            TokenKind::Or => Some("||"),
            TokenKind::And => Some("&&"),
            TokenKind::Plus => Some("+"),
            TokenKind::Dash => Some("-"),
            TokenKind::Slash => Some("/"),
            TokenKind::Star => Some("*"),
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            TokenKind::EOF
            | TokenKind::BadToken
            | TokenKind::Whitespace
            | TokenKind::Number
            | TokenKind::Identifier => None,
        }
    }

    /// Whitespace and bad tokens never reach the parser.
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::BadToken)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Value carried by literal tokens.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LiteralValue {
    Number(i32),
    Boolean(bool),
}

impl Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiteralValue::Number(number) => write!(f, "{}", number),
            LiteralValue::Boolean(boolean) => write!(f, "{}", boolean),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw source text; `None` for tokens synthesized during recovery.
    pub text: Option<String>,
    pub value: Option<LiteralValue>,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.value, &self.text) {
            (Some(value), _) => write!(f, "{} {}", self.kind, value),
            (None, Some(text)) if self.kind == TokenKind::Identifier => {
                write!(f, "{} {}", self.kind, text)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}

impl Token {
    /// Placeholder of `kind` fabricated in front of `at` when the expected
    /// token is missing.
    pub fn synthesized(kind: TokenKind, at: &Token) -> Self {
        Token {
            kind,
            text: None,
            value: None,
            span: Span::empty_at(&at.span.start),
        }
    }

    pub fn is_synthesized(&self) -> bool {
        self.text.is_none()
    }
}
