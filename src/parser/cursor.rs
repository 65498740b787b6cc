use tracing::debug;

use crate::{errors::bag::DiagnosticBag, lexer::tokens::{Token, TokenKind}, Position, Span, MK_TOKEN};

/// Position in a filtered token stream.
///
/// The stream always ends with an `EOF` token, and reads past the end
/// saturate to it.
#[derive(Debug, Clone)]
pub struct TokenCursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenCursor {
    /// Wraps `tokens`, appending an `EOF` token if the list does not end with one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(Position::null);
            tokens.push(MK_TOKEN!(TokenKind::EOF, Some(String::new()), None, Span::empty_at(&end)));
        }

        TokenCursor { tokens, pos: 0 }
    }

    /// Returns the token `offset` places ahead, or `EOF` past the end.
    pub fn peek(&self, offset: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + offset).min(last)]
    }

    pub fn current(&self) -> &Token {
        self.peek(0)
    }

    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Returns the current token and moves past it. At `EOF` the position stays put.
    pub fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        token
    }

    /// Consumes the current token if it is of `kind`.
    ///
    /// Otherwise reports the mismatch at the current token and returns a
    /// synthesized `kind` token without moving.
    pub fn expect(&mut self, kind: TokenKind, diagnostics: &mut DiagnosticBag) -> Token {
        if self.current_kind() == kind {
            return self.advance();
        }

        let current = self.current();
        debug!(
            pos = self.pos,
            found = %current.kind,
            expected = %kind,
            "synthesizing missing token"
        );

        diagnostics.report_unexpected_token(current.span.clone(), current.kind, kind);
        Token::synthesized(kind, current)
    }

    pub fn position(&self) -> usize {
        self.pos
    }
}
