//! Parser state and entry points.
//!
//! The [`Parser`] owns everything one parse needs: the token cursor, the
//! diagnostic bag and the source text. It is built fresh for every input and
//! consumed when the [`SyntaxTree`] is produced, so separate parses share no
//! state.

use crate::{
    ast::ast::SyntaxTree,
    errors::bag::DiagnosticBag,
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
};

use super::{cursor::TokenCursor, expr::parse_expr};

pub struct Parser {
    /// Filtered tokens and the current position in them
    cursor: TokenCursor,
    /// Lexer diagnostics followed by parser diagnostics
    diagnostics: DiagnosticBag,
    /// The text being parsed
    text: String,
}

impl Parser {
    /// Creates a parser over `tokens`.
    ///
    /// Whitespace and bad tokens are dropped here; the problems they stand for
    /// are already in `lexer_diagnostics`, which go ahead of anything the
    /// parser reports.
    pub fn new(text: String, tokens: Vec<Token>, lexer_diagnostics: DiagnosticBag) -> Self {
        let tokens = tokens
            .into_iter()
            .filter(|token| !token.kind.is_trivia())
            .collect::<Vec<_>>();

        let mut diagnostics = DiagnosticBag::new();
        diagnostics.extend(lexer_diagnostics);

        Parser {
            cursor: TokenCursor::new(tokens),
            diagnostics,
            text,
        }
    }

    pub fn peek(&self, offset: usize) -> &Token {
        self.cursor.peek(offset)
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    pub fn advance(&mut self) -> Token {
        self.cursor.advance()
    }

    /// See [`TokenCursor::expect`]; mismatches go into this parser's bag.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Token {
        self.cursor.expect(expected_kind, &mut self.diagnostics)
    }

    pub fn get_position(&self) -> usize {
        self.cursor.position()
    }

    /// Parses one expression followed by the end of input.
    pub fn parse_syntax_tree(mut self) -> SyntaxTree {
        let expression = parse_expr(&mut self);
        let end_of_file_token = self.expect(TokenKind::EOF);

        SyntaxTree::new(
            self.text,
            self.diagnostics.into_vec(),
            expression,
            end_of_file_token,
        )
    }
}

/// Lexes and parses `source`.
///
/// # Arguments
///
/// * `source` - The text of a single expression
/// * `file` - Name used in diagnostic spans, `shell` when `None`
pub fn parse(source: &str, file: Option<String>) -> SyntaxTree {
    let (tokens, lexer_diagnostics) = tokenize(source.to_string(), file);
    parse_tokens(source.to_string(), tokens, lexer_diagnostics)
}

/// Parses an already lexed token stream for `text`.
pub fn parse_tokens(text: String, tokens: Vec<Token>, lexer_diagnostics: DiagnosticBag) -> SyntaxTree {
    Parser::new(text, tokens, lexer_diagnostics).parse_syntax_tree()
}
