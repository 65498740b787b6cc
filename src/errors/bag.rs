use crate::{lexer::tokens::TokenKind, Span};

use super::errors::{Diagnostic, ErrorImpl};

/// Append-only, ordered collection of diagnostics.
///
/// Identical reports are kept; two bad characters in a row surface twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticBag {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBag {
    pub fn new() -> Self {
        DiagnosticBag::default()
    }

    pub fn report(&mut self, error: ErrorImpl, span: Span) {
        self.diagnostics.push(Diagnostic::new(error, span));
    }

    pub fn report_bad_character(&mut self, span: Span, character: char) {
        self.report(ErrorImpl::BadCharacter { character }, span);
    }

    pub fn report_invalid_number(&mut self, span: Span, text: &str) {
        self.report(
            ErrorImpl::InvalidNumber {
                text: text.to_string(),
            },
            span,
        );
    }

    pub fn report_unexpected_token(&mut self, span: Span, found: TokenKind, expected: TokenKind) {
        self.report(ErrorImpl::UnexpectedToken { found, expected }, span);
    }

    /// Appends everything in `other` after the diagnostics already present.
    pub fn extend(&mut self, other: DiagnosticBag) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl IntoIterator for DiagnosticBag {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

impl<'a> IntoIterator for &'a DiagnosticBag {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}
