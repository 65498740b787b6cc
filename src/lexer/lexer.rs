use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::{errors::bag::DiagnosticBag, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{LiteralValue, Token, TokenKind, RESERVED_LOOKUP};

/// Receives the lexer and the text the pattern matched at the current position.
pub type RegexHandler = fn(&mut Lexer, &str);

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(regex).expect("lexer patterns are valid regexes"),
        handler,
    }
}

lazy_static! {
    // Order matters: the first pattern matching at the current position wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern(r"^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        pattern(r"^[0-9]+", number_handler),
        pattern(r"^\s+", whitespace_handler),
        pattern(r"^\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        pattern(r"^\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        pattern(r"^==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        pattern(r"^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        pattern(r"^!", MK_DEFAULT_HANDLER!(TokenKind::Not, "!")),
        pattern(r"^=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        pattern(r"^\|\|", MK_DEFAULT_HANDLER!(TokenKind::Or, "||")),
        pattern(r"^&&", MK_DEFAULT_HANDLER!(TokenKind::And, "&&")),
        pattern(r"^\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        pattern(r"^-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        pattern(r"^/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        pattern(r"^\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
    diagnostics: DiagnosticBag,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            source,
            file: file_name,
            diagnostics: DiagnosticBag::new(),
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Span of the next `len` bytes.
    pub fn span(&self, len: usize) -> Span {
        Span::from_offsets(self.pos, self.pos + len, &self.file)
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn number_handler(lexer: &mut Lexer, matched: &str) {
    let span = lexer.span(matched.len());

    let value = match matched.parse::<i32>() {
        Ok(value) => value,
        Err(_) => {
            lexer.diagnostics.report_invalid_number(span.clone(), matched);
            0
        }
    };

    lexer.push(MK_TOKEN!(
        TokenKind::Number,
        Some(matched.to_string()),
        Some(LiteralValue::Number(value)),
        span
    ));
    lexer.advance_n(matched.len());
}

fn whitespace_handler(lexer: &mut Lexer, matched: &str) {
    let span = lexer.span(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Whitespace, Some(matched.to_string()), None, span));
    lexer.advance_n(matched.len());
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) {
    let span = lexer.span(matched.len());

    if let Some(kind) = RESERVED_LOOKUP.get(matched) {
        let value = LiteralValue::Boolean(*kind == TokenKind::True);
        lexer.push(MK_TOKEN!(*kind, Some(matched.to_string()), Some(value), span));
    } else {
        lexer.push(MK_TOKEN!(TokenKind::Identifier, Some(matched.to_string()), None, span));
    }

    lexer.advance_n(matched.len());
}

fn bad_character_handler(lexer: &mut Lexer) {
    let Some(character) = lexer.remainder().chars().next() else {
        return;
    };

    let span = lexer.span(character.len_utf8());
    debug!(position = lexer.pos, ?character, "bad character");

    lexer.diagnostics.report_bad_character(span.clone(), character);
    lexer.push(MK_TOKEN!(TokenKind::BadToken, Some(character.to_string()), None, span));
    lexer.advance_n(character.len_utf8());
}

/// Splits `source` into tokens, ending with a single `EOF` token.
///
/// Never fails: unrecognised characters become `BadToken`s and are reported
/// in the returned bag alongside out-of-range numbers.
pub fn tokenize(source: String, file: Option<String>) -> (Vec<Token>, DiagnosticBag) {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let matched = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(lex.remainder())
                .map(|found| (pattern.handler, found.as_str().to_string()))
        });

        match matched {
            Some((handler, text)) => handler(&mut lex, &text),
            None => bad_character_handler(&mut lex),
        }
    }

    let span = lex.span(0);
    lex.push(MK_TOKEN!(TokenKind::EOF, Some(String::new()), None, span));
    (lex.tokens, lex.diagnostics)
}
