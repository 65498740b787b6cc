//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed-spelling tokens

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The raw source text (`None` for synthesized tokens)
/// * `$value` - The literal value, if the token carries one
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, Some("42".to_string()), Some(LiteralValue::Number(42)), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $value:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            text: $text,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for operators and punctuation.
///
/// Generates a handler that pushes a token of the given kind spelled `$value`
/// and advances the lexer past it.
///
/// # Example
///
/// ```ignore
/// pattern(r"^\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut $crate::lexer::lexer::Lexer, _matched: &str| {
            let span = lexer.span($value.len());
            lexer.push($crate::MK_TOKEN!($kind, Some(String::from($value)), None, span));
            lexer.advance_n($value.len());
        }
    };
}
