//! Unit tests for the parser module.
//!
//! Trees are compared through a compact prefix notation: `(+ 1 2)` for a
//! binary node, `(- 1)` for a unary one, `(paren x)` for parentheses,
//! `(= a x)` for assignments and `?` for a placeholder name.

use pretty_assertions::assert_eq;

use super::{
    cursor::TokenCursor,
    lookups::{binary_operator_precedence, unary_operator_precedence, BindingPower},
    parser::{parse, parse_tokens},
};
use crate::{
    ast::ast::{Expr, SyntaxTree},
    errors::{bag::DiagnosticBag, errors::ErrorImpl},
    lexer::tokens::{LiteralValue, Token, TokenKind},
    Span, MK_TOKEN,
};

fn shape(expr: &Expr) -> String {
    match expr {
        Expr::Literal(literal) => match literal.value {
            Some(value) => value.to_string(),
            None => String::from("?"),
        },
        Expr::Name(name) => name.identifier.text.clone().unwrap_or_else(|| String::from("?")),
        Expr::Unary(unary) => format!("({} {})", operator(&unary.operator), shape(&unary.operand)),
        Expr::Binary(binary) => format!(
            "({} {} {})",
            operator(&binary.operator),
            shape(&binary.left),
            shape(&binary.right)
        ),
        Expr::Parenthesized(paren) => format!("(paren {})", shape(&paren.expression)),
        Expr::Assignment(assignment) => format!(
            "(= {} {})",
            assignment.identifier.text.clone().unwrap_or_else(|| String::from("?")),
            shape(&assignment.value)
        ),
    }
}

fn operator(token: &Token) -> &'static str {
    token.kind.text().unwrap_or("?")
}

fn parse_shape(source: &str) -> String {
    let tree = parse(source, None);
    assert!(
        tree.diagnostics().is_empty(),
        "unexpected diagnostics for {:?}: {:?}",
        source,
        tree.diagnostics()
    );
    shape(tree.root())
}

fn unexpected(tree: &SyntaxTree) -> Vec<(TokenKind, TokenKind, u32, u32)> {
    tree.diagnostics()
        .iter()
        .filter_map(|diagnostic| match diagnostic.get_error() {
            ErrorImpl::UnexpectedToken { found, expected } => Some((
                *found,
                *expected,
                diagnostic.get_span().start.0,
                diagnostic.get_span().end.0,
            )),
            _ => None,
        })
        .collect()
}

fn token(kind: TokenKind, text: &str, start: u32) -> Token {
    let value = match kind {
        TokenKind::Number => text.parse().ok().map(LiteralValue::Number),
        _ => None,
    };
    let file = std::rc::Rc::new(String::from("test.lang"));
    MK_TOKEN!(
        kind,
        Some(text.to_string()),
        value,
        Span::new(start, start + text.len() as u32, &file)
    )
}

#[test]
fn test_parse_number_literal() {
    let tree = parse("42", None);

    assert!(tree.diagnostics().is_empty());
    match tree.root() {
        Expr::Literal(literal) => {
            assert_eq!(literal.token.kind, TokenKind::Number);
            assert_eq!(literal.token.text.as_deref(), Some("42"));
            assert_eq!(literal.value, Some(LiteralValue::Number(42)));
        }
        other => panic!("Expected literal, found {:?}", other),
    }
    assert_eq!(tree.end_of_file_token().kind, TokenKind::EOF);
    assert!(!tree.end_of_file_token().is_synthesized());
}

#[test]
fn test_parse_name() {
    let tree = parse("  counter  ", None);

    assert!(tree.diagnostics().is_empty());
    match tree.root() {
        Expr::Name(name) => {
            assert_eq!(name.identifier.text.as_deref(), Some("counter"));
            assert_eq!(name.identifier.span.start.0, 2);
        }
        other => panic!("Expected name, found {:?}", other),
    }
}

#[test]
fn test_parse_boolean_literal_keeps_keyword_token() {
    let tree = parse("false", None);

    match tree.root() {
        Expr::Literal(literal) => {
            assert_eq!(literal.token.kind, TokenKind::False);
            assert_eq!(literal.token.span.start.0, 0);
            assert_eq!(literal.token.span.end.0, 5);
            assert_eq!(literal.value, Some(LiteralValue::Boolean(false)));
        }
        other => panic!("Expected literal, found {:?}", other),
    }

    assert_eq!(parse_shape("true"), "true");
}

#[test]
fn test_multiplication_binds_tighter() {
    assert_eq!(parse_shape("1 + 2 * 3"), "(+ 1 (* 2 3))");
    assert_eq!(parse_shape("1 * 2 + 3"), "(+ (* 1 2) 3)");
}

#[test]
fn test_left_associativity() {
    assert_eq!(parse_shape("1 - 2 - 3"), "(- (- 1 2) 3)");
    assert_eq!(parse_shape("8 / 4 / 2"), "(/ (/ 8 4) 2)");
    assert_eq!(parse_shape("a == b != c"), "(!= (== a b) c)");
}

#[test]
fn test_assignment_is_right_associative() {
    assert_eq!(parse_shape("a = b = 5"), "(= a (= b 5))");
    assert_eq!(parse_shape("a = 1 + 2"), "(= a (+ 1 2))");
}

#[test]
fn test_unary_binds_tighter_than_binary() {
    assert_eq!(parse_shape("-1 + 2"), "(+ (- 1) 2)");
    assert_eq!(parse_shape("-a * b"), "(* (- a) b)");
    assert_eq!(parse_shape("1 + -2"), "(+ 1 (- 2))");
    assert_eq!(parse_shape("--1"), "(- (- 1))");
    assert_eq!(parse_shape("+a"), "(+ a)");
}

#[test]
fn test_logical_operators() {
    assert_eq!(parse_shape("!a && b || c"), "(|| (&& (! a) b) c)");
    assert_eq!(parse_shape("a || b && c"), "(|| a (&& b c))");
    assert_eq!(parse_shape("1 + 2 == 3 && true"), "(&& (== (+ 1 2) 3) true)");
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(parse_shape("(1 + 2) * 3"), "(* (paren (+ 1 2)) 3)");
    assert_eq!(parse_shape("-(a)"), "(- (paren a))");
}

#[test]
fn test_assignment_inside_parentheses() {
    assert_eq!(parse_shape("(a = 1) + 2"), "(+ (paren (= a 1)) 2)");
}

#[test]
fn test_assignment_needs_identifier_on_the_left() {
    let tree = parse("1 = 2", None);

    assert_eq!(shape(tree.root()), "1");
    assert_eq!(unexpected(&tree), vec![(TokenKind::Assignment, TokenKind::EOF, 2, 3)]);
}

#[test]
fn test_missing_right_operand() {
    let tree = parse("1 +", None);

    assert_eq!(shape(tree.root()), "(+ 1 ?)");
    assert_eq!(unexpected(&tree), vec![(TokenKind::EOF, TokenKind::Identifier, 3, 3)]);
}

#[test]
fn test_missing_close_paren() {
    let tree = parse("(1", None);

    assert_eq!(shape(tree.root()), "(paren 1)");
    assert_eq!(unexpected(&tree), vec![(TokenKind::EOF, TokenKind::CloseParen, 2, 2)]);

    match tree.root() {
        Expr::Parenthesized(paren) => {
            assert!(!paren.open_paren.is_synthesized());
            assert!(paren.close_paren.is_synthesized());
            assert_eq!(paren.close_paren.kind, TokenKind::CloseParen);
        }
        other => panic!("Expected parenthesized expression, found {:?}", other),
    }
}

#[test]
fn test_lone_close_paren() {
    let tree = parse(")", None);

    assert_eq!(shape(tree.root()), "?");
    assert_eq!(
        unexpected(&tree),
        vec![
            (TokenKind::CloseParen, TokenKind::Identifier, 0, 1),
            (TokenKind::CloseParen, TokenKind::EOF, 0, 1),
        ]
    );
    assert!(tree.end_of_file_token().is_synthesized());
}

#[test]
fn test_empty_input() {
    let tree = parse("", None);

    assert_eq!(shape(tree.root()), "?");
    assert_eq!(unexpected(&tree), vec![(TokenKind::EOF, TokenKind::Identifier, 0, 0)]);
    assert!(!tree.end_of_file_token().is_synthesized());
}

#[test]
fn test_trailing_tokens_are_reported() {
    let tree = parse("1 2", None);

    assert_eq!(shape(tree.root()), "1");
    assert_eq!(unexpected(&tree), vec![(TokenKind::Number, TokenKind::EOF, 2, 3)]);

    let eof = tree.end_of_file_token();
    assert_eq!(eof.kind, TokenKind::EOF);
    assert_eq!(eof.text, None);
    assert_eq!(eof.span.start.0, 2);
}

#[test]
fn test_lexer_diagnostics_come_first() {
    let tree = parse(") @", None);

    let names = tree
        .diagnostics()
        .iter()
        .map(|diagnostic| (diagnostic.get_error_name(), diagnostic.get_span().start.0))
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        vec![("BadCharacter", 2), ("UnexpectedToken", 0), ("UnexpectedToken", 0)]
    );
}

#[test]
fn test_bad_tokens_are_skipped() {
    let tree = parse("1 + @ 2", None);

    assert_eq!(shape(tree.root()), "(+ 1 2)");
    assert_eq!(tree.diagnostics().len(), 1);
    assert_eq!(tree.diagnostics()[0].get_error_name(), "BadCharacter");
}

#[test]
fn test_parse_is_deterministic() {
    for source in ["1 +", "(1", ")", "", "a = = b", "((1 + ) * )"] {
        assert_eq!(parse(source, None), parse(source, None));
    }
}

#[test]
fn test_parse_tokens_from_hand_built_stream() {
    let tokens = vec![
        token(TokenKind::Identifier, "x", 0),
        token(TokenKind::Assignment, "=", 2),
        token(TokenKind::Number, "7", 4),
    ];

    let tree = parse_tokens(String::from("x = 7"), tokens, DiagnosticBag::new());

    assert!(tree.diagnostics().is_empty());
    assert_eq!(shape(tree.root()), "(= x 7)");
    assert_eq!(tree.end_of_file_token().span.start.0, 5);
    assert_eq!(tree.text(), "x = 7");
}

#[test]
fn test_cursor_peek_saturates() {
    let cursor = TokenCursor::new(vec![token(TokenKind::Number, "1", 0)]);

    assert_eq!(cursor.current().kind, TokenKind::Number);
    assert_eq!(cursor.peek(1).kind, TokenKind::EOF);
    assert_eq!(cursor.peek(100).kind, TokenKind::EOF);
}

#[test]
fn test_cursor_advance_stops_at_eof() {
    let mut cursor = TokenCursor::new(vec![token(TokenKind::Identifier, "a", 0)]);

    assert_eq!(cursor.advance().kind, TokenKind::Identifier);
    assert_eq!(cursor.advance().kind, TokenKind::EOF);
    assert_eq!(cursor.advance().kind, TokenKind::EOF);
    assert_eq!(cursor.position(), 1);
}

#[test]
fn test_cursor_over_empty_stream() {
    let cursor = TokenCursor::new(vec![]);

    assert_eq!(cursor.current().kind, TokenKind::EOF);
    assert_eq!(cursor.peek(3).kind, TokenKind::EOF);
}

#[test]
fn test_cursor_expect_match_advances() {
    let mut diagnostics = DiagnosticBag::new();
    let mut cursor = TokenCursor::new(vec![token(TokenKind::Number, "5", 0)]);

    let matched = cursor.expect(TokenKind::Number, &mut diagnostics);

    assert_eq!(matched.text.as_deref(), Some("5"));
    assert_eq!(cursor.position(), 1);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_cursor_expect_synthesizes_without_advancing() {
    let mut diagnostics = DiagnosticBag::new();
    let mut cursor = TokenCursor::new(vec![
        token(TokenKind::Number, "5", 3),
        token(TokenKind::Plus, "+", 5),
    ]);

    for expected in [TokenKind::Identifier, TokenKind::CloseParen, TokenKind::EOF] {
        let synthesized = cursor.expect(expected, &mut diagnostics);

        assert_eq!(synthesized.kind, expected);
        assert_eq!(synthesized.text, None);
        assert_eq!(synthesized.value, None);
        assert_eq!(synthesized.span.start.0, 3);
        assert!(synthesized.span.is_empty());
        assert_eq!(cursor.position(), 0);
    }

    assert_eq!(diagnostics.len(), 3);
    assert!(diagnostics.iter().all(|diagnostic| matches!(
        diagnostic.get_error(),
        ErrorImpl::UnexpectedToken {
            found: TokenKind::Number,
            ..
        }
    )));
}

#[test]
fn test_precedence_tables() {
    assert_eq!(unary_operator_precedence(TokenKind::Dash), BindingPower::Unary);
    assert_eq!(unary_operator_precedence(TokenKind::Not), BindingPower::Unary);
    assert_eq!(unary_operator_precedence(TokenKind::Star), BindingPower::Default);

    assert!(binary_operator_precedence(TokenKind::Star) > binary_operator_precedence(TokenKind::Plus));
    assert!(binary_operator_precedence(TokenKind::Plus) > binary_operator_precedence(TokenKind::Equals));
    assert!(binary_operator_precedence(TokenKind::Equals) > binary_operator_precedence(TokenKind::And));
    assert!(binary_operator_precedence(TokenKind::And) > binary_operator_precedence(TokenKind::Or));
    assert!(!binary_operator_precedence(TokenKind::Not).is_operator());
    assert!(!binary_operator_precedence(TokenKind::Assignment).is_operator());
    assert!(unary_operator_precedence(TokenKind::Dash) >= binary_operator_precedence(TokenKind::Star));
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    let depth = 200_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    let tree = parse(&source, None);

    assert!(tree.diagnostics().is_empty());
    assert_eq!(tree.root().get_span().end.0 as usize, source.len());

    let copy = tree.clone();
    assert!(copy == tree);
    drop(copy);
    drop(tree);
}

#[test]
fn test_deep_unary_chain_does_not_overflow() {
    let source = format!("{}a", "-".repeat(200_000));

    let tree = parse(&source, None);

    assert!(tree.diagnostics().is_empty());
    assert!(matches!(tree.root(), Expr::Unary(_)));
    drop(tree);
}

#[test]
fn test_long_operator_chain_does_not_overflow() {
    let source = format!("1{}", " - 1".repeat(200_000));

    let tree = parse(&source, None);

    assert!(tree.diagnostics().is_empty());
    assert_eq!(tree.root().get_span().end.0 as usize, source.len());
    drop(tree);
}
