use tracing::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::{AssignmentExpr, BinaryExpr, LiteralExpr, NameExpr, ParenthesizedExpr, UnaryExpr},
    },
    lexer::tokens::{LiteralValue, TokenKind},
    stack::ensure_sufficient_stack,
};

use super::{
    lookups::{binary_operator_precedence, unary_operator_precedence, BindingPower},
    parser::Parser,
};

pub fn parse_expr(parser: &mut Parser) -> Expr {
    parse_assignment_expr(parser)
}

/// `identifier = expr`, recursing on the right so assignments nest to the right.
pub fn parse_assignment_expr(parser: &mut Parser) -> Expr {
    ensure_sufficient_stack(|| {
        if parser.peek(0).kind == TokenKind::Identifier && parser.peek(1).kind == TokenKind::Assignment {
            let identifier = parser.advance();
            let operator = parser.advance();
            let value = parse_assignment_expr(parser);

            return Expr::Assignment(AssignmentExpr {
                identifier,
                operator,
                value: Box::new(value),
            });
        }

        parse_binary_expr(parser, BindingPower::Default)
    })
}

/// Precedence climbing over unary and binary operators.
///
/// Only operators binding tighter than `parent` are folded in here; the loop
/// stops on an equal binding power, which leaves same-level operators to the
/// caller and makes them left-associative.
pub fn parse_binary_expr(parser: &mut Parser, parent: BindingPower) -> Expr {
    ensure_sufficient_stack(|| {
        trace!(pos = parser.get_position(), ?parent, "parse_binary_expr");

        let unary = unary_operator_precedence(parser.current_token_kind());
        let mut left = if unary.is_operator() && unary >= parent {
            let operator = parser.advance();
            let operand = parse_binary_expr(parser, unary);

            Expr::Unary(UnaryExpr {
                operator,
                operand: Box::new(operand),
            })
        } else {
            parse_primary_expr(parser)
        };

        loop {
            let precedence = binary_operator_precedence(parser.current_token_kind());
            if !precedence.is_operator() || precedence <= parent {
                break;
            }

            let operator = parser.advance();
            let right = parse_binary_expr(parser, precedence);

            left = Expr::Binary(BinaryExpr {
                left: Box::new(left),
                operator,
                right: Box::new(right),
            });
        }

        left
    })
}

pub fn parse_primary_expr(parser: &mut Parser) -> Expr {
    trace!(kind = %parser.current_token_kind(), "parse_primary_expr");

    match parser.current_token_kind() {
        TokenKind::OpenParen => parse_parenthesized_expr(parser),
        TokenKind::True | TokenKind::False => parse_boolean_literal(parser),
        TokenKind::Number => parse_number_literal(parser),
        // Anything else is read as a name; `expect` reports the mismatch.
        _ => parse_name_expr(parser),
    }
}

pub fn parse_parenthesized_expr(parser: &mut Parser) -> Expr {
    let open_paren = parser.expect(TokenKind::OpenParen);
    let expression = parse_expr(parser);
    let close_paren = parser.expect(TokenKind::CloseParen);

    Expr::Parenthesized(ParenthesizedExpr {
        open_paren,
        expression: Box::new(expression),
        close_paren,
    })
}

pub fn parse_boolean_literal(parser: &mut Parser) -> Expr {
    let is_true = parser.current_token_kind() == TokenKind::True;
    let token = if is_true {
        parser.expect(TokenKind::True)
    } else {
        parser.expect(TokenKind::False)
    };

    Expr::Literal(LiteralExpr {
        token,
        value: Some(LiteralValue::Boolean(is_true)),
    })
}

pub fn parse_number_literal(parser: &mut Parser) -> Expr {
    let token = parser.expect(TokenKind::Number);
    let value = token.value;

    Expr::Literal(LiteralExpr { token, value })
}

pub fn parse_name_expr(parser: &mut Parser) -> Expr {
    let identifier = parser.expect(TokenKind::Identifier);
    Expr::Name(NameExpr { identifier })
}
