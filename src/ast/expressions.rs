use crate::{
    lexer::tokens::{LiteralValue, Token},
    Span,
};

use super::ast::Expr;

// LITERALS

/// Literal Expression
/// A number or boolean literal. `value` is `None` only for placeholder tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralExpr {
    pub token: Token,
    pub value: Option<LiteralValue>,
}

impl LiteralExpr {
    pub fn get_span(&self) -> Span {
        self.token.span.clone()
    }
}

/// Name Expression
/// A reference to a variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameExpr {
    pub identifier: Token,
}

impl NameExpr {
    pub fn get_span(&self) -> Span {
        self.identifier.span.clone()
    }
}

// COMPLEX

/// Unary Expression
/// A prefix operator applied to a single operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryExpr {
    pub operator: Token,
    pub operand: Box<Expr>,
}

impl UnaryExpr {
    pub fn get_span(&self) -> Span {
        self.operator.span.to(&self.operand.get_span())
    }
}

/// Binary Expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

impl BinaryExpr {
    pub fn get_span(&self) -> Span {
        self.left.get_span().to(&self.right.get_span())
    }
}

/// Parenthesized Expression
///
/// Kept as its own node so the tree still spells out the source; it has no
/// meaning beyond its inner expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParenthesizedExpr {
    pub open_paren: Token,
    pub expression: Box<Expr>,
    pub close_paren: Token,
}

impl ParenthesizedExpr {
    pub fn get_span(&self) -> Span {
        self.open_paren.span.to(&self.close_paren.span)
    }
}

/// Assignment Expression
/// `identifier = value`, right-associative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentExpr {
    pub identifier: Token,
    pub operator: Token,
    pub value: Box<Expr>,
}

impl AssignmentExpr {
    pub fn get_span(&self) -> Span {
        self.identifier.span.to(&self.value.get_span())
    }
}
