use std::{
    fmt::{self, Display, Write},
    mem,
};

use crate::{
    errors::errors::Diagnostic,
    lexer::tokens::{Token, TokenKind},
    stack::ensure_sufficient_stack,
    Span,
};

use super::expressions::{
    AssignmentExpr, BinaryExpr, LiteralExpr, NameExpr, ParenthesizedExpr, UnaryExpr,
};

/// Expression Types
///
/// Names of the expression forms, used when printing trees.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Literal,
    Name,
    Unary,
    Binary,
    Parenthesized,
    Assignment,
}

impl Display for ExprType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}Expr", self)
    }
}

/// An expression node.
///
/// Consumers match on this exhaustively; adding a form is a breaking change.
/// `Clone`, `PartialEq`, `Debug` and `Drop` are written by hand so that none
/// of them recurse on the native stack for deeply nested trees.
#[derive(Eq)]
pub enum Expr {
    Literal(LiteralExpr),
    Name(NameExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Parenthesized(ParenthesizedExpr),
    Assignment(AssignmentExpr),
}

/// A child of a node, in source order.
#[derive(Debug, Clone, Copy)]
pub enum SyntaxChild<'a> {
    Node(&'a Expr),
    Token(&'a Token),
}

impl Expr {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Literal(_) => ExprType::Literal,
            Expr::Name(_) => ExprType::Name,
            Expr::Unary(_) => ExprType::Unary,
            Expr::Binary(_) => ExprType::Binary,
            Expr::Parenthesized(_) => ExprType::Parenthesized,
            Expr::Assignment(_) => ExprType::Assignment,
        }
    }

    /// Span from the first token of the node to the end of its last token.
    pub fn get_span(&self) -> Span {
        ensure_sufficient_stack(|| match self {
            Expr::Literal(expr) => expr.get_span(),
            Expr::Name(expr) => expr.get_span(),
            Expr::Unary(expr) => expr.get_span(),
            Expr::Binary(expr) => expr.get_span(),
            Expr::Parenthesized(expr) => expr.get_span(),
            Expr::Assignment(expr) => expr.get_span(),
        })
    }

    pub fn children(&self) -> Vec<SyntaxChild<'_>> {
        match self {
            Expr::Literal(expr) => vec![SyntaxChild::Token(&expr.token)],
            Expr::Name(expr) => vec![SyntaxChild::Token(&expr.identifier)],
            Expr::Unary(expr) => vec![
                SyntaxChild::Token(&expr.operator),
                SyntaxChild::Node(&expr.operand),
            ],
            Expr::Binary(expr) => vec![
                SyntaxChild::Node(&expr.left),
                SyntaxChild::Token(&expr.operator),
                SyntaxChild::Node(&expr.right),
            ],
            Expr::Parenthesized(expr) => vec![
                SyntaxChild::Token(&expr.open_paren),
                SyntaxChild::Node(&expr.expression),
                SyntaxChild::Token(&expr.close_paren),
            ],
            Expr::Assignment(expr) => vec![
                SyntaxChild::Token(&expr.identifier),
                SyntaxChild::Token(&expr.operator),
                SyntaxChild::Node(&expr.value),
            ],
        }
    }

    /// Writes the tree rooted at this node, one node or token per line.
    ///
    /// ```text
    /// └──BinaryExpr
    ///    ├──LiteralExpr
    ///    │  └──Number 1
    ///    ├──Plus
    ///    └──LiteralExpr
    ///       └──Number 2
    /// ```
    pub fn write_to(&self, out: &mut impl Write) -> fmt::Result {
        write_child(out, SyntaxChild::Node(self), "", true)
    }
}

fn write_child(out: &mut impl Write, child: SyntaxChild<'_>, indent: &str, is_last: bool) -> fmt::Result {
    let marker = if is_last { "└──" } else { "├──" };

    match child {
        SyntaxChild::Token(token) => writeln!(out, "{}{}{}", indent, marker, token),
        SyntaxChild::Node(expr) => {
            writeln!(out, "{}{}{}", indent, marker, expr.get_expr_type())?;

            let indent = format!("{}{}", indent, if is_last { "   " } else { "│  " });
            let children = expr.children();
            let last = children.len().saturating_sub(1);

            ensure_sufficient_stack(|| -> fmt::Result {
                for (i, child) in children.into_iter().enumerate() {
                    write_child(out, child, &indent, i == last)?;
                }
                Ok(())
            })
        }
    }
}

impl Clone for Expr {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| match self {
            Expr::Literal(expr) => Expr::Literal(expr.clone()),
            Expr::Name(expr) => Expr::Name(expr.clone()),
            Expr::Unary(expr) => Expr::Unary(expr.clone()),
            Expr::Binary(expr) => Expr::Binary(expr.clone()),
            Expr::Parenthesized(expr) => Expr::Parenthesized(expr.clone()),
            Expr::Assignment(expr) => Expr::Assignment(expr.clone()),
        })
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Expr::Literal(left), Expr::Literal(right)) => left == right,
            (Expr::Name(left), Expr::Name(right)) => left == right,
            (Expr::Unary(left), Expr::Unary(right)) => left == right,
            (Expr::Binary(left), Expr::Binary(right)) => left == right,
            (Expr::Parenthesized(left), Expr::Parenthesized(right)) => left == right,
            (Expr::Assignment(left), Expr::Assignment(right)) => left == right,
            _ => false,
        })
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Expr::Literal(expr) => f.debug_tuple("Literal").field(expr).finish(),
            Expr::Name(expr) => f.debug_tuple("Name").field(expr).finish(),
            Expr::Unary(expr) => f.debug_tuple("Unary").field(expr).finish(),
            Expr::Binary(expr) => f.debug_tuple("Binary").field(expr).finish(),
            Expr::Parenthesized(expr) => f.debug_tuple("Parenthesized").field(expr).finish(),
            Expr::Assignment(expr) => f.debug_tuple("Assignment").field(expr).finish(),
        })
    }
}

/// Drops child nodes from a worklist so deep trees never recurse on the stack.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        take_children(self, &mut pending);

        while let Some(mut expr) = pending.pop() {
            take_children(&mut expr, &mut pending);
        }
    }
}

/// Moves the child nodes of `expr` into `pending`, leaving childless placeholders.
fn take_children(expr: &mut Expr, pending: &mut Vec<Expr>) {
    match expr {
        Expr::Literal(_) | Expr::Name(_) => {}
        Expr::Unary(unary) => {
            let hole = placeholder(&unary.operator);
            pending.push(mem::replace(&mut *unary.operand, hole));
        }
        Expr::Binary(binary) => {
            let hole = placeholder(&binary.operator);
            pending.push(mem::replace(&mut *binary.left, hole));
            let hole = placeholder(&binary.operator);
            pending.push(mem::replace(&mut *binary.right, hole));
        }
        Expr::Parenthesized(paren) => {
            let hole = placeholder(&paren.open_paren);
            pending.push(mem::replace(&mut *paren.expression, hole));
        }
        Expr::Assignment(assignment) => {
            let hole = placeholder(&assignment.operator);
            pending.push(mem::replace(&mut *assignment.value, hole));
        }
    }
}

fn placeholder(at: &Token) -> Expr {
    Expr::Name(NameExpr {
        identifier: Token::synthesized(TokenKind::Identifier, at),
    })
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

/// Result of parsing one line of input.
///
/// Diagnostics from the lexer come first, followed by the parser's, each in
/// the order they were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    text: String,
    diagnostics: Vec<Diagnostic>,
    root: Expr,
    end_of_file_token: Token,
}

impl SyntaxTree {
    pub(crate) fn new(
        text: String,
        diagnostics: Vec<Diagnostic>,
        root: Expr,
        end_of_file_token: Token,
    ) -> Self {
        SyntaxTree {
            text,
            diagnostics,
            root,
            end_of_file_token,
        }
    }

    /// Lexes and parses `text` with the default source name.
    pub fn parse(text: &str) -> SyntaxTree {
        crate::parser::parser::parse(text, None)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn root(&self) -> &Expr {
        &self.root
    }

    pub fn end_of_file_token(&self) -> &Token {
        &self.end_of_file_token
    }
}

impl Display for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.write_to(f)
    }
}
