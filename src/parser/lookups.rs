use crate::lexer::tokens::TokenKind;

/// Operator binding strength. `Default` means "not an operator".
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    LogicalOr,
    LogicalAnd,
    Equality,
    Additive,
    Multiplicative,
    Unary,
}

impl BindingPower {
    pub fn is_operator(self) -> bool {
        self != BindingPower::Default
    }
}

pub fn unary_operator_precedence(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Plus | TokenKind::Dash | TokenKind::Not => BindingPower::Unary,
        _ => BindingPower::Default,
    }
}

pub fn binary_operator_precedence(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Star | TokenKind::Slash => BindingPower::Multiplicative,
        TokenKind::Plus | TokenKind::Dash => BindingPower::Additive,
        TokenKind::Equals | TokenKind::NotEquals => BindingPower::Equality,
        TokenKind::And => BindingPower::LogicalAnd,
        TokenKind::Or => BindingPower::LogicalOr,
        _ => BindingPower::Default,
    }
}
