//! Arithmetic and comparison operators.

/// Arithmetic operators inside value expressions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Source symbol, used in error messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Apply the operator to two plain numbers.
    #[inline]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
        }
    }
}

/// Comparison operators in guard conditions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CompareOp {
    Eq,
    Lt,
    Gt,
    /// `<=` and `=<`.
    LtEq,
    GtEq,
}

impl CompareOp {
    /// Parse an operator as written in a guard. Both `<=` and `=<` are
    /// accepted for less-or-equal.
    pub fn parse(text: &str) -> Option<CompareOp> {
        Some(match text {
            "=" => Self::Eq,
            "<" => Self::Lt,
            ">" => Self::Gt,
            "<=" | "=<" => Self::LtEq,
            ">=" => Self::GtEq,
            _ => return None,
        })
    }

    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
        }
    }

    /// Whether an ordering between the operands satisfies this operator.
    pub fn holds(self, ordering: std::cmp::Ordering) -> bool {
        use std::cmp::Ordering::{Equal, Greater, Less};
        matches!(
            (self, ordering),
            (Self::Lt | Self::LtEq, Less)
                | (Self::Eq | Self::LtEq | Self::GtEq, Equal)
                | (Self::Gt | Self::GtEq, Greater)
        )
    }
}
