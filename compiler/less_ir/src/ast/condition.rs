//! Guard conditions (`when ...`).

use super::{CompareOp, Expr};

/// A guard, possibly negated with `not`.
#[derive(Clone, Debug, PartialEq)]
pub struct Condition {
    pub kind: ConditionKind,
    pub negate: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConditionKind {
    Compare {
        op: CompareOp,
        lhs: Expr,
        rhs: Expr,
    },
    And(Box<Condition>, Box<Condition>),
    Or(Box<Condition>, Box<Condition>),
    /// `when (@flag)`: holds when the value is the `true` keyword.
    Truthy(Expr),
}

impl Condition {
    fn plain(kind: ConditionKind) -> Self {
        Condition {
            kind,
            negate: false,
        }
    }

    pub fn compare(op: CompareOp, lhs: Expr, rhs: Expr) -> Self {
        Self::plain(ConditionKind::Compare { op, lhs, rhs })
    }

    pub fn truthy(expr: Expr) -> Self {
        Self::plain(ConditionKind::Truthy(expr))
    }

    /// `when (a) and (b)`.
    #[must_use]
    pub fn and(self, other: Condition) -> Self {
        Self::plain(ConditionKind::And(Box::new(self), Box::new(other)))
    }

    /// `when (a), (b)` or `when (a) or (b)`.
    #[must_use]
    pub fn or(self, other: Condition) -> Self {
        Self::plain(ConditionKind::Or(Box::new(self), Box::new(other)))
    }

    /// `when not (a)`.
    #[must_use]
    pub fn not(self) -> Self {
        Condition {
            negate: !self.negate,
            ..self
        }
    }
}
