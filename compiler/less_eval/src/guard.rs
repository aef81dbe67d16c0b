//! Guard condition evaluation.

use std::cmp::Ordering;

use less_ir::{Condition, ConditionKind};

use crate::errors::EvalResult;
use crate::evaluator::Evaluator;
use crate::value::{compare, Value};

impl Evaluator<'_> {
    /// Evaluate a guard in the current scope.
    ///
    /// Both operands of `and`/`or` are always evaluated, so an error on
    /// either side surfaces even when the other decides the result.
    pub fn eval_condition(&mut self, condition: &Condition) -> EvalResult<bool> {
        let holds = match &condition.kind {
            ConditionKind::Compare { op, lhs, rhs } => {
                let lhs = self.eval_expr(lhs)?;
                let rhs = self.eval_expr(rhs)?;
                compare(&lhs, &rhs).is_some_and(|ordering| op.holds(ordering))
            }
            ConditionKind::And(a, b) => {
                let a = self.eval_condition(a)?;
                let b = self.eval_condition(b)?;
                a && b
            }
            ConditionKind::Or(a, b) => {
                let a = self.eval_condition(a)?;
                let b = self.eval_condition(b)?;
                a || b
            }
            ConditionKind::Truthy(expr) => {
                let value = self.eval_expr(expr)?;
                compare(&value, &Value::boolean(true)) == Some(Ordering::Equal)
            }
        };
        Ok(holds != condition.negate)
    }
}
