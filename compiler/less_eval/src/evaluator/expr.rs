//! Expression evaluation.

use std::rc::Rc;

use less_ir::{BinaryOp, Expr, Name};

use super::Evaluator;
use crate::errors::{recursive_variable, undefined_variable, EvalResult};
use crate::scope::VariableSlot;
use crate::value::{DetachedRuleset, Dimension, Value};

impl Evaluator<'_> {
    /// Evaluate an expression in the current scope.
    pub fn eval_expr(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal(literal) => Ok(Value::from_literal(literal)),
            Expr::Variable { name, span } => {
                self.eval_variable(*name).map_err(|e| e.located(*span))
            }
            Expr::Operation { op, lhs, rhs } => {
                let lhs = self.eval_expr(lhs)?;
                let rhs = self.eval_expr(rhs)?;
                lhs.operate(*op, &rhs, self.options.strict_units)
            }
            Expr::Negative(inner) => match self.eval_expr(inner)? {
                Value::Dimension(d) => Ok(Value::Dimension(Dimension {
                    value: -d.value,
                    unit: d.unit,
                })),
                other => other.operate(BinaryOp::Mul, &Value::number(-1.0), self.options.strict_units),
            },
            Expr::Paren(inner) => self.eval_expr(inner),
            Expr::Call { name, args, span } => {
                self.eval_call(*name, args).map_err(|e| e.located(*span))
            }
            Expr::Spaced(items) => Ok(Value::spaced(self.eval_exprs(items)?)),
            Expr::List(items) => Ok(Value::list(self.eval_exprs(items)?)),
            Expr::DetachedRuleset(ruleset) => Ok(Value::DetachedRuleset(DetachedRuleset {
                ruleset: Rc::clone(ruleset),
                frames: self.frames.clone(),
            })),
        }
    }

    fn eval_exprs(&mut self, items: &[Expr]) -> EvalResult<Vec<Value>> {
        items.iter().map(|item| self.eval_expr(item)).collect()
    }

    /// Value of the innermost binding of `name`.
    ///
    /// Source declarations are evaluated at each reference, in the scope of
    /// the reference. A declaration that refers back to itself while being
    /// evaluated is an error.
    pub(crate) fn eval_variable(&mut self, name: Name) -> EvalResult<Value> {
        match self.frames.variable(name) {
            Some(VariableSlot::Bound(value)) => Ok(value),
            Some(VariableSlot::Source(expr)) => {
                if self.evaluating.contains(&name) {
                    return Err(recursive_variable(self.interner.lookup(name)));
                }
                self.evaluating.push(name);
                let value = self.eval_expr(&expr);
                self.evaluating.pop();
                value
            }
            None => Err(undefined_variable(self.interner.lookup(name))),
        }
    }

    fn eval_call(&mut self, name: Name, args: &[Expr]) -> EvalResult<Value> {
        if name == self.names.default {
            if let Some(value) = self.default_fn.eval()? {
                return Ok(value);
            }
        }
        let args = self.eval_exprs(args)?;
        if let Some(result) = self.functions.call(name, &args) {
            return result;
        }
        Ok(Value::Call {
            name: self.interner.lookup(name).into(),
            args,
        })
    }
}
