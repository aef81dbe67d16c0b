//! Call-site arguments.

use less_ir::{MixinArg, Name, StringLookup};
use smallvec::SmallVec;

use crate::errors::EvalResult;
use crate::evaluator::Evaluator;
use crate::value::Value;

/// An argument evaluated in the caller's scope.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundArgument {
    pub name: Option<Name>,
    pub value: Value,
    pub expand: bool,
}

pub type BoundArguments = SmallVec<[BoundArgument; 4]>;

impl Evaluator<'_> {
    /// Evaluate call-site arguments. An expanded sequence (`@list...`)
    /// contributes each element as its own positional argument.
    pub fn bind_arguments(&mut self, args: &[MixinArg]) -> EvalResult<BoundArguments> {
        let mut bound = BoundArguments::with_capacity(args.len());
        for arg in args {
            let value = self.eval_expr(&arg.value)?;
            if !arg.expand {
                bound.push(BoundArgument {
                    name: arg.name,
                    value,
                    expand: false,
                });
                continue;
            }
            match value.into_elements() {
                Ok(items) => bound.extend(items.into_iter().map(|value| BoundArgument {
                    name: None,
                    value,
                    expand: false,
                })),
                Err(value) => bound.push(BoundArgument {
                    name: arg.name,
                    value,
                    expand: true,
                }),
            }
        }
        Ok(bound)
    }
}

/// Call text used in messages: `.m(@a:1px, red)`.
pub fn format_call(selector: &str, args: &[BoundArgument], names: &dyn StringLookup) -> String {
    let mut out = String::from(selector);
    out.push('(');
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        if let Some(name) = arg.name {
            out.push_str(names.lookup(name));
            out.push(':');
        }
        out.push_str(&arg.value.to_string());
    }
    out.push(')');
    out
}
