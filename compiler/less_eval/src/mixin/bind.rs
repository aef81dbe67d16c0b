//! Parameter binding.

use std::rc::Rc;

use less_ir::{MixinDefinition, MixinParam};

use super::args::BoundArgument;
use crate::errors::{unknown_named_argument, wrong_argument_count, EvalResult};
use crate::evaluator::Evaluator;
use crate::scope::{Frame, Frames};
use crate::value::Value;

impl Evaluator<'_> {
    /// Bind `args` to the parameters of `definition` in a new frame.
    ///
    /// Named arguments bind first; the rest fill the remaining parameters in
    /// order. A variadic parameter takes every positional argument left;
    /// without one, a positional argument with no parameter is an error.
    /// Defaults are evaluated in `scope` with the parameters bound so far on
    /// top. `@arguments` is bound to all argument values in parameter order.
    pub(crate) fn bind_parameters(
        &mut self,
        definition: &MixinDefinition,
        scope: &Frames,
        args: &[BoundArgument],
    ) -> EvalResult<Rc<Frame>> {
        let frame = Rc::new(Frame::parameters());
        let mixin = self.interner.lookup(definition.name);
        let mut bound: Vec<Option<Value>> = vec![None; definition.params.len()];
        let mut positional = Vec::with_capacity(args.len());

        for arg in args {
            let Some(name) = arg.name else {
                positional.push(arg);
                continue;
            };
            let slot = definition
                .params
                .iter()
                .enumerate()
                .position(|(i, param)| bound[i].is_none() && param.name() == Some(name));
            let Some(slot) = slot else {
                return Err(unknown_named_argument(mixin, self.interner.lookup(name)));
            };
            frame.define(name, arg.value.clone());
            bound[slot] = Some(arg.value.clone());
        }

        let mut arguments = Vec::with_capacity(args.len());
        let mut next = 0;
        for (param, bound) in definition.params.iter().zip(bound) {
            if let Some(value) = bound {
                arguments.push(value);
                continue;
            }
            match param {
                MixinParam::Variadic(name) => {
                    let rest: Vec<Value> = positional
                        .get(next..)
                        .unwrap_or_default()
                        .iter()
                        .map(|arg| arg.value.clone())
                        .collect();
                    next = positional.len();
                    arguments.extend(rest.iter().cloned());
                    if let Some(name) = name {
                        frame.define(*name, Value::spaced(rest));
                    }
                }
                MixinParam::Pattern(_) => {
                    if let Some(arg) = positional.get(next) {
                        arguments.push(arg.value.clone());
                    }
                    next += 1;
                }
                MixinParam::Named { name, default } => {
                    let value = match (positional.get(next), default) {
                        (Some(arg), _) => arg.value.clone(),
                        (None, Some(default)) => {
                            let frames = scope.push(Rc::clone(&frame));
                            self.with_frames(frames, |scoped| scoped.eval_expr(default))?
                        }
                        (None, None) => {
                            return Err(wrong_argument_count(
                                mixin,
                                args.len(),
                                definition.arity(),
                            ));
                        }
                    };
                    frame.define(*name, value.clone());
                    arguments.push(value);
                    next += 1;
                }
            }
        }

        if next < positional.len() && !definition.is_variadic() {
            return Err(wrong_argument_count(mixin, args.len(), definition.arity()));
        }

        frame.define(self.names.arguments, Value::spaced(arguments));
        Ok(frame)
    }
}
