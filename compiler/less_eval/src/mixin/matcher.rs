//! Candidate matching.
//!
//! Frames are searched innermost first. In each frame the definitions whose
//! selector matches the call are filtered by recursion and arity, then
//! classified by how their guards depend on `default()`. The first frame
//! with an arity-compatible definition decides the call.

use less_ir::{MixinCall, MixinParam};

use super::args::BoundArgument;
use crate::default_fn::{select_group, DefaultGroup};
use crate::errors::{ambiguous_default, EvalError, EvalResult};
use crate::evaluator::Evaluator;
use crate::scope::{Bundle, FoundMixin, Frames};

/// Outcome of looking up a mixin call.
#[derive(Debug)]
pub(crate) enum Resolution {
    /// Candidates to expand, in encounter order. May be empty when every
    /// guard failed.
    Selected(Vec<FoundMixin>),
    /// No definition with a matching selector exists.
    Undefined,
    /// Definitions exist but none can be called with these arguments. Carries
    /// the guard error that excluded a candidate, if any.
    NoMatch(Option<EvalError>),
}

impl Evaluator<'_> {
    #[tracing::instrument(level = "trace", skip_all)]
    pub(crate) fn resolve_mixin(
        &mut self,
        call: &MixinCall,
        args: &[BoundArgument],
        format: &str,
    ) -> EvalResult<Resolution> {
        let path = call.path();
        let mut any_found = false;

        for scope in self.frames.tails() {
            let found = scope.find_mixins(&path);
            if found.is_empty() {
                continue;
            }
            any_found = true;

            let mut arity_match = false;
            let mut candidates = Vec::with_capacity(found.len());
            let mut guard_failure = None;
            for mixin in found {
                if matches!(mixin.bundle, Bundle::Ruleset(_)) && self.frames.is_evaluating(&mixin.bundle)
                {
                    tracing::trace!("skipping recursive ruleset");
                    continue;
                }
                if !self.match_args(&mixin.bundle, args)? {
                    continue;
                }
                arity_match = true;
                match self.classify(&mixin, args) {
                    Ok(DefaultGroup::ExcludedBothFalse) => {}
                    Ok(group) => candidates.push((mixin, group)),
                    Err(error) => {
                        tracing::debug!(%error, "guard failed in both passes");
                        guard_failure.get_or_insert(error);
                    }
                }
            }
            if !arity_match {
                continue;
            }

            let selected = select_group(candidates).map_err(|_| {
                tracing::debug!(call = format, "ambiguous default()");
                ambiguous_default(format).at(call.location)
            })?;
            if selected.is_empty() {
                if let Some(cause) = guard_failure {
                    return Ok(Resolution::NoMatch(Some(cause)));
                }
                if self.options.strict_guards {
                    return Ok(Resolution::NoMatch(None));
                }
            }
            return Ok(Resolution::Selected(selected));
        }

        Ok(if any_found {
            Resolution::NoMatch(None)
        } else {
            Resolution::Undefined
        })
    }

    /// Whether `bundle` can be called with `args`.
    ///
    /// A plain ruleset takes no arguments. For a parametric mixin, arguments
    /// not naming an optional parameter must cover the required parameters,
    /// there may be no more arguments than parameters unless the mixin is
    /// variadic, and leading pattern parameters must equal their argument
    /// in CSS text.
    pub(crate) fn match_args(&mut self, bundle: &Bundle, args: &[BoundArgument]) -> EvalResult<bool> {
        let definition = match bundle {
            Bundle::Ruleset(_) => return Ok(args.is_empty()),
            Bundle::Mixin(definition) => definition,
        };
        let optional: Vec<_> = definition.optional_parameters().collect();
        let required_args = args
            .iter()
            .filter(|arg| !arg.name.is_some_and(|name| optional.contains(&name)))
            .count();
        let required = definition.required();
        if definition.is_variadic() {
            if required_args + 1 < required {
                return Ok(false);
            }
        } else if required_args < required || args.len() > definition.arity() {
            return Ok(false);
        }

        let checked = required_args.min(definition.arity());
        for (param, arg) in definition.params.iter().zip(args).take(checked) {
            if let MixinParam::Pattern(pattern) = param {
                let pattern = self.eval_expr(pattern)?;
                if pattern.to_string() != arg.value.to_string() {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Evaluate the candidate's guards with `default()` preset to false and
    /// then to true. A pass that fails counts as false; failing in both
    /// passes returns the first error.
    fn classify(&mut self, found: &FoundMixin, args: &[BoundArgument]) -> EvalResult<DefaultGroup> {
        let guarded = found.bundle.guard().is_some()
            || found.path.iter().any(|namespace| namespace.bundle.guard().is_some());
        if !guarded {
            return Ok(DefaultGroup::None);
        }

        let when_false = self.with_default_preset(false, |scoped| scoped.guards_hold(found, args));
        let when_true = self.with_default_preset(true, |scoped| scoped.guards_hold(found, args));
        let group = match (when_false, when_true) {
            (Err(error), Err(_)) => return Err(error),
            (when_false, when_true) => {
                DefaultGroup::from_passes(when_false.unwrap_or(false), when_true.unwrap_or(false))
            }
        };
        tracing::debug!(?group, "classified candidate");
        Ok(group)
    }

    /// Namespace guards outermost first, then the candidate's own guard.
    fn guards_hold(&mut self, found: &FoundMixin, args: &[BoundArgument]) -> EvalResult<bool> {
        for namespace in &found.path {
            if !self.guard_holds(&namespace.bundle, &namespace.closure, &[])? {
                return Ok(false);
            }
        }
        self.guard_holds(&found.bundle, &found.closure, args)
    }

    /// Evaluate the guard of `bundle`. A parametric mixin's guard sees its
    /// parameters bound from `args`, then its closure, then the caller.
    fn guard_holds(
        &mut self,
        bundle: &Bundle,
        closure: &Frames,
        args: &[BoundArgument],
    ) -> EvalResult<bool> {
        let Some(condition) = bundle.guard() else {
            return Ok(true);
        };
        let scope = closure.concat(&self.frames);
        let frames = match bundle {
            Bundle::Mixin(definition) => {
                let params = self.bind_parameters(definition, &scope, args)?;
                scope.push(params)
            }
            Bundle::Ruleset(_) => scope,
        };
        self.with_frames(frames, |scoped| scoped.eval_condition(condition))
    }
}
