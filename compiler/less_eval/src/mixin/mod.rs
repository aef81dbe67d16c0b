//! Mixin calls.
//!
//! `eval_mixin_call` is the entry point: evaluate the arguments in the
//! caller's scope, resolve the call to the candidates to expand (see
//! `matcher`), then expand each one with its parameters bound (see `bind`)
//! and concatenate what they produce.

mod args;
mod bind;
mod matcher;

pub use args::{format_call, BoundArgument, BoundArguments};

use std::rc::Rc;

use less_ir::{MixinCall, MixinDefinition};

use crate::errors::{
    mixin_call_failed, no_matching_definition, undefined_mixin, EvalResult,
};
use crate::evaluator::Evaluator;
use crate::output::CssRule;
use crate::scope::{Bundle, FoundMixin};
use matcher::Resolution;

impl Evaluator<'_> {
    /// Expand a mixin call in the current scope.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn eval_mixin_call(&mut self, call: &MixinCall) -> EvalResult<Vec<CssRule>> {
        let selector = call.selector_css(self.interner);
        let args = self
            .bind_arguments(&call.args)
            .map_err(|e| e.located(call.location))?;
        let format = format_call(&selector, &args, self.interner);
        tracing::debug!(call = %format, "resolving mixin call");

        let selected = match self.resolve_mixin(call, &args, &format)? {
            Resolution::Selected(selected) => selected,
            Resolution::Undefined => return Err(undefined_mixin(selector).at(call.location)),
            Resolution::NoMatch(None) => {
                return Err(no_matching_definition(format).at(call.location));
            }
            Resolution::NoMatch(Some(cause)) => {
                return Err(mixin_call_failed(format, cause).at(call.location));
            }
        };
        tracing::debug!(count = selected.len(), "expanding candidates");

        let mut rules = Vec::new();
        for found in &selected {
            let produced = self
                .nested_call(|this| this.expand(found, call, &args))
                .map_err(|cause| mixin_call_failed(format.as_str(), cause).at(call.location))?;
            rules.extend(produced);
        }
        Ok(rules)
    }

    /// Evaluate one candidate's body with its parameters bound.
    fn expand(
        &mut self,
        found: &FoundMixin,
        call: &MixinCall,
        args: &[BoundArgument],
    ) -> EvalResult<Vec<CssRule>> {
        let definition = match &found.bundle {
            Bundle::Mixin(definition) => Rc::clone(definition),
            Bundle::Ruleset(ruleset) => Rc::new(MixinDefinition::from_ruleset(ruleset)),
        };
        let scope = found.closure.concat(&self.frames);
        let params = self.bind_parameters(&definition, &scope, args)?;
        let frames = scope.push(params);
        let mut rules = self.with_frames(frames, |scoped| {
            scoped.eval_rules(&definition.rules, Some(found.bundle.clone()))
        })?;

        if call.important || found.important {
            for rule in &mut rules {
                rule.make_important();
            }
        }
        if call.visibility.blocks_visibility() {
            for rule in &mut rules {
                rule.add_visibility_block();
            }
        }
        Ok(rules)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
