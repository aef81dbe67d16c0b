//! Rule list evaluation.
//!
//! A rule list is evaluated in two passes over a fresh frame. Mixin calls
//! and detached ruleset calls go first, and the variables and mixins they
//! produce are absorbed into the frame; then every other rule is evaluated
//! with those visible. Output keeps source order.

use std::rc::Rc;

use less_ir::{DetachedCall, Rule, Ruleset, Selector, Visibility};

use super::Evaluator;
use crate::errors::{default_outside_guard, not_detached_ruleset, EvalResult};
use crate::output::{
    CssComment, CssDeclaration, CssRule, CssRuleset, CssVariable, ExportedMixin,
};
use crate::scope::{Bundle, Closure, Frame};
use crate::stack::ensure_sufficient_stack;
use crate::value::Value;

impl Evaluator<'_> {
    /// Evaluate `rules` in a new frame on top of the current scope.
    /// `original` is the bundle whose body this is, if any.
    pub(crate) fn eval_rules(
        &mut self,
        rules: &Rc<[Rule]>,
        original: Option<Bundle>,
    ) -> EvalResult<Vec<CssRule>> {
        let frame = Rc::new(Frame::new(Rc::clone(rules), original));
        let frames = self.frames.push(Rc::clone(&frame));
        self.with_frames(frames, |scoped| scoped.eval_body(rules, &frame))
    }

    fn eval_body(&mut self, rules: &[Rule], frame: &Frame) -> EvalResult<Vec<CssRule>> {
        let mut expanded = Vec::with_capacity(rules.len());
        for rule in rules {
            let produced = match rule {
                Rule::MixinCall(call) => {
                    Some(ensure_sufficient_stack(|| self.eval_mixin_call(call))?)
                }
                Rule::DetachedCall(call) => {
                    Some(ensure_sufficient_stack(|| self.eval_detached_call(call))?)
                }
                _ => None,
            };
            let produced = produced.map(|mut produced| {
                // The body's own declarations win over the expansion's.
                produced.retain(|rule| match rule {
                    CssRule::Variable(variable) => !frame.declares_variable(variable.name),
                    _ => true,
                });
                for rule in &produced {
                    frame.absorb(rule);
                }
                produced
            });
            expanded.push(produced);
        }

        let mut out = Vec::new();
        for (rule, produced) in rules.iter().zip(expanded) {
            match produced {
                Some(produced) => out.extend(produced),
                None => self.eval_rule(rule, &mut out)?,
            }
        }
        Ok(out)
    }

    fn eval_rule(&mut self, rule: &Rule, out: &mut Vec<CssRule>) -> EvalResult<()> {
        match rule {
            Rule::Declaration(decl) => {
                let value = self
                    .eval_expr(&decl.value)
                    .map_err(|e| e.located(decl.location))?;
                out.push(CssRule::Declaration(CssDeclaration {
                    property: decl.property.clone(),
                    value,
                    important: decl.important,
                    visibility: Visibility::default(),
                }));
            }
            Rule::Variable(decl) => {
                let value = self
                    .eval_expr(&decl.value)
                    .map_err(|e| e.located(decl.location))?;
                out.push(CssRule::Variable(CssVariable {
                    name: decl.name,
                    value,
                    visibility: Visibility::default(),
                }));
            }
            Rule::Ruleset(ruleset) => {
                if let Some(evaluated) = self.eval_ruleset(ruleset)? {
                    out.push(CssRule::Ruleset(evaluated));
                }
            }
            Rule::MixinDefinition(definition) => {
                out.push(CssRule::Mixin(ExportedMixin {
                    closure: Closure::new(Rc::clone(definition), self.frames.clone()),
                    visibility: definition.visibility,
                }));
            }
            Rule::Comment(text) => out.push(CssRule::Comment(CssComment {
                text: text.clone(),
                visibility: Visibility::default(),
            })),
            // Expanded in the first pass.
            Rule::MixinCall(_) | Rule::DetachedCall(_) => {}
        }
        Ok(())
    }

    /// Evaluate a nested ruleset. Selectors whose CSS guard fails are
    /// dropped; with none left the ruleset produces nothing.
    fn eval_ruleset(&mut self, ruleset: &Rc<Ruleset>) -> EvalResult<Option<CssRuleset>> {
        let selectors = if ruleset.has_css_guard() {
            let selectors = self.with_default_error(default_outside_guard(), |scoped| {
                let mut kept = Vec::with_capacity(ruleset.selectors.len());
                for selector in &ruleset.selectors {
                    let passes = match &selector.condition {
                        Some(condition) => scoped
                            .eval_condition(condition)
                            .map_err(|e| e.located(ruleset.location))?,
                        None => true,
                    };
                    if passes {
                        kept.push(Selector {
                            condition: None,
                            ..selector.clone()
                        });
                    }
                }
                EvalResult::Ok(kept)
            })?;
            if selectors.is_empty() {
                tracing::trace!("ruleset dropped by its guard");
                return Ok(None);
            }
            selectors
        } else {
            ruleset.selectors.clone()
        };

        let rules = self.eval_rules(&ruleset.rules, Some(Bundle::Ruleset(Rc::clone(ruleset))))?;
        Ok(Some(CssRuleset {
            selectors,
            rules,
            visibility: ruleset.visibility,
        }))
    }

    /// `@detached();`: evaluate the stored block in the scope it was created
    /// in, followed by the current scope.
    fn eval_detached_call(&mut self, call: &DetachedCall) -> EvalResult<Vec<CssRule>> {
        let value = self
            .eval_variable(call.variable)
            .map_err(|e| e.located(call.location))?;
        let Value::DetachedRuleset(detached) = value else {
            return Err(
                not_detached_ruleset(self.interner.lookup(call.variable)).at(call.location)
            );
        };
        let frames = detached.frames.concat(&self.frames);
        self.nested_call(|this| {
            this.with_frames(frames, |scoped| scoped.eval_rules(&detached.ruleset.rules, None))
        })
        .map_err(|e| e.located(call.location))
    }
}
