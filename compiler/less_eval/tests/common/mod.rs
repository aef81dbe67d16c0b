//! Shared fixture for integration tests: builds rule trees by name and
//! flattens evaluated output to `(property, value)` pairs.

#![allow(dead_code, reason = "Each test binary uses a different subset")]

use less_eval::{declarations, CssRule, EvalOptions, EvalResult, Evaluator};
use less_ir::{
    CompareOp, Condition, Expr, MixinArg, MixinCall, MixinDefinition, MixinParam, Name, Rule,
    Ruleset, Selector, StringInterner,
};

pub struct Fixture {
    pub interner: StringInterner,
}

impl Fixture {
    pub fn new() -> Self {
        Fixture {
            interner: StringInterner::new(),
        }
    }

    pub fn name(&self, text: &str) -> Name {
        self.interner.intern(text)
    }

    pub fn var(&self, name: &str) -> Expr {
        Expr::variable(self.name(name))
    }

    pub fn set(&self, name: &str, value: Expr) -> Rule {
        Rule::variable(self.name(name), value)
    }

    pub fn selector(&self, text: &str) -> Selector {
        let names: Vec<Name> = text.split_whitespace().map(|part| self.name(part)).collect();
        Selector::from_names(&names)
    }

    /// `selector { rules }`.
    pub fn ruleset(&self, selector: &str, rules: Vec<Rule>) -> Rule {
        Rule::from(Ruleset::new(vec![self.selector(selector)], rules))
    }

    /// `selector when (condition) { rules }`.
    pub fn guarded_ruleset(&self, selector: &str, condition: Condition, rules: Vec<Rule>) -> Rule {
        Rule::from(Ruleset::new(
            vec![self.selector(selector).with_condition(condition)],
            rules,
        ))
    }

    pub fn mixin(&self, name: &str, params: Vec<MixinParam>, rules: Vec<Rule>) -> MixinDefinition {
        MixinDefinition::new(self.name(name), params, rules)
    }

    pub fn param(&self, name: &str) -> MixinParam {
        MixinParam::named(self.name(name))
    }

    pub fn optional(&self, name: &str, default: Expr) -> MixinParam {
        MixinParam::with_default(self.name(name), default)
    }

    /// `.name(args)`. Use `call_path` for `#ns.m(args)`.
    pub fn call(&self, name: &str, args: Vec<Expr>) -> MixinCall {
        self.call_path(&[name], args)
    }

    pub fn call_path(&self, path: &[&str], args: Vec<Expr>) -> MixinCall {
        let path: Vec<Name> = path.iter().map(|part| self.name(part)).collect();
        MixinCall::new(&path, args.into_iter().map(MixinArg::positional).collect())
    }

    pub fn named_arg(&self, name: &str, value: Expr) -> MixinArg {
        MixinArg::named(self.name(name), value)
    }

    /// `default()`.
    pub fn default_call(&self) -> Expr {
        Expr::call(self.name("default"), Vec::new())
    }

    pub fn evaluate(&self, rules: Vec<Rule>) -> EvalResult<Vec<CssRule>> {
        self.evaluate_with(EvalOptions::default(), rules)
    }

    pub fn evaluate_with(&self, options: EvalOptions, rules: Vec<Rule>) -> EvalResult<Vec<CssRule>> {
        let mut evaluator = Evaluator::builder(&self.interner).options(options).build();
        evaluator.evaluate(&Ruleset::root(rules))
    }
}

/// `lhs op rhs`.
pub fn compare(op: CompareOp, lhs: Expr, rhs: Expr) -> Condition {
    Condition::compare(op, lhs, rhs)
}

/// Output declarations in order, nested rulesets flattened.
pub fn pairs(rules: &[CssRule]) -> Vec<(String, String)> {
    declarations(rules)
        .into_iter()
        .map(|d| {
            let mut value = d.value.to_string();
            if d.important {
                value.push_str(" !important");
            }
            (d.property.to_string(), value)
        })
        .collect()
}

/// Builds the expected side of a `pairs` comparison.
pub fn expect(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(property, value)| ((*property).to_owned(), (*value).to_owned()))
        .collect()
}
