//! Evaluated rules.
//!
//! Serializing these to CSS text is left to the caller. Variables and mixin
//! definitions are kept in the output so that the ruleset a mixin call
//! expands into can make them visible to its caller.

use less_ir::{Name, Selector, Visibility};

use crate::scope::Closure;
use crate::value::Value;

#[derive(Clone, Debug)]
pub enum CssRule {
    Declaration(CssDeclaration),
    Ruleset(CssRuleset),
    Comment(CssComment),
    Variable(CssVariable),
    Mixin(ExportedMixin),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CssDeclaration {
    pub property: Box<str>,
    pub value: Value,
    pub important: bool,
    pub visibility: Visibility,
}

#[derive(Clone, Debug)]
pub struct CssRuleset {
    /// Selectors whose guards passed, with the guards removed.
    pub selectors: Vec<Selector>,
    pub rules: Vec<CssRule>,
    pub visibility: Visibility,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CssComment {
    pub text: Box<str>,
    pub visibility: Visibility,
}

/// `@name: value` after evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct CssVariable {
    pub name: Name,
    pub value: Value,
    pub visibility: Visibility,
}

/// A mixin definition made available to the scope that produced it.
#[derive(Clone, Debug)]
pub struct ExportedMixin {
    pub closure: Closure,
    pub visibility: Visibility,
}

impl CssRule {
    pub fn as_ruleset(&self) -> Option<&CssRuleset> {
        match self {
            CssRule::Ruleset(ruleset) => Some(ruleset),
            _ => None,
        }
    }

    pub fn visibility(&self) -> Visibility {
        match self {
            CssRule::Declaration(d) => d.visibility,
            CssRule::Ruleset(r) => r.visibility,
            CssRule::Comment(c) => c.visibility,
            CssRule::Variable(v) => v.visibility,
            CssRule::Mixin(m) => m.visibility,
        }
    }

    fn visibility_mut(&mut self) -> &mut Visibility {
        match self {
            CssRule::Declaration(d) => &mut d.visibility,
            CssRule::Ruleset(r) => &mut r.visibility,
            CssRule::Comment(c) => &mut c.visibility,
            CssRule::Variable(v) => &mut v.visibility,
            CssRule::Mixin(m) => &mut m.visibility,
        }
    }

    /// Whether the rule reaches generated CSS.
    pub fn is_output(&self) -> bool {
        match self {
            CssRule::Variable(_) | CssRule::Mixin(_) => false,
            _ => self.visibility().is_visible(),
        }
    }

    /// Mark every declaration `!important`, descending into nested rulesets.
    /// Exported mixins become important for later expansions.
    pub fn make_important(&mut self) {
        match self {
            CssRule::Declaration(declaration) => declaration.important = true,
            CssRule::Ruleset(ruleset) => {
                for rule in &mut ruleset.rules {
                    rule.make_important();
                }
            }
            CssRule::Mixin(exported) => exported.closure.important = true,
            CssRule::Comment(_) | CssRule::Variable(_) => {}
        }
    }

    pub fn add_visibility_block(&mut self) {
        let visibility = self.visibility_mut();
        *visibility = visibility.add_block();
    }
}

/// Declarations reaching the output, in order, descending into nested
/// rulesets.
pub fn declarations(rules: &[CssRule]) -> Vec<&CssDeclaration> {
    let mut out = Vec::new();
    collect_declarations(rules, &mut out);
    out
}

fn collect_declarations<'a>(rules: &'a [CssRule], out: &mut Vec<&'a CssDeclaration>) {
    for rule in rules.iter().filter(|rule| rule.is_output()) {
        match rule {
            CssRule::Declaration(declaration) => out.push(declaration),
            CssRule::Ruleset(ruleset) => collect_declarations(&ruleset.rules, out),
            _ => {}
        }
    }
}
