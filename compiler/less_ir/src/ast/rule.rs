//! Rules: the statements inside a ruleset body.

use std::rc::Rc;

use super::{Condition, Expr, Selector, Visibility};
use crate::{Location, Name, StringLookup};

/// A rule as written in a stylesheet.
#[derive(Clone, Debug, PartialEq)]
pub enum Rule {
    /// `property: value`.
    Declaration(Declaration),
    /// `@name: value`.
    Variable(VariableDecl),
    Ruleset(Rc<Ruleset>),
    MixinDefinition(Rc<MixinDefinition>),
    MixinCall(Rc<MixinCall>),
    /// `@detached();`
    DetachedCall(DetachedCall),
    Comment(Box<str>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    pub property: Box<str>,
    pub value: Expr,
    pub important: bool,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariableDecl {
    pub name: Name,
    pub value: Expr,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetachedCall {
    pub variable: Name,
    pub location: Location,
}

impl Rule {
    pub fn declaration(property: &str, value: Expr) -> Rule {
        Rule::Declaration(Declaration {
            property: property.into(),
            value,
            important: false,
            location: Location::DUMMY,
        })
    }

    pub fn variable(name: Name, value: Expr) -> Rule {
        Rule::Variable(VariableDecl {
            name,
            value,
            location: Location::DUMMY,
        })
    }

    pub fn detached_call(variable: Name) -> Rule {
        Rule::DetachedCall(DetachedCall {
            variable,
            location: Location::DUMMY,
        })
    }

    pub fn comment(text: &str) -> Rule {
        Rule::Comment(text.into())
    }
}

impl From<Ruleset> for Rule {
    fn from(ruleset: Ruleset) -> Self {
        Rule::Ruleset(Rc::new(ruleset))
    }
}

impl From<MixinDefinition> for Rule {
    fn from(definition: MixinDefinition) -> Self {
        Rule::MixinDefinition(Rc::new(definition))
    }
}

impl From<MixinCall> for Rule {
    fn from(call: MixinCall) -> Self {
        Rule::MixinCall(Rc::new(call))
    }
}

/// A selector block. Also callable as a mixin without parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct Ruleset {
    pub selectors: Vec<Selector>,
    pub rules: Rc<[Rule]>,
    pub location: Location,
    pub visibility: Visibility,
}

impl Ruleset {
    pub fn new(selectors: Vec<Selector>, rules: Vec<Rule>) -> Self {
        Ruleset {
            selectors,
            rules: rules.into(),
            location: Location::DUMMY,
            visibility: Visibility::default(),
        }
    }

    /// Stylesheet root or detached ruleset body: no selectors.
    pub fn root(rules: Vec<Rule>) -> Self {
        Self::new(Vec::new(), rules)
    }

    /// Guard used when this ruleset is called as a mixin: the condition of
    /// its last selector.
    pub fn guard(&self) -> Option<&Condition> {
        self.selectors.last().and_then(|s| s.condition.as_ref())
    }

    /// Whether any selector carries a CSS guard.
    pub fn has_css_guard(&self) -> bool {
        self.selectors.iter().any(|s| s.condition.is_some())
    }
}

/// One parameter of a parametric mixin.
#[derive(Clone, Debug, PartialEq)]
pub enum MixinParam {
    /// `@name` or `@name: default`.
    Named { name: Name, default: Option<Expr> },
    /// A literal value the argument must equal, e.g. `.m(dark; @c)`.
    Pattern(Expr),
    /// `...` or `@rest...`. Always last.
    Variadic(Option<Name>),
}

impl MixinParam {
    pub fn named(name: Name) -> Self {
        MixinParam::Named {
            name,
            default: None,
        }
    }

    pub fn with_default(name: Name, default: Expr) -> Self {
        MixinParam::Named {
            name,
            default: Some(default),
        }
    }

    pub fn name(&self) -> Option<Name> {
        match self {
            MixinParam::Named { name, .. } => Some(*name),
            MixinParam::Variadic(name) => *name,
            MixinParam::Pattern(_) => None,
        }
    }

    /// Counted toward the required arity. A variadic tail counts as one.
    pub fn is_required(&self) -> bool {
        !matches!(self, MixinParam::Named { default: Some(_), .. })
    }
}

/// `.name(params) when (guard) { body }`.
#[derive(Clone, Debug, PartialEq)]
pub struct MixinDefinition {
    pub name: Name,
    pub params: Vec<MixinParam>,
    pub condition: Option<Condition>,
    pub rules: Rc<[Rule]>,
    pub location: Location,
    pub visibility: Visibility,
}

impl MixinDefinition {
    pub fn new(name: Name, params: Vec<MixinParam>, rules: Vec<Rule>) -> Self {
        MixinDefinition {
            name,
            params,
            condition: None,
            rules: rules.into(),
            location: Location::DUMMY,
            visibility: Visibility::default(),
        }
    }

    /// Parameterless definition wrapping a ruleset body, used when a plain
    /// ruleset is expanded as a mixin.
    pub fn from_ruleset(ruleset: &Ruleset) -> Self {
        MixinDefinition {
            name: Name::EMPTY,
            params: Vec::new(),
            condition: None,
            rules: Rc::clone(&ruleset.rules),
            location: ruleset.location,
            visibility: ruleset.visibility,
        }
    }

    #[must_use]
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    #[must_use]
    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Number of declared parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Parameters without a default, patterns and the variadic tail.
    pub fn required(&self) -> usize {
        self.params.iter().filter(|p| p.is_required()).count()
    }

    pub fn is_variadic(&self) -> bool {
        matches!(self.params.last(), Some(MixinParam::Variadic(_)))
    }

    /// Names of parameters that have a default value.
    pub fn optional_parameters(&self) -> impl Iterator<Item = Name> + '_ {
        self.params.iter().filter_map(|p| match p {
            MixinParam::Named {
                name,
                default: Some(_),
            } => Some(*name),
            _ => None,
        })
    }
}

/// One argument at a call site.
#[derive(Clone, Debug, PartialEq)]
pub struct MixinArg {
    pub name: Option<Name>,
    pub value: Expr,
    /// `@list...`: splice the elements of a list value.
    pub expand: bool,
}

impl MixinArg {
    pub fn positional(value: Expr) -> Self {
        MixinArg {
            name: None,
            value,
            expand: false,
        }
    }

    pub fn named(name: Name, value: Expr) -> Self {
        MixinArg {
            name: Some(name),
            value,
            expand: false,
        }
    }

    pub fn expanded(value: Expr) -> Self {
        MixinArg {
            name: None,
            value,
            expand: true,
        }
    }
}

/// `#ns.m(args) !important;`
#[derive(Clone, Debug, PartialEq)]
pub struct MixinCall {
    pub selector: Selector,
    pub args: Vec<MixinArg>,
    pub important: bool,
    pub location: Location,
    pub visibility: Visibility,
}

impl MixinCall {
    pub fn new(path: &[Name], args: Vec<MixinArg>) -> Self {
        MixinCall {
            selector: Selector::compound(path),
            args,
            important: false,
            location: Location::DUMMY,
            visibility: Visibility::default(),
        }
    }

    #[must_use]
    pub fn important(mut self) -> Self {
        self.important = true;
        self
    }

    #[must_use]
    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Selector path used for lookup.
    pub fn path(&self) -> Vec<Name> {
        self.selector.mixin_elements().collect()
    }

    /// Selector text as written, e.g. `#ns.m`.
    pub fn selector_css(&self, names: &dyn StringLookup) -> String {
        self.selector.to_css(names)
    }
}
