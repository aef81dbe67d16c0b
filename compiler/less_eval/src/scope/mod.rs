//! Scope chain.
//!
//! `Frames` is a persistent singly linked list of frames, innermost first.
//! Pushing shares the tail, so a definition can capture "the chain as it
//! was when I was found" by cloning one `Rc`, and sibling evaluations never
//! observe each other's frames.
//!
//! A frame is one of:
//! - a ruleset body being evaluated (`original` names the source bundle),
//! - a namespace entered while resolving `#ns.m()`,
//! - the parameter bindings of a mixin expansion.
//!
//! Rulesets grow while they are evaluated: variables and mixins produced by
//! mixin calls inside them are absorbed into the frame's locals so later
//! lookups see them.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use less_ir::{Condition, Expr, MixinDefinition, Name, Rule, Ruleset};

use crate::output::CssRule;
use crate::value::Value;

/// A definition site a mixin call can resolve to.
#[derive(Clone, Debug)]
pub enum Bundle {
    Ruleset(Rc<Ruleset>),
    Mixin(Rc<MixinDefinition>),
}

impl Bundle {
    fn from_rule(rule: &Rule) -> Option<Bundle> {
        match rule {
            Rule::Ruleset(ruleset) => Some(Bundle::Ruleset(Rc::clone(ruleset))),
            Rule::MixinDefinition(definition) => Some(Bundle::Mixin(Rc::clone(definition))),
            _ => None,
        }
    }

    /// Identity comparison.
    pub fn same_as(&self, other: &Bundle) -> bool {
        match (self, other) {
            (Bundle::Ruleset(a), Bundle::Ruleset(b)) => Rc::ptr_eq(a, b),
            (Bundle::Mixin(a), Bundle::Mixin(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn rules(&self) -> &Rc<[Rule]> {
        match self {
            Bundle::Ruleset(ruleset) => &ruleset.rules,
            Bundle::Mixin(definition) => &definition.rules,
        }
    }

    /// Guard deciding whether the bundle applies: the definition guard, or
    /// the CSS guard of a plain ruleset's last selector.
    pub fn guard(&self) -> Option<&Condition> {
        match self {
            Bundle::Ruleset(ruleset) => ruleset.guard(),
            Bundle::Mixin(definition) => definition.condition.as_ref(),
        }
    }

    /// Number of leading `path` elements this bundle's selectors consume.
    fn match_path(&self, path: &[Name]) -> usize {
        match self {
            Bundle::Ruleset(ruleset) => ruleset
                .selectors
                .iter()
                .map(|selector| selector.match_elements(path))
                .find(|&consumed| consumed > 0)
                .unwrap_or(0),
            Bundle::Mixin(definition) => usize::from(path.first() == Some(&definition.name)),
        }
    }

    /// Whether a call without arguments could expand this bundle. Only such
    /// bundles can be descended into as namespaces.
    pub fn accepts_no_arguments(&self) -> bool {
        match self {
            Bundle::Ruleset(_) => true,
            Bundle::Mixin(definition) => {
                let required = definition.required();
                if definition.is_variadic() {
                    required <= 1
                } else {
                    required == 0
                }
            }
        }
    }
}

/// A mixin definition together with the scope it was defined in.
#[derive(Clone, Debug)]
pub struct Closure {
    pub definition: Rc<MixinDefinition>,
    pub frames: Frames,
    /// Expansions of this definition are `!important`.
    pub important: bool,
}

impl Closure {
    pub fn new(definition: Rc<MixinDefinition>, frames: Frames) -> Self {
        Closure {
            definition,
            frames,
            important: false,
        }
    }
}

/// A namespace traversed on the way to a found mixin.
#[derive(Clone, Debug)]
pub struct Namespace {
    pub bundle: Bundle,
    pub closure: Frames,
}

/// Result of a selector lookup in one frame.
#[derive(Clone, Debug)]
pub struct FoundMixin {
    pub bundle: Bundle,
    /// Scope the bundle was defined in.
    pub closure: Frames,
    /// Namespaces descended through, outermost first.
    pub path: Vec<Namespace>,
    pub important: bool,
}

/// How a variable is bound in a frame.
#[derive(Clone, Debug)]
pub enum VariableSlot {
    /// Declared in the source; evaluated lazily at the reference site.
    Source(Expr),
    /// Already a value (parameter, or produced by a mixin call).
    Bound(Value),
}

#[derive(Default)]
struct Locals {
    variables: Vec<(Name, Value)>,
    mixins: Vec<Closure>,
}

/// One node of the scope chain.
pub struct Frame {
    original: Option<Bundle>,
    rules: Rc<[Rule]>,
    locals: RefCell<Locals>,
}

impl Frame {
    /// Frame for a rule list. `original` is the bundle being evaluated.
    pub fn new(rules: Rc<[Rule]>, original: Option<Bundle>) -> Self {
        Frame {
            original,
            rules,
            locals: RefCell::default(),
        }
    }

    /// Empty frame for parameter bindings.
    pub fn parameters() -> Self {
        Frame::new(Vec::new().into(), None)
    }

    pub fn original(&self) -> Option<&Bundle> {
        self.original.as_ref()
    }

    /// Whether this frame evaluates `bundle`.
    pub fn evaluates(&self, bundle: &Bundle) -> bool {
        self.original.as_ref().is_some_and(|own| own.same_as(bundle))
    }

    /// Bind a value in this frame. Later bindings shadow earlier ones.
    pub fn define(&self, name: Name, value: Value) {
        self.locals.borrow_mut().variables.push((name, value));
    }

    /// Make a mixin produced by an expansion visible in this frame.
    pub fn export(&self, closure: Closure) {
        self.locals.borrow_mut().mixins.push(closure);
    }

    /// Record what a mixin call produced: variables and mixins become
    /// visible to later lookups in this frame.
    pub fn absorb(&self, rule: &CssRule) {
        match rule {
            CssRule::Variable(variable) => self.define(variable.name, variable.value.clone()),
            CssRule::Mixin(exported) => self.export(exported.closure.clone()),
            _ => {}
        }
    }

    /// Last binding of `name`. Source declarations win over values
    /// absorbed from mixin calls.
    pub fn variable(&self, name: Name) -> Option<VariableSlot> {
        let declared = self.rules.iter().rev().find_map(|rule| match rule {
            Rule::Variable(decl) if decl.name == name => Some(decl.value.clone()),
            _ => None,
        });
        if let Some(expr) = declared {
            return Some(VariableSlot::Source(expr));
        }
        self.locals
            .borrow()
            .variables
            .iter()
            .rev()
            .find(|(bound, _)| *bound == name)
            .map(|(_, value)| VariableSlot::Bound(value.clone()))
    }

    /// Whether the rule list itself declares `name`.
    pub fn declares_variable(&self, name: Name) -> bool {
        self.rules
            .iter()
            .any(|rule| matches!(rule, Rule::Variable(decl) if decl.name == name))
    }

    fn find(&self, scope: &Frames, path: &[Name], found: &mut Vec<FoundMixin>) {
        for rule in self.rules.iter() {
            if let Some(bundle) = Bundle::from_rule(rule) {
                collect(&bundle, scope, path, &[], false, found);
            }
        }
        for closure in &self.locals.borrow().mixins {
            let bundle = Bundle::Mixin(Rc::clone(&closure.definition));
            collect(&bundle, &closure.frames, path, &[], closure.important, found);
        }
    }
}

fn collect(
    bundle: &Bundle,
    closure: &Frames,
    path: &[Name],
    trail: &[Namespace],
    important: bool,
    found: &mut Vec<FoundMixin>,
) {
    let consumed = bundle.match_path(path);
    if consumed == 0 {
        return;
    }
    if consumed == path.len() {
        found.push(FoundMixin {
            bundle: bundle.clone(),
            closure: closure.clone(),
            path: trail.to_vec(),
            important,
        });
        return;
    }
    if !bundle.accepts_no_arguments() {
        return;
    }

    let inner = closure.push(Rc::new(Frame::new(Rc::clone(bundle.rules()), None)));
    let mut trail = trail.to_vec();
    trail.push(Namespace {
        bundle: bundle.clone(),
        closure: closure.clone(),
    });
    for rule in bundle.rules().iter() {
        if let Some(member) = Bundle::from_rule(rule) {
            collect(&member, &inner, &path[consumed..], &trail, important, found);
        }
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let locals = self.locals.borrow();
        f.debug_struct("Frame")
            .field("rules", &self.rules.len())
            .field("variables", &locals.variables.len())
            .field("mixins", &locals.mixins.len())
            .field("evaluating", &self.original.is_some())
            .finish()
    }
}

struct FrameNode {
    frame: Rc<Frame>,
    next: Frames,
}

/// Persistent scope chain, innermost frame first.
#[derive(Clone, Default)]
pub struct Frames(Option<Rc<FrameNode>>);

impl Frames {
    pub fn new() -> Self {
        Frames(None)
    }

    /// New chain with `frame` in front of `self`.
    #[must_use]
    pub fn push(&self, frame: Rc<Frame>) -> Frames {
        Frames(Some(Rc::new(FrameNode {
            frame,
            next: self.clone(),
        })))
    }

    pub fn head(&self) -> Option<&Rc<Frame>> {
        self.0.as_ref().map(|node| &node.frame)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Frames from innermost to outermost.
    pub fn iter(&self) -> impl Iterator<Item = &Rc<Frame>> {
        std::iter::successors(self.0.as_deref(), |node| node.next.0.as_deref())
            .map(|node| &node.frame)
    }

    /// Every non-empty suffix of the chain, starting with the whole chain.
    pub fn tails(&self) -> impl Iterator<Item = Frames> {
        std::iter::successors(Some(self.clone()), |frames| {
            frames.0.as_ref().map(|node| node.next.clone())
        })
        .take_while(|frames| !frames.is_empty())
    }

    /// `self` followed by `rest`.
    #[must_use]
    pub fn concat(&self, rest: &Frames) -> Frames {
        let own: Vec<&Rc<Frame>> = self.iter().collect();
        own.into_iter()
            .rev()
            .fold(rest.clone(), |chain, frame| chain.push(Rc::clone(frame)))
    }

    /// Mixins matching `path` defined in the innermost frame. Definitions
    /// found there capture this chain as their closure.
    pub fn find_mixins(&self, path: &[Name]) -> Vec<FoundMixin> {
        let mut found = Vec::new();
        if let Some(frame) = self.head() {
            frame.find(self, path, &mut found);
        }
        found
    }

    /// Innermost binding of `name`.
    pub fn variable(&self, name: Name) -> Option<VariableSlot> {
        self.iter().find_map(|frame| frame.variable(name))
    }

    /// Whether any frame is evaluating `bundle`.
    pub fn is_evaluating(&self, bundle: &Bundle) -> bool {
        self.iter().any(|frame| frame.evaluates(bundle))
    }
}

impl fmt::Debug for Frames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
