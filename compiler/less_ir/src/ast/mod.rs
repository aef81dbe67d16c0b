//! Syntax tree for Less stylesheets.
//!
//! Nodes are immutable once built. Bodies are `Rc<[Rule]>` so a definition,
//! the frame evaluating it and every closure that captured it share one
//! allocation; `Rc` identity is how the evaluator recognises "the same
//! ruleset" when detecting self-recursion.
//!
//! # Module Structure
//!
//! - `expr`: value expressions and literals
//! - `operators`: arithmetic and comparison operators
//! - `condition`: guard conditions
//! - `selector`: selectors, elements, combinators
//! - `rule`: rules, rulesets, mixin definitions and calls
//! - `visibility`: reference-import visibility bookkeeping

mod condition;
mod expr;
mod operators;
mod rule;
mod selector;
mod visibility;

pub use condition::{Condition, ConditionKind};
pub use expr::{Expr, Literal};
pub use operators::{BinaryOp, CompareOp};
pub use rule::{
    Declaration, DetachedCall, MixinArg, MixinCall, MixinDefinition, MixinParam, Rule, Ruleset,
    VariableDecl,
};
pub use selector::{Combinator, Element, ElementValue, Selector};
pub use visibility::Visibility;

#[cfg(test)]
mod tests;
