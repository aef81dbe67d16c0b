//! Less IR - syntax tree and shared primitives
//!
//! This crate holds the data the evaluator consumes:
//! - Spans and locations for diagnostics
//! - Names for interned identifiers (`@var`, `.mixin`, `#ns`)
//! - Units and their conversion groups
//! - AST nodes (rules, rulesets, mixin definitions and calls, expressions,
//!   guard conditions)
//!
//! Nothing here evaluates anything. Trees are built by a parser (not part of
//! this workspace) or directly through the constructors on each node.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod interner;
mod name;
mod span;
mod unit;

pub use ast::{
    BinaryOp, Combinator, CompareOp, Condition, ConditionKind, Declaration, DetachedCall,
    Element, ElementValue, Expr, Literal, MixinArg, MixinCall, MixinDefinition, MixinParam, Rule,
    Ruleset, Selector, VariableDecl, Visibility,
};
pub use interner::{InternError, StringInterner, StringLookup};
pub use name::Name;
pub use span::{Location, Span};
pub use unit::{Unit, UnitGroup};
