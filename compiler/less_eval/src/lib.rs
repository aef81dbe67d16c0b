//! Less Eval - mixin resolution and rule evaluation for Less stylesheets.
//!
//! Takes the rule tree built with `less_ir` and evaluates it: variables,
//! nested rulesets, CSS guards, detached rulesets and, above all, mixin
//! calls.
//!
//! # Mixin calls
//!
//! A call such as `#ns.m(1px; @color: red)` is resolved in four steps:
//! - arguments are evaluated in the caller's scope (`mixin::args`),
//! - the scope chain is searched innermost first for definitions and plain
//!   rulesets matching the selector, descending into namespaces (`scope`),
//! - candidates are filtered by recursion and arity and classified by
//!   evaluating their guards with `default()` preset to false and to true
//!   (`mixin::matcher`, `default_fn`),
//! - the selected candidates are expanded with their parameters bound
//!   (`mixin::bind`) and their output concatenated.

mod default_fn;
pub mod errors;
mod evaluator;
mod functions;
mod guard;
mod mixin;
mod options;
mod output;
mod scope;
mod stack;
mod value;

pub use default_fn::{select_group, Ambiguous, DefaultGroup, DefaultRegister};
pub use errors::{ErrorCategory, EvalError, EvalErrorKind, EvalResult};
pub use evaluator::{Evaluator, EvaluatorBuilder, ScopedEvaluator, MAX_CALL_DEPTH};
pub use mixin::{format_call, BoundArgument, BoundArguments};
pub use options::{EvalOptions, EvalOptionsBuilder};
pub use output::{
    declarations, CssComment, CssDeclaration, CssRule, CssRuleset, CssVariable, ExportedMixin,
};
pub use scope::{Bundle, Closure, FoundMixin, Frame, Frames, Namespace, VariableSlot};
pub use stack::ensure_sufficient_stack;
pub use value::{compare, Color, DetachedRuleset, Dimension, Quoted, Value};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=less_eval=debug` or
/// `RUST_LOG=less_eval=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
