//! Tree-walking evaluator for Less rule lists.
//!
//! The evaluator owns the current scope chain and the `default()` register.
//! Everything that changes either of them for a nested evaluation goes
//! through [`ScopedEvaluator`], which restores both when it is dropped.
//!
//! # Modules
//!
//! - `ruleset` - rule lists, nested rulesets, CSS guards, detached calls
//! - `expr` - expressions, variables, function calls
//! - `crate::guard` - guard conditions
//! - `crate::mixin` - mixin call resolution and expansion

mod builder;
mod expr;
mod ruleset;
mod scope_guard;

pub use builder::EvaluatorBuilder;
pub use scope_guard::ScopedEvaluator;

use less_ir::{Name, Ruleset, StringInterner};
use smallvec::SmallVec;

use crate::default_fn::DefaultRegister;
use crate::errors::{recursion_limit, EvalResult};
use crate::functions::FunctionTable;
use crate::options::EvalOptions;
use crate::output::CssRule;
use crate::scope::Frames;
use crate::stack::ensure_sufficient_stack;

/// Mixin and detached ruleset calls that may be open at once.
pub const MAX_CALL_DEPTH: usize = 500;

/// Names the evaluator compares against on hot paths, interned once.
#[derive(Clone, Copy)]
pub(crate) struct WellKnownNames {
    pub(crate) arguments: Name,
    pub(crate) default: Name,
}

impl WellKnownNames {
    fn new(interner: &StringInterner) -> Self {
        WellKnownNames {
            arguments: interner.intern("@arguments"),
            default: interner.intern("default"),
        }
    }
}

/// Evaluates rule lists, expanding mixin calls.
///
/// One evaluator serves one compilation. It is not `Sync`: scope frames are
/// shared through `Rc`.
pub struct Evaluator<'a> {
    pub(crate) interner: &'a StringInterner,
    pub(crate) options: EvalOptions,
    pub(crate) frames: Frames,
    pub(crate) default_fn: DefaultRegister,
    /// Variables whose declarations are being evaluated, innermost last.
    pub(crate) evaluating: SmallVec<[Name; 8]>,
    /// Open mixin and detached ruleset calls.
    pub(crate) call_depth: usize,
    pub(crate) functions: FunctionTable,
    pub(crate) names: WellKnownNames,
}

impl<'a> Evaluator<'a> {
    /// Evaluator with default options and an empty scope.
    pub fn new(interner: &'a StringInterner) -> Self {
        EvaluatorBuilder::new(interner).build()
    }

    pub fn builder(interner: &'a StringInterner) -> EvaluatorBuilder<'a> {
        EvaluatorBuilder::new(interner)
    }

    pub fn options(&self) -> EvalOptions {
        self.options
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Current scope chain, innermost frame first.
    pub fn frames(&self) -> &Frames {
        &self.frames
    }

    /// Evaluate a stylesheet root.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn evaluate(&mut self, root: &Ruleset) -> EvalResult<Vec<CssRule>> {
        self.eval_rules(&root.rules, None)
    }

    /// Run one level of call expansion, failing past [`MAX_CALL_DEPTH`].
    ///
    /// The depth is restored on every exit, including errors.
    pub(crate) fn nested_call<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> EvalResult<T>,
    ) -> EvalResult<T> {
        if self.call_depth >= MAX_CALL_DEPTH {
            return Err(recursion_limit(MAX_CALL_DEPTH));
        }
        self.call_depth += 1;
        let result = ensure_sufficient_stack(|| f(self));
        self.call_depth -= 1;
        result
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
