//! `EvaluatorBuilder` for creating evaluators with non-default settings.

use smallvec::SmallVec;

use less_ir::StringInterner;

use super::{Evaluator, WellKnownNames};
use crate::default_fn::DefaultRegister;
use crate::functions::FunctionTable;
use crate::options::EvalOptions;
use crate::scope::Frames;

pub struct EvaluatorBuilder<'a> {
    interner: &'a StringInterner,
    options: EvalOptions,
    frames: Frames,
}

impl<'a> EvaluatorBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        EvaluatorBuilder {
            interner,
            options: EvalOptions::default(),
            frames: Frames::new(),
        }
    }

    #[must_use]
    pub fn options(mut self, options: EvalOptions) -> Self {
        self.options = options;
        self
    }

    /// Start from an existing scope chain instead of an empty one.
    #[must_use]
    pub fn frames(mut self, frames: Frames) -> Self {
        self.frames = frames;
        self
    }

    pub fn build(self) -> Evaluator<'a> {
        Evaluator {
            interner: self.interner,
            options: self.options,
            frames: self.frames,
            default_fn: DefaultRegister::default(),
            evaluating: SmallVec::new(),
            call_depth: 0,
            functions: FunctionTable::new(self.interner),
            names: WellKnownNames::new(self.interner),
        }
    }
}
