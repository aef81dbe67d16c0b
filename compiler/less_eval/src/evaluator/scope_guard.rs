//! RAII guard restoring evaluator state.
//!
//! [`ScopedEvaluator`] remembers the scope chain and the `default()`
//! register when it is created and puts both back when dropped, including
//! on early return through `?`. Mixin expansion, guard passes and detached
//! ruleset calls all run inside one.
//!
//! ```text
//! self.with_frames(frames, |scoped| scoped.eval_rules(&rules, None))
//! ```

use std::ops::{Deref, DerefMut};

use super::Evaluator;
use crate::default_fn::DefaultRegister;
use crate::errors::EvalError;
use crate::scope::Frames;

/// Access the evaluator through this guard; it implements `Deref` and
/// `DerefMut`.
pub struct ScopedEvaluator<'guard, 'eval> {
    evaluator: &'guard mut Evaluator<'eval>,
    saved_frames: Frames,
    saved_default: DefaultRegister,
}

impl Drop for ScopedEvaluator<'_, '_> {
    fn drop(&mut self) {
        self.evaluator.frames = std::mem::take(&mut self.saved_frames);
        self.evaluator.default_fn = std::mem::take(&mut self.saved_default);
    }
}

impl<'eval> Deref for ScopedEvaluator<'_, 'eval> {
    type Target = Evaluator<'eval>;

    fn deref(&self) -> &Self::Target {
        self.evaluator
    }
}

impl DerefMut for ScopedEvaluator<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.evaluator
    }
}

impl<'a> Evaluator<'a> {
    /// Guard that restores the current frames and `default()` register on
    /// drop.
    pub fn scoped(&mut self) -> ScopedEvaluator<'_, 'a> {
        let saved_frames = self.frames.clone();
        let saved_default = self.default_fn.clone();
        ScopedEvaluator {
            evaluator: self,
            saved_frames,
            saved_default,
        }
    }

    /// Run `f` with `frames` as the scope chain.
    pub fn with_frames<T, F>(&mut self, frames: Frames, f: F) -> T
    where
        F: FnOnce(&mut ScopedEvaluator<'_, 'a>) -> T,
    {
        let mut scoped = self.scoped();
        scoped.frames = frames;
        f(&mut scoped)
    }

    /// Run `f` with `default()` preset to `value`.
    pub fn with_default_preset<T, F>(&mut self, value: bool, f: F) -> T
    where
        F: FnOnce(&mut ScopedEvaluator<'_, 'a>) -> T,
    {
        let mut scoped = self.scoped();
        scoped.default_fn.reset();
        scoped.default_fn.set_value(Some(value));
        f(&mut scoped)
    }

    /// Run `f` with every `default()` call failing with `error`.
    pub fn with_default_error<T, F>(&mut self, error: EvalError, f: F) -> T
    where
        F: FnOnce(&mut ScopedEvaluator<'_, 'a>) -> T,
    {
        let mut scoped = self.scoped();
        scoped.default_fn.reset();
        scoped.default_fn.set_error(error);
        f(&mut scoped)
    }
}
