//! The `default()` guard function.
//!
//! `default()` is true for a candidate exactly when no other candidate of the
//! same call matches. Candidates are classified by evaluating their guards
//! twice, once with `default()` preset to false and once to true, and the
//! classification of all candidates is tallied by [`select_group`].

use crate::errors::EvalError;
use crate::value::Value;

/// Current meaning of `default()`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DefaultRegister {
    value: Option<bool>,
    error: Option<EvalError>,
}

impl DefaultRegister {
    pub fn set_value(&mut self, value: Option<bool>) {
        self.value = value;
    }

    /// Make every `default()` call fail with `error`.
    pub fn set_error(&mut self, error: EvalError) {
        self.error = Some(error);
    }

    pub fn reset(&mut self) {
        self.value = None;
        self.error = None;
    }

    /// Result of a `default()` call. `None` when no classification pass is
    /// running; the call is then passed through as written.
    pub fn eval(&self) -> Result<Option<Value>, EvalError> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }
        Ok(self.value.map(Value::boolean))
    }
}

/// How a candidate's guard depends on `default()`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DefaultGroup {
    /// The guard does not depend on `default()`, and holds.
    None,
    /// Holds only when `default()` is true.
    True,
    /// Holds only when `default()` is false.
    False,
    /// Holds in neither pass.
    ExcludedBothFalse,
}

impl DefaultGroup {
    /// Classify from the guard results with `default()` false and true.
    pub fn from_passes(when_false: bool, when_true: bool) -> Self {
        match (when_false, when_true) {
            (false, false) => DefaultGroup::ExcludedBothFalse,
            (true, true) => DefaultGroup::None,
            (false, true) => DefaultGroup::True,
            (true, false) => DefaultGroup::False,
        }
    }
}

/// More than one candidate depends on `default()` and none is unconditional.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Ambiguous;

/// Pick the candidates to expand.
///
/// With any unconditional candidate, `default()` is false, so the `None`
/// and `False` groups win. Otherwise `default()` is true and the single
/// `True` candidate wins; two or more `default()`-dependent candidates are
/// ambiguous. Encounter order is kept.
pub fn select_group<T>(candidates: Vec<(T, DefaultGroup)>) -> Result<Vec<T>, Ambiguous> {
    let count = |group: DefaultGroup| candidates.iter().filter(|(_, g)| *g == group).count();
    let unconditional = count(DefaultGroup::None);
    let wanted = if unconditional > 0 {
        DefaultGroup::False
    } else {
        if count(DefaultGroup::True) + count(DefaultGroup::False) > 1 {
            return Err(Ambiguous);
        }
        DefaultGroup::True
    };
    tracing::trace!(unconditional, ?wanted, "default() tally");

    Ok(candidates
        .into_iter()
        .filter(|(_, group)| *group == DefaultGroup::None || *group == wanted)
        .map(|(candidate, _)| candidate)
        .collect())
}
