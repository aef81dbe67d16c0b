//! Evaluation options.

/// Settings for one evaluation run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalOptions {
    /// Minified output requested. Carried for the serializer; evaluation
    /// does not depend on it.
    pub compress: bool,
    /// Arithmetic between incompatible units fails instead of keeping the
    /// left operand's unit.
    pub strict_units: bool,
    /// A call whose candidates were all excluded by their guards fails with
    /// a no-match error instead of expanding to nothing.
    pub strict_guards: bool,
}

impl EvalOptions {
    pub fn builder() -> EvalOptionsBuilder {
        EvalOptionsBuilder::default()
    }
}

/// Builder for [`EvalOptions`].
#[derive(Copy, Clone, Debug, Default)]
pub struct EvalOptionsBuilder {
    options: EvalOptions,
}

impl EvalOptionsBuilder {
    #[must_use]
    pub fn compress(mut self, compress: bool) -> Self {
        self.options.compress = compress;
        self
    }

    #[must_use]
    pub fn strict_units(mut self, strict: bool) -> Self {
        self.options.strict_units = strict;
        self
    }

    #[must_use]
    pub fn strict_guards(mut self, strict: bool) -> Self {
        self.options.strict_guards = strict;
        self
    }

    pub fn build(self) -> EvalOptions {
        self.options
    }
}
