//! Evaluation errors.
//!
//! `EvalErrorKind` carries the structured data of each failure and renders
//! the user-facing message. `EvalError` adds where it happened and, for
//! failures inside a mixin expansion, the error that caused it.
//!
//! Factory functions are the public way to build errors; they keep `kind`
//! and `message` in sync.

mod diagnostics;

use std::fmt;

use less_ir::Location;

/// Result of evaluating one node.
pub type EvalResult<T> = Result<T, EvalError>;

/// Error family, mirroring how Less reports failures to its users.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Something referenced does not exist.
    Name,
    /// The stylesheet is well formed but cannot be evaluated.
    Runtime,
    /// A construct used where it is not allowed.
    Syntax,
    /// A built-in received bad arguments.
    Argument,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Name => write!(f, "NameError"),
            ErrorCategory::Runtime => write!(f, "RuntimeError"),
            ErrorCategory::Syntax => write!(f, "SyntaxError"),
            ErrorCategory::Argument => write!(f, "ArgumentError"),
        }
    }
}

/// Typed error category for structured diagnostics.
///
/// The `Display` output is the message shown to stylesheet authors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Name
    #[error("{selector} is undefined")]
    UndefinedMixin { selector: String },
    #[error("variable {name} is undefined")]
    UndefinedVariable { name: String },

    // Mixin resolution
    #[error("No matching definition was found for `{call}`")]
    NoMatchingDefinition { call: String },
    #[error("Ambiguous use of `default()` found when matching for `{call}`")]
    AmbiguousDefault { call: String },
    #[error("error evaluating mixin call `{call}`")]
    MixinCallFailed { call: String },
    #[error("it is currently only allowed in parametric mixin guards")]
    DefaultOutsideGuard,
    #[error("Could not evaluate variable call {name}")]
    NotDetachedRuleset { name: String },
    #[error("mixin call recursion limit exceeded ({limit} nested calls)")]
    RecursionLimit { limit: usize },

    // Argument binding
    #[error("Named argument for {mixin} {argument} not found")]
    UnknownNamedArgument { mixin: String, argument: String },
    #[error("wrong number of arguments for {mixin} ({got} for {expected})")]
    WrongArgumentCount {
        mixin: String,
        got: usize,
        expected: usize,
    },
    #[error("{function}() expects {expected} argument(s), got {got}")]
    FunctionArity {
        function: String,
        expected: usize,
        got: usize,
    },

    // Expressions
    #[error("Recursive variable definition for {name}")]
    RecursiveVariable { name: String },
    #[error("Operation `{op}` on an invalid type")]
    InvalidOperation { op: String },
    #[error("Incompatible units. Change the units or use the unit function. Bad units: '{lhs}' and '{rhs}'.")]
    IncompatibleUnits { lhs: String, rhs: String },

    /// Catch-all for errors without a structured kind.
    #[error("{message}")]
    Custom { message: String },
}

impl EvalErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UndefinedMixin { .. } | Self::UndefinedVariable { .. } => ErrorCategory::Name,
            Self::DefaultOutsideGuard => ErrorCategory::Syntax,
            Self::FunctionArity { .. } => ErrorCategory::Argument,
            Self::NoMatchingDefinition { .. }
            | Self::AmbiguousDefault { .. }
            | Self::MixinCallFailed { .. }
            | Self::NotDetachedRuleset { .. }
            | Self::RecursionLimit { .. }
            | Self::UnknownNamedArgument { .. }
            | Self::WrongArgumentCount { .. }
            | Self::RecursiveVariable { .. }
            | Self::InvalidOperation { .. }
            | Self::IncompatibleUnits { .. }
            | Self::Custom { .. } => ErrorCategory::Runtime,
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Equals `kind.to_string()` for factory-built errors.
    pub message: String,
    /// Node that failed. For mixin failures this is the call site.
    pub location: Option<Location>,
    /// Error raised inside the mixin expansion this error wraps.
    #[source]
    pub cause: Option<Box<EvalError>>,
}

impl EvalError {
    /// Error with a free-form message.
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_kind(EvalErrorKind::Custom {
            message: message.into(),
        })
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            location: None,
            cause: None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Attach a location, replacing any existing one.
    #[must_use]
    pub fn at(mut self, location: impl Into<Location>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Attach a location only if the error does not have one yet.
    #[must_use]
    pub fn located(mut self, location: impl Into<Location>) -> Self {
        if self.location.is_none() {
            self.location = Some(location.into());
        }
        self
    }

    #[must_use]
    pub fn with_cause(mut self, cause: EvalError) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Chain of causes, outermost first, starting with `self`.
    pub fn chain(&self) -> impl Iterator<Item = &EvalError> {
        std::iter::successors(Some(self), |e| e.cause.as_deref())
    }

    /// Innermost error of the chain.
    pub fn root_cause(&self) -> &EvalError {
        self.chain().last().unwrap_or(self)
    }
}

// Factories

#[cold]
pub fn undefined_mixin(selector: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedMixin {
        selector: selector.into(),
    })
}

#[cold]
pub fn undefined_variable(name: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable { name: name.into() })
}

#[cold]
pub fn no_matching_definition(call: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NoMatchingDefinition { call: call.into() })
}

#[cold]
pub fn ambiguous_default(call: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::AmbiguousDefault { call: call.into() })
}

#[cold]
pub fn mixin_call_failed(call: impl Into<String>, cause: EvalError) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MixinCallFailed { call: call.into() }).with_cause(cause)
}

#[cold]
pub fn default_outside_guard() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DefaultOutsideGuard)
}

#[cold]
pub fn not_detached_ruleset(name: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotDetachedRuleset { name: name.into() })
}

#[cold]
pub fn recursion_limit(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimit { limit })
}

#[cold]
pub fn unknown_named_argument(mixin: impl Into<String>, argument: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownNamedArgument {
        mixin: mixin.into(),
        argument: argument.into(),
    })
}

#[cold]
pub fn wrong_argument_count(mixin: impl Into<String>, got: usize, expected: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongArgumentCount {
        mixin: mixin.into(),
        got,
        expected,
    })
}

#[cold]
pub fn function_arity(function: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::FunctionArity {
        function: function.to_owned(),
        expected,
        got,
    })
}

#[cold]
pub fn recursive_variable(name: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursiveVariable { name: name.into() })
}

#[cold]
pub fn invalid_operation(op: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidOperation { op: op.to_owned() })
}

#[cold]
pub fn incompatible_units(lhs: &str, rhs: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IncompatibleUnits {
        lhs: lhs.to_owned(),
        rhs: rhs.to_owned(),
    })
}
