//! Conversion of evaluation errors into diagnostics.
//!
//! # Error Code Ranges
//!
//! - E1xxx: name errors
//! - E2xxx: mixin resolution
//! - E3xxx: argument binding
//! - E4xxx: expression evaluation
//! - E9001: uncategorized

use less_diagnostic::{Diagnostic, ErrorCode};
use less_ir::StringLookup;

use super::{EvalError, EvalErrorKind};

impl EvalErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::UndefinedMixin { .. } => ErrorCode::E1001,
            Self::UndefinedVariable { .. } => ErrorCode::E1002,
            Self::NoMatchingDefinition { .. } => ErrorCode::E2001,
            Self::AmbiguousDefault { .. } => ErrorCode::E2002,
            Self::MixinCallFailed { .. } => ErrorCode::E2003,
            Self::DefaultOutsideGuard => ErrorCode::E2004,
            Self::NotDetachedRuleset { .. } => ErrorCode::E2005,
            Self::RecursionLimit { .. } => ErrorCode::E2006,
            Self::UnknownNamedArgument { .. } => ErrorCode::E3001,
            Self::WrongArgumentCount { .. } => ErrorCode::E3002,
            Self::FunctionArity { .. } => ErrorCode::E3003,
            Self::RecursiveVariable { .. } => ErrorCode::E4001,
            Self::InvalidOperation { .. } => ErrorCode::E4002,
            Self::IncompatibleUnits { .. } => ErrorCode::E4003,
            Self::Custom { .. } => ErrorCode::E9001,
        }
    }

    /// Short label for the primary span.
    pub fn site_label(&self) -> &'static str {
        match self {
            Self::UndefinedMixin { .. } => "no mixin with this name is in scope",
            Self::UndefinedVariable { .. } => "not defined in any enclosing scope",
            Self::NoMatchingDefinition { .. } => "no definition accepts these arguments",
            Self::AmbiguousDefault { .. } => "ambiguous mixin call",
            Self::MixinCallFailed { .. } => "error inside this mixin call",
            Self::DefaultOutsideGuard => "`default()` used here",
            Self::NotDetachedRuleset { .. } => "not a detached ruleset",
            Self::RecursionLimit { .. } => "call nested too deeply",
            Self::UnknownNamedArgument { .. } => "unknown argument name",
            Self::WrongArgumentCount { .. } | Self::FunctionArity { .. } => {
                "wrong number of arguments"
            }
            Self::RecursiveVariable { .. } => "variable refers to itself",
            Self::InvalidOperation { .. } => "unsupported operands",
            Self::IncompatibleUnits { .. } => "incompatible units",
            Self::Custom { .. } => "evaluation failed here",
        }
    }

    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::AmbiguousDefault { .. } => Some(
                "make the `default()` guards of the candidates mutually exclusive".to_owned(),
            ),
            Self::DefaultOutsideGuard => {
                Some("move the `default()` test into a parametric mixin guard".to_owned())
            }
            Self::RecursionLimit { .. } => {
                Some("add a guard that stops the recursion".to_owned())
            }
            Self::UnknownNamedArgument { mixin, .. } => {
                Some(format!("check the parameter names of {mixin}"))
            }
            _ => None,
        }
    }
}

impl EvalError {
    /// Convert into a diagnostic. Causes are listed outermost first.
    pub fn to_diagnostic(&self, names: &dyn StringLookup) -> Diagnostic {
        let mut diag = Diagnostic::new(self.kind.error_code(), &self.message);
        if let Some(location) = self.location {
            diag = diag.at(location.span, self.kind.site_label());
            if let Some(file) = location.file {
                diag = diag.in_file(names.lookup(file));
            }
        }
        for cause in self.chain().skip(1) {
            let at = cause
                .location
                .map(|location| (location.span, cause.kind.site_label()));
            diag = diag.caused_by(&cause.message, at);
        }
        if let Some(help) = self.root_cause().kind.suggestion() {
            diag = diag.with_help(help);
        }
        diag
    }
}
