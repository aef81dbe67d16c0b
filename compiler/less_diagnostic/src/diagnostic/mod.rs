use std::fmt;

use less_ir::Span;

use crate::ErrorCode;

/// What a labeled span points at.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LabelRole {
    /// The call or expression whose evaluation failed.
    Site,
    /// Where a nested failure happened inside an expansion.
    Cause,
}

/// A span in the stylesheet with a short message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    pub role: LabelRole,
}

/// A failed evaluation, ready to report.
///
/// Nested failures (an error inside a mixin body inside another mixin body)
/// are kept outermost first in `causes`, each with its span when known.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub labels: Vec<Label>,
    pub causes: Vec<String>,
    pub help: Option<String>,
    /// Stylesheet the failing node came from.
    pub file: Option<String>,
}

impl Diagnostic {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            message: message.into(),
            labels: Vec::new(),
            causes: Vec::new(),
            help: None,
            file: None,
        }
    }

    /// Point at the failing call or expression.
    pub fn at(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label {
            span,
            message: message.into(),
            role: LabelRole::Site,
        });
        self
    }

    /// Record a nested failure, labelled when its span is known.
    pub fn caused_by(mut self, message: impl Into<String>, at: Option<(Span, &str)>) -> Self {
        self.causes.push(message.into());
        if let Some((span, label)) = at {
            self.labels.push(Label {
                span,
                message: label.to_owned(),
                role: LabelRole::Cause,
            });
        }
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn in_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn site_span(&self) -> Option<Span> {
        self.labels
            .iter()
            .find(|l| l.role == LabelRole::Site)
            .map(|l| l.span)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error [{}]: {}", self.code, self.message)?;

        for label in &self.labels {
            let marker = match label.role {
                LabelRole::Site => "-->",
                LabelRole::Cause => "  |",
            };
            match &self.file {
                Some(file) => write!(f, "\n  {marker} {file}:{:?}: {}", label.span, label.message)?,
                None => write!(f, "\n  {marker} {:?}: {}", label.span, label.message)?,
            }
        }

        for cause in &self.causes {
            write!(f, "\n  = caused by: {cause}")?;
        }

        if let Some(help) = &self.help {
            write!(f, "\n  = help: {help}")?;
        }

        Ok(())
    }
}
