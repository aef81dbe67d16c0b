//! Diagnostics for the Less evaluator.
//!
//! Every evaluation failure converts into a [`Diagnostic`] carrying:
//! - an [`ErrorCode`] for searchability
//! - a message saying what went wrong
//! - a site label at the call or expression that failed
//! - the chain of nested causes, outermost first

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Label, LabelRole};
pub use error_code::{parse_error_code, ErrorCode};
