use std::fmt;

/// Error codes for evaluation diagnostics.
///
/// Format: E#### where the first digit is the family:
/// - E1xxx: name errors (something referenced does not exist)
/// - E2xxx: mixin resolution
/// - E3xxx: argument binding
/// - E4xxx: expression evaluation
/// - E9xxx: internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Name errors (E1xxx)
    /// Mixin call matched no definition or ruleset in scope
    E1001,
    /// Variable is not defined in any enclosing frame
    E1002,

    // Mixin resolution (E2xxx)
    /// Definitions found, none accepted the arguments
    E2001,
    /// Several candidates depend on `default()` in conflicting ways
    E2002,
    /// Error raised while binding or expanding a selected mixin
    E2003,
    /// `default()` used outside a mixin guard
    E2004,
    /// Detached ruleset call on a variable that holds something else
    E2005,
    /// Mixin or detached ruleset calls nested past the depth limit
    E2006,

    // Argument binding (E3xxx)
    /// Named argument does not match any parameter
    E3001,
    /// Too few or too many arguments
    E3002,
    /// Built-in function called with the wrong number of arguments
    E3003,

    // Expression evaluation (E4xxx)
    /// Variable defined in terms of itself
    E4001,
    /// Operation on operands that do not support it
    E4002,
    /// Arithmetic between incompatible units with strict units enabled
    E4003,

    // Internal (E9xxx)
    /// Evaluator invariant violated
    E9001,
}

impl ErrorCode {
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E2006,
        ErrorCode::E3001,
        ErrorCode::E3002,
        ErrorCode::E3003,
        ErrorCode::E4001,
        ErrorCode::E4002,
        ErrorCode::E4003,
        ErrorCode::E9001,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E4001 => "E4001",
            ErrorCode::E4002 => "E4002",
            ErrorCode::E4003 => "E4003",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// Short description, used by `--explain`-style tooling.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "undefined mixin",
            ErrorCode::E1002 => "undefined variable",
            ErrorCode::E2001 => "no matching mixin definition",
            ErrorCode::E2002 => "ambiguous use of `default()`",
            ErrorCode::E2003 => "error inside mixin call",
            ErrorCode::E2004 => "`default()` outside a mixin guard",
            ErrorCode::E2005 => "variable is not a detached ruleset",
            ErrorCode::E2006 => "mixin call recursion limit exceeded",
            ErrorCode::E3001 => "unknown named argument",
            ErrorCode::E3002 => "wrong number of arguments",
            ErrorCode::E3003 => "wrong number of function arguments",
            ErrorCode::E4001 => "recursive variable definition",
            ErrorCode::E4002 => "invalid operation",
            ErrorCode::E4003 => "incompatible units",
            ErrorCode::E9001 => "internal evaluator error",
        }
    }

    pub fn is_name_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    pub fn is_resolution_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    pub fn is_binding_error(&self) -> bool {
        self.as_str().starts_with("E3")
    }

    pub fn is_expression_error(&self) -> bool {
        self.as_str().starts_with("E4")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a code like `"E2002"`. Case-insensitive.
pub fn parse_error_code(text: &str) -> Option<ErrorCode> {
    ErrorCode::ALL
        .iter()
        .copied()
        .find(|code| code.as_str().eq_ignore_ascii_case(text))
}

#[cfg(test)]
mod tests;
